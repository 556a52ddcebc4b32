use std::collections::HashMap;
use std::io::Write;

use textsum::core::state::AppState;
use textsum::errors::StartupError;

fn lookup_from(pairs: &[(&str, String)]) -> impl Fn(&str) -> Option<String> + use<> {
    let map: HashMap<String, String> = pairs
        .iter()
        .map(|(k, v)| ((*k).to_string(), v.clone()))
        .collect();
    move |name: &str| map.get(name).cloned()
}

/// Secret store disabled; the key is read only from `dotenv_path`.
fn local_only(env_key: &str, dotenv_path: &str) -> Vec<(&'static str, String)> {
    vec![
        ("TEXTSUM_SECRET_PARAMETER", String::new()),
        ("TEXTSUM_ENV_KEY", env_key.to_string()),
        ("TEXTSUM_DOTENV_PATH", dotenv_path.to_string()),
    ]
}

#[tokio::test]
async fn test_bootstrap_rejects_invalid_config() {
    let lookup = lookup_from(&[("GEMINI_TIMEOUT_SECS", "0".to_string())]);

    let err = AppState::bootstrap(lookup).await.err().unwrap();

    match err {
        StartupError::Config(inner) => assert!(inner.to_string().contains("GEMINI_TIMEOUT_SECS")),
        other => panic!("expected Config, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bootstrap_without_key_is_fatal() {
    let lookup = lookup_from(&local_only(
        "TEXTSUM_TEST_STARTUP_UNSET_KEY",
        "/nonexistent/textsum/.env",
    ));

    let err = AppState::bootstrap(lookup).await.err().unwrap();

    match err {
        StartupError::MissingCredential { env_key, .. } => {
            assert_eq!(env_key, "TEXTSUM_TEST_STARTUP_UNSET_KEY");
        }
        other => panic!("expected MissingCredential, got {other:?}"),
    }
}

#[tokio::test]
async fn test_bootstrap_with_dotenv_key_is_configured() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "TEXTSUM_TEST_STARTUP_DOTENV_KEY=AIza-startup").unwrap();
    let mut pairs = local_only(
        "TEXTSUM_TEST_STARTUP_DOTENV_KEY",
        file.path().to_str().unwrap(),
    );
    pairs.push(("GEMINI_MODEL", "gemini-test".to_string()));

    let state = AppState::bootstrap(lookup_from(&pairs)).await.unwrap();

    assert!(state.summarizer().is_some());
    assert_eq!(state.config().gemini_model, "gemini-test");
}
