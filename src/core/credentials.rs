//! API key resolution.
//!
//! The key is looked up in the managed secret store (SSM Parameter Store)
//! first and in the local environment second. The first source that yields
//! a non-empty value wins; sources are never merged.

use std::fmt;
use std::path::PathBuf;

use async_trait::async_trait;
use aws_sdk_ssm::Client as SsmClient;
use tracing::{info, warn};

use super::config::AppConfig;
use crate::errors::{SecretSourceError, StartupError};

/// Opaque API token. `Debug` never prints the value.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Credential(***)")
    }
}

#[async_trait]
pub trait SecretSource: Send + Sync {
    /// Short label used in logs.
    fn label(&self) -> &'static str;

    /// Returns `Ok(None)` when the source has no entry for this key.
    async fn fetch(&self) -> Result<Option<String>, SecretSourceError>;
}

/// Reads one parameter from SSM Parameter Store, decrypting `SecureString`s.
pub struct SsmSecretStore {
    client: SsmClient,
    parameter_name: String,
}

impl SsmSecretStore {
    #[must_use]
    pub fn new(client: SsmClient, parameter_name: impl Into<String>) -> Self {
        Self {
            client,
            parameter_name: parameter_name.into(),
        }
    }

    pub async fn from_env(parameter_name: impl Into<String>) -> Self {
        let shared = aws_config::from_env().load().await;
        Self::new(SsmClient::new(&shared), parameter_name)
    }
}

#[async_trait]
impl SecretSource for SsmSecretStore {
    fn label(&self) -> &'static str {
        "ssm"
    }

    async fn fetch(&self) -> Result<Option<String>, SecretSourceError> {
        match self
            .client
            .get_parameter()
            .name(&self.parameter_name)
            .with_decryption(true)
            .send()
            .await
        {
            Ok(resp) => Ok(resp
                .parameter
                .and_then(|param| param.value)
                .filter(|v| !v.trim().is_empty())),
            Err(e) => {
                let not_found = e
                    .as_service_error()
                    .is_some_and(|se| se.is_parameter_not_found());
                if not_found {
                    Ok(None)
                } else {
                    Err(SecretSourceError::AwsError(format!("ssm get_parameter: {e}")))
                }
            }
        }
    }
}

/// Looks the key up in the process environment, then in a dotenv file.
///
/// The dotenv file is parsed without touching the process environment, so
/// an exported variable always shadows the file.
pub struct EnvSource {
    key: String,
    dotenv_path: Option<PathBuf>,
}

impl EnvSource {
    #[must_use]
    pub fn new(key: impl Into<String>, dotenv_path: Option<PathBuf>) -> Self {
        Self {
            key: key.into(),
            dotenv_path,
        }
    }

    fn read_dotenv(&self) -> Result<Option<String>, SecretSourceError> {
        let Some(path) = &self.dotenv_path else {
            return Ok(None);
        };
        if !path.exists() {
            return Ok(None);
        }

        let entries = dotenvy::from_path_iter(path)
            .map_err(|e| SecretSourceError::DotenvError(format!("{}: {e}", path.display())))?;
        for entry in entries {
            let (key, value) = entry
                .map_err(|e| SecretSourceError::DotenvError(format!("{}: {e}", path.display())))?;
            if key == self.key {
                return Ok(Some(value).filter(|v| !v.trim().is_empty()));
            }
        }
        Ok(None)
    }
}

#[async_trait]
impl SecretSource for EnvSource {
    fn label(&self) -> &'static str {
        "env"
    }

    async fn fetch(&self) -> Result<Option<String>, SecretSourceError> {
        if let Some(value) = std::env::var(&self.key)
            .ok()
            .filter(|v| !v.trim().is_empty())
        {
            return Ok(Some(value));
        }
        self.read_dotenv()
    }
}

/// Ordered list of credential sources.
pub struct CredentialResolver {
    sources: Vec<Box<dyn SecretSource>>,
    secret_name: String,
    env_key: String,
}

impl CredentialResolver {
    #[must_use]
    pub fn new(sources: Vec<Box<dyn SecretSource>>, secret_name: &str, env_key: &str) -> Self {
        Self {
            sources,
            secret_name: secret_name.to_string(),
            env_key: env_key.to_string(),
        }
    }

    /// Secret store first (unless disabled in config), environment second.
    pub async fn from_config(config: &AppConfig) -> Self {
        let mut sources: Vec<Box<dyn SecretSource>> = Vec::with_capacity(2);
        if let Some(name) = &config.secret_parameter_name {
            sources.push(Box::new(SsmSecretStore::from_env(name.clone()).await));
        }
        sources.push(Box::new(EnvSource::new(
            config.env_key_name.clone(),
            Some(config.dotenv_path.clone()),
        )));

        Self::new(
            sources,
            config.secret_parameter_name.as_deref().unwrap_or("<disabled>"),
            &config.env_key_name,
        )
    }

    /// # Errors
    ///
    /// Returns [`StartupError::MissingCredential`] when no source yields a
    /// value. A source that fails to answer is logged and skipped.
    pub async fn resolve(&self) -> Result<Credential, StartupError> {
        for source in &self.sources {
            match source.fetch().await {
                Ok(Some(value)) => {
                    info!(source = source.label(), "Resolved Gemini API key");
                    return Ok(Credential::new(value.trim()));
                }
                Ok(None) => {
                    info!(source = source.label(), "No Gemini API key in source");
                }
                Err(e) => {
                    warn!(source = source.label(), error = %e, "Credential source unavailable");
                }
            }
        }

        Err(StartupError::MissingCredential {
            secret_name: self.secret_name.clone(),
            env_key: self.env_key.clone(),
        })
    }
}
