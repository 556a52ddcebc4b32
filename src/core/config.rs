use std::env;
use std::path::PathBuf;
use std::time::Duration;

use url::Url;

use crate::errors::ConfigError;

pub const DEFAULT_SECRET_PARAMETER: &str = "GOOGLE_GEMINI_API_KEY";
pub const DEFAULT_ENV_KEY: &str = "GOOGLE_API_KEY";
pub const DEFAULT_DOTENV_PATH: &str = ".env";
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-1.5-flash-latest";
pub const DEFAULT_GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// SSM parameter holding the API key. `None` skips the secret store.
    pub secret_parameter_name: Option<String>,
    pub env_key_name: String,
    pub dotenv_path: PathBuf,
    pub gemini_model: String,
    pub gemini_base_url: Url,
    pub request_timeout: Duration,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidValue`] when the base URL does not parse
    /// or the timeout is not a positive integer.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let secret_parameter_name = match lookup("TEXTSUM_SECRET_PARAMETER") {
            Some(name) if name.trim().is_empty() => None,
            Some(name) => Some(name.trim().to_string()),
            None => Some(DEFAULT_SECRET_PARAMETER.to_string()),
        };

        let env_key_name = lookup("TEXTSUM_ENV_KEY")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_ENV_KEY.to_string());

        let dotenv_path = lookup("TEXTSUM_DOTENV_PATH")
            .filter(|s| !s.trim().is_empty())
            .map_or_else(|| PathBuf::from(DEFAULT_DOTENV_PATH), PathBuf::from);

        let gemini_model = lookup("GEMINI_MODEL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string());

        let raw_base = lookup("GEMINI_API_BASE_URL")
            .filter(|s| !s.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string());
        let gemini_base_url = Url::parse(&raw_base).map_err(|e| ConfigError::InvalidValue {
            name: "GEMINI_API_BASE_URL",
            value: raw_base.clone(),
            reason: e.to_string(),
        })?;

        let request_timeout = match lookup("GEMINI_TIMEOUT_SECS") {
            None => Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                Ok(_) => {
                    return Err(ConfigError::InvalidValue {
                        name: "GEMINI_TIMEOUT_SECS",
                        value: raw,
                        reason: "must be greater than zero".to_string(),
                    });
                }
                Err(e) => {
                    return Err(ConfigError::InvalidValue {
                        name: "GEMINI_TIMEOUT_SECS",
                        value: raw,
                        reason: e.to_string(),
                    });
                }
            },
        };

        Ok(Self {
            secret_parameter_name,
            env_key_name,
            dotenv_path,
            gemini_model,
            gemini_base_url,
            request_timeout,
        })
    }
}
