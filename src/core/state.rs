use std::sync::Arc;

use tracing::info;

use super::config::AppConfig;
use super::credentials::CredentialResolver;
use crate::ai::GeminiClient;
use crate::errors::StartupError;
use crate::features::summarize::Summarizer;

/// Process-wide state, built once at startup and only read afterwards.
pub struct AppState {
    config: AppConfig,
    summarizer: Option<Summarizer>,
}

impl AppState {
    #[must_use]
    pub fn new(config: AppConfig, summarizer: Summarizer) -> Self {
        Self {
            config,
            summarizer: Some(summarizer),
        }
    }

    /// Builds the serving state from the process environment.
    ///
    /// # Errors
    ///
    /// See [`AppState::bootstrap`].
    pub async fn from_env() -> Result<Self, StartupError> {
        Self::bootstrap(|name| std::env::var(name).ok()).await
    }

    /// Loads config, resolves the API key and configures the Gemini client.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::Config`] for invalid settings,
    /// [`StartupError::MissingCredential`] when no source has a key and
    /// [`StartupError::CredentialRejected`] when the key cannot be used.
    pub async fn bootstrap<F>(lookup: F) -> Result<Self, StartupError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let config = AppConfig::from_lookup(lookup)?;
        let credential = CredentialResolver::from_config(&config).await.resolve().await?;
        let client = GeminiClient::new(&credential, &config)?;
        info!(model = %config.gemini_model, "Startup complete");

        Ok(Self::new(config, Summarizer::new(Arc::new(client))))
    }

    /// State without a provider client. Every summarization surface answers
    /// with a configuration error.
    #[must_use]
    pub fn unconfigured(config: AppConfig) -> Self {
        Self {
            config,
            summarizer: None,
        }
    }

    #[must_use]
    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    #[must_use]
    pub fn summarizer(&self) -> Option<&Summarizer> {
        self.summarizer.as_ref()
    }
}
