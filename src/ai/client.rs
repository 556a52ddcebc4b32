//! LLM (Gemini) API client module
//!
//! Encapsulates the single `generateContent` call used to produce summaries.

use async_trait::async_trait;
use reqwest::Client;
use reqwest::header::{CONTENT_TYPE, HeaderMap, HeaderValue};
use serde_json::{Value, json};
use tracing::{debug, error, info};
use url::Url;

use super::response::{GenerateContentResponse, ProviderReply};
use crate::core::config::AppConfig;
use crate::core::credentials::Credential;
use crate::errors::{ProviderError, StartupError};

/// Sampling temperature for every summary request.
pub const SUMMARY_TEMPERATURE: f64 = 0.7;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// Anything that can turn a prompt into a normalized provider reply.
///
/// Implementations are the only place transport failures are caught; they
/// surface as `Err`, never as a panic.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<ProviderReply, ProviderError>;
}

/// Gemini API client for generating summaries
pub struct GeminiClient {
    http: Client,
    endpoint: Url,
    model_name: String,
}

impl GeminiClient {
    /// Configures the HTTP client with the API key baked into its default
    /// headers.
    ///
    /// # Errors
    ///
    /// Returns [`StartupError::CredentialRejected`] if the key cannot be used
    /// as a header value, the endpoint URL cannot be built, or the HTTP
    /// client fails to initialize.
    pub fn new(credential: &Credential, config: &AppConfig) -> Result<Self, StartupError> {
        let mut key_value = HeaderValue::from_str(credential.expose()).map_err(|e| {
            StartupError::CredentialRejected(format!("API key is not a valid header value: {e}"))
        })?;
        key_value.set_sensitive(true);

        let mut headers = HeaderMap::new();
        headers.insert(API_KEY_HEADER, key_value);
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let http = Client::builder()
            .timeout(config.request_timeout)
            .default_headers(headers)
            .build()
            .map_err(|e| {
                StartupError::CredentialRejected(format!("Failed to build Gemini HTTP client: {e}"))
            })?;

        let endpoint = generate_content_url(&config.gemini_base_url, &config.gemini_model)?;

        info!(model = %config.gemini_model, "Gemini client configured");

        Ok(Self {
            http,
            endpoint,
            model_name: config.gemini_model.clone(),
        })
    }

    #[must_use]
    pub fn model_name(&self) -> &str {
        &self.model_name
    }
}

/// Appends the `generateContent` route to the base, keeping any path prefix
/// the base already carries (`https://proxy/gemini` stays under `/gemini/`).
fn generate_content_url(base: &Url, model: &str) -> Result<Url, StartupError> {
    let mut base = base.clone();
    if !base.path().ends_with('/') {
        let with_slash = format!("{}/", base.path());
        base.set_path(&with_slash);
    }
    base.join(&format!("v1beta/models/{model}:generateContent"))
        .map_err(|e| StartupError::CredentialRejected(format!("Invalid Gemini endpoint: {e}")))
}

#[must_use]
pub fn build_request_body(prompt: &str) -> Value {
    json!({
        "contents": [{
            "role": "user",
            "parts": [{ "text": prompt }]
        }],
        "generationConfig": {
            "temperature": SUMMARY_TEMPERATURE
        }
    })
}

#[async_trait]
impl TextGenerator for GeminiClient {
    async fn generate(&self, prompt: &str) -> Result<ProviderReply, ProviderError> {
        #[cfg(feature = "debug-logs")]
        debug!("Using Gemini prompt:\n{}", prompt);

        #[cfg(not(feature = "debug-logs"))]
        debug!(prompt_chars = prompt.chars().count(), "Sending prompt to Gemini");

        let response = self
            .http
            .post(self.endpoint.clone())
            .json(&build_request_body(prompt))
            .send()
            .await
            .map_err(|e| ProviderError::HttpError(format!("Gemini API request failed: {e}")))?;

        let status = response.status();
        let body = response.text().await.map_err(|e| {
            ProviderError::HttpError(format!(
                "Failed to read Gemini response body (status {status}): {e}"
            ))
        })?;

        if !status.is_success() {
            error!(status = status.as_u16(), "Gemini API returned an error status");
            return Err(ProviderError::StatusError {
                status: status.as_u16(),
                body,
            });
        }

        let reply = GenerateContentResponse::from_json(&body)?.into_reply();
        if reply == ProviderReply::Unexpected {
            error!("Gemini API response unexpected or empty. Full response: {}", body);
        }
        Ok(reply)
    }
}
