use thiserror::Error;

/// Failures that stop the process before it serves any request.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error(
        "Google API key not found: set the '{secret_name}' secret parameter or the '{env_key}' environment variable"
    )]
    MissingCredential { secret_name: String, env_key: String },

    #[error("Failed to configure Gemini client: {0}")]
    CredentialRejected(String),

    #[error("Invalid configuration: {0}")]
    Config(#[from] ConfigError),
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{name}: invalid value '{value}': {reason}")]
    InvalidValue {
        name: &'static str,
        value: String,
        reason: String,
    },
}

/// Raised by a credential source that could not be queried.
#[derive(Debug, Error)]
pub enum SecretSourceError {
    #[error("Failed to interact with AWS services: {0}")]
    AwsError(String),

    #[error("Failed to read dotenv file: {0}")]
    DotenvError(String),
}

/// Everything that can go wrong during a single call to the model provider.
///
/// The `Display` output carries provider detail and is meant for operator
/// logs only.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Failed to send HTTP request: {0}")]
    HttpError(String),

    #[error("Gemini API error (status {status}): {body}")]
    StatusError { status: u16, body: String },

    #[error("Failed to parse Gemini response: {0}")]
    DecodeError(String),
}

impl From<serde_json::Error> for ProviderError {
    fn from(error: serde_json::Error) -> Self {
        ProviderError::DecodeError(error.to_string())
    }
}

/// Caller-correctable input problems, detected before the provider is called.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Please enter some text to summarize.")]
    EmptyInput,

    #[error("target_word_count must be between {min} and {max}, got {value}")]
    WordCountOutOfRange { value: i64, min: u32, max: u32 },
}
