/// textsum - A Lambda-hosted text summarizer backed by Google Gemini.
///
/// One API Gateway Lambda serves two surfaces over the same summarization
/// core:
/// 1. A JSON endpoint (`POST /summarize`)
/// 2. A server-rendered HTML form (`/app`)
///
/// # Architecture
///
/// The system uses:
/// - AWS Lambda for serverless execution
/// - SSM Parameter Store (or a local `.env` file) for the API key
/// - reqwest for the Gemini `generateContent` REST call
/// - Tokio for async runtime
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use textsum::ai::GeminiClient;
/// use textsum::core::config::AppConfig;
/// use textsum::core::credentials::CredentialResolver;
/// use textsum::core::models::{SummarizationRequest, SummarizationResult};
/// use textsum::features::Summarizer;
///
/// #[tokio::main]
/// async fn main() -> Result<(), Box<dyn std::error::Error>> {
///     textsum::setup_logging();
///
///     let config = AppConfig::from_env()?;
///     let credential = CredentialResolver::from_config(&config).await.resolve().await?;
///     let client = GeminiClient::new(&credential, &config)?;
///     let summarizer = Summarizer::new(Arc::new(client));
///
///     let request = SummarizationRequest::new("Rust is a systems programming language...", 50)?;
///     match summarizer.summarize(&request).await {
///         SummarizationResult::Success { summary } => println!("Summary: {}", summary),
///         SummarizationResult::Failure { message, .. } => eprintln!("Error: {}", message),
///     }
///
///     Ok(())
/// }
/// ```
// Module declarations
pub mod ai;
pub mod api;
pub mod core;
pub mod errors;
pub mod features;

/// Configure structured logging with JSON format for AWS Lambda environments.
///
/// This function sets up tracing-subscriber with a JSON formatter suitable for
/// `CloudWatch` Logs integration. It should be called once at process start.
///
/// # Example
///
/// ```
/// textsum::setup_logging();
/// ```
pub fn setup_logging() {
    use tracing_subscriber::prelude::*;
    let fmt_layer = tracing_subscriber::fmt::layer().json().with_target(true);

    // A second call (tests, repeated cold-start hooks) keeps the first subscriber.
    let _ = tracing_subscriber::registry().with(fmt_layer).try_init();
}
