use serde_json::Value;
use tracing::error;
use utoipa::OpenApi;

use super::dto::{ErrorBody, InfoResponse, SummarizeRequestBody, SummaryResponse};
use super::handler;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Simple Text Summarizer API (Gemini)",
        description = "An API that uses Google Gemini to summarize text."
    ),
    paths(handler::root_info, handler::summarize_endpoint),
    components(schemas(SummarizeRequestBody, SummaryResponse, ErrorBody, InfoResponse)),
    tags(
        (name = "General", description = "Service information"),
        (name = "Summarization", description = "Text summarization")
    )
)]
pub struct ApiDoc;

/// The OpenAPI document served at `/docs`.
#[must_use]
pub fn openapi_json() -> Value {
    serde_json::to_value(ApiDoc::openapi()).unwrap_or_else(|e| {
        error!("Failed to serialize OpenAPI document: {}", e);
        Value::Null
    })
}
