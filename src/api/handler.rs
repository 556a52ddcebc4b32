//! API Lambda handler - thin router over the summarization surfaces.
//!
//! This module handles:
//! - Request extraction (method, path, body) from API Gateway events
//! - The JSON summarization endpoint (`POST /summarize`)
//! - The HTML form (`GET`/`POST /app`, delegated to `form`)
//! - Informational routes (`GET /`, `GET /docs`)

use lambda_runtime::{Error, LambdaEvent};
use serde_json::Value;
use tracing::{error, info, warn};
use uuid::Uuid;

use super::dto::{InfoResponse, SummarizeRequestBody, SummaryResponse};
use super::form::{self, FormView};
use super::parsing::{HttpRequest, get_header_value};
use super::{docs, helpers};
use crate::core::models::{SummarizationRequest, SummarizationResult};
use crate::core::state::AppState;

pub const WELCOME_MESSAGE: &str = "Welcome to the Simple Text Summarizer API (Gemini). Go to /docs for API documentation.";
pub const NOT_CONFIGURED_MESSAGE: &str =
    "Google API Key not configured or configuration failed at startup.";

const KNOWN_PATHS: [&str; 4] = ["/", "/docs", "/summarize", "/app"];

/// Lambda handler for the API entrypoint.
///
/// # Errors
///
/// Never fails for a well-formed event; every request outcome, including
/// provider failures, is returned as an HTTP response payload.
pub async fn function_handler(state: &AppState, event: LambdaEvent<Value>) -> Result<Value, Error> {
    Ok(route(state, &event.payload).await)
}

/// Routes one API Gateway proxy event to its surface.
#[tracing::instrument(level = "info", skip_all, fields(request_id = %Uuid::new_v4()))]
pub async fn route(state: &AppState, payload: &Value) -> Value {
    let request = match HttpRequest::from_event(payload) {
        Ok(request) => request,
        Err(response) => return response,
    };

    let trace_id = payload
        .get("headers")
        .and_then(|headers| get_header_value(headers, "X-Amzn-Trace-Id"))
        .unwrap_or("");
    info!(method = %request.method, path = %request.path, xray_trace_id = %trace_id, "Request received");

    match (request.method.as_str(), request.path.as_str()) {
        ("GET", "/") => helpers::ok_json(&root_info()),
        ("GET", "/docs") => helpers::ok_json(&docs::openapi_json()),
        ("POST", "/summarize") => summarize_endpoint(state, &request.body).await,
        ("GET", "/app") => helpers::html_response(
            200,
            form::render_page(&FormView::initial(), &state.config().gemini_model),
        ),
        ("POST", "/app") => {
            let view = form::submit(state, &request.body).await;
            helpers::html_response(200, form::render_page(&view, &state.config().gemini_model))
        }
        (_, path) if KNOWN_PATHS.contains(&path) => {
            warn!(method = %request.method, path = %path, "Method not allowed");
            helpers::err_response(405, "Method Not Allowed")
        }
        (_, path) => {
            warn!(path = %path, "No route for path");
            helpers::err_response(404, "Not Found")
        }
    }
}

/// Static welcome payload.
#[utoipa::path(
    get,
    path = "/",
    tag = "General",
    responses(
        (status = 200, description = "Welcome message", body = InfoResponse),
    )
)]
#[must_use]
pub fn root_info() -> InfoResponse {
    InfoResponse {
        message: WELCOME_MESSAGE.to_string(),
    }
}

/// Summarizes the input text using the Google Gemini API.
#[utoipa::path(
    post,
    path = "/summarize",
    tag = "Summarization",
    request_body = SummarizeRequestBody,
    responses(
        (status = 200, description = "Summary generated", body = SummaryResponse),
        (status = 400, description = "Content blocked by Gemini", body = super::dto::ErrorBody),
        (status = 422, description = "Invalid request body", body = super::dto::ErrorBody),
        (status = 500, description = "Configuration or provider failure", body = super::dto::ErrorBody),
    )
)]
pub async fn summarize_endpoint(state: &AppState, body: &str) -> Value {
    let Some(summarizer) = state.summarizer() else {
        error!("Summarize request received but no Gemini client is configured");
        return helpers::err_response(500, NOT_CONFIGURED_MESSAGE);
    };

    let payload: SummarizeRequestBody = match serde_json::from_str(body) {
        Ok(payload) => payload,
        Err(e) => {
            warn!("Invalid summarize request body: {}", e);
            return helpers::err_response(422, &format!("Invalid request body: {e}"));
        }
    };

    let request = match SummarizationRequest::new(payload.text, payload.target_word_count) {
        Ok(request) => request,
        Err(e) => {
            warn!("Rejected summarize request: {}", e);
            return helpers::err_response(422, &e.to_string());
        }
    };

    match summarizer.summarize(&request).await {
        SummarizationResult::Success { summary } => helpers::ok_json(&SummaryResponse {
            original_text: request.text().to_string(),
            summary,
        }),
        SummarizationResult::Failure { category, message } => {
            let status = if category.is_client_correctable() {
                400
            } else {
                500
            };
            helpers::err_response(status, &message)
        }
    }
}
