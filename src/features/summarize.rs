use std::sync::Arc;

use tracing::{error, info, warn};

use crate::ai::prompt_builder::build_summary_prompt;
use crate::ai::{ProviderReply, TextGenerator};
use crate::core::models::{ErrorCategory, SummarizationRequest, SummarizationResult};

pub const EMPTY_OUTPUT_MESSAGE: &str =
    "Gemini API returned an empty summary. Try rephrasing input or check model.";
pub const UNEXPECTED_RESPONSE_MESSAGE: &str =
    "Error processing summary from Gemini API: Empty or unexpected response.";
pub const PROVIDER_ERROR_MESSAGE: &str =
    "An internal server error occurred while contacting the Gemini API.";

#[must_use]
pub fn blocked_message(reason: &str) -> String {
    format!(
        "Content blocked by Gemini due to: {reason}. The input text might violate safety policies."
    )
}

/// Shared summarization core behind both the form and the JSON endpoint.
#[derive(Clone)]
pub struct Summarizer {
    generator: Arc<dyn TextGenerator>,
}

impl Summarizer {
    #[must_use]
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Makes exactly one provider call and classifies the outcome.
    ///
    /// Never fails: every provider outcome, including transport errors, ends
    /// up as a [`SummarizationResult`].
    pub async fn summarize(&self, request: &SummarizationRequest) -> SummarizationResult {
        let prompt = build_summary_prompt(request.text(), request.target_word_count());

        info!(
            target_word_count = request.target_word_count(),
            input_chars = request.text().chars().count(),
            "Generating summary"
        );

        match self.generator.generate(&prompt).await {
            Ok(ProviderReply::Content(text)) => {
                let summary = text.trim();
                if summary.is_empty() {
                    warn!("Gemini returned content parts with no text");
                    SummarizationResult::failure(ErrorCategory::EmptyOutput, EMPTY_OUTPUT_MESSAGE)
                } else {
                    info!(summary_chars = summary.chars().count(), "Summary generated");
                    SummarizationResult::Success {
                        summary: summary.to_string(),
                    }
                }
            }
            Ok(ProviderReply::Blocked(reason)) => {
                warn!(block_reason = %reason, "Content blocked by Gemini");
                SummarizationResult::failure(ErrorCategory::Blocked, blocked_message(&reason))
            }
            Ok(ProviderReply::Unexpected) => {
                error!("Gemini reply had neither content parts nor a block reason");
                SummarizationResult::failure(
                    ErrorCategory::UnexpectedResponse,
                    UNEXPECTED_RESPONSE_MESSAGE,
                )
            }
            Err(e) => {
                error!(error = %e, "An unexpected error occurred with Gemini API");
                SummarizationResult::failure(
                    ErrorCategory::TransportOrProviderError,
                    PROVIDER_ERROR_MESSAGE,
                )
            }
        }
    }
}
