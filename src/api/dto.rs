use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::core::models::DEFAULT_TARGET_WORDS;

const fn default_target_word_count() -> i64 {
    DEFAULT_TARGET_WORDS as i64
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SummarizeRequestBody {
    /// Text to summarize; must contain at least one non-whitespace character.
    pub text: String,
    /// Approximate length of the summary in words.
    #[serde(default = "default_target_word_count")]
    #[schema(default = 75, minimum = 10, maximum = 500)]
    pub target_word_count: i64,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct SummaryResponse {
    pub original_text: String,
    pub summary: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct ErrorBody {
    pub error: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct InfoResponse {
    pub message: String,
}
