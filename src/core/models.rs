use crate::errors::ValidationError;

pub const DEFAULT_TARGET_WORDS: u32 = 75;
pub const MIN_TARGET_WORDS: u32 = 10;
pub const MAX_TARGET_WORDS: u32 = 500;

/// A validated summarization request.
///
/// Construction guarantees the text is non-blank and the word target lies in
/// `MIN_TARGET_WORDS..=MAX_TARGET_WORDS`; out-of-range targets are rejected,
/// never clamped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummarizationRequest {
    text: String,
    target_word_count: u32,
}

impl SummarizationRequest {
    pub fn new(text: impl Into<String>, target_word_count: i64) -> Result<Self, ValidationError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(ValidationError::EmptyInput);
        }

        let out_of_range = || ValidationError::WordCountOutOfRange {
            value: target_word_count,
            min: MIN_TARGET_WORDS,
            max: MAX_TARGET_WORDS,
        };
        let target_word_count = u32::try_from(target_word_count).map_err(|_| out_of_range())?;
        if !(MIN_TARGET_WORDS..=MAX_TARGET_WORDS).contains(&target_word_count) {
            return Err(out_of_range());
        }

        Ok(Self {
            text,
            target_word_count,
        })
    }

    /// The text exactly as submitted, surrounding whitespace included.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub const fn target_word_count(&self) -> u32 {
        self.target_word_count
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// The provider withheld output for safety or policy reasons.
    Blocked,
    EmptyOutput,
    UnexpectedResponse,
    TransportOrProviderError,
}

impl ErrorCategory {
    /// Whether the caller can fix this by changing the input.
    #[must_use]
    pub const fn is_client_correctable(self) -> bool {
        matches!(self, ErrorCategory::Blocked)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SummarizationResult {
    Success {
        summary: String,
    },
    Failure {
        category: ErrorCategory,
        message: String,
    },
}

impl SummarizationResult {
    #[must_use]
    pub fn failure(category: ErrorCategory, message: impl Into<String>) -> Self {
        SummarizationResult::Failure {
            category,
            message: message.into(),
        }
    }

    #[must_use]
    pub const fn is_success(&self) -> bool {
        matches!(self, SummarizationResult::Success { .. })
    }
}

/// Naive whitespace word count, as shown next to a rendered summary.
#[must_use]
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}
