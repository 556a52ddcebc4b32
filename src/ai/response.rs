//! Gemini `generateContent` response shapes and their normalization.
//!
//! The provider reply is decoded once, here, into a [`ProviderReply`]; nothing
//! past this module inspects raw response fields.

use serde::{Deserialize, Deserializer};
use serde_json::Value;

use crate::errors::ProviderError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProviderReply {
    /// The first candidate carried content parts. Text is joined, untrimmed.
    Content(String),
    /// No content parts, but prompt feedback named a block reason.
    Blocked(String),
    /// Neither content parts nor a block reason.
    Unexpected,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateContentResponse {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub candidates: Vec<Candidate>,
    pub prompt_feedback: Option<PromptFeedback>,
}

/// Treats an explicit `null` list the same as a missing one.
fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub content: Option<CandidateContent>,
    pub finish_reason: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct CandidateContent {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
pub struct Part {
    pub text: Option<String>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PromptFeedback {
    pub block_reason: Option<BlockReason>,
}

/// Block reasons normally arrive as enum names (`"SAFETY"`), but older API
/// revisions sent the numeric enum value.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum BlockReason {
    Named(String),
    Code(i64),
    Other(Value),
}

impl BlockReason {
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            BlockReason::Named(name) if !name.trim().is_empty() => name.clone(),
            BlockReason::Code(code) => code.to_string(),
            _ => "Unknown".to_string(),
        }
    }
}

impl GenerateContentResponse {
    /// # Errors
    ///
    /// Returns [`ProviderError::DecodeError`] if the body is not a JSON
    /// object of the expected shape.
    pub fn from_json(body: &str) -> Result<Self, ProviderError> {
        Ok(serde_json::from_str(body)?)
    }

    #[must_use]
    pub fn into_reply(self) -> ProviderReply {
        let parts = self
            .candidates
            .into_iter()
            .next()
            .and_then(|candidate| candidate.content)
            .map(|content| content.parts)
            .unwrap_or_default();

        if !parts.is_empty() {
            let text = parts
                .into_iter()
                .filter_map(|part| part.text)
                .collect::<Vec<_>>()
                .join("");
            return ProviderReply::Content(text);
        }

        match self.prompt_feedback.and_then(|f| f.block_reason) {
            Some(reason) => ProviderReply::Blocked(reason.describe()),
            None => ProviderReply::Unexpected,
        }
    }
}
