//! All AI/LLM functionality

pub mod client;
pub mod prompt_builder;
pub mod response;

// Re-export main types for convenience
pub use client::{GeminiClient, TextGenerator};
pub use response::ProviderReply;
