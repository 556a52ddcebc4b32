//! API Lambda handler and request processing

pub mod docs;
pub mod dto;
pub mod form;
pub mod handler;
pub mod helpers;
pub mod parsing;

// Re-export the main handler for convenience
pub use handler::{function_handler as handler, route};
