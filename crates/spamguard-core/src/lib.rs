//! SpamGuard Core
//!
//! Core types and error handling shared across SpamGuard components.
//!
//! This crate provides:
//! - Request and result types for the analyze endpoint
//! - The error taxonomy behind every client-facing failure
//! - Chat message types for building LLM gateway requests

pub mod error;
pub mod types;

pub use error::{Error, Result};
pub use types::{Action, AnalyzeRequest, ChatMessage, Classification, Explanation, Verdict};

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::error::{Error, Result};
    pub use crate::types::{
        Action, AnalyzeRequest, ChatMessage, Classification, Explanation, Verdict,
    };
}
