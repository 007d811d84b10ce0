//! Completion-specific error types.

use thiserror::Error;

/// Errors that can occur when calling the hosted completion service.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// No API key was configured at startup.
    #[error("API key not configured")]
    NoApiKey,

    /// Network-level failure reaching the completion service.
    #[error("Network error: {0}")]
    Network(String),

    /// The completion service returned a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body could not be parsed.
    #[error("Failed to parse response: {0}")]
    Parse(String),

    /// The response contained no usable text choice.
    #[error("Empty completion: {0}")]
    Empty(String),
}

impl CompletionError {
    /// Create a network error.
    pub fn network(msg: impl Into<String>) -> Self {
        Self::Network(msg.into())
    }

    /// Create a parse error.
    pub fn parse(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    /// Create an empty-completion error.
    pub fn empty(msg: impl Into<String>) -> Self {
        Self::Empty(msg.into())
    }
}
