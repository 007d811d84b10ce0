//! Error types and handling for the relay.
//!
//! This module defines a unified error type that can represent errors from
//! all domains and external dependencies, providing consistent error handling
//! across the entire application.

use thiserror::Error;

/// A specialized Result type for relay operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Unified error type for the relay.
#[derive(Debug, Error)]
pub enum Error {
    /// Error originating from the narrative domain.
    #[error("Narrative error: {0}")]
    Narrative(#[from] crate::domains::narrative::NarrativeError),

    /// Error originating from the completion domain.
    #[error("Completion error: {0}")]
    Completion(#[from] crate::domains::completion::CompletionError),

    /// Configuration-related errors.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Failed to bind the HTTP listener.
    #[error("Failed to bind to {address}: {source}")]
    Bind {
        address: String,
        #[source]
        source: std::io::Error,
    },

    /// I/O errors from network communication.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization/deserialization errors.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Internal server errors that should not occur under normal operation.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Create a new configuration error.
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a bind error.
    pub fn bind(address: impl Into<String>, source: std::io::Error) -> Self {
        Self::Bind {
            address: address.into(),
            source,
        }
    }

    /// Create a new internal error.
    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }
}
