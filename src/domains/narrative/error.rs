//! Narrative-specific error types.

use thiserror::Error;

use crate::domains::completion::CompletionError;

/// Errors that can occur while generating narrative text.
///
/// The prompt builders themselves never fail; the only failure source is the
/// outbound completion call.
#[derive(Debug, Error)]
pub enum NarrativeError {
    /// The completion service call failed.
    #[error("Completion error: {0}")]
    Completion(#[from] CompletionError),
}
