//! Completion domain - the outbound call to the hosted LLM API.

pub mod client;
pub mod error;

pub use client::{CompletionBackend, OpenAiClient};
pub use error::CompletionError;
