//! Narrative domain - payloads, prompt builders, instructions, and the
//! service tying them to the completion backend.

pub mod builders;
pub mod error;
pub mod instructions;
pub mod payload;
pub mod service;

pub use error::NarrativeError;
pub use instructions::NarrativeTask;
pub use payload::{ChildState, EndingState, FeedbackEvent};
pub use service::NarrativeService;
