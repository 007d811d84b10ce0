//! Domains module containing business logic organized by bounded contexts.
//!
//! Each subdomain covers a specific area of the relay: the narrative domain
//! turns gameplay state into prompts, the completion domain talks to the
//! hosted LLM API.

pub mod completion;
pub mod narrative;
