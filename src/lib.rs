//! Nurture Relay Server
//!
//! HTTP relay between a child-raising game client and a hosted LLM
//! completion API. Gameplay state arrives as JSON, is rendered into a
//! Japanese-language prompt, forwarded as a single chat-completion call, and
//! the raw text comes back as the response body. Stateless: each request is
//! independent and nothing is persisted.
//!
//! # Architecture
//!
//! - **core**: configuration, error handling, server state, and the HTTP
//!   surface (router, handlers, uniform 500 error mapping)
//! - **domains**: business logic organized by bounded contexts
//!   - **narrative**: request payloads, the prompt builders, the system
//!     instruction registry, and the service tying them together
//!   - **completion**: the outbound OpenAI chat-completion client behind the
//!     `CompletionBackend` seam
//!
//! # Example
//!
//! ```rust,no_run
//! use nurture_relay::{Config, HttpServer, RelayServer};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = Config::from_env();
//!     let server = RelayServer::new(config.clone());
//!     HttpServer::new(config.http).run(server).await?;
//!     Ok(())
//! }
//! ```

pub mod core;
pub mod domains;

// Re-export commonly used types for convenience
pub use crate::core::{Config, Error, HttpServer, RelayServer, Result};
