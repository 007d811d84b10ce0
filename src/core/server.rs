//! Relay server state and lifecycle management.
//!
//! `RelayServer` is the clone-able handle shared by all route handlers. It
//! owns the immutable configuration and the narrative service, which in turn
//! holds the completion backend. Handlers share no mutable state.

use std::sync::Arc;

use super::config::Config;
use crate::domains::completion::{CompletionBackend, OpenAiClient};
use crate::domains::narrative::NarrativeService;

/// Number of credential characters left visible by [`mask_key`].
const KEY_PREVIEW_LEN: usize = 5;

/// The main relay server handle.
#[derive(Clone)]
pub struct RelayServer {
    /// Server configuration, built once at startup.
    config: Arc<Config>,

    /// Service generating narrative text for the three endpoints.
    narrative: NarrativeService,
}

impl RelayServer {
    /// Create a new relay server with the given configuration.
    ///
    /// The completion client is constructed from the configuration's
    /// completion section; a missing API key surfaces per-request, not here.
    pub fn new(config: Config) -> Self {
        let config = Arc::new(config);
        let client = OpenAiClient::new(config.completion.clone());
        let narrative = NarrativeService::new(Arc::new(client));

        Self { config, narrative }
    }

    /// Create a relay server around a custom completion backend.
    ///
    /// Used by tests to exercise the HTTP surface without network traffic.
    pub fn with_backend(config: Config, backend: Arc<dyn CompletionBackend>) -> Self {
        Self {
            config: Arc::new(config),
            narrative: NarrativeService::new(backend),
        }
    }

    /// Get the server name.
    pub fn name(&self) -> &str {
        &self.config.server.name
    }

    /// Get the server version.
    pub fn version(&self) -> &str {
        &self.config.server.version
    }

    /// Get the server configuration.
    pub fn config(&self) -> &Arc<Config> {
        &self.config
    }

    /// Get the narrative service.
    pub fn narrative(&self) -> &NarrativeService {
        &self.narrative
    }

    /// Masked preview of the configured API key for the root route.
    pub fn key_preview(&self) -> String {
        match self.config.completion.api_key.as_deref() {
            Some(key) => mask_key(key),
            None => "(未設定)".to_string(),
        }
    }
}

/// Keep the first few characters of a credential and mask the rest.
fn mask_key(key: &str) -> String {
    let prefix: String = key.chars().take(KEY_PREVIEW_LEN).collect();
    format!("{prefix}******")
}
