//! HTTP surface of the relay.
//!
//! Builds the axum router, layers permissive CORS on top when enabled, and
//! serves it on the configured listener.

pub mod error;
pub mod routes;

pub use routes::build_router;

use tracing::info;

use super::config::HttpConfig;
use super::error::{Error, Result};
use super::server::RelayServer;

/// HTTP server wrapping the relay router.
pub struct HttpServer {
    config: HttpConfig,
}

impl HttpServer {
    /// Create a new HTTP server with the given config.
    pub fn new(config: HttpConfig) -> Self {
        Self { config }
    }

    /// Get the bind address.
    pub fn address(&self) -> String {
        format!("{}:{}", self.config.host, self.config.port)
    }

    /// Run the HTTP server. Blocks until shutdown.
    pub async fn run(self, server: RelayServer) -> Result<()> {
        let addr = self.address();
        let app = build_router(server, self.config.enable_cors);

        let listener = tokio::net::TcpListener::bind(&addr)
            .await
            .map_err(|e| Error::bind(&addr, e))?;

        let cors_status = if self.config.enable_cors {
            "enabled"
        } else {
            "disabled"
        };
        info!("Ready - listening on {} (CORS {})", addr, cors_status);
        info!("  → Event:    POST /childdata");
        info!("  → Feedback: POST /feedback");
        info!("  → Ending:   POST /ending");

        axum::serve(listener, app).await.map_err(Error::Io)?;

        Ok(())
    }
}
