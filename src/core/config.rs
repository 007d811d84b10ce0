//! Configuration management for the relay.
//!
//! This module provides a centralized configuration structure populated from
//! environment variables (and an optional `.env` file) at process start. The
//! resulting `Config` is immutable and passed explicitly to the components
//! that need it.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Default upstream endpoint for the completion service.
const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";

/// Fixed model identifier used for every completion call.
const DEFAULT_MODEL: &str = "gpt-4o-mini";

/// Fixed sampling temperature used for every completion call.
const DEFAULT_TEMPERATURE: f32 = 0.7;

/// Main configuration structure for the relay.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// HTTP listener configuration.
    pub http: HttpConfig,

    /// Completion service configuration.
    pub completion: CompletionConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported in logs.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpConfig {
    /// Host address to bind to.
    pub host: String,

    /// Port number to listen on.
    pub port: u16,

    /// Enable permissive CORS for browser and game-engine clients.
    pub enable_cors: bool,
}

/// Configuration for the upstream completion service.
#[derive(Clone, Serialize, Deserialize)]
pub struct CompletionConfig {
    /// API key for the completion service.
    pub api_key: Option<String>,

    /// Base URL of the completion service.
    pub base_url: String,

    /// Model identifier sent with every request.
    pub model: String,

    /// Sampling temperature sent with every request.
    pub temperature: f32,
}

/// Custom Debug implementation to redact the API key from logs.
impl std::fmt::Debug for CompletionConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompletionConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "[REDACTED]"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("temperature", &self.temperature)
            .finish()
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 5000,
            enable_cors: true,
        }
    }
}

impl Default for CompletionConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            temperature: DEFAULT_TEMPERATURE,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "nurture-relay".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            http: HttpConfig::default(),
            completion: CompletionConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// A `.env` file in the working directory is read first if present.
    /// Relay settings are prefixed with `RELAY_`; the credential uses the
    /// conventional `OPENAI_API_KEY` name.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(level) = std::env::var("RELAY_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(host) = std::env::var("RELAY_HOST") {
            config.http.host = host;
        }

        if let Ok(port) = std::env::var("RELAY_PORT") {
            match port.parse() {
                Ok(port) => config.http.port = port,
                Err(_) => warn!("Ignoring invalid RELAY_PORT value: {}", port),
            }
        }

        if let Ok(cors) = std::env::var("RELAY_CORS") {
            config.http.enable_cors = cors.to_lowercase() != "false" && cors != "0";
        }

        if let Ok(base_url) = std::env::var("RELAY_OPENAI_BASE_URL") {
            config.completion.base_url = base_url;
        }

        if let Ok(api_key) = std::env::var("OPENAI_API_KEY") {
            config.completion.api_key = Some(api_key);
            info!("OpenAI API key loaded from environment");
        } else {
            warn!("OPENAI_API_KEY not set - completion calls will fail until it is configured");
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    // Mutex to ensure env var tests run serially
    static ENV_TEST_LOCK: Mutex<()> = Mutex::new(());

    #[test]
    fn test_api_key_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("OPENAI_API_KEY", "sk-test-key-12345");
        }
        let config = Config::from_env();
        assert_eq!(
            config.completion.api_key.as_deref(),
            Some("sk-test-key-12345")
        );
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
    }

    #[test]
    fn test_missing_api_key_is_none() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::remove_var("OPENAI_API_KEY");
        }
        let config = Config::from_env();
        assert!(config.completion.api_key.is_none());
    }

    #[test]
    fn test_port_from_env() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("RELAY_PORT", "8123");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, 8123);
        unsafe {
            std::env::remove_var("RELAY_PORT");
        }
    }

    #[test]
    fn test_invalid_port_keeps_default() {
        let _lock = ENV_TEST_LOCK.lock().unwrap();
        unsafe {
            std::env::set_var("RELAY_PORT", "not-a-port");
        }
        let config = Config::from_env();
        assert_eq!(config.http.port, HttpConfig::default().port);
        unsafe {
            std::env::remove_var("RELAY_PORT");
        }
    }

    #[test]
    fn test_api_key_redacted_in_debug() {
        let completion = CompletionConfig {
            api_key: Some("super_secret_key".to_string()),
            ..Default::default()
        };
        let debug_str = format!("{:?}", completion);
        assert!(debug_str.contains("REDACTED"));
        assert!(!debug_str.contains("super_secret_key"));
    }

    #[test]
    fn test_completion_defaults_are_fixed() {
        let completion = CompletionConfig::default();
        assert_eq!(completion.model, "gpt-4o-mini");
        assert_eq!(completion.temperature, 0.7);
        assert!(completion.base_url.starts_with("https://"));
    }
}
