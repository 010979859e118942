//! Application configuration settings
//!
//! Defines all configuration structures and loading logic. Every value has
//! a fixed default matching the deployed behavior; environment variables
//! exist as overrides for development and tests.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Settings {
    /// Server configuration
    pub server: ServerConfig,
    /// Upstream classification API configuration
    pub upstream: UpstreamConfig,
    /// Logging configuration
    pub logging: LoggingConfig,
}

/// Server configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen host
    pub host: String,
    /// Listen port
    pub port: u16,
}

/// Upstream classification API configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpstreamConfig {
    /// Full URL of the classification endpoint
    pub classify_url: String,
    /// Per-call timeout in seconds. The source behavior had no timeout;
    /// one is required here so a hung upstream cannot block the batch join.
    pub timeout: u64,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Append-mode log file, written alongside stdout
    pub file: String,
}

impl Settings {
    /// Create a new configuration instance
    pub fn new() -> Result<Self> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let settings = Self {
            server: ServerConfig {
                host: get_env_or_default("SERVER_HOST", "127.0.0.1"),
                port: get_env_or_default("SERVER_PORT", "2887")
                    .parse()
                    .context("Invalid port number")?,
            },
            upstream: UpstreamConfig {
                classify_url: get_env_or_default(
                    "UPSTREAM_CLASSIFY_URL",
                    "https://franklin.genoox.com/api/classify",
                ),
                timeout: get_env_or_default("UPSTREAM_TIMEOUT", "30")
                    .parse()
                    .context("Invalid upstream timeout value")?,
            },
            logging: LoggingConfig {
                level: get_env_or_default("RUST_LOG", "info"),
                file: get_env_or_default("LOG_FILE", "app.log"),
            },
        };

        settings.validate()?;

        Ok(settings)
    }

    /// Validate configuration validity
    fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            anyhow::bail!("Port number cannot be 0");
        }

        if !self.upstream.classify_url.starts_with("http") {
            anyhow::bail!("Invalid upstream URL format, should start with 'http'");
        }

        if self.upstream.timeout == 0 {
            anyhow::bail!("Upstream timeout cannot be 0");
        }

        if self.logging.file.is_empty() {
            anyhow::bail!("Log file path cannot be empty");
        }

        Ok(())
    }
}

/// Get environment variable or default value
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
