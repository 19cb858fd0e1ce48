//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `BASE_URL` - Prefix used when building short links
//!   (default: `http://localhost:3000`)
//! - `RUST_LOG` - Log level for local diagnostics (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `LOG_API` - Remote log-ingestion endpoint; shipping is disabled when
//!   unset
//! - `LOG_API_KEY` - Sent verbatim as the `Authorization` header to `LOG_API`
//! - `LOG_QUEUE_CAPACITY` - Log event buffer size (default: 1024, min: 16)

use anyhow::Result;
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    /// Prefix for generated short links, e.g. `http://localhost:3000`.
    pub base_url: String,
    pub log_level: String,
    pub log_format: String,
    /// Remote log-ingestion endpoint. `None` disables shipping.
    pub log_api: Option<String>,
    /// Authorization header value for the log endpoint.
    pub log_api_key: Option<String>,
    /// Bounded capacity of the log event queue; events past capacity are
    /// dropped.
    pub log_queue_capacity: usize,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| "http://localhost:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let log_api = env::var("LOG_API").ok().filter(|v| !v.is_empty());
        let log_api_key = env::var("LOG_API_KEY").ok().filter(|v| !v.is_empty());

        let log_queue_capacity = env::var("LOG_QUEUE_CAPACITY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(1024);

        Self {
            listen_addr,
            base_url,
            log_level,
            log_format,
            log_api,
            log_api_key,
            log_queue_capacity,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `LISTEN` is not in `host:port` form
    /// - `BASE_URL` or `LOG_API` is not an HTTP(S) URL
    /// - `LOG_FORMAT` is not `text` or `json`
    /// - `LOG_QUEUE_CAPACITY` is out of range
    pub fn validate(&self) -> Result<()> {
        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            anyhow::bail!(
                "BASE_URL must start with 'http://' or 'https://', got '{}'",
                self.base_url
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if let Some(ref log_api) = self.log_api
            && !log_api.starts_with("http://")
            && !log_api.starts_with("https://")
        {
            anyhow::bail!(
                "LOG_API must start with 'http://' or 'https://', got '{}'",
                log_api
            );
        }

        if self.log_queue_capacity < 16 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY must be at least 16, got {}",
                self.log_queue_capacity
            );
        }

        if self.log_queue_capacity > 1_000_000 {
            anyhow::bail!(
                "LOG_QUEUE_CAPACITY is too large (max: 1000000), got {}",
                self.log_queue_capacity
            );
        }

        Ok(())
    }

    /// Returns whether remote log shipping is enabled.
    pub fn is_shipping_enabled(&self) -> bool {
        self.log_api.is_some()
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);

        if let Some(ref log_api) = self.log_api {
            tracing::info!(
                "  Log shipping: {} (key {})",
                log_api,
                if self.log_api_key.is_some() {
                    "set"
                } else {
                    "not set"
                }
            );
        } else {
            tracing::info!("  Log shipping: disabled");
        }

        tracing::info!("  Log queue capacity: {}", self.log_queue_capacity);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}
