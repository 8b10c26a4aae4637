//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup, optionally overridden from the
//! command line, and validated before the server starts.
//!
//! ## Variables
//!
//! All variables are optional:
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:5000`)
//! - `RUST_LOG` - Log filter (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `UNRESOLVED_AMENITIES` - What place creation does with amenity ids that
//!   do not exist: `skip` or `reject` (default: `skip`)
//!
//! ```bash
//! export LISTEN="127.0.0.1:8080"
//! export UNRESOLVED_AMENITIES="reject"
//! ```

use anyhow::{Context, Result};
use std::env;
use std::net::SocketAddr;

use crate::application::AmenityPolicy;

const DEFAULT_LISTEN: &str = "0.0.0.0:5000";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// Handling of unresolved amenity ids in `POST /places`.
    pub unresolved_amenities: AmenityPolicy,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            listen_addr: DEFAULT_LISTEN.to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            unresolved_amenities: AmenityPolicy::default(),
        }
    }
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `UNRESOLVED_AMENITIES` is set to an unknown policy.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| DEFAULT_LISTEN.to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let unresolved_amenities = match env::var("UNRESOLVED_AMENITIES") {
            Ok(raw) => raw
                .parse::<AmenityPolicy>()
                .map_err(anyhow::Error::msg)
                .context("Invalid UNRESOLVED_AMENITIES")?,
            Err(_) => AmenityPolicy::default(),
        };

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            unresolved_amenities,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not a `host:port` socket address
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        self.socket_addr()?;

        Ok(())
    }

    /// Parses the listen address.
    ///
    /// # Errors
    ///
    /// Returns an error if `listen_addr` is not a valid socket address.
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        self.listen_addr
            .parse()
            .with_context(|| format!("LISTEN is not a valid socket address: '{}'", self.listen_addr))
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Unresolved amenities: {}", self.unresolved_amenities);
    }
}
