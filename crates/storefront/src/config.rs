//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All variables are optional and fall back to development defaults:
//! - `KRISHI_HOST` - Bind address (default: 127.0.0.1)
//! - `KRISHI_PORT` - Listen port (default: 3000)
//! - `KRISHI_DATA_DIR` - Directory for the key-value store files (default: ./data)
//! - `KRISHI_SIMULATED_LATENCY_MS` - Artificial delay applied to login, signup,
//!   and checkout, standing in for upstream network latency (default: 1000)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Directory holding the persisted key-value store
    pub data_dir: PathBuf,
    /// Artificial latency for simulated network operations
    pub simulated_latency: Duration,
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = parse_host(&get_env_or_default("KRISHI_HOST", "127.0.0.1"))?;
        let port = parse_port(&get_env_or_default("KRISHI_PORT", "3000"))?;
        let data_dir = PathBuf::from(get_env_or_default("KRISHI_DATA_DIR", "./data"));
        let simulated_latency =
            parse_latency_ms(&get_env_or_default("KRISHI_SIMULATED_LATENCY_MS", "1000"))?;

        Ok(Self {
            host,
            port,
            data_dir,
            simulated_latency,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }
}

impl Default for StorefrontConfig {
    /// Development defaults, also used by tests (zero latency).
    fn default() -> Self {
        Self {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 3000,
            data_dir: PathBuf::from("./data"),
            simulated_latency: Duration::ZERO,
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_host(value: &str) -> Result<IpAddr, ConfigError> {
    value
        .parse::<IpAddr>()
        .map_err(|e| ConfigError::InvalidEnvVar("KRISHI_HOST".to_string(), e.to_string()))
}

fn parse_port(value: &str) -> Result<u16, ConfigError> {
    value
        .parse::<u16>()
        .map_err(|e| ConfigError::InvalidEnvVar("KRISHI_PORT".to_string(), e.to_string()))
}

fn parse_latency_ms(value: &str) -> Result<Duration, ConfigError> {
    value
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| {
            ConfigError::InvalidEnvVar("KRISHI_SIMULATED_LATENCY_MS".to_string(), e.to_string())
        })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_host() {
        assert_eq!(parse_host("0.0.0.0").unwrap(), IpAddr::from([0, 0, 0, 0]));
        assert!(parse_host("not-an-ip").is_err());
    }

    #[test]
    fn test_parse_port() {
        assert_eq!(parse_port("8080").unwrap(), 8080);
        assert!(parse_port("99999").is_err());
    }

    #[test]
    fn test_parse_latency_ms() {
        assert_eq!(parse_latency_ms("0").unwrap(), Duration::ZERO);
        assert_eq!(parse_latency_ms("1000").unwrap(), Duration::from_secs(1));
        assert!(parse_latency_ms("-5").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let config = StorefrontConfig {
            port: 4000,
            ..StorefrontConfig::default()
        };
        let addr = config.socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 4000);
    }

    #[test]
    fn test_invalid_env_var_display() {
        let err = ConfigError::InvalidEnvVar("KRISHI_PORT".to_string(), "bad".to_string());
        assert_eq!(
            err.to_string(),
            "Invalid environment variable KRISHI_PORT: bad"
        );
    }
}
