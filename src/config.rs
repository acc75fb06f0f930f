//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::cache::DEFAULT_CAPACITY;

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Maximum number of screen components kept in the cache
    pub cache_capacity: usize,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `COMPONENT_CACHE_SIZE` - Cached component limit (default: 50, negatives become 0)
    /// - `SERVER_PORT` - HTTP server port (default: 3000)
    pub fn from_env() -> Self {
        Self {
            cache_capacity: env::var("COMPONENT_CACHE_SIZE")
                .ok()
                .and_then(|v| parse_capacity(&v))
                .unwrap_or(DEFAULT_CAPACITY),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(3000),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            cache_capacity: DEFAULT_CAPACITY,
            server_port: 3000,
        }
    }
}

/// Parses a signed capacity, clamping negative values to zero.
fn parse_capacity(raw: &str) -> Option<usize> {
    let value: i64 = raw.trim().parse().ok()?;
    Some(usize::try_from(value).unwrap_or(0))
}
