//! Request DTOs for the component cache API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

/// Maximum accepted screen path length in bytes
pub const MAX_PATH_LENGTH: usize = 2048;

/// Request body for storing a component (PUT /components)
///
/// # Fields
/// - `path`: Screen URL the component was loaded from; any query string is dropped
/// - `component`: Opaque component descriptor
/// - `cache_control`: `Cache-Control` header the component was served with
#[derive(Debug, Clone, Deserialize)]
pub struct PutComponentRequest {
    /// Screen URL
    pub path: String,
    /// Component descriptor, stored as-is
    pub component: Value,
    /// Optional `Cache-Control` value from the screen response
    #[serde(default)]
    pub cache_control: Option<String>,
}

impl PutComponentRequest {
    /// Validates the request data
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self) -> Option<String> {
        validate_path(&self.path)
    }
}

/// Checks a screen path used as a cache key.
pub fn validate_path(path: &str) -> Option<String> {
    if path.is_empty() {
        return Some("Path cannot be empty".to_string());
    }
    if !path.starts_with('/') {
        return Some("Path must start with '/'".to_string());
    }
    if path.trim_start_matches('/').is_empty() {
        return Some("Path must name a screen".to_string());
    }
    if path.len() > MAX_PATH_LENGTH {
        return Some(format!(
            "Path exceeds maximum length of {} bytes",
            MAX_PATH_LENGTH
        ));
    }
    None
}
