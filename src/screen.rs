//! Screen Path Rules
//!
//! Decides how a loaded screen component maps onto a cache key and whether
//! it may be cached at all.

use serde::Serialize;

/// Returns the cache key for a screen URL: the path without its query string.
///
/// A leading `?` is treated as part of the path, so `"?x=1"` is kept whole.
pub fn cache_key(url: &str) -> &str {
    match url.find('?') {
        Some(idx) if idx > 0 => &url[..idx],
        _ => url,
    }
}

/// Returns the canonical cache key for a screen URL taken from a request body.
///
/// The query string is dropped, percent escapes are decoded and leading
/// slashes collapse to one, which is the same form axum hands the path
/// extractor for `GET /components/*path`.
pub fn canonical_key(url: &str) -> String {
    let decoded = urlencoding::decode_binary(cache_key(url).as_bytes());
    screen_path(&String::from_utf8_lossy(&decoded))
}

/// Anchors an already decoded path at a single leading slash.
pub fn screen_path(decoded: &str) -> String {
    format!("/{}", decoded.trim_start_matches('/'))
}

/// Whether a component response may be cached, based on its `Cache-Control` value.
///
/// Only responses the server marks with a `max-age` are considered static.
pub fn is_server_static(cache_control: Option<&str>) -> bool {
    cache_control.is_some_and(|value| value.contains("max-age"))
}

/// Outcome of offering a component to the cache.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Cacheability {
    /// Stored as most recently used
    Cached,
    /// Not server static, left out of the cache
    Skipped,
}

impl Cacheability {
    /// Classifies a component response. A missing header on an explicit
    /// store request is taken as permission to cache.
    pub fn for_request(cache_control: Option<&str>) -> Self {
        match cache_control {
            None => Cacheability::Cached,
            Some(_) if is_server_static(cache_control) => Cacheability::Cached,
            Some(_) => Cacheability::Skipped,
        }
    }

    pub fn is_cached(self) -> bool {
        self == Cacheability::Cached
    }
}
