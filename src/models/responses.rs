//! Response DTOs for the component cache API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheStats;
use crate::screen::Cacheability;

/// Response body for GET /components/*path
#[derive(Debug, Clone, Serialize)]
pub struct GetComponentResponse {
    /// The requested screen path
    pub path: String,
    /// The cached component descriptor
    pub component: Value,
}

impl GetComponentResponse {
    pub fn new(path: impl Into<String>, component: Value) -> Self {
        Self {
            path: path.into(),
            component,
        }
    }
}

/// Response body for PUT /components
#[derive(Debug, Clone, Serialize)]
pub struct PutComponentResponse {
    /// Cache key the component was offered under
    pub path: String,
    /// Whether the component was stored
    pub cached: bool,
    /// Outcome of the cacheability check
    pub outcome: Cacheability,
}

impl PutComponentResponse {
    pub fn new(path: impl Into<String>, outcome: Cacheability) -> Self {
        Self {
            path: path.into(),
            cached: outcome.is_cached(),
            outcome,
        }
    }
}

/// Response body for GET /contains/*path
#[derive(Debug, Clone, Serialize)]
pub struct ContainsResponse {
    pub path: String,
    pub present: bool,
}

impl ContainsResponse {
    pub fn new(path: impl Into<String>, present: bool) -> Self {
        Self {
            path: path.into(),
            present,
        }
    }
}

/// Response body for GET /recency, most recently used first
#[derive(Debug, Clone, Serialize)]
pub struct RecencyResponse {
    pub keys: Vec<String>,
}

/// Response body for the stats endpoint (GET /stats)
#[derive(Debug, Clone, Serialize)]
pub struct StatsResponse {
    /// Number of cache hits
    pub hits: u64,
    /// Number of cache misses
    pub misses: u64,
    /// Number of evictions
    pub evictions: u64,
    /// Current number of entries in cache
    pub total_entries: usize,
    /// Configured capacity
    pub capacity: usize,
    /// Hit rate (hits / (hits + misses))
    pub hit_rate: f64,
}

impl From<CacheStats> for StatsResponse {
    fn from(stats: CacheStats) -> Self {
        Self {
            hit_rate: stats.hit_rate(),
            hits: stats.hits,
            misses: stats.misses,
            evictions: stats.evictions,
            total_entries: stats.total_entries,
            capacity: stats.capacity,
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_get_response_serialize() {
        let resp = GetComponentResponse::new("/apps/a", json!({"template": "<div/>"}));
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["path"], "/apps/a");
        assert_eq!(value["component"]["template"], "<div/>");
    }

    #[test]
    fn test_put_response_serialize() {
        let resp = PutComponentResponse::new("/apps/a", Cacheability::Skipped);
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["cached"], false);
        assert_eq!(value["outcome"], "skipped");
    }

    #[test]
    fn test_stats_response_from_stats() {
        let mut stats = CacheStats::new(100);
        for _ in 0..4 {
            stats.record_hit();
        }
        stats.record_miss();
        let resp = StatsResponse::from(stats);
        assert!((resp.hit_rate - 0.8).abs() < 0.001);
        assert_eq!(resp.capacity, 100);
    }

    #[test]
    fn test_stats_response_zero_requests() {
        let resp = StatsResponse::from(CacheStats::new(0));
        assert_eq!(resp.hit_rate, 0.0);
    }

    #[test]
    fn test_health_response_serialize() {
        let json = serde_json::to_string(&HealthResponse::healthy()).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("timestamp"));
    }

    #[test]
    fn test_error_response_serialize() {
        let json = serde_json::to_string(&ErrorResponse::new("Something went wrong")).unwrap();
        assert!(json.contains("error"));
        assert!(json.contains("Something went wrong"));
    }
}
