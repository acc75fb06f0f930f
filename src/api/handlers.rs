//! API Handlers
//!
//! HTTP request handlers for each component cache endpoint.

use std::sync::Arc;
use tokio::sync::RwLock;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::RecencyCache;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::requests::validate_path;
use crate::models::{
    ContainsResponse, GetComponentResponse, HealthResponse, PutComponentRequest,
    PutComponentResponse, RecencyResponse, StatsResponse,
};
use crate::screen::{canonical_key, screen_path, Cacheability};

/// Cache of screen components keyed by screen path.
pub type ComponentCache = RecencyCache<String, Value>;

/// Application state shared across all handlers.
///
/// Every cache operation runs under one acquisition of the lock.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe component cache
    pub cache: Arc<RwLock<ComponentCache>>,
}

impl AppState {
    /// Creates a new AppState with the given cache.
    pub fn new(cache: ComponentCache) -> Self {
        Self {
            cache: Arc::new(RwLock::new(cache)),
        }
    }

    /// Creates a new AppState sized from configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(RecencyCache::new(config.cache_capacity))
    }
}

fn checked(path: String) -> Result<String> {
    match validate_path(&path) {
        Some(msg) => Err(ApiError::InvalidRequest(msg)),
        None => Ok(path),
    }
}

/// Wildcard captures arrive percent-decoded without the leading slash.
fn captured_key(captured: &str) -> Result<String> {
    checked(screen_path(captured))
}

/// Handler for PUT /components
///
/// Stores the component under its query-less path when it is cacheable.
pub async fn put_component_handler(
    State(state): State<AppState>,
    Json(req): Json<PutComponentRequest>,
) -> Result<Json<PutComponentResponse>> {
    if let Some(error_msg) = req.validate() {
        return Err(ApiError::InvalidRequest(error_msg));
    }

    // Same form GET and contains derive from the URI
    let key = checked(canonical_key(&req.path))?;
    let outcome = Cacheability::for_request(req.cache_control.as_deref());

    if outcome.is_cached() {
        let mut cache = state.cache.write().await;
        cache.put(key.clone(), req.component);
    } else {
        debug!(path = %key, "component is not server static, skipping cache");
    }

    Ok(Json(PutComponentResponse::new(key, outcome)))
}

/// Handler for GET /components/*path
///
/// A hit promotes the component to most recently used.
pub async fn get_component_handler(
    State(state): State<AppState>,
    Path(captured): Path<String>,
) -> Result<Json<GetComponentResponse>> {
    let path = captured_key(&captured)?;

    // Write lock: a hit reorders recency
    let mut cache = state.cache.write().await;
    let component = cache
        .get(path.as_str())
        .cloned()
        .ok_or_else(|| ApiError::NotFound(path.clone()))?;

    Ok(Json(GetComponentResponse::new(path, component)))
}

/// Handler for GET /contains/*path
pub async fn contains_handler(
    State(state): State<AppState>,
    Path(captured): Path<String>,
) -> Result<Json<ContainsResponse>> {
    let path = captured_key(&captured)?;

    let cache = state.cache.read().await;
    let present = cache.contains_key(path.as_str());

    Ok(Json(ContainsResponse::new(path, present)))
}

/// Handler for GET /recency
pub async fn recency_handler(State(state): State<AppState>) -> Json<RecencyResponse> {
    let cache = state.cache.read().await;
    let keys = cache.recency().into_iter().cloned().collect();

    Json(RecencyResponse { keys })
}

/// Handler for GET /stats
pub async fn stats_handler(State(state): State<AppState>) -> Json<StatsResponse> {
    let cache = state.cache.read().await;

    Json(StatsResponse::from(cache.stats()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn put_request(path: &str, component: Value, cache_control: Option<&str>) -> Json<PutComponentRequest> {
        Json(PutComponentRequest {
            path: path.to_string(),
            component,
            cache_control: cache_control.map(str::to_string),
        })
    }

    #[tokio::test]
    async fn test_put_and_get_handler() {
        let state = AppState::new(RecencyCache::new(10));

        let result = put_component_handler(
            State(state.clone()),
            put_request("/apps/a", json!({"template": "<div/>"}), None),
        )
        .await
        .unwrap();
        assert!(result.cached);

        let response = get_component_handler(State(state), Path("apps/a".to_string()))
            .await
            .unwrap();
        assert_eq!(response.path, "/apps/a");
        assert_eq!(response.component, json!({"template": "<div/>"}));
    }

    #[tokio::test]
    async fn test_put_strips_query_string() {
        let state = AppState::new(RecencyCache::new(10));

        let result = put_component_handler(
            State(state.clone()),
            put_request("/apps/a?pageIndex=1", json!(1), Some("max-age=60")),
        )
        .await
        .unwrap();
        assert_eq!(result.path, "/apps/a");

        let cache = state.cache.read().await;
        assert!(cache.contains_key("/apps/a"));
    }

    #[tokio::test]
    async fn test_put_skips_non_static_component() {
        let state = AppState::new(RecencyCache::new(10));

        let result = put_component_handler(
            State(state.clone()),
            put_request("/apps/a", json!(1), Some("no-cache")),
        )
        .await
        .unwrap();
        assert!(!result.cached);

        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_put_key_matches_get_capture() {
        let state = AppState::new(RecencyCache::new(10));

        for (body_path, captured) in [
            ("/apps/a%20b", "apps/a b"),
            ("//apps/a", "apps/a"),
            ("/%2Fapps/c?x=1", "apps/c"),
        ] {
            let stored = put_component_handler(
                State(state.clone()),
                put_request(body_path, json!(body_path), None),
            )
            .await
            .unwrap();

            let found = get_component_handler(State(state.clone()), Path(captured.to_string()))
                .await
                .unwrap();
            assert_eq!(found.path, stored.path);
            assert_eq!(found.component, json!(body_path));
        }
    }

    #[tokio::test]
    async fn test_put_rejects_root_path() {
        let state = AppState::new(RecencyCache::new(10));

        let result =
            put_component_handler(State(state.clone()), put_request("/?x=1", json!(1), None)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
        assert!(state.cache.read().await.is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_component() {
        let state = AppState::new(RecencyCache::new(10));

        let result = get_component_handler(State(state), Path("apps/none".to_string())).await;
        assert!(matches!(result, Err(ApiError::NotFound(path)) if path == "/apps/none"));
    }

    #[tokio::test]
    async fn test_contains_does_not_promote() {
        let state = AppState::new(RecencyCache::new(2));
        for path in ["/apps/a", "/apps/b"] {
            let response =
                put_component_handler(State(state.clone()), put_request(path, json!(0), None))
                    .await
                    .unwrap();
            assert!(response.cached);
        }

        let response = contains_handler(State(state.clone()), Path("apps/a".to_string()))
            .await
            .unwrap();
        assert!(response.present);

        let recency = recency_handler(State(state)).await;
        assert_eq!(recency.keys, vec!["/apps/b", "/apps/a"]);
    }

    #[tokio::test]
    async fn test_stats_handler() {
        let state = AppState::from_config(&Config::default());

        let response = stats_handler(State(state)).await;
        assert_eq!(response.hits, 0);
        assert_eq!(response.misses, 0);
        assert_eq!(response.capacity, 50);
    }

    #[tokio::test]
    async fn test_health_handler() {
        let response = health_handler().await;
        assert_eq!(response.status, "healthy");
    }

    #[tokio::test]
    async fn test_put_invalid_request() {
        let state = AppState::new(RecencyCache::new(10));

        let result =
            put_component_handler(State(state), put_request("", json!({}), None)).await;
        assert!(matches!(result, Err(ApiError::InvalidRequest(_))));
    }
}
