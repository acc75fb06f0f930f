//! API Module
//!
//! HTTP handlers and routing for the component cache.
//!
//! # Endpoints
//! - `PUT /components` - Offer a loaded component to the cache
//! - `GET /components/*path` - Retrieve a cached component
//! - `GET /contains/*path` - Check presence without touching recency
//! - `GET /recency` - Cached paths, most recently used first
//! - `GET /stats` - Get cache statistics
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
