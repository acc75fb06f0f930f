//! Screen Cache - A bounded cache for loaded screen components
//!
//! Keeps the most recently used screen components in memory, evicting the
//! least recently used one once the configured capacity is exceeded.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
pub mod screen;

pub use api::AppState;
pub use cache::RecencyCache;
pub use config::Config;
