//! Cache Module
//!
//! Provides a bounded in-memory cache with least recently used eviction.

mod lru;
mod stats;
mod store;


// Re-export public types
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::RecencyCache;

// == Public Constants ==
/// Default number of screen components retained
pub const DEFAULT_CAPACITY: usize = 50;
