//! Recency Cache Module
//!
//! Bounded key-value store combining HashMap storage with LRU ordering.

use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

use tracing::debug;

use crate::cache::{CacheStats, LruTracker};

// == Recency Cache ==
/// Fixed-capacity cache that evicts the least recently used entry.
///
/// Both `put` and a successful `get` promote the key to most recently used.
/// Presence is decided by key membership only, so any stored value (including
/// `0`, `""` or `false`) is returned by `get`.
#[derive(Debug)]
pub struct RecencyCache<K, V> {
    /// Key-value storage
    entries: HashMap<K, V>,
    /// Access order, always holding exactly the keys of `entries`
    lru: LruTracker<K>,
    /// Performance statistics
    stats: CacheStats,
    /// Maximum number of entries retained
    capacity: usize,
}

impl<K, V> RecencyCache<K, V>
where
    K: Eq + Hash + Clone + Debug,
{
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` entries.
    ///
    /// A capacity of zero yields a cache that stays permanently empty.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(capacity),
            capacity,
        }
    }

    /// Creates a cache from a signed capacity, clamping negatives to zero.
    pub fn with_signed_capacity(capacity: i64) -> Self {
        Self::new(usize::try_from(capacity).unwrap_or(0))
    }

    // == Put ==
    /// Inserts or overwrites the value for `key` and marks it most recently used.
    ///
    /// When the entry count exceeds capacity, least recently used keys are
    /// evicted until it fits. Overwriting an existing key never evicts.
    pub fn put(&mut self, key: K, value: V) {
        self.entries.insert(key.clone(), value);
        self.lru.touch(key);

        while self.entries.len() > self.capacity {
            let Some(evicted) = self.lru.evict_oldest() else {
                break;
            };
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(key = ?evicted, "evicted least recently used entry");
        }

        self.stats.set_total_entries(self.entries.len());
    }

    // == Get ==
    /// Returns the value for `key`, promoting it to most recently used.
    ///
    /// A miss leaves the recency order untouched.
    pub fn get<Q>(&mut self, key: &Q) -> Option<&V>
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        if self.entries.contains_key(key) {
            self.lru.promote(key);
            self.stats.record_hit();
            self.entries.get(key)
        } else {
            self.stats.record_miss();
            None
        }
    }

    // == Contains Key ==
    /// Returns whether `key` is present, without touching recency or stats.
    pub fn contains_key<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + Hash + ?Sized,
    {
        self.entries.contains_key(key)
    }

    // == Recency ==
    /// Returns the keys ordered from most to least recently used.
    pub fn recency(&self) -> Vec<&K> {
        self.lru.iter().collect()
    }

    // == Stats ==
    /// Returns current cache statistics.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    // == Capacity ==
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    // == Length ==
    /// Returns the current number of entries in the cache.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
