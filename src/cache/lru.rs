//! LRU Tracker Module
//!
//! Implements Least Recently Used ordering for cache eviction.

use std::borrow::Borrow;
use std::collections::vec_deque::Iter;
use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for LRU eviction strategy.
///
/// Keys are stored in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used
///
/// Lookups are linear scans, which is fine for the small capacities
/// screen component caches run with.
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Order of keys by access time
    order: VecDeque<K>,
}

impl<K> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Evict Oldest ==
    /// Returns and removes the least recently used key.
    ///
    /// Returns None if tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// Returns the least recently used key without removing it.
    pub fn peek_oldest(&self) -> Option<&K> {
        self.order.back()
    }

    // == Length ==
    /// Returns the number of tracked keys.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    // == Iter ==
    /// Iterates keys from most to least recently used.
    pub fn iter(&self) -> Iter<'_, K> {
        self.order.iter()
    }
}

impl<K: Eq> LruTracker<K> {
    // == Touch ==
    /// Marks a key as recently used (moves to front).
    ///
    /// An existing occurrence is moved rather than duplicated.
    pub fn touch(&mut self, key: K) {
        if let Some(idx) = self.position(&key) {
            self.order.remove(idx);
        }
        self.order.push_front(key);
    }

    // == Promote ==
    /// Moves an already tracked key to the front.
    ///
    /// Returns false and leaves the order untouched if the key is unknown.
    pub fn promote<Q>(&mut self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        match self.position(key) {
            Some(0) => true,
            Some(idx) => {
                if let Some(k) = self.order.remove(idx) {
                    self.order.push_front(k);
                }
                true
            }
            None => false,
        }
    }

    // == Contains ==
    /// Checks if a key is being tracked.
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.position(key).is_some()
    }

    fn position<Q>(&self, key: &Q) -> Option<usize>
    where
        K: Borrow<Q>,
        Q: Eq + ?Sized,
    {
        self.order.iter().position(|k| k.borrow() == key)
    }
}
