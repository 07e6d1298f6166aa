//! LRU Tracker Module
//!
//! Recency bookkeeping for eviction: which live key has gone longest
//! without a use.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order for LRU eviction.
///
/// Keys sit in a VecDeque where:
/// - Front = Most recently used
/// - Back = Least recently used (the eviction candidate)
///
/// The tracker mirrors the key set of the store it shadows: every live
/// key exactly once, never a duplicate.
#[derive(Debug)]
pub struct LruTracker<K> {
    /// Order of keys by last use
    order: VecDeque<K>,
}

impl<K: Eq + Clone> LruTracker<K> {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a key as most recently used.
    ///
    /// An already tracked key is moved to the front; a new key is simply
    /// added there.
    pub fn touch(&mut self, key: &K) {
        self.remove(key);
        self.order.push_front(key.clone());
    }

    // == Remove ==
    /// Removes a key from the tracker. No-op for untracked keys.
    pub fn remove(&mut self, key: &K) {
        self.order.retain(|k| k != key);
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used key.
    ///
    /// Returns None if the tracker is empty.
    pub fn evict_oldest(&mut self) -> Option<K> {
        self.order.pop_back()
    }

    // == Peek Oldest ==
    /// The least recently used key, left in place.
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

    // == Contains ==
    /// Checks whether a key is being tracked.
    pub fn contains(&self, key: &K) -> bool {
        self.order.iter().any(|k| k == key)
    }
}

impl<K: Eq + Clone> Default for LruTracker<K> {
    fn default() -> Self {
        Self::new()
    }
}
