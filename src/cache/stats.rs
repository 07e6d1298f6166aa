//! Cache Statistics Module
//!
//! Running counters for cache effectiveness: hits, misses, evictions
//! and lazily observed expirations.

use serde::Serialize;

// == Cache Stats ==
/// Snapshot of the cache's lookup and eviction counters.
///
/// `hits` and `misses` only ever grow over the life of a store; a miss
/// covers both an absent key and an entry found stale. `entries` is the
/// resident count at snapshot time.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    /// Lookups that returned a stored value
    pub hits: u64,
    /// Lookups that found nothing usable (absent or expired)
    pub misses: u64,
    /// Entries removed under capacity pressure
    pub evictions: u64,
    /// Entries found past their time-to-live and dropped on access
    pub expirations: u64,
    /// Number of entries resident when the snapshot was taken
    pub entries: usize,
}

impl CacheStats {
    // == Constructor ==
    /// Creates stats with all counters at zero.
    pub fn new() -> Self {
        Self::default()
    }

    // == Hit Rate ==
    /// Fraction of lookups that hit, 0.0 when nothing has been looked
    /// up yet.
    pub fn hit_rate(&self) -> f64 {
        let lookups = self.hits + self.misses;
        if lookups == 0 {
            0.0
        } else {
            self.hits as f64 / lookups as f64
        }
    }

    /// Increments the hit counter.
    pub fn record_hit(&mut self) {
        self.hits += 1;
    }

    /// Increments the miss counter.
    pub fn record_miss(&mut self) {
        self.misses += 1;
    }

    /// Increments the eviction counter.
    pub fn record_eviction(&mut self) {
        self.evictions += 1;
    }

    /// Increments the expiration counter.
    pub fn record_expiration(&mut self) {
        self.expirations += 1;
    }

    /// Updates the resident entry count.
    pub fn set_entries(&mut self, count: usize) {
        self.entries = count;
    }
}
