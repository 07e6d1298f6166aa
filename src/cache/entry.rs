//! Cache Entry Module
//!
//! A single stored record and its freshness bookkeeping.

use std::time::{Duration, Instant};

// == Cache Entry ==
/// One stored value together with the instant it was last written or hit.
///
/// Age is measured on the monotonic clock, so wall-clock adjustments can
/// neither expire nor resurrect an entry.
#[derive(Debug, Clone)]
pub struct CacheEntry<V> {
    /// The stored value, owned exclusively by the cache
    pub value: V,
    /// Set at insertion, re-stamped by every hit and every overwrite
    touched_at: Instant,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates an entry stamped with the current instant.
    pub fn new(value: V) -> Self {
        Self {
            value,
            touched_at: Instant::now(),
        }
    }

    // == Freshness ==
    /// Whether the entry is still usable under the given time-to-live.
    ///
    /// An entry is fresh while its age has not exceeded `ttl`. A zero
    /// TTL is the explicit pass-through case: nothing is ever fresh and
    /// every lookup misses.
    pub fn is_fresh(&self, ttl: Duration) -> bool {
        if ttl.is_zero() {
            return false;
        }
        self.touched_at.elapsed() <= ttl
    }

    // == Touch ==
    /// Re-stamps the entry, restarting its time-to-live window.
    pub fn touch(&mut self) {
        self.touched_at = Instant::now();
    }

    // == Age ==
    /// Time since the entry was last written or hit.
    pub fn age(&self) -> Duration {
        self.touched_at.elapsed()
    }
}
