//! Cache Store Module
//!
//! The bounded expiring map: HashMap storage combined with LRU recency
//! tracking and lazy TTL expiry.

use std::collections::HashMap;
use std::hash::Hash;
use std::time::Duration;

use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};
use crate::config::CacheConfig;
use crate::error::{ConfigError, Result};

// == Cache Store ==
/// Bounded key-value store with LRU eviction and TTL expiry.
///
/// Keys and values are opaque: a key only needs hash and equality, a
/// value is stored untouched and handed back as a clone. At most
/// `capacity` entries are resident at any point; inserting past the
/// bound evicts the least recently used entry. Entries whose age
/// exceeds `ttl` are treated as absent and dropped the next time they
/// are looked up; there is no background sweep.
///
/// `get` mutates: a hit bumps recency and restarts the entry's TTL
/// window, and a stale entry is removed on the spot. Anything wrapping
/// this store must treat every operation as a write.
#[derive(Debug)]
pub struct CacheStore<K, V> {
    /// Key-value storage
    entries: HashMap<K, CacheEntry<V>>,
    /// Recency tracker, mirrors the key set of `entries`
    lru: LruTracker<K>,
    /// Lookup and eviction counters
    stats: CacheStats,
    /// Maximum number of resident entries
    capacity: usize,
    /// Maximum entry age before it is treated as absent
    ttl: Duration,
}

impl<K, V> CacheStore<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructor ==
    /// Creates a store with the given bounds.
    ///
    /// A zero capacity is rejected, never clamped. A zero TTL is
    /// accepted and turns the store into a pass-through: every lookup
    /// misses.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        Ok(Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity,
            ttl,
        })
    }

    /// Creates a store from a validated config.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Self::new(config.capacity, config.ttl)
    }

    // == Get ==
    /// Looks up a key, returning a clone of the stored value.
    ///
    /// An absent key and a stale entry both count as misses and return
    /// `None`; the stale entry is removed from the store as part of the
    /// lookup. A hit moves the key to the most recently used position
    /// and restarts its TTL window. A stored value that happens to be
    /// empty is still a hit; absence is only ever signaled by `None`.
    pub fn get(&mut self, key: &K) -> Option<V> {
        match self.entries.get_mut(key) {
            Some(entry) if entry.is_fresh(self.ttl) => {
                entry.touch();
                let value = entry.value.clone();
                self.lru.touch(key);
                self.stats.record_hit();
                Some(value)
            }
            Some(_) => {
                self.entries.remove(key);
                self.lru.remove(key);
                self.stats.record_expiration();
                self.stats.record_miss();
                self.stats.set_entries(self.entries.len());
                debug!(entries = self.entries.len(), "dropped expired entry on lookup");
                None
            }
            None => {
                self.stats.record_miss();
                None
            }
        }
    }

    // == Put ==
    /// Stores a value, taking ownership of it.
    ///
    /// Writing an existing key replaces its value in place, restarts the
    /// TTL window and bumps recency; the entry count does not change, so
    /// nothing is evicted. Writing a new key while full first evicts the
    /// least recently used entry, keeping the bound intact when the
    /// operation completes. Cannot fail.
    pub fn put(&mut self, key: K, value: V) {
        if let Some(entry) = self.entries.get_mut(&key) {
            entry.value = value;
            entry.touch();
            self.lru.touch(&key);
            return;
        }

        if self.entries.len() >= self.capacity {
            self.evict_lru();
        }

        self.lru.touch(&key);
        self.entries.insert(key, CacheEntry::new(value));
        self.stats.set_entries(self.entries.len());
    }

    // == Upsert ==
    /// Write-side merge: combines whatever is currently stored under
    /// `key` with a new value produced by `f`, then stores the result.
    ///
    /// The closure sees `None` when the key is absent or its entry has
    /// gone stale (the stale entry is dropped first). The merged value
    /// is stored exactly like `put`: recency bumped, TTL restarted,
    /// LRU eviction when the key is new and the store is full. Neither
    /// a hit nor a miss is counted; those counters track lookups.
    pub fn upsert<F>(&mut self, key: K, f: F)
    where
        F: FnOnce(Option<V>) -> V,
    {
        let current = match self.entries.remove(&key) {
            Some(entry) if entry.is_fresh(self.ttl) => Some(entry.value),
            Some(_) => {
                self.stats.record_expiration();
                None
            }
            None => None,
        };
        self.lru.remove(&key);

        let merged = f(current);
        self.put(key, merged);
    }

    // == Remove ==
    /// Explicitly drops a key, returning the value that was stored.
    ///
    /// The value comes back even if it had already gone stale: the
    /// caller asked for removal, not a lookup, so no hit or miss is
    /// counted.
    pub fn remove(&mut self, key: &K) -> Option<V> {
        let entry = self.entries.remove(key)?;
        self.lru.remove(key);
        self.stats.set_entries(self.entries.len());
        Some(entry.value)
    }

    // == Stats ==
    /// Snapshot of the running counters.
    ///
    /// Read-only: recency order and TTL windows are left untouched.
    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_entries(self.entries.len());
        stats
    }

    // == Length ==
    /// Returns the current number of resident entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The fixed entry bound.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// The fixed time-to-live.
    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    // == Eviction ==
    /// Removes the least recently used entry. No-op on an empty store.
    fn evict_lru(&mut self) {
        if let Some(evicted) = self.lru.evict_oldest() {
            self.entries.remove(&evicted);
            self.stats.record_eviction();
            debug!(
                entries = self.entries.len(),
                "capacity reached, evicted least recently used entry"
            );
        }
    }

    // == Test Support ==
    /// Cross-checks the map against the recency tracker.
    #[cfg(test)]
    pub(crate) fn assert_consistent(&self) {
        assert_eq!(self.entries.len(), self.lru.len());
        assert!(self.entries.len() <= self.capacity);
        for key in self.entries.keys() {
            assert!(self.lru.contains(key));
        }
    }
}
