//! Shared Cache Module
//!
//! The concurrency discipline around the store: one exclusive lock held
//! for the full duration of every operation.

use std::hash::Hash;
use std::sync::Arc;
use std::time::Duration;

use parking_lot::Mutex;

use crate::cache::{CacheStats, CacheStore};
use crate::config::CacheConfig;
use crate::error::Result;

// == Shared Cache ==
/// Cloneable, thread-safe handle over a [`CacheStore`].
///
/// The whole store (map, recency tracker, counters) is one unit of
/// mutual exclusion. `get` is a writer like everything else, because a
/// lookup can drop a stale entry and always bumps recency, so there is
/// deliberately no read-lock fast path. Callers observe operations in
/// lock order; racing writes to one key resolve to whichever acquired
/// the lock last. The lock itself cannot fail and is never poisoned.
///
/// Handles are cheap clones of the same underlying store. Construct one
/// per logical cache and hand it to the callers that share it; there is
/// no process-wide instance.
#[derive(Debug)]
pub struct SharedCache<K, V> {
    store: Arc<Mutex<CacheStore<K, V>>>,
}

impl<K, V> Clone for SharedCache<K, V> {
    fn clone(&self) -> Self {
        Self {
            store: Arc::clone(&self.store),
        }
    }
}

impl<K, V> SharedCache<K, V>
where
    K: Hash + Eq + Clone,
    V: Clone,
{
    // == Constructors ==
    /// Creates a shared cache with the given bounds.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Ok(Self::from_store(CacheStore::new(capacity, ttl)?))
    }

    /// Creates a shared cache from a validated config.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self::from_store(CacheStore::from_config(config)?))
    }

    /// Wraps an existing store.
    pub fn from_store(store: CacheStore<K, V>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
        }
    }

    // == Operations ==
    /// Looks up a key. See [`CacheStore::get`].
    pub fn get(&self, key: &K) -> Option<V> {
        self.store.lock().get(key)
    }

    /// Stores a value. See [`CacheStore::put`].
    pub fn put(&self, key: K, value: V) {
        self.store.lock().put(key, value);
    }

    /// Read-modify-write under a single lock acquisition, so concurrent
    /// merges on one key cannot lose each other's work. See
    /// [`CacheStore::upsert`].
    pub fn upsert<F>(&self, key: K, f: F)
    where
        F: FnOnce(Option<V>) -> V,
    {
        self.store.lock().upsert(key, f);
    }

    /// Explicitly drops a key. See [`CacheStore::remove`].
    pub fn remove(&self, key: &K) -> Option<V> {
        self.store.lock().remove(key)
    }

    /// Snapshot of the running counters.
    pub fn stats(&self) -> CacheStats {
        self.store.lock().stats()
    }

    /// Current resident entry count.
    pub fn len(&self) -> usize {
        self.store.lock().len()
    }

    /// True when nothing is resident.
    pub fn is_empty(&self) -> bool {
        self.store.lock().is_empty()
    }
}
