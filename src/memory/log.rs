//! Session Log Module
//!
//! Keyed-session history on top of the shared cache: one cache entry
//! per session id, holding that session's append-only record list.
//! Sessions are bounded like any other cache entry: the least recently
//! touched session is evicted under capacity pressure and idle sessions
//! expire after the TTL, so a long-running process cannot accumulate
//! session state without bound.

use std::time::Duration;

use crate::cache::{CacheStats, SharedCache};
use crate::config::CacheConfig;
use crate::error::Result;
use crate::memory::MemoryRecord;

// == Session Log ==
/// Append-only, timestamped history per session id, shared across
/// threads.
///
/// Clones are handles to the same log, the same way [`SharedCache`]
/// clones share one store.
#[derive(Debug, Clone)]
pub struct SessionLog<T: Clone> {
    sessions: SharedCache<String, Vec<MemoryRecord<T>>>,
}

impl<T: Clone> SessionLog<T> {
    // == Constructors ==
    /// Creates a log bounded to `capacity` live sessions, each expiring
    /// after `ttl` of inactivity.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        Ok(Self {
            sessions: SharedCache::new(capacity, ttl)?,
        })
    }

    /// Creates a log from a validated config.
    pub fn from_config(config: &CacheConfig) -> Result<Self> {
        Ok(Self {
            sessions: SharedCache::from_config(config)?,
        })
    }

    // == Append ==
    /// Stamps `data` and appends it to the session's history.
    ///
    /// The read-modify-write runs under one lock acquisition, so
    /// concurrent appends to the same session all land. Appending
    /// counts as a use: the session moves to the most recently used
    /// position and its idle window restarts.
    pub fn append(&self, session_id: &str, data: T) {
        let record = MemoryRecord::now(data);
        self.sessions.upsert(session_id.to_string(), |history| {
            let mut history = history.unwrap_or_default();
            history.push(record);
            history
        });
    }

    // == History ==
    /// The session's full history, oldest record first.
    ///
    /// An absent, evicted or expired session yields an empty list.
    pub fn history(&self, session_id: &str) -> Vec<MemoryRecord<T>> {
        self.sessions
            .get(&session_id.to_string())
            .unwrap_or_default()
    }

    // == Latest ==
    /// The most recent record for the session, if any.
    pub fn latest(&self, session_id: &str) -> Option<MemoryRecord<T>> {
        let mut history = self.history(session_id);
        history.pop()
    }

    // == Forget ==
    /// Drops a session's history, returning it if one was present.
    pub fn forget(&self, session_id: &str) -> Option<Vec<MemoryRecord<T>>> {
        self.sessions.remove(&session_id.to_string())
    }

    // == Introspection ==
    /// Number of live sessions.
    pub fn session_count(&self) -> usize {
        self.sessions.len()
    }

    /// Lookup counters of the underlying cache.
    pub fn stats(&self) -> CacheStats {
        self.sessions.stats()
    }
}
