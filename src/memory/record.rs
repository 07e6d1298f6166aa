//! Memory Record Module
//!
//! A single timestamped item of session history.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// == Memory Record ==
/// One item of session history: a caller payload plus the wall-clock
/// time it was recorded.
///
/// The payload is opaque to the log: structured records, plain strings,
/// whatever the pipeline produces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MemoryRecord<T> {
    /// When the record was appended
    pub recorded_at: DateTime<Utc>,
    /// Caller payload, stored untouched
    pub data: T,
}

impl<T> MemoryRecord<T> {
    /// Stamps a payload with the current wall-clock time.
    pub fn now(data: T) -> Self {
        Self {
            recorded_at: Utc::now(),
            data,
        }
    }
}
