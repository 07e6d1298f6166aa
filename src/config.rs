//! Configuration Module
//!
//! Cache sizing parameters, loadable from environment variables.

use std::env;
use std::str::FromStr;
use std::time::Duration;

use crate::error::{ConfigError, Result};

/// Default maximum number of resident entries.
pub const DEFAULT_CAPACITY: usize = 1000;

/// Default entry time-to-live.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Cache sizing parameters.
///
/// Both values are fixed for the lifetime of the store they configure:
/// `capacity` bounds the resident entry count, `ttl` bounds how long an
/// entry stays usable after its last write or hit.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Maximum number of entries the cache may hold
    pub capacity: usize,
    /// Maximum entry age before it is treated as absent
    pub ttl: Duration,
}

impl CacheConfig {
    /// Creates a config after validating the capacity.
    ///
    /// A zero capacity is rejected outright rather than clamped to a
    /// working value.
    pub fn new(capacity: usize, ttl: Duration) -> Result<Self> {
        if capacity == 0 {
            return Err(ConfigError::InvalidCapacity(capacity));
        }
        Ok(Self { capacity, ttl })
    }

    /// Creates a validated config from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum resident entries (default: 1000)
    /// - `CACHE_TTL_SECS` - Entry time-to-live in seconds (default: 3600)
    ///
    /// A variable that is set but does not parse is a hard error, not a
    /// silent fallback to the default.
    pub fn from_env() -> Result<Self> {
        let capacity =
            parse_var("CACHE_CAPACITY")?.unwrap_or(DEFAULT_CAPACITY);
        let ttl = parse_var("CACHE_TTL_SECS")?
            .map(Duration::from_secs)
            .unwrap_or(DEFAULT_TTL);

        Self::new(capacity, ttl)
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            ttl: DEFAULT_TTL,
        }
    }
}

/// Reads and parses one environment variable, `None` when unset.
fn parse_var<T: FromStr>(name: &'static str) -> Result<Option<T>> {
    match env::var(name) {
        Ok(raw) => match raw.parse() {
            Ok(parsed) => Ok(Some(parsed)),
            Err(_) => Err(ConfigError::InvalidEnvVar { name, value: raw }),
        },
        Err(_) => Ok(None),
    }
}
