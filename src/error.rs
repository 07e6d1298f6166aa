//! Error types for the memory crate
//!
//! Provides unified error handling using thiserror.
//!
//! The error surface is deliberately small: a lookup miss is not an
//! error (absence is signaled with `None`), so the only fallible step
//! is constructing a store with unusable parameters.

use thiserror::Error;

// == Config Error Enum ==
/// Raised when a cache or session log is constructed with parameters
/// that cannot produce a working store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The capacity bound must admit at least one resident entry
    #[error("capacity must be at least 1, got {0}")]
    InvalidCapacity(usize),

    /// An environment variable was set to a value that does not parse
    #[error("invalid value {value:?} for {name}")]
    InvalidEnvVar {
        /// Name of the offending variable
        name: &'static str,
        /// The raw value as found in the environment
        value: String,
    },
}

// == Result Type Alias ==
/// Convenience Result type for fallible construction.
pub type Result<T> = std::result::Result<T, ConfigError>;
