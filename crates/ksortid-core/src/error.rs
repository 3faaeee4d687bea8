//! Error types for ID generation and configuration.

use thiserror::Error;

/// Errors raised while encoding, decoding or assembling identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum IdError {
    /// A sortable ID must be longer than its time component.
    #[error("sortable ID length must be at least {min} characters, got {length}")]
    InvalidLength { length: usize, min: usize },

    /// The base-62 timestamp needs more characters than the requested width.
    #[error("timestamp {timestamp} does not fit in {width} base-62 characters")]
    TimestampOverflow { timestamp: u64, width: usize },

    /// Fewer bytes were supplied than characters requested.
    #[error("requested {requested} characters from {available} bytes")]
    InsufficientBytes { requested: usize, available: usize },

    /// A character outside `0-9A-Za-z` was found while decoding.
    #[error("invalid base-62 character {character:?} at position {position}")]
    InvalidCharacter { character: char, position: usize },

    /// The decoded time component does not fit in a `u64`.
    #[error("base-62 value overflows a 64-bit timestamp")]
    DecodeOverflow,
}

/// Errors raised while loading a [`GeneratorConfig`](crate::config::GeneratorConfig).
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("invalid config: {0}")]
    Invalid(#[from] IdError),

    #[error("invalid config: pool_size must be greater than zero")]
    EmptyPool,
}
