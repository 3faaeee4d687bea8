//! # ksortid-core
//!
//! Short, URL-safe, time-sortable identifiers without a CSPRNG call per ID.
//!
//! ## Quick Start
//!
//! ```
//! use ksortid_core::{IdConfig, randomid, sortid};
//!
//! // 8-character timestamp + 12 random characters
//! let id = sortid(None).unwrap();
//! assert_eq!(id.len(), 20);
//!
//! // Custom length
//! let long = sortid(Some(&IdConfig::with_length(32))).unwrap();
//! assert_eq!(long.len(), 32);
//!
//! // Random only, nanoid-style
//! let token = randomid(None);
//! assert_eq!(token.len(), 21);
//! ```
//!
//! ## Architecture
//!
//! SecureRandom → RandomPool (buffer + cursor) → Encoder (base-62) → ID
//!
//! - [`RandomPool`] fills a 4 KiB buffer with one OS CSPRNG call and serves
//!   consecutive slices of it, refilling in place only when a request no longer
//!   fits. Requests larger than the buffer go to the source directly.
//! - [`encoding`] maps timestamps and bytes onto `0-9A-Za-z`. Fixed-width time
//!   prefixes sort lexicographically in time order.
//! - [`IdGenerator`] combines a pool with a [`Clock`]. The free functions
//!   [`sortid`] and [`randomid`] use a shared, mutex-guarded default generator.

pub mod analysis;
pub mod config;
pub mod encoding;
pub mod error;
pub mod generator;
pub mod pool;
pub mod source;

pub use analysis::{DistributionReport, distribution_report};
pub use config::{GeneratorConfig, IdConfig};
pub use encoding::{
    ALPHABET, decode_time, encode_bytes, encode_random, encode_time, encode_time_truncated,
};
pub use error::{ConfigError, IdError};
pub use generator::{
    Clock, DEFAULT_LENGTH, DEFAULT_RANDOM_LENGTH, IdGenerator, SystemClock, TIME_LEN,
    default_pool_stats, randomid, sortid, split_sortid,
};
pub use pool::{DEFAULT_POOL_SIZE, PoolStats, RandomPool};
pub use source::{OsRandom, RngSource, SecureRandom};

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
