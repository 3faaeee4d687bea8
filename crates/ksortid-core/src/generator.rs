//! Identifier assembly.
//!
//! A sortable ID is an 8-character base-62 millisecond timestamp followed by a
//! random component; a random ID is the random component alone:
//!
//! ```text
//! sortid:   [ time (8) ][ random (length - 8) ]
//! randomid: [ random (length) ]
//! ```
//!
//! [`IdGenerator`] owns a [`RandomPool`] and a [`Clock`]. The free functions
//! [`sortid`] and [`randomid`] share one lazily created, mutex-guarded default
//! generator so they can be called from any thread.

use std::sync::{LazyLock, Mutex, PoisonError};
use std::time::{SystemTime, UNIX_EPOCH};

use log::debug;

use crate::config::{GeneratorConfig, IdConfig};
use crate::encoding::{ALPHABET, decode_time, encode_bytes, encode_time};
use crate::error::IdError;
use crate::pool::{PoolStats, RandomPool};
use crate::source::{OsRandom, SecureRandom};

/// Width of the time component of a sortable ID.
pub const TIME_LEN: usize = 8;

/// Default total length of a sortable ID.
pub const DEFAULT_LENGTH: usize = 20;

/// Default length of a random ID.
pub const DEFAULT_RANDOM_LENGTH: usize = 21;

/// Source of the current time in milliseconds.
pub trait Clock {
    fn now_millis(&self) -> u64;
}

/// Wall clock: milliseconds since 1970-01-01T00:00:00Z.
///
/// Not monotonic across clock adjustments.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_millis(&self) -> u64 {
        let elapsed = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
    }
}

impl<F: Fn() -> u64> Clock for F {
    fn now_millis(&self) -> u64 {
        self()
    }
}

/// Generates sortable and random IDs from a pooled secure source.
pub struct IdGenerator<R: SecureRandom = OsRandom, C: Clock = SystemClock> {
    pool: RandomPool<R>,
    clock: C,
}

impl IdGenerator {
    /// OS-backed generator with the default pool size and the system clock.
    pub fn new() -> Self {
        Self::from_parts(RandomPool::new(), SystemClock)
    }

    /// OS-backed generator with a pool of `pool_size` bytes.
    pub fn with_pool_size(pool_size: usize) -> Self {
        Self::from_parts(RandomPool::with_capacity(pool_size), SystemClock)
    }

    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self::with_pool_size(config.pool_size)
    }
}

impl Default for IdGenerator {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRandom, C: Clock> IdGenerator<R, C> {
    pub fn from_parts(pool: RandomPool<R>, clock: C) -> Self {
        debug!("id generator created with a {} byte pool", pool.capacity());
        Self { pool, clock }
    }

    /// Time-sortable ID of `config.length()` characters.
    ///
    /// Fails with [`IdError::InvalidLength`] when the length does not exceed
    /// [`TIME_LEN`], and with [`IdError::TimestampOverflow`] if the clock ever
    /// outgrows eight base-62 digits.
    pub fn sortid(&mut self, config: &IdConfig) -> Result<String, IdError> {
        config.validate()?;
        let random_len = config.length() - TIME_LEN;

        let mut id = encode_time(self.clock.now_millis(), TIME_LEN)?;
        id.push_str(&encode_bytes(&self.pool.next(random_len)));
        Ok(id)
    }

    /// Purely random ID of `length` characters. Zero yields an empty string.
    pub fn randomid(&mut self, length: usize) -> String {
        encode_bytes(&self.pool.next(length))
    }

    pub fn pool(&self) -> &RandomPool<R> {
        &self.pool
    }

    pub fn stats(&self) -> PoolStats {
        self.pool.stats()
    }
}

static DEFAULT_GENERATOR: LazyLock<Mutex<IdGenerator>> =
    LazyLock::new(|| Mutex::new(IdGenerator::new()));

fn with_default<T>(f: impl FnOnce(&mut IdGenerator) -> T) -> T {
    // Pool state is consistent between calls, so a poisoned lock is reusable.
    let mut generator = DEFAULT_GENERATOR
        .lock()
        .unwrap_or_else(PoisonError::into_inner);
    f(&mut *generator)
}

/// Time-sortable ID from the process-wide generator.
///
/// `None` uses the default length of [`DEFAULT_LENGTH`].
pub fn sortid(config: Option<&IdConfig>) -> Result<String, IdError> {
    let config = config.copied().unwrap_or_default();
    with_default(|generator| generator.sortid(&config))
}

/// Random ID from the process-wide generator.
///
/// `None` uses the default length of [`DEFAULT_RANDOM_LENGTH`].
pub fn randomid(length: Option<usize>) -> String {
    let length = length.unwrap_or(DEFAULT_RANDOM_LENGTH);
    with_default(|generator| generator.randomid(length))
}

/// Usage counters of the process-wide generator's pool.
pub fn default_pool_stats() -> PoolStats {
    with_default(|generator| generator.stats())
}

/// Split a sortable ID into its timestamp and random suffix.
pub fn split_sortid(id: &str) -> Result<(u64, &str), IdError> {
    if let Some((position, character)) = id.char_indices().find(|(_, c)| !c.is_ascii()) {
        return Err(IdError::InvalidCharacter {
            character,
            position,
        });
    }
    if id.len() <= TIME_LEN {
        return Err(IdError::InvalidLength {
            length: id.len(),
            min: TIME_LEN + 1,
        });
    }

    let (time, random) = id.split_at(TIME_LEN);
    if let Some(position) = random.bytes().position(|b| !ALPHABET.contains(&b)) {
        return Err(IdError::InvalidCharacter {
            character: random.as_bytes()[position] as char,
            position: TIME_LEN + position,
        });
    }
    Ok((decode_time(time)?, random))
}
