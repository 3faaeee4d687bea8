//! Pre-filled pool of secure random bytes.
//!
//! Architecture:
//! 1. Allocate one contiguous buffer of `capacity` bytes
//! 2. Fill it with a single call to the secure source
//! 3. Serve requests by slicing the buffer and advancing a cursor
//! 4. Refill in place only when a request no longer fits
//!
//! Requests larger than the whole buffer bypass the pool and are fetched from
//! the source directly, leaving the cursor untouched.
//!
//! Served slices borrow the pool mutably, so a slice is always consumed before
//! the next refill can overwrite it. Use [`RandomPool::take`] when the bytes
//! must outlive the next request.

use std::borrow::Cow;

use log::{debug, trace};
use serde::Serialize;

use crate::source::{OsRandom, SecureRandom};

/// Default pool capacity in bytes.
pub const DEFAULT_POOL_SIZE: usize = 4096;

/// Fixed-capacity buffer of secure random bytes served by cursor.
pub struct RandomPool<R: SecureRandom = OsRandom> {
    source: R,
    buffer: Box<[u8]>,
    // Invariant: cursor <= buffer.len(); bytes below it were already issued.
    cursor: usize,
    refills: u64,
    direct_draws: u64,
    bytes_served: u64,
}

impl RandomPool<OsRandom> {
    /// Create a pool of [`DEFAULT_POOL_SIZE`] bytes backed by the OS CSPRNG.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_POOL_SIZE)
    }

    /// Create a pool of `capacity` bytes backed by the OS CSPRNG.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_source(OsRandom, capacity)
    }
}

impl Default for RandomPool<OsRandom> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: SecureRandom> RandomPool<R> {
    /// Create a pool over an arbitrary secure source.
    ///
    /// A capacity of zero is clamped to one byte. The pool starts exhausted,
    /// so the first non-empty request triggers the initial fill.
    pub fn with_source(source: R, capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            source,
            buffer: vec![0u8; capacity].into_boxed_slice(),
            cursor: capacity,
            refills: 0,
            direct_draws: 0,
            bytes_served: 0,
        }
    }

    /// Pool capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.buffer.len()
    }

    /// Bytes still available before the next refill.
    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.cursor
    }

    /// Take `length` random bytes.
    ///
    /// - `length == 0`: empty slice, no state change.
    /// - `length > capacity`: one direct call to the source; the pool is untouched.
    /// - otherwise: refill if the request does not fit, then slice and advance.
    ///
    /// Unissued bytes are discarded on refill.
    pub fn next(&mut self, length: usize) -> Cow<'_, [u8]> {
        if length == 0 {
            return Cow::Borrowed(&[]);
        }

        if length > self.buffer.len() {
            self.direct_draws += 1;
            self.bytes_served += length as u64;
            debug!(
                "request of {length} bytes exceeds pool capacity {}, drawing directly",
                self.buffer.len()
            );
            return Cow::Owned(self.source.random_bytes(length));
        }

        if self.cursor + length > self.buffer.len() {
            self.refill();
        }

        let start = self.cursor;
        self.cursor += length;
        self.bytes_served += length as u64;
        Cow::Borrowed(&self.buffer[start..self.cursor])
    }

    /// Take `length` random bytes as an owned buffer.
    pub fn take(&mut self, length: usize) -> Vec<u8> {
        self.next(length).into_owned()
    }

    fn refill(&mut self) {
        self.source.fill(&mut self.buffer);
        self.cursor = 0;
        self.refills += 1;
        trace!(
            "refilled {} byte pool (refill #{})",
            self.buffer.len(),
            self.refills
        );
    }

    /// Counters describing how the pool has been used so far.
    pub fn stats(&self) -> PoolStats {
        PoolStats {
            capacity: self.buffer.len(),
            remaining: self.remaining(),
            refills: self.refills,
            direct_draws: self.direct_draws,
            bytes_served: self.bytes_served,
        }
    }

    /// The underlying secure source.
    pub fn source(&self) -> &R {
        &self.source
    }
}

/// Snapshot of pool usage.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct PoolStats {
    /// Pool capacity in bytes.
    pub capacity: usize,
    /// Bytes left before the next refill.
    pub remaining: usize,
    /// Number of times the buffer was refilled from the source.
    pub refills: u64,
    /// Requests larger than the pool, served straight from the source.
    pub direct_draws: u64,
    /// Total bytes handed out, pooled and direct.
    pub bytes_served: u64,
}

impl PoolStats {
    /// Total calls made to the secure source.
    pub fn source_calls(&self) -> u64 {
        self.refills + self.direct_draws
    }
}
