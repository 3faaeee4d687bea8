//! Secure random byte sources.
//!
//! The pool never generates randomness itself. Every byte it serves comes from a
//! [`SecureRandom`] implementation: [`OsRandom`] reads the operating system CSPRNG
//! through the `getrandom` crate, and [`RngSource`] adapts any cryptographic RNG
//! from the `rand` crate (useful for reproducible, seeded output).

use rand::{CryptoRng, RngCore};

/// Trait that every secure random source must implement.
pub trait SecureRandom {
    /// Fill `buf` in place with secure random bytes, blocking until complete.
    fn fill(&mut self, buf: &mut [u8]);

    /// Return a freshly allocated buffer of `n` secure random bytes.
    fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut out = vec![0u8; n];
        self.fill(&mut out);
        out
    }
}

impl<T: SecureRandom + ?Sized> SecureRandom for Box<T> {
    fn fill(&mut self, buf: &mut [u8]) {
        (**self).fill(buf);
    }
}

/// The operating system CSPRNG, via the `getrandom` crate.
///
/// Works cross-platform (Unix, Windows, WASM, etc.) without manual file I/O.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandom;

impl SecureRandom for OsRandom {
    /// # Panics
    /// Panics if the OS CSPRNG fails. This indicates a fatal platform issue
    /// that cannot be recovered from locally.
    fn fill(&mut self, buf: &mut [u8]) {
        getrandom::fill(buf).expect("OS CSPRNG failed");
    }
}

/// Any `rand` cryptographic RNG used as a [`SecureRandom`].
#[derive(Debug, Clone)]
pub struct RngSource<R>(pub R);

impl<R: CryptoRng> SecureRandom for RngSource<R> {
    fn fill(&mut self, buf: &mut [u8]) {
        self.0.fill_bytes(buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_os_random_fills_buffer() {
        let mut buf = [0u8; 64];
        OsRandom.fill(&mut buf);
        // 64 zero bytes from a CSPRNG has probability 2^-512.
        assert!(buf.iter().any(|&b| b != 0));
    }

    #[test]
    fn test_os_random_bytes_length() {
        for n in [0, 1, 17, 4096, 10_000] {
            assert_eq!(OsRandom.random_bytes(n).len(), n);
        }
    }

    #[test]
    fn test_os_random_consecutive_calls_differ() {
        let a = OsRandom.random_bytes(32);
        let b = OsRandom.random_bytes(32);
        assert_ne!(a, b);
    }

    #[test]
    fn test_rng_source_is_reproducible() {
        let mut a = RngSource(StdRng::seed_from_u64(7));
        let mut b = RngSource(StdRng::seed_from_u64(7));
        assert_eq!(a.random_bytes(48), b.random_bytes(48));
    }

    #[test]
    fn test_boxed_source_delegates() {
        let mut boxed: Box<dyn SecureRandom> = Box::new(RngSource(StdRng::seed_from_u64(1)));
        let mut plain = RngSource(StdRng::seed_from_u64(1));
        assert_eq!(boxed.random_bytes(16), plain.random_bytes(16));
    }
}
