//! Base-62 encoding of timestamps and random bytes.
//!
//! All functions here are pure. The alphabet is ordered digits, uppercase,
//! lowercase, so base-62 strings of equal width sort lexicographically in the
//! same order as the values they encode.

use crate::error::IdError;

/// The 62-character alphabet, in sort order.
pub const ALPHABET: &[u8; 62] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz";

/// Numeric base of the encoding.
pub const BASE: u64 = 62;

/// Base-62 digits needed for `u64::MAX`.
const MAX_DIGITS: usize = 11;

/// Position of `c` in [`ALPHABET`], if it belongs to it.
pub fn alphabet_index(c: char) -> Option<u8> {
    match c {
        '0'..='9' => Some(c as u8 - b'0'),
        'A'..='Z' => Some(c as u8 - b'A' + 10),
        'a'..='z' => Some(c as u8 - b'a' + 36),
        _ => None,
    }
}

/// Minimal base-62 representation, most significant digit first.
/// Zero has no digits.
fn digits(mut value: u64, buf: &mut [u8; MAX_DIGITS]) -> &[u8] {
    let mut pos = MAX_DIGITS;
    while value > 0 {
        pos -= 1;
        buf[pos] = ALPHABET[(value % BASE) as usize];
        value /= BASE;
    }
    &buf[pos..]
}

fn pad_into(out: &mut String, digits: &[u8], width: usize) {
    out.extend(std::iter::repeat_n('0', width - digits.len()));
    out.extend(digits.iter().map(|&d| d as char));
}

/// Encode `timestamp` as exactly `width` base-62 characters, left-padded with `'0'`.
///
/// Fails with [`IdError::TimestampOverflow`] when the value needs more than
/// `width` characters; padding never hides an overflow.
pub fn encode_time(timestamp: u64, width: usize) -> Result<String, IdError> {
    let mut buf = [0u8; MAX_DIGITS];
    let digits = digits(timestamp, &mut buf);
    if digits.len() > width {
        return Err(IdError::TimestampOverflow { timestamp, width });
    }
    let mut out = String::with_capacity(width);
    pad_into(&mut out, digits, width);
    Ok(out)
}

/// Like [`encode_time`], but keeps only the `width` most significant characters
/// when the value overflows. Truncated output no longer sorts with the rest.
pub fn encode_time_truncated(timestamp: u64, width: usize) -> String {
    let mut buf = [0u8; MAX_DIGITS];
    let digits = digits(timestamp, &mut buf);
    let digits = &digits[..digits.len().min(width)];
    let mut out = String::with_capacity(width);
    pad_into(&mut out, digits, width);
    out
}

/// Map every byte to `ALPHABET[byte % 62]`.
///
/// 256 is not a multiple of 62, so the first eight characters are slightly
/// more likely than the rest.
pub fn encode_bytes(bytes: &[u8]) -> String {
    bytes
        .iter()
        .map(|&b| ALPHABET[(b % BASE as u8) as usize] as char)
        .collect()
}

/// Encode the first `length` bytes of `bytes`.
pub fn encode_random(bytes: &[u8], length: usize) -> Result<String, IdError> {
    let bytes = bytes.get(..length).ok_or(IdError::InsufficientBytes {
        requested: length,
        available: bytes.len(),
    })?;
    Ok(encode_bytes(bytes))
}

/// Decode a base-62 time component back into its timestamp.
pub fn decode_time(text: &str) -> Result<u64, IdError> {
    text.chars()
        .enumerate()
        .try_fold(0u64, |acc, (position, character)| {
            let digit = alphabet_index(character)
                .ok_or(IdError::InvalidCharacter { character, position })?;
            acc.checked_mul(BASE)
                .and_then(|v| v.checked_add(u64::from(digit)))
                .ok_or(IdError::DecodeOverflow)
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    // -----------------------------------------------------------------------
    // Alphabet
    // -----------------------------------------------------------------------

    #[test]
    fn test_alphabet_is_sorted_and_unique() {
        assert!(ALPHABET.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_alphabet_index_matches_alphabet() {
        for (i, &c) in ALPHABET.iter().enumerate() {
            assert_eq!(alphabet_index(c as char), Some(i as u8));
        }
        assert_eq!(alphabet_index('-'), None);
        assert_eq!(alphabet_index('_'), None);
        assert_eq!(alphabet_index('é'), None);
    }

    // -----------------------------------------------------------------------
    // encode_time
    // -----------------------------------------------------------------------

    #[test]
    fn test_encode_time_zero() {
        assert_eq!(encode_time(0, 8).unwrap(), "00000000");
    }

    #[test]
    fn test_encode_time_last_digit() {
        assert_eq!(encode_time(61, 3).unwrap(), "00z");
    }

    #[test]
    fn test_encode_time_carries() {
        assert_eq!(encode_time(62, 3).unwrap(), "010");
        assert_eq!(encode_time(62 * 62 - 1, 2).unwrap(), "zz");
    }

    #[test]
    fn test_encode_time_zero_width() {
        assert_eq!(encode_time(0, 0).unwrap(), "");
        assert!(encode_time(1, 0).is_err());
    }

    #[test]
    fn test_encode_time_exact_width() {
        let ts = 1_700_000_000_000u64;
        let natural = encode_time(ts, 0).unwrap_err();
        assert!(matches!(natural, IdError::TimestampOverflow { .. }));
        let encoded = encode_time(ts, 8).unwrap();
        assert_eq!(encoded.len(), 8);
        assert_eq!(decode_time(&encoded).unwrap(), ts);
    }

    #[test]
    fn test_encode_time_overflow_is_rejected() {
        // 62^8 needs nine characters.
        let ts = 62u64.pow(8);
        assert_eq!(
            encode_time(ts, 8),
            Err(IdError::TimestampOverflow {
                timestamp: ts,
                width: 8
            })
        );
        assert_eq!(encode_time(ts - 1, 8).unwrap(), "zzzzzzzz");
    }

    #[test]
    fn test_encode_time_u64_max() {
        let encoded = encode_time(u64::MAX, MAX_DIGITS).unwrap();
        assert_eq!(encoded.len(), MAX_DIGITS);
        assert_eq!(decode_time(&encoded).unwrap(), u64::MAX);
    }

    #[test]
    fn test_encode_time_preserves_order() {
        let stamps = [0u64, 1, 61, 62, 3843, 3844, 1_000_000, 1_700_000_000_000];
        let encoded: Vec<String> = stamps.iter().map(|&t| encode_time(t, 8).unwrap()).collect();
        assert!(encoded.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_encode_time_truncated_keeps_high_digits() {
        // 62^3 is "1000" in base 62.
        assert_eq!(encode_time_truncated(62u64.pow(3), 2), "10");
        assert_eq!(encode_time_truncated(61, 3), "00z");
    }

    // -----------------------------------------------------------------------
    // encode_random
    // -----------------------------------------------------------------------

    #[test]
    fn test_encode_random_wraps_modulo() {
        assert_eq!(encode_random(&[0, 62, 124], 3).unwrap(), "000");
        assert_eq!(encode_random(&[61, 123, 255], 3).unwrap(), "zz7");
    }

    #[test]
    fn test_encode_random_uses_prefix() {
        assert_eq!(encode_random(&[10, 36, 1, 2], 2).unwrap(), "Aa");
        assert_eq!(encode_random(&[10, 36], 0).unwrap(), "");
    }

    #[test]
    fn test_encode_random_rejects_short_input() {
        assert_eq!(
            encode_random(&[1, 2], 3),
            Err(IdError::InsufficientBytes {
                requested: 3,
                available: 2
            })
        );
    }

    #[test]
    fn test_encode_random_is_deterministic() {
        let bytes: Vec<u8> = (0..=255).collect();
        let a = encode_random(&bytes, 256).unwrap();
        let b = encode_random(&bytes, 256).unwrap();
        assert_eq!(a, b);
        assert_eq!(a.len(), 256);
        assert!(a.bytes().all(|c| ALPHABET.contains(&c)));
    }

    // -----------------------------------------------------------------------
    // decode_time
    // -----------------------------------------------------------------------

    #[test]
    fn test_decode_time_ignores_padding() {
        assert_eq!(decode_time("00z").unwrap(), 61);
        assert_eq!(decode_time("").unwrap(), 0);
    }

    #[test]
    fn test_decode_time_rejects_foreign_characters() {
        assert_eq!(
            decode_time("00-1"),
            Err(IdError::InvalidCharacter {
                character: '-',
                position: 2
            })
        );
    }

    #[test]
    fn test_decode_time_overflow() {
        assert_eq!(decode_time("zzzzzzzzzzzz"), Err(IdError::DecodeOverflow));
    }
}
