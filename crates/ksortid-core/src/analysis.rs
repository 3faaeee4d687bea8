//! Character distribution of generated IDs.
//!
//! The `byte % 62` mapping is slightly biased: byte values 248..=255 wrap onto
//! the first eight alphabet characters, so `0`-`7` each appear with probability
//! 5/256 and the other 54 characters with 4/256. These helpers measure how
//! close a sample of IDs comes to that expectation.

use serde::Serialize;

use crate::encoding::{ALPHABET, alphabet_index};

/// Per-character counts over the alphabet, indexed like [`ALPHABET`].
pub fn char_frequencies<I, S>(ids: I) -> [u64; 62]
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut counts = [0u64; 62];
    for id in ids {
        for c in id.as_ref().chars() {
            if let Some(i) = alphabet_index(c) {
                counts[i as usize] += 1;
            }
        }
    }
    counts
}

/// Shannon entropy in bits per character.
pub fn shannon(counts: &[u64]) -> f64 {
    let n: u64 = counts.iter().sum();
    if n == 0 {
        return 0.0;
    }
    let n = n as f64;
    let mut h = 0.0;
    for &c in counts {
        if c > 0 {
            let p = c as f64 / n;
            h -= p * p.log2();
        }
    }
    h
}

/// Entropy per character of the `byte % 62` mapping over uniform bytes.
pub fn expected_shannon() -> f64 {
    let low = 5.0 / 256.0;
    let high = 4.0 / 256.0;
    -(8.0 * low * f64::log2(low) + 54.0 * high * f64::log2(high))
}

/// Summary of a character distribution.
#[derive(Debug, Clone, Serialize)]
pub struct DistributionReport {
    /// Characters counted.
    pub samples: u64,
    /// Observed Shannon entropy in bits per character.
    pub shannon: f64,
    /// Entropy of the ideal `byte % 62` mapping.
    pub expected_shannon: f64,
    /// `log2(62)`, the entropy of a perfectly uniform alphabet.
    pub max_shannon: f64,
    pub most_common: char,
    pub least_common: char,
    /// Ratio of the most to the least frequent count (0 if a character never appears).
    pub bias_ratio: f64,
}

impl std::fmt::Display for DistributionReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "  Characters:     {}", self.samples)?;
        writeln!(
            f,
            "  Shannon:        {:.4} bits/char (expected {:.4}, max {:.4})",
            self.shannon, self.expected_shannon, self.max_shannon
        )?;
        writeln!(
            f,
            "  Most / least:   '{}' / '{}' (ratio {:.3})",
            self.most_common, self.least_common, self.bias_ratio
        )
    }
}

/// Measure the character distribution of `ids`.
pub fn distribution_report<I, S>(ids: I) -> DistributionReport
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let counts = char_frequencies(ids);
    let samples = counts.iter().sum();

    let (max_i, &max_c) = counts
        .iter()
        .enumerate()
        .max_by_key(|&(_, c)| *c)
        .unwrap_or((0, &0));
    let (min_i, &min_c) = counts
        .iter()
        .enumerate()
        .min_by_key(|&(_, c)| *c)
        .unwrap_or((0, &0));

    DistributionReport {
        samples,
        shannon: shannon(&counts),
        expected_shannon: expected_shannon(),
        max_shannon: (ALPHABET.len() as f64).log2(),
        most_common: ALPHABET[max_i] as char,
        least_common: ALPHABET[min_i] as char,
        bias_ratio: if min_c == 0 {
            0.0
        } else {
            max_c as f64 / min_c as f64
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encoding::encode_bytes;

    #[test]
    fn test_frequencies_ignore_foreign_characters() {
        let counts = char_frequencies(["00a", "-_z"]);
        assert_eq!(counts[0], 2);
        assert_eq!(counts[36], 1);
        assert_eq!(counts[61], 1);
        assert_eq!(counts.iter().sum::<u64>(), 4);
    }

    #[test]
    fn test_shannon_empty() {
        assert_eq!(shannon(&[0; 62]), 0.0);
    }

    #[test]
    fn test_shannon_uniform() {
        let h = shannon(&[10; 62]);
        assert!((h - 62f64.log2()).abs() < 1e-9);
    }

    #[test]
    fn test_expected_shannon_below_maximum() {
        let h = expected_shannon();
        assert!(h < 62f64.log2());
        assert!(h > 5.9);
    }

    #[test]
    fn test_full_byte_range_matches_expected_bias() {
        // Every byte value once: exactly the ideal mapping distribution.
        let bytes: Vec<u8> = (0..=255).collect();
        let report = distribution_report([encode_bytes(&bytes)]);
        assert_eq!(report.samples, 256);
        assert!((report.shannon - report.expected_shannon).abs() < 1e-9);
        assert!(('0'..='7').contains(&report.most_common));
        assert!((report.bias_ratio - 1.25).abs() < 1e-9);
    }

    #[test]
    fn test_report_with_missing_characters() {
        let report = distribution_report(["aaaa"]);
        assert_eq!(report.most_common, 'a');
        assert_eq!(report.bias_ratio, 0.0);
        assert_eq!(report.shannon, 0.0);
    }
}
