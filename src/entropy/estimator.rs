//! Entropy estimation over alphabets and draw counts.
//!
//! All quantities derive from the alphabet size, the draw count, and a
//! security threshold in bits. Nothing here consumes randomness, so the
//! estimator can judge a configuration before anything is generated.

use super::backend::NumericBackend;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

/// Errors raised by entropy computations.
#[derive(Debug, Clone, Error)]
pub enum EntropyError {
    /// An alphabet too small to carry entropy was given.
    #[error("alphabet must contain at least 2 symbols, got {size}")]
    InvalidAlphabetSize {
        /// The rejected size.
        size: usize,
    },

    /// A numeric range with `max < min` was given.
    #[error("invalid range: maximum {max} below minimum {min}")]
    InvalidRange {
        /// Lower end of the rejected range.
        min: u64,
        /// Upper end of the rejected range.
        max: u64,
    },

    /// A per-symbol entropy that cannot support length derivation.
    #[error("symbol entropy must be positive, got {bits}")]
    NonPositiveEntropy {
        /// The rejected per-symbol entropy.
        bits: f64,
    },
}

/// Entropy summary for one alphabet/length combination.
#[derive(Debug, Clone, PartialEq)]
pub struct EntropyReport {
    /// Bits contributed by each draw.
    pub bits_per_symbol: f64,
    /// Bits carried by the whole sequence.
    pub total_bits: f64,
    /// Smallest draw count reaching the threshold.
    pub minimum_symbols: usize,
}

/// Computes entropy figures for alphabets and generated sequences.
///
/// The numeric backend is chosen at construction and threaded through
/// every summation; it is an explicit value, not ambient global state.
#[derive(Debug, Clone, Copy, Default)]
pub struct EntropyEstimator {
    backend: NumericBackend,
}

impl EntropyEstimator {
    /// Creates an estimator using the given numeric backend.
    pub fn new(backend: NumericBackend) -> Self {
        Self { backend }
    }

    /// The backend this estimator sums with.
    pub fn backend(&self) -> NumericBackend {
        self.backend
    }

    /// Entropy in bits contributed by one uniform draw from an
    /// alphabet of `alphabet_size` symbols: `log2(alphabet_size)`.
    ///
    /// Sizes below 2 fail with [`EntropyError::InvalidAlphabetSize`]:
    /// a one-symbol alphabet carries zero bits, which would make every
    /// derived minimum length undefined, so it is rejected outright
    /// rather than treated as a valid degenerate case.
    pub fn bits_per_symbol(&self, alphabet_size: usize) -> Result<f64, EntropyError> {
        if alphabet_size < 2 {
            return Err(EntropyError::InvalidAlphabetSize {
                size: alphabet_size,
            });
        }
        Ok((alphabet_size as f64).log2())
    }

    /// Entropy in bits carried by `symbol_count` uniform draws.
    pub fn total_bits(
        &self,
        alphabet_size: usize,
        symbol_count: usize,
    ) -> Result<f64, EntropyError> {
        Ok(symbol_count as f64 * self.bits_per_symbol(alphabet_size)?)
    }

    /// Smallest number of draws whose total entropy reaches
    /// `threshold_bits`.
    pub fn minimum_symbols(
        &self,
        alphabet_size: usize,
        threshold_bits: f64,
    ) -> Result<usize, EntropyError> {
        let per_symbol = self.bits_per_symbol(alphabet_size)?;
        if threshold_bits <= 0.0 {
            return Ok(0);
        }
        Ok((threshold_bits / per_symbol).ceil() as usize)
    }

    /// Entropy in bits of one uniform draw from the inclusive range
    /// `[min, max]`: `log2(max - min + 1)`.
    pub fn range_bits(&self, min: u64, max: u64) -> Result<f64, EntropyError> {
        if max < min {
            return Err(EntropyError::InvalidRange { min, max });
        }
        let outcomes = (max - min) as f64 + 1.0;
        Ok(outcomes.log2())
    }

    /// Frequency-weighted Shannon entropy of a symbol list, in bits
    /// per draw.
    ///
    /// Unlike [`bits_per_symbol`](Self::bits_per_symbol), this accounts
    /// for duplicated entries: an external wordlist that repeats words
    /// offers less than `log2(len)` bits per pick. Lists shorter than 2
    /// carry zero bits.
    pub fn shannon_bits<T: Eq + Hash>(&self, symbols: &[T]) -> f64 {
        let n = symbols.len();
        if n < 2 {
            return 0.0;
        }

        let mut counts: HashMap<&T, usize> = HashMap::new();
        for symbol in symbols {
            *counts.entry(symbol).or_insert(0) += 1;
        }

        let probabilities: Vec<f64> = counts.values().map(|&c| c as f64 / n as f64).collect();

        self.backend.entropy_sum(&probabilities)
    }

    /// Number of words needed so that words plus appended numbers reach
    /// `threshold_bits`: the smallest W with
    /// `word_bits * W + number_bits * number_count >= threshold_bits`.
    ///
    /// `word_bits` is per-word entropy (from
    /// [`bits_per_symbol`](Self::bits_per_symbol) or
    /// [`shannon_bits`](Self::shannon_bits)); `number_bits` is per-number
    /// entropy (from [`range_bits`](Self::range_bits)). Returns 0 when
    /// the numbers alone already reach the threshold.
    pub fn words_needed(
        &self,
        word_bits: f64,
        number_bits: f64,
        number_count: usize,
        threshold_bits: f64,
    ) -> Result<usize, EntropyError> {
        if word_bits <= 0.0 || !word_bits.is_finite() {
            return Err(EntropyError::NonPositiveEntropy { bits: word_bits });
        }

        let remaining = threshold_bits - number_bits * number_count as f64;
        if remaining <= 0.0 {
            return Ok(0);
        }
        Ok((remaining / word_bits).ceil() as usize)
    }

    /// Builds the full entropy report for an alphabet/length
    /// combination against a threshold.
    pub fn report(
        &self,
        alphabet_size: usize,
        symbol_count: usize,
        threshold_bits: f64,
    ) -> Result<EntropyReport, EntropyError> {
        let bits_per_symbol = self.bits_per_symbol(alphabet_size)?;
        Ok(EntropyReport {
            bits_per_symbol,
            total_bits: symbol_count as f64 * bits_per_symbol,
            minimum_symbols: self.minimum_symbols(alphabet_size, threshold_bits)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn estimator() -> EntropyEstimator {
        EntropyEstimator::default()
    }

    #[test]
    fn test_two_symbol_alphabet_is_one_bit() {
        assert_eq!(estimator().bits_per_symbol(2).unwrap(), 1.0);
    }

    #[test]
    fn test_undersized_alphabets_rejected() {
        for size in [0, 1] {
            assert!(matches!(
                estimator().bits_per_symbol(size),
                Err(EntropyError::InvalidAlphabetSize { .. })
            ));
        }
    }

    #[test]
    fn test_eff_sized_wordlist() {
        // 7776-word diceware list: ~12.925 bits per word.
        let bits = estimator().bits_per_symbol(7776).unwrap();
        assert!((bits - 12.9248).abs() < 1e-3);
    }

    #[test]
    fn test_minimum_symbols_for_128_bit_coin() {
        assert_eq!(estimator().minimum_symbols(2, 128.0).unwrap(), 128);
    }

    #[test]
    fn test_minimum_symbols_for_diceware_threshold() {
        // 77 bits from a 7776-word list takes 6 words.
        assert_eq!(estimator().minimum_symbols(7776, 77.0).unwrap(), 6);
    }

    #[test]
    fn test_minimum_symbols_zero_threshold() {
        assert_eq!(estimator().minimum_symbols(7776, 0.0).unwrap(), 0);
    }

    #[test]
    fn test_total_bits_monotone_in_count() {
        let est = estimator();
        let mut last = -1.0;
        for count in 0..50 {
            let bits = est.total_bits(7776, count).unwrap();
            assert!(bits > last);
            last = bits;
        }
    }

    #[test]
    fn test_total_bits_monotone_in_alphabet_size() {
        let est = estimator();
        let mut last = 0.0;
        for size in [2usize, 10, 26, 62, 94, 7776] {
            let bits = est.total_bits(size, 10).unwrap();
            assert!(bits > last);
            last = bits;
        }
    }

    #[test]
    fn test_range_bits() {
        let est = estimator();
        // 100000..=999999: 900000 outcomes, ~19.78 bits.
        assert!((est.range_bits(100_000, 999_999).unwrap() - 19.7795).abs() < 1e-3);
        // A single outcome carries nothing.
        assert_eq!(est.range_bits(5, 5).unwrap(), 0.0);
    }

    #[test]
    fn test_range_bits_inverted_rejected() {
        assert!(matches!(
            estimator().range_bits(6, 5),
            Err(EntropyError::InvalidRange { min: 6, max: 5 })
        ));
    }

    #[test]
    fn test_shannon_of_unique_list_matches_log2() {
        let est = estimator();
        let words: Vec<String> = (0..7776).map(|i| format!("word{i}")).collect();

        let shannon = est.shannon_bits(&words);
        let log2 = est.bits_per_symbol(7776).unwrap();
        assert!((shannon - log2).abs() < 1e-9);
    }

    #[test]
    fn test_shannon_of_repeated_symbol_is_zero() {
        let words = vec!["same"; 100];
        assert_eq!(estimator().shannon_bits(&words), 0.0);
    }

    #[test]
    fn test_shannon_penalizes_duplicates() {
        let est = estimator();
        let unique = ["a", "b", "c", "d"];
        let skewed = ["a", "a", "a", "b", "c", "d"];

        assert!(est.shannon_bits(&skewed) < est.shannon_bits(&unique));
    }

    #[test]
    fn test_shannon_short_lists_are_zero() {
        let est = estimator();
        assert_eq!(est.shannon_bits::<&str>(&[]), 0.0);
        assert_eq!(est.shannon_bits(&["one"]), 0.0);
    }

    #[test]
    fn test_words_needed_without_numbers() {
        let est = estimator();
        let word_bits = est.bits_per_symbol(7776).unwrap();
        assert_eq!(est.words_needed(word_bits, 0.0, 0, 77.0).unwrap(), 6);
    }

    #[test]
    fn test_words_needed_with_numbers() {
        let est = estimator();
        let word_bits = est.bits_per_symbol(7776).unwrap();
        let number_bits = est.range_bits(100_000, 999_999).unwrap();

        // One six-digit number contributes ~19.78 bits, so 77 bits
        // needs ceil((77 - 19.78) / 12.925) = 5 words.
        assert_eq!(est.words_needed(word_bits, number_bits, 1, 77.0).unwrap(), 5);
    }

    #[test]
    fn test_words_needed_numbers_cover_threshold() {
        let est = estimator();
        let word_bits = est.bits_per_symbol(7776).unwrap();
        let number_bits = est.range_bits(100_000, 999_999).unwrap();

        assert_eq!(
            est.words_needed(word_bits, number_bits, 4, 77.0).unwrap(),
            0
        );
    }

    #[test]
    fn test_words_needed_rejects_degenerate_word_entropy() {
        assert!(matches!(
            estimator().words_needed(0.0, 0.0, 0, 77.0),
            Err(EntropyError::NonPositiveEntropy { .. })
        ));
    }

    #[test]
    fn test_report() {
        let report = estimator().report(94, 12, 77.0).unwrap();

        assert!((report.bits_per_symbol - 6.5546).abs() < 1e-3);
        assert!((report.total_bits - 78.655).abs() < 1e-2);
        assert_eq!(report.minimum_symbols, 12);
    }

    #[test]
    fn test_estimator_backends_agree() {
        let reference = EntropyEstimator::new(NumericBackend::Reference);
        let chunked = EntropyEstimator::new(NumericBackend::Chunked);

        let words: Vec<String> = (0..5000).map(|i| format!("w{}", i % 1234)).collect();
        let a = reference.shannon_bits(&words);
        let b = chunked.shannon_bits(&words);

        assert!(((a - b) / a).abs() < 1e-9);
    }

    proptest! {
        #[test]
        fn prop_total_bits_monotone(size in 2usize..10_000, count in 0usize..1000) {
            let est = EntropyEstimator::default();
            let wider = est.total_bits(size + 1, count + 1).unwrap();
            let longer = est.total_bits(size, count + 1).unwrap();
            prop_assert!(wider > longer);
            prop_assert!(longer > est.total_bits(size, count).unwrap());
        }

        #[test]
        fn prop_minimum_symbols_reaches_threshold(
            size in 2usize..10_000,
            threshold in 0.0f64..512.0,
        ) {
            let est = EntropyEstimator::default();
            let needed = est.minimum_symbols(size, threshold).unwrap();
            prop_assert!(est.total_bits(size, needed).unwrap() >= threshold - 1e-9);
            if needed > 0 {
                prop_assert!(est.total_bits(size, needed - 1).unwrap() < threshold);
            }
        }
    }
}
