//! N-gram edit distance.
//!
//! Both strings are left-padded with `n - 1` padding characters and the
//! edit-distance recurrence is run over n-gram windows instead of single
//! characters. Substituting one window for another costs the fraction of
//! mismatched positions, where positions on which both windows hold padding
//! are left out of the fraction.

use crate::distance::{DistanceScore, StringDistance, boundary_score};
use crate::error::{FornaxError, Result};
use crate::gram::ngram::PADDING;

/// N-gram edit distance with gram size `n`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NGramDistance {
    pub(crate) n: usize,
}

impl NGramDistance {
    /// Create an n-gram distance.
    ///
    /// # Errors
    ///
    /// Returns [`FornaxError::InvalidSize`] if `n` is 0.
    pub fn new(n: usize) -> Result<Self> {
        if n == 0 {
            return Err(FornaxError::invalid_size(
                "n-gram distance size must be at least 1".to_string(),
            ));
        }
        Ok(NGramDistance { n })
    }

    /// Get the gram size.
    pub fn n(&self) -> usize {
        self.n
    }
}

impl Default for NGramDistance {
    fn default() -> Self {
        NGramDistance {
            n: super::DEFAULT_NGRAM_SIZE,
        }
    }
}

impl StringDistance for NGramDistance {
    fn distance(&self, a: &str, b: &str) -> DistanceScore {
        let source: Vec<char> = a.chars().collect();
        let target: Vec<char> = b.chars().collect();
        if let Some(score) = boundary_score(&source, &target) {
            return score;
        }

        let n = self.n.max(1);
        let source_len = source.len();
        let target_len = target.len();
        let max_len = source_len.max(target_len) as f64;

        // Too short for a single gram: fraction of aligned equal characters.
        if source_len < n || target_len < n {
            let matches = source
                .iter()
                .zip(&target)
                .filter(|(s, t)| s == t)
                .count();
            return matches as f64 / max_len;
        }

        let padded_source = left_pad(&source, n - 1);
        let padded_target = left_pad(&target, n - 1);

        let mut prev_row: Vec<f64> = (0..=source_len).map(|i| i as f64).collect();
        let mut curr_row = vec![0.0; source_len + 1];

        for j in 1..=target_len {
            let target_gram = &padded_target[j - 1..j - 1 + n];
            curr_row[0] = j as f64;

            for i in 1..=source_len {
                let source_gram = &padded_source[i - 1..i - 1 + n];

                let mut mismatches = 0;
                let mut positions = n;
                for (s, t) in source_gram.iter().zip(target_gram) {
                    if s != t {
                        mismatches += 1;
                    } else if *s == PADDING {
                        positions -= 1;
                    }
                }
                let substitution = mismatches as f64 / positions as f64;

                curr_row[i] = (curr_row[i - 1] + 1.0)
                    .min(prev_row[i] + 1.0)
                    .min(prev_row[i - 1] + substitution);
            }

            std::mem::swap(&mut prev_row, &mut curr_row);
        }

        (1.0 - prev_row[source_len] / max_len).clamp(0.0, 1.0)
    }

    fn name(&self) -> &'static str {
        "ngram"
    }
}

fn left_pad(chars: &[char], width: usize) -> Vec<char> {
    let mut padded = vec![PADDING; width];
    padded.extend_from_slice(chars);
    padded
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_size() {
        assert!(matches!(
            NGramDistance::new(0),
            Err(FornaxError::InvalidSize(_))
        ));
        assert_eq!(NGramDistance::new(3).unwrap().n(), 3);
        assert_eq!(NGramDistance::default().n(), 2);
    }

    #[test]
    fn test_identity_and_disjoint() {
        let scorer = NGramDistance::default();

        assert_eq!(scorer.distance("sifting", "sifting"), 1.0);
        assert_eq!(scorer.distance("abc", "xyz"), 0.0);
    }

    #[test]
    fn test_unigram_matches_levenshtein() {
        use crate::distance::LevenshteinDistance;

        let unigram = NGramDistance::new(1).unwrap();
        for (a, b) in [("kitten", "sitting"), ("flaw", "lawn"), ("abc", "abd")] {
            let expected = LevenshteinDistance.distance(a, b);
            assert!((unigram.distance(a, b) - expected).abs() < 1e-9);
        }
    }

    #[test]
    fn test_single_substitution() {
        let scorer = NGramDistance::default();

        // The last window differs in one of two positions: cost 0.5.
        // The window after it is never formed, so the substituted character
        // is only half-charged.
        let score = scorer.distance("abc", "abd");
        assert!((score - (1.0 - 0.5 / 3.0)).abs() < 1e-9);
    }

    #[test]
    fn test_short_string_fallback() {
        let scorer = NGramDistance::new(3).unwrap();

        assert!((scorer.distance("ab", "a") - 0.5).abs() < 1e-9);
        assert!((scorer.distance("ab", "ba") - 0.0).abs() < 1e-9);
        assert!((scorer.distance("ab", "abc") - 2.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_ranks_closer_words_higher() {
        let scorer = NGramDistance::default();

        let close = scorer.distance("siftingg", "sifting");
        let far = scorer.distance("siftingg", "sifted");
        assert!(close > far);
        assert!(close > 0.8);
    }
}
