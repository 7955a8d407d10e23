//! Ranked correction suggestions.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

/// A correction candidate scored against the misspelled word.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The suggested word.
    pub word: String,
    /// Similarity to the misspelled word (higher is better, 0.0 to 1.0).
    pub score: f64,
    /// Number of grams the suggestion shares with the misspelled word.
    pub shared_grams: usize,
}

impl Suggestion {
    /// Create a new suggestion.
    pub fn new(word: String, score: f64, shared_grams: usize) -> Self {
        Suggestion {
            word,
            score,
            shared_grams,
        }
    }
}

impl Eq for Suggestion {}

impl Ord for Suggestion {
    fn cmp(&self, other: &Self) -> Ordering {
        // Higher scores come first, then more shared grams, then by word.
        other
            .score
            .total_cmp(&self.score)
            .then_with(|| other.shared_grams.cmp(&self.shared_grams))
            .then_with(|| self.word.cmp(&other.word))
    }
}

impl PartialOrd for Suggestion {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Drop suggestions scoring below `threshold` and sort the rest best-first.
///
/// The order does not depend on `threshold`: lowering it only appends
/// lower-scored suggestions after the ones already kept.
pub fn rank(mut suggestions: Vec<Suggestion>, threshold: f64) -> Vec<Suggestion> {
    suggestions.retain(|suggestion| suggestion.score >= threshold);
    suggestions.sort();
    suggestions
}
