//! Normalized string distances used to rank correction candidates.
//!
//! Every scorer maps a pair of strings to a score in `[0, 1]` where `1.0`
//! means identical. Identical strings always score exactly `1.0`; if exactly
//! one side is empty the score is `0.0`.

pub mod jaro_winkler;
pub mod levenshtein;
pub mod ngram;

use std::fmt;

use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::{FornaxError, Result};

pub use jaro_winkler::JaroWinklerDistance;
pub use levenshtein::{LevenshteinDistance, levenshtein_edits};
pub use ngram::NGramDistance;

/// Similarity in `[0, 1]`, `1.0` for identical strings.
pub type DistanceScore = f64;

/// Default gram size of [`NGramDistance`].
pub const DEFAULT_NGRAM_SIZE: usize = 2;

/// Default threshold above which the Winkler prefix bonus applies.
pub const DEFAULT_JARO_WINKLER_THRESHOLD: f64 = 0.7;

/// Candidate count from which batch scoring runs on the rayon pool.
pub const PARALLEL_CUTOFF: usize = 100;

/// A normalized string distance.
pub trait StringDistance: Send + Sync {
    /// Score the similarity of `a` and `b`.
    fn distance(&self, a: &str, b: &str) -> DistanceScore;

    /// Get the name of this distance.
    fn name(&self) -> &'static str;
}

/// Shared edge cases of every scorer: identical input and empty input.
pub(crate) fn boundary_score(a: &[char], b: &[char]) -> Option<DistanceScore> {
    if a == b {
        Some(1.0)
    } else if a.is_empty() || b.is_empty() {
        Some(0.0)
    } else {
        None
    }
}

/// The available string distances, selected by configuration.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Default)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DistanceMetric {
    /// Normalized Levenshtein edit distance.
    #[default]
    Levenshtein,
    /// Edit distance over padded character n-grams.
    #[serde(rename = "ngram")]
    NGram {
        /// Gram size, at least 1.
        n: usize,
    },
    /// Jaro similarity with the Winkler prefix bonus.
    JaroWinkler {
        /// Jaro score from which the prefix bonus applies.
        threshold: f64,
    },
}

impl DistanceMetric {
    /// An n-gram distance with gram size `n`.
    pub fn ngram(n: usize) -> Result<Self> {
        NGramDistance::new(n).map(|scorer| DistanceMetric::NGram { n: scorer.n() })
    }

    /// A Jaro-Winkler distance with the given bonus threshold.
    pub fn jaro_winkler(threshold: f64) -> Self {
        DistanceMetric::JaroWinkler { threshold }
    }

    /// Check the parameters of this metric.
    pub fn validate(&self) -> Result<()> {
        match *self {
            DistanceMetric::Levenshtein => Ok(()),
            DistanceMetric::NGram { n } => NGramDistance::new(n).map(|_| ()),
            DistanceMetric::JaroWinkler { threshold } => {
                if (0.0..=1.0).contains(&threshold) {
                    Ok(())
                } else {
                    Err(FornaxError::invalid_config(format!(
                        "Jaro-Winkler threshold must be within [0, 1], got {threshold}"
                    )))
                }
            }
        }
    }

    /// Parse a distance metric from a string, using default parameters.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "levenshtein" | "lev" => Ok(DistanceMetric::Levenshtein),
            "ngram" | "n-gram" => Ok(DistanceMetric::NGram {
                n: DEFAULT_NGRAM_SIZE,
            }),
            "jaro-winkler" | "jaro_winkler" | "jw" => Ok(DistanceMetric::JaroWinkler {
                threshold: DEFAULT_JARO_WINKLER_THRESHOLD,
            }),
            _ => Err(FornaxError::invalid_argument(format!(
                "Unknown distance metric: {s}"
            ))),
        }
    }

    /// Score many candidates against one query, in parallel for large batches.
    pub fn batch_distance<S>(&self, query: &str, candidates: &[S]) -> Vec<DistanceScore>
    where
        S: AsRef<str> + Sync,
    {
        if candidates.len() < PARALLEL_CUTOFF {
            return candidates
                .iter()
                .map(|candidate| self.distance(query, candidate.as_ref()))
                .collect();
        }

        candidates
            .par_iter()
            .map(|candidate| self.distance(query, candidate.as_ref()))
            .collect()
    }
}

impl StringDistance for DistanceMetric {
    fn distance(&self, a: &str, b: &str) -> DistanceScore {
        match *self {
            DistanceMetric::Levenshtein => LevenshteinDistance.distance(a, b),
            DistanceMetric::NGram { n } => NGramDistance { n }.distance(a, b),
            DistanceMetric::JaroWinkler { threshold } => {
                JaroWinklerDistance { threshold }.distance(a, b)
            }
        }
    }

    fn name(&self) -> &'static str {
        match self {
            DistanceMetric::Levenshtein => "levenshtein",
            DistanceMetric::NGram { .. } => "ngram",
            DistanceMetric::JaroWinkler { .. } => "jaro_winkler",
        }
    }
}

impl fmt::Display for DistanceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistanceMetric::Levenshtein => write!(f, "levenshtein"),
            DistanceMetric::NGram { n } => write!(f, "ngram(n={n})"),
            DistanceMetric::JaroWinkler { threshold } => {
                write!(f, "jaro_winkler(threshold={threshold})")
            }
        }
    }
}

/// Score `a` against `b` with the given metric.
pub fn distance(metric: &DistanceMetric, a: &str, b: &str) -> DistanceScore {
    metric.distance(a, b)
}
