//! Jaro-Winkler similarity.

use crate::distance::{DEFAULT_JARO_WINKLER_THRESHOLD, DistanceScore, StringDistance, boundary_score};

/// Jaro similarity with the Winkler common-prefix bonus.
///
/// The bonus `min(0.1, 1 / max_len) * prefix * (1 - j)` is only added when the
/// Jaro score `j` reaches `threshold`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct JaroWinklerDistance {
    pub(crate) threshold: f64,
}

impl JaroWinklerDistance {
    pub fn new(threshold: f64) -> Self {
        JaroWinklerDistance { threshold }
    }

    /// Get the bonus threshold.
    pub fn threshold(&self) -> f64 {
        self.threshold
    }
}

impl Default for JaroWinklerDistance {
    fn default() -> Self {
        JaroWinklerDistance {
            threshold: DEFAULT_JARO_WINKLER_THRESHOLD,
        }
    }
}

/// Match statistics of two strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Matches {
    matches: usize,
    transpositions: usize,
    prefix: usize,
    max_len: usize,
}

fn matches(s1: &[char], s2: &[char]) -> Matches {
    let (longer, shorter) = if s1.len() > s2.len() {
        (s1, s2)
    } else {
        (s2, s1)
    };

    let range = (longer.len() / 2).saturating_sub(1);
    let mut match_indexes: Vec<Option<usize>> = vec![None; shorter.len()];
    let mut match_flags = vec![false; longer.len()];
    let mut matches = 0;

    for (mi, c) in shorter.iter().enumerate() {
        let start = mi.saturating_sub(range);
        let end = (mi + range + 1).min(longer.len());
        for xi in start..end {
            if !match_flags[xi] && *c == longer[xi] {
                match_indexes[mi] = Some(xi);
                match_flags[xi] = true;
                matches += 1;
                break;
            }
        }
    }

    let shorter_matched = shorter
        .iter()
        .zip(&match_indexes)
        .filter(|(_, index)| index.is_some())
        .map(|(c, _)| c);
    let longer_matched = longer
        .iter()
        .zip(&match_flags)
        .filter(|(_, flag)| **flag)
        .map(|(c, _)| c);
    let half_transpositions = shorter_matched
        .zip(longer_matched)
        .filter(|(a, b)| a != b)
        .count();

    let prefix = s1
        .iter()
        .zip(s2)
        .take_while(|(a, b)| a == b)
        .count();

    Matches {
        matches,
        transpositions: half_transpositions / 2,
        prefix,
        max_len: longer.len(),
    }
}

impl StringDistance for JaroWinklerDistance {
    fn distance(&self, a: &str, b: &str) -> DistanceScore {
        let s1: Vec<char> = a.chars().collect();
        let s2: Vec<char> = b.chars().collect();
        if let Some(score) = boundary_score(&s1, &s2) {
            return score;
        }

        let stats = matches(&s1, &s2);
        if stats.matches == 0 {
            return 0.0;
        }

        let m = stats.matches as f64;
        let jaro = (m / s1.len() as f64
            + m / s2.len() as f64
            + (m - stats.transpositions as f64) / m)
            / 3.0;

        if jaro < self.threshold {
            return jaro;
        }

        let scale = (1.0 / stats.max_len as f64).min(0.1);
        jaro + scale * stats.prefix as f64 * (1.0 - jaro)
    }

    fn name(&self) -> &'static str {
        "jaro_winkler"
    }
}
