//! Levenshtein distance for spelling correction.

use std::cmp::min;

use crate::distance::{DistanceScore, StringDistance, boundary_score};

/// Calculate the Levenshtein distance between two strings.
///
/// This is the minimum number of single-character edits (insertions,
/// deletions, or substitutions) required to change one word into another.
/// Only two rows of `len(a) + 1` costs are kept.
pub fn levenshtein_edits(a: &str, b: &str) -> usize {
    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();
    edits(&a_chars, &b_chars)
}

fn edits(a: &[char], b: &[char]) -> usize {
    if a.is_empty() {
        return b.len();
    }
    if b.is_empty() {
        return a.len();
    }

    let mut prev_row: Vec<usize> = (0..=a.len()).collect();
    let mut curr_row = vec![0; a.len() + 1];

    for (j, b_char) in b.iter().enumerate() {
        curr_row[0] = j + 1;

        for (i, a_char) in a.iter().enumerate() {
            let cost = if a_char == b_char { 0 } else { 1 };

            curr_row[i + 1] = min(
                min(
                    curr_row[i] + 1,     // insertion
                    prev_row[i + 1] + 1, // deletion
                ),
                prev_row[i] + cost, // substitution
            );
        }

        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[a.len()]
}

/// Levenshtein distance normalized by the longer string:
/// `1 - edits / max(len(a), len(b))`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LevenshteinDistance;

impl StringDistance for LevenshteinDistance {
    fn distance(&self, a: &str, b: &str) -> DistanceScore {
        let a_chars: Vec<char> = a.chars().collect();
        let b_chars: Vec<char> = b.chars().collect();
        if let Some(score) = boundary_score(&a_chars, &b_chars) {
            return score;
        }

        let max_len = a_chars.len().max(b_chars.len());
        1.0 - edits(&a_chars, &b_chars) as f64 / max_len as f64
    }

    fn name(&self) -> &'static str {
        "levenshtein"
    }
}
