//! Spelling correction over a gram-indexed vocabulary.
//!
//! Candidates for a misspelled word are the vocabulary words sharing grams
//! with it (see [`crate::gram`]); they are ranked by a [`crate::distance`]
//! scorer and the best one above a threshold is the correction.

pub mod corrector;
pub mod lexicon;
pub mod suggest;

pub use corrector::{CorrectorConfig, CorrectorStats, DEFAULT_THRESHOLD, SpellingCorrector};
pub use lexicon::Lexicon;
pub use suggest::{Suggestion, rank};
