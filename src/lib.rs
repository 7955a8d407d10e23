//! # Fornax
//!
//! Query-side text processing for a small retrieval engine.
//!
//! ## Features
//!
//! - Structural query classification (phrase, boolean, proximity, wildcard, ...)
//! - Bounded and unbounded n-gram decomposition over characters or words
//! - A gram-based inverted index for candidate retrieval
//! - Normalized Levenshtein, n-gram and Jaro-Winkler string distances
//! - Spelling correction with hot-swappable vocabularies
//! - Generic prefix trees over characters or tokens

pub mod cli;
pub mod distance;
pub mod error;
pub mod gram;
pub mod query;
pub mod spelling;
pub mod trie;

pub mod prelude {
    pub use crate::distance::{DistanceMetric, StringDistance};
    pub use crate::error::{FornaxError, Result};
    pub use crate::gram::{GramIndex, GramIndexConfig, GramModel, NgramSet};
    pub use crate::query::{QueryClassifier, QueryType, classify};
    pub use crate::spelling::{CorrectorConfig, SpellingCorrector, Suggestion};
    pub use crate::trie::{TokenTrie, Trie, WordTrie};
}

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
