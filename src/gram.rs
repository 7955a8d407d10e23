//! Gram decomposition and the gram-based inverted index.
//!
//! Text is split into positional grams by [`ngram`]; vocabulary words are
//! indexed by their grams in [`index`] so that correction candidates can be
//! retrieved by gram co-occurrence before any edit distance is computed.

pub mod index;
pub mod ngram;

pub use index::*;
pub use ngram::*;
