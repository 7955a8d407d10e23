//! The vocabulary as seen by the corrector.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::gram::index::{GramIndex, GramIndexConfig};
use crate::trie::WordTrie;

/// A vocabulary indexed by grams, plus a trie for exact membership.
///
/// Immutable once built. The corrector replaces the whole lexicon when the
/// vocabulary changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Lexicon {
    index: GramIndex,
    words: WordTrie,
}

impl Lexicon {
    /// Build a lexicon from already normalized vocabulary words.
    pub fn build<I, S>(vocabulary: I, config: GramIndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words: Vec<String> = vocabulary
            .into_iter()
            .map(|word| word.as_ref().trim().to_string())
            .filter(|word| !word.is_empty())
            .collect();

        Ok(Lexicon {
            index: GramIndex::build(&words, config)?,
            words: WordTrie::from_words(&words)?,
        })
    }

    /// Get the gram index.
    pub fn index(&self) -> &GramIndex {
        &self.index
    }

    /// Get the membership trie.
    pub fn words(&self) -> &WordTrie {
        &self.words
    }

    /// Whether `word` is in the vocabulary.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of distinct words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
