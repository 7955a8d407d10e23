//! String front-ends over the generic trie.

use serde::{Deserialize, Serialize};

use crate::error::{FornaxError, Result};
use crate::trie::node::Trie;

/// A trie of words stored as character sequences.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WordTrie {
    trie: Trie<char>,
}

impl WordTrie {
    /// Create an empty word trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a trie from a list of words, skipping blank entries.
    pub fn from_words<I, S>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut trie = WordTrie::new();
        for word in words {
            let word = word.as_ref().trim();
            if word.is_empty() {
                continue;
            }
            trie.insert(word)?;
        }
        Ok(trie)
    }

    /// Insert a word. Returns `false` if it was already present.
    pub fn insert(&mut self, word: &str) -> Result<bool> {
        self.trie.insert(word.chars())
    }

    /// Whether `word` is a complete entry.
    pub fn search(&self, word: &str) -> Result<bool> {
        self.trie.search(&word.chars().collect::<Vec<_>>())
    }

    /// Like [`WordTrie::search`], but an empty word is simply absent.
    pub fn contains(&self, word: &str) -> bool {
        self.search(word).unwrap_or(false)
    }

    /// Delete a word. Returns `false` if it was never present.
    pub fn delete(&mut self, word: &str) -> Result<bool> {
        self.trie.delete(&word.chars().collect::<Vec<_>>())
    }

    /// Whether any word starts with `prefix`.
    pub fn starts_with(&self, prefix: &str) -> bool {
        self.trie.starts_with(&prefix.chars().collect::<Vec<_>>())
    }

    /// Words beginning with `prefix`, sorted.
    pub fn words_with_prefix(&self, prefix: &str) -> Vec<String> {
        let mut words: Vec<String> = self
            .trie
            .entries_with_prefix(&prefix.chars().collect::<Vec<_>>())
            .into_iter()
            .map(|entry| entry.into_iter().collect())
            .collect();
        words.sort();
        words
    }

    /// Number of words.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }

    /// Get the underlying character trie.
    pub fn as_trie(&self) -> &Trie<char> {
        &self.trie
    }
}

/// A trie of token sequences, e.g. multi-word stop phrases.
///
/// Tokens are trimmed and lower-cased before being used as keys.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TokenTrie {
    trie: Trie<String>,
}

impl TokenTrie {
    /// Create an empty token trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a token sequence. Returns `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`FornaxError::EmptyInput`] if `tokens` is empty or a token is blank.
    pub fn insert<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<bool> {
        let keys = normalize(tokens)?;
        self.trie.insert(keys)
    }

    /// Whether `tokens` is a complete entry.
    pub fn search<S: AsRef<str>>(&self, tokens: &[S]) -> Result<bool> {
        self.trie.search(&normalize(tokens)?)
    }

    /// Delete a token sequence. Returns `false` if it was never present.
    pub fn delete<S: AsRef<str>>(&mut self, tokens: &[S]) -> Result<bool> {
        self.trie.delete(&normalize(tokens)?)
    }

    /// Whether any entry starts with the given tokens.
    pub fn starts_with<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let keys: Vec<String> = tokens.iter().map(|t| normalize_token(t.as_ref())).collect();
        self.trie.starts_with(&keys)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.trie.len()
    }

    pub fn is_empty(&self) -> bool {
        self.trie.is_empty()
    }
}

fn normalize_token(token: &str) -> String {
    token.trim().to_lowercase()
}

fn normalize<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    if tokens.is_empty() {
        return Err(FornaxError::empty_input(
            "token sequence must not be empty".to_string(),
        ));
    }
    tokens
        .iter()
        .map(|t| {
            let token = normalize_token(t.as_ref());
            if token.is_empty() {
                Err(FornaxError::empty_input(
                    "tokens must not be blank".to_string(),
                ))
            } else {
                Ok(token)
            }
        })
        .collect()
}
