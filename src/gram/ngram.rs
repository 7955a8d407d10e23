//! N-gram generation over words or characters.

use std::fmt;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::{FornaxError, Result};

/// Unit used to pad bounded n-grams at the text edges.
pub const PADDING: char = '\0';

/// The unit a gram is built from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum GramModel {
    /// Whitespace-delimited tokens, joined with a single space.
    Word,
    /// Individual characters, concatenated directly.
    #[default]
    Character,
}

impl GramModel {
    /// Get the name of this model.
    pub fn name(&self) -> &'static str {
        match self {
            GramModel::Word => "word",
            GramModel::Character => "character",
        }
    }

    /// Parse a gram model from a string.
    pub fn parse_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "word" | "token" => Ok(GramModel::Word),
            "character" | "char" => Ok(GramModel::Character),
            _ => Err(FornaxError::invalid_argument(format!(
                "Unknown gram model: {s}"
            ))),
        }
    }

    fn split_units(&self, text: &str) -> Vec<String> {
        match self {
            GramModel::Word => text.split_whitespace().map(str::to_string).collect(),
            GramModel::Character => text.chars().map(String::from).collect(),
        }
    }

    fn join(&self, units: &[String]) -> String {
        match self {
            GramModel::Word => units.join(" "),
            GramModel::Character => units.concat(),
        }
    }
}

impl fmt::Display for GramModel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The ordered grams produced from one piece of text.
///
/// Grams keep their positional order and may repeat. The effective size is the
/// requested size clamped to the number of units in the text, so a short text
/// still yields at least one gram.
///
/// # Examples
///
/// ```
/// use fornax::gram::ngram::{GramModel, NgramSet};
///
/// let grams = NgramSet::generate("hello", 2, GramModel::Character, false).unwrap();
/// assert_eq!(grams.grams(), &["he", "el", "ll", "lo"]);
///
/// let words = NgramSet::generate("he is a boy", 6, GramModel::Word, false).unwrap();
/// assert_eq!(words.effective_size(), 4);
/// assert_eq!(words.grams(), &["he is a boy"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NgramSet {
    text: String,
    requested_size: usize,
    effective_size: usize,
    model: GramModel,
    bounded: bool,
    unit_count: usize,
    grams: Vec<String>,
}

impl NgramSet {
    /// Generate the grams of `text`.
    ///
    /// In bounded mode `effective_size - 1` padding units are added on both
    /// sides before the window slides, so edge units appear in as many grams as
    /// interior units.
    ///
    /// # Errors
    ///
    /// - [`FornaxError::InvalidSize`] if `requested_size` is 0
    /// - [`FornaxError::EmptyInput`] if `text` has no units under `model`
    pub fn generate(
        text: &str,
        requested_size: usize,
        model: GramModel,
        bounded: bool,
    ) -> Result<Self> {
        if requested_size == 0 {
            return Err(FornaxError::invalid_size(
                "gram size must be at least 1".to_string(),
            ));
        }

        let mut units = model.split_units(text);
        let unit_count = units.len();
        if unit_count == 0 {
            return Err(FornaxError::empty_input(format!(
                "no {} units in text {text:?}",
                model.name()
            )));
        }

        let effective_size = requested_size.min(unit_count);

        if bounded && effective_size > 1 {
            let pad = vec![PADDING.to_string(); effective_size - 1];
            let mut padded = Vec::with_capacity(unit_count + 2 * pad.len());
            padded.extend(pad.iter().cloned());
            padded.append(&mut units);
            padded.extend(pad);
            units = padded;
        }

        let grams: Vec<String> = units
            .windows(effective_size)
            .map(|window| model.join(window))
            .collect();

        Ok(NgramSet {
            text: text.to_string(),
            requested_size,
            effective_size,
            model,
            bounded,
            unit_count,
            grams,
        })
    }

    /// Generate unpadded grams.
    pub fn unbounded(text: &str, requested_size: usize, model: GramModel) -> Result<Self> {
        Self::generate(text, requested_size, model, false)
    }

    /// Generate boundary-padded grams.
    pub fn bounded(text: &str, requested_size: usize, model: GramModel) -> Result<Self> {
        Self::generate(text, requested_size, model, true)
    }

    /// Get the source text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Get the size that was asked for.
    pub fn requested_size(&self) -> usize {
        self.requested_size
    }

    /// Get the size actually used, `min(requested_size, unit_count)`.
    pub fn effective_size(&self) -> usize {
        self.effective_size
    }

    /// Get the gram model.
    pub fn model(&self) -> GramModel {
        self.model
    }

    /// Whether the grams were padded at the text boundaries.
    pub fn is_bounded(&self) -> bool {
        self.bounded
    }

    /// Number of units the text was split into.
    pub fn unit_count(&self) -> usize {
        self.unit_count
    }

    /// Get the grams in positional order.
    pub fn grams(&self) -> &[String] {
        &self.grams
    }

    /// Number of grams, duplicates included.
    pub fn len(&self) -> usize {
        self.grams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.grams.is_empty()
    }

    /// Iterate over the grams in positional order.
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.grams.iter()
    }

    /// Distinct grams, order discarded.
    pub fn unique(&self) -> AHashSet<&str> {
        self.grams.iter().map(String::as_str).collect()
    }

    /// Consume the set and return its grams.
    pub fn into_grams(self) -> Vec<String> {
        self.grams
    }
}

impl<'a> IntoIterator for &'a NgramSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.grams.iter()
    }
}

/// Generate the grams of `text`. See [`NgramSet::generate`].
pub fn generate(
    text: &str,
    requested_size: usize,
    model: GramModel,
    bounded: bool,
) -> Result<NgramSet> {
    NgramSet::generate(text, requested_size, model, bounded)
}
