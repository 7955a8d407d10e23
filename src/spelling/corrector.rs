//! Main spelling corrector that ties gram retrieval and edit distance together.

use std::sync::Arc;

use log::{debug, info};
use parking_lot::RwLock;
use serde::{Deserialize, Serialize};

use crate::distance::DistanceMetric;
use crate::error::{FornaxError, Result};
use crate::gram::index::{CandidatePolicy, GramIndexConfig};
use crate::gram::ngram::GramModel;
use crate::spelling::lexicon::Lexicon;
use crate::spelling::suggest::{Suggestion, rank};

/// Default minimum similarity for a correction.
pub const DEFAULT_THRESHOLD: f64 = 0.6;

/// Configuration for the spelling corrector.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CorrectorConfig {
    /// Gram size used for indexing and retrieval.
    pub gram_size: usize,
    /// Unit the grams are built from.
    pub gram_model: GramModel,
    /// Whether grams are padded at word boundaries.
    pub bounded: bool,
    /// Minimum number of grams a candidate must share with the word.
    pub min_shared_grams: usize,
    /// Optional cap on the candidate set size.
    pub max_candidates: Option<usize>,
    /// Minimum similarity used by [`SpellingCorrector::correct_default`].
    pub threshold: f64,
    /// Scorer used to rank candidates.
    pub metric: DistanceMetric,
}

impl Default for CorrectorConfig {
    fn default() -> Self {
        CorrectorConfig {
            gram_size: 2,
            gram_model: GramModel::Character,
            bounded: true,
            min_shared_grams: 1,
            max_candidates: None,
            threshold: DEFAULT_THRESHOLD,
            metric: DistanceMetric::Levenshtein,
        }
    }
}

impl CorrectorConfig {
    /// Check the configuration.
    pub fn validate(&self) -> Result<()> {
        if self.gram_size == 0 {
            return Err(FornaxError::invalid_size(
                "corrector gram size must be at least 1".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.threshold) {
            return Err(FornaxError::invalid_config(format!(
                "threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        if self.max_candidates == Some(0) {
            return Err(FornaxError::invalid_config(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        self.metric.validate()
    }

    /// Load a configuration from JSON.
    pub fn from_json(json: &str) -> Result<Self> {
        let config: CorrectorConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// The gram index settings derived from this configuration.
    pub fn index_config(&self) -> GramIndexConfig {
        GramIndexConfig {
            gram_size: self.gram_size,
            model: self.gram_model,
            bounded: self.bounded,
        }
    }

    /// The candidate policy derived from this configuration.
    pub fn candidate_policy(&self) -> CandidatePolicy {
        CandidatePolicy {
            min_shared_grams: self.min_shared_grams,
            max_candidates: self.max_candidates,
        }
    }
}

/// Statistics about the spelling corrector.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrectorStats {
    /// Number of words in the vocabulary.
    pub vocabulary_size: usize,
    /// Number of distinct grams in the index.
    pub distinct_grams: usize,
    /// Name of the scorer in use.
    pub metric: String,
}

/// Suggests dictionary words for out-of-vocabulary input.
///
/// Candidates are the vocabulary words sharing grams with the input; they are
/// scored with the configured [`DistanceMetric`] and the best one at or above
/// the threshold wins. Without such a candidate the normalized input is
/// returned unchanged.
///
/// The vocabulary can be swapped at any time with
/// [`SpellingCorrector::reload_vocabulary`]; readers keep using the lexicon
/// they started with.
///
/// # Examples
///
/// ```
/// use fornax::spelling::SpellingCorrector;
///
/// let corrector = SpellingCorrector::new(["sift", "sifted", "sifting", "shifting"]).unwrap();
/// assert_eq!(corrector.correct("siftingg", 0.6).unwrap(), "sifting");
/// ```
pub struct SpellingCorrector {
    config: CorrectorConfig,
    lexicon: RwLock<Arc<Lexicon>>,
}

impl SpellingCorrector {
    /// Create a corrector over `vocabulary` with the default configuration.
    pub fn new<I, S>(vocabulary: I) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_config(vocabulary, CorrectorConfig::default())
    }

    /// Create a corrector over `vocabulary` with a custom configuration.
    pub fn with_config<I, S>(vocabulary: I, config: CorrectorConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        config.validate()?;
        let lexicon = Lexicon::build(vocabulary, config.index_config())?;

        Ok(SpellingCorrector {
            config,
            lexicon: RwLock::new(Arc::new(lexicon)),
        })
    }

    /// Get the configuration.
    pub fn config(&self) -> &CorrectorConfig {
        &self.config
    }

    /// Get a snapshot of the current lexicon.
    pub fn lexicon(&self) -> Arc<Lexicon> {
        Arc::clone(&self.lexicon.read())
    }

    /// Replace the vocabulary.
    ///
    /// The new lexicon is built before the swap, so concurrent callers see
    /// either the old or the new vocabulary, never a partial one.
    pub fn reload_vocabulary<I, S>(&self, vocabulary: I) -> Result<()>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let lexicon = Lexicon::build(vocabulary, self.config.index_config())?;
        let size = lexicon.len();
        *self.lexicon.write() = Arc::new(lexicon);

        info!("Reloaded vocabulary: {size} words");
        Ok(())
    }

    /// Check if a word is in the vocabulary.
    pub fn is_correct(&self, word: &str) -> bool {
        self.lexicon().contains(&normalize(word))
    }

    /// Every candidate scoring at least `threshold`, best first.
    pub fn suggest(&self, word: &str, threshold: f64) -> Result<Vec<Suggestion>> {
        let normalized = normalized_or_err(word)?;
        let lexicon = self.lexicon();
        self.score_candidates(&lexicon, &normalized, threshold)
    }

    /// Correct a single word.
    ///
    /// Returns the best-scoring vocabulary word at or above `threshold`, or the
    /// normalized (trimmed, lower-cased) input when none qualifies.
    ///
    /// # Errors
    ///
    /// Returns [`FornaxError::EmptyInput`] if the word is blank.
    pub fn correct(&self, word: &str, threshold: f64) -> Result<String> {
        let normalized = normalized_or_err(word)?;
        let lexicon = self.lexicon();

        if lexicon.contains(&normalized) {
            return Ok(normalized);
        }

        let suggestions = self.score_candidates(&lexicon, &normalized, threshold)?;
        match suggestions.into_iter().next() {
            Some(best) => {
                debug!(
                    "Corrected {normalized:?} to {:?} (score {:.3})",
                    best.word, best.score
                );
                Ok(best.word)
            }
            None => {
                debug!("No correction for {normalized:?} at threshold {threshold}");
                Ok(normalized)
            }
        }
    }

    /// Correct a single word with the configured threshold.
    pub fn correct_default(&self, word: &str) -> Result<String> {
        self.correct(word, self.config.threshold)
    }

    /// Get statistics about the corrector.
    pub fn stats(&self) -> CorrectorStats {
        let lexicon = self.lexicon();

        CorrectorStats {
            vocabulary_size: lexicon.len(),
            distinct_grams: lexicon.index().len(),
            metric: self.config.metric.to_string(),
        }
    }

    fn score_candidates(
        &self,
        lexicon: &Lexicon,
        word: &str,
        threshold: f64,
    ) -> Result<Vec<Suggestion>> {
        let candidates = lexicon
            .index()
            .candidates(word, &self.config.candidate_policy())?;

        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        let scores = self.config.metric.batch_distance(word, &words);

        let suggestions = candidates
            .into_iter()
            .zip(scores)
            .map(|(candidate, score)| {
                Suggestion::new(candidate.word, score, candidate.shared_grams)
            })
            .collect();

        Ok(rank(suggestions, threshold))
    }
}

fn normalize(word: &str) -> String {
    word.trim().to_lowercase()
}

fn normalized_or_err(word: &str) -> Result<String> {
    let normalized = normalize(word);
    if normalized.is_empty() {
        return Err(FornaxError::empty_input(
            "cannot correct an empty word".to_string(),
        ));
    }
    Ok(normalized)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<&'static str> {
        vec!["sift", "sifted", "sifting", "shifting"]
    }

    #[test]
    fn test_reference_correction() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();
        assert_eq!(corrector.correct("siftingg", 0.6).unwrap(), "sifting");
    }

    #[test]
    fn test_every_metric_agrees_on_reference() {
        let metrics = [
            DistanceMetric::Levenshtein,
            DistanceMetric::NGram { n: 2 },
            DistanceMetric::jaro_winkler(0.7),
        ];

        for metric in metrics {
            let config = CorrectorConfig {
                metric,
                ..Default::default()
            };
            let corrector = SpellingCorrector::with_config(vocabulary(), config).unwrap();
            assert_eq!(
                corrector.correct("siftingg", 0.6).unwrap(),
                "sifting",
                "{metric}"
            );
        }
    }

    #[test]
    fn test_input_is_normalized() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();

        assert_eq!(corrector.correct("  SIFTINGG ", 0.6).unwrap(), "sifting");
        assert_eq!(corrector.correct(" Sift", 0.6).unwrap(), "sift");
        assert!(corrector.is_correct("SIFTED"));
    }

    #[test]
    fn test_no_candidate_returns_input() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();

        assert_eq!(corrector.correct("Xyzzy", 0.6).unwrap(), "xyzzy");
        // sifting only scores 0.875 against siftingg
        assert_eq!(corrector.correct("siftingg", 0.9).unwrap(), "siftingg");
    }

    #[test]
    fn test_empty_word_rejected() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();

        assert!(matches!(
            corrector.correct("   ", 0.6),
            Err(FornaxError::EmptyInput(_))
        ));
        assert!(corrector.suggest("", 0.6).is_err());
    }

    #[test]
    fn test_suggestions_ranked() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();
        let suggestions = corrector.suggest("siftingg", 0.0).unwrap();

        let words: Vec<&str> = suggestions.iter().map(|s| s.word.as_str()).collect();
        assert_eq!(words, vec!["sifting", "shifting", "sift", "sifted"]);
        assert!((suggestions[0].score - 0.875).abs() < 1e-9);
        assert!((suggestions[1].score - 0.75).abs() < 1e-9);
    }

    #[test]
    fn test_lowering_threshold_keeps_ranking() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();

        let strict = corrector.suggest("siftingg", 0.7).unwrap();
        let loose = corrector.suggest("siftingg", 0.0).unwrap();

        assert!(strict.len() <= loose.len());
        assert_eq!(strict[..], loose[..strict.len()]);
    }

    #[test]
    fn test_max_candidates() {
        let config = CorrectorConfig {
            max_candidates: Some(1),
            ..Default::default()
        };
        let corrector = SpellingCorrector::with_config(vocabulary(), config).unwrap();

        let suggestions = corrector.suggest("siftingg", 0.0).unwrap();
        assert_eq!(suggestions.len(), 1);
        assert_eq!(suggestions[0].word, "sifting");
    }

    #[test]
    fn test_reload_vocabulary() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();
        let before = corrector.lexicon();

        corrector.reload_vocabulary(["apple", "banana"]).unwrap();

        assert_eq!(corrector.correct("appel", 0.5).unwrap(), "apple");
        assert!(!corrector.is_correct("sift"));
        // Snapshots taken before the swap are unaffected.
        assert!(before.contains("sift"));
        assert_eq!(corrector.stats().vocabulary_size, 2);
    }

    #[test]
    fn test_concurrent_corrections() {
        let corrector = SpellingCorrector::new(vocabulary()).unwrap();

        std::thread::scope(|scope| {
            for _ in 0..4 {
                scope.spawn(|| {
                    for _ in 0..50 {
                        assert_eq!(corrector.correct("siftingg", 0.6).unwrap(), "sifting");
                    }
                });
            }
            scope.spawn(|| corrector.reload_vocabulary(vocabulary()).unwrap());
        });
    }

    #[test]
    fn test_config_validation() {
        let config = CorrectorConfig {
            gram_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            SpellingCorrector::with_config(vocabulary(), config),
            Err(FornaxError::InvalidSize(_))
        ));

        let config = CorrectorConfig {
            threshold: 1.5,
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FornaxError::Config(_))));

        let config = CorrectorConfig {
            metric: DistanceMetric::NGram { n: 0 },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(FornaxError::InvalidSize(_))));
    }

    #[test]
    fn test_config_from_json() {
        let config =
            CorrectorConfig::from_json(r#"{"threshold": 0.8, "metric": {"type": "jaro_winkler", "threshold": 0.7}}"#)
                .unwrap();

        assert_eq!(config.threshold, 0.8);
        assert_eq!(config.gram_size, 2);
        assert_eq!(config.metric, DistanceMetric::jaro_winkler(0.7));

        assert!(CorrectorConfig::from_json(r#"{"gram_size": 0}"#).is_err());
    }

    #[test]
    fn test_correct_default_uses_config_threshold() {
        let config = CorrectorConfig {
            threshold: 0.9,
            ..Default::default()
        };
        let corrector = SpellingCorrector::with_config(vocabulary(), config).unwrap();

        assert_eq!(corrector.correct_default("siftingg").unwrap(), "siftingg");
        assert_eq!(corrector.correct("siftingg", 0.6).unwrap(), "sifting");
    }
}
