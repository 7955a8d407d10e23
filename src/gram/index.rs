//! Gram-based inverted index and candidate retrieval.
//!
//! Every vocabulary word is posted under each distinct gram it contains. A
//! query word is decomposed the same way and only the postings for its grams
//! are consulted, so the candidate set handed to an edit-distance scorer is
//! bounded by gram co-occurrence instead of the whole vocabulary.

use ahash::{AHashMap, AHashSet};
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::error::{FornaxError, Result};
use crate::gram::ngram::{GramModel, NgramSet};

/// How grams are produced for indexing and lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GramIndexConfig {
    /// Requested gram size.
    pub gram_size: usize,
    /// Unit the grams are built from.
    pub model: GramModel,
    /// Whether grams are padded at word boundaries.
    pub bounded: bool,
}

impl Default for GramIndexConfig {
    fn default() -> Self {
        GramIndexConfig {
            gram_size: 2,
            model: GramModel::Character,
            bounded: true,
        }
    }
}

/// Minimum-overlap policy applied when collecting candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CandidatePolicy {
    /// A candidate must share at least this many distinct grams with the query.
    pub min_shared_grams: usize,
    /// Upper bound on the candidate set. When exceeded, the shared-gram bar is
    /// raised until the set fits or only the best-overlapping words remain.
    pub max_candidates: Option<usize>,
}

impl Default for CandidatePolicy {
    fn default() -> Self {
        CandidatePolicy {
            min_shared_grams: 1,
            max_candidates: None,
        }
    }
}

/// A vocabulary word retrieved for a query word.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Candidate {
    /// The vocabulary word.
    pub word: String,
    /// Number of distinct query grams the word contains.
    pub shared_grams: usize,
}

/// Immutable mapping from gram to the vocabulary words containing it.
///
/// Built once and then only read, so it can be shared across threads behind an
/// `Arc`. Rebuilding means constructing a new index and swapping it in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GramIndex {
    config: GramIndexConfig,
    postings: AHashMap<String, AHashSet<String>>,
    vocabulary_size: usize,
}

impl GramIndex {
    /// Build an index over `vocabulary`.
    ///
    /// Blank entries are skipped. Duplicate words are indexed once.
    pub fn build<I, S>(vocabulary: I, config: GramIndexConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if config.gram_size == 0 {
            return Err(FornaxError::invalid_size(
                "gram index size must be at least 1".to_string(),
            ));
        }

        let mut postings: AHashMap<String, AHashSet<String>> = AHashMap::new();
        let mut seen: AHashSet<String> = AHashSet::new();

        for entry in vocabulary {
            let word = entry.as_ref().trim();
            if word.is_empty() {
                warn!("Skipping blank vocabulary entry");
                continue;
            }
            if !seen.insert(word.to_string()) {
                continue;
            }

            let grams = NgramSet::generate(word, config.gram_size, config.model, config.bounded)?;
            for gram in grams.unique() {
                postings
                    .entry(gram.to_string())
                    .or_default()
                    .insert(word.to_string());
            }
        }

        info!(
            "Built gram index: {} words, {} distinct {}-grams ({})",
            seen.len(),
            postings.len(),
            config.gram_size,
            config.model
        );

        Ok(GramIndex {
            config,
            postings,
            vocabulary_size: seen.len(),
        })
    }

    /// Get the configuration the index was built with.
    pub fn config(&self) -> &GramIndexConfig {
        &self.config
    }

    /// Number of distinct grams.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Number of distinct words indexed.
    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary_size
    }

    /// Get the posting set for a gram.
    pub fn posting(&self, gram: &str) -> Option<&AHashSet<String>> {
        self.postings.get(gram)
    }

    /// Iterate over the indexed grams.
    pub fn grams(&self) -> impl Iterator<Item = &str> {
        self.postings.keys().map(String::as_str)
    }

    /// Generate the grams of `word` the same way vocabulary words were indexed.
    pub fn grams_of(&self, word: &str) -> Result<NgramSet> {
        NgramSet::generate(
            word,
            self.config.gram_size,
            self.config.model,
            self.config.bounded,
        )
    }

    /// Restrict the index to the postings of the given grams.
    pub fn sub_index<'a>(&'a self, grams: &NgramSet) -> SubIndex<'a> {
        let postings = grams
            .unique()
            .into_iter()
            .filter_map(|gram| {
                self.postings
                    .get_key_value(gram)
                    .map(|(key, posting)| (key.as_str(), posting))
            })
            .collect();

        SubIndex { postings }
    }

    /// Retrieve the candidate words for `word` under `policy`.
    pub fn candidates(&self, word: &str, policy: &CandidatePolicy) -> Result<Vec<Candidate>> {
        let grams = self.grams_of(word)?;
        let candidates = self.sub_index(&grams).candidates(policy);

        debug!(
            "Retrieved {} candidates for {:?} from {} grams",
            candidates.len(),
            word,
            grams.len()
        );

        Ok(candidates)
    }
}

/// A borrowed view of the postings matching one query's grams.
#[derive(Debug, Clone)]
pub struct SubIndex<'a> {
    postings: Vec<(&'a str, &'a AHashSet<String>)>,
}

impl<'a> SubIndex<'a> {
    /// Number of query grams present in the index.
    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    /// Grams of the view.
    pub fn grams(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.postings.iter().map(|(gram, _)| *gram)
    }

    /// Count shared grams per word and keep those meeting the policy.
    ///
    /// The result is ordered by shared-gram count (descending), then by word.
    pub fn candidates(&self, policy: &CandidatePolicy) -> Vec<Candidate> {
        let mut shared: AHashMap<&'a str, usize> = AHashMap::new();
        for &(_, posting) in &self.postings {
            for word in posting {
                *shared.entry(word.as_str()).or_insert(0) += 1;
            }
        }

        let bar = overlap_bar(&shared, policy);

        let mut candidates: Vec<Candidate> = shared
            .into_iter()
            .filter(|(_, count)| *count >= bar)
            .map(|(word, shared_grams)| Candidate {
                word: word.to_string(),
                shared_grams,
            })
            .collect();

        candidates.sort_by(|a, b| {
            b.shared_grams
                .cmp(&a.shared_grams)
                .then_with(|| a.word.cmp(&b.word))
        });
        candidates
    }
}

/// Smallest shared-gram count satisfying the policy.
fn overlap_bar(shared: &AHashMap<&str, usize>, policy: &CandidatePolicy) -> usize {
    let mut bar = policy.min_shared_grams.max(1);

    if let Some(max_candidates) = policy.max_candidates {
        let top = shared.values().copied().max().unwrap_or(0);
        while bar < top && shared.values().filter(|&&count| count >= bar).count() > max_candidates
        {
            bar += 1;
        }
    }

    bar
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vocabulary() -> Vec<&'static str> {
        vec!["sift", "sifted", "sifting", "shifting"]
    }

    #[test]
    fn test_build_postings() {
        let index = GramIndex::build(vocabulary(), GramIndexConfig::default()).unwrap();

        assert_eq!(index.vocabulary_size(), 4);
        let posting = index.posting("if").unwrap();
        assert_eq!(posting.len(), 4);
        assert!(posting.contains("shifting"));

        let posting = index.posting("sh").unwrap();
        assert_eq!(posting.len(), 1);
        assert!(index.posting("zz").is_none());
    }

    #[test]
    fn test_posting_has_unique_members() {
        let index = GramIndex::build(["banana", "banana"], GramIndexConfig::default()).unwrap();

        assert_eq!(index.vocabulary_size(), 1);
        assert_eq!(index.posting("an").unwrap().len(), 1);
    }

    #[test]
    fn test_blank_entries_skipped() {
        let index = GramIndex::build(["", "  ", "cat"], GramIndexConfig::default()).unwrap();
        assert_eq!(index.vocabulary_size(), 1);
    }

    #[test]
    fn test_invalid_gram_size() {
        let config = GramIndexConfig {
            gram_size: 0,
            ..Default::default()
        };
        assert!(matches!(
            GramIndex::build(vocabulary(), config),
            Err(FornaxError::InvalidSize(_))
        ));
    }

    #[test]
    fn test_candidates_ranked_by_overlap() {
        let index = GramIndex::build(vocabulary(), GramIndexConfig::default()).unwrap();
        let candidates = index
            .candidates("siftingg", &CandidatePolicy::default())
            .unwrap();

        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["sifting", "shifting", "sift", "sifted"]);
        assert_eq!(candidates[0].shared_grams, 8);
        assert_eq!(candidates[1].shared_grams, 7);
    }

    #[test]
    fn test_candidates_without_overlap() {
        let index = GramIndex::build(["apple", "sifting"], GramIndexConfig::default()).unwrap();
        let candidates = index
            .candidates("zzz", &CandidatePolicy::default())
            .unwrap();
        assert!(candidates.is_empty());
    }

    #[test]
    fn test_min_shared_grams() {
        let index = GramIndex::build(vocabulary(), GramIndexConfig::default()).unwrap();
        let policy = CandidatePolicy {
            min_shared_grams: 5,
            max_candidates: None,
        };
        let candidates = index.candidates("siftingg", &policy).unwrap();
        assert_eq!(candidates.len(), 2);
    }

    #[test]
    fn test_max_candidates_raises_bar() {
        let index = GramIndex::build(vocabulary(), GramIndexConfig::default()).unwrap();

        let policy = CandidatePolicy {
            min_shared_grams: 1,
            max_candidates: Some(2),
        };
        let candidates = index.candidates("siftingg", &policy).unwrap();
        let words: Vec<&str> = candidates.iter().map(|c| c.word.as_str()).collect();
        assert_eq!(words, vec!["sifting", "shifting"]);

        let policy = CandidatePolicy {
            min_shared_grams: 1,
            max_candidates: Some(1),
        };
        let candidates = index.candidates("siftingg", &policy).unwrap();
        assert_eq!(candidates.len(), 1);
        assert_eq!(candidates[0].word, "sifting");
    }

    #[test]
    fn test_sub_index_only_holds_query_grams() {
        let index = GramIndex::build(vocabulary(), GramIndexConfig::default()).unwrap();
        let grams = index.grams_of("shh").unwrap();
        let sub = index.sub_index(&grams);

        // "\0s" and "sh" are indexed, "hh" and "h\0" are not
        assert_eq!(sub.len(), 2);
        assert!(sub.grams().all(|gram| gram == "\0s" || gram == "sh"));
    }

    #[test]
    fn test_word_model_index() {
        let config = GramIndexConfig {
            gram_size: 1,
            model: GramModel::Word,
            bounded: false,
        };
        let index = GramIndex::build(["new york", "new jersey", "york"], config).unwrap();

        assert_eq!(index.posting("new").unwrap().len(), 2);
        assert_eq!(index.posting("york").unwrap().len(), 2);
    }

    #[test]
    fn test_serde_round_trip() {
        let index = GramIndex::build(vocabulary(), GramIndexConfig::default()).unwrap();
        let json = serde_json::to_string(&index).unwrap();
        let restored: GramIndex = serde_json::from_str(&json).unwrap();

        assert_eq!(restored.len(), index.len());
        assert_eq!(restored.vocabulary_size(), 4);
        let posting = restored.posting("if").unwrap();
        assert!(vocabulary().iter().all(|word| posting.contains(*word)));
    }
}
