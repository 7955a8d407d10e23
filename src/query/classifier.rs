//! Regex-driven query classifier.

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

use crate::error::{FornaxError, Result};
use crate::query::query_type::{AutomatonState, Classification, QueryType};

const PHRASE: &str = r#"^"[^"]+"$"#;
const REGEX: &str = r"(?s)^/.+/$";
const BOOLEAN_KEYWORD: &str = r"^\S+(?:\s+(?:AND|OR|NOT)\s+\S+)+$";
const PROXIMITY: &str = r"^\S+\s+[$%]\d+\s+\S+$";
const FREQUENCY: &str = r"^(?:\S+\s+)+>\d+$";
const ZONE: &str = r"^\w+:\S+$";

// Token-level patterns, embedded into a whole-query pattern by `any_token`.
const WILDCARD_TOKEN: &str = r"(?:\w{2,}[\w*]*\*[\w*]*|[\w*]*\*[\w*]*\w{2,})";
const TRUNCATED_TOKEN: &str = r"\w{2,}\?";
const SYMBOLIC_BOOLEAN_TOKEN: &str = r"[&!]\w\S*";

/// Whole-query pattern matching when at least one token matches `token`.
fn any_token(token: &str) -> String {
    format!(r"^(?:\S+\s+)*{token}(?:\s+\S+)*$")
}

fn compile(pattern: &str) -> Result<Regex> {
    Regex::new(pattern).map_err(|e| FornaxError::query(format!("Invalid query pattern: {e}")))
}

static DEFAULT_CLASSIFIER: LazyLock<Result<QueryClassifier>> = LazyLock::new(QueryClassifier::new);

/// Classifies raw query strings into [`QueryType`]s.
///
/// Patterns are tested in a fixed order and the first match wins:
/// grouping parentheses (the inner query is classified instead), phrase,
/// regex, wildcard, truncation, boolean, proximity, frequency, zone. Only the
/// patterns accepted by the query's [`AutomatonState`] are tried.
///
/// # Examples
///
/// ```
/// use fornax::query::{QueryClassifier, QueryType};
///
/// let classifier = QueryClassifier::new().unwrap();
/// assert_eq!(classifier.classify("mit AND apache").unwrap(), QueryType::Boolean);
/// assert_eq!(classifier.classify("fornax is awesome").unwrap(), QueryType::Free);
/// ```
#[derive(Debug, Clone)]
pub struct QueryClassifier {
    phrase: Regex,
    regex: Regex,
    wildcard: Regex,
    truncated: Regex,
    boolean_keyword: Regex,
    boolean_symbolic: Regex,
    proximity: Regex,
    frequency: Regex,
    zone: Regex,
}

impl QueryClassifier {
    /// Compile the classifier patterns.
    pub fn new() -> Result<Self> {
        Ok(QueryClassifier {
            phrase: compile(PHRASE)?,
            regex: compile(REGEX)?,
            wildcard: compile(&any_token(WILDCARD_TOKEN))?,
            truncated: compile(&any_token(TRUNCATED_TOKEN))?,
            boolean_keyword: compile(BOOLEAN_KEYWORD)?,
            boolean_symbolic: compile(&any_token(SYMBOLIC_BOOLEAN_TOKEN))?,
            proximity: compile(PROXIMITY)?,
            frequency: compile(FREQUENCY)?,
            zone: compile(ZONE)?,
        })
    }

    /// Classify a query.
    ///
    /// # Errors
    ///
    /// Returns [`FornaxError::EmptyInput`] if the query is empty after trimming.
    pub fn classify(&self, query: &str) -> Result<QueryType> {
        self.classify_detailed(query).map(|c| c.query_type)
    }

    /// Classify a query, also reporting the start state and grouping.
    pub fn classify_detailed(&self, query: &str) -> Result<Classification> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return Err(FornaxError::empty_input(
                "cannot classify an empty query".to_string(),
            ));
        }

        let (query, grouped) = strip_groups(trimmed);

        let state = AutomatonState::of(query);
        let query_type = state
            .accepts()
            .iter()
            .copied()
            .find(|query_type| self.matches(*query_type, query))
            .unwrap_or_else(|| state.fallback());

        debug!("Classified {query:?} as {query_type} ({state:?}, grouped: {grouped})");

        Ok(Classification {
            query_type,
            state,
            grouped,
        })
    }

    fn matches(&self, query_type: QueryType, query: &str) -> bool {
        match query_type {
            QueryType::Phrase => self.phrase.is_match(query),
            QueryType::Regex => self.regex.is_match(query),
            QueryType::WildCard => self.wildcard.is_match(query),
            QueryType::Truncated => self.truncated.is_match(query),
            QueryType::Boolean => {
                self.boolean_keyword.is_match(query) || self.boolean_symbolic.is_match(query)
            }
            QueryType::Proximity => self.proximity.is_match(query),
            QueryType::Frequency => self.frequency.is_match(query),
            QueryType::Zone => self.zone.is_match(query),
            QueryType::Free | QueryType::KeyWord => false,
        }
    }
}

/// Strip every pair of parentheses enclosing the whole (trimmed) query.
///
/// A pair encloses the query when its opening parenthesis is the first
/// character and is closed by the last one, so `(a) OR (b)` is left alone.
/// Stripping stops before a group with blank content. Returns the innermost
/// query and whether any pair was stripped.
fn strip_groups(query: &str) -> (&str, bool) {
    let bytes = query.as_bytes();

    let mut closing: Vec<Option<usize>> = vec![None; bytes.len()];
    let mut open = Vec::new();
    for (i, &byte) in bytes.iter().enumerate() {
        match byte {
            b'(' => open.push(i),
            b')' => {
                if let Some(start) = open.pop() {
                    closing[start] = Some(i);
                }
            }
            _ => {}
        }
    }

    let (mut lo, mut hi) = (0, bytes.len());
    let mut grouped = false;
    while hi - lo >= 2 && bytes[lo] == b'(' && closing[lo] == Some(hi - 1) {
        let inner = &query[lo + 1..hi - 1];
        let content = inner.trim();
        if content.is_empty() {
            break;
        }

        lo = lo + 1 + (inner.len() - inner.trim_start().len());
        hi = lo + content.len();
        grouped = true;
    }

    (&query[lo..hi], grouped)
}

/// Classify a query with the shared default classifier.
pub fn classify(query: &str) -> Result<QueryType> {
    default_classifier()?.classify(query)
}

/// Classify a query with the shared default classifier, with details.
pub fn classify_detailed(query: &str) -> Result<Classification> {
    default_classifier()?.classify_detailed(query)
}

fn default_classifier() -> Result<&'static QueryClassifier> {
    DEFAULT_CLASSIFIER
        .as_ref()
        .map_err(|e| FornaxError::query(format!("Query classifier unavailable: {e}")))
}
