//! Query types and automaton states.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The structural type of a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryType {
    /// Several plain tokens.
    Free,
    /// A single plain token.
    KeyWord,
    /// `X AND Y`, `X OR Y`, `X NOT Y`, or `&X` / `!X`.
    Boolean,
    /// A double-quoted phrase.
    Phrase,
    /// `field:term`.
    Zone,
    /// `X >N`.
    Frequency,
    /// `X $N Y` (adjacency) or `X %N Y` (fuzzy distance).
    Proximity,
    /// A slash-delimited pattern, `/pattern/`.
    Regex,
    /// `term*`, `*term` or `term*term`.
    WildCard,
    /// `term?`.
    Truncated,
}

impl QueryType {
    /// Every query type.
    pub const ALL: [QueryType; 10] = [
        QueryType::Free,
        QueryType::KeyWord,
        QueryType::Boolean,
        QueryType::Phrase,
        QueryType::Zone,
        QueryType::Frequency,
        QueryType::Proximity,
        QueryType::Regex,
        QueryType::WildCard,
        QueryType::Truncated,
    ];

    /// Get the name of this query type.
    pub fn name(&self) -> &'static str {
        match self {
            QueryType::Free => "free",
            QueryType::KeyWord => "keyword",
            QueryType::Boolean => "boolean",
            QueryType::Phrase => "phrase",
            QueryType::Zone => "zone",
            QueryType::Frequency => "frequency",
            QueryType::Proximity => "proximity",
            QueryType::Regex => "regex",
            QueryType::WildCard => "wildcard",
            QueryType::Truncated => "truncated",
        }
    }
}

impl fmt::Display for QueryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Start state of the classification automaton.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AutomatonState {
    /// The query contains whitespace.
    Spaceful,
    /// The query is a single run of non-whitespace characters.
    Spaceless,
}

const SPACEFUL_ACCEPTS: &[QueryType] = &[
    QueryType::Phrase,
    QueryType::Regex,
    QueryType::WildCard,
    QueryType::Truncated,
    QueryType::Boolean,
    QueryType::Proximity,
    QueryType::Frequency,
];

const SPACELESS_ACCEPTS: &[QueryType] = &[
    QueryType::Phrase,
    QueryType::Regex,
    QueryType::WildCard,
    QueryType::Truncated,
    QueryType::Boolean,
    QueryType::Zone,
];

impl AutomatonState {
    /// Select the start state for an already trimmed query.
    pub fn of(query: &str) -> Self {
        if query.chars().any(char::is_whitespace) {
            AutomatonState::Spaceful
        } else {
            AutomatonState::Spaceless
        }
    }

    /// The types reachable from this state, in test order.
    pub fn accepts(&self) -> &'static [QueryType] {
        match self {
            AutomatonState::Spaceful => SPACEFUL_ACCEPTS,
            AutomatonState::Spaceless => SPACELESS_ACCEPTS,
        }
    }

    /// The type assigned when no pattern matches.
    pub fn fallback(&self) -> QueryType {
        match self {
            AutomatonState::Spaceful => QueryType::Free,
            AutomatonState::Spaceless => QueryType::KeyWord,
        }
    }
}

/// Full result of classifying a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// The structural type.
    pub query_type: QueryType,
    /// The state the automaton started in (for grouped queries, the state of
    /// the innermost group).
    pub state: AutomatonState,
    /// Whether the query was wrapped in precedence parentheses.
    pub grouped: bool,
}
