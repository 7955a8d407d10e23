//! Structural classification of raw query strings.
//!
//! A query is routed to one of two automaton states by a single whitespace
//! probe, then tested against that state's ordered structural patterns. The
//! first pattern that matches decides the [`QueryType`]; a query matching none
//! of them is free text (several tokens) or a keyword (one token).

pub mod classifier;
pub mod query_type;

pub use classifier::*;
pub use query_type::*;
