//! Prefix trees for exact membership over character or token sequences.
//!
//! [`Trie`] is generic over its unit type. [`WordTrie`] stores words as
//! character sequences, [`TokenTrie`] stores token sequences with tokens
//! trimmed and lower-cased before use. Entries are inserted and deleted
//! incrementally; deletion prunes every node left without children or a
//! terminal mark.
//!
//! A trie is not internally synchronized. Concurrent writers must serialize
//! access themselves, e.g. with a `parking_lot::RwLock` around the trie.

pub mod node;
pub mod word;

pub use node::*;
pub use word::*;
