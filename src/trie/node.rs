//! Generic trie over hashable units.

use std::collections::HashMap;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};

use serde::{Deserialize, Serialize};

use crate::error::{FornaxError, Result};

/// A node of a [`Trie`]. Each node owns its children outright.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash",
    deserialize = "K: Deserialize<'de> + Eq + Hash"
))]
pub struct TrieNode<K> {
    children: HashMap<K, TrieNode<K>>,
    terminal: bool,
}

impl<K> Default for TrieNode<K> {
    fn default() -> Self {
        TrieNode {
            children: HashMap::new(),
            terminal: false,
        }
    }
}

// Long entries form deep chains; tear them down without recursing.
impl<K> Drop for TrieNode<K> {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode<K>> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

impl<K: Eq + Hash> TrieNode<K> {
    /// Whether a complete entry ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Get the child reached by `unit`.
    pub fn child(&self, unit: &K) -> Option<&TrieNode<K>> {
        self.children.get(unit)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }
}

impl<K: Eq + Hash> PartialEq for TrieNode<K> {
    fn eq(&self, other: &Self) -> bool {
        self.terminal == other.terminal && self.children == other.children
    }
}

impl<K: Eq + Hash> Eq for TrieNode<K> {}

impl<K: Eq + Hash> Hash for TrieNode<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.terminal.hash(state);
        self.children.len().hash(state);

        // Children are unordered: combine per-child hashes commutatively.
        let mut combined: u64 = 0;
        for (unit, child) in &self.children {
            let mut hasher = DefaultHasher::new();
            unit.hash(&mut hasher);
            child.hash(&mut hasher);
            combined = combined.wrapping_add(hasher.finish());
        }
        combined.hash(state);
    }
}

/// A prefix tree mapping unit sequences to membership.
///
/// Equality and hashing are structural: two tries are equal when their child
/// mappings and terminal marks match recursively.
///
/// Insertion, lookup, deletion, prefix enumeration and dropping are iterative
/// and handle entries of any length. Equality, hashing, cloning and
/// serialization recurse once per unit and are meant for word-sized entries.
///
/// # Examples
///
/// ```
/// use fornax::trie::Trie;
///
/// let mut trie: Trie<char> = Trie::new();
/// trie.insert("cat".chars()).unwrap();
///
/// assert!(trie.search(&['c', 'a', 't']).unwrap());
/// assert!(!trie.search(&['c', 'a']).unwrap());
/// assert!(trie.delete(&['c', 'a', 't']).unwrap());
/// assert!(trie.is_empty());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(bound(
    serialize = "K: Serialize + Eq + Hash",
    deserialize = "K: Deserialize<'de> + Eq + Hash"
))]
pub struct Trie<K> {
    root: TrieNode<K>,
    len: usize,
}

impl<K> Default for Trie<K> {
    fn default() -> Self {
        Trie {
            root: TrieNode::default(),
            len: 0,
        }
    }
}

impl<K: Eq + Hash> PartialEq for Trie<K> {
    fn eq(&self, other: &Self) -> bool {
        self.root == other.root
    }
}

impl<K: Eq + Hash> Eq for Trie<K> {}

impl<K: Eq + Hash> Hash for Trie<K> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.root.hash(state);
    }
}

impl<K: Eq + Hash + Clone> Trie<K> {
    /// Create an empty trie.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the root (empty-prefix) node.
    pub fn root(&self) -> &TrieNode<K> {
        &self.root
    }

    /// Number of complete entries.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.root = TrieNode::default();
        self.len = 0;
    }

    /// Insert a sequence. Returns `false` if it was already present.
    ///
    /// # Errors
    ///
    /// Returns [`FornaxError::EmptyInput`] for an empty sequence.
    pub fn insert<I>(&mut self, sequence: I) -> Result<bool>
    where
        I: IntoIterator<Item = K>,
    {
        let mut node = &mut self.root;
        let mut units = 0;
        for unit in sequence {
            node = node.children.entry(unit).or_default();
            units += 1;
        }

        if units == 0 {
            return Err(FornaxError::empty_input(
                "cannot insert an empty sequence".to_string(),
            ));
        }

        if node.terminal {
            Ok(false)
        } else {
            node.terminal = true;
            self.len += 1;
            Ok(true)
        }
    }

    /// Whether `sequence` was inserted as a complete entry.
    ///
    /// A strict prefix of an entry is not a match.
    pub fn search(&self, sequence: &[K]) -> Result<bool> {
        ensure_non_empty(sequence, "search")?;
        Ok(self.find(sequence).is_some_and(|node| node.terminal))
    }

    /// Whether any entry starts with `prefix`.
    pub fn starts_with(&self, prefix: &[K]) -> bool {
        self.find(prefix)
            .is_some_and(|node| node.terminal || !node.children.is_empty())
    }

    /// Delete `sequence`, pruning nodes that no longer lead to an entry.
    ///
    /// Returns `false`, leaving the trie untouched, if the sequence was never
    /// present.
    pub fn delete(&mut self, sequence: &[K]) -> Result<bool> {
        ensure_non_empty(sequence, "delete")?;

        let Some(cut) = self.prune_depth(sequence) else {
            return Ok(false);
        };

        let depth = if cut == 0 { sequence.len() } else { cut - 1 };
        let mut node = &mut self.root;
        for unit in &sequence[..depth] {
            node = match node.children.get_mut(unit) {
                Some(child) => child,
                None => return Ok(false),
            };
        }

        if cut == 0 {
            node.terminal = false;
        } else {
            node.children.remove(&sequence[cut - 1]);
        }

        self.len -= 1;
        Ok(true)
    }

    /// Depth of the first node to unlink when deleting `sequence`, `0` when
    /// only the terminal mark is cleared, or `None` if the entry is absent.
    fn prune_depth(&self, sequence: &[K]) -> Option<usize> {
        let mut path = Vec::with_capacity(sequence.len());
        let mut node = &self.root;
        for unit in sequence {
            node = node.children.get(unit)?;
            path.push(node);
        }
        if !node.terminal {
            return None;
        }

        // The entry's own node goes if it is a leaf; each ancestor then goes
        // while its only child is the one being removed and no entry ends there.
        if !node.children.is_empty() {
            return Some(0);
        }
        let mut cut = path.len();
        while cut > 1 {
            let parent = path[cut - 2];
            if parent.terminal || parent.children.len() > 1 {
                break;
            }
            cut -= 1;
        }
        Some(cut)
    }

    /// Every entry beginning with `prefix`, in no particular order.
    pub fn entries_with_prefix(&self, prefix: &[K]) -> Vec<Vec<K>> {
        let mut entries = Vec::new();
        if let Some(start) = self.find(prefix) {
            let mut path = prefix.to_vec();
            collect(start, &mut path, &mut entries);
        }
        entries
    }

    fn find(&self, sequence: &[K]) -> Option<&TrieNode<K>> {
        sequence
            .iter()
            .try_fold(&self.root, |node, unit| node.children.get(unit))
    }
}

fn ensure_non_empty<K>(sequence: &[K], operation: &str) -> Result<()> {
    if sequence.is_empty() {
        return Err(FornaxError::empty_input(format!(
            "cannot {operation} an empty sequence"
        )));
    }
    Ok(())
}

fn collect<K: Eq + Hash + Clone>(start: &TrieNode<K>, path: &mut Vec<K>, out: &mut Vec<Vec<K>>) {
    if start.terminal {
        out.push(path.clone());
    }

    let mut stack = vec![start.children.iter()];
    while let Some(children) = stack.last_mut() {
        match children.next() {
            Some((unit, child)) => {
                path.push(unit.clone());
                if child.terminal {
                    out.push(path.clone());
                }
                stack.push(child.children.iter());
            }
            None => {
                stack.pop();
                if !stack.is_empty() {
                    path.pop();
                }
            }
        }
    }
}
