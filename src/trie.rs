//! Character prefix tree used to decide whether a candidate can still grow
//! into a dictionary word.
//!
//! The tree stores paths only. It has no end-of-word marker: whether a path
//! spells a complete word is answered by the lexicon's word set.

use std::collections::HashMap;

/// A node in the Trie
#[derive(Debug, Clone, Default)]
pub struct TrieNode {
    /// Children nodes, keyed by character
    pub children: HashMap<char, TrieNode>,
}

impl TrieNode {
    /// Create a new empty node
    pub fn new() -> Self {
        TrieNode::default()
    }

    /// Check if this node has any children
    pub fn can_walk(&self) -> bool {
        !self.children.is_empty()
    }
}

/// A prefix tree keyed by Unicode scalar values
#[derive(Debug, Default, Clone)]
pub struct Trie {
    root: TrieNode,
    /// Number of nodes below the root
    node_count: usize,
}

impl Trie {
    /// Create a new empty Trie
    pub fn new() -> Self {
        Trie::default()
    }

    /// Number of distinct non-empty prefixes stored
    pub fn len(&self) -> usize {
        self.node_count
    }

    /// Check if the trie holds no path at all
    pub fn is_empty(&self) -> bool {
        self.node_count == 0
    }

    /// Add the character path of `word`
    pub fn insert(&mut self, word: &str) {
        let mut current = &mut self.root;
        let mut added = 0;

        for c in word.chars() {
            current = current.children.entry(c).or_insert_with(|| {
                added += 1;
                TrieNode::new()
            });
        }

        self.node_count += added;
    }

    /// Walk the trie by one character, returning the next node if it exists
    pub fn walk<'a>(&'a self, c: char, current: Option<&'a TrieNode>) -> Option<&'a TrieNode> {
        let node = current.unwrap_or(&self.root);
        node.children.get(&c)
    }

    /// Check whether `s` is a prefix of some inserted word (or a word itself).
    ///
    /// The empty string is a prefix of everything.
    pub fn is_prefix(&self, s: &str) -> bool {
        let mut current = &self.root;

        for c in s.chars() {
            match current.children.get(&c) {
                Some(node) => current = node,
                None => return false,
            }
        }

        true
    }

    /// Get a reference to the root node (for external traversal)
    pub fn root(&self) -> &TrieNode {
        &self.root
    }
}
