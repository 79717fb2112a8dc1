// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Lanai Trie Implementation
//!
//! A prefix tree keyed by `char` sequences. Every edge carries exactly one
//! character, every node may be marked terminal, and there is no path
//! compression: a key of `n` characters always occupies `n` nodes below the
//! root.
//!
//! Every operation takes its key as `Option<&str>`. `None` is an ordinary
//! input meaning "no key": inserting it does nothing, and searching or erasing
//! it reports `false`.
//!
//! # Example
//!
//! ```
//! use lanai_lib::data_structures::lanai_trie::Trie;
//!
//! let mut trie = Trie::empty();
//! trie.insert(Some("car"));
//! trie.insert(Some("carpet"));
//!
//! assert!(trie.search(Some("car")));
//! assert!(!trie.search(Some("carp")));
//!
//! // "car" is a prefix of "carpet", so its nodes survive the erase
//! assert!(trie.erase(Some("car")));
//! assert!(!trie.search(Some("car")));
//! assert!(trie.search(Some("carpet")));
//! assert!(trie.depth_first_search(Some("car")).is_some());
//! ```

mod node;

#[cfg(test)]
mod tests;

use std::fmt::{self, Display, Formatter};

use serde::{Serialize, Serializer};
use tracing::{debug, trace};

pub use node::TrieNode;

/// What an erase finds at the end of a key's path.
struct PathEnd {
    terminal: bool,
    leaf: bool,
    /// Depth of the deepest node on the path that must survive the erase
    anchor: usize,
}

/// Lanai Trie, a character-keyed prefix tree.
///
/// The root node is never terminal, so the empty string can never be a stored
/// key. The only way to obtain a trie is [`Trie::empty`].
#[derive(Debug)]
pub struct Trie {
    /// Entry point into the tree; never marked terminal
    root: TrieNode,
}

impl Trie {
    /// Creates a trie whose root has no children and is not terminal.
    pub fn empty() -> Self {
        Self {
            root: TrieNode::new(),
        }
    }

    /// Returns the root node.
    pub fn root(&self) -> &TrieNode {
        &self.root
    }

    /// Inserts `word`, creating one node per character not already present
    /// and marking the last one terminal.
    ///
    /// Inserting `None` does nothing. Inserting `""` walks zero characters and
    /// lands on the root, which stays non-terminal.
    pub fn insert(&mut self, word: Option<&str>) {
        let Some(word) = word else {
            return;
        };

        let mut current = &mut self.root;
        for c in word.chars() {
            current = current.child_or_create(c);
        }

        // Only the root is reachable with zero characters
        if !word.is_empty() {
            current.set_terminal(true);
        }
    }

    /// Returns `true` if no key of length one or more is stored.
    pub fn is_empty(&self) -> bool {
        self.root.is_leaf()
    }

    /// Returns `true` if `word` was inserted and has not been erased since.
    pub fn search(&self, word: Option<&str>) -> bool {
        self.depth_first_search(word)
            .is_some_and(TrieNode::is_terminal)
    }

    /// Follows `word` from the root one character at a time.
    ///
    /// Returns the node reached after the last character whether or not it is
    /// terminal, or `None` as soon as a character has no matching child. The
    /// empty string resolves to the root itself.
    pub fn depth_first_search(&self, word: Option<&str>) -> Option<&TrieNode> {
        let word = word?;

        let mut current = &self.root;
        for c in word.chars() {
            current = current.child(c)?;
        }
        Some(current)
    }

    /// Erases `word` and prunes the nodes it no longer needs.
    ///
    /// Returns `true` if the character path for `word` exists, even when its
    /// final node was never terminal and nothing changes. Use
    /// [`Trie::search`] first to learn whether `word` was actually stored.
    ///
    /// Nodes are removed from the deepest one upwards for as long as each is
    /// both childless and non-terminal. Unwinding stops at the first ancestor
    /// that ends a shorter key or branches towards another key. The root is
    /// never removed.
    pub fn erase(&mut self, word: Option<&str>) -> bool {
        let Some(word) = word else {
            return false;
        };

        let chars: Vec<char> = word.chars().collect();
        let Some(end) = self.locate(&chars) else {
            debug!(key = word, found = false, "erase skipped, path absent");
            return false;
        };

        if !end.terminal {
            debug!(key = word, found = true, pruned = 0, "erase left a non-terminal path");
            return true;
        }

        if let Some(node) = Self::descend_mut(&mut self.root, &chars) {
            node.set_terminal(false);
        }

        let mut pruned = 0;
        if end.leaf {
            let edge = chars[end.anchor];
            if let Some(anchor) = Self::descend_mut(&mut self.root, &chars[..end.anchor]) {
                anchor.remove_child(edge);
                pruned = chars.len() - end.anchor;
                trace!(edge = %edge, depth = end.anchor, pruned, "detached dead suffix");
            }
        }

        debug!(key = word, found = true, pruned, "erased");
        true
    }

    /// Walks `chars` from the root and reports what an erase would find at
    /// the end of the path, or `None` when the path breaks off.
    fn locate(&self, chars: &[char]) -> Option<PathEnd> {
        let mut anchor = 0;
        let mut current = &self.root;
        for (depth, &c) in chars.iter().enumerate() {
            if current.is_terminal() || current.child_count() > 1 {
                anchor = depth;
            }
            current = current.child(c)?;
        }

        Some(PathEnd {
            terminal: current.is_terminal(),
            leaf: current.is_leaf(),
            anchor,
        })
    }

    fn descend_mut<'a>(mut node: &'a mut TrieNode, chars: &[char]) -> Option<&'a mut TrieNode> {
        for &c in chars {
            node = node.child_mut(c)?;
        }
        Some(node)
    }

    /// Number of stored keys.
    ///
    /// Walks the whole tree.
    pub fn len(&self) -> usize {
        self.root.terminal_count()
    }

    /// Number of nodes below the root.
    pub fn node_count(&self) -> usize {
        self.root.descendant_count()
    }

    /// Every stored key in ascending order.
    pub fn keys(&self) -> Vec<String> {
        let mut keys = Vec::new();
        let mut prefix = String::new();
        let mut pending = vec![self.root.sorted_children().into_iter()];

        while let Some(siblings) = pending.last_mut() {
            match siblings.next() {
                Some((c, child)) => {
                    prefix.push(c);
                    if child.is_terminal() {
                        keys.push(prefix.clone());
                    }
                    pending.push(child.sorted_children().into_iter());
                }
                None => {
                    pending.pop();
                    prefix.pop();
                }
            }
        }
        keys
    }

    /// Drops every stored key.
    pub fn clear(&mut self) {
        let dropped = self.node_count();
        self.root.clear_children();
        debug!(dropped, "trie cleared");
    }
}

/// One line per child of the root, `{c -> <node>}`, or `{}` when empty.
impl Display for Trie {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("{}");
        }

        for (i, (c, child)) in self.root.sorted_children().into_iter().enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            write!(f, "{{{c} -> {child}}}")?;
        }
        Ok(())
    }
}

impl Serialize for Trie {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}
