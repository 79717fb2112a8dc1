// Copyright (c) 2025 Lanai Authors
//
// Licensed under dual license:
// - MIT License (LICENSE-MIT or https://opensource.org/licenses/MIT)
// - Apache License, Version 2.0 (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)

//! Node implementation for the Lanai Trie.
//!
//! A node owns its children by value, keyed by the single character on the
//! edge leading to them. There is no link back to the parent, so anything that
//! needs to walk upwards (erase) has to carry the path itself.

use std::fmt::{self, Display, Formatter};

use fnv::FnvHashMap;
use serde::ser::{SerializeMap, SerializeStruct};
use serde::{Serialize, Serializer};

/// A node in the Lanai Trie.
///
/// Each node corresponds to one character transition. Terminal nodes mark the
/// end of a stored key.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TrieNode {
    /// Children keyed by the character on the connecting edge
    children: FnvHashMap<char, TrieNode>,

    /// Whether some stored key ends exactly at this node
    terminal: bool,
}

impl TrieNode {
    /// Creates a new empty, non-terminal trie node.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if this node has no children.
    pub fn is_leaf(&self) -> bool {
        self.children.is_empty()
    }

    /// Returns `true` if a stored key ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.terminal
    }

    /// Marks or unmarks this node as the end of a stored key.
    pub fn set_terminal(&mut self, terminal: bool) {
        self.terminal = terminal;
    }

    /// Returns the child reached through `c`, if there is one.
    pub fn child(&self, c: char) -> Option<&TrieNode> {
        self.children.get(&c)
    }

    /// Mutable counterpart of [`TrieNode::child`].
    pub fn child_mut(&mut self, c: char) -> Option<&mut TrieNode> {
        self.children.get_mut(&c)
    }

    /// Returns the child reached through `c`, inserting an empty non-terminal
    /// child first when none exists.
    ///
    /// Calling this repeatedly with the same character hands back the same
    /// node until it is removed.
    pub fn child_or_create(&mut self, c: char) -> &mut TrieNode {
        self.children.entry(c).or_default()
    }

    /// Detaches the child reached through `c` and returns it.
    ///
    /// Siblings are left untouched. Returns `None` if there is no such child.
    pub fn remove_child(&mut self, c: char) -> Option<TrieNode> {
        self.children.remove(&c)
    }

    /// Number of direct children.
    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    /// Iterates over direct children in arbitrary order.
    pub fn children(&self) -> impl Iterator<Item = (char, &TrieNode)> + '_ {
        self.children.iter().map(|(c, child)| (*c, child))
    }

    /// Direct children sorted by character, for deterministic output.
    pub(crate) fn sorted_children(&self) -> Vec<(char, &TrieNode)> {
        let mut children: Vec<_> = self.children().collect();
        children.sort_unstable_by_key(|(c, _)| *c);
        children
    }

    /// Drops every child of this node.
    pub(crate) fn clear_children(&mut self) {
        self.children.clear();
    }

    /// Number of nodes below this one, not counting itself.
    pub(crate) fn descendant_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += node.children.len();
            stack.extend(node.children.values());
        }
        count
    }

    /// Number of terminal nodes in this subtree, including itself.
    pub(crate) fn terminal_count(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += usize::from(node.terminal);
            stack.extend(node.children.values());
        }
        count
    }
}

/// Detaches descendants onto a work list so that dropping a long chain does
/// not recurse once per character.
impl Drop for TrieNode {
    fn drop(&mut self) {
        let mut pending: Vec<TrieNode> = self.children.drain().map(|(_, child)| child).collect();
        while let Some(mut node) = pending.pop() {
            pending.extend(node.children.drain().map(|(_, child)| child));
        }
    }
}

/// Pieces of the rendered form, consumed from the top of a stack.
enum Piece<'a> {
    Text(&'static str),
    Edge(char),
    Node(&'a TrieNode),
}

/// Renders as `{a=<child>, b=<child>}, <terminal>` or just `<terminal>` for a leaf.
impl Display for TrieNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let mut stack = vec![Piece::Node(self)];
        while let Some(piece) = stack.pop() {
            match piece {
                Piece::Text(text) => f.write_str(text)?,
                Piece::Edge(c) => write!(f, "{c}=")?,
                Piece::Node(node) if node.is_leaf() => write!(f, "{}", node.terminal)?,
                Piece::Node(node) => {
                    f.write_str("{")?;
                    stack.push(Piece::Text(if node.terminal { "true" } else { "false" }));
                    stack.push(Piece::Text("}, "));
                    for (i, (c, child)) in node.sorted_children().into_iter().enumerate().rev() {
                        stack.push(Piece::Node(child));
                        stack.push(Piece::Edge(c));
                        if i > 0 {
                            stack.push(Piece::Text(", "));
                        }
                    }
                }
            }
        }
        Ok(())
    }
}

/// Children are emitted in character order.
struct SortedChildren<'a>(&'a TrieNode);

impl Serialize for SortedChildren<'_> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let children = self.0.sorted_children();
        let mut map = serializer.serialize_map(Some(children.len()))?;
        for (c, child) in children {
            map.serialize_entry(&c, child)?;
        }
        map.end()
    }
}

impl Serialize for TrieNode {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("TrieNode", 2)?;
        state.serialize_field("terminal", &self.terminal)?;
        state.serialize_field("children", &SortedChildren(self))?;
        state.end()
    }
}
