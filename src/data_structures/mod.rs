//! Data structures for Lanai.
//!
//! All implementations are safe Rust with exclusive ownership of their
//! nodes; none of them provide internal synchronization.

pub mod lanai_trie;

pub use lanai_trie::{Trie, TrieNode};
