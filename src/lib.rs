//! Lanai Library
//!
//! A character-keyed prefix tree plus the pieces needed to drive it from the
//! command line: layered configuration, error reporting and a small session
//! wrapper that loads keys and renders the tree.
//!
//! The trie lives in [`data_structures::lanai_trie`]; everything else is
//! plumbing around it.

pub mod config;
pub mod data_structures;
pub mod error;
pub mod session;

#[cfg(test)]
pub(crate) mod tests;

/// Version information for Lanai.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
