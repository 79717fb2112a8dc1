//! Test modules for Lanai.
//!
//! Crate-level suites that cut across modules:
//! - Configuration loading and validation
//! - Error types and reporting
//! - Sessions built from configuration and word files
//! - Shared fixtures and proptest strategies


pub use test_utils::{word_list_strategy, TestFixture};
