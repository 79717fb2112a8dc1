//! Session configuration module.
//!
//! Controls which keys are loaded into the trie before a command runs and how
//! the trie is printed afterwards.

use super::ConfigResult;
use super::Validate;
use crate::error::config::ConfigError;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How a trie is rendered on output.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable debug rendering
    #[default]
    Text,
    /// Structured JSON dump
    Json,
}

/// Session configuration.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct SessionConfig {
    /// Keys inserted before any command runs
    pub preload: Vec<String>,

    /// Newline-separated file of keys inserted before any command runs
    pub words_file: Option<PathBuf>,

    /// Output format for printed tries
    pub output: OutputFormat,
}

impl Validate for SessionConfig {
    fn validate(&self) -> ConfigResult<()> {
        if let Some(path) = &self.words_file {
            if path.as_os_str().is_empty() {
                return Err(ConfigError::ValidationError(
                    "words_file cannot be an empty path".to_string(),
                ));
            }
        }

        Ok(())
    }
}
