//! Trie session driven by configuration.
//!
//! A session owns one [`Trie`], preloaded from the configured keys and word
//! file, and knows how to render it in the configured output format.

use std::fs;
use std::path::Path;

use tracing::{debug, info};

use crate::config::session::{OutputFormat, SessionConfig};
use crate::data_structures::lanai_trie::Trie;
use crate::error::LanaiResult;

/// A trie together with its output settings.
#[derive(Debug)]
pub struct Session {
    trie: Trie,
    output: OutputFormat,
}

impl Session {
    /// Builds a session from `config`, inserting the configured preload keys,
    /// then every line of the configured word file, then `extra`.
    pub fn from_config(config: &SessionConfig, extra: &[String]) -> LanaiResult<Self> {
        let mut trie = Trie::empty();

        for word in &config.preload {
            trie.insert(Some(word.as_str()));
        }

        if let Some(path) = &config.words_file {
            let words = read_words(path)?;
            info!(path = %path.display(), count = words.len(), "loaded word file");
            for word in &words {
                trie.insert(Some(word.as_str()));
            }
        }

        for word in extra {
            trie.insert(Some(word.as_str()));
        }

        debug!(keys = trie.len(), nodes = trie.node_count(), "session ready");

        Ok(Self {
            trie,
            output: config.output,
        })
    }

    /// Returns the session's trie.
    pub fn trie(&self) -> &Trie {
        &self.trie
    }

    /// Returns the session's trie for mutation.
    pub fn trie_mut(&mut self) -> &mut Trie {
        &mut self.trie
    }

    /// Renders the trie in the configured output format.
    pub fn render(&self) -> LanaiResult<String> {
        match self.output {
            OutputFormat::Text => Ok(self.trie.to_string()),
            OutputFormat::Json => Ok(serde_json::to_string_pretty(&self.trie)?),
        }
    }

    /// One-line size summary.
    pub fn summary(&self) -> String {
        format!("keys={} nodes={}", self.trie.len(), self.trie.node_count())
    }
}

/// Reads newline-separated keys from `path`, skipping blank lines.
///
/// Lines are taken verbatim apart from the line terminator, so leading and
/// trailing spaces are part of the key.
pub fn read_words(path: &Path) -> LanaiResult<Vec<String>> {
    let contents = fs::read_to_string(path)?;
    Ok(contents
        .lines()
        .filter(|line| !line.is_empty())
        .map(str::to_owned)
        .collect())
}
