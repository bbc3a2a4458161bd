//! Dictionary loading and normalization

use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

/// Conventional system word-list location
pub const DEFAULT_DICTIONARY_PATH: &str = "/usr/share/dict/words";

/// Errors that can occur while acquiring a dictionary
#[derive(Debug, Error)]
pub enum DictionaryError {
    #[error("can't read from dictionary file '{}': {source}", path.display())]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// A finite, sorted set of distinct lowercase words
///
/// Blank lines never become words, so the empty string is never a member.
/// The sorted order is the canonical order the graph builder relies on.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dictionary {
    words: Vec<String>,
}

impl Dictionary {
    /// Normalize raw lines into a dictionary
    ///
    /// Each line is trimmed and lowercased; blank lines are skipped and
    /// duplicates collapse.
    pub fn from_lines<I, S>(lines: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut read = 0usize;
        let mut blank = 0usize;
        let mut words: Vec<String> = Vec::new();

        for line in lines {
            read += 1;
            let trimmed = line.as_ref().trim();
            if trimmed.is_empty() {
                blank += 1;
                continue;
            }
            words.push(trimmed.to_lowercase());
        }

        words.sort();
        let before = words.len();
        words.dedup();

        debug!(
            lines = read,
            blank,
            duplicates = before - words.len(),
            words = words.len(),
            "normalized dictionary"
        );

        Self { words }
    }

    /// Load and normalize a newline-delimited word list
    ///
    /// Bytes that are not valid UTF-8 are decoded lossily.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, DictionaryError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path).map_err(|source| DictionaryError::Unreadable {
            path: path.to_path_buf(),
            source,
        })?;

        debug!(path = %path.display(), bytes = bytes.len(), "read dictionary file");

        let lines = bytes
            .split(|&b| b == b'\n')
            .map(String::from_utf8_lossy);
        Ok(Self::from_lines(lines))
    }

    /// Number of distinct words
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Position of a word in sorted order, if present
    pub fn position(&self, word: &str) -> Option<usize> {
        self.words
            .binary_search_by(|probe| probe.as_str().cmp(word))
            .ok()
    }

    pub fn contains(&self, word: &str) -> bool {
        self.position(word).is_some()
    }

    /// Words in canonical sorted order
    pub fn words(&self) -> &[String] {
        &self.words
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }
}

impl<S: AsRef<str>> FromIterator<S> for Dictionary {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}
