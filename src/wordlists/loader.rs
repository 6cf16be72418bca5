//! Word list loading utilities
//!
//! Normalizes a newline-delimited word list down to the candidates for one
//! puzzle length.

use crate::core::is_candidate_word;
use std::fs;
use std::path::{Path, PathBuf};

/// Source of dictionary words for a solve session
pub trait WordSource: Send + Sync {
    /// Load every candidate word of `word_length` letters, in list order
    ///
    /// Never fails: an unreadable source yields an empty list.
    fn load(&self, word_length: usize) -> Vec<String>;
}

/// Filter raw word-list text to words of `word_length` letters
///
/// Each line is trimmed and lowercased, then kept only if it is exactly
/// `word_length` letters of `a-z`. Order is preserved.
///
/// # Examples
/// ```
/// use wordle_eliminator::wordlists::parse_words;
///
/// let words = parse_words("Crane\nslate\ndon't\nabc\n", 5);
/// assert_eq!(words, vec!["crane", "slate"]);
/// ```
#[must_use]
pub fn parse_words(content: &str, word_length: usize) -> Vec<String> {
    content
        .lines()
        .map(|line| line.trim().to_lowercase())
        .filter(|word| is_candidate_word(word, word_length))
        .collect()
}

/// Dictionary backed by a file on disk
#[derive(Debug, Clone)]
pub struct FileWordSource {
    path: PathBuf,
}

impl FileWordSource {
    #[must_use]
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl WordSource for FileWordSource {
    fn load(&self, word_length: usize) -> Vec<String> {
        match fs::read_to_string(&self.path) {
            Ok(content) => {
                let words = parse_words(&content, word_length);
                tracing::debug!(
                    path = %self.path.display(),
                    word_length,
                    count = words.len(),
                    "loaded dictionary"
                );
                words
            }
            Err(e) => {
                tracing::warn!(path = %self.path.display(), error = %e, "failed to read word list");
                Vec::new()
            }
        }
    }
}

/// Dictionary held in memory as raw word-list text
#[derive(Debug, Clone, Default)]
pub struct MemoryWordSource {
    content: String,
}

impl MemoryWordSource {
    #[must_use]
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
        }
    }

    /// Build from individual words, one per line
    #[must_use]
    pub fn from_words(words: &[&str]) -> Self {
        Self::new(words.join("\n"))
    }
}

impl WordSource for MemoryWordSource {
    fn load(&self, word_length: usize) -> Vec<String> {
        parse_words(&self.content, word_length)
    }
}
