//! Runtime configuration
//!
//! Gathered from CLI flags and environment variables by the binary.

use crate::oracle::DEFAULT_API_URL;
use crate::solver::DEFAULT_MAX_ATTEMPTS;
use crate::wordlists::DEFAULT_DICTIONARY;
use std::path::PathBuf;
use std::time::Duration;

/// Default per-request timeout for the remote API
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings shared by every command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolverConfig {
    /// Base URL of the feedback API
    pub api_url: String,
    /// Newline-delimited word list
    pub dictionary: PathBuf,
    pub timeout: Duration,
    pub max_attempts: usize,
    /// Score guesses locally instead of calling the API
    pub offline: bool,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.to_string(),
            dictionary: PathBuf::from(DEFAULT_DICTIONARY),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            offline: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.api_url, "https://wordle.votee.dev:8000");
        assert_eq!(config.dictionary, PathBuf::from("eng_words.txt"));
        assert_eq!(config.timeout, Duration::from_secs(30));
        assert_eq!(config.max_attempts, 20);
        assert!(!config.offline);
    }
}
