//! Oracles shared by unit tests

use crate::core::{FeedbackItem, score_guess};
use crate::oracle::{FeedbackOracle, OracleError};
use std::collections::HashSet;
use std::sync::Mutex;

/// Oracle whose hidden word is `answer` (cycled to the requested length)
///
/// Lengths listed in `failing_lengths` fail with a transport error.
pub struct FixedOracle {
    pub answer: String,
    pub failing_lengths: HashSet<usize>,
    pub calls: Mutex<Vec<String>>,
}

impl FixedOracle {
    pub fn new(answer: &str) -> Self {
        Self {
            answer: answer.to_string(),
            failing_lengths: HashSet::new(),
            calls: Mutex::new(Vec::new()),
        }
    }

    pub fn failing_on(mut self, word_length: usize) -> Self {
        self.failing_lengths.insert(word_length);
        self
    }

    fn respond(&self, word: &str, word_length: usize) -> Result<Vec<FeedbackItem>, OracleError> {
        self.calls.lock().unwrap().push(word.to_string());
        if self.failing_lengths.contains(&word_length) {
            return Err(OracleError::Transport("connection refused".into()));
        }
        let answer: String = self.answer.chars().cycle().take(word_length).collect();
        Ok(score_guess(word, &answer))
    }
}

impl FeedbackOracle for FixedOracle {
    fn name(&self) -> &str {
        "fixed"
    }

    async fn guess_daily(
        &self,
        word: &str,
        word_length: usize,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        self.respond(word, word_length)
    }

    async fn guess_random(
        &self,
        word: &str,
        word_length: usize,
        _seed: u64,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        self.respond(word, word_length)
    }
}
