//! Guess feedback oracles
//!
//! An oracle scores a guess against a hidden word it chooses. The remote API
//! offers a daily puzzle per word length and random puzzles selected by
//! `(length, seed)`; [`LocalOracle`] mirrors both offline.

mod http;
mod local;

pub use http::{DEFAULT_API_URL, HttpOracle};
pub use local::LocalOracle;

use crate::core::FeedbackItem;
use std::fmt;
use thiserror::Error;

/// Which puzzle instance a guess is scored against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Puzzle {
    /// The puzzle of the day for the word length
    Daily,
    /// A puzzle chosen by the seed
    Random { seed: u64 },
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Daily => write!(f, "daily"),
            Self::Random { seed } => write!(f, "random(seed={seed})"),
        }
    }
}

/// Errors from an oracle round-trip
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OracleError {
    /// The request never completed
    #[error("transport error: {0}")]
    Transport(String),

    /// The oracle answered with an error status
    #[error("remote error ({status}): {message}")]
    Remote { status: u16, message: String },

    /// The response body was not a feedback list
    #[error("could not decode feedback: {0}")]
    Decode(String),
}

/// Scores guesses against a hidden word
#[allow(async_fn_in_trait)]
pub trait FeedbackOracle: Send + Sync {
    /// Short name for logs
    fn name(&self) -> &str;

    /// Score `word` against the daily puzzle of `word_length` letters
    async fn guess_daily(
        &self,
        word: &str,
        word_length: usize,
    ) -> Result<Vec<FeedbackItem>, OracleError>;

    /// Score `word` against the puzzle selected by `(word_length, seed)`
    async fn guess_random(
        &self,
        word: &str,
        word_length: usize,
        seed: u64,
    ) -> Result<Vec<FeedbackItem>, OracleError>;

    /// Score `word` against whichever puzzle `puzzle` names
    async fn guess(
        &self,
        word: &str,
        word_length: usize,
        puzzle: Puzzle,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        match puzzle {
            Puzzle::Daily => self.guess_daily(word, word_length).await,
            Puzzle::Random { seed } => self.guess_random(word, word_length, seed).await,
        }
    }
}
