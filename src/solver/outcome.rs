//! Solve outcomes and results
//!
//! A solve always produces a [`SolveReport`]: the guess trace plus a tagged
//! [`SolveOutcome`]. Callers choose how to treat failure: a single solve turns
//! it into a [`SolveError`], a batch turns it into a degenerate [`SolveResult`].

use crate::core::FeedbackItem;
use crate::oracle::{OracleError, Puzzle};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// How a solve session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveOutcome {
    /// Every position is locked
    Solved { word: String },
    /// No candidate word was left to guess
    NoCandidates,
    /// The attempt cap was reached first
    MaxAttemptsReached { limit: usize },
    /// An oracle round-trip failed
    OracleError(OracleError),
}

/// One guess and what it did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessStep {
    pub word: String,
    pub feedback: Vec<FeedbackItem>,
    /// Locked positions after folding this guess's feedback
    pub locked: usize,
    /// Candidates left after filtering (unchanged when the guess solved it)
    pub candidates_after: usize,
}

/// Full record of a solve session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveReport {
    pub word_length: usize,
    pub puzzle: Puzzle,
    pub steps: Vec<GuessStep>,
    pub outcome: SolveOutcome,
}

/// Result body reported to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SolveResult {
    pub guesses: Vec<String>,
    pub success: bool,
    pub correct_word: String,
    pub attempts: usize,
}

impl SolveResult {
    /// Placeholder entry for a batch member that failed
    #[must_use]
    pub const fn failed() -> Self {
        Self {
            guesses: Vec::new(),
            success: false,
            correct_word: String::new(),
            attempts: 0,
        }
    }
}

/// Why a single solve did not produce a word
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SolveError {
    #[error("no candidate words remain after {attempts} attempts")]
    NoCandidates { attempts: usize },

    #[error("maximum attempts ({attempts}) reached without solving")]
    MaxAttemptsReached { attempts: usize },

    #[error("oracle failed after {attempts} attempts: {source}")]
    Oracle {
        attempts: usize,
        #[source]
        source: OracleError,
    },
}

impl SolveReport {
    /// Number of guesses submitted and scored
    #[must_use]
    pub fn attempts(&self) -> usize {
        self.steps.len()
    }

    /// Submitted words in order
    #[must_use]
    pub fn guesses(&self) -> Vec<String> {
        self.steps.iter().map(|step| step.word.clone()).collect()
    }

    #[must_use]
    pub fn is_success(&self) -> bool {
        matches!(self.outcome, SolveOutcome::Solved { .. })
    }

    /// Result body with the real trace, successful or not
    #[must_use]
    pub fn to_result(&self) -> SolveResult {
        let correct_word = match &self.outcome {
            SolveOutcome::Solved { word } => word.clone(),
            _ => String::new(),
        };

        SolveResult {
            guesses: self.guesses(),
            success: self.is_success(),
            correct_word,
            attempts: self.attempts(),
        }
    }

    /// Result for a single solve; any failure becomes an error
    ///
    /// # Errors
    ///
    /// Returns the `SolveError` matching the failed outcome.
    pub fn into_result(self) -> Result<SolveResult, SolveError> {
        let attempts = self.attempts();
        match self.outcome {
            SolveOutcome::Solved { word } => Ok(SolveResult {
                guesses: self.steps.into_iter().map(|step| step.word).collect(),
                success: true,
                correct_word: word,
                attempts,
            }),
            SolveOutcome::NoCandidates => Err(SolveError::NoCandidates { attempts }),
            SolveOutcome::MaxAttemptsReached { .. } => {
                Err(SolveError::MaxAttemptsReached { attempts })
            }
            SolveOutcome::OracleError(source) => Err(SolveError::Oracle { attempts, source }),
        }
    }

    /// Result for a batch member; failures collapse to [`SolveResult::failed`]
    #[must_use]
    pub fn into_batch_entry(self) -> SolveResult {
        self.into_result().unwrap_or_else(|_| SolveResult::failed())
    }
}
