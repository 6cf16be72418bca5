//! Main solver loop
//!
//! Each solve runs the same cycle until the word is known:
//! 1. Pick a guess: the alphabet probe first, then the first candidate
//! 2. Score it with the oracle
//! 3. Lock every position reported `correct`
//! 4. Drop candidates that disagree with a locked position
//!
//! All per-solve state lives in a `SessionState` owned by the call, so one
//! `Solver` can run any number of sessions, concurrently or not.

use super::outcome::{GuessStep, SolveOutcome, SolveReport};
use crate::core::{LockedLetters, probe_word};
use crate::oracle::{FeedbackOracle, Puzzle};
use crate::wordlists::WordSource;
use rayon::prelude::*;
use std::collections::VecDeque;

/// Attempts allowed per solve unless configured otherwise
pub const DEFAULT_MAX_ATTEMPTS: usize = 20;

/// Letter-locking solver
///
/// Borrows its oracle and dictionary; holds no per-solve state.
pub struct Solver<'a, O: FeedbackOracle, W: WordSource> {
    oracle: &'a O,
    words: &'a W,
    max_attempts: usize,
}

/// Scratch state of one solve session
struct SessionState {
    word_length: usize,
    candidates: VecDeque<String>,
    locked: LockedLetters,
    steps: Vec<GuessStep>,
}

impl SessionState {
    fn new(word_length: usize, dictionary: Vec<String>) -> Self {
        Self {
            word_length,
            candidates: dictionary.into(),
            locked: LockedLetters::new(word_length),
            steps: Vec::new(),
        }
    }

    fn attempts(&self) -> usize {
        self.steps.len()
    }

    /// The probe on the first attempt, then candidates in order
    fn next_guess(&mut self) -> Option<String> {
        if self.attempts() == 0 {
            Some(probe_word(self.word_length))
        } else {
            self.candidates.pop_front()
        }
    }

    /// Keep only candidates consistent with the locked letters, in order
    fn filter_candidates(&mut self) {
        let locked = &self.locked;
        self.candidates = std::mem::take(&mut self.candidates)
            .into_par_iter()
            .filter(|word| locked.matches(word))
            .collect();
    }

    fn finish(self, puzzle: Puzzle, outcome: SolveOutcome) -> SolveReport {
        SolveReport {
            word_length: self.word_length,
            puzzle,
            steps: self.steps,
            outcome,
        }
    }
}

impl<'a, O: FeedbackOracle, W: WordSource> Solver<'a, O, W> {
    /// Create a solver over an oracle and a dictionary
    #[must_use]
    pub const fn new(oracle: &'a O, words: &'a W) -> Self {
        Self {
            oracle,
            words,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
        }
    }

    /// Override the attempt cap (at least one attempt is always made)
    #[must_use]
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    #[must_use]
    pub const fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    /// Solve one puzzle of `word_length` letters
    ///
    /// Never fails outright: oracle errors and exhaustion are reported through
    /// [`SolveOutcome`] along with the guesses made so far. `word_length` is
    /// expected to be validated by the caller.
    pub async fn solve(&self, word_length: usize, puzzle: Puzzle) -> SolveReport {
        let dictionary = self.words.load(word_length);
        tracing::info!(
            word_length,
            %puzzle,
            oracle = self.oracle.name(),
            candidates = dictionary.len(),
            "starting solve"
        );

        let mut state = SessionState::new(word_length, dictionary);

        loop {
            let Some(guess) = state.next_guess() else {
                tracing::warn!(
                    word_length,
                    %puzzle,
                    attempts = state.attempts(),
                    pattern = %state.locked,
                    "no candidate words remain"
                );
                return state.finish(puzzle, SolveOutcome::NoCandidates);
            };

            let feedback = match self.oracle.guess(&guess, word_length, puzzle).await {
                Ok(feedback) => feedback,
                Err(error) => {
                    tracing::warn!(word_length, %puzzle, %guess, %error, "oracle request failed");
                    return state.finish(puzzle, SolveOutcome::OracleError(error));
                }
            };

            state.locked.absorb(&feedback);

            if let Some(word) = state.locked.solved_word() {
                state.steps.push(GuessStep {
                    word: guess,
                    feedback,
                    locked: state.locked.len(),
                    candidates_after: state.candidates.len(),
                });
                tracing::info!(word_length, %puzzle, %word, attempts = state.attempts(), "solved");
                return state.finish(puzzle, SolveOutcome::Solved { word });
            }

            state.filter_candidates();
            tracing::debug!(
                attempt = state.attempts() + 1,
                %guess,
                pattern = %state.locked,
                remaining = state.candidates.len(),
                "filtered candidates"
            );
            state.steps.push(GuessStep {
                word: guess,
                feedback,
                locked: state.locked.len(),
                candidates_after: state.candidates.len(),
            });

            if state.attempts() >= self.max_attempts {
                tracing::warn!(
                    word_length,
                    %puzzle,
                    limit = self.max_attempts,
                    pattern = %state.locked,
                    "maximum attempts reached"
                );
                return state.finish(
                    puzzle,
                    SolveOutcome::MaxAttemptsReached {
                        limit: self.max_attempts,
                    },
                );
            }
        }
    }
}
