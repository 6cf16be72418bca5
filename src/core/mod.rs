//! Core domain types for the letter-locking solver
//!
//! This module contains the fundamental domain types with no I/O.
//! Everything here is pure and deterministic.

mod feedback;
mod pattern;
mod word;

pub use feedback::{Classification, FeedbackItem, score_guess};
pub use pattern::LockedLetters;
pub use word::{
    MAX_WORD_LENGTH, MIN_DAILY_WORD_LENGTH, MIN_WORD_LENGTH, is_candidate_word, probe_word,
};
