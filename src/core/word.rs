//! Word shape rules
//!
//! Puzzles range from 4 to 18 letters. Every word the solver handles is plain
//! lowercase ASCII.

/// Shortest puzzle the remote API serves
pub const MIN_WORD_LENGTH: usize = 4;

/// Shortest puzzle accepted by the daily endpoint
pub const MIN_DAILY_WORD_LENGTH: usize = 5;

/// Longest puzzle the remote API serves
pub const MAX_WORD_LENGTH: usize = 18;

const ALPHABET: &[u8; 26] = b"abcdefghijklmnopqrstuvwxyz";

/// Build the opening probe for a puzzle of `word_length` letters
///
/// The probe is the start of the alphabet: every position gets a distinct
/// letter so the first round of feedback can lock as many slots as possible.
///
/// # Examples
/// ```
/// use wordle_eliminator::core::probe_word;
///
/// assert_eq!(probe_word(5), "abcde");
/// assert_eq!(probe_word(4), "abcd");
/// ```
#[must_use]
pub fn probe_word(word_length: usize) -> String {
    ALPHABET
        .iter()
        .cycle()
        .take(word_length)
        .map(|&b| char::from(b))
        .collect()
}

/// Check that `word` is exactly `word_length` letters of `[a-z]`
#[inline]
#[must_use]
pub fn is_candidate_word(word: &str, word_length: usize) -> bool {
    word.len() == word_length && !word.is_empty() && word.bytes().all(|b| b.is_ascii_lowercase())
}
