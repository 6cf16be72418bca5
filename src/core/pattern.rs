//! Locked-letter pattern
//!
//! Tracks which positions have been confirmed by `correct` feedback. A locked
//! position stays locked for the rest of a solve. If a later `correct` item
//! names a different letter for it, the later letter replaces the old one.

use super::FeedbackItem;
use rustc_hash::FxHashMap;
use std::fmt;

/// Confirmed letters by position for one puzzle
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LockedLetters {
    word_length: usize,
    slots: FxHashMap<usize, char>,
}

impl LockedLetters {
    /// Create an empty pattern for words of `word_length` letters
    #[must_use]
    pub fn new(word_length: usize) -> Self {
        Self {
            word_length,
            slots: FxHashMap::default(),
        }
    }

    #[inline]
    #[must_use]
    pub const fn word_length(&self) -> usize {
        self.word_length
    }

    /// Number of locked positions
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// True once every position is locked
    #[inline]
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.slots.len() == self.word_length
    }

    /// Letter locked at `position`, if any
    #[inline]
    #[must_use]
    pub fn get(&self, position: usize) -> Option<char> {
        self.slots.get(&position).copied()
    }

    /// Lock `letter` at `position`
    ///
    /// Returns true if the position was newly locked. Positions outside the
    /// word are ignored. A different letter for an already-locked position
    /// replaces it with a warning, and does not count as newly locked.
    pub fn lock(&mut self, position: usize, letter: char) -> bool {
        if position >= self.word_length {
            tracing::warn!(
                position,
                %letter,
                word_length = self.word_length,
                "feedback slot outside word"
            );
            return false;
        }

        match self.slots.insert(position, letter) {
            Some(existing) => {
                if existing != letter {
                    tracing::warn!(
                        position,
                        %existing,
                        %letter,
                        "conflicting correct feedback, replacing locked letter"
                    );
                }
                false
            }
            None => true,
        }
    }

    /// Fold one round of feedback into the pattern
    ///
    /// Only `correct` items lock positions; `present` and `absent` are not
    /// used. Returns the number of newly locked positions.
    pub fn absorb(&mut self, feedback: &[FeedbackItem]) -> usize {
        feedback
            .iter()
            .filter(|item| item.is_correct())
            .filter(|item| self.lock(item.slot, item.guess))
            .count()
    }

    /// Check whether `word` agrees with every locked position
    ///
    /// Words of the wrong length never match.
    ///
    /// # Examples
    /// ```
    /// use wordle_eliminator::core::LockedLetters;
    ///
    /// let mut locked = LockedLetters::new(5);
    /// locked.lock(0, 'c');
    /// locked.lock(4, 'e');
    ///
    /// assert!(locked.matches("crane"));
    /// assert!(!locked.matches("slate"));
    /// assert!(!locked.matches("cranes"));
    /// ```
    #[must_use]
    pub fn matches(&self, word: &str) -> bool {
        if word.chars().count() != self.word_length {
            return false;
        }

        word.chars()
            .enumerate()
            .all(|(i, ch)| self.slots.get(&i).is_none_or(|&locked| locked == ch))
    }

    /// The solved word, once every position is locked
    #[must_use]
    pub fn solved_word(&self) -> Option<String> {
        if !self.is_complete() {
            return None;
        }
        (0..self.word_length).map(|i| self.get(i)).collect()
    }
}

/// Renders as an anchored pattern, `.` for open positions: `^c...e$`
impl fmt::Display for LockedLetters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("^")?;
        for i in 0..self.word_length {
            write!(f, "{}", self.get(i).unwrap_or('.'))?;
        }
        f.write_str("$")
    }
}
