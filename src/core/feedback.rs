//! Per-letter feedback returned by the guess oracle
//!
//! The remote API answers a guess with one item per slot:
//!
//! ```json
//! [{"slot": 0, "guess": "a", "result": "absent"}, ...]
//! ```

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// How a guessed letter relates to the hidden word
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Right letter, right slot
    Correct,
    /// Letter appears elsewhere in the word
    Present,
    /// Letter does not appear (or all its occurrences are used up)
    Absent,
}

impl Classification {
    /// Emoji square for terminal output
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }
}

/// Feedback for a single slot of a guess
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeedbackItem {
    /// Zero-based position in the word
    pub slot: usize,
    /// The letter that was guessed at this slot
    pub guess: char,
    /// Classification of that letter
    pub result: Classification,
}

impl FeedbackItem {
    #[must_use]
    pub const fn new(slot: usize, guess: char, result: Classification) -> Self {
        Self {
            slot,
            guess,
            result,
        }
    }

    #[inline]
    #[must_use]
    pub fn is_correct(&self) -> bool {
        self.result == Classification::Correct
    }
}

impl fmt::Display for FeedbackItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.guess, self.result.emoji())
    }
}

/// Score `guess` against `answer` the way Wordle does
///
/// Duplicate letters are handled in two passes:
/// 1. Exact position matches are marked correct and removed from the pool
/// 2. Remaining letters are marked present while the pool still holds them
///
/// Slots past the end of the shorter word are reported absent.
///
/// # Examples
/// ```
/// use wordle_eliminator::core::{Classification, score_guess};
///
/// let feedback = score_guess("crane", "slate");
/// assert_eq!(feedback[2].result, Classification::Correct);
/// assert_eq!(feedback[0].result, Classification::Absent);
/// ```
#[must_use]
pub fn score_guess(guess: &str, answer: &str) -> Vec<FeedbackItem> {
    let guess: Vec<char> = guess.chars().collect();
    let answer: Vec<char> = answer.chars().collect();

    let mut results = vec![Classification::Absent; guess.len()];
    let mut available: FxHashMap<char, usize> = FxHashMap::default();
    for &ch in &answer {
        *available.entry(ch).or_insert(0) += 1;
    }

    // First pass: greens
    for (i, &ch) in guess.iter().enumerate() {
        if answer.get(i) == Some(&ch) {
            results[i] = Classification::Correct;
            if let Some(count) = available.get_mut(&ch) {
                *count = count.saturating_sub(1);
            }
        }
    }

    // Second pass: yellows from what is left
    for (i, &ch) in guess.iter().enumerate() {
        if results[i] == Classification::Correct {
            continue;
        }
        if let Some(count) = available.get_mut(&ch)
            && *count > 0
        {
            results[i] = Classification::Present;
            *count -= 1;
        }
    }

    guess
        .into_iter()
        .zip(results)
        .enumerate()
        .map(|(slot, (ch, result))| FeedbackItem::new(slot, ch, result))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn classes(feedback: &[FeedbackItem]) -> Vec<Classification> {
        feedback.iter().map(|item| item.result).collect()
    }

    #[test]
    fn deserializes_api_payload() {
        let body = r#"[
            {"slot": 0, "guess": "a", "result": "absent"},
            {"slot": 1, "guess": "b", "result": "present"},
            {"slot": 2, "guess": "c", "result": "correct"}
        ]"#;
        let items: Vec<FeedbackItem> = serde_json::from_str(body).unwrap();

        assert_eq!(items.len(), 3);
        assert_eq!(items[0], FeedbackItem::new(0, 'a', Classification::Absent));
        assert_eq!(items[1].result, Classification::Present);
        assert!(items[2].is_correct());
    }

    #[test]
    fn rejects_unknown_classification() {
        let body = r#"[{"slot": 0, "guess": "a", "result": "green"}]"#;
        assert!(serde_json::from_str::<Vec<FeedbackItem>>(body).is_err());
    }

    #[test]
    fn all_correct_for_exact_match() {
        let feedback = score_guess("crane", "crane");
        assert!(feedback.iter().all(FeedbackItem::is_correct));
        assert_eq!(feedback.len(), 5);
    }

    #[test]
    fn all_absent_for_disjoint_words() {
        let feedback = score_guess("abcde", "fghij");
        assert!(
            feedback
                .iter()
                .all(|item| item.result == Classification::Absent)
        );
    }

    #[test]
    fn duplicate_letters_green_takes_priority() {
        // ROBOT vs FLOOR: R yellow, O yellow, B gray, O green, T gray
        use Classification::{Absent, Correct, Present};
        let feedback = score_guess("robot", "floor");
        assert_eq!(
            classes(&feedback),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn duplicate_letters_exhaust_pool() {
        // SPEED vs ERASE: both E's present, S present
        use Classification::{Absent, Present};
        let feedback = score_guess("speed", "erase");
        assert_eq!(
            classes(&feedback),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn slots_and_letters_follow_the_guess() {
        let feedback = score_guess("abcd", "dcba");
        for (i, item) in feedback.iter().enumerate() {
            assert_eq!(item.slot, i);
            assert_eq!(item.guess, "abcd".chars().nth(i).unwrap());
        }
    }
}
