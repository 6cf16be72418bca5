//! Offline oracle
//!
//! Picks hidden words from a dictionary so the solver can run without the
//! network. Random puzzles are chosen by a `StdRng` seeded with the seed, so a
//! given `(length, seed)` always names the same word. Each answer is picked
//! once and cached, so the dictionary is not reloaded on every guess.

use super::{FeedbackOracle, OracleError};
use crate::core::{FeedbackItem, score_guess};
use crate::wordlists::WordSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rustc_hash::FxHashMap;
use std::sync::{Mutex, PoisonError};

/// Seed for the daily puzzle of every length
const DAILY_SEED: u64 = 0x00da_11e5;

/// Oracle that scores guesses against words from a local dictionary
pub struct LocalOracle<W: WordSource> {
    words: W,
    answers: Mutex<FxHashMap<(usize, u64), String>>,
}

impl<W: WordSource> LocalOracle<W> {
    #[must_use]
    pub fn new(words: W) -> Self {
        Self {
            words,
            answers: Mutex::new(FxHashMap::default()),
        }
    }

    /// The hidden word for a puzzle, chosen from words of `word_length`
    ///
    /// # Errors
    ///
    /// Returns `OracleError::Remote` with status 404 if the dictionary has no
    /// word of that length.
    pub fn answer(&self, word_length: usize, seed: u64) -> Result<String, OracleError> {
        let mut answers = self.answers.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(answer) = answers.get(&(word_length, seed)) {
            return Ok(answer.clone());
        }

        let mut words = self.words.load(word_length);
        if words.is_empty() {
            return Err(OracleError::Remote {
                status: 404,
                message: format!("no puzzle with {word_length} letters"),
            });
        }

        let mut rng = StdRng::seed_from_u64(seed);
        let index = rng.random_range(0..words.len());
        let answer = words.swap_remove(index);
        tracing::debug!(word_length, seed, "picked offline answer");
        answers.insert((word_length, seed), answer.clone());
        Ok(answer)
    }

    fn score(
        &self,
        word: &str,
        word_length: usize,
        seed: u64,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        if word.chars().count() != word_length {
            return Err(OracleError::Remote {
                status: 400,
                message: format!("guess must be {word_length} letters"),
            });
        }

        let answer = self.answer(word_length, seed)?;
        Ok(score_guess(word, &answer))
    }
}

impl<W: WordSource> FeedbackOracle for LocalOracle<W> {
    fn name(&self) -> &str {
        "local"
    }

    async fn guess_daily(
        &self,
        word: &str,
        word_length: usize,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        self.score(word, word_length, DAILY_SEED)
    }

    async fn guess_random(
        &self,
        word: &str,
        word_length: usize,
        seed: u64,
    ) -> Result<Vec<FeedbackItem>, OracleError> {
        self.score(word, word_length, seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::wordlists::MemoryWordSource;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Word source that counts how often it is loaded
    struct CountingSource {
        inner: MemoryWordSource,
        loads: AtomicUsize,
    }

    impl WordSource for CountingSource {
        fn load(&self, word_length: usize) -> Vec<String> {
            self.loads.fetch_add(1, Ordering::SeqCst);
            self.inner.load(word_length)
        }
    }

    fn oracle() -> LocalOracle<MemoryWordSource> {
        LocalOracle::new(MemoryWordSource::from_words(&[
            "crane", "slate", "irate", "crate", "grate", "brick", "abcd",
        ]))
    }

    #[test]
    fn answer_is_deterministic_per_seed() {
        let oracle = oracle();
        for seed in 0..20 {
            let first = oracle.answer(5, seed).unwrap();
            let second = oracle.answer(5, seed).unwrap();
            assert_eq!(first, second);
            assert_eq!(first.len(), 5);
        }
    }

    #[test]
    fn answer_respects_length() {
        assert_eq!(oracle().answer(4, 7).unwrap(), "abcd");
    }

    #[test]
    fn missing_length_is_remote_error() {
        let result = oracle().answer(9, 0);
        assert!(matches!(result, Err(OracleError::Remote { status: 404, .. })));
    }

    #[tokio::test]
    async fn wrong_length_guess_rejected() {
        let result = oracle().guess_random("abc", 5, 1).await;
        assert!(matches!(result, Err(OracleError::Remote { status: 400, .. })));
    }

    #[tokio::test]
    async fn guessing_the_answer_is_all_correct() {
        let oracle = oracle();
        let answer = oracle.answer(5, 3).unwrap();
        let feedback = oracle.guess_random(&answer, 5, 3).await.unwrap();
        assert_eq!(feedback.len(), 5);
        assert!(feedback.iter().all(FeedbackItem::is_correct));
    }

    #[tokio::test]
    async fn daily_is_stable() {
        let oracle = oracle();
        let first = oracle.guess_daily("abcde", 5).await.unwrap();
        let second = oracle.guess_daily("abcde", 5).await.unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn dictionary_loaded_once_per_puzzle() {
        let oracle = LocalOracle::new(CountingSource {
            inner: MemoryWordSource::from_words(&["crane", "slate", "abcd"]),
            loads: AtomicUsize::new(0),
        });

        for _ in 0..5 {
            oracle.guess_random("aaaaa", 5, 11).await.unwrap();
        }
        assert_eq!(oracle.words.loads.load(Ordering::SeqCst), 1);

        oracle.guess_random("bbbb", 4, 11).await.unwrap();
        oracle.guess_daily("ccccc", 5).await.unwrap();
        assert_eq!(oracle.words.loads.load(Ordering::SeqCst), 3);
        assert_eq!(oracle.answer(4, 11).unwrap(), "abcd");
        assert_eq!(oracle.words.loads.load(Ordering::SeqCst), 3);
    }

    #[test]
    fn missing_length_is_not_cached() {
        let oracle = LocalOracle::new(CountingSource {
            inner: MemoryWordSource::from_words(&["crane"]),
            loads: AtomicUsize::new(0),
        });

        assert!(oracle.answer(6, 0).is_err());
        assert!(oracle.answer(6, 0).is_err());
        assert_eq!(oracle.words.loads.load(Ordering::SeqCst), 2);
    }
}
