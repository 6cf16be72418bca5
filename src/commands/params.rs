//! Request parameter validation
//!
//! Bounds are checked before any solve runs.

use crate::core::{MAX_WORD_LENGTH, MIN_DAILY_WORD_LENGTH, MIN_WORD_LENGTH};
use thiserror::Error;

/// Daily size when none is given
pub const DEFAULT_DAILY_SIZE: usize = 10;

/// Random size when none is given
pub const DEFAULT_RANDOM_SIZE: usize = 5;

/// Random seed when none is given
pub const DEFAULT_SEED: u64 = 0;

/// Highest seed a random batch covers when none is given
pub const DEFAULT_MAX_SEED: u64 = 100;

/// Largest accepted max seed
pub const MAX_SEED_LIMIT: u64 = 1000;

/// Rejected request parameters
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Word size must be between {min} and {max} characters (got {size})")]
    WordSize { size: usize, min: usize, max: usize },

    #[error("MaxSeed must be between 0 and {limit} (got {max_seed})")]
    MaxSeed { max_seed: u64, limit: u64 },
}

fn check_size(size: usize, min: usize) -> Result<usize, ValidationError> {
    if (min..=MAX_WORD_LENGTH).contains(&size) {
        Ok(size)
    } else {
        Err(ValidationError::WordSize {
            size,
            min,
            max: MAX_WORD_LENGTH,
        })
    }
}

/// Daily puzzles run from 5 to 18 letters
///
/// # Errors
///
/// Returns `ValidationError::WordSize` if `size` is outside 5..=18.
pub fn validate_daily_size(size: usize) -> Result<usize, ValidationError> {
    check_size(size, MIN_DAILY_WORD_LENGTH)
}

/// Random puzzles run from 4 to 18 letters
///
/// # Errors
///
/// Returns `ValidationError::WordSize` if `size` is outside 4..=18.
pub fn validate_random_size(size: usize) -> Result<usize, ValidationError> {
    check_size(size, MIN_WORD_LENGTH)
}

/// Highest seed a random batch may run to
///
/// # Errors
///
/// Returns `ValidationError::MaxSeed` if `max_seed` is above 1000.
pub fn validate_max_seed(max_seed: u64) -> Result<u64, ValidationError> {
    if max_seed <= MAX_SEED_LIMIT {
        Ok(max_seed)
    } else {
        Err(ValidationError::MaxSeed {
            max_seed,
            limit: MAX_SEED_LIMIT,
        })
    }
}
