//! Single puzzle solves
//!
//! Validates the request, then runs one session of the solver.

use super::params::{ValidationError, validate_daily_size, validate_random_size};
use crate::oracle::{FeedbackOracle, Puzzle};
use crate::solver::{SolveReport, Solver};
use crate::wordlists::WordSource;

/// Solve today's puzzle of `size` letters
///
/// # Errors
///
/// Returns `ValidationError` if `size` is outside 5..=18. Solve failures are
/// reported in the returned `SolveReport`.
pub async fn solve_daily<O: FeedbackOracle, W: WordSource>(
    solver: &Solver<'_, O, W>,
    size: usize,
) -> Result<SolveReport, ValidationError> {
    let size = validate_daily_size(size)?;
    Ok(solver.solve(size, Puzzle::Daily).await)
}

/// Solve the random puzzle selected by `(size, seed)`
///
/// # Errors
///
/// Returns `ValidationError` if `size` is outside 4..=18.
pub async fn solve_random<O: FeedbackOracle, W: WordSource>(
    solver: &Solver<'_, O, W>,
    size: usize,
    seed: u64,
) -> Result<SolveReport, ValidationError> {
    let size = validate_random_size(size)?;
    Ok(solver.solve(size, Puzzle::Random { seed }).await)
}
