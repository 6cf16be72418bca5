//! Batch solves across sizes and seeds
//!
//! Each `(size)` or `(size, seed)` combination is an independent session.
//! A failing combination is recorded as [`SolveResult::failed`] and the batch
//! carries on.

use super::params::{ValidationError, validate_max_seed, validate_random_size};
use crate::oracle::{FeedbackOracle, Puzzle};
use crate::solver::{SolveResult, Solver};
use crate::wordlists::WordSource;
use indicatif::{ProgressBar, ProgressStyle};
use std::collections::BTreeMap;
use std::ops::RangeInclusive;

/// Sizes covered by the batch commands
pub const BATCH_SIZES: RangeInclusive<usize> = 5..=18;

/// Daily results keyed by word length
pub type SizeResults = BTreeMap<usize, SolveResult>;

/// Random results keyed by word length, then seed
pub type RandomResults = BTreeMap<usize, BTreeMap<u64, SolveResult>>;

fn progress_bar(len: u64, show: bool) -> ProgressBar {
    if !show {
        return ProgressBar::hidden();
    }

    let pb = ProgressBar::new(len);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░"),
    );
    pb
}

/// Solve the daily puzzle for every size in `sizes`
///
/// Sizes outside the daily range are recorded as failed entries.
pub async fn solve_all_sizes<O: FeedbackOracle, W: WordSource>(
    solver: &Solver<'_, O, W>,
    sizes: RangeInclusive<usize>,
    show_progress: bool,
) -> SizeResults {
    let pb = progress_bar(sizes.clone().count() as u64, show_progress);
    let mut results = SizeResults::new();
    let mut solved = 0;

    for size in sizes {
        pb.set_message(format!("size {size}"));

        let entry = match super::solve_daily(solver, size).await {
            Ok(report) => report.into_batch_entry(),
            Err(e) => {
                tracing::warn!(size, error = %e, "skipping size");
                SolveResult::failed()
            }
        };
        if entry.success {
            solved += 1;
        }
        results.insert(size, entry);
        pb.inc(1);
    }

    pb.finish_with_message(format!("{solved}/{} solved", results.len()));
    results
}

/// Solve the random puzzle for every size in `sizes` and every seed in
/// `0..=max_seed`
///
/// # Errors
///
/// Returns `ValidationError` before solving anything if `max_seed` or any
/// size is out of range.
pub async fn solve_all_seeds<O: FeedbackOracle, W: WordSource>(
    solver: &Solver<'_, O, W>,
    sizes: RangeInclusive<usize>,
    max_seed: u64,
    show_progress: bool,
) -> Result<RandomResults, ValidationError> {
    let max_seed = validate_max_seed(max_seed)?;
    for size in sizes.clone() {
        validate_random_size(size)?;
    }

    let total = sizes.clone().count() as u64 * (max_seed + 1);
    let pb = progress_bar(total, show_progress);
    let mut results = RandomResults::new();
    let mut solved = 0;

    for size in sizes {
        let by_seed = results.entry(size).or_default();
        for seed in 0..=max_seed {
            pb.set_message(format!("size {size} seed {seed}"));

            let entry = solver
                .solve(size, Puzzle::Random { seed })
                .await
                .into_batch_entry();
            if entry.success {
                solved += 1;
            }
            by_seed.insert(seed, entry);
            pb.inc(1);
        }
    }

    pb.finish_with_message(format!("{solved}/{total} solved"));
    Ok(results)
}
