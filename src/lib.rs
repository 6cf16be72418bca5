//! Wordle Eliminator
//!
//! Solves Wordle-style puzzles served by a remote feedback API by locking
//! letters confirmed at their position and filtering a dictionary down to the
//! words that still fit.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use wordle_eliminator::oracle::{LocalOracle, Puzzle};
//! use wordle_eliminator::solver::Solver;
//! use wordle_eliminator::wordlists::MemoryWordSource;
//!
//! # async fn run() {
//! let words = MemoryWordSource::from_words(&["crane", "slate", "crate", "grate"]);
//! let oracle = LocalOracle::new(words.clone());
//! let solver = Solver::new(&oracle, &words);
//!
//! let report = solver.solve(5, Puzzle::Random { seed: 7 }).await;
//! println!("{:?}", report.to_result());
//! # }
//! ```

// Core domain types
pub mod core;

// Word lists
pub mod wordlists;

// Guess feedback oracles
pub mod oracle;

// Solve loop
pub mod solver;

// Command implementations
pub mod commands;

// Runtime configuration
pub mod config;

// Terminal output formatting
pub mod output;

#[cfg(test)]
mod test_support;
