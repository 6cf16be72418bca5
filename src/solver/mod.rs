//! Letter-locking solve loop
//!
//! This module drives guesses against an oracle and reports how each solve
//! ended.

mod engine;
mod outcome;

pub use engine::{DEFAULT_MAX_ATTEMPTS, Solver};
pub use outcome::{GuessStep, SolveError, SolveOutcome, SolveReport, SolveResult};
