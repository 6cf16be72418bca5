//! Terminal output formatting
//!
//! Display utilities for CLI results and JSON bodies.

pub mod display;
pub mod formatters;

pub use display::{print_random_results, print_size_results, print_solve_report};
pub use formatters::to_json;
