//! Command implementations

pub mod batch;
pub mod params;
pub mod solve;

pub use batch::{BATCH_SIZES, RandomResults, SizeResults, solve_all_seeds, solve_all_sizes};
pub use params::ValidationError;
pub use solve::{solve_daily, solve_random};
