//! Word lists for the solver
//!
//! The dictionary is re-read for every solve so that each session sees only
//! words of its own length.

pub mod loader;

pub use loader::{FileWordSource, MemoryWordSource, WordSource, parse_words};

/// Default dictionary file, relative to the working directory
pub const DEFAULT_DICTIONARY: &str = "eng_words.txt";
