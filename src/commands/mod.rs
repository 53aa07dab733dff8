//! Command implementations

pub mod simple;

pub use simple::{LineOutcome, play_line, run_simple};
