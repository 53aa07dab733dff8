//! Terminal output formatting
//!
//! Display utilities for line-mode play.

pub mod display;
pub mod formatters;

pub use display::{print_board, print_result, print_statistics};
