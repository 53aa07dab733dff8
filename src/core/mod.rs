//! Core domain types for the Wordle board
//!
//! Cells, the guess grid, key classification and row evaluation. Everything
//! here is pure and synchronous.

mod board;
mod cell;
mod evaluation;
mod key;

pub use board::{Board, DEFAULT_WORD_SIZE};
pub use cell::{BoardCell, CellState};
pub use evaluation::Evaluation;
pub use key::Key;
