//! Guess grid
//!
//! A fixed-size grid of [`BoardCell`]s. The column count equals the secret
//! word length and every row has exactly that many cells.

use super::BoardCell;
use crate::config::RowBounds;
use rand::Rng;

/// Word size used when no secret is known yet
pub const DEFAULT_WORD_SIZE: usize = 5;

/// Grid of guess cells
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: Vec<Vec<BoardCell>>,
    columns: usize,
}

impl Board {
    /// Create an empty `row_count` × `columns` board
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::Board;
    ///
    /// let board = Board::new(3, 5);
    /// assert_eq!(board.row_count(), 3);
    /// assert_eq!(board.column_count(), 5);
    /// ```
    #[must_use]
    pub fn new(row_count: usize, columns: usize) -> Self {
        Self {
            rows: vec![vec![BoardCell::empty(); columns]; row_count],
            columns,
        }
    }

    /// Create an empty board whose row count is drawn uniformly from `bounds`
    pub fn with_random_rows<R: Rng>(columns: usize, bounds: RowBounds, rng: &mut R) -> Self {
        let row_count = rng.random_range(bounds.min()..=bounds.max());
        Self::new(row_count, columns)
    }

    #[inline]
    #[must_use]
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    #[must_use]
    pub const fn column_count(&self) -> usize {
        self.columns
    }

    /// All rows, top to bottom
    #[must_use]
    pub fn rows(&self) -> &[Vec<BoardCell>] {
        &self.rows
    }

    /// A single row, if it exists
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&[BoardCell]> {
        self.rows.get(index).map(Vec::as_slice)
    }

    pub(crate) fn row_mut(&mut self, index: usize) -> Option<&mut [BoardCell]> {
        self.rows.get_mut(index).map(Vec::as_mut_slice)
    }

    #[must_use]
    pub fn cell(&self, row: usize, column: usize) -> Option<&BoardCell> {
        self.rows.get(row)?.get(column)
    }

    /// Write `letter` into an empty cell
    ///
    /// Returns `false` (and leaves the board untouched) when the position is
    /// out of range or already holds a letter.
    pub fn set_letter(&mut self, row: usize, column: usize, letter: char) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) if cell.is_empty() => {
                *cell = BoardCell::filled(letter);
                true
            }
            _ => false,
        }
    }

    /// Clear a cell. Returns `false` if the position is out of range.
    pub fn clear_cell(&mut self, row: usize, column: usize) -> bool {
        match self.rows.get_mut(row).and_then(|r| r.get_mut(column)) {
            Some(cell) => {
                cell.clear();
                true
            }
            None => false,
        }
    }

    /// Whether every cell in the row holds a letter
    #[must_use]
    pub fn is_row_full(&self, row: usize) -> bool {
        self.row(row)
            .is_some_and(|cells| cells.iter().all(|cell| !cell.is_empty()))
    }

    /// Letters of a row concatenated, skipping empty cells
    #[must_use]
    pub fn row_word(&self, row: usize) -> String {
        self.row(row)
            .map(|cells| cells.iter().filter_map(BoardCell::value).collect())
            .unwrap_or_default()
    }
}
