//! Row evaluation against the secret word
//!
//! Each position is judged on its own:
//! - exact match at the same index → [`CellState::OnPosition`]
//! - letter occurs anywhere in the secret → [`CellState::OnRow`]
//! - otherwise → [`CellState::None`]
//!
//! Letter frequencies are not tracked, so a letter guessed twice can earn two
//! `OnRow` marks even when the secret holds it once. Classic Wordle caps those
//! marks; this board does not.

use super::{BoardCell, CellState};

/// Feedback for one submitted row
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    marks: Vec<CellState>,
    win: bool,
}

impl Evaluation {
    /// Judge `row` against `secret`
    ///
    /// # Examples
    /// ```
    /// use wordle_tree::core::{BoardCell, CellState, Evaluation};
    ///
    /// let row: Vec<BoardCell> = "elppa".chars().map(BoardCell::filled).collect();
    /// let evaluation = Evaluation::calculate(&row, "apple");
    ///
    /// assert!(!evaluation.is_win());
    /// assert_eq!(evaluation.marks()[2], CellState::OnPosition);
    /// ```
    #[must_use]
    pub fn calculate(row: &[BoardCell], secret: &str) -> Self {
        let secret: Vec<char> = secret.chars().collect();
        let mut win = true;

        let marks = row
            .iter()
            .enumerate()
            .map(|(i, cell)| {
                let Some(letter) = cell.value() else {
                    win = false;
                    return CellState::None;
                };

                let on_position = secret.get(i) == Some(&letter);
                if !on_position {
                    win = false;
                }

                if on_position {
                    CellState::OnPosition
                } else if secret.contains(&letter) {
                    CellState::OnRow
                } else {
                    CellState::None
                }
            })
            .collect();

        Self { marks, win }
    }

    /// Per-cell marks, in column order
    #[must_use]
    pub fn marks(&self) -> &[CellState] {
        &self.marks
    }

    /// True when every position matched exactly
    #[inline]
    #[must_use]
    pub const fn is_win(&self) -> bool {
        self.win
    }

    /// Copy the marks onto the row's cells
    pub fn apply(&self, row: &mut [BoardCell]) {
        for (cell, &state) in row.iter_mut().zip(&self.marks) {
            cell.mark(state);
        }
    }

    /// Render as emoji squares, e.g. "🟨🟨🟩🟨🟨"
    #[must_use]
    pub fn to_emoji(&self) -> String {
        self.marks.iter().map(|state| state.emoji()).collect()
    }
}
