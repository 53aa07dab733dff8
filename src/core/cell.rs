//! Board cell representation
//!
//! A cell holds at most one guessed letter plus the feedback mark assigned
//! when its row is submitted.

use std::fmt;

/// Feedback mark for a single cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CellState {
    /// Not evaluated yet, or the letter is absent from the secret
    #[default]
    None,
    /// Letter matches the secret at the same index
    OnPosition,
    /// Letter appears somewhere else in the secret
    OnRow,
}

impl CellState {
    /// Emoji square used in share lines
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::OnPosition => '🟩',
            Self::OnRow => '🟨',
            Self::None => '⬜',
        }
    }
}

impl fmt::Display for CellState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::OnPosition => "ON-POSITION",
            Self::OnRow => "ON-ROW",
        };
        f.write_str(name)
    }
}

/// One square of the board
///
/// An empty cell always carries [`CellState::None`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct BoardCell {
    value: Option<char>,
    state: CellState,
}

impl BoardCell {
    /// An empty, unmarked cell
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            state: CellState::None,
        }
    }

    /// A cell holding `letter`, unmarked
    #[must_use]
    pub const fn filled(letter: char) -> Self {
        Self {
            value: Some(letter),
            state: CellState::None,
        }
    }

    #[inline]
    #[must_use]
    pub const fn value(&self) -> Option<char> {
        self.value
    }

    #[inline]
    #[must_use]
    pub const fn state(&self) -> CellState {
        self.state
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Set the feedback mark. Marks on empty cells are dropped.
    pub fn mark(&mut self, state: CellState) {
        if self.value.is_some() {
            self.state = state;
        }
    }

    /// Remove the letter and its mark
    pub fn clear(&mut self) {
        *self = Self::empty();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_cell_has_no_mark() {
        let cell = BoardCell::empty();
        assert!(cell.is_empty());
        assert_eq!(cell.value(), None);
        assert_eq!(cell.state(), CellState::None);
    }

    #[test]
    fn marking_empty_cell_is_ignored() {
        let mut cell = BoardCell::empty();
        cell.mark(CellState::OnPosition);
        assert_eq!(cell.state(), CellState::None);
    }

    #[test]
    fn clear_resets_value_and_mark() {
        let mut cell = BoardCell::filled('a');
        cell.mark(CellState::OnRow);
        assert_eq!(cell.state(), CellState::OnRow);

        cell.clear();
        assert_eq!(cell, BoardCell::empty());
    }

    #[test]
    fn display_uses_hyphenated_names() {
        assert_eq!(CellState::OnPosition.to_string(), "ON-POSITION");
        assert_eq!(CellState::OnRow.to_string(), "ON-ROW");
        assert_eq!(CellState::None.to_string(), "NONE");
    }
}
