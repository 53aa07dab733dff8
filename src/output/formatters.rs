//! Formatting utilities for terminal output

use crate::core::{Board, BoardCell, CellState};
use colored::{ColoredString, Colorize};

/// Format one cell as a padded, colored letter
#[must_use]
pub fn format_cell(cell: &BoardCell) -> ColoredString {
    let text = format!(
        " {} ",
        cell.value().map_or('_', |c| c.to_ascii_uppercase())
    );

    match cell.state() {
        CellState::OnPosition => text.black().on_green().bold(),
        CellState::OnRow => text.black().on_yellow().bold(),
        CellState::None if cell.is_empty() => text.bright_black(),
        CellState::None => text.white(),
    }
}

/// Render every row of the board, one string per row
#[must_use]
pub fn board_lines(board: &Board) -> Vec<String> {
    board
        .rows()
        .iter()
        .map(|row| row.iter().map(|cell| format_cell(cell).to_string()).collect())
        .collect()
}
