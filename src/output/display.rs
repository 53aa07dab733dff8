//! Display functions for line-mode play

use super::formatters::board_lines;
use crate::game::{GameState, Session, Statistics};
use colored::Colorize;

/// Print the board, with the secret on top in dev mode
pub fn print_board(session: &Session) {
    println!("\n{}", "─".repeat(40).cyan());
    if session.dev_mode() {
        println!(
            "Your word is: {}",
            session.secret().to_uppercase().bright_magenta()
        );
    }
    for line in board_lines(session.board()) {
        println!("  {line}");
    }
    println!("{}", "─".repeat(40).cyan());
}

/// Print the end-of-game banner and the share grid
pub fn print_result(session: &Session) {
    match session.state() {
        GameState::Win => {
            println!("\n{}", "🎉 You Win :) 🎉".bright_green().bold());
            println!(
                "  Solved in {} of {} rows",
                session.rows_used().to_string().bright_cyan().bold(),
                session.board().row_count()
            );
        }
        GameState::Lose => {
            println!("\n{}", "You Lose".red().bold());
            if !session.secret().is_empty() {
                println!(
                    "  The word was {}",
                    session.secret().to_uppercase().bright_yellow().bold()
                );
            }
        }
        _ => return,
    }

    println!("\n{}", session.share_text());
}

/// Print the running tally
pub fn print_statistics(stats: &Statistics) {
    println!(
        "\n📈 {} {} played, {} won ({:.0}%)",
        "Statistics:".bright_cyan().bold(),
        stats.total_games,
        stats.games_won,
        stats.win_rate()
    );

    let mut rows: Vec<_> = stats.guess_distribution.iter().collect();
    rows.sort_unstable();
    for (rows_used, count) in rows {
        println!("   {rows_used}: {}", "█".repeat(*count).green());
    }
}
