//! Simple line-mode play
//!
//! Text-based Wordle without the TUI: each input line is typed into the
//! current row and submitted.

use crate::core::Key;
use crate::game::{Generation, KeyOutcome, Session, Statistics};
use crate::output::{print_board, print_result, print_statistics};
use crate::wordlists::WordSource;
use anyhow::Result;
use colored::Colorize;
use std::io::{self, BufRead, Write};

/// What a submitted line did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineOutcome {
    /// Wrong number of letters; nothing was typed
    WrongLength { expected: usize, got: usize },
    /// The board refused the row (not READY)
    Rejected,
    Submitted(KeyOutcome),
}

/// Type `line` into the current row and press Enter
///
/// Any partial input left on the row is erased first. Non-letters are
/// dropped before counting.
pub fn play_line(session: &mut Session, line: &str) -> LineOutcome {
    let letters: Vec<Key> = line
        .chars()
        .map(Key::from_char)
        .filter(|key| matches!(key, Key::Letter(_)))
        .collect();

    let expected = session.board().column_count();
    if letters.len() != expected {
        return LineOutcome::WrongLength {
            expected,
            got: letters.len(),
        };
    }

    for _ in 0..session.cursor().column {
        session.handle_key(Key::Backspace);
    }
    for key in letters {
        session.handle_key(key);
    }

    match session.handle_key(Key::Enter) {
        KeyOutcome::Ignored => LineOutcome::Rejected,
        outcome => LineOutcome::Submitted(outcome),
    }
}

/// Fetch a word list synchronously and apply it to `generation`
fn fetch_into(session: &mut Session, source: &dyn WordSource, generation: Generation) {
    println!("{}", format!("Loading words from {}...", source.describe()).bright_black());
    let result = source.fetch();
    session.complete_load(generation, result);

    if let Some(error) = session.last_error() {
        println!("{} {error}", "⚠".yellow());
    }
}

/// Run the simple line-mode game
///
/// # Errors
///
/// Returns an error if there's an I/O error reading user input.
pub fn run_simple(session: Session, source: &dyn WordSource) -> Result<()> {
    let stdin = io::stdin();
    run_simple_with(session, source, &mut stdin.lock())?;
    Ok(())
}

/// Line-mode loop over any input; end of input counts as quitting
fn run_simple_with(
    mut session: Session,
    source: &dyn WordSource,
    input: &mut impl BufRead,
) -> Result<Statistics> {
    println!("\n╔══════════════════════════════════════╗");
    println!("║          Wordle - Line Mode          ║");
    println!("╚══════════════════════════════════════╝\n");
    println!("Type a guess and press Enter. 'quit' exits.\n");

    let mut stats = Statistics::default();
    let generation = session.begin_load();
    fetch_into(&mut session, source, generation);

    loop {
        print_board(&session);

        if session.state().is_finished() {
            print_result(&session);
            stats.record(session.state(), session.rows_used());

            let Some(answer) = get_user_input(input, "Play again? (yes/no)")? else {
                break;
            };
            match answer.to_lowercase().as_str() {
                "yes" | "y" => {
                    if let Some(generation) = session.restart() {
                        fetch_into(&mut session, source, generation);
                    }
                    continue;
                }
                _ => break,
            }
        }

        let Some(line) = get_user_input(input, "Guess")? else {
            break;
        };
        if matches!(line.to_lowercase().as_str(), "quit" | "q" | "exit") {
            break;
        }

        match play_line(&mut session, &line) {
            LineOutcome::WrongLength { expected, got } => {
                println!("❌ Need {expected} letters, got {got}");
            }
            LineOutcome::Rejected => {
                println!("❌ The board is not accepting guesses ({})", session.state());
            }
            LineOutcome::Submitted(_) => {}
        }
    }

    print_statistics(&stats);
    println!("\n👋 Thanks for playing!\n");
    Ok(stats)
}

/// Get user input with a prompt, `None` once input is closed
fn get_user_input(input: &mut impl BufRead, prompt: &str) -> Result<Option<String>> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        println!();
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
