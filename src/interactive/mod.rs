//! Interactive TUI interface
//!
//! Terminal front ends for the Wordle board and the folder tree.

pub mod app;
pub mod rendering;
pub mod tree;

pub use app::{App, run_tui};
pub use tree::{TreeApp, run_tree_tui};

use anyhow::Result;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Stdout};

/// Run `body` on a raw-mode alternate screen, restoring the terminal after
///
/// Errors from `body` are printed and logged rather than returned so the
/// terminal is always restored first.
fn with_terminal<F>(body: F) -> Result<()>
where
    F: FnOnce(&mut Terminal<CrosstermBackend<Stdout>>) -> Result<()>,
{
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = body(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(%err, "TUI exited with error");
        eprintln!("Error: {err}");
    }

    Ok(())
}
