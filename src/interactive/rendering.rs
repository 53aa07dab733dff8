//! TUI rendering with ratatui
//!
//! Board grid, banners and status for the Wordle screen.

use super::app::{App, MessageStyle};
use crate::core::{BoardCell, CellState};
use crate::game::GameState;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, List, ListItem, Paragraph},
};

const CELL_WIDTH: u16 = 5;
const CELL_HEIGHT: u16 = 3;

/// Main UI rendering function
pub fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(8),    // Board and messages
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Status bar
        ])
        .split(f.area());

    render_header(f, app, chunks[0]);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Board
            Constraint::Percentage(40), // Messages
        ])
        .split(chunks[1]);

    render_board(f, app, main_chunks[0]);
    render_messages(f, app, main_chunks[1]);
    render_banner(f, app, chunks[2]);
    render_status(f, app, chunks[3]);
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let mut spans = vec![Span::styled(
        "WORDLE",
        Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
    )];

    if app.session.dev_mode() {
        spans.push(Span::raw("  |  Your word is: "));
        spans.push(Span::styled(
            app.session.secret().to_uppercase(),
            Style::default().fg(Color::Magenta),
        ));
    }

    let header = Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Rounded)
                .style(Style::default().fg(Color::Cyan)),
        );
    f.render_widget(header, area);
}

/// Style for a cell; letters in submitted rows without a match are greyed
fn cell_style(cell: &BoardCell, submitted: bool) -> Style {
    match cell.state() {
        CellState::OnPosition => Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD),
        CellState::OnRow => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        CellState::None if submitted => Style::default().fg(Color::White).bg(Color::DarkGray),
        CellState::None if cell.is_empty() => Style::default().fg(Color::DarkGray),
        CellState::None => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    }
}

fn render_board(f: &mut Frame, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Board ")
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded);
    let inner = block.inner(area);
    f.render_widget(block, area);

    let board = app.session.board();
    let rows_used = app.session.rows_used();

    let row_areas = Layout::vertical(vec![Constraint::Length(CELL_HEIGHT); board.row_count()])
        .flex(Flex::Center)
        .split(inner);

    for (row_index, (cells, row_area)) in board.rows().iter().zip(row_areas.iter()).enumerate() {
        let submitted = row_index < rows_used;
        let cell_areas = Layout::horizontal(vec![Constraint::Length(CELL_WIDTH); cells.len()])
            .flex(Flex::Center)
            .spacing(1)
            .split(*row_area);

        for (cell, cell_area) in cells.iter().zip(cell_areas.iter()) {
            let style = cell_style(cell, submitted);
            let letter = cell
                .value()
                .map(|c| c.to_ascii_uppercase().to_string())
                .unwrap_or_default();

            let widget = Paragraph::new(letter)
                .alignment(Alignment::Center)
                .style(style)
                .block(Block::default().borders(Borders::ALL).border_style(style));
            f.render_widget(widget, *cell_area);
        }
    }
}

fn render_messages(f: &mut Frame, app: &App, area: Rect) {
    let messages: Vec<ListItem> = app
        .messages
        .iter()
        .rev()
        .map(|msg| {
            let style = match msg.style {
                MessageStyle::Info => Style::default().fg(Color::White),
                MessageStyle::Success => Style::default().fg(Color::Green),
                MessageStyle::Error => Style::default().fg(Color::Red),
            };
            ListItem::new(msg.text.clone()).style(style)
        })
        .collect();

    let messages_list =
        List::new(messages).block(Block::default().title(" Messages ").borders(Borders::ALL));

    f.render_widget(messages_list, area);
}

fn render_banner(f: &mut Frame, app: &App, area: Rect) {
    let (text, color) = match app.session.state() {
        GameState::Loading => ("Loading....".to_string(), Color::Cyan),
        GameState::Win => ("You Win :)  |  Ctrl-R: Restart".to_string(), Color::Green),
        GameState::Lose => ("You Lose  |  Ctrl-R: Restart".to_string(), Color::Red),
        GameState::Ready => {
            let cursor = app.session.cursor();
            (
                format!(
                    "Row {}/{}",
                    cursor.row + 1,
                    app.session.board().row_count()
                ),
                Color::Yellow,
            )
        }
        // A failed load settles on READY in the same step; the message log carries the error
        GameState::None | GameState::Error => (String::new(), Color::White),
    };

    let banner = Paragraph::new(text)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_type(BorderType::Double)
                .style(Style::default().fg(color)),
        );

    f.render_widget(banner, area);
}

fn render_status(f: &mut Frame, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
            Constraint::Percentage(25),
        ])
        .split(area);

    let state = Paragraph::new(format!("State: {}", app.session.state())).alignment(Alignment::Center);
    f.render_widget(state, chunks[0]);

    let stats_text = format!(
        "Games: {} | Win Rate: {:.0}%",
        app.stats.total_games,
        app.stats.win_rate()
    );
    let stats = Paragraph::new(stats_text).alignment(Alignment::Center);
    f.render_widget(stats, chunks[1]);

    let source = Paragraph::new(format!("Words: {}", app.source.describe()))
        .alignment(Alignment::Center);
    f.render_widget(source, chunks[2]);

    let help = Paragraph::new("Esc: Quit | Enter: Submit | Ctrl-R: Restart")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    f.render_widget(help, chunks[3]);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, RowBounds};
    use crate::core::Key;
    use crate::game::Session;
    use crate::wordlists::{EmbeddedWordSource, WordListError};
    use ratatui::{Terminal, backend::TestBackend};
    use std::sync::Arc;

    fn ready_app(secret: &str, dev_mode: bool) -> App {
        let config = GameConfig {
            row_bounds: RowBounds::new(2, 2).unwrap(),
            ..GameConfig::default()
        }
        .with_dev_mode(dev_mode);
        let mut app = App::new(Session::with_seed(&config, 2), Arc::new(EmbeddedWordSource));
        let generation = app.session.begin_load();
        app.session
            .complete_load(generation, Ok(vec![secret.to_string()]));
        app
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
        terminal.draw(|f| ui(f, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn renders_typed_letters_and_row_counter() {
        let mut app = ready_app("apple", false);
        app.session.handle_key(Key::Letter('q'));

        let text = screen(&app);
        assert!(text.contains('Q'));
        assert!(text.contains("Row 1/2"));
        assert!(!text.contains("Your word is"));
    }

    #[test]
    fn dev_mode_shows_secret() {
        let app = ready_app("apple", true);
        assert!(screen(&app).contains("Your word is: APPLE"));
    }

    #[test]
    fn win_banner_after_correct_guess() {
        let mut app = ready_app("apple", false);
        for c in "apple".chars() {
            app.session.handle_key(Key::from_char(c));
        }
        app.session.handle_key(Key::Enter);

        assert!(screen(&app).contains("You Win :)"));
    }

    #[test]
    fn failed_load_reports_in_message_log() {
        let config = GameConfig::default();
        let mut app = App::new(Session::with_seed(&config, 2), Arc::new(EmbeddedWordSource));
        let generation = app.session.begin_load();
        app.apply_load(generation, Err(WordListError::Empty));

        let text = screen(&app);
        assert!(text.contains("Error getting the word list"));
        assert!(text.contains("Row 1/"));
    }

    #[test]
    fn submitted_absent_letter_is_grey() {
        let cell = BoardCell::filled('x');
        assert_eq!(cell_style(&cell, true).bg, Some(Color::DarkGray));
        assert_eq!(cell_style(&cell, false).bg, None);
    }

    #[test]
    fn marked_cells_are_filled() {
        let mut cell = BoardCell::filled('a');
        cell.mark(CellState::OnPosition);
        assert_eq!(cell_style(&cell, true).bg, Some(Color::Green));

        cell.mark(CellState::OnRow);
        assert_eq!(cell_style(&cell, true).bg, Some(Color::Yellow));
    }
}
