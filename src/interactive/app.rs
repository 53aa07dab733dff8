//! TUI application state and logic

use super::with_terminal;
use crate::core::Key;
use crate::game::{GameState, Generation, KeyOutcome, Session, Statistics};
use crate::wordlists::{WordListError, WordSource};
use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::Terminal;
use std::sync::Arc;
use std::sync::mpsc::{self, Receiver, Sender};
use std::thread;
use std::time::Duration;

const TICK: Duration = Duration::from_millis(100);

/// A finished word-list fetch, tagged with the load it belongs to
struct LoadResult {
    generation: Generation,
    result: Result<Vec<String>, WordListError>,
}

/// Application state
pub struct App {
    pub session: Session,
    pub source: Arc<dyn WordSource>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    results_tx: Sender<LoadResult>,
    results_rx: Receiver<LoadResult>,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

impl App {
    #[must_use]
    pub fn new(session: Session, source: Arc<dyn WordSource>) -> Self {
        let (results_tx, results_rx) = mpsc::channel();

        Self {
            session,
            source,
            messages: vec![Message {
                text: "Type a word and press Enter. Esc quits.".to_string(),
                style: MessageStyle::Info,
            }],
            stats: Statistics::default(),
            should_quit: false,
            results_tx,
            results_rx,
        }
    }

    /// Begin a load and fetch the word list on a worker thread
    pub fn start_load(&mut self) {
        let generation = self.session.begin_load();
        self.spawn_fetch(generation);
    }

    fn spawn_fetch(&self, generation: Generation) {
        let source = Arc::clone(&self.source);
        let tx = self.results_tx.clone();

        thread::spawn(move || {
            let result = source.fetch();
            // The receiver is gone only when the app has shut down.
            let _ = tx.send(LoadResult { generation, result });
        });
    }

    /// Apply any fetch results that have arrived
    pub fn poll_loads(&mut self) {
        while let Ok(LoadResult { generation, result }) = self.results_rx.try_recv() {
            self.apply_load(generation, result);
        }
    }

    pub(crate) fn apply_load(&mut self, generation: Generation, result: Result<Vec<String>, WordListError>) {
        if !self.session.complete_load(generation, result) {
            return;
        }

        if let Some(error) = self.session.last_error() {
            let text = error.to_string();
            self.add_message(&text, MessageStyle::Error);
        } else {
            let text = format!(
                "New word: {} letters, {} tries",
                self.session.board().column_count(),
                self.session.board().row_count()
            );
            self.add_message(&text, MessageStyle::Info);
        }
    }

    /// Restart after the game ends
    pub fn restart(&mut self) {
        match self.session.restart() {
            Some(generation) => {
                self.add_message("Restarting...", MessageStyle::Info);
                self.spawn_fetch(generation);
            }
            None => self.add_message("Finish the current game first", MessageStyle::Error),
        }
    }

    pub fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('r') if key.modifiers.contains(KeyModifiers::CONTROL) => self.restart(),
            KeyCode::F(5) => self.restart(),
            code => {
                let outcome = self.session.handle_key(map_key(code));
                self.on_outcome(outcome);
            }
        }
    }

    fn on_outcome(&mut self, outcome: KeyOutcome) {
        match outcome {
            KeyOutcome::Won => {
                self.stats
                    .record(GameState::Win, self.session.rows_used());
                self.add_message("You Win :)", MessageStyle::Success);
                self.add_message("Press Ctrl-R to restart", MessageStyle::Info);
            }
            KeyOutcome::Lost => {
                self.stats
                    .record(GameState::Lose, self.session.rows_used());
                let text = format!("You Lose. The word was {}", self.reveal());
                self.add_message(&text, MessageStyle::Error);
                self.add_message("Press Ctrl-R to restart", MessageStyle::Info);
            }
            KeyOutcome::Ignored
            | KeyOutcome::Written
            | KeyOutcome::Erased
            | KeyOutcome::Advanced => {}
        }
    }

    fn reveal(&self) -> String {
        let secret = self.session.secret();
        if secret.is_empty() {
            "unknown".to_string()
        } else {
            secret.to_uppercase()
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }
}

/// Translate a terminal key into a board key
#[must_use]
pub const fn map_key(code: KeyCode) -> Key {
    match code {
        KeyCode::Char(c) => Key::from_char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    }
}

/// Run the Wordle TUI
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    with_terminal(|terminal| run_app(terminal, app))
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    app.start_load();

    loop {
        app.poll_loads();
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if event::poll(TICK)?
            && let Event::Key(key) = event::read()?
            // Only process key press events (fixes Windows double-input bug)
            && key.kind == KeyEventKind::Press
        {
            app.handle_key_event(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{GameConfig, RowBounds};

    struct FixedSource(Vec<&'static str>);

    impl WordSource for FixedSource {
        fn fetch(&self) -> Result<Vec<String>, WordListError> {
            if self.0.is_empty() {
                return Err(WordListError::Empty);
            }
            Ok(self.0.iter().map(ToString::to_string).collect())
        }

        fn describe(&self) -> String {
            "fixed".to_string()
        }
    }

    fn app(words: Vec<&'static str>, rows: usize) -> App {
        let config = GameConfig {
            row_bounds: RowBounds::new(rows, rows).unwrap(),
            ..GameConfig::default()
        };
        App::new(Session::with_seed(&config, 4), Arc::new(FixedSource(words)))
    }

    /// Block until the worker reports back, then apply it
    fn wait_for_load(app: &mut App) {
        let LoadResult { generation, result } = app
            .results_rx
            .recv_timeout(Duration::from_secs(5))
            .unwrap();
        app.apply_load(generation, result);
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key_event(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
    }

    #[test]
    fn worker_load_makes_session_ready() {
        let mut app = app(vec!["apple"], 2);
        app.start_load();
        assert_eq!(app.session.state(), GameState::Loading);

        wait_for_load(&mut app);
        assert_eq!(app.session.state(), GameState::Ready);
        assert_eq!(app.session.secret(), "apple");
    }

    #[test]
    fn win_is_recorded_and_restart_reloads() {
        let mut app = app(vec!["apple"], 1);
        app.start_load();
        wait_for_load(&mut app);

        type_word(&mut app, "apple");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state(), GameState::Win);
        assert_eq!(app.stats.games_won, 1);

        app.handle_key_event(KeyEvent::new(KeyCode::Char('r'), KeyModifiers::CONTROL));
        assert_eq!(app.session.state(), GameState::Loading);
        wait_for_load(&mut app);
        assert_eq!(app.session.state(), GameState::Ready);
        assert_eq!(app.session.board().row_word(0), "");
    }

    #[test]
    fn loss_reveals_word() {
        let mut app = app(vec!["apple"], 1);
        app.start_load();
        wait_for_load(&mut app);

        type_word(&mut app, "crane");
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.session.state(), GameState::Lose);
        assert_eq!(app.stats.total_games, 1);
        assert!(app.messages.iter().any(|m| m.text.contains("APPLE")));
    }

    #[test]
    fn failed_fetch_reports_error_message() {
        let mut app = app(Vec::new(), 2);
        app.start_load();
        wait_for_load(&mut app);

        assert_eq!(app.session.state(), GameState::Ready);
        assert!(matches!(
            app.messages.last().map(|m| &m.style),
            Some(MessageStyle::Error)
        ));
    }

    #[test]
    fn restart_mid_game_is_refused() {
        let mut app = app(vec!["apple"], 2);
        app.start_load();
        wait_for_load(&mut app);

        press(&mut app, KeyCode::F(5));
        assert_eq!(app.session.state(), GameState::Ready);
    }

    #[test]
    fn escape_quits() {
        let mut app = app(vec!["apple"], 2);
        press(&mut app, KeyCode::Esc);
        assert!(app.should_quit);
    }

    #[test]
    fn key_mapping() {
        assert_eq!(map_key(KeyCode::Char('X')), Key::Letter('x'));
        assert_eq!(map_key(KeyCode::Enter), Key::Enter);
        assert_eq!(map_key(KeyCode::Backspace), Key::Backspace);
        assert_eq!(map_key(KeyCode::Tab), Key::Other);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app(vec!["apple"], 2);
        for i in 0..10 {
            app.add_message(&format!("m{i}"), MessageStyle::Info);
        }
        assert_eq!(app.messages.len(), 5);
        assert_eq!(app.messages[0].text, "m5");
    }
}
