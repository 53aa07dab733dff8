//! Wordle session controller
//!
//! Owns the board, the write cursor, the secret word and the game state for
//! one play-through. Key presses are routed through a single entry point,
//! [`Session::handle_key`], which mutates the cursor in place.
//!
//! Word loading is split in two so the fetch can run elsewhere:
//! [`Session::begin_load`] hands out a generation number and
//! [`Session::complete_load`] applies a result only if its generation is
//! still current.

use crate::config::{GameConfig, RowBounds};
use crate::core::{Board, DEFAULT_WORD_SIZE, Evaluation, Key};
use crate::wordlists::{WordListError, loader};
use rand::SeedableRng;
use rand::rngs::StdRng;
use std::fmt;

/// Load counter used to discard stale word-list results
pub type Generation = u64;

/// Lifecycle of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameState {
    #[default]
    None,
    Loading,
    Ready,
    Win,
    Lose,
    Error,
}

impl GameState {
    /// Whether the game has ended and may be restarted
    #[must_use]
    pub const fn is_finished(self) -> bool {
        matches!(self, Self::Win | Self::Lose)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::None => "NONE",
            Self::Loading => "LOADING",
            Self::Ready => "READY",
            Self::Win => "WIN",
            Self::Lose => "LOSE",
            Self::Error => "ERROR",
        };
        f.write_str(name)
    }
}

/// Current write position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub row: usize,
    pub column: usize,
}

/// What a key press did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed
    Ignored,
    /// A letter was written
    Written,
    /// The previous letter was removed
    Erased,
    /// The row was marked and the cursor moved to the next row
    Advanced,
    Won,
    Lost,
}

/// One play-through of the board
pub struct Session {
    board: Board,
    cursor: Cursor,
    secret: String,
    state: GameState,
    generation: Generation,
    row_bounds: RowBounds,
    dev_mode: bool,
    last_error: Option<WordListError>,
    evaluations: Vec<Evaluation>,
    rng: StdRng,
}

impl Session {
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        Self::with_rng(config, StdRng::from_os_rng())
    }

    /// Deterministic session for reproducible boards
    #[must_use]
    pub fn with_seed(config: &GameConfig, seed: u64) -> Self {
        Self::with_rng(config, StdRng::seed_from_u64(seed))
    }

    fn with_rng(config: &GameConfig, mut rng: StdRng) -> Self {
        let board = Board::with_random_rows(DEFAULT_WORD_SIZE, config.row_bounds, &mut rng);

        Self {
            board,
            cursor: Cursor::default(),
            secret: String::new(),
            state: GameState::None,
            generation: 0,
            row_bounds: config.row_bounds,
            dev_mode: config.dev_mode,
            last_error: None,
            evaluations: Vec::new(),
            rng,
        }
    }

    #[must_use]
    pub const fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub const fn cursor(&self) -> Cursor {
        self.cursor
    }

    #[must_use]
    pub const fn state(&self) -> GameState {
        self.state
    }

    #[must_use]
    pub fn secret(&self) -> &str {
        &self.secret
    }

    #[must_use]
    pub const fn dev_mode(&self) -> bool {
        self.dev_mode
    }

    #[must_use]
    pub const fn generation(&self) -> Generation {
        self.generation
    }

    /// The failure recorded by the most recent load, if it failed
    #[must_use]
    pub const fn last_error(&self) -> Option<&WordListError> {
        self.last_error.as_ref()
    }

    /// Feedback for every submitted row, oldest first
    #[must_use]
    pub fn evaluations(&self) -> &[Evaluation] {
        &self.evaluations
    }

    /// Number of rows submitted so far
    #[must_use]
    pub fn rows_used(&self) -> usize {
        self.evaluations.len()
    }

    /// Enter LOADING and return the generation the result must carry
    pub fn begin_load(&mut self) -> Generation {
        self.generation += 1;
        self.state = GameState::Loading;
        tracing::info!(generation = self.generation, "loading word list");
        self.generation
    }

    /// Start over after a win or a loss
    ///
    /// Returns the new generation, or `None` if the game is still running.
    pub fn restart(&mut self) -> Option<Generation> {
        if !self.state.is_finished() {
            tracing::debug!(state = %self.state, "restart ignored");
            return None;
        }
        tracing::info!(state = %self.state, "restarting");
        Some(self.begin_load())
    }

    /// Apply a word-list result
    ///
    /// Results from an older generation, or arriving when no load is pending,
    /// are dropped and `false` is returned.
    ///
    /// A failed load is recorded in [`Session::last_error`] and passes through
    /// ERROR, but the session still settles on READY with an empty secret and
    /// a default-width board.
    pub fn complete_load(
        &mut self,
        generation: Generation,
        result: Result<Vec<String>, WordListError>,
    ) -> bool {
        if generation != self.generation || self.state != GameState::Loading {
            tracing::warn!(
                generation,
                current = self.generation,
                state = %self.state,
                "discarding stale word list result"
            );
            return false;
        }

        let picked = result.and_then(|words| loader::pick_word(&words, &mut self.rng));

        match picked {
            Ok(secret) => {
                let columns = secret.chars().count();
                self.reset_board(columns);
                tracing::info!(columns, rows = self.board.row_count(), "new game ready");
                self.secret = secret;
                self.last_error = None;
            }
            Err(error) => {
                tracing::error!(%error, "word list unavailable");
                self.state = GameState::Error;
                self.reset_board(DEFAULT_WORD_SIZE);
                self.secret.clear();
                self.last_error = Some(error);
            }
        }

        self.state = GameState::Ready;
        true
    }

    fn reset_board(&mut self, columns: usize) {
        self.board = Board::with_random_rows(columns, self.row_bounds, &mut self.rng);
        self.cursor = Cursor::default();
        self.evaluations.clear();
    }

    /// Route a key press
    ///
    /// Keys are only accepted while the game is READY.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        if self.state != GameState::Ready {
            return KeyOutcome::Ignored;
        }

        let outcome = match key {
            Key::Letter(letter) => self.type_letter(letter),
            Key::Backspace => self.erase_letter(),
            Key::Enter => self.submit_row(),
            Key::Other => KeyOutcome::Ignored,
        };

        tracing::debug!(?key, ?outcome, row = self.cursor.row, column = self.cursor.column, "key routed");
        outcome
    }

    fn type_letter(&mut self, letter: char) -> KeyOutcome {
        let Cursor { row, column } = self.cursor;
        if self.board.set_letter(row, column, letter) {
            self.cursor.column += 1;
            KeyOutcome::Written
        } else {
            KeyOutcome::Ignored
        }
    }

    fn erase_letter(&mut self) -> KeyOutcome {
        let Cursor { row, column } = self.cursor;
        if column == 0 {
            return KeyOutcome::Ignored;
        }

        self.board.clear_cell(row, column - 1);
        self.cursor.column -= 1;
        KeyOutcome::Erased
    }

    fn submit_row(&mut self) -> KeyOutcome {
        let row = self.cursor.row;
        if !self.board.is_row_full(row) {
            return KeyOutcome::Ignored;
        }

        let Some(cells) = self.board.row_mut(row) else {
            return KeyOutcome::Ignored;
        };
        let evaluation = Evaluation::calculate(cells, &self.secret);
        evaluation.apply(cells);

        let won = evaluation.is_win();
        self.evaluations.push(evaluation);

        if won {
            self.state = GameState::Win;
            tracing::info!(rows_used = self.rows_used(), "game won");
            return KeyOutcome::Won;
        }

        if row + 1 >= self.board.row_count() {
            self.state = GameState::Lose;
            tracing::info!(secret = %self.secret, "game lost");
            return KeyOutcome::Lost;
        }

        self.cursor = Cursor {
            row: row + 1,
            column: 0,
        };
        KeyOutcome::Advanced
    }

    /// Emoji summary of the submitted rows, one line per row
    #[must_use]
    pub fn share_text(&self) -> String {
        self.evaluations
            .iter()
            .map(Evaluation::to_emoji)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
