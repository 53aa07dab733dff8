//! Game configuration
//!
//! Everything the session needs from the outside world is gathered here and
//! handed over at construction time.

use crate::wordlists::SourceKind;
use std::fmt;

/// Default remote word list
pub const WORDLE_API_URL: &str = "https://api.frontendexpert.io/api/fe/wordle-words";

/// Error type for invalid configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    InvalidRowBounds { min: usize, max: usize },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidRowBounds { min, max } => {
                write!(f, "Row bounds must satisfy 1 <= min <= max, got {min}..={max}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}

/// Inclusive range the board's row count is drawn from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowBounds {
    min: usize,
    max: usize,
}

impl RowBounds {
    /// # Errors
    /// Returns `ConfigError::InvalidRowBounds` if `min` is zero or exceeds `max`.
    pub const fn new(min: usize, max: usize) -> Result<Self, ConfigError> {
        if min == 0 || min > max {
            return Err(ConfigError::InvalidRowBounds { min, max });
        }
        Ok(Self { min, max })
    }

    #[inline]
    #[must_use]
    pub const fn min(self) -> usize {
        self.min
    }

    #[inline]
    #[must_use]
    pub const fn max(self) -> usize {
        self.max
    }
}

impl Default for RowBounds {
    fn default() -> Self {
        Self { min: 2, max: 5 }
    }
}

/// Settings for one Wordle session
#[derive(Debug, Clone)]
pub struct GameConfig {
    pub source: SourceKind,
    pub row_bounds: RowBounds,
    /// Show the secret word on screen
    pub dev_mode: bool,
}

impl GameConfig {
    #[must_use]
    pub const fn new(source: SourceKind, row_bounds: RowBounds) -> Self {
        Self {
            source,
            row_bounds,
            dev_mode: false,
        }
    }

    #[must_use]
    pub fn with_dev_mode(mut self, dev_mode: bool) -> Self {
        self.dev_mode = dev_mode;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(
            SourceKind::Remote(WORDLE_API_URL.to_string()),
            RowBounds::default(),
        )
    }
}
