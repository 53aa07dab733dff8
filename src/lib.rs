//! Wordle board and folder tree
//!
//! Two small terminal widgets: a Wordle game whose secret word comes from a
//! remote word list, and a collapsible folder tree.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_tree::config::{GameConfig, RowBounds};
//! use wordle_tree::core::Key;
//! use wordle_tree::game::{GameState, Session};
//!
//! let config = GameConfig {
//!     row_bounds: RowBounds::new(1, 1).unwrap(),
//!     ..GameConfig::default()
//! };
//! let mut session = Session::new(&config);
//! let generation = session.begin_load();
//! session.complete_load(generation, Ok(vec!["apple".to_string()]));
//!
//! for name in ["a", "p", "p", "l", "e", "Enter"] {
//!     session.handle_key(Key::from_name(name));
//! }
//! assert_eq!(session.state(), GameState::Win);
//! ```

// Core domain types
pub mod core;

// Session state machine
pub mod game;

// Word lists
pub mod wordlists;

// Folder tree model
pub mod tree;

// Injected settings
pub mod config;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
