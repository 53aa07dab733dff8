//! Wordle game flow
//!
//! The session state machine plus a running tally of results.

mod session;
mod stats;

pub use session::{Cursor, GameState, Generation, KeyOutcome, Session};
pub use stats::Statistics;
