//! Win/loss tally across restarts

use super::GameState;
use rustc_hash::FxHashMap;

/// Results of every finished game in this process
#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Rows used → number of wins
    pub guess_distribution: FxHashMap<usize, usize>,
}

impl Statistics {
    /// Count a finished game. Unfinished states are ignored.
    pub fn record(&mut self, state: GameState, rows_used: usize) {
        match state {
            GameState::Win => {
                self.total_games += 1;
                self.games_won += 1;
                *self.guess_distribution.entry(rows_used).or_insert(0) += 1;
            }
            GameState::Lose => self.total_games += 1,
            _ => {}
        }
    }

    /// Percentage of games won, 0 when nothing has been played
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        if self.total_games == 0 {
            0.0
        } else {
            self.games_won as f64 / self.total_games as f64 * 100.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_wins_and_losses() {
        let mut stats = Statistics::default();
        stats.record(GameState::Win, 2);
        stats.record(GameState::Win, 2);
        stats.record(GameState::Lose, 5);
        stats.record(GameState::Ready, 1);

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.guess_distribution.get(&2), Some(&2));
        assert!((stats.win_rate() - 66.666).abs() < 0.01);
    }

    #[test]
    fn empty_win_rate_is_zero() {
        assert!(Statistics::default().win_rate().abs() < f64::EPSILON);
    }
}
