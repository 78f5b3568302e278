//! Session statistics
//!
//! Counts finished games for the current process only; nothing is saved.

use crate::core::GameState;
use crate::engine::GameSnapshot;

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub total_games: usize,
    pub games_won: usize,
    /// Wins by guess count; index 0 is unused
    pub guess_distribution: Vec<usize>,
}

impl Statistics {
    /// Record a finished game; in-progress snapshots are ignored
    pub fn record(&mut self, state: &GameSnapshot) {
        match state.game_state() {
            GameState::InProgress => return,
            GameState::Win => {
                let guesses = state.guesses_used();
                if self.guess_distribution.len() <= guesses {
                    self.guess_distribution.resize(guesses + 1, 0);
                }
                self.guess_distribution[guesses] += 1;
                self.games_won += 1;
            }
            GameState::Lose => {}
        }
        self.total_games += 1;
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

    /// Wins that took exactly `guesses` guesses
    #[must_use]
    pub fn wins_in(&self, guesses: usize) -> usize {
        self.guess_distribution.get(guesses).copied().unwrap_or(0)
    }

    /// Highest count in the distribution, for scaling bars
    #[must_use]
    pub fn max_bucket(&self) -> usize {
        self.guess_distribution.iter().copied().max().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GuessEngine;
    use crate::wordlists::WordList;

    fn finished(answer: &str, guesses: &[&str], dict: &WordList) -> GameSnapshot {
        let mut engine = GuessEngine::new(2, 5, answer, dict).unwrap();
        for word in guesses {
            for c in word.chars() {
                engine.handle_key(&c.to_string());
            }
            engine.handle_key("Enter");
        }
        engine.snapshot()
    }

    #[test]
    fn empty_statistics() {
        let stats = Statistics::default();
        assert!(stats.win_rate().abs() < f64::EPSILON);
        assert_eq!(stats.wins_in(3), 0);
        assert_eq!(stats.max_bucket(), 0);
    }

    #[test]
    fn records_wins_and_losses() {
        let dict = WordList::new(["crane", "slate", "allow"]);
        let mut stats = Statistics::default();

        stats.record(&finished("allow", &["crane", "allow"], &dict));
        stats.record(&finished("allow", &["allow"], &dict));
        stats.record(&finished("allow", &["crane", "slate"], &dict));

        assert_eq!(stats.total_games, 3);
        assert_eq!(stats.games_won, 2);
        assert_eq!(stats.wins_in(1), 1);
        assert_eq!(stats.wins_in(2), 1);
        assert!((stats.win_rate() - 200.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn in_progress_is_not_recorded() {
        let dict = WordList::new(["crane", "allow"]);
        let mut stats = Statistics::default();
        stats.record(&finished("allow", &["crane"], &dict));
        assert_eq!(stats, Statistics::default());
    }
}
