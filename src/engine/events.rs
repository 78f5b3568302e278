//! Results of a key press

/// Notable things that happened while handling a key
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// The full row is not in the dictionary; nothing changed
    WordInvalid { word: String },
    /// A guess was evaluated and the game continues
    GuessSubmitted { word: String, row: usize },
    /// The answer was guessed
    GameWon { answer: String, guesses: usize },
    /// The last row was used up without guessing the answer
    GameLost { answer: String },
}

impl GameEvent {
    /// Whether this event moved the game to Win or Lose
    #[must_use]
    pub const fn ends_game(&self) -> bool {
        matches!(self, Self::GameWon { .. } | Self::GameLost { .. })
    }
}

/// Why a key press had no effect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoOp {
    UnsupportedKey,
    GameOver,
    /// Backspace on an empty row
    RowEmpty,
    /// Letter on a full row
    RowFull,
    /// Enter before the row is complete ("not enough letters")
    RowIncomplete,
}

/// What [`GuessEngine::handle_key`](super::GuessEngine::handle_key) did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyOutcome {
    /// Nothing changed and nobody was notified
    Ignored(NoOp),
    /// The board changed (letter typed or removed)
    Updated,
    /// Enter was processed
    Event(GameEvent),
}

impl KeyOutcome {
    /// Whether engine state changed (and subscribers were notified)
    #[must_use]
    pub const fn changed_state(&self) -> bool {
        match self {
            Self::Ignored(_) | Self::Event(GameEvent::WordInvalid { .. }) => false,
            Self::Updated | Self::Event(_) => true,
        }
    }

    #[must_use]
    pub const fn event(&self) -> Option<&GameEvent> {
        match self {
            Self::Event(event) => Some(event),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_word_does_not_change_state() {
        let outcome = KeyOutcome::Event(GameEvent::WordInvalid {
            word: "XXXXX".to_string(),
        });
        assert!(!outcome.changed_state());
        assert!(outcome.event().is_some());
    }

    #[test]
    fn ignored_and_updated() {
        assert!(!KeyOutcome::Ignored(NoOp::RowFull).changed_state());
        assert!(KeyOutcome::Updated.changed_state());
        assert!(KeyOutcome::Updated.event().is_none());
    }

    #[test]
    fn only_win_and_loss_end_the_game() {
        let won = GameEvent::GameWon {
            answer: "ALLOW".to_string(),
            guesses: 3,
        };
        let lost = GameEvent::GameLost {
            answer: "ALLOW".to_string(),
        };
        let submitted = GameEvent::GuessSubmitted {
            word: "CRANE".to_string(),
            row: 0,
        };

        assert!(won.ends_game());
        assert!(lost.ends_game());
        assert!(!submitted.ends_game());
    }
}
