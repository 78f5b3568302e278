//! The guess engine: board, cursors and the turn state machine

use super::observer::Observers;
use super::snapshot::BLANK;
use super::{
    Dictionary, GameConfig, GameError, GameEvent, GameSnapshot, Key, KeyOutcome, NoOp,
    Subscription, WordSource,
};
use crate::core::{GameState, evaluate, is_solved};

/// State machine for one game
///
/// Owns the board, the evaluation grid and the letter hints. All mutation
/// goes through [`handle_key`](Self::handle_key); subscribers receive the
/// full snapshot synchronously after every command that changed something.
///
/// # Examples
/// ```
/// use wordle_engine::core::GameState;
/// use wordle_engine::engine::{GameEvent, GuessEngine, KeyOutcome};
/// use wordle_engine::wordlists::WordList;
///
/// let dictionary = WordList::new(["crane", "allow"]);
/// let mut engine = GuessEngine::new(6, 5, "allow", &dictionary).unwrap();
///
/// for key in ["a", "l", "l", "o", "w"] {
///     engine.handle_key(key);
/// }
/// let outcome = engine.handle_key("Enter");
///
/// assert_eq!(
///     outcome,
///     KeyOutcome::Event(GameEvent::GameWon { answer: "ALLOW".to_string(), guesses: 1 })
/// );
/// assert_eq!(engine.state().game_state(), GameState::Win);
/// ```
pub struct GuessEngine<'d, D: Dictionary + ?Sized> {
    state: GameSnapshot,
    dictionary: &'d D,
    observers: Observers,
}

impl<'d, D: Dictionary + ?Sized> GuessEngine<'d, D> {
    /// Start a game with a known answer
    ///
    /// The answer is upper-cased.
    ///
    /// # Errors
    ///
    /// Returns `GameError` if either dimension is zero, the answer length
    /// differs from `characters`, or the answer has non-letter characters.
    pub fn new(
        guess_limit: usize,
        characters: usize,
        answer: &str,
        dictionary: &'d D,
    ) -> Result<Self, GameError> {
        if guess_limit == 0 {
            return Err(GameError::InvalidGuessLimit);
        }
        if characters == 0 {
            return Err(GameError::InvalidWordLength);
        }
        if answer.chars().count() != characters {
            return Err(GameError::InvalidAnswerLength {
                answer: answer.to_string(),
                characters,
            });
        }
        if !answer.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(GameError::InvalidAnswerCharacters(answer.to_string()));
        }

        Ok(Self {
            state: GameSnapshot::new(guess_limit, characters, answer.to_ascii_uppercase()),
            dictionary,
            observers: Observers::default(),
        })
    }

    /// Start a game with the given dimensions
    ///
    /// # Errors
    ///
    /// See [`new`](Self::new).
    pub fn with_config(
        config: GameConfig,
        answer: &str,
        dictionary: &'d D,
    ) -> Result<Self, GameError> {
        Self::new(config.guess_limit, config.characters, answer, dictionary)
    }

    /// Start a game with an answer picked by `source`
    ///
    /// # Errors
    ///
    /// Returns `GameError::NoAnswerAvailable` if the source is empty, or any
    /// error from [`new`](Self::new) if the picked word does not fit.
    pub fn from_source<S: WordSource + ?Sized>(
        config: GameConfig,
        source: &mut S,
        dictionary: &'d D,
    ) -> Result<Self, GameError> {
        let answer = source
            .pick_answer()
            .ok_or(GameError::NoAnswerAvailable(config.characters))?;
        Self::with_config(config, &answer, dictionary)
    }

    /// Current state
    #[must_use]
    pub const fn state(&self) -> &GameSnapshot {
        &self.state
    }

    /// Owned copy of the current state
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        self.state.clone()
    }

    /// Register a callback invoked with the full state after every change
    ///
    /// The callback is not invoked for the state at subscription time.
    pub fn subscribe(&mut self, callback: impl FnMut(&GameSnapshot) + 'static) -> Subscription {
        self.observers.subscribe(Box::new(callback))
    }

    /// Remove a callback; returns `false` if it was already gone
    pub fn unsubscribe(&mut self, subscription: Subscription) -> bool {
        self.observers.unsubscribe(subscription)
    }

    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.observers.len()
    }

    /// Handle a key by name: a single letter, `"Backspace"` or `"Enter"`
    pub fn handle_key(&mut self, key: &str) -> KeyOutcome {
        match Key::from_name(key) {
            Some(key) => self.press(key),
            None => KeyOutcome::Ignored(NoOp::UnsupportedKey),
        }
    }

    /// Handle an already-parsed key
    pub fn press(&mut self, key: Key) -> KeyOutcome {
        if self.state.is_over() {
            return KeyOutcome::Ignored(NoOp::GameOver);
        }

        match key {
            Key::Backspace => self.backspace(),
            Key::Enter => self.enter(),
            Key::Letter(letter) => self.type_letter(letter),
        }
    }

    fn type_letter(&mut self, letter: char) -> KeyOutcome {
        if self.state.row_complete() {
            return KeyOutcome::Ignored(NoOp::RowFull);
        }

        let (row, col) = (self.state.current_guess_index, self.state.current_char_index);
        self.state.board[row][col] = letter.to_ascii_uppercase();
        self.state.current_char_index += 1;

        self.notify();
        KeyOutcome::Updated
    }

    fn backspace(&mut self) -> KeyOutcome {
        if self.state.current_char_index == 0 {
            return KeyOutcome::Ignored(NoOp::RowEmpty);
        }

        self.state.current_char_index -= 1;
        let (row, col) = (self.state.current_guess_index, self.state.current_char_index);
        self.state.board[row][col] = BLANK;

        self.notify();
        KeyOutcome::Updated
    }

    fn enter(&mut self) -> KeyOutcome {
        if !self.state.row_complete() {
            return KeyOutcome::Ignored(NoOp::RowIncomplete);
        }

        let word: String = self.state.board[self.state.current_guess_index]
            .iter()
            .collect();
        if !self.dictionary.contains(&word) {
            return KeyOutcome::Event(GameEvent::WordInvalid { word });
        }

        let event = self.submit_guess(word);
        self.notify();
        KeyOutcome::Event(event)
    }

    /// Evaluate the current row and advance the state machine
    fn submit_guess(&mut self, word: String) -> GameEvent {
        let row = self.state.current_guess_index;
        self.evaluate_row(row);
        self.state.last_guess = Some(word.clone());

        if is_solved(&self.state.evaluations[row]) {
            self.state.game_state = GameState::Win;
            return GameEvent::GameWon {
                answer: self.state.answer.clone(),
                guesses: row + 1,
            };
        }

        self.state.current_guess_index += 1;
        self.state.current_char_index = 0;

        if self.state.current_guess_index >= self.state.guess_limit {
            self.state.game_state = GameState::Lose;
            return GameEvent::GameLost {
                answer: self.state.answer.clone(),
            };
        }

        GameEvent::GuessSubmitted { word, row }
    }

    fn evaluate_row(&mut self, row: usize) {
        let answer: Vec<char> = self.state.answer.chars().collect();
        let statuses = evaluate(&self.state.board[row], &answer);

        self.state
            .letter_hints
            .record_row(&self.state.board[row], &statuses);
        self.state.evaluations[row] = statuses;
    }

    fn notify(&mut self) {
        self.observers.notify(&self.state);
    }
}
