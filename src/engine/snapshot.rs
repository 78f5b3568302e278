//! Read-only view of a game
//!
//! The engine owns one `GameSnapshot` and mutates it through its commands;
//! everyone else gets a shared reference or a clone.

use crate::core::{EvaluationStatus, GameState, LetterHints};

/// Blank board cell
pub const BLANK: char = ' ';

/// Full state of one game
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub(super) answer: String,
    pub(super) guess_limit: usize,
    pub(super) characters: usize,
    pub(super) board: Vec<Vec<char>>,
    pub(super) evaluations: Vec<Vec<EvaluationStatus>>,
    pub(super) letter_hints: LetterHints,
    pub(super) current_guess_index: usize,
    pub(super) current_char_index: usize,
    pub(super) game_state: GameState,
    pub(super) last_guess: Option<String>,
}

impl GameSnapshot {
    pub(super) fn new(guess_limit: usize, characters: usize, answer: String) -> Self {
        Self {
            answer,
            guess_limit,
            characters,
            board: vec![vec![BLANK; characters]; guess_limit],
            evaluations: vec![vec![EvaluationStatus::Unknown; characters]; guess_limit],
            letter_hints: LetterHints::new(),
            current_guess_index: 0,
            current_char_index: 0,
            game_state: GameState::InProgress,
            last_guess: None,
        }
    }

    /// The secret answer, upper-case
    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub const fn guess_limit(&self) -> usize {
        self.guess_limit
    }

    #[must_use]
    pub const fn characters(&self) -> usize {
        self.characters
    }

    /// All rows, `guess_limit × characters`, blank cells are [`BLANK`]
    #[must_use]
    pub fn board(&self) -> &[Vec<char>] {
        &self.board
    }

    #[must_use]
    pub fn row(&self, row: usize) -> Option<&[char]> {
        self.board.get(row).map(Vec::as_slice)
    }

    /// Row contents as a string, blanks included
    #[must_use]
    pub fn row_text(&self, row: usize) -> Option<String> {
        self.row(row).map(|cells| cells.iter().collect())
    }

    /// Per-cell statuses, same shape as the board
    #[must_use]
    pub fn evaluations(&self) -> &[Vec<EvaluationStatus>] {
        &self.evaluations
    }

    #[must_use]
    pub fn evaluation(&self, row: usize) -> Option<&[EvaluationStatus]> {
        self.evaluations.get(row).map(Vec::as_slice)
    }

    #[must_use]
    pub const fn letter_hints(&self) -> &LetterHints {
        &self.letter_hints
    }

    /// Best status seen for `letter` (case-insensitive)
    #[must_use]
    pub fn hint(&self, letter: char) -> EvaluationStatus {
        self.letter_hints.get(letter.to_ascii_uppercase())
    }

    /// Every letter used in a submitted guess, alphabetical
    #[must_use]
    pub fn used_letters(&self) -> Vec<char> {
        self.letter_hints.sorted().into_iter().map(|(c, _)| c).collect()
    }

    /// Row the player is typing into (equals `guess_limit` after a loss)
    #[must_use]
    pub const fn current_guess_index(&self) -> usize {
        self.current_guess_index
    }

    /// Column of the next letter in the current row
    #[must_use]
    pub const fn current_char_index(&self) -> usize {
        self.current_char_index
    }

    /// 1-based turn number shown to the player
    #[must_use]
    pub const fn guess_number(&self) -> usize {
        self.current_guess_index + 1
    }

    /// Number of rows submitted so far
    #[must_use]
    pub const fn guesses_used(&self) -> usize {
        match self.game_state {
            GameState::Win => self.current_guess_index + 1,
            _ => self.current_guess_index,
        }
    }

    #[must_use]
    pub const fn game_state(&self) -> GameState {
        self.game_state
    }

    #[must_use]
    pub const fn is_over(&self) -> bool {
        self.game_state.is_over()
    }

    /// Most recently submitted guess
    #[must_use]
    pub fn last_guess(&self) -> Option<&str> {
        self.last_guess.as_deref()
    }

    /// Whether the active row has every column filled
    #[must_use]
    pub const fn row_complete(&self) -> bool {
        self.current_char_index >= self.characters
    }
}
