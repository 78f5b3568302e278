//! Errors raised while setting up a game

use thiserror::Error;

/// Reasons a [`GuessEngine`](super::GuessEngine) cannot be created
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("answer {answer:?} does not match {characters} characters")]
    InvalidAnswerLength { answer: String, characters: usize },

    #[error("answer {0:?} must contain only ASCII letters")]
    InvalidAnswerCharacters(String),

    #[error("guess limit must be at least 1")]
    InvalidGuessLimit,

    #[error("word length must be at least 1")]
    InvalidWordLength,

    #[error("no answer with {0} characters available")]
    NoAnswerAvailable(usize),
}
