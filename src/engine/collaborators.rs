//! Interfaces the engine consumes from the outside world

/// Membership test for guessable words
///
/// The engine always asks with the upper-case text of a full board row.
pub trait Dictionary {
    fn contains(&self, word: &str) -> bool;
}

/// Supplies the secret answer for a new game
pub trait WordSource {
    /// Pick an answer, or `None` if the source has nothing to offer
    fn pick_answer(&mut self) -> Option<String>;
}
