//! Game dimensions

/// Board dimensions for one game
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Number of guess rows
    pub guess_limit: usize,
    /// Letters per word
    pub characters: usize,
}

impl GameConfig {
    pub const DEFAULT_GUESSES: usize = 6;
    pub const DEFAULT_CHARACTERS: usize = 5;

    #[must_use]
    pub const fn new(guess_limit: usize, characters: usize) -> Self {
        Self {
            guess_limit,
            characters,
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(Self::DEFAULT_GUESSES, Self::DEFAULT_CHARACTERS)
    }
}
