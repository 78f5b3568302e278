//! Answer pickers

use super::WordList;
use crate::engine::WordSource;
use rand::SeedableRng;
use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;

/// Picks a random answer of a fixed length from a word list
pub struct RandomWordSource<R = StdRng> {
    candidates: Vec<String>,
    rng: R,
}

impl RandomWordSource {
    /// Random source seeded from the operating system
    #[must_use]
    pub fn new(list: &WordList, characters: usize) -> Self {
        Self::with_rng(list, characters, StdRng::from_os_rng())
    }

    /// Deterministic source, for reproducible games and tests
    #[must_use]
    pub fn seeded(list: &WordList, characters: usize, seed: u64) -> Self {
        Self::with_rng(list, characters, StdRng::seed_from_u64(seed))
    }
}

impl<R: rand::Rng> RandomWordSource<R> {
    pub fn with_rng(list: &WordList, characters: usize, rng: R) -> Self {
        Self {
            candidates: list.with_length(characters),
            rng,
        }
    }

    /// Whether no word of the requested length was found
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }
}

impl<R: rand::Rng> WordSource for RandomWordSource<R> {
    fn pick_answer(&mut self) -> Option<String> {
        self.candidates.choose(&mut self.rng).cloned()
    }
}

/// Always yields the same answer
#[derive(Debug, Clone)]
pub struct FixedWordSource {
    answer: String,
}

impl FixedWordSource {
    pub fn new(answer: impl Into<String>) -> Self {
        Self {
            answer: answer.into(),
        }
    }
}

impl WordSource for FixedWordSource {
    fn pick_answer(&mut self) -> Option<String> {
        Some(self.answer.clone())
    }
}
