//! Per-letter keyboard hints
//!
//! Each letter keeps the best status it has ever been given in this game.

use super::EvaluationStatus;
use rustc_hash::FxHashMap;

/// Best status observed for each letter across all submitted rows
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterHints {
    hints: FxHashMap<char, EvaluationStatus>,
}

impl LetterHints {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hint for `letter`, `Unknown` if it has never been submitted
    #[inline]
    #[must_use]
    pub fn get(&self, letter: char) -> EvaluationStatus {
        self.hints.get(&letter).copied().unwrap_or_default()
    }

    /// Record an observation, keeping the higher-priority status
    ///
    /// Returns `true` if the stored hint changed.
    pub fn record(&mut self, letter: char, status: EvaluationStatus) -> bool {
        if !status.is_known() {
            return false;
        }

        let entry = self.hints.entry(letter).or_default();
        if status > *entry {
            *entry = status;
            true
        } else {
            false
        }
    }

    /// Record every column of an evaluated row
    pub fn record_row(&mut self, letters: &[char], statuses: &[EvaluationStatus]) {
        for (&letter, &status) in letters.iter().zip(statuses) {
            self.record(letter, status);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.hints.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.hints.is_empty()
    }

    /// All hinted letters in alphabetical order
    #[must_use]
    pub fn sorted(&self) -> Vec<(char, EvaluationStatus)> {
        let mut entries: Vec<_> = self.hints.iter().map(|(&c, &s)| (c, s)).collect();
        entries.sort_unstable_by_key(|&(c, _)| c);
        entries
    }
}
