//! Cell evaluation status and overall game state

use std::fmt;

/// Classification of a single board cell after its row was submitted
///
/// Variants are declared in ascending priority so the derived `Ord` matches
/// the order used for keyboard hints: `Correct > Present > Absent > Unknown`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum EvaluationStatus {
    /// Not evaluated yet
    #[default]
    Unknown,
    /// Letter not in the answer, or every occurrence already matched
    Absent,
    /// Letter in the answer at another position
    Present,
    /// Letter in the answer at this position
    Correct,
}

impl EvaluationStatus {
    /// Whether the cell has been evaluated
    #[inline]
    #[must_use]
    pub const fn is_known(self) -> bool {
        !matches!(self, Self::Unknown)
    }

    /// Square emoji used in share grids and the simple CLI
    #[must_use]
    pub const fn to_emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
            Self::Unknown => '·',
        }
    }
}

impl fmt::Display for EvaluationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Unknown => "unknown",
            Self::Absent => "absent",
            Self::Present => "present",
            Self::Correct => "correct",
        };
        f.write_str(name)
    }
}

/// Whether the game is still accepting input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum GameState {
    #[default]
    InProgress,
    Win,
    Lose,
}

impl GameState {
    /// Win and Lose are terminal
    #[inline]
    #[must_use]
    pub const fn is_over(self) -> bool {
        !matches!(self, Self::InProgress)
    }
}
