//! Core domain types for Wordle
//!
//! Cell statuses, the guess evaluation rules, and per-letter hints.
//! All types here are pure and free of I/O.

mod evaluation;
mod hints;
mod status;

pub use evaluation::{evaluate, is_solved};
pub use hints::LetterHints;
pub use status::{EvaluationStatus, GameState};
