//! Formatting utilities for terminal output

use crate::core::{EvaluationStatus, GameState};
use crate::engine::GameSnapshot;

/// On-screen keyboard layout
pub const KEYBOARD_ROWS: [&str; 3] = ["QWERTYUIOP", "ASDFGHJKL", "ZXCVBNM"];

/// Format an evaluated row as emoji squares
#[must_use]
pub fn row_to_emoji(row: &[EvaluationStatus]) -> String {
    row.iter().map(|status| status.to_emoji()).collect()
}

/// Spoiler-free summary of a game: a score header and one emoji line per guess
///
/// The score is the number of guesses on a win, `X` on a loss and `-` while
/// the game is still running.
#[must_use]
pub fn share_grid(state: &GameSnapshot) -> String {
    let score = match state.game_state() {
        GameState::Win => state.guesses_used().to_string(),
        GameState::Lose => "X".to_string(),
        GameState::InProgress => "-".to_string(),
    };

    let mut lines = vec![format!("Wordle {score}/{}", state.guess_limit())];
    lines.extend(
        state
            .evaluations()
            .iter()
            .take(state.guesses_used())
            .map(|row| row_to_emoji(row)),
    );
    lines.join("\n")
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = if max > 0.0 {
        ((value / max) * width as f64) as usize
    } else {
        0
    };
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}
