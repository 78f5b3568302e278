//! Interactive TUI interface
//!
//! Plays the game in the terminal with ratatui and crossterm.

mod app;
mod rendering;
pub mod toasts;

pub use app::{App, key_name, run_tui};
pub use toasts::{MessageStyle, Toast, Toasts};
