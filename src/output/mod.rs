//! Terminal output formatting
//!
//! Display utilities for the CLI and pretty-printing of boards.

pub mod display;
pub mod formatters;

pub use display::{
    print_board, print_evaluation_result, print_game_over, print_keyboard, print_row,
    print_statistics,
};
pub use formatters::{KEYBOARD_ROWS, row_to_emoji, share_grid};
