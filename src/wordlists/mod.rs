//! Word lists for the game
//!
//! Embedded lists compiled into the binary, file loading, and the
//! dictionary / answer-picker implementations used by the engine.

mod dictionary;
mod embedded;
pub mod loader;
mod source;

pub use dictionary::WordList;
pub use embedded::{ALLOWED, ALLOWED_COUNT, ANSWERS, ANSWERS_COUNT};
pub use source::{FixedWordSource, RandomWordSource};
