//! Game-state engine
//!
//! [`GuessEngine`] tracks typed letters, checks full rows against a
//! [`Dictionary`], evaluates accepted guesses and derives win/loss. The
//! answer comes from a [`WordSource`] or is injected directly, so the engine
//! itself is deterministic.

mod collaborators;
mod config;
mod error;
mod events;
mod game;
mod key;
mod observer;
mod snapshot;

pub use collaborators::{Dictionary, WordSource};
pub use config::GameConfig;
pub use error::GameError;
pub use events::{GameEvent, KeyOutcome, NoOp};
pub use game::GuessEngine;
pub use key::Key;
pub use observer::Subscription;
pub use snapshot::{BLANK, GameSnapshot};
