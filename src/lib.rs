//! Wordle Engine
//!
//! Game-state engine for a Wordle-style puzzle: typed input, dictionary
//! checks, duplicate-aware guess evaluation, keyboard hints and the
//! win/loss state machine, with terminal front-ends on top.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_engine::core::EvaluationStatus;
//! use wordle_engine::engine::GuessEngine;
//! use wordle_engine::wordlists::WordList;
//!
//! let dictionary = WordList::allowed();
//! let mut engine = GuessEngine::new(6, 5, "allow", &dictionary).unwrap();
//!
//! for key in ["c", "r", "a", "n", "e", "Enter"] {
//!     engine.handle_key(key);
//! }
//!
//! assert_eq!(engine.state().hint('A'), EvaluationStatus::Present);
//! ```

// Core domain types
pub mod core;

// Game-state engine
pub mod engine;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
