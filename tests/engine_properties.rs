//! Property-based tests for the guess engine.
//!
//! These tests use proptest to check the engine's invariants across
//! many randomly generated answers, guesses and key sequences.

use proptest::prelude::*;
use std::collections::HashMap;
use wordle_engine::core::{EvaluationStatus, GameState, evaluate};
use wordle_engine::engine::{Dictionary, GameError, GuessEngine, KeyOutcome, NoOp};
use wordle_engine::wordlists::WordList;

/// Accepts every word, so any typed row can be submitted
struct AcceptAll;

impl Dictionary for AcceptAll {
    fn contains(&self, _word: &str) -> bool {
        true
    }
}

fn type_word<D: Dictionary + ?Sized>(engine: &mut GuessEngine<'_, D>, word: &str) {
    for c in word.chars() {
        engine.handle_key(&c.to_string());
    }
}

fn submit<D: Dictionary + ?Sized>(engine: &mut GuessEngine<'_, D>, word: &str) -> KeyOutcome {
    type_word(engine, word);
    engine.handle_key("Enter")
}

prop_compose! {
    /// Small alphabet so repeated letters are common
    fn word()(w in "[A-E]{5}") -> String {
        w
    }
}

prop_compose! {
    fn key_name()(variant in 0..6u8, letter in "[a-zA-Z]") -> String {
        match variant {
            0 => "Backspace".to_string(),
            1 => "Enter".to_string(),
            2 => "Shift".to_string(),
            3 => "7".to_string(),
            _ => letter,
        }
    }
}

proptest! {
    #[test]
    fn construction_checks_answer_length(
        characters in 1usize..8,
        answer in "[a-z]{0,9}",
        guess_limit in 1usize..8,
    ) {
        let result = GuessEngine::new(guess_limit, characters, &answer, &AcceptAll);
        if answer.len() == characters {
            let engine = result.ok().unwrap();
            prop_assert_eq!(engine.state().answer().len(), characters);
        } else {
            let is_length_error =
                matches!(result.err(), Some(GameError::InvalidAnswerLength { .. }));
            prop_assert!(is_length_error);
        }
    }

    #[test]
    fn cursor_counts_typed_letters(answer in word(), typed in "[a-z]{0,5}") {
        let mut engine = GuessEngine::new(6, 5, &answer, &AcceptAll).unwrap();
        type_word(&mut engine, &typed);

        prop_assert_eq!(engine.state().current_char_index(), typed.len());
        let row = engine.state().row_text(0).unwrap();
        prop_assert_eq!(row.trim_end(), typed.to_ascii_uppercase());
    }

    #[test]
    fn backspace_inverts_letter(answer in word(), prefix in "[a-z]{0,4}", letter in "[a-z]") {
        let mut engine = GuessEngine::new(6, 5, &answer, &AcceptAll).unwrap();
        type_word(&mut engine, &prefix);
        let before = engine.snapshot();

        prop_assert_eq!(engine.handle_key(&letter), KeyOutcome::Updated);
        prop_assert_eq!(engine.handle_key("Backspace"), KeyOutcome::Updated);
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn rejected_words_change_nothing(answer in word(), guess in word()) {
        let empty = WordList::default();
        let mut engine = GuessEngine::new(6, 5, &answer, &empty).unwrap();
        type_word(&mut engine, &guess);
        let before = engine.snapshot();

        let outcome = engine.handle_key("Enter");
        prop_assert!(!outcome.changed_state());
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn guessing_answer_wins(answer in word(), misses in prop::collection::vec(word(), 0..5)) {
        let mut engine = GuessEngine::new(6, 5, &answer, &AcceptAll).unwrap();
        for miss in misses.iter().filter(|m| **m != answer) {
            submit(&mut engine, miss);
        }

        let row = engine.state().current_guess_index();
        submit(&mut engine, &answer);

        let state = engine.state();
        prop_assert_eq!(state.game_state(), GameState::Win);
        prop_assert!(state.evaluation(row).unwrap().iter().all(|&s| s == EvaluationStatus::Correct));
    }

    #[test]
    fn lose_exactly_on_last_row(answer in word(), guess_limit in 1usize..7) {
        let mut engine = GuessEngine::new(guess_limit, 5, &answer, &AcceptAll).unwrap();
        let miss = if answer == "EEEEE" { "AAAAA" } else { "EEEEE" };

        for row in 0..guess_limit {
            prop_assert_eq!(engine.state().game_state(), GameState::InProgress);
            submit(&mut engine, miss);
            let expected = if row + 1 == guess_limit { GameState::Lose } else { GameState::InProgress };
            prop_assert_eq!(engine.state().game_state(), expected);
        }
    }

    #[test]
    fn hints_never_downgrade(answer in word(), guesses in prop::collection::vec(word(), 1..6)) {
        let mut engine = GuessEngine::new(6, 5, &answer, &AcceptAll).unwrap();
        let mut previous: HashMap<char, EvaluationStatus> = HashMap::new();

        for guess in &guesses {
            submit(&mut engine, guess);
            for (letter, status) in engine.state().letter_hints().sorted() {
                let before = previous.get(&letter).copied().unwrap_or_default();
                prop_assert!(status >= before, "{} went from {} to {}", letter, before, status);
                previous.insert(letter, status);
            }
        }
    }

    #[test]
    fn evaluation_respects_letter_counts(answer in word(), guess in word()) {
        let guess_chars: Vec<char> = guess.chars().collect();
        let answer_chars: Vec<char> = answer.chars().collect();
        let row = evaluate(&guess_chars, &answer_chars);

        for (i, &status) in row.iter().enumerate() {
            prop_assert_eq!(status == EvaluationStatus::Correct, guess_chars[i] == answer_chars[i]);
        }

        for letter in guess_chars.iter().copied() {
            let matched = guess_chars
                .iter()
                .zip(&row)
                .filter(|&(&c, &s)| c == letter && s != EvaluationStatus::Absent)
                .count();
            let in_answer = answer_chars.iter().filter(|&&c| c == letter).count();
            let in_guess = guess_chars.iter().filter(|&&c| c == letter).count();
            prop_assert_eq!(matched, in_answer.min(in_guess));
        }
    }

    #[test]
    fn keys_after_game_over_are_ignored(answer in word(), keys in prop::collection::vec(key_name(), 0..20)) {
        let mut engine = GuessEngine::new(6, 5, &answer, &AcceptAll).unwrap();
        submit(&mut engine, &answer);
        let before = engine.snapshot();

        for key in &keys {
            let outcome = engine.handle_key(key);
            prop_assert!(matches!(
                outcome,
                KeyOutcome::Ignored(NoOp::GameOver | NoOp::UnsupportedKey)
            ));
        }
        prop_assert_eq!(engine.snapshot(), before);
    }

    #[test]
    fn invariants_hold_for_any_key_sequence(answer in word(), keys in prop::collection::vec(key_name(), 0..60)) {
        let mut engine = GuessEngine::new(4, 5, &answer, &AcceptAll).unwrap();

        for key in &keys {
            let before = engine.snapshot();
            let outcome = engine.handle_key(key);
            let state = engine.state();

            prop_assert!(state.current_char_index() <= state.characters());
            prop_assert!(state.current_guess_index() <= state.guess_limit());
            if !outcome.changed_state() {
                prop_assert_eq!(state, &before);
            }

            for (row, statuses) in state.evaluations().iter().enumerate() {
                let submitted = row < state.guesses_used();
                prop_assert!(statuses.iter().all(|s| s.is_known() == submitted));
            }
            for row in state.guesses_used() + 1..state.guess_limit() {
                prop_assert!(state.row(row).unwrap().iter().all(|&c| c == ' '));
            }
        }
    }
}
