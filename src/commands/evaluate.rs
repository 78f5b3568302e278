//! Evaluate a single guess against an answer
//!
//! Applies the scoring rules without a game or dictionary.

use crate::core::{EvaluationStatus, evaluate, is_solved};
use crate::wordlists::loader::normalize;
use anyhow::{Result, anyhow, bail};

/// Result of evaluating one guess
pub struct EvaluationResult {
    pub guess: String,
    pub answer: String,
    pub statuses: Vec<EvaluationStatus>,
}

impl EvaluationResult {
    #[must_use]
    pub fn is_solved(&self) -> bool {
        is_solved(&self.statuses)
    }
}

/// Score `guess` against `answer`
///
/// # Errors
///
/// Returns an error if either word contains anything but ASCII letters, or
/// if their lengths differ.
pub fn evaluate_words(guess: &str, answer: &str) -> Result<EvaluationResult> {
    let guess = normalize(guess).ok_or_else(|| anyhow!("Invalid guess: {guess:?}"))?;
    let answer = normalize(answer).ok_or_else(|| anyhow!("Invalid answer: {answer:?}"))?;

    if guess.len() != answer.len() {
        bail!(
            "Guess has {} letters but answer has {}",
            guess.len(),
            answer.len()
        );
    }

    let guess_chars: Vec<char> = guess.chars().collect();
    let answer_chars: Vec<char> = answer.chars().collect();
    let statuses = evaluate(&guess_chars, &answer_chars);

    Ok(EvaluationResult {
        guess,
        answer,
        statuses,
    })
}
