//! Guess evaluation against the answer
//!
//! Implements Wordle's feedback rules with multiset semantics for repeated
//! letters: exact matches claim their answer letter first, then misplaced
//! letters claim whatever is left, left to right.

use super::EvaluationStatus;
use rustc_hash::FxHashMap;

/// Evaluate `guess` against `answer`, one status per column
///
/// # Algorithm
/// 1. First pass: mark exact matches Correct and remove them from the pool
/// 2. Second pass: mark unmatched letters Present while the pool still holds one
/// 3. Everything left is Absent
///
/// Both slices must have the same length.
///
/// # Examples
/// ```
/// use wordle_engine::core::{EvaluationStatus::*, evaluate};
///
/// let guess: Vec<char> = "LLAMA".chars().collect();
/// let answer: Vec<char> = "ALLOW".chars().collect();
///
/// assert_eq!(
///     evaluate(&guess, &answer),
///     vec![Present, Correct, Present, Absent, Absent]
/// );
/// ```
#[must_use]
pub fn evaluate(guess: &[char], answer: &[char]) -> Vec<EvaluationStatus> {
    debug_assert_eq!(guess.len(), answer.len(), "guess and answer lengths differ");

    let mut result = vec![EvaluationStatus::Unknown; guess.len()];
    let mut pool = letter_counts(answer);

    // First pass: exact positions
    for ((status, &letter), &expected) in result.iter_mut().zip(guess).zip(answer) {
        if letter == expected {
            *status = EvaluationStatus::Correct;
            consume(&mut pool, letter);
        }
    }

    // Second pass: misplaced letters still available in the pool
    for (status, &letter) in result.iter_mut().zip(guess) {
        if *status == EvaluationStatus::Unknown && consume(&mut pool, letter) {
            *status = EvaluationStatus::Present;
        }
    }

    // Third pass: the rest
    for status in &mut result {
        if *status == EvaluationStatus::Unknown {
            *status = EvaluationStatus::Absent;
        }
    }

    result
}

/// True when every column is Correct
#[must_use]
pub fn is_solved(row: &[EvaluationStatus]) -> bool {
    !row.is_empty() && row.iter().all(|&s| s == EvaluationStatus::Correct)
}

fn letter_counts(word: &[char]) -> FxHashMap<char, usize> {
    let mut counts = FxHashMap::default();
    for &ch in word {
        *counts.entry(ch).or_insert(0) += 1;
    }
    counts
}

/// Take one occurrence of `letter` out of the pool, returning whether one was left
fn consume(pool: &mut FxHashMap<char, usize>, letter: char) -> bool {
    match pool.get_mut(&letter) {
        Some(count) if *count > 0 => {
            *count -= 1;
            true
        }
        _ => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use EvaluationStatus::{Absent, Correct, Present};

    fn eval(guess: &str, answer: &str) -> Vec<EvaluationStatus> {
        let guess: Vec<char> = guess.chars().collect();
        let answer: Vec<char> = answer.chars().collect();
        evaluate(&guess, &answer)
    }

    #[test]
    fn all_absent() {
        assert_eq!(eval("ABCDE", "FGHIJ"), vec![Absent; 5]);
    }

    #[test]
    fn all_correct() {
        let row = eval("CRANE", "CRANE");
        assert_eq!(row, vec![Correct; 5]);
        assert!(is_solved(&row));
    }

    #[test]
    fn duplicate_letters_pool_consumption() {
        // L at col 1 claims one L exactly, col 0 takes the other one,
        // the first A takes the only A, the second A finds the pool empty
        assert_eq!(
            eval("LLAMA", "ALLOW"),
            vec![Present, Correct, Present, Absent, Absent]
        );
    }

    #[test]
    fn exact_match_takes_priority_over_earlier_misplaced() {
        // ROBOT vs FLOOR: second O is exact, first O takes the remaining O
        assert_eq!(
            eval("ROBOT", "FLOOR"),
            vec![Present, Present, Absent, Correct, Absent]
        );
    }

    #[test]
    fn repeated_guess_letter_with_single_answer_occurrence() {
        // Only one E in the answer: the exact match wins, the others are absent
        assert_eq!(
            eval("EERIE", "CRANE"),
            vec![Absent, Absent, Present, Absent, Correct]
        );
    }

    #[test]
    fn repeated_letters_both_misplaced() {
        // SPEED vs ERASE: answer holds two E's, both guess E's are misplaced
        assert_eq!(
            eval("SPEED", "ERASE"),
            vec![Present, Absent, Present, Present, Absent]
        );
    }

    #[test]
    fn misplaced_consumed_left_to_right() {
        assert_eq!(eval("AAXXX", "YYYYA"), vec![Present, Absent, Absent, Absent, Absent]);
    }

    #[test]
    fn works_for_other_lengths() {
        assert_eq!(eval("AB", "BA"), vec![Present, Present]);
        assert_eq!(eval("ABCDEFG", "ABCDEFG"), vec![Correct; 7]);
    }

    #[test]
    fn is_solved_requires_all_correct() {
        assert!(!is_solved(&[Correct, Present]));
        assert!(!is_solved(&[]));
    }
}
