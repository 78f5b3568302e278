//! Display functions for command results

use super::formatters::{KEYBOARD_ROWS, create_progress_bar, row_to_emoji, share_grid};
use crate::commands::{EvaluationResult, Statistics};
use crate::core::{EvaluationStatus, GameState};
use crate::engine::GameSnapshot;
use colored::{ColoredString, Colorize};

/// A single letter tile coloured by its status
fn tile(letter: char, status: EvaluationStatus) -> ColoredString {
    let text = format!(" {letter} ");
    match status {
        EvaluationStatus::Correct => text.black().on_green().bold(),
        EvaluationStatus::Present => text.black().on_yellow().bold(),
        EvaluationStatus::Absent => text.white().on_bright_black(),
        EvaluationStatus::Unknown => text.bright_white(),
    }
}

/// Print one evaluated row as coloured tiles
pub fn print_row(letters: &[char], statuses: &[EvaluationStatus]) {
    let tiles: Vec<String> = letters
        .iter()
        .zip(statuses)
        .map(|(&letter, &status)| tile(letter, status).to_string())
        .collect();
    println!("  {}", tiles.join(" "));
}

/// Print every submitted row
pub fn print_board(state: &GameSnapshot) {
    for row in 0..state.guesses_used() {
        if let (Some(letters), Some(statuses)) = (state.row(row), state.evaluation(row)) {
            print_row(letters, statuses);
        }
    }
}

/// Print the keyboard coloured by letter hints
pub fn print_keyboard(state: &GameSnapshot) {
    for (indent, row) in KEYBOARD_ROWS.iter().enumerate() {
        let keys: Vec<String> = row
            .chars()
            .map(|letter| tile(letter, state.hint(letter)).to_string())
            .collect();
        println!("  {}{}", " ".repeat(indent * 2), keys.join(""));
    }
}

/// Print the result of the evaluate command
pub fn print_evaluation_result(result: &EvaluationResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Guess {} against {}",
        result.guess.bright_yellow().bold(),
        result.answer.bright_yellow().bold()
    );
    println!("{}", "─".repeat(40).cyan());

    let letters: Vec<char> = result.guess.chars().collect();
    print_row(&letters, &result.statuses);
    println!("  {}", row_to_emoji(&result.statuses));

    if result.is_solved() {
        println!("\n{}", "✅ Solved!".green().bold());
    }
}

/// Print the end-of-game banner, the share grid and the session statistics
pub fn print_game_over(state: &GameSnapshot, stats: &Statistics) {
    println!("\n{}", "═".repeat(50).bright_cyan());
    match state.game_state() {
        GameState::Win => {
            let guesses = state.guesses_used();
            println!(
                "{}",
                format!(
                    "🎉 Solved in {guesses} {}!",
                    if guesses == 1 { "guess" } else { "guesses" }
                )
                .bright_green()
                .bold()
            );
        }
        GameState::Lose => {
            println!(
                "{} {}",
                "❌ Out of guesses. The answer was".red().bold(),
                state.answer().bright_yellow().bold()
            );
        }
        GameState::InProgress => {}
    }
    println!("{}", "═".repeat(50).bright_cyan());

    println!("\n{}\n", share_grid(state));
    print_statistics(stats, state.guess_limit());
}

/// Print games played, win rate and the guess distribution
pub fn print_statistics(stats: &Statistics, guess_limit: usize) {
    println!("📊 {}", "Statistics:".bright_cyan().bold());
    println!("   Played:    {}", stats.total_games);
    println!("   Win rate:  {:.0}%", stats.win_rate());

    let max = stats.max_bucket() as f64;
    for guesses in 1..=guess_limit {
        let count = stats.wins_in(guesses);
        let bar = create_progress_bar(count as f64, max, 20);
        println!("   {guesses}: {} {count}", bar.green());
    }
    println!();
}
