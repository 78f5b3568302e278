//! Simple interactive CLI mode
//!
//! Line-based play without the TUI: each line is typed into the engine
//! letter by letter and submitted with Enter.

use super::Statistics;
use crate::engine::{
    Dictionary, GameConfig, GameEvent, GuessEngine, Key, KeyOutcome, NoOp, WordSource,
};
use crate::output::{print_board, print_game_over, print_keyboard, print_row};
use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};

/// What the player asked for after a line of input
enum Turn {
    Continue,
    NewGame,
    Quit,
}

/// Run the simple interactive CLI mode
///
/// # Errors
///
/// Returns an error on I/O failure or if no answer can be picked for the
/// configured word length.
pub fn run_simple<D, S>(config: GameConfig, dictionary: &D, source: &mut S) -> Result<()>
where
    D: Dictionary + ?Sized,
    S: WordSource + ?Sized,
{
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                    Wordle - Simple Mode                      ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");
    println!(
        "Guess the {}-letter word in {} tries.",
        config.characters, config.guess_limit
    );
    println!("Commands: 'quit' to exit, 'new' for a new game\n");

    let mut stats = Statistics::default();

    loop {
        let mut engine = GuessEngine::from_source(config, source, dictionary)?;

        let finished = loop {
            let state = engine.state();
            let prompt = format!("Guess {}/{}", state.guess_number(), state.guess_limit());

            match play_line(&mut engine, &get_user_input(&prompt)?) {
                Turn::Continue if engine.state().is_over() => break true,
                Turn::Continue => {}
                Turn::NewGame => break false,
                Turn::Quit => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        };

        if finished {
            stats.record(engine.state());
            print_game_over(engine.state(), &stats);

            match get_user_input("Play again? (yes/no)")?
                .to_lowercase()
                .as_str()
            {
                "yes" | "y" => {}
                _ => {
                    println!("\n👋 Thanks for playing!\n");
                    return Ok(());
                }
            }
        }

        println!("\n🔄 New game started!\n");
    }
}

/// Feed one line of input into the engine and report the outcome
fn play_line<D: Dictionary + ?Sized>(engine: &mut GuessEngine<'_, D>, input: &str) -> Turn {
    match input.to_lowercase().as_str() {
        "quit" | "q" | "exit" => return Turn::Quit,
        "new" | "n" => return Turn::NewGame,
        _ => {}
    }

    let characters = engine.state().characters();
    if input.chars().count() > characters {
        println!("{}", format!("❌ Only {characters} letters allowed").red());
        return Turn::Continue;
    }

    for c in input.chars() {
        let Some(key) = Key::from_char(c) else {
            println!("{}", format!("❌ '{c}' is not a letter").red());
            clear_row(engine);
            return Turn::Continue;
        };
        engine.press(key);
    }

    match engine.press(Key::Enter) {
        KeyOutcome::Ignored(NoOp::RowIncomplete) => {
            println!("{}", "❌ Not enough letters".red());
            clear_row(engine);
        }
        KeyOutcome::Event(GameEvent::WordInvalid { word }) => {
            println!("{}", format!("❌ {word} is not in the word list").red());
            clear_row(engine);
        }
        KeyOutcome::Event(GameEvent::GuessSubmitted { row, .. }) => {
            let state = engine.state();
            if let (Some(letters), Some(statuses)) = (state.row(row), state.evaluation(row)) {
                print_row(letters, statuses);
            }
            println!();
            print_keyboard(state);
            println!();
        }
        KeyOutcome::Event(GameEvent::GameWon { .. } | GameEvent::GameLost { .. }) => {
            print_board(engine.state());
        }
        KeyOutcome::Ignored(_) | KeyOutcome::Updated => {}
    }

    Turn::Continue
}

/// Backspace until the active row is empty
fn clear_row<D: Dictionary + ?Sized>(engine: &mut GuessEngine<'_, D>) {
    while engine.press(Key::Backspace) == KeyOutcome::Updated {}
}

/// Get user input with a prompt
fn get_user_input(prompt: &str) -> Result<String> {
    print!("{prompt}: ");
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    Ok(input.trim().to_string())
}
