//! Wordle - CLI
//!
//! Play Wordle in a TUI or a simple line-based mode, or score a single guess.

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use wordle_engine::{
    commands::{evaluate_words, run_simple},
    engine::{GameConfig, WordSource},
    output::print_evaluation_result,
    wordlists::{FixedWordSource, RandomWordSource, WordList, loader::load_from_file},
};

#[derive(Parser)]
#[command(
    name = "wordle_engine",
    about = "Guess the hidden word, Wordle style",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Number of guesses allowed per game
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_GUESSES)]
    guesses: usize,

    /// Letters per word
    #[arg(short, long, global = true, default_value_t = GameConfig::DEFAULT_CHARACTERS)]
    length: usize,

    /// Wordlist: 'all' (default), 'answers' (guess only from answers), or path to file
    #[arg(short = 'w', long, global = true, default_value = "all")]
    wordlist: String,

    /// Play with this answer instead of a random one
    #[arg(short, long, global = true)]
    answer: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default)
    Play,

    /// Simple CLI mode (line-based, no TUI)
    Simple,

    /// Score a guess against an answer
    Evaluate {
        /// The guessed word
        guess: String,

        /// The answer to score against
        answer: String,
    },
}

/// Load wordlists based on the -w flag
///
/// Returns (`dictionary`, `answers`)
/// - "all": every allowed word is guessable, answers come from the answer list
/// - "answers": only answer words are guessable
/// - "<path>": the file serves as both dictionary and answer list
fn load_wordlists(wordlist_mode: &str) -> Result<(WordList, WordList)> {
    match wordlist_mode {
        "all" => Ok((WordList::allowed(), WordList::answers())),
        "answers" => {
            let answers = WordList::answers();
            Ok((answers.clone(), answers))
        }
        path => {
            let words = load_from_file(path)
                .with_context(|| format!("Failed to load word list from {path}"))?;
            let list = WordList::new(words);
            Ok((list.clone(), list))
        }
    }
}

/// Dictionary plus answer source for new games
///
/// A forced answer is always added to the dictionary so it can be guessed.
fn setup_game(
    wordlist_mode: &str,
    answer: Option<&str>,
    config: GameConfig,
) -> Result<(WordList, Box<dyn WordSource>)> {
    let (mut dictionary, answers) = load_wordlists(wordlist_mode)?;

    let source: Box<dyn WordSource> = if let Some(answer) = answer {
        dictionary.extend([answer]);
        Box::new(FixedWordSource::new(answer))
    } else {
        let random = RandomWordSource::new(&answers, config.characters);
        if random.is_empty() {
            bail!(
                "No {}-letter answers in word list '{wordlist_mode}'",
                config.characters
            );
        }
        Box::new(random)
    };

    Ok((dictionary, source))
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::new(cli.guesses, cli.length);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => {
            let (dictionary, source) = setup_game(&cli.wordlist, cli.answer.as_deref(), config)?;
            run_play_command(config, &dictionary, source)
        }
        Commands::Simple => {
            let (dictionary, source) = setup_game(&cli.wordlist, cli.answer.as_deref(), config)?;
            run_simple_command(config, &dictionary, source)
        }
        Commands::Evaluate { guess, answer } => run_evaluate_command(&guess, &answer),
    }
}

fn run_play_command(
    config: GameConfig,
    dictionary: &WordList,
    source: Box<dyn WordSource>,
) -> Result<()> {
    use wordle_engine::interactive::{App, run_tui};

    let app = App::new(config, dictionary, source)?;
    run_tui(app)
}

fn run_simple_command(
    config: GameConfig,
    dictionary: &WordList,
    mut source: Box<dyn WordSource>,
) -> Result<()> {
    run_simple(config, dictionary, source.as_mut())
}

fn run_evaluate_command(guess: &str, answer: &str) -> Result<()> {
    let result = evaluate_words(guess, answer)?;
    print_evaluation_result(&result);
    Ok(())
}
