//! TUI application state and logic

use super::toasts::{DEFAULT_DURATION, MessageStyle, Toasts};
use crate::commands::Statistics;
use crate::engine::{
    GameConfig, GameError, GameEvent, GuessEngine, KeyOutcome, NoOp, WordSource,
};
use crate::wordlists::WordList;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::cell::Cell;
use std::io;
use std::rc::Rc;
use std::time::{Duration, Instant};

/// Longest wait for input before checking toast expiry
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Application state
pub struct App<'a> {
    pub engine: GuessEngine<'a, WordList>,
    pub config: GameConfig,
    pub toasts: Toasts,
    pub stats: Statistics,
    pub should_quit: bool,
    dictionary: &'a WordList,
    source: Box<dyn WordSource + 'a>,
    /// Set by the engine subscription and by toast changes
    dirty: Rc<Cell<bool>>,
}

impl<'a> App<'a> {
    /// Create the app and start the first game
    ///
    /// # Errors
    ///
    /// Returns `GameError` if `source` cannot supply an answer of the
    /// configured length.
    pub fn new(
        config: GameConfig,
        dictionary: &'a WordList,
        mut source: Box<dyn WordSource + 'a>,
    ) -> Result<Self, GameError> {
        let engine = GuessEngine::from_source(config, source.as_mut(), dictionary)?;

        let mut app = Self {
            engine,
            config,
            toasts: Toasts::default(),
            stats: Statistics::default(),
            should_quit: false,
            dictionary,
            source,
            dirty: Rc::new(Cell::new(true)),
        };
        app.watch_engine();
        app.toast(
            "Type a word and press Enter",
            MessageStyle::Info,
            Some(Duration::from_secs(3)),
        );
        Ok(app)
    }

    fn watch_engine(&mut self) {
        let dirty = Rc::clone(&self.dirty);
        self.engine.subscribe(move |_| dirty.set(true));
    }

    /// Replace the engine with a fresh game
    ///
    /// # Errors
    ///
    /// Returns `GameError` if no new answer can be picked.
    pub fn new_game(&mut self) -> Result<(), GameError> {
        self.engine = GuessEngine::from_source(self.config, self.source.as_mut(), self.dictionary)?;
        self.watch_engine();
        self.toasts.clear();
        self.toast("New game started!", MessageStyle::Info, Some(DEFAULT_DURATION));
        Ok(())
    }

    /// Forward a key name to the engine and react to the outcome
    pub fn handle_key(&mut self, name: &str) {
        let outcome = self.engine.handle_key(name);
        self.report(outcome);
    }

    fn report(&mut self, outcome: KeyOutcome) {
        if outcome.event().is_some_and(GameEvent::ends_game) {
            self.stats.record(self.engine.state());
        }

        match outcome {
            KeyOutcome::Ignored(NoOp::RowIncomplete) => {
                self.toast("Not enough letters", MessageStyle::Error, Some(DEFAULT_DURATION));
            }
            KeyOutcome::Event(GameEvent::WordInvalid { .. }) => {
                self.toast("Not in word list", MessageStyle::Error, Some(DEFAULT_DURATION));
            }
            KeyOutcome::Event(GameEvent::GameWon { guesses, .. }) => {
                let celebration = match guesses {
                    1 => "🎯 Genius!",
                    2 => "🔥 Magnificent!",
                    3 => "✨ Impressive!",
                    4 => "👏 Splendid!",
                    5 => "🎉 Great!",
                    _ => "😅 Phew!",
                };
                self.toast(celebration, MessageStyle::Success, None);
                self.toast("Tab: new game | Esc: quit", MessageStyle::Info, None);
            }
            KeyOutcome::Event(GameEvent::GameLost { answer }) => {
                self.toast(format!("The word was {answer}"), MessageStyle::Error, None);
                self.toast("Tab: new game | Esc: quit", MessageStyle::Info, None);
            }
            KeyOutcome::Ignored(_)
            | KeyOutcome::Updated
            | KeyOutcome::Event(GameEvent::GuessSubmitted { .. }) => {}
        }
    }

    /// Handle a terminal key press
    ///
    /// # Errors
    ///
    /// Returns an error if a new game cannot be started.
    pub fn handle_key_event(&mut self, code: KeyCode, modifiers: KeyModifiers) -> Result<()> {
        match code {
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Esc => {
                self.should_quit = true;
            }
            KeyCode::Tab => {
                if self.engine.state().is_over() {
                    self.new_game()?;
                } else {
                    self.toast(
                        "Finish this game first",
                        MessageStyle::Info,
                        Some(DEFAULT_DURATION),
                    );
                }
            }
            code => {
                if let Some(name) = key_name(code) {
                    self.handle_key(&name);
                }
            }
        }
        Ok(())
    }

    fn toast(&mut self, text: impl Into<String>, style: MessageStyle, duration: Option<Duration>) {
        self.toasts.show_message(text, style, duration);
        self.dirty.set(true);
    }

    /// Expire toasts
    pub fn tick(&mut self, now: Instant) {
        if self.toasts.prune(now) {
            self.dirty.set(true);
        }
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Whether a redraw is due, clearing the flag
    pub fn take_redraw(&self) -> bool {
        self.dirty.replace(false)
    }
}

/// Engine key name for a terminal key code
#[must_use]
pub fn key_name(code: KeyCode) -> Option<String> {
    match code {
        KeyCode::Char(c) => Some(c.to_string()),
        KeyCode::Backspace => Some("Backspace".to_string()),
        KeyCode::Enter => Some("Enter".to_string()),
        _ => None,
    }
}

/// Run the TUI application
///
/// # Errors
///
/// Returns an error if terminal setup/cleanup fails or if there's an I/O error
/// during rendering or event handling.
pub fn run_tui(app: App) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        if app.take_redraw() {
            terminal.draw(|f| super::rendering::ui(f, &app))?;
        }

        let timeout = app
            .toasts
            .next_expiry()
            .map_or(IDLE_POLL, |deadline| {
                deadline.saturating_duration_since(Instant::now())
            })
            .min(IDLE_POLL);

        if event::poll(timeout)? {
            match event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    app.handle_key_event(key.code, key.modifiers)?;
                }
                Event::Resize(..) => app.mark_dirty(),
                _ => {}
            }
        }

        app.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GameState;
    use crate::wordlists::FixedWordSource;

    fn app(dict: &WordList) -> App<'_> {
        App::new(
            GameConfig::new(2, 5),
            dict,
            Box::new(FixedWordSource::new("allow")),
        )
        .unwrap()
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            app.handle_key_event(KeyCode::Char(c), KeyModifiers::NONE)
                .unwrap();
        }
        app.handle_key_event(KeyCode::Enter, KeyModifiers::NONE)
            .unwrap();
    }

    fn toast_texts(app: &App) -> Vec<String> {
        app.toasts.iter().map(|t| t.text.clone()).collect()
    }

    #[test]
    fn key_names() {
        assert_eq!(key_name(KeyCode::Char('a')).as_deref(), Some("a"));
        assert_eq!(key_name(KeyCode::Backspace).as_deref(), Some("Backspace"));
        assert_eq!(key_name(KeyCode::Enter).as_deref(), Some("Enter"));
        assert_eq!(key_name(KeyCode::Left), None);
    }

    #[test]
    fn invalid_word_shows_toast() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = app(&dict);
        app.toasts.clear();

        type_word(&mut app, "zzzzz");
        assert_eq!(toast_texts(&app), vec!["Not in word list"]);
        assert_eq!(app.engine.state().current_guess_index(), 0);
    }

    #[test]
    fn short_word_shows_toast() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = app(&dict);
        app.toasts.clear();

        type_word(&mut app, "cra");
        assert_eq!(toast_texts(&app), vec!["Not enough letters"]);
    }

    #[test]
    fn engine_changes_request_redraw() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = app(&dict);
        assert!(app.take_redraw());
        assert!(!app.take_redraw());

        app.handle_key("c");
        assert!(app.take_redraw());

        // Unsupported keys change nothing
        app.handle_key("1");
        assert!(!app.take_redraw());
    }

    #[test]
    fn loss_reveals_answer_and_records_stats() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = app(&dict);

        type_word(&mut app, "crane");
        type_word(&mut app, "crane");

        assert_eq!(app.engine.state().game_state(), GameState::Lose);
        assert!(toast_texts(&app).contains(&"The word was ALLOW".to_string()));
        assert_eq!(app.stats.total_games, 1);
        assert_eq!(app.stats.games_won, 0);
    }

    #[test]
    fn new_game_after_win() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = app(&dict);

        type_word(&mut app, "allow");
        assert_eq!(app.engine.state().game_state(), GameState::Win);
        assert_eq!(app.stats.wins_in(1), 1);

        app.handle_key_event(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.engine.state().game_state(), GameState::InProgress);
        assert_eq!(app.engine.subscriber_count(), 1);

        app.take_redraw();
        app.handle_key("a");
        assert!(app.take_redraw());
    }

    #[test]
    fn tab_ignored_mid_game() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = app(&dict);
        type_word(&mut app, "crane");

        app.handle_key_event(KeyCode::Tab, KeyModifiers::NONE)
            .unwrap();
        assert_eq!(app.engine.state().current_guess_index(), 1);
    }

    /// Hands out one answer, then runs dry
    struct OneShot(Option<String>);

    impl WordSource for OneShot {
        fn pick_answer(&mut self) -> Option<String> {
            self.0.take()
        }
    }

    #[test]
    fn new_game_failure_is_reported() {
        let dict = WordList::new(["crane", "allow"]);
        let mut app = App::new(
            GameConfig::new(1, 5),
            &dict,
            Box::new(OneShot(Some("allow".to_string()))),
        )
        .unwrap();

        type_word(&mut app, "crane");
        assert!(app.engine.state().is_over());

        let result = app.handle_key_event(KeyCode::Tab, KeyModifiers::NONE);
        assert!(result.is_err());
    }

    #[test]
    fn escape_quits() {
        let dict = WordList::new(["allow"]);
        let mut app = app(&dict);
        app.handle_key_event(KeyCode::Esc, KeyModifiers::NONE)
            .unwrap();
        assert!(app.should_quit);
    }
}
