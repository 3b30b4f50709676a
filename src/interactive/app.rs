//! TUI application state and logic

use crate::engine::{GameConfig, GameState, GuessOutcome, JumbleEngine};
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEvent, KeyEventKind,
        KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Application state
pub struct App {
    pub engine: JumbleEngine,
    pub config: GameConfig,
    pub game: GameState,
    /// Letters as currently displayed; reshuffled on request
    pub tiles: String,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    Guessing,
    Finished,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Statistics {
    pub games_played: usize,
    pub games_completed: usize,
    pub words_found: usize,
}

impl App {
    /// Start the first game
    ///
    /// # Errors
    ///
    /// Returns an error if no game can be built from `config`.
    pub fn new(engine: JumbleEngine, config: GameConfig) -> Result<Self> {
        let game = engine.new_game(&config)?;
        Ok(Self::with_game(engine, config, game))
    }

    /// Start from an already built game
    #[must_use]
    pub fn with_game(engine: JumbleEngine, config: GameConfig, game: GameState) -> Self {
        let tiles = game.scrambled().to_string();

        let mut app = Self {
            engine,
            config,
            game,
            tiles,
            input_buffer: String::new(),
            messages: Vec::new(),
            stats: Statistics {
                games_played: 1,
                ..Statistics::default()
            },
            should_quit: false,
            input_mode: InputMode::Guessing,
        };
        app.add_message(
            "Welcome! Type words made from the letters and press Enter.",
            MessageStyle::Info,
        );
        app.announce_size();
        app
    }

    pub fn submit_guess(&mut self) {
        let guess = std::mem::take(&mut self.input_buffer);
        if guess.trim().is_empty() {
            return;
        }

        match self.game.guess(&guess) {
            GuessOutcome::Found => {
                self.stats.words_found += 1;
                self.add_message(
                    &format!(
                        "✓ {} ({}/{})",
                        guess.trim().to_uppercase(),
                        self.game.found_count(),
                        self.game.total_count()
                    ),
                    MessageStyle::Success,
                );
                if self.game.is_complete() {
                    self.stats.games_completed += 1;
                    self.finish("🎉 PUZZLE SOLVED! Every word found! 🎉");
                }
            }
            GuessOutcome::AlreadyFound => {
                self.add_message(
                    &format!("{} already found", guess.trim().to_uppercase()),
                    MessageStyle::Info,
                );
            }
            GuessOutcome::NotASubWord => {
                self.add_message(
                    &format!("{} is not in this puzzle", guess.trim().to_uppercase()),
                    MessageStyle::Error,
                );
            }
        }
    }

    pub fn show_hint(&mut self) {
        match self.game.hint() {
            Some(hint) => self.add_message(
                &format!(
                    "💡 {}-letter word starting with '{}'",
                    hint.length,
                    hint.first_letter.to_ascii_uppercase()
                ),
                MessageStyle::Info,
            ),
            None => self.add_message("Nothing left to find!", MessageStyle::Info),
        }
    }

    pub fn shuffle_tiles(&mut self) {
        self.tiles = self.engine.reshuffle(&self.tiles, self.game.original());
    }

    pub fn reveal(&mut self) {
        self.game.reveal_all();
        let text = format!(
            "Revealed! The word was {}",
            self.game.original().to_uppercase()
        );
        self.finish(&text);
    }

    pub fn new_game(&mut self) {
        match self.engine.new_game(&self.config) {
            Ok(game) => {
                self.tiles = game.scrambled().to_string();
                self.game = game;
                self.stats.games_played += 1;
                self.input_buffer.clear();
                self.messages.clear();
                self.input_mode = InputMode::Guessing;
                self.add_message("New game started!", MessageStyle::Info);
                self.announce_size();
            }
            Err(err) => self.add_message(&err.to_string(), MessageStyle::Error),
        }
    }

    /// Apply one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.input_mode {
            InputMode::Finished => match key.code {
                KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
                KeyCode::Char('n') => self.new_game(),
                _ => {}
            },
            InputMode::Guessing => match key.code {
                KeyCode::Esc => self.should_quit = true,
                KeyCode::Tab => self.show_hint(),
                KeyCode::F(2) => self.new_game(),
                KeyCode::F(5) => self.reveal(),
                KeyCode::Char(' ') => self.shuffle_tiles(),
                KeyCode::Char(c) if c.is_alphabetic() => {
                    self.input_buffer.push(c.to_ascii_lowercase());
                }
                KeyCode::Backspace => {
                    self.input_buffer.pop();
                }
                KeyCode::Enter => self.submit_guess(),
                _ => {}
            },
        }
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 5 messages
        if self.messages.len() > 5 {
            self.messages.remove(0);
        }
    }

    /// Post the puzzle size, or end at once when nothing hides in the letters
    fn announce_size(&mut self) {
        if self.game.is_empty() {
            let text = format!(
                "No words hide in these letters. The word was {}",
                self.game.original().to_uppercase()
            );
            self.finish(&text);
            return;
        }

        let total = self.game.total_count();
        self.add_message(
            &format!("{total} words to find. Tab: hint | Space: shuffle"),
            MessageStyle::Info,
        );
    }

    fn finish(&mut self, text: &str) {
        self.input_mode = InputMode::Finished;
        self.input_buffer.clear();
        self.add_message(text, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
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

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dictionary::Dictionary;

    fn app() -> App {
        let dictionary =
            Dictionary::from_words(["yellow", "yell", "low", "owl", "cat"], "test").unwrap();
        App::new(JumbleEngine::seeded(dictionary, 3), GameConfig::new(6)).unwrap()
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_word(app: &mut App, word: &str) {
        for c in word.chars() {
            press(app, KeyCode::Char(c));
        }
        press(app, KeyCode::Enter);
    }

    #[test]
    fn starts_with_a_fresh_game() {
        let app = app();
        assert_eq!(app.game.original(), "yellow");
        assert_eq!(app.tiles, app.game.scrambled());
        assert_eq!(app.stats.games_played, 1);
        assert_eq!(app.input_mode, InputMode::Guessing);
    }

    #[test]
    fn typed_guesses_are_scored() {
        let mut app = app();
        type_word(&mut app, "OWL");
        assert_eq!(app.stats.words_found, 1);
        assert!(app.input_buffer.is_empty());

        type_word(&mut app, "owl");
        assert_eq!(app.stats.words_found, 1);
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Info);

        type_word(&mut app, "cat");
        assert_eq!(app.messages.last().unwrap().style, MessageStyle::Error);
    }

    #[test]
    fn finding_everything_completes_the_game() {
        let mut app = app();
        for word in ["low", "owl", "yell"] {
            type_word(&mut app, word);
        }
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.games_completed, 1);

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.input_mode, InputMode::Guessing);
        assert_eq!(app.stats.games_played, 2);
        assert_eq!(app.game.found_count(), 0);
    }

    #[test]
    fn reveal_ends_without_completion() {
        let mut app = app();
        press(&mut app, KeyCode::F(5));
        assert_eq!(app.input_mode, InputMode::Finished);
        assert!(app.game.is_complete());
        assert_eq!(app.stats.games_completed, 0);

        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);
    }

    #[test]
    fn shuffle_keeps_the_letters() {
        let mut app = app();
        press(&mut app, KeyCode::Char(' '));

        let mut tiles: Vec<char> = app.tiles.chars().collect();
        tiles.sort_unstable();
        assert_eq!(tiles, vec!['e', 'l', 'l', 'o', 'w', 'y']);
        assert!(app.input_buffer.is_empty());
    }

    #[test]
    fn shuffles_never_show_the_word() {
        let mut app = app();
        for _ in 0..30 {
            let before = app.tiles.clone();
            press(&mut app, KeyCode::Char(' '));
            assert_ne!(app.tiles, before);
            assert_ne!(app.tiles, "yellow");
        }
    }

    #[test]
    fn empty_puzzle_finishes_at_once() {
        let dictionary = Dictionary::from_words(["abcdef", "cat"], "test").unwrap();
        let engine = JumbleEngine::seeded(dictionary, 3);
        let game = GameState::new("abcdef", "fedcba", []);

        let mut app = App::with_game(engine, GameConfig::new(6), game);
        assert_eq!(app.input_mode, InputMode::Finished);
        assert_eq!(app.stats.games_completed, 0);
        assert!(app.messages.iter().any(|m| m.text.contains("ABCDEF")));

        press(&mut app, KeyCode::Char('b'));
        assert!(app.input_buffer.is_empty());

        press(&mut app, KeyCode::Char('n'));
        assert_eq!(app.stats.games_played, 2);
        assert!(app.game.is_empty());
        assert_eq!(app.input_mode, InputMode::Finished);
    }

    #[test]
    fn messages_are_capped() {
        let mut app = app();
        for _ in 0..10 {
            press(&mut app, KeyCode::Tab);
        }
        assert_eq!(app.messages.len(), 5);
    }

    #[test]
    fn ctrl_c_quits_in_any_mode() {
        let mut app = app();
        app.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(app.should_quit);
    }
}
