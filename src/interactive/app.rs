//! TUI application state and logic

use super::theme::Theme;
use crate::core::MAX_ATTEMPTS;
use crate::game::{GameState, SubmitError, SubmitOutcome};
use crate::keyboard::{AccentPopup, LongPress};
use crate::stats::{Stats, StatsStore, record_result};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::SeedableRng;
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;

/// Which screen has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppScreen {
    Home,
    Game,
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

/// Application state
pub struct App<'a> {
    pub dictionary: &'a Dictionary,
    store: &'a dyn StatsStore,
    rng: StdRng,
    pub screen: AppScreen,
    pub game: GameState,
    pub stats: Stats,
    pub messages: Vec<Message>,
    pub popup: Option<AccentPopup>,
    /// `Tab` was pressed; the next letter is a long press
    pub long_press_armed: bool,
    pub theme: Theme,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, store: &'a dyn StatsStore, theme: Theme) -> Self {
        Self::with_rng(dictionary, store, theme, StdRng::from_os_rng())
    }

    /// Build with a fixed random source
    #[must_use]
    pub fn with_rng(
        dictionary: &'a Dictionary,
        store: &'a dyn StatsStore,
        theme: Theme,
        mut rng: StdRng,
    ) -> Self {
        let game = GameState::new(dictionary.random_secret(&mut rng).clone());
        let mut app = Self {
            dictionary,
            store,
            rng,
            screen: AppScreen::Home,
            game,
            stats: Stats::default(),
            messages: Vec::new(),
            popup: None,
            long_press_armed: false,
            theme,
            should_quit: false,
        };
        app.go_home();
        app
    }

    /// Show the home screen and refresh the stats shown there
    pub fn go_home(&mut self) {
        self.screen = AppScreen::Home;
        self.popup = None;
        self.long_press_armed = false;
        match self.store.load() {
            Ok(stats) => self.stats = stats,
            Err(e) => {
                tracing::error!("Failed to load stats: {e}");
                self.add_message(
                    &format!("No se pudieron leer las estadísticas: {e}"),
                    MessageStyle::Error,
                );
            }
        }
    }

    /// Enter the game screen with a fresh secret
    pub fn start_game(&mut self) {
        let secret = self.dictionary.random_secret(&mut self.rng).clone();
        self.game.reset(secret);
        self.screen = AppScreen::Game;
        self.popup = None;
        self.long_press_armed = false;
        self.messages.clear();
        self.add_message(
            &format!("Adivina la palabra en {MAX_ATTEMPTS} intentos"),
            MessageStyle::Info,
        );
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

    /// Route one key press to the focused screen
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }
        if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
            self.should_quit = true;
            return;
        }

        match self.screen {
            AppScreen::Home => self.handle_home_key(key),
            AppScreen::Game if self.popup.is_some() => self.handle_popup_key(key),
            AppScreen::Game if self.game.is_over() => self.handle_game_over_key(key),
            AppScreen::Game => self.handle_game_key(key),
        }
    }

    fn handle_home_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Enter | KeyCode::Char('j' | 'J') => self.start_game(),
            KeyCode::Char('q' | 'Q') | KeyCode::Esc => self.should_quit = true,
            _ => {}
        }
    }

    fn handle_popup_key(&mut self, key: KeyEvent) {
        let Some(popup) = self.popup.as_ref() else {
            return;
        };
        let picked = match key.code {
            KeyCode::Enter => popup.select(1),
            KeyCode::Char(d) if d.is_ascii_digit() => d
                .to_digit(10)
                .and_then(|n| usize::try_from(n).ok())
                .and_then(|n| popup.select(n)),
            KeyCode::Esc => {
                self.popup = None;
                return;
            }
            _ => return,
        };

        if let Some(c) = picked {
            self.popup = None;
            self.type_letter(c);
        }
    }

    fn handle_game_over_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('n' | 'N') | KeyCode::Enter => self.start_game(),
            KeyCode::Esc => self.go_home(),
            _ => {}
        }
    }

    fn handle_game_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Esc => {
                if self.long_press_armed {
                    self.long_press_armed = false;
                } else {
                    self.go_home();
                }
            }
            KeyCode::Tab => self.long_press_armed = !self.long_press_armed,
            KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::ALT) => self.long_press(c),
            KeyCode::Char(c) if self.long_press_armed => {
                self.long_press_armed = false;
                self.long_press(c);
            }
            KeyCode::Char(c) => self.type_letter(c),
            KeyCode::Backspace => {
                self.game.pop_letter();
            }
            KeyCode::Enter => self.submit(),
            _ => {}
        }
    }

    fn long_press(&mut self, c: char) {
        match AccentPopup::long_press(c, self.game.disabled()) {
            LongPress::Ignored => self.add_message(
                &format!("La letra {} ya está descartada", c.to_uppercase()),
                MessageStyle::Error,
            ),
            LongPress::Typed(letter) => self.type_letter(letter),
            LongPress::Opened(popup) => self.popup = Some(popup),
        }
    }

    fn type_letter(&mut self, c: char) {
        if self.game.push_letter(c) {
            return;
        }
        if self.game.disabled().contains(c) {
            self.add_message(
                &format!("La letra {} ya está descartada", c.to_uppercase()),
                MessageStyle::Error,
            );
        }
    }

    fn submit(&mut self) {
        match self.game.submit(self.dictionary) {
            Ok(SubmitOutcome::Continue { .. }) => {}
            Ok(SubmitOutcome::Won { attempts }) => {
                let secret = self.game.secret().to_display();
                self.add_message(
                    &format!("¡Ganaste en {attempts}! La palabra era \"{secret}\""),
                    MessageStyle::Success,
                );
                self.finish_game(true);
            }
            Ok(SubmitOutcome::Lost { secret }) => {
                self.add_message(
                    &format!("Perdiste :( La palabra era \"{}\"", secret.to_display()),
                    MessageStyle::Error,
                );
                self.finish_game(false);
            }
            Err(SubmitError::Incomplete { .. }) => {
                self.add_message("La palabra debe tener 5 letras", MessageStyle::Error);
            }
            Err(SubmitError::NotInDictionary(word)) => {
                self.add_message(
                    &format!("\"{}\" no está en la lista de palabras", word.to_uppercase()),
                    MessageStyle::Error,
                );
            }
            Err(SubmitError::GameOver) => {}
        }
    }

    fn finish_game(&mut self, won: bool) {
        match record_result(self.store, won) {
            Ok(stats) => self.stats = stats,
            Err(e) => {
                tracing::error!("Failed to save stats: {e}");
                self.add_message(
                    &format!("No se pudieron guardar las estadísticas: {e}"),
                    MessageStyle::Error,
                );
            }
        }
        self.add_message("'n' para jugar de nuevo, Esc para volver", MessageStyle::Info);
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
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!("TUI stopped: {err}");
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            app.handle_key(key);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
