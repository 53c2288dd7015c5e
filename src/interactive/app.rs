//! TUI application state and logic

use crate::core::{Code, Color};
use crate::game::{GameConfig, GameState, Outcome, Statistics};
use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use rand::rngs::StdRng;
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use tracing::debug;

/// Application state
pub struct App {
    pub config: GameConfig,
    pub game: GameState,
    /// Pegs placed on the active row; `None` marks an empty hole
    pub draft: Vec<Option<Color>>,
    pub cursor: usize,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    rng: StdRng,
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

impl App {
    #[must_use]
    pub fn new(config: GameConfig, mut rng: StdRng) -> Self {
        let game = GameState::new(config.clone(), &mut rng);
        let draft = vec![None; config.code_length()];

        Self {
            config,
            game,
            draft,
            cursor: 0,
            messages: vec![
                Message {
                    text: "Welcome! Crack the hidden code.".to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Place pegs with color keys or ↑/↓, then press Enter.".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            rng,
        }
    }

    /// Handle one key press
    pub fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        if let KeyCode::Char('c') = code
            && modifiers.contains(KeyModifiers::CONTROL)
        {
            self.should_quit = true;
            return;
        }

        match code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('n') => self.new_game(),
            _ if self.game.outcome().is_terminal() => {
                // Only new game and quit once the game has ended
            }
            KeyCode::Left => self.cursor = self.cursor.saturating_sub(1),
            KeyCode::Right => self.cursor = (self.cursor + 1).min(self.draft.len() - 1),
            KeyCode::Up => self.cycle_color(true),
            KeyCode::Down => self.cycle_color(false),
            KeyCode::Backspace | KeyCode::Delete => self.clear_peg(),
            KeyCode::Enter => self.submit(),
            KeyCode::Char(ch) => {
                let picked = ch
                    .to_digit(10)
                    .and_then(|d| (d as usize).checked_sub(1))
                    .and_then(|i| self.config.palette().colors().get(i).copied())
                    .or_else(|| Color::from_initial(ch).filter(|&c| self.config.palette().contains(c)));

                if let Some(color) = picked {
                    self.place(color);
                }
            }
            _ => {}
        }
    }

    /// Put `color` in the hole under the cursor and step right
    pub fn place(&mut self, color: Color) {
        self.draft[self.cursor] = Some(color);
        if self.cursor + 1 < self.draft.len() {
            self.cursor += 1;
        }
    }

    fn cycle_color(&mut self, forward: bool) {
        let colors = self.config.palette().colors();
        let next = match self.draft[self.cursor].and_then(|c| self.config.palette().index_of(c)) {
            None if forward => 0,
            None => colors.len() - 1,
            Some(i) if forward => (i + 1) % colors.len(),
            Some(i) => (i + colors.len() - 1) % colors.len(),
        };
        self.draft[self.cursor] = Some(colors[next]);
    }

    fn clear_peg(&mut self) {
        if self.draft[self.cursor].is_none() {
            self.cursor = self.cursor.saturating_sub(1);
        }
        self.draft[self.cursor] = None;
    }

    /// The active row as a code, once every hole is filled
    #[must_use]
    pub fn draft_code(&self) -> Option<Code> {
        self.draft
            .iter()
            .copied()
            .collect::<Option<Vec<Color>>>()
            .map(Code::from)
    }

    pub fn submit(&mut self) {
        let Some(guess) = self.draft_code() else {
            self.add_message("Fill every hole before checking.", MessageStyle::Error);
            return;
        };

        match self.game.submit_guess(guess) {
            Ok(next) => {
                self.game = next;
                self.draft = vec![None; self.config.code_length()];
                self.cursor = 0;

                match self.game.outcome() {
                    Outcome::Won => {
                        self.stats.record(&self.game);
                        let message = match self.game.attempts().len() {
                            1 => "Cracked it on the first try!".to_string(),
                            n => format!("Congratulations! You cracked the code in {n} attempts!"),
                        };
                        self.add_message(&message, MessageStyle::Success);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::Lost => {
                        self.stats.record(&self.game);
                        self.add_message("Game over! You failed to crack the code.", MessageStyle::Error);
                        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
                    }
                    Outcome::InProgress => {
                        let remaining = self.game.remaining_attempts();
                        self.add_message(
                            &format!("{remaining} attempts remaining"),
                            MessageStyle::Info,
                        );
                    }
                }
            }
            Err(e) => {
                debug!(error = %e, "guess rejected");
                self.add_message(&e.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn new_game(&mut self) {
        self.game = GameState::new(self.config.clone(), &mut self.rng);
        self.draft = vec![None; self.config.code_length()];
        self.cursor = 0;
        self.messages.clear();
        self.add_message("New game started!", MessageStyle::Info);
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

    res
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }
            app.handle_key(key.code, key.modifiers);
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
