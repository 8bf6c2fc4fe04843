//! TUI application state and logic
//!
//! Drives the duel's turn state machine from key events: the human types
//! a guess, the opponent "thinks" for a beat, presents its guess, and the
//! human answers with a score key (0-5). Filtering happens on the score
//! report, never on selection.

use crate::core::{Score, Word};
use crate::engine::{GameSession, Winner};
use crate::wordlists::Dictionary;
use anyhow::Result;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io;
use std::time::{Duration, Instant};

/// How long the opponent pretends to think before presenting a guess
///
/// Pure pacing; removing it changes nothing but feel.
const THINKING_DELAY: Duration = Duration::from_millis(900);

/// Whose input the app is waiting for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    /// Human types a guess at the opponent's secret
    HumanGuess,
    /// Human scores the opponent's presented guess with a digit key
    OpponentScore,
    /// Either side scored 5
    GameOver,
    /// Candidate set emptied by an impossible score; only restart helps
    Anomaly,
}

#[derive(Debug, Clone)]
pub struct Message {
    pub text: String,
    pub style: MessageStyle,
}

#[derive(Debug, Clone)]
pub enum MessageStyle {
    Info,
    Success,
    Error,
}

#[derive(Debug, Default, Clone)]
pub struct Statistics {
    pub duels_played: usize,
    pub duels_won: usize,
}

/// Application state
pub struct App<'a> {
    dictionary: &'a Dictionary,
    pub session: GameSession<'a>,
    pub input_mode: InputMode,
    pub input_buffer: String,
    pub pending_guess: Option<Word>,
    pub thinking_until: Option<Instant>,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary) -> Self {
        let session = GameSession::new(dictionary, &mut rand::rng());

        Self {
            dictionary,
            session,
            input_mode: InputMode::HumanGuess,
            input_buffer: String::new(),
            pending_guess: None,
            thinking_until: None,
            messages: vec![
                Message {
                    text: "Think of a 5-letter word with no repeated letters - that's your secret."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Type a guess at mine and press Enter. First to score 5 wins!"
                        .to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
        }
    }

    /// Submit the typed guess at the opponent's secret
    pub fn submit_guess(&mut self) {
        let raw = self.input_buffer.clone();
        self.input_buffer.clear();

        match self.session.submit_human_guess(&raw) {
            Ok((word, score)) => {
                self.add_message(
                    &format!("{word} scored {score}/5 against my secret."),
                    MessageStyle::Info,
                );

                if self.session.winner() == Some(Winner::Human) {
                    self.finish_duel();
                } else {
                    // Opponent's turn: pause before presenting the guess
                    self.input_mode = InputMode::OpponentScore;
                    self.thinking_until = Some(Instant::now() + THINKING_DELAY);
                }
            }
            Err(reason) => self.add_message(&reason.to_string(), MessageStyle::Error),
        }
    }

    /// Called by the event loop once the thinking delay elapses
    pub fn present_opponent_guess(&mut self) {
        self.thinking_until = None;

        if let Some(guess) = self.session.opponent_turn(&mut rand::rng()) {
            self.add_message(
                &format!("My guess: {guess}. Score it with a key from 0 to 5."),
                MessageStyle::Info,
            );
            self.pending_guess = Some(guess);
        } else {
            self.enter_anomaly();
        }
    }

    /// Record the human's score (digit key) for the pending opponent guess
    pub fn score_opponent_guess(&mut self, value: u8) {
        let Some(guess) = self.pending_guess.take() else {
            return;
        };

        let Ok(score) = Score::try_from(value) else {
            self.pending_guess = Some(guess);
            return;
        };

        match self.session.report_opponent_score(&guess, score) {
            Ok(()) => {
                if self.session.winner() == Some(Winner::Opponent) {
                    self.finish_duel();
                } else {
                    self.add_message(
                        &format!(
                            "{} words still fit. Your turn.",
                            self.session.candidates_remaining()
                        ),
                        MessageStyle::Info,
                    );
                    self.input_mode = InputMode::HumanGuess;
                }
            }
            Err(anomaly) => {
                self.add_message(&anomaly.to_string(), MessageStyle::Error);
                self.enter_anomaly();
            }
        }
    }

    fn enter_anomaly(&mut self) {
        self.input_mode = InputMode::Anomaly;
        self.pending_guess = None;
        self.thinking_until = None;
        self.add_message(
            "A reported score was impossible - I can't go on. Press 'n' to restart.",
            MessageStyle::Error,
        );
    }

    fn finish_duel(&mut self) {
        self.stats.duels_played += 1;

        let text = match self.session.winner() {
            Some(Winner::Human) => {
                self.stats.duels_won += 1;
                format!(
                    "🎉 You win! My word was {}.",
                    self.session.reveal_secret()
                )
            }
            Some(Winner::Opponent) => format!(
                "🤖 I win! And my own secret was {}.",
                self.session.reveal_secret()
            ),
            None => String::new(),
        };

        self.add_message(&text, MessageStyle::Success);
        self.add_message("Press 'n' for a new duel or 'q' to quit.", MessageStyle::Info);
        self.input_mode = InputMode::GameOver;
        self.pending_guess = None;
        self.thinking_until = None;
    }

    pub fn new_game(&mut self) {
        self.session = GameSession::new(self.dictionary, &mut rand::rng());
        self.input_mode = InputMode::HumanGuess;
        self.input_buffer.clear();
        self.pending_guess = None;
        self.thinking_until = None;
        self.messages.clear();
        self.add_message(
            "New duel! I picked a fresh secret. Your guess first.",
            MessageStyle::Info,
        );
    }

    pub fn add_message(&mut self, text: &str, style: MessageStyle) {
        self.messages.push(Message {
            text: text.to_string(),
            style,
        });

        // Keep only last 6 messages
        if self.messages.len() > 6 {
            self.messages.remove(0);
        }
    }

    #[must_use]
    pub fn is_thinking(&self) -> bool {
        self.thinking_until.is_some()
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

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

fn run_app<B: ratatui::backend::Backend>(terminal: &mut Terminal<B>, mut app: App) -> Result<()> {
    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        // Poll so the thinking delay can elapse without a key press
        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                // Only process key press events (fixes Windows double-input bug)
                if key.kind != KeyEventKind::Press {
                    continue;
                }

                if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
                    app.should_quit = true;
                }

                match app.input_mode {
                    InputMode::GameOver | InputMode::Anomaly => match key.code {
                        KeyCode::Char('q') => app.should_quit = true,
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    },
                    InputMode::HumanGuess => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char(c) => {
                            if app.input_buffer.len() < 5 && c.is_ascii_alphabetic() {
                                app.input_buffer.push(c.to_ascii_uppercase());
                            }
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => app.submit_guess(),
                        _ => {}
                    },
                    InputMode::OpponentScore => match key.code {
                        KeyCode::Esc => app.should_quit = true,
                        KeyCode::Char(c @ '0'..='5') if app.pending_guess.is_some() => {
                            // Cast is safe: c is an ASCII digit
                            app.score_opponent_guess(c as u8 - b'0');
                        }
                        _ => {}
                    },
                }
            }
        }

        // Reveal the opponent's guess once the pause is over
        if let Some(deadline) = app.thinking_until
            && Instant::now() >= deadline
        {
            app.present_opponent_guess();
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
