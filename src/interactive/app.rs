//! TUI application state and logic

use crate::core::{Feedback, Word};
use crate::solver::minimax::{feedback_groups, worst_case_remaining};
use crate::solver::{RoundOutcome, SearchPolicy, Session, SessionError, SessionState};
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

/// Application state
pub struct App<'a> {
    pub session: Session<'a>,
    pub dictionary: &'a Dictionary,
    pub policy: SearchPolicy,
    pub current_guess: Option<GuessInfo>,
    pub input_buffer: String,
    pub messages: Vec<Message>,
    pub stats: Statistics,
    pub should_quit: bool,
    pub input_mode: InputMode,
    pub manual_word: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputMode {
    Feedback,
    ManualWord,
    WinCelebration,
}

/// The word on offer and its split metrics
#[derive(Debug, Clone)]
pub struct GuessInfo {
    pub word: Word,
    pub worst_case: usize,
    pub groups: usize,
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
    pub total_games: usize,
    pub games_won: usize,
    pub guess_distribution: [usize; 7],
}

impl<'a> App<'a> {
    #[must_use]
    pub fn new(dictionary: &'a Dictionary, policy: SearchPolicy) -> Self {
        Self {
            session: Session::new(dictionary.words(), policy),
            dictionary,
            policy,
            current_guess: None,
            input_buffer: String::new(),
            messages: vec![
                Message {
                    text: "Welcome! I'll suggest the guess with the smallest worst case."
                        .to_string(),
                    style: MessageStyle::Info,
                },
                Message {
                    text: "Enter feedback pattern (e.g., 'GY-GY' or '🟩🟨⬜🟩🟨')".to_string(),
                    style: MessageStyle::Info,
                },
            ],
            stats: Statistics::default(),
            should_quit: false,
            input_mode: InputMode::Feedback,
            manual_word: String::new(),
        }
    }

    pub fn compute_suggestion(&mut self) {
        match self.session.suggest(None) {
            Ok(suggestion) => {
                let groups = feedback_groups(&suggestion.word, self.session.candidates()).len();
                self.current_guess = Some(GuessInfo {
                    word: suggestion.word,
                    worst_case: suggestion.worst_case,
                    groups,
                });
            }
            Err(SessionError::InconsistentFeedback { .. }) => {
                self.current_guess = None;
                self.add_message(
                    "No candidates remain - feedback may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            Err(err) => {
                self.current_guess = None;
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }
    }

    pub fn handle_feedback(&mut self, input: &str) {
        let Ok(feedback) = Feedback::parse(input) else {
            self.add_message("Invalid pattern! Use G/Y/-  or 🟩🟨⬜", MessageStyle::Error);
            return;
        };

        // Once the answer is pinned, the confirming play is not a new round
        if self.session.state() == SessionState::Solved {
            if feedback.is_solved() {
                self.win(self.session.rounds().len() + 1);
            } else {
                self.add_message(
                    "The answer is already pinned - play it!",
                    MessageStyle::Info,
                );
            }
            self.input_buffer.clear();
            return;
        }

        let Some(played) = self.current_guess.as_ref().map(|info| info.word.clone()) else {
            self.add_message(
                "No guess to score - press 'n' for a new game.",
                MessageStyle::Error,
            );
            return;
        };

        match self.session.record(&played, feedback) {
            Ok(RoundOutcome::Solved(answer)) => {
                if feedback.is_solved() {
                    self.win(self.session.rounds().len());
                } else {
                    self.add_message(
                        &format!(
                            "Only {} fits! Play it to finish.",
                            answer.text().to_uppercase()
                        ),
                        MessageStyle::Success,
                    );
                    self.compute_suggestion();
                }
            }
            Ok(RoundOutcome::Continue { remaining }) => {
                self.add_message(
                    &format!("{remaining} candidates remaining"),
                    MessageStyle::Info,
                );
                self.compute_suggestion();
            }
            Err(SessionError::Contradictory(contradiction)) => {
                self.add_message(&contradiction.to_string(), MessageStyle::Error);
            }
            Err(SessionError::InconsistentFeedback { .. }) => {
                self.current_guess = None;
                self.add_message(
                    "No candidates remain - pattern may be incorrect. Press 'u' to undo.",
                    MessageStyle::Error,
                );
            }
            Err(err) => {
                self.add_message(&err.to_string(), MessageStyle::Error);
            }
        }

        self.input_buffer.clear();
    }

    fn win(&mut self, rounds: usize) {
        self.stats.games_won += 1;
        self.stats.total_games += 1;
        if rounds <= 6 {
            self.stats.guess_distribution[rounds] += 1;
        }

        self.input_mode = InputMode::WinCelebration;

        let celebration = match rounds {
            1 => "🎯 HOLE IN ONE! Extraordinary! 🌟",
            2 => "🔥 MAGNIFICENT! Two guesses! 🔥",
            3 => "✨ SPLENDID! Three guesses! ✨",
            4 => "👏 GREAT JOB! Four guesses! 👏",
            5 => "🎉 NICE WORK! Five guesses! 🎉",
            6 => "😅 PHEW! Got it in six! 😅",
            _ => "🎊 SOLVED! 🎊",
        };

        self.add_message(celebration, MessageStyle::Success);
        self.add_message("Press 'n' for new game or 'q' to quit.", MessageStyle::Info);
    }

    pub fn new_game(&mut self) {
        self.session = Session::new(self.dictionary.words(), self.policy);
        self.current_guess = None;
        self.input_buffer.clear();
        self.manual_word.clear();
        self.messages.clear();
        self.input_mode = InputMode::Feedback;
        self.add_message(
            "New game started! I'll suggest the opening guess.",
            MessageStyle::Info,
        );
        self.compute_suggestion();
    }

    pub fn undo_last(&mut self) {
        if self.session.undo().is_some() {
            self.compute_suggestion();
            self.add_message("Undone!", MessageStyle::Info);
        } else {
            self.add_message("Nothing to undo!", MessageStyle::Error);
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

    #[must_use]
    pub fn candidates_count(&self) -> usize {
        self.session.candidates().len()
    }

    pub fn use_manual_word(&mut self) {
        let Ok(word) = Word::new(self.manual_word.as_str()) else {
            self.add_message("Invalid word format!", MessageStyle::Error);
            return;
        };

        let worst_case = worst_case_remaining(&word, self.session.candidates());
        let groups = feedback_groups(&word, self.session.candidates()).len();

        if !self.dictionary.contains(&word) {
            self.add_message(
                &format!(
                    "{} is not in the word list - scoring it anyway",
                    word.text().to_uppercase()
                ),
                MessageStyle::Info,
            );
        }

        if let Some(ref suggested) = self.current_guess
            && worst_case > suggested.worst_case
        {
            self.add_message(
                &format!(
                    "Note: {} would leave only {} at worst",
                    suggested.word.text().to_uppercase(),
                    suggested.worst_case
                ),
                MessageStyle::Info,
            );
        }

        self.add_message(
            &format!(
                "Using: {} (leaves {} at worst)",
                word.text().to_uppercase(),
                worst_case
            ),
            MessageStyle::Success,
        );

        self.current_guess = Some(GuessInfo {
            word,
            worst_case,
            groups,
        });
        self.input_mode = InputMode::Feedback;
        self.manual_word.clear();
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
    // Compute initial suggestion
    app.compute_suggestion();

    loop {
        terminal.draw(|f| super::rendering::ui(f, &app))?;

        if let Event::Key(key) = event::read()? {
            // Only process key press events (fixes Windows double-input bug)
            if key.kind != KeyEventKind::Press {
                continue;
            }

            match app.input_mode {
                InputMode::WinCelebration => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_game();
                        }
                        _ => {
                            // In celebration mode, ignore other keys
                        }
                    }
                }
                InputMode::Feedback => {
                    match key.code {
                        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('q') => {
                            app.should_quit = true;
                        }
                        KeyCode::Char('n') => {
                            app.new_game();
                            // Don't add 'n' to input buffer
                        }
                        KeyCode::Char('u') => {
                            app.undo_last();
                            // Don't add 'u' to input buffer
                        }
                        KeyCode::Tab => {
                            // Switch to manual word mode
                            if app.candidates_count() > 0 {
                                app.input_mode = InputMode::ManualWord;
                                app.add_message(
                                    "Enter the word you actually played (5 letters)",
                                    MessageStyle::Info,
                                );
                            }
                        }
                        KeyCode::Char(c) => {
                            app.input_buffer.push(c);
                        }
                        KeyCode::Backspace => {
                            app.input_buffer.pop();
                        }
                        KeyCode::Enter => {
                            let input = app.input_buffer.clone();
                            app.handle_feedback(&input);
                        }
                        _ => {}
                    }
                }
                InputMode::ManualWord => {
                    match key.code {
                        KeyCode::Esc => {
                            app.input_mode = InputMode::Feedback;
                            app.manual_word.clear();
                            app.add_message("Cancelled manual word entry", MessageStyle::Info);
                        }
                        KeyCode::Tab => {
                            // Toggle back to feedback mode
                            app.input_mode = InputMode::Feedback;
                            app.manual_word.clear();
                        }
                        KeyCode::Char(c) => {
                            if app.manual_word.len() < 5 && c.is_alphabetic() {
                                app.manual_word.push(c.to_ascii_lowercase());
                            }
                        }
                        KeyCode::Backspace => {
                            app.manual_word.pop();
                        }
                        KeyCode::Enter => {
                            if app.manual_word.len() == 5 {
                                app.use_manual_word();
                            } else {
                                app.add_message(
                                    "Word must be exactly 5 letters!",
                                    MessageStyle::Error,
                                );
                            }
                        }
                        _ => {}
                    }
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    Ok(())
}
