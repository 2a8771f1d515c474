//! Plain-terminal assistant loop
//!
//! Interactive suggestion/feedback cycle without the TUI.

use super::ROUND_BUDGET;
use crate::core::Feedback;
use crate::output::formatters::colored_guess;
use crate::solver::{
    RoundOutcome, SearchPolicy, Session, SessionError, SessionState, Suggestion,
};
use crate::wordlists::Dictionary;
use colored::Colorize;
use indicatif::ProgressBar;
use std::io::{self, Write};
use std::time::Duration;

/// How feedback is typed at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryMode {
    /// One compact pattern per round, e.g. `GY--Y`
    Compact,
    /// Three blank-aware rows per round: green, yellow, gray
    Rows,
}

/// What the operator asked for at the prompt
enum Action {
    Quit,
    New,
    Undo,
    Feedback(Feedback),
}

/// Run the plain-terminal assistant
///
/// # Errors
///
/// Returns an error if reading user input fails or the suggestion search
/// cannot run at all.
#[allow(clippy::too_many_lines)] // Interactive game loop requires detailed handling
pub fn run_assist(
    dictionary: &Dictionary,
    policy: SearchPolicy,
    entry: EntryMode,
) -> Result<(), String> {
    print_banner(entry);

    let mut session = Session::new(dictionary.words(), policy);

    loop {
        // The round number always tracks the recorded history
        let round = session.rounds().len() + 1;

        if session.state() == SessionState::Exhausted {
            println!("\n❌ No candidates remain! Some feedback must be wrong.");
            println!("Type 'undo' to go back, or 'new' to start over.\n");

            match prompt("Command")?.to_lowercase().as_str() {
                "undo" | "u" => {
                    if session.undo().is_some() {
                        println!("✓ Undone! Back to round {}\n", session.rounds().len() + 1);
                    } else {
                        println!("Nothing to undo!\n");
                    }
                }
                "new" | "n" => {
                    session = Session::new(dictionary.words(), policy);
                    println!("\n🔄 New game started!\n");
                }
                "quit" | "q" | "exit" => {
                    println!("\n👋 Good luck!\n");
                    return Ok(());
                }
                _ => {}
            }
            continue;
        }

        let suggestion = compute_suggestion(&mut session)?;
        let candidates_count = session.candidates().len();

        println!("{}", "─".repeat(60));
        println!("Round {round}: {candidates_count} candidates remaining");
        println!("{}", "─".repeat(60));

        println!(
            "\n📊 I suggest: {}, which leaves {} word{} at worst\n",
            suggestion.word.text().to_uppercase().bright_yellow().bold(),
            suggestion.worst_case,
            if suggestion.worst_case == 1 { "" } else { "s" }
        );

        if candidates_count <= 10 {
            println!("Remaining candidates:");
            for candidate in session.candidates() {
                println!("  • {}", candidate.text().to_uppercase());
            }
            println!();
        }

        match read_entry(entry, &suggestion)? {
            Action::Quit => {
                println!("\n👋 Good luck!\n");
                return Ok(());
            }
            Action::New => {
                session = Session::new(dictionary.words(), policy);
                println!("\n🔄 New game started!\n");
            }
            Action::Undo => {
                if session.undo().is_some() {
                    println!("✓ Undone! Back to round {}\n", session.rounds().len() + 1);
                } else {
                    println!("Nothing to undo!\n");
                }
            }
            Action::Feedback(feedback) => match session.record(&suggestion.word, feedback) {
                Ok(RoundOutcome::Solved(answer)) => {
                    if feedback.is_solved() {
                        celebrate(&session);
                    } else {
                        println!(
                            "\n🔒 The word is {}! Play it to finish.\n",
                            answer.text().to_uppercase().bright_green().bold()
                        );
                    }
                    if !play_again()? {
                        println!("\n👋 Thanks for playing!\n");
                        return Ok(());
                    }
                    session = Session::new(dictionary.words(), policy);
                    println!("\n🔄 New game started!\n");
                }
                Ok(RoundOutcome::Continue { .. }) => {
                    if session.rounds().len() >= ROUND_BUDGET {
                        out_of_rounds(&session);
                        if !play_again()? {
                            println!("\n👋 Thanks for playing!\n");
                            return Ok(());
                        }
                        session = Session::new(dictionary.words(), policy);
                        println!("\n🔄 New game started!\n");
                    }
                }
                Err(SessionError::Contradictory(contradiction)) => {
                    println!("❌ {contradiction}\n");
                }
                Err(SessionError::InconsistentFeedback { .. }) => {
                    // The exhaustion branch explains on the next pass
                }
                Err(err) => return Err(err.to_string()),
            },
        }
    }
}

fn print_banner(entry: EntryMode) {
    println!("\n╔══════════════════════════════════════════════════════════════╗");
    println!("║                   Wordle Minimax Assistant                   ║");
    println!("╚══════════════════════════════════════════════════════════════╝\n");

    println!("I'll suggest the guess that leaves the fewest words in the worst case.");
    match entry {
        EntryMode::Compact => {
            println!("After each guess, enter the feedback pattern:\n");
            println!("  - Use G/g/🟩 for green (correct position)");
            println!("  - Use Y/y/🟨 for yellow (wrong position)");
            println!("  - Use -/_/⬜ for gray (not in word)");
            println!("  - Or type 'win' if you got it right!\n");
        }
        EntryMode::Rows => {
            println!("After each guess, enter the colors as three rows:\n");
            println!("  - Green row:  the letters that landed in place, '_' for blanks");
            println!("  - Yellow row: the letters in the word but out of place");
            println!("  - Gray row:   the letters not in the word");
            println!("  - Or type 'win' if you got it right!\n");
        }
    }
    println!("Commands: 'quit' to exit, 'new' for new game, 'undo' to undo last guess\n");
}

/// Score the pool behind a steady-tick spinner
fn compute_suggestion(session: &mut Session) -> Result<Suggestion, String> {
    let spinner = ProgressBar::new_spinner();
    spinner.set_message("Scoring guesses...");
    spinner.enable_steady_tick(Duration::from_millis(80));

    let result = session.suggest(None);
    spinner.finish_and_clear();

    result.map_err(|err| err.to_string())
}

/// Read one entry, looping until it parses
fn read_entry(mode: EntryMode, suggestion: &Suggestion) -> Result<Action, String> {
    loop {
        let line = match mode {
            EntryMode::Compact => prompt("Enter feedback (G/Y/-, 'win', or command)")?,
            EntryMode::Rows => prompt("Green letters, '_' for blanks (or 'win', or command)")?,
        };

        match line.to_lowercase().as_str() {
            "quit" | "q" | "exit" => return Ok(Action::Quit),
            "new" | "n" => return Ok(Action::New),
            "undo" | "u" => return Ok(Action::Undo),
            "win" | "correct" | "solved" => return Ok(Action::Feedback(Feedback::CORRECT)),
            _ => {}
        }

        match mode {
            EntryMode::Compact => match Feedback::parse(&line) {
                Ok(feedback) => return Ok(Action::Feedback(feedback)),
                Err(err) => println!("❌ {err}\n"),
            },
            EntryMode::Rows => {
                let yellow = prompt("Yellow letters, '_' for blanks")?;
                let gray = prompt("Gray letters, '_' for blanks")?;

                match Feedback::from_reports(&suggestion.word, &line, &yellow, &gray) {
                    Ok(feedback) => return Ok(Action::Feedback(feedback)),
                    Err(err) => println!("❌ {err}\n"),
                }
            }
        }
    }
}

fn celebrate(session: &Session) {
    let rounds = session.rounds().len();

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!(
        "{}",
        "    🎉 🎊 ✨  W O R D L E   S O L V E D !  ✨ 🎊 🎉    "
            .bright_green()
            .bold()
    );
    println!("{}", "═".repeat(70).bright_cyan());

    let performance = match rounds {
        1 => ("🏆 Perfect!", "Incredible hole-in-one!"),
        2 => ("⭐ Excellent!", "Outstanding performance!"),
        3 => ("💫 Great!", "Very well played!"),
        4 => ("✨ Good!", "Nice work!"),
        5 => ("👍 Solved!", "Got it!"),
        _ => ("✓ Complete!", "Success!"),
    };

    println!("\n  {}", performance.0.bright_yellow().bold());
    println!("  {}", performance.1.bright_white());
    println!(
        "\n  Solution found in {} {}",
        rounds.to_string().bright_cyan().bold(),
        if rounds == 1 { "guess" } else { "guesses" }
    );

    println!("\n  Guess history:");
    for (i, played) in session.rounds().iter().enumerate() {
        println!(
            "    {}. {} {}",
            (i + 1).to_string().bright_black(),
            colored_guess(played.guess(), played.feedback()),
            played.feedback().to_emoji()
        );
    }

    println!("\n{}", "═".repeat(70).bright_cyan());
    println!();
}

fn out_of_rounds(session: &Session) {
    println!("\n{}", "═".repeat(70).yellow());
    println!(
        "{}",
        "  😅 Six rounds played! The board is full.".yellow().bold()
    );
    println!("{}", "═".repeat(70).yellow());

    let candidates = session.candidates();
    println!(
        "\n  The answer is one of {} word{}:",
        candidates.len(),
        if candidates.len() == 1 { "" } else { "s" }
    );
    for candidate in candidates.iter().take(10) {
        println!("    • {}", candidate.text().to_uppercase());
    }
    if candidates.len() > 10 {
        println!("    … and {} more", candidates.len() - 10);
    }
    println!();
}

fn play_again() -> Result<bool, String> {
    Ok(matches!(
        prompt("Play again? (yes/no)")?.to_lowercase().as_str(),
        "yes" | "y"
    ))
}

/// Get user input with a prompt
fn prompt(text: &str) -> Result<String, String> {
    print!("{text}: ");
    io::stdout().flush().map_err(|e| e.to_string())?;

    let mut input = String::new();
    let bytes = io::stdin()
        .read_line(&mut input)
        .map_err(|e| e.to_string())?;
    if bytes == 0 {
        // Closed stdin reads as a quit
        return Ok("quit".to_string());
    }

    Ok(input.trim().to_string())
}
