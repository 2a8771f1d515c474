//! Formatting utilities for terminal output

use crate::core::{Feedback, Mark, Word};
use colored::Colorize;

/// Color a guess letter by letter according to its feedback
///
/// Correct letters are green, present letters yellow, absent letters dim.
#[must_use]
pub fn colored_guess(word: &Word, feedback: Feedback) -> String {
    word.text()
        .chars()
        .zip(feedback.marks())
        .map(|(letter, mark)| {
            let letter = letter.to_ascii_uppercase().to_string();
            match mark {
                Mark::Correct => letter.bright_green().bold().to_string(),
                Mark::Present => letter.bright_yellow().bold().to_string(),
                Mark::Absent => letter.bright_black().to_string(),
            }
        })
        .collect()
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Format a worst-case count as a share of the candidate field
///
/// The bar fills with the fraction of candidates that could survive the
/// guess, so shorter is better.
#[must_use]
pub fn worst_case_bar(worst_case: usize, candidates: usize, width: usize) -> String {
    if candidates == 0 {
        return "░".repeat(width);
    }

    create_progress_bar(worst_case as f64, candidates as f64, width)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn colored_guess_keeps_every_letter() {
        let word = Word::new("crane").unwrap();
        let feedback = Feedback::parse("GY-Y-").unwrap();

        let rendered = colored_guess(&word, feedback);
        for letter in ["C", "R", "A", "N", "E"] {
            assert!(rendered.contains(letter), "missing letter {letter}");
        }
    }

    #[test]
    fn progress_bar_empty() {
        let bar = create_progress_bar(0.0, 100.0, 10);
        assert_eq!(bar, "░░░░░░░░░░");
    }

    #[test]
    fn progress_bar_full() {
        let bar = create_progress_bar(100.0, 100.0, 10);
        assert_eq!(bar, "██████████");
    }

    #[test]
    fn progress_bar_half() {
        let bar = create_progress_bar(50.0, 100.0, 10);
        assert_eq!(bar, "█████░░░░░");
    }

    #[test]
    fn worst_case_bar_handles_empty_field() {
        let bar = worst_case_bar(0, 0, 8);
        assert_eq!(bar, "░░░░░░░░");
    }

    #[test]
    fn worst_case_bar_scales_with_survivors() {
        // Half the field could survive, so half the bar fills
        let bar = worst_case_bar(5, 10, 10);
        assert_eq!(bar, "█████░░░░░");
    }
}
