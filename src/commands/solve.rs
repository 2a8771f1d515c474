//! Self-play command
//!
//! Plays the assistant against a known answer using simulated feedback and
//! collects the per-round trace.

use super::ROUND_BUDGET;
use crate::core::{Feedback, Word};
use crate::solver::{SearchPolicy, Session};
use crate::wordlists::Dictionary;

/// Configuration for a self-play run
pub struct SolveConfig {
    pub target: String,
    pub round_budget: usize,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(target: String) -> Self {
        Self {
            target,
            round_budget: ROUND_BUDGET,
        }
    }
}

/// One round of the self-play trace
pub struct SolveStep {
    pub word: Word,
    pub feedback: Feedback,
    /// Candidates the suggestion guaranteed at worst before playing
    pub worst_case: usize,
    pub candidates_before: usize,
    pub candidates_after: usize,
}

/// Outcome of a self-play run
pub struct SolveReport {
    pub target: Word,
    pub solved: bool,
    pub steps: Vec<SolveStep>,
}

/// Solve a specific answer word and return the trace
///
/// # Errors
///
/// Returns an error if the target is not a well-formed word, is missing
/// from the dictionary, or the suggestion search fails.
pub fn solve_word(
    config: &SolveConfig,
    dictionary: &Dictionary,
    policy: SearchPolicy,
) -> Result<SolveReport, String> {
    let target =
        Word::new(config.target.as_str()).map_err(|e| format!("Invalid target word: {e}"))?;

    if !dictionary.contains(&target) {
        return Err(format!("Word '{target}' is not in the word list"));
    }

    let mut session = Session::new(dictionary.words(), policy);
    let mut steps = Vec::new();

    for _ in 0..config.round_budget {
        let suggestion = session.suggest(None).map_err(|e| e.to_string())?;
        let feedback = Feedback::simulate(&suggestion.word, &target);
        let candidates_before = session.candidates().len();

        if feedback.is_solved() {
            // All-correct feedback keeps exactly the guess itself
            steps.push(SolveStep {
                word: suggestion.word,
                feedback,
                worst_case: suggestion.worst_case,
                candidates_before,
                candidates_after: 1,
            });

            return Ok(SolveReport {
                target,
                solved: true,
                steps,
            });
        }

        // The target always survives its own feedback, so recording can
        // neither exhaust nor contradict the session.
        session
            .record(&suggestion.word, feedback)
            .map_err(|e| e.to_string())?;

        steps.push(SolveStep {
            word: suggestion.word,
            feedback,
            worst_case: suggestion.worst_case,
            candidates_before,
            candidates_after: session.candidates().len(),
        });
    }

    Ok(SolveReport {
        target,
        solved: false,
        steps,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_texts(texts.iter().copied()).unwrap()
    }

    #[test]
    fn solve_finds_the_target() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let config = SolveConfig::new("crate".to_string());

        let report = solve_word(&config, &dict, SearchPolicy::default()).unwrap();

        assert!(report.solved);
        assert!(!report.steps.is_empty());
        assert!(report.steps.len() <= ROUND_BUDGET);

        let last = report.steps.last().unwrap();
        assert_eq!(last.word.text(), "crate");
        assert!(last.feedback.is_solved());
        assert_eq!(last.candidates_after, 1);
    }

    #[test]
    fn trace_shrinks_round_over_round() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let config = SolveConfig::new("grate".to_string());

        let report = solve_word(&config, &dict, SearchPolicy::default()).unwrap();

        for step in &report.steps {
            assert!(step.candidates_after <= step.candidates_before);
        }
        for pair in report.steps.windows(2) {
            assert_eq!(pair[1].candidates_before, pair[0].candidates_after);
        }
    }

    #[test]
    fn lone_word_is_solved_immediately() {
        let dict = dictionary(&["crane"]);
        let config = SolveConfig::new("crane".to_string());

        let report = solve_word(&config, &dict, SearchPolicy::default()).unwrap();

        assert!(report.solved);
        assert_eq!(report.steps.len(), 1);
        assert_eq!(report.steps[0].worst_case, 1);
    }

    #[test]
    fn malformed_target_is_rejected() {
        let dict = dictionary(&["crane", "slate"]);
        let config = SolveConfig::new("xyz".to_string());

        let result = solve_word(&config, &dict, SearchPolicy::default());
        assert!(result.is_err());
    }

    #[test]
    fn off_list_target_is_rejected() {
        let dict = dictionary(&["crane", "slate"]);
        let config = SolveConfig::new("zzzzz".to_string());

        let result = solve_word(&config, &dict, SearchPolicy::default());
        assert!(result.is_err());
    }

    #[test]
    fn round_budget_caps_the_trace() {
        let dict = dictionary(&["aaaab", "aaaac", "aaaad"]);
        let mut config = SolveConfig::new("aaaad".to_string());
        config.round_budget = 1;

        // One round cannot separate three words differing only in the
        // last letter.
        let report = solve_word(&config, &dict, SearchPolicy::default()).unwrap();

        assert!(!report.solved);
        assert_eq!(report.steps.len(), 1);
    }
}
