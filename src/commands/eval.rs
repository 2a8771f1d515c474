//! Dictionary-wide evaluation
//!
//! Replays the assistant against every answer (or a sample) and gathers
//! round-count statistics.

use super::ROUND_BUDGET;
use crate::core::{Feedback, Word};
use crate::solver::{SearchPolicy, Session};
use crate::wordlists::Dictionary;
use indicatif::{ProgressBar, ProgressStyle};
use rand::prelude::IndexedRandom;
use std::collections::HashMap;
use std::time::{Duration, Instant};

/// Options for an evaluation run
#[derive(Debug, Default)]
pub struct EvalOptions {
    /// Evaluate only the first N dictionary words
    pub limit: Option<usize>,
    /// Evaluate a random sample of N dictionary words instead
    pub sample: Option<usize>,
    /// Suppress the progress bar
    pub quiet: bool,
}

/// Statistics from an evaluation run
#[derive(Debug)]
pub struct EvalReport {
    pub total_words: usize,
    pub solved: usize,
    pub failed: usize,
    /// Rounds needed → number of solved words
    pub distribution: HashMap<usize, usize>,
    pub average_rounds: f64,
    pub min_rounds: usize,
    pub max_rounds: usize,
    /// Solved words that needed five or more rounds, hardest first
    pub hardest: Vec<(String, usize)>,
    /// Words the assistant missed inside the round budget
    pub unsolved: Vec<String>,
    pub duration: Duration,
    pub words_per_second: f64,
}

/// What one replayed game took
struct PlayedOut {
    word: String,
    rounds: usize,
    solved: bool,
}

/// Replay the assistant over the dictionary and collect statistics
///
/// Targets come from the dictionary itself: the first `limit` words, a
/// random `sample`, or every word.
///
/// # Panics
///
/// Panics only if the progress bar template literal is rejected, which a
/// fixed template never is.
#[must_use]
pub fn run_eval(
    dictionary: &Dictionary,
    policy: SearchPolicy,
    options: &EvalOptions,
) -> EvalReport {
    let targets: Vec<&Word> = match options.sample {
        Some(n) => dictionary
            .words()
            .choose_multiple(&mut rand::rng(), n)
            .collect(),
        None => dictionary
            .words()
            .iter()
            .take(options.limit.unwrap_or(dictionary.len()))
            .collect(),
    };

    let bar = if options.quiet {
        ProgressBar::hidden()
    } else {
        let bar = ProgressBar::new(targets.len() as u64);
        bar.set_style(
            ProgressStyle::default_bar()
                .template("{spinner:.green} [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) | {msg}")
                .unwrap()
                .progress_chars("█▓▒░"),
        );
        bar
    };

    let start = Instant::now();
    let mut outcomes: Vec<PlayedOut> = Vec::with_capacity(targets.len());
    let mut distribution: HashMap<usize, usize> = HashMap::new();

    for (index, target) in targets.iter().enumerate() {
        let (rounds, solved) = play_out(dictionary, policy, target);

        if solved {
            *distribution.entry(rounds).or_insert(0) += 1;
        }
        outcomes.push(PlayedOut {
            word: target.text().to_string(),
            rounds,
            solved,
        });

        if index % 10 == 0 {
            let avg = outcomes.iter().map(|o| o.rounds).sum::<usize>() as f64
                / outcomes.len() as f64;
            bar.set_message(format!("avg {avg:.2}"));
        }
        bar.inc(1);
    }

    bar.finish_with_message("done");

    let duration = start.elapsed();
    let total_words = outcomes.len();
    let solved = outcomes.iter().filter(|o| o.solved).count();
    let failed = total_words - solved;

    let total_rounds: usize = outcomes
        .iter()
        .filter(|o| o.solved)
        .map(|o| o.rounds)
        .sum();
    let average_rounds = if solved > 0 {
        total_rounds as f64 / solved as f64
    } else {
        0.0
    };

    let min_rounds = outcomes
        .iter()
        .filter(|o| o.solved)
        .map(|o| o.rounds)
        .min()
        .unwrap_or(0);
    let max_rounds = outcomes
        .iter()
        .filter(|o| o.solved)
        .map(|o| o.rounds)
        .max()
        .unwrap_or(0);

    let mut hardest: Vec<(String, usize)> = outcomes
        .iter()
        .filter(|o| o.solved && o.rounds >= 5)
        .map(|o| (o.word.clone(), o.rounds))
        .collect();
    hardest.sort_by_key(|(_, rounds)| std::cmp::Reverse(*rounds));
    hardest.truncate(10);

    let mut unsolved: Vec<String> = outcomes
        .iter()
        .filter(|o| !o.solved)
        .map(|o| o.word.clone())
        .collect();
    unsolved.truncate(10);

    EvalReport {
        total_words,
        solved,
        failed,
        distribution,
        average_rounds,
        min_rounds,
        max_rounds,
        hardest,
        unsolved,
        duration,
        words_per_second: total_words as f64 / duration.as_secs_f64(),
    }
}

/// Play one target to the end of the round budget
fn play_out(dictionary: &Dictionary, policy: SearchPolicy, target: &Word) -> (usize, bool) {
    let mut session = Session::new(dictionary.words(), policy);

    for round in 1..=ROUND_BUDGET {
        let Ok(suggestion) = session.suggest(None) else {
            return (round, false);
        };

        let feedback = Feedback::simulate(&suggestion.word, target);
        if feedback.is_solved() {
            return (round, true);
        }

        if session.record(&suggestion.word, feedback).is_err() {
            return (round, false);
        }
    }

    (ROUND_BUDGET, false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_texts(texts.iter().copied()).unwrap()
    }

    fn quiet() -> EvalOptions {
        EvalOptions {
            quiet: true,
            ..EvalOptions::default()
        }
    }

    #[test]
    fn eval_solves_a_small_dictionary() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);

        let report = run_eval(&dict, SearchPolicy::default(), &quiet());

        assert_eq!(report.total_words, 6);
        assert_eq!(report.solved, 6);
        assert_eq!(report.failed, 0);
        assert!(report.unsolved.is_empty());
        assert!(report.max_rounds <= ROUND_BUDGET);
        assert!(report.min_rounds >= 1);
    }

    #[test]
    fn distribution_counts_every_solved_word() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);

        let report = run_eval(&dict, SearchPolicy::default(), &quiet());

        let counted: usize = report.distribution.values().sum();
        assert_eq!(counted, report.solved);
    }

    #[test]
    fn average_sits_between_min_and_max() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);

        let report = run_eval(&dict, SearchPolicy::default(), &quiet());

        assert!(report.average_rounds >= report.min_rounds as f64);
        assert!(report.average_rounds <= report.max_rounds as f64);
    }

    #[test]
    fn limit_restricts_the_targets() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let options = EvalOptions {
            limit: Some(2),
            quiet: true,
            ..EvalOptions::default()
        };

        let report = run_eval(&dict, SearchPolicy::default(), &options);
        assert_eq!(report.total_words, 2);
    }

    #[test]
    fn sample_draws_the_requested_count() {
        let dict = dictionary(&["crane", "slate", "irate", "crate", "grate", "trace"]);
        let options = EvalOptions {
            sample: Some(3),
            quiet: true,
            ..EvalOptions::default()
        };

        let report = run_eval(&dict, SearchPolicy::default(), &options);
        assert_eq!(report.total_words, 3);
        assert_eq!(report.solved, 3);
    }

    #[test]
    fn zero_limit_is_an_empty_run() {
        let dict = dictionary(&["crane", "slate"]);
        let options = EvalOptions {
            limit: Some(0),
            quiet: true,
            ..EvalOptions::default()
        };

        let report = run_eval(&dict, SearchPolicy::default(), &options);
        assert_eq!(report.total_words, 0);
        assert_eq!(report.solved, 0);
        assert_eq!(report.average_rounds, 0.0);
    }
}
