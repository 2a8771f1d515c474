//! Display functions for command results

use super::formatters::{colored_guess, worst_case_bar};
use crate::commands::{EvalReport, ROUND_BUDGET, SolveReport, WordRating};
use colored::Colorize;

/// Print the trace of a self-play run
pub fn print_solve_report(report: &SolveReport, verbose: bool) {
    println!("\n{}", "─".repeat(60).cyan());
    println!(
        "Solving: {}",
        report.target.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "─".repeat(60).cyan());

    for (i, step) in report.steps.iter().enumerate() {
        println!(
            "\nRound {}: {} {}",
            i + 1,
            colored_guess(&step.word, step.feedback),
            step.feedback.to_emoji()
        );

        if verbose {
            println!(
                "  Candidates: {} → {}",
                step.candidates_before, step.candidates_after
            );
            println!("  Worst case: {} before playing", step.worst_case);
        }
    }

    println!();
    if report.solved {
        println!(
            "{}",
            format!(
                "✅ Solved in {} round{}!",
                report.steps.len(),
                if report.steps.len() == 1 { "" } else { "s" }
            )
            .green()
            .bold()
        );
    } else {
        println!(
            "{}",
            format!("❌ Not solved in {} rounds", report.steps.len())
                .red()
                .bold()
        );
    }
}

/// Print a word's worst-case rating
pub fn print_rating(rating: &WordRating) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "WORST-CASE RATING:".bright_cyan().bold(),
        rating.word.text().to_uppercase().bright_yellow().bold()
    );
    println!("{}", "═".repeat(60).cyan());

    let bar = worst_case_bar(rating.worst_case, rating.total_candidates, 30);

    println!("\n📊 Against {} possible answers:", rating.total_candidates);
    println!(
        "   Worst case:  [{}] {}",
        bar.green(),
        format!("{} words remain", rating.worst_case).bright_yellow()
    );
    println!("   Splits into: {} feedback groups", rating.groups);

    let eliminated = rating.total_candidates.saturating_sub(rating.worst_case);
    println!("   Guaranteed:  at least {eliminated} words eliminated");

    if !rating.in_dictionary {
        println!(
            "\n   {}",
            "Note: not a dictionary word, so it cannot be the answer".yellow()
        );
    }
}

/// Print evaluation statistics
pub fn print_eval_report(report: &EvalReport) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(" {} ", "EVALUATION RESULTS".bright_cyan().bold());
    println!("{}", "═".repeat(60).cyan());

    if report.total_words == 0 {
        println!("\nNo words evaluated.");
        return;
    }

    println!("\n📊 {}", "Performance:".bright_cyan().bold());
    println!("   Words tested:     {}", report.total_words);
    println!(
        "   Solved:           {} {}",
        report.solved,
        format!(
            "({:.1}%)",
            report.solved as f64 / report.total_words as f64 * 100.0
        )
        .green()
    );
    if report.failed > 0 {
        println!(
            "   Missed:           {} {}",
            report.failed,
            format!(
                "({:.1}%)",
                report.failed as f64 / report.total_words as f64 * 100.0
            )
            .red()
        );
    }
    println!(
        "   Average rounds:   {}",
        format!("{:.3}", report.average_rounds)
            .bright_yellow()
            .bold()
    );
    println!(
        "   Best case:        {}",
        format!("{}", report.min_rounds).green()
    );
    println!(
        "   Worst case:       {}",
        format!("{}", report.max_rounds).yellow()
    );
    println!("   Time taken:       {:.2}s", report.duration.as_secs_f64());
    println!("   Words/second:     {:.1}", report.words_per_second);

    println!("\n📈 {}", "Distribution:".bright_cyan().bold());
    for rounds in 1..=ROUND_BUDGET {
        let count = report.distribution.get(&rounds).copied().unwrap_or(0);
        if report.solved > 0 {
            let pct = count as f64 / report.solved as f64 * 100.0;
            let width = (pct / 2.5) as usize;
            let bar = format!(
                "{}{}",
                "█".repeat(width).green(),
                "░".repeat(40_usize.saturating_sub(width)).bright_black()
            );
            println!("   {rounds}: {bar} {count:4} ({pct:5.1}%)");
        }
    }

    if !report.hardest.is_empty() {
        println!("\n😰 {}", "Hardest Words (5-6 rounds)".yellow().bold());
        for (word, rounds) in report.hardest.iter().take(5) {
            println!("   {} ({} rounds)", word.to_uppercase().yellow(), rounds);
        }
    }

    if !report.unsolved.is_empty() {
        println!("\n❌ {}", "Missed Words".red().bold());
        for word in report.unsolved.iter().take(5) {
            println!("   {}", word.to_uppercase().red());
        }
    }
}
