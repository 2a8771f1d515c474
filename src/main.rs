//! Wordle Minimax - CLI
//!
//! Interactive Wordle assistant with TUI and CLI modes, picking every guess
//! to minimize the worst-case number of remaining candidates.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use wordle_minimax::{
    commands::{EntryMode, EvalOptions, SolveConfig, rate_word, run_assist, run_eval, solve_word},
    output::{print_eval_report, print_rating, print_solve_report},
    solver::SearchPolicy,
    wordlists::Dictionary,
};

#[derive(Parser)]
#[command(
    name = "wordle_minimax",
    about = "Wordle assistant minimizing the worst-case number of remaining candidates",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Where suggested guesses may come from
    #[arg(short = 'u', long, global = true, value_enum, default_value = "auto")]
    universe: UniverseArg,

    /// Candidate count at or below which 'auto' searches the full dictionary
    #[arg(long, global = true, default_value_t = SearchPolicy::DEFAULT_CROSSOVER)]
    crossover: usize,

    /// Path to a custom word list (default: the bundled list)
    #[arg(short = 'w', long, global = true)]
    wordlist: Option<PathBuf>,
}

#[derive(Clone, Copy, ValueEnum)]
enum UniverseArg {
    /// Candidates while the field is large, full dictionary once it shrinks
    Auto,
    /// Only words still consistent with every recorded round
    Candidates,
    /// Every dictionary word, consistent or not
    Full,
}

#[derive(Clone, Copy, ValueEnum)]
enum EntryArg {
    /// One G/Y/- line per round
    Compact,
    /// Separate rows for greens, yellows, and grays
    Rows,
}

impl From<EntryArg> for EntryMode {
    fn from(arg: EntryArg) -> Self {
        match arg {
            EntryArg::Compact => Self::Compact,
            EntryArg::Rows => Self::Rows,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Interactive TUI mode (default - live visualizations)
    Play,

    /// Plain-terminal assistant (no TUI)
    Assist {
        /// Feedback entry style
        #[arg(short, long, value_enum, default_value = "compact")]
        entry: EntryArg,
    },

    /// Solve a specific target word and show the trace
    Solve {
        /// The target word to solve
        word: String,

        /// Show verbose output with candidate counts
        #[arg(short, long)]
        verbose: bool,
    },

    /// Rate the worst-case split of a specific word
    Rate {
        /// Word to rate
        word: String,
    },

    /// Evaluate the assistant across the word list
    Eval {
        /// Limit number of words to evaluate
        #[arg(short, long)]
        limit: Option<usize>,

        /// Evaluate a random sample of this many words
        #[arg(short, long)]
        sample: Option<usize>,
    },
}

/// Load the dictionary based on the -w flag
fn load_dictionary(wordlist: Option<&PathBuf>) -> Result<Dictionary> {
    match wordlist {
        Some(path) => Ok(Dictionary::from_file(path)?),
        None => Ok(Dictionary::embedded()?),
    }
}

fn build_policy(universe: UniverseArg, crossover: usize) -> SearchPolicy {
    match universe {
        UniverseArg::Auto => SearchPolicy::auto(crossover),
        UniverseArg::Candidates => SearchPolicy::candidates_only(),
        UniverseArg::Full => SearchPolicy::full_dictionary(),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_dictionary(cli.wordlist.as_ref())?;
    let policy = build_policy(cli.universe, cli.crossover);

    // Default to Play mode if no command given
    let command = cli.command.unwrap_or(Commands::Play);

    match command {
        Commands::Play => run_play_command(&dictionary, policy),
        Commands::Assist { entry } => {
            run_assist(&dictionary, policy, entry.into()).map_err(|e| anyhow::anyhow!(e))
        }
        Commands::Solve { word, verbose } => run_solve_command(&word, verbose, &dictionary, policy),
        Commands::Rate { word } => run_rate_command(&word, &dictionary),
        Commands::Eval { limit, sample } => {
            run_eval_command(&dictionary, policy, limit, sample);
            Ok(())
        }
    }
}

fn run_solve_command(
    word: &str,
    verbose: bool,
    dictionary: &Dictionary,
    policy: SearchPolicy,
) -> Result<()> {
    let config = SolveConfig::new(word.to_string());
    let report = solve_word(&config, dictionary, policy).map_err(|e| anyhow::anyhow!(e))?;

    print_solve_report(&report, verbose);
    Ok(())
}

fn run_rate_command(word: &str, dictionary: &Dictionary) -> Result<()> {
    let rating = rate_word(word, dictionary).map_err(|e| anyhow::anyhow!(e))?;
    print_rating(&rating);
    Ok(())
}

fn run_eval_command(
    dictionary: &Dictionary,
    policy: SearchPolicy,
    limit: Option<usize>,
    sample: Option<usize>,
) {
    if let Some(n) = sample {
        println!("Evaluating a random sample of {n} words...");
    } else if let Some(n) = limit {
        println!("Evaluating the first {n} words...");
    } else {
        println!("Evaluating every word in the list...");
    }

    let options = EvalOptions {
        limit,
        sample,
        quiet: false,
    };
    let report = run_eval(dictionary, policy, &options);
    print_eval_report(&report);
}

fn run_play_command(dictionary: &Dictionary, policy: SearchPolicy) -> Result<()> {
    use wordle_minimax::interactive::{App, run_tui};

    let app = App::new(dictionary, policy);
    run_tui(app)
}
