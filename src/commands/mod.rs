//! Command implementations

pub mod assist;
pub mod eval;
pub mod rate;
pub mod solve;

pub use assist::{EntryMode, run_assist};
pub use eval::{EvalOptions, EvalReport, run_eval};
pub use rate::{WordRating, rate_word};
pub use solve::{SolveConfig, SolveReport, SolveStep, solve_word};

/// Rounds a real game allows
pub const ROUND_BUDGET: usize = 6;
