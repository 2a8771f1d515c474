//! Worst-case minimax search
//!
//! Scores guesses by the largest candidate group any feedback could leave
//! behind and picks the guess minimizing that worst case.

mod calculator;
mod selector;

pub use calculator::{feedback_groups, worst_case_remaining};
pub use selector::{SuggestError, select_guess};
