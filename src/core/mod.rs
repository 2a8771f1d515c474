//! Core domain types
//!
//! This module contains the fundamental domain types with zero external
//! dependencies. All types here are pure, testable, and have clear
//! mathematical properties.

mod constraint;
mod feedback;
mod word;

pub use constraint::Constraint;
pub use feedback::{Feedback, FeedbackContradiction, FeedbackParseError, Mark, ReportError};
pub use word::{WORD_LEN, Word, WordError};
