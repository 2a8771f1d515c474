//! Wordle Minimax
//!
//! An interactive Wordle assistant that picks guesses by minimizing the
//! worst-case number of surviving candidates.
//!
//! # Quick Start
//!
//! ```rust
//! use wordle_minimax::core::{Feedback, Word};
//!
//! // Create words
//! let guess = Word::new("crane").unwrap();
//! let answer = Word::new("slate").unwrap();
//!
//! // Simulate the feedback Wordle would report
//! let feedback = Feedback::simulate(&guess, &answer);
//! assert_eq!(feedback.letters(), "--G-G");
//! ```

// Core domain types
pub mod core;

// Solving algorithms
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
