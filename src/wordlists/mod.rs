//! Word lists
//!
//! Provides the embedded default word list compiled into the binary and the
//! validated `Dictionary` type sessions borrow.

mod embedded;
mod loader;

pub use embedded::{WORDS, WORDS_COUNT};
pub use loader::{Dictionary, LoadError};
