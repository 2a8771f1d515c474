//! Dictionary construction and loading
//!
//! A `Dictionary` is an ordered, duplicate-free word list validated at
//! construction. Candidate filtering preserves dictionary order, so the
//! order words arrive in is the order they are suggested and listed in.
//! Malformed entries are surfaced with their line number, never silently
//! dropped.

use super::embedded::WORDS;
use crate::core::{Word, WordError};
use rustc_hash::FxHashSet;
use std::fmt;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Error type for dictionary loading
#[derive(Debug)]
pub enum LoadError {
    /// The word list source could not be read
    Io { path: PathBuf, source: io::Error },
    /// An entry is not a valid word (1-based line number)
    InvalidWord {
        line: usize,
        text: String,
        source: WordError,
    },
    /// An entry repeats an earlier word (1-based line number)
    Duplicate { line: usize, text: String },
    /// The source contained no words at all
    Empty,
}

impl fmt::Display for LoadError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "Failed to read {}: {source}", path.display())
            }
            Self::InvalidWord { line, text, source } => {
                write!(f, "Invalid word '{text}' on line {line}: {source}")
            }
            Self::Duplicate { line, text } => {
                write!(f, "Duplicate word '{text}' on line {line}")
            }
            Self::Empty => write!(f, "The word list is empty"),
        }
    }
}

impl std::error::Error for LoadError {}

/// An ordered, duplicate-free list of valid words
#[derive(Debug, Clone)]
pub struct Dictionary {
    words: Vec<Word>,
}

impl Dictionary {
    /// Build a dictionary from already-validated words
    ///
    /// # Errors
    /// Returns `LoadError::Duplicate` on a repeated word and
    /// `LoadError::Empty` when given no words.
    pub fn new(words: Vec<Word>) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }

        let mut seen = FxHashSet::default();
        for (index, word) in words.iter().enumerate() {
            if !seen.insert(word) {
                return Err(LoadError::Duplicate {
                    line: index + 1,
                    text: word.text().to_string(),
                });
            }
        }

        Ok(Self { words })
    }

    /// Build a dictionary from textual entries, skipping blank lines
    ///
    /// Line numbers in errors are 1-based and count blank lines, so they
    /// match the source file.
    ///
    /// # Errors
    /// Returns `LoadError` for an invalid entry, a duplicate, or no entries.
    pub fn from_texts<'s>(texts: impl IntoIterator<Item = &'s str>) -> Result<Self, LoadError> {
        let mut words = Vec::new();
        let mut seen = FxHashSet::default();

        for (index, raw) in texts.into_iter().enumerate() {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                continue;
            }

            let word = Word::new(trimmed).map_err(|source| LoadError::InvalidWord {
                line: index + 1,
                text: trimmed.to_string(),
                source,
            })?;

            if !seen.insert(word.clone()) {
                return Err(LoadError::Duplicate {
                    line: index + 1,
                    text: word.text().to_string(),
                });
            }

            words.push(word);
        }

        if words.is_empty() {
            return Err(LoadError::Empty);
        }

        Ok(Self { words })
    }

    /// Load a dictionary from a newline-delimited file
    ///
    /// # Errors
    /// Returns `LoadError::Io` if the file cannot be read, otherwise the
    /// same errors as [`Dictionary::from_texts`].
    ///
    /// # Examples
    /// ```no_run
    /// use wordle_minimax::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::from_file("data/words.txt").unwrap();
    /// println!("Loaded {} words", dictionary.len());
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, LoadError> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        Self::from_texts(content.lines())
    }

    /// The bundled word list
    ///
    /// # Errors
    /// Returns `LoadError` only if the generated list is malformed, which a
    /// successful build rules out.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::wordlists::Dictionary;
    ///
    /// let dictionary = Dictionary::embedded().unwrap();
    /// assert!(!dictionary.is_empty());
    /// ```
    pub fn embedded() -> Result<Self, LoadError> {
        Self::from_texts(WORDS.iter().copied())
    }

    /// All words, in list order
    #[inline]
    #[must_use]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Number of words
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the dictionary holds no words (never true once constructed)
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Check membership
    #[must_use]
    pub fn contains(&self, word: &Word) -> bool {
        self.words.iter().any(|w| w == word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_texts_preserves_order() {
        let dictionary = Dictionary::from_texts(["slate", "crane", "irate"]).unwrap();

        let texts: Vec<&str> = dictionary.words().iter().map(Word::text).collect();
        assert_eq!(texts, ["slate", "crane", "irate"]);
        assert_eq!(dictionary.len(), 3);
    }

    #[test]
    fn from_texts_normalizes_case() {
        let dictionary = Dictionary::from_texts(["CRANE", "Slate"]).unwrap();

        assert_eq!(dictionary.words()[0].text(), "crane");
        assert_eq!(dictionary.words()[1].text(), "slate");
    }

    #[test]
    fn from_texts_skips_blank_lines_but_counts_them() {
        let dictionary = Dictionary::from_texts(["crane", "", "  ", "slate"]).unwrap();
        assert_eq!(dictionary.len(), 2);

        let err = Dictionary::from_texts(["crane", "", "toolong"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord { line: 3, .. }
        ));
    }

    #[test]
    fn from_texts_rejects_invalid_entries() {
        let err = Dictionary::from_texts(["crane", "sh0rt"]).unwrap_err();
        assert!(matches!(
            err,
            LoadError::InvalidWord { line: 2, .. }
        ));
    }

    #[test]
    fn from_texts_rejects_duplicates() {
        let err = Dictionary::from_texts(["crane", "slate", "CRANE"]).unwrap_err();
        assert!(matches!(err, LoadError::Duplicate { line: 3, .. }));
    }

    #[test]
    fn from_texts_rejects_empty_input() {
        assert!(matches!(
            Dictionary::from_texts(Vec::<&str>::new()),
            Err(LoadError::Empty)
        ));
        assert!(matches!(
            Dictionary::from_texts(["", "  "]),
            Err(LoadError::Empty)
        ));
    }

    #[test]
    fn new_rejects_duplicates() {
        let words = vec![
            Word::new("crane").unwrap(),
            Word::new("crane").unwrap(),
        ];
        assert!(matches!(
            Dictionary::new(words),
            Err(LoadError::Duplicate { line: 2, .. })
        ));
    }

    #[test]
    fn from_file_missing_is_an_io_error() {
        let err = Dictionary::from_file("/nonexistent/words.txt").unwrap_err();
        assert!(matches!(err, LoadError::Io { .. }));
    }

    #[test]
    fn embedded_list_loads() {
        let dictionary = Dictionary::embedded().unwrap();
        assert_eq!(dictionary.len(), crate::wordlists::WORDS_COUNT);
    }

    #[test]
    fn contains_finds_member_words() {
        let dictionary = Dictionary::from_texts(["crane", "slate"]).unwrap();

        assert!(dictionary.contains(&Word::new("crane").unwrap()));
        assert!(!dictionary.contains(&Word::new("irate").unwrap()));
    }
}
