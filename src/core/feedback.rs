//! Feedback simulation and representation
//!
//! Feedback for a guess is five marks, one per position:
//! - `Correct`: the letter is in this exact position
//! - `Present`: the letter is elsewhere in the answer
//! - `Absent`: no unaccounted copy of the letter remains
//!
//! Simulation uses a per-letter remaining-count pool so duplicate letters are
//! capped exactly the way the game caps them: exact matches consume the pool
//! first, then misplaced letters consume what remains, left to right.

use super::{WORD_LEN, Word};
use std::fmt;

/// A single positional mark
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mark {
    /// Right letter, right position
    Correct,
    /// Right letter, wrong position
    Present,
    /// Letter count exhausted (or letter missing entirely)
    Absent,
}

impl Mark {
    /// Compact single-character form: `G`, `Y`, or `-`
    #[inline]
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Correct => 'G',
            Self::Present => 'Y',
            Self::Absent => '-',
        }
    }

    /// Emoji tile form
    #[inline]
    #[must_use]
    pub const fn emoji(self) -> char {
        match self {
            Self::Correct => '🟩',
            Self::Present => '🟨',
            Self::Absent => '⬜',
        }
    }

    /// Lowercase name for use in messages
    #[inline]
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Correct => "correct",
            Self::Present => "present",
            Self::Absent => "absent",
        }
    }
}

/// Feedback for one guess: five marks, one per position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Feedback([Mark; WORD_LEN]);

/// Error type for malformed compact feedback strings
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedbackParseError {
    WrongLength(usize),
    UnknownSymbol(char),
}

impl fmt::Display for FeedbackParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::WrongLength(len) => {
                write!(f, "Feedback must be exactly {WORD_LEN} symbols, got {len}")
            }
            Self::UnknownSymbol(symbol) => {
                write!(f, "Unrecognized feedback symbol '{symbol}' (use G, Y, or -)")
            }
        }
    }
}

impl std::error::Error for FeedbackParseError {}

/// Error type for malformed per-color report rows
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportError {
    RowLength { row: Mark, len: usize },
    BadSymbol { row: Mark, symbol: char },
    PositionConflict(usize),
    PositionMissing(usize),
    LetterMismatch { position: usize, expected: char, found: char },
}

impl fmt::Display for ReportError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::RowLength { row, len } => {
                write!(
                    f,
                    "The {} row must be exactly {WORD_LEN} symbols, got {len}",
                    row.label()
                )
            }
            Self::BadSymbol { row, symbol } => {
                write!(
                    f,
                    "The {} row may only contain letters and '_' blanks, found '{symbol}'",
                    row.label()
                )
            }
            Self::PositionConflict(position) => {
                write!(f, "Position {} is reported in more than one row", position + 1)
            }
            Self::PositionMissing(position) => {
                write!(f, "Position {} has no mark in any row", position + 1)
            }
            Self::LetterMismatch {
                position,
                expected,
                found,
            } => {
                write!(
                    f,
                    "Row letter '{found}' at position {} does not match guess letter '{expected}'",
                    position + 1
                )
            }
        }
    }
}

impl std::error::Error for ReportError {}

/// Error type for feedback no answer could produce
///
/// Simulation hands out `Present` marks for a letter left to right until the
/// answer's remaining count runs out, so once an occurrence is `Absent`, every
/// later non-`Correct` occurrence of the same letter must be `Absent` too.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedbackContradiction {
    pub letter: char,
    pub absent_at: usize,
    pub present_at: usize,
}

impl fmt::Display for FeedbackContradiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Letter '{}' is marked present at position {} but absent at earlier position {}",
            self.letter,
            self.present_at + 1,
            self.absent_at + 1
        )
    }
}

impl std::error::Error for FeedbackContradiction {}

impl Feedback {
    /// All marks `Correct` (the guess is the answer)
    pub const CORRECT: Self = Self([Mark::Correct; WORD_LEN]);

    /// Create feedback from explicit marks
    #[inline]
    #[must_use]
    pub const fn new(marks: [Mark; WORD_LEN]) -> Self {
        Self(marks)
    }

    /// Get all five marks
    #[inline]
    #[must_use]
    pub const fn marks(&self) -> &[Mark; WORD_LEN] {
        &self.0
    }

    /// Get the mark at a specific position (0-4)
    ///
    /// # Panics
    /// Panics if position >= 5
    #[inline]
    #[must_use]
    pub const fn mark_at(self, position: usize) -> Mark {
        self.0[position]
    }

    /// Check if every mark is `Correct`
    #[inline]
    #[must_use]
    pub fn is_solved(self) -> bool {
        self == Self::CORRECT
    }

    /// Simulate the feedback when `guess` is played and `answer` is the target
    ///
    /// Implements the game's exact duplicate-letter rules:
    /// 1. First pass: exact position matches become `Correct` and consume the
    ///    answer's per-letter pool
    /// 2. Second pass: left to right, misplaced letters become `Present` while
    ///    the pool lasts; the rest stay `Absent`
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::{Feedback, Word};
    ///
    /// let guess = Word::new("crane").unwrap();
    /// let answer = Word::new("slate").unwrap();
    /// let feedback = Feedback::simulate(&guess, &answer);
    ///
    /// // C and R miss, A and E land, N misses
    /// assert_eq!(feedback, Feedback::parse("--G-G").unwrap());
    /// ```
    #[must_use]
    pub fn simulate(guess: &Word, answer: &Word) -> Self {
        let mut marks = [Mark::Absent; WORD_LEN];
        let mut pool = [0u8; 26];

        for &letter in answer.chars() {
            pool[usize::from(letter - b'a')] += 1;
        }

        // First pass: exact matches consume the pool
        // Allow: Index needed to access guess[i], answer[i], and set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if guess.chars()[i] == answer.chars()[i] {
                marks[i] = Mark::Correct;
                pool[usize::from(guess.chars()[i] - b'a')] -= 1;
            }
        }

        // Second pass: misplaced letters consume what remains, left to right
        // Allow: Index needed to access guess[i] and check/set marks[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..WORD_LEN {
            if marks[i] == Mark::Correct {
                continue;
            }
            let slot = usize::from(guess.chars()[i] - b'a');
            if pool[slot] > 0 {
                marks[i] = Mark::Present;
                pool[slot] -= 1;
            }
        }

        Self(marks)
    }

    /// Parse feedback from a string like "GY-GY" or "🟩🟨⬜🟩🟨"
    ///
    /// Accepts:
    /// - 'G'/'g'/🟩 for correct
    /// - 'Y'/'y'/🟨 for present
    /// - '-'/'_'/⬜ for absent
    ///
    /// # Errors
    /// Returns `FeedbackParseError` if the string is not exactly five symbols
    /// or contains an unrecognized symbol.
    ///
    /// # Examples
    /// ```
    /// use wordle_minimax::core::Feedback;
    ///
    /// let f1 = Feedback::parse("GY-GY").unwrap();
    /// let f2 = Feedback::parse("🟩🟨⬜🟩🟨").unwrap();
    /// assert_eq!(f1, f2);
    /// ```
    pub fn parse(s: &str) -> Result<Self, FeedbackParseError> {
        let symbols: Vec<char> = s.chars().collect();

        if symbols.len() != WORD_LEN {
            return Err(FeedbackParseError::WrongLength(symbols.len()));
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (i, symbol) in symbols.into_iter().enumerate() {
            marks[i] = match symbol {
                'G' | 'g' | '🟩' => Mark::Correct,
                'Y' | 'y' | '🟨' => Mark::Present,
                '-' | '_' | '⬜' => Mark::Absent,
                other => return Err(FeedbackParseError::UnknownSymbol(other)),
            };
        }

        Ok(Self(marks))
    }

    /// Build feedback from three blank-aware report rows
    ///
    /// Each row mirrors the guess and shows only the letters that earned that
    /// row's mark, with '_' (or '-' or '.') everywhere else. For the guess
    /// `crane` and the rows `__a_e` / `_r___` / `c__n_`, position 2 is
    /// correct-marked `a`, position 4 correct-marked `e`, and so on.
    ///
    /// # Errors
    /// Returns `ReportError` if a row has the wrong length or a bad symbol, a
    /// position is claimed by more than one row or by none, or a row letter
    /// disagrees with the guess.
    pub fn from_reports(
        guess: &Word,
        correct: &str,
        present: &str,
        absent: &str,
    ) -> Result<Self, ReportError> {
        let rows = [
            (Mark::Correct, correct),
            (Mark::Present, present),
            (Mark::Absent, absent),
        ];

        let mut claimed: [Option<Mark>; WORD_LEN] = [None; WORD_LEN];

        for (mark, row) in rows {
            let row = row.to_lowercase();
            let symbols: Vec<char> = row.chars().collect();

            if symbols.len() != WORD_LEN {
                return Err(ReportError::RowLength {
                    row: mark,
                    len: symbols.len(),
                });
            }

            for (i, symbol) in symbols.into_iter().enumerate() {
                match symbol {
                    '_' | '-' | '.' => {}
                    'a'..='z' => {
                        let expected = guess.char_at(i) as char;
                        if symbol != expected {
                            return Err(ReportError::LetterMismatch {
                                position: i,
                                expected,
                                found: symbol,
                            });
                        }
                        if claimed[i].is_some() {
                            return Err(ReportError::PositionConflict(i));
                        }
                        claimed[i] = Some(mark);
                    }
                    other => {
                        return Err(ReportError::BadSymbol {
                            row: mark,
                            symbol: other,
                        });
                    }
                }
            }
        }

        let mut marks = [Mark::Absent; WORD_LEN];
        for (i, slot) in claimed.into_iter().enumerate() {
            match slot {
                Some(mark) => marks[i] = mark,
                None => return Err(ReportError::PositionMissing(i)),
            }
        }

        Ok(Self(marks))
    }

    /// Reject feedback no answer could have produced for `guess`
    ///
    /// For each letter, scanning its non-`Correct` occurrences left to right,
    /// a `Present` after an `Absent` is impossible: an `Absent` means the
    /// answer's remaining count for that letter was already zero.
    ///
    /// # Errors
    /// Returns `FeedbackContradiction` naming the offending letter and the
    /// two positions.
    pub fn check_against(&self, guess: &Word) -> Result<(), FeedbackContradiction> {
        let mut absent_at: [Option<usize>; 26] = [None; 26];

        for (i, mark) in self.0.iter().enumerate() {
            let slot = usize::from(guess.char_at(i) - b'a');
            match mark {
                Mark::Correct => {}
                Mark::Absent => {
                    if absent_at[slot].is_none() {
                        absent_at[slot] = Some(i);
                    }
                }
                Mark::Present => {
                    if let Some(earlier) = absent_at[slot] {
                        return Err(FeedbackContradiction {
                            letter: guess.char_at(i) as char,
                            absent_at: earlier,
                            present_at: i,
                        });
                    }
                }
            }
        }

        Ok(())
    }

    /// Compact letter form like "GY--G"
    #[must_use]
    pub fn letters(self) -> String {
        self.0.into_iter().map(Mark::symbol).collect()
    }

    /// Emoji tile form like "🟩🟨⬜⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        let mut result = String::with_capacity(20);
        for mark in self.0 {
            result.push(mark.emoji());
        }
        result
    }
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letters())
    }
}
