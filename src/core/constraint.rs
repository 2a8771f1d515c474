//! Round constraints
//!
//! A constraint pairs a played guess with its observed feedback. A candidate
//! stays consistent when replaying the guess against it would reproduce the
//! observed feedback exactly. Deriving consistency from simulation keeps all
//! duplicate-letter counting in one place.

use super::{Feedback, Word};

/// One round's guess plus the feedback it earned
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constraint {
    guess: Word,
    feedback: Feedback,
}

impl Constraint {
    /// Pair a guess with its observed feedback
    #[inline]
    #[must_use]
    pub const fn new(guess: Word, feedback: Feedback) -> Self {
        Self { guess, feedback }
    }

    /// The guess this constraint was derived from
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The observed feedback
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Check whether a candidate could still be the answer
    ///
    /// True exactly when guessing against the candidate would have produced
    /// the observed feedback.
    #[inline]
    #[must_use]
    pub fn permits(&self, candidate: &Word) -> bool {
        Feedback::simulate(&self.guess, candidate) == self.feedback
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn word(text: &str) -> Word {
        Word::new(text).unwrap()
    }

    #[test]
    fn permits_the_true_answer() {
        let guess = word("speed");
        let answer = word("erase");
        let constraint = Constraint::new(guess.clone(), Feedback::simulate(&guess, &answer));

        assert!(constraint.permits(&answer));
    }

    #[test]
    fn rejects_words_with_different_feedback() {
        // SPEED vs ERASE yields an S present; EAGLE has no S at all.
        let guess = word("speed");
        let constraint = Constraint::new(guess.clone(), Feedback::simulate(&guess, &word("erase")));

        assert!(!constraint.permits(&word("eagle")));
    }

    #[test]
    fn all_correct_permits_only_the_guess_itself() {
        let guess = word("crane");
        let constraint = Constraint::new(guess.clone(), Feedback::CORRECT);

        assert!(constraint.permits(&guess));
        assert!(!constraint.permits(&word("crate")));
        assert!(!constraint.permits(&word("slate")));
    }

    #[test]
    fn duplicate_letters_counted_exactly() {
        // ERASE vs SPEED marks the first guessed E present and the second
        // absent, so candidates with two E's in compatible spots are out.
        let guess = word("erase");
        let constraint = Constraint::new(guess.clone(), Feedback::simulate(&guess, &word("speed")));

        assert!(constraint.permits(&word("speed")));
        assert!(!constraint.permits(&word("geese")));
    }
}
