//! Minimax guess selection
//!
//! Scores every pool word by its worst-case split over the candidates, in
//! parallel, then takes the minimum under a total ordering: fewest remaining
//! first, candidate words before outside words, alphabetical last. The key is
//! total, so the result never depends on thread scheduling.

use super::calculator::worst_case_remaining;
use crate::core::Word;
use crate::solver::CancelFlag;
use rayon::prelude::*;
use rustc_hash::FxHashSet;
use std::fmt;

/// Error type for a failed guess selection
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SuggestError {
    /// Every word has been eliminated; some earlier feedback must be wrong
    NoCandidates,
    /// No words to choose a guess from
    EmptyPool,
    /// The cancel flag was set while scoring
    Cancelled,
}

impl fmt::Display for SuggestError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoCandidates => {
                write!(f, "No candidates remain; earlier feedback was inconsistent")
            }
            Self::EmptyPool => write!(f, "The guess pool is empty"),
            Self::Cancelled => write!(f, "The search was cancelled"),
        }
    }
}

impl std::error::Error for SuggestError {}

/// Select the guess minimizing the worst-case remaining candidates
///
/// Ties go first to words that are themselves still candidates (they can win
/// outright), then to the alphabetically smallest word.
///
/// A lone candidate is returned directly without scanning the pool: guessing
/// it wins, and no other guess can leave fewer than one word.
///
/// # Errors
/// Returns [`SuggestError::NoCandidates`] if `candidates` is empty,
/// [`SuggestError::EmptyPool`] if there are candidates to split but no pool
/// words to do it with, and [`SuggestError::Cancelled`] if the flag was set
/// mid-search.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::select_guess;
///
/// let pool = vec![Word::new("aaaaa").unwrap(), Word::new("crane").unwrap()];
/// let candidates = vec![Word::new("slate").unwrap(), Word::new("irate").unwrap()];
///
/// let (best, worst) = select_guess(&pool, &candidates, None).unwrap();
/// assert_eq!(best.text(), "crane");
/// assert_eq!(worst, 1);
/// ```
pub fn select_guess<'a>(
    pool: &'a [Word],
    candidates: &'a [Word],
    cancel: Option<&CancelFlag>,
) -> Result<(&'a Word, usize), SuggestError> {
    if candidates.is_empty() {
        return Err(SuggestError::NoCandidates);
    }

    if let [only] = candidates {
        return Ok((only, 1));
    }

    let candidate_set: FxHashSet<&Word> = candidates.iter().collect();

    let scored: Result<Vec<(&Word, usize)>, SuggestError> = pool
        .par_iter()
        .map(|guess| {
            if cancel.is_some_and(CancelFlag::is_cancelled) {
                return Err(SuggestError::Cancelled);
            }
            Ok((guess, worst_case_remaining(guess, candidates)))
        })
        .collect();

    scored?
        .into_iter()
        .min_by_key(|&(guess, worst)| (worst, !candidate_set.contains(guess), guess.text()))
        .ok_or(SuggestError::EmptyPool)
}
