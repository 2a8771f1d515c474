//! Worst-case split calculation
//!
//! Given a guess and the surviving candidates, computes the size of the
//! largest group of candidates sharing one feedback, i.e. how many words
//! could still remain in the worst case after playing that guess.

use crate::core::{Feedback, Word};
use rustc_hash::FxHashMap;

/// Calculate the worst-case number of candidates remaining after a guess
///
/// Every candidate is a possible answer; each would hand the guess some
/// feedback, and candidates sharing that feedback survive together. The
/// worst case is the largest such group.
///
/// # Examples
/// ```
/// use wordle_minimax::core::Word;
/// use wordle_minimax::solver::minimax::worst_case_remaining;
///
/// let guess = Word::new("crane").unwrap();
/// let candidates = vec![
///     Word::new("slate").unwrap(),
///     Word::new("irate").unwrap(),
/// ];
///
/// // SLATE and IRATE answer CRANE with different feedback, so either
/// // way a single candidate remains.
/// assert_eq!(worst_case_remaining(&guess, &candidates), 1);
/// ```
#[must_use]
pub fn worst_case_remaining(guess: &Word, candidates: &[Word]) -> usize {
    if candidates.is_empty() {
        return 0;
    }

    let groups = feedback_groups(guess, candidates);

    groups.values().max().copied().unwrap_or(0)
}

/// Group candidates by the feedback they would produce for the guess
///
/// Each entry maps a feedback to the number of candidates that would
/// earn it. The map is never empty when the candidate list is not, and
/// its values always sum to the candidate count.
#[must_use]
pub fn feedback_groups(guess: &Word, candidates: &[Word]) -> FxHashMap<Feedback, usize> {
    let mut counts = FxHashMap::default();

    for candidate in candidates {
        let feedback = Feedback::simulate(guess, candidate);
        *counts.entry(feedback).or_insert(0) += 1;
    }

    counts
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn worst_case_perfect_split() {
        let guess = Word::new("slate").unwrap();
        let candidates = words(&["slate", "zzzzz"]);

        // One candidate answers all-correct, the other all-absent
        assert_eq!(worst_case_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn worst_case_all_same_feedback() {
        let guess = Word::new("zzzzz").unwrap();
        let candidates = words(&["aaaaa", "bbbbb", "ccccc"]);

        // Every candidate answers all-absent, so nothing is ruled out
        assert_eq!(worst_case_remaining(&guess, &candidates), 3);
    }

    #[test]
    fn worst_case_skewed_distribution() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        // IRATE and GRATE share one feedback; SLATE and CRATE each get
        // their own, so the largest group has two members.
        assert_eq!(worst_case_remaining(&guess, &candidates), 2);
    }

    #[test]
    fn worst_case_empty_candidates() {
        let guess = Word::new("crane").unwrap();

        assert_eq!(worst_case_remaining(&guess, &[]), 0);
    }

    #[test]
    fn worst_case_single_candidate() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate"]);

        assert_eq!(worst_case_remaining(&guess, &candidates), 1);
    }

    #[test]
    fn worst_case_never_exceeds_candidate_count() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "trace"]);

        assert!(worst_case_remaining(&guess, &candidates) <= candidates.len());
    }

    #[test]
    fn group_sizes_cover_every_candidate() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "crate", "geese", "llama"]);

        let groups = feedback_groups(&guess, &candidates);
        assert_eq!(groups.values().sum::<usize>(), candidates.len());
    }

    #[test]
    fn groups_are_distinct_feedback_lines() {
        let guess = Word::new("crane").unwrap();
        let candidates = words(&["slate", "irate", "crate", "grate"]);

        // IRATE and GRATE collapse into one group, so four candidates
        // split into three distinct feedback lines.
        let groups = feedback_groups(&guess, &candidates);
        assert_eq!(groups.len(), 3);
    }

    #[test]
    fn splitting_guesses_beat_blind_guesses() {
        let candidates = words(&["aaaaa", "bbbbb"]);

        // ZZZZZ cannot tell the candidates apart; AAAAA always can
        let blind = Word::new("zzzzz").unwrap();
        let probing = Word::new("aaaaa").unwrap();

        assert_eq!(worst_case_remaining(&blind, &candidates), 2);
        assert_eq!(worst_case_remaining(&probing, &candidates), 1);
    }
}
