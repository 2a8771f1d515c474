//! Per-game session state machine
//!
//! A session borrows an immutable dictionary and walks
//! `Suggesting → AwaitingFeedback → (Solved | Suggesting | Exhausted)`.
//! Each recorded round replaces the candidate set with its filtered
//! successor; nothing is edited in place, so `undo` can rebuild any prefix by
//! replaying the remaining rounds from the dictionary.

use super::minimax::{SuggestError, select_guess};
use super::{CancelFlag, SearchPolicy};
use crate::core::{Constraint, Feedback, FeedbackContradiction, Word};
use std::fmt;

/// Session lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    /// Ready to propose a guess
    Suggesting,
    /// A suggestion is out; feedback has not been recorded yet
    AwaitingFeedback,
    /// The answer is pinned down (terminal)
    Solved,
    /// Every candidate was eliminated (terminal)
    Exhausted,
}

impl fmt::Display for SessionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Suggesting => "suggesting",
            Self::AwaitingFeedback => "awaiting feedback",
            Self::Solved => "solved",
            Self::Exhausted => "exhausted",
        };
        write!(f, "{name}")
    }
}

/// One recorded round of play
#[derive(Debug, Clone)]
pub struct Round {
    guess: Word,
    feedback: Feedback,
    candidates_before: usize,
    candidates_after: usize,
}

impl Round {
    /// The guess that was played
    #[inline]
    #[must_use]
    pub const fn guess(&self) -> &Word {
        &self.guess
    }

    /// The feedback the guess earned
    #[inline]
    #[must_use]
    pub const fn feedback(&self) -> Feedback {
        self.feedback
    }

    /// Candidate count before this round's filtering
    #[inline]
    #[must_use]
    pub const fn candidates_before(&self) -> usize {
        self.candidates_before
    }

    /// Candidate count after this round's filtering
    #[inline]
    #[must_use]
    pub const fn candidates_after(&self) -> usize {
        self.candidates_after
    }
}

/// A proposed guess with its worst-case metric
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Suggestion {
    pub word: Word,
    /// Candidates that could remain under the least helpful feedback
    pub worst_case: usize,
}

/// What recording a round did to the session
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundOutcome {
    /// Exactly one candidate remains; it must be the answer
    Solved(Word),
    /// More than one candidate remains
    Continue { remaining: usize },
}

/// Error type for session operations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    /// The session already reached a terminal state
    Finished(SessionState),
    /// Feedback no answer could have produced for its guess
    Contradictory(FeedbackContradiction),
    /// Filtering eliminated every candidate in the given round (1-based)
    InconsistentFeedback { round: usize },
    /// The suggestion search was cancelled
    Cancelled,
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Finished(state) => write!(f, "The session is already {state}"),
            Self::Contradictory(contradiction) => write!(f, "{contradiction}"),
            Self::InconsistentFeedback { round } => {
                write!(
                    f,
                    "No dictionary word is consistent with all feedback after round {round}"
                )
            }
            Self::Cancelled => write!(f, "The suggestion search was cancelled"),
        }
    }
}

impl std::error::Error for SessionError {}

/// State for one assisted game over a borrowed dictionary
pub struct Session<'a> {
    dictionary: &'a [Word],
    policy: SearchPolicy,
    candidates: Vec<Word>,
    rounds: Vec<Round>,
    state: SessionState,
}

impl<'a> Session<'a> {
    /// Start a session with every dictionary word as a candidate
    ///
    /// An empty dictionary yields an immediately exhausted session.
    #[must_use]
    pub fn new(dictionary: &'a [Word], policy: SearchPolicy) -> Self {
        let candidates = dictionary.to_vec();
        let state = if candidates.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::Suggesting
        };

        Self {
            dictionary,
            policy,
            candidates,
            rounds: Vec::new(),
            state,
        }
    }

    /// Current lifecycle state
    #[inline]
    #[must_use]
    pub const fn state(&self) -> SessionState {
        self.state
    }

    /// Words still consistent with every recorded round, in dictionary order
    #[inline]
    #[must_use]
    pub fn candidates(&self) -> &[Word] {
        &self.candidates
    }

    /// All recorded rounds, oldest first
    #[inline]
    #[must_use]
    pub fn rounds(&self) -> &[Round] {
        &self.rounds
    }

    /// The answer, once the session is solved
    #[must_use]
    pub fn solution(&self) -> Option<&Word> {
        match self.state {
            SessionState::Solved => self.candidates.first(),
            _ => None,
        }
    }

    /// Propose the guess minimizing the worst-case remaining candidates
    ///
    /// A lone candidate is returned directly with worst case 1; in the
    /// `Solved` state that is the pinned answer. The pool is resolved by the
    /// session policy. On success the session moves to `AwaitingFeedback`; a
    /// cancelled search leaves the state untouched.
    ///
    /// # Errors
    /// Returns [`SessionError::InconsistentFeedback`] when no candidates
    /// remain and [`SessionError::Cancelled`] when the flag was set
    /// mid-search.
    pub fn suggest(&mut self, cancel: Option<&CancelFlag>) -> Result<Suggestion, SessionError> {
        match self.state {
            SessionState::Exhausted => Err(SessionError::InconsistentFeedback {
                round: self.rounds.len(),
            }),
            SessionState::Solved => match self.candidates.first() {
                Some(word) => Ok(Suggestion {
                    word: word.clone(),
                    worst_case: 1,
                }),
                None => Err(SessionError::InconsistentFeedback {
                    round: self.rounds.len(),
                }),
            },
            SessionState::Suggesting | SessionState::AwaitingFeedback => {
                let pool = self.policy.pool(self.dictionary, &self.candidates);
                let (word, worst_case) =
                    select_guess(pool, &self.candidates, cancel).map_err(|err| match err {
                        SuggestError::Cancelled => SessionError::Cancelled,
                        SuggestError::NoCandidates | SuggestError::EmptyPool => {
                            SessionError::InconsistentFeedback {
                                round: self.rounds.len(),
                            }
                        }
                    })?;

                let suggestion = Suggestion {
                    word: word.clone(),
                    worst_case,
                };
                self.state = SessionState::AwaitingFeedback;
                Ok(suggestion)
            }
        }
    }

    /// Record a played guess and its observed feedback
    ///
    /// The guess does not have to be the last suggestion, or a dictionary
    /// word at all; the operator may have played anything. Feedback is
    /// checked for self-contradiction first (the state is left untouched on
    /// that error), then the candidate set is replaced by its consistent
    /// subsequence, preserving dictionary order.
    ///
    /// # Errors
    /// Returns [`SessionError::Finished`] in a terminal state,
    /// [`SessionError::Contradictory`] for feedback no answer could produce,
    /// and [`SessionError::InconsistentFeedback`] when filtering leaves
    /// nothing (the session then moves to `Exhausted`).
    pub fn record(
        &mut self,
        guess: &Word,
        feedback: Feedback,
    ) -> Result<RoundOutcome, SessionError> {
        match self.state {
            SessionState::Solved | SessionState::Exhausted => {
                return Err(SessionError::Finished(self.state));
            }
            SessionState::Suggesting | SessionState::AwaitingFeedback => {}
        }

        feedback
            .check_against(guess)
            .map_err(SessionError::Contradictory)?;

        let constraint = Constraint::new(guess.clone(), feedback);
        let candidates_before = self.candidates.len();
        let survivors: Vec<Word> = self
            .candidates
            .iter()
            .filter(|candidate| constraint.permits(candidate))
            .cloned()
            .collect();
        let candidates_after = survivors.len();

        self.rounds.push(Round {
            guess: guess.clone(),
            feedback,
            candidates_before,
            candidates_after,
        });
        self.candidates = survivors;

        if candidates_after == 0 {
            self.state = SessionState::Exhausted;
            return Err(SessionError::InconsistentFeedback {
                round: self.rounds.len(),
            });
        }

        if candidates_after == 1 {
            self.state = SessionState::Solved;
            return Ok(RoundOutcome::Solved(self.candidates[0].clone()));
        }

        self.state = SessionState::Suggesting;
        Ok(RoundOutcome::Continue {
            remaining: candidates_after,
        })
    }

    /// Take back the most recent round
    ///
    /// Rebuilds the candidate set by replaying the remaining rounds from the
    /// dictionary, then returns the popped round. Returns `None` when no
    /// round has been recorded.
    pub fn undo(&mut self) -> Option<Round> {
        let popped = self.rounds.pop()?;

        let mut candidates = self.dictionary.to_vec();
        for round in &self.rounds {
            let constraint = Constraint::new(round.guess.clone(), round.feedback);
            candidates.retain(|candidate| constraint.permits(candidate));
        }

        self.candidates = candidates;
        self.state = if self.candidates.is_empty() {
            SessionState::Exhausted
        } else {
            SessionState::Suggesting
        };

        Some(popped)
    }
}
