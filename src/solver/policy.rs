//! Guess pool policy
//!
//! A suggestion can draw guesses from the remaining candidates only, or from
//! the whole dictionary. Dictionary-wide search finds better splits but costs
//! a full scan per remaining candidate, so the automatic mode only goes wide
//! once the candidate count has dropped to a crossover size.

use crate::core::Word;

/// Where suggested guesses may come from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GuessUniverse {
    /// Only words still consistent with every round
    CandidatesOnly,
    /// Any dictionary word, consistent or not
    FullDictionary,
    /// Candidates while the field is large, the whole dictionary once small
    Auto,
}

/// Policy resolving the guess pool for one suggestion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchPolicy {
    pub universe: GuessUniverse,
    /// Candidate count at or below which `Auto` searches the whole dictionary
    pub crossover: usize,
}

impl SearchPolicy {
    /// Default `Auto` crossover
    pub const DEFAULT_CROSSOVER: usize = 500;

    /// Restrict guesses to the remaining candidates
    #[must_use]
    pub const fn candidates_only() -> Self {
        Self {
            universe: GuessUniverse::CandidatesOnly,
            crossover: Self::DEFAULT_CROSSOVER,
        }
    }

    /// Always search the whole dictionary
    #[must_use]
    pub const fn full_dictionary() -> Self {
        Self {
            universe: GuessUniverse::FullDictionary,
            crossover: Self::DEFAULT_CROSSOVER,
        }
    }

    /// Switch from candidates to the whole dictionary at `crossover`
    #[must_use]
    pub const fn auto(crossover: usize) -> Self {
        Self {
            universe: GuessUniverse::Auto,
            crossover,
        }
    }

    /// Resolve the guess pool for the current candidate set
    #[must_use]
    pub fn pool<'a>(&self, dictionary: &'a [Word], candidates: &'a [Word]) -> &'a [Word] {
        match self.universe {
            GuessUniverse::CandidatesOnly => candidates,
            GuessUniverse::FullDictionary => dictionary,
            GuessUniverse::Auto => {
                if candidates.len() <= self.crossover {
                    dictionary
                } else {
                    candidates
                }
            }
        }
    }
}

impl Default for SearchPolicy {
    fn default() -> Self {
        Self::auto(Self::DEFAULT_CROSSOVER)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn words(texts: &[&str]) -> Vec<Word> {
        texts.iter().map(|t| Word::new(*t).unwrap()).collect()
    }

    #[test]
    fn default_is_auto() {
        let policy = SearchPolicy::default();
        assert_eq!(policy.universe, GuessUniverse::Auto);
        assert_eq!(policy.crossover, SearchPolicy::DEFAULT_CROSSOVER);
    }

    #[test]
    fn candidates_only_ignores_size() {
        let dictionary = words(&["aback", "crane", "slate", "irate"]);
        let candidates = words(&["crane"]);

        let pool = SearchPolicy::candidates_only().pool(&dictionary, &candidates);
        assert_eq!(pool.len(), 1);
    }

    #[test]
    fn full_dictionary_ignores_size() {
        let dictionary = words(&["aback", "crane", "slate", "irate"]);
        let candidates = words(&["crane"]);

        let pool = SearchPolicy::full_dictionary().pool(&dictionary, &candidates);
        assert_eq!(pool.len(), 4);
    }

    #[test]
    fn auto_switches_at_crossover() {
        let dictionary = words(&["aback", "crane", "slate", "irate", "trace"]);
        let candidates = words(&["crane", "slate", "irate"]);

        // Above the crossover: stay narrow
        let narrow = SearchPolicy::auto(2).pool(&dictionary, &candidates);
        assert_eq!(narrow.len(), candidates.len());

        // At or below the crossover: go wide
        let wide = SearchPolicy::auto(3).pool(&dictionary, &candidates);
        assert_eq!(wide.len(), dictionary.len());
    }
}
