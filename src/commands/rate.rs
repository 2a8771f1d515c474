//! Word rating command
//!
//! Scores one probe word by the split it forces on the dictionary.

use crate::core::Word;
use crate::solver::minimax::feedback_groups;
use crate::wordlists::Dictionary;

/// How a word splits the current dictionary
pub struct WordRating {
    pub word: Word,
    /// Words the probe is scored against
    pub total_candidates: usize,
    /// Largest candidate group left under any one feedback
    pub worst_case: usize,
    /// Number of distinct feedback lines the probe can earn
    pub groups: usize,
    /// Whether the probe itself is a dictionary word
    pub in_dictionary: bool,
}

/// Rate a word's worst-case split against the dictionary
///
/// The probe does not have to be a dictionary word; any well-formed word
/// can be scored, and [`WordRating::in_dictionary`] records whether it
/// could also be the answer.
///
/// # Errors
///
/// Returns an error if the word is not five lowercase ASCII letters.
pub fn rate_word(text: &str, dictionary: &Dictionary) -> Result<WordRating, String> {
    let word = Word::new(text).map_err(|e| format!("Invalid word: {e}"))?;

    let candidates = dictionary.words();
    let groups = feedback_groups(&word, candidates);
    let worst_case = groups.values().max().copied().unwrap_or(0);

    Ok(WordRating {
        in_dictionary: dictionary.contains(&word),
        total_candidates: candidates.len(),
        worst_case,
        groups: groups.len(),
        word,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dictionary(texts: &[&str]) -> Dictionary {
        Dictionary::from_texts(texts.iter().copied()).unwrap()
    }

    #[test]
    fn rate_counts_groups_and_worst_case() {
        let dict = dictionary(&["slate", "irate", "crate", "grate"]);

        // CRANE splits the four words into three feedback lines; IRATE
        // and GRATE share one.
        let rating = rate_word("crane", &dict).unwrap();

        assert_eq!(rating.total_candidates, 4);
        assert_eq!(rating.worst_case, 2);
        assert_eq!(rating.groups, 3);
        assert!(!rating.in_dictionary);
    }

    #[test]
    fn rate_dictionary_member() {
        let dict = dictionary(&["slate", "irate", "crate", "grate"]);

        // SLATE only separates itself; the other three answer `--GGG`
        let rating = rate_word("slate", &dict).unwrap();

        assert!(rating.in_dictionary);
        assert_eq!(rating.worst_case, 3);
        assert_eq!(rating.groups, 2);
    }

    #[test]
    fn rate_rejects_malformed_words() {
        let dict = dictionary(&["slate", "irate"]);

        assert!(rate_word("abc", &dict).is_err());
        assert!(rate_word("abcdef", &dict).is_err());
    }

    #[test]
    fn worst_case_never_exceeds_the_field() {
        let dict = dictionary(&["crane", "slate", "irate", "trace"]);

        let rating = rate_word("zzzzz", &dict).unwrap();
        assert!(rating.worst_case <= rating.total_candidates);
        // A blind probe leaves everything in one group
        assert_eq!(rating.worst_case, 4);
        assert_eq!(rating.groups, 1);
    }
}
