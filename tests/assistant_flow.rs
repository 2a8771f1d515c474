use wordle_minimax::core::{Feedback, Word};
use wordle_minimax::solver::{
    RoundOutcome, SearchPolicy, Session, SessionError, SessionState,
};
use wordle_minimax::wordlists::Dictionary;

fn get_test_words() -> Vec<String> {
    vec![
        "abcde".to_string(),
        "abcdf".to_string(),
        "fghij".to_string(),
        "fghik".to_string(),
    ]
}

/// Every five-letter string over the letters a-e (3125 words)
fn alphabet_soup() -> Vec<String> {
    let letters = ['a', 'b', 'c', 'd', 'e'];
    let mut words = Vec::with_capacity(3125);
    for &a in &letters {
        for &b in &letters {
            for &c in &letters {
                for &d in &letters {
                    for &e in &letters {
                        words.push([a, b, c, d, e].iter().collect());
                    }
                }
            }
        }
    }
    words
}

fn dictionary_from(texts: &[String]) -> Dictionary {
    Dictionary::from_texts(texts.iter().map(String::as_str)).unwrap()
}

fn word(text: &str) -> Word {
    Word::new(text).unwrap()
}

#[test]
fn test_session_starts_with_every_word() {
    let texts = get_test_words();
    let dictionary = dictionary_from(&texts);
    let session = Session::new(dictionary.words(), SearchPolicy::default());

    assert_eq!(session.candidates().len(), texts.len());
    assert_eq!(session.state(), SessionState::Suggesting);
    assert!(session.rounds().is_empty());
}

#[test]
fn test_suggestion_minimizes_worst_case() {
    // "fghij" and "fghik" split the field into singleton groups (the shared
    // 'f' separates "abcde" from "abcdf"); "abcde" and "abcdf" leave the two
    // f-words lumped together. Lexicographic order breaks the tie.
    let dictionary = dictionary_from(&get_test_words());
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    let suggestion = session.suggest(None).unwrap();

    assert_eq!(suggestion.word.text(), "fghij");
    assert_eq!(suggestion.worst_case, 1);
    assert_eq!(session.state(), SessionState::AwaitingFeedback);
}

#[test]
fn test_suggestion_is_deterministic() {
    let dictionary = dictionary_from(&alphabet_soup());

    let mut first = Session::new(dictionary.words(), SearchPolicy::default());
    let mut second = Session::new(dictionary.words(), SearchPolicy::default());

    let a = first.suggest(None).unwrap();
    let b = second.suggest(None).unwrap();

    assert_eq!(a.word, b.word);
    assert_eq!(a.worst_case, b.worst_case);
}

#[test]
fn test_scripted_game_reaches_the_answer() {
    // Answer "edcba". Each all-yellow round keeps exactly the permutations
    // that move every letter somewhere new.
    let dictionary = dictionary_from(&alphabet_soup());
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    let outcome = session
        .record(&word("abcde"), Feedback::parse("YYGYY").unwrap())
        .unwrap();
    assert_eq!(outcome, RoundOutcome::Continue { remaining: 9 });

    let outcome = session
        .record(&word("daceb"), Feedback::parse("YYGYY").unwrap())
        .unwrap();
    assert_eq!(outcome, RoundOutcome::Continue { remaining: 2 });

    let outcome = session
        .record(&word("becad"), Feedback::parse("YYGYY").unwrap())
        .unwrap();
    assert_eq!(outcome, RoundOutcome::Solved(word("edcba")));

    assert_eq!(session.state(), SessionState::Solved);
    assert_eq!(session.solution(), Some(&word("edcba")));
    assert_eq!(session.rounds().len(), 3);

    // A solved session keeps suggesting the pinned answer
    let suggestion = session.suggest(None).unwrap();
    assert_eq!(suggestion.word.text(), "edcba");
    assert_eq!(suggestion.worst_case, 1);
}

#[test]
fn test_candidates_only_shrink() {
    let dictionary = dictionary_from(&alphabet_soup());
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    session
        .record(&word("abcde"), Feedback::parse("YYGYY").unwrap())
        .unwrap();
    session
        .record(&word("daceb"), Feedback::parse("YYGYY").unwrap())
        .unwrap();

    for round in session.rounds() {
        assert!(
            round.candidates_after() <= round.candidates_before(),
            "round grew from {} to {}",
            round.candidates_before(),
            round.candidates_after()
        );
    }
}

#[test]
fn test_contradictory_feedback_exhausts_the_session() {
    let dictionary = dictionary_from(&alphabet_soup());
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    // First round pins 'a' to the front
    session
        .record(&word("abcde"), Feedback::parse("GYYYY").unwrap())
        .unwrap();
    assert_eq!(session.candidates().len(), 9);

    // Second round claims 'a' never appears: no word satisfies both
    let err = session
        .record(&word("abcde"), Feedback::parse("-YYYY").unwrap())
        .unwrap_err();
    assert_eq!(err, SessionError::InconsistentFeedback { round: 2 });
    assert_eq!(session.state(), SessionState::Exhausted);
    assert!(session.candidates().is_empty());

    // An exhausted session refuses to suggest
    assert!(session.suggest(None).is_err());

    // Undo restores the nine survivors and the session keeps playing
    assert!(session.undo().is_some());
    assert_eq!(session.candidates().len(), 9);
    assert_ne!(session.state(), SessionState::Exhausted);
    assert!(session.suggest(None).is_ok());
}

#[test]
fn test_lexicographic_tie_break() {
    // All three words score the same worst case, so the smallest text wins
    let texts = vec![
        "aaaab".to_string(),
        "aaaac".to_string(),
        "aaaad".to_string(),
    ];
    let dictionary = dictionary_from(&texts);
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    let suggestion = session.suggest(None).unwrap();
    assert_eq!(suggestion.word.text(), "aaaab");
    assert_eq!(suggestion.worst_case, 2);
}

#[test]
fn test_lone_candidate_is_suggested_directly() {
    let texts = vec!["crane".to_string()];
    let dictionary = dictionary_from(&texts);
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    let suggestion = session.suggest(None).unwrap();
    assert_eq!(suggestion.word.text(), "crane");
    assert_eq!(suggestion.worst_case, 1);
}

#[test]
fn test_duplicate_letters_score_like_wordle() {
    // Greens consume their copies first, then yellows left to right
    let cases = [
        ("speed", "erase", "Y-YY-"),
        ("erase", "speed", "Y--YY"),
        ("geese", "these", "--GGG"),
        ("crane", "slate", "--G-G"),
    ];

    for (guess, answer, expected) in cases {
        let feedback = Feedback::simulate(&word(guess), &word(answer));
        assert_eq!(
            feedback.letters(),
            expected,
            "{guess} against {answer}"
        );
    }
}

#[test]
fn test_self_simulation_always_solves() {
    for text in ["crane", "speed", "aaaaa", "geese"] {
        let w = word(text);
        assert!(Feedback::simulate(&w, &w).is_solved(), "{text} against itself");
    }
}

#[test]
fn test_replaying_identical_feedback_changes_nothing() {
    let dictionary = dictionary_from(&alphabet_soup());
    let mut session = Session::new(dictionary.words(), SearchPolicy::default());

    session
        .record(&word("abcde"), Feedback::parse("YYGYY").unwrap())
        .unwrap();
    let after_first: Vec<Word> = session.candidates().to_vec();

    // The same guess and feedback again filters nothing further
    let outcome = session
        .record(&word("abcde"), Feedback::parse("YYGYY").unwrap())
        .unwrap();
    assert_eq!(
        outcome,
        RoundOutcome::Continue {
            remaining: after_first.len()
        }
    );
    assert_eq!(session.candidates(), after_first.as_slice());
}
