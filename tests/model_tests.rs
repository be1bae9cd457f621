use cipherforge::error::CipherForgeError;
use cipherforge::scorer::model::{disjoint_chunks, sliding_windows, UNSEEN_MASS};
use cipherforge::scorer::{LanguageModel, Scorer};
use rstest::rstest;

#[test]
fn test_repeated_symbol_has_probability_one() {
    let model = LanguageModel::build("aaaa", 2).unwrap();
    assert_eq!(model.total(), 3);
    assert_eq!(model.len(), 1);
    assert_eq!(model.lookup("aa"), Some(0.0));
}

#[rstest]
#[case("", 1)]
#[case("a", 2)]
#[case("ab", 3)]
#[case("abc", 4)]
fn test_corpus_shorter_than_width_fails(#[case] text: &str, #[case] width: usize) {
    match LanguageModel::build(text, width) {
        Err(CipherForgeError::InsufficientCorpus { len, width: w }) => {
            assert_eq!(len, text.len());
            assert_eq!(w, width);
        }
        other => panic!("expected InsufficientCorpus, got {:?}", other),
    }
}

#[test]
fn test_zero_width_fails() {
    assert!(matches!(
        LanguageModel::build("abc", 0),
        Err(CipherForgeError::InvalidNgramWidth(0))
    ));
}

#[rstest]
#[case("thequickbrownfoxjumpsoverthelazydog", 1)]
#[case("thequickbrownfoxjumpsoverthelazydog", 2)]
#[case("thequickbrownfoxjumpsoverthelazydog", 4)]
#[case("abababababab", 3)]
fn test_probabilities_sum_to_one(#[case] text: &str, #[case] width: usize) {
    let model = LanguageModel::build(text, width).unwrap();
    assert_eq!(model.total() as usize, text.len() - width + 1);
    let sum: f64 = model.trained().map(|(_, p)| p.exp2()).sum();
    assert!((sum - 1.0).abs() < 1e-9, "sum was {}", sum);
}

#[test]
fn test_unseen_value_and_memoization() {
    let model = LanguageModel::build("abcabcabcabc", 3).unwrap();
    let expected = (UNSEEN_MASS / model.total() as f64).log2();
    assert_eq!(model.unseen_log_prob(), expected);

    let mut scorer = Scorer::new(model);
    let trained = scorer.model().len();
    let first = scorer.score("zzzzzz");
    assert_eq!(first, 2.0 * expected);
    assert_eq!(scorer.model().memoized(), 1);
    assert_eq!(scorer.model().lookup("zzz"), Some(expected));

    // Same value on the second call; the trained table never grows.
    assert_eq!(scorer.score("zzzzzz"), first);
    assert_eq!(scorer.model().len(), trained);
}

#[test]
fn test_trailing_partial_chunk_is_ignored() {
    let mut scorer = Scorer::new(LanguageModel::build("abcabcabcabc", 3).unwrap());
    let whole = scorer.score("abcabc");
    assert_eq!(scorer.score("abcabcab"), whole);
    assert_eq!(scorer.score("ab"), 0.0);
    assert_eq!(scorer.score(""), 0.0);
}

#[test]
fn test_window_helpers() {
    assert_eq!(
        sliding_windows("abcd", 2).collect::<Vec<_>>(),
        vec!["ab", "bc", "cd"]
    );
    assert_eq!(
        disjoint_chunks("abcde", 2).collect::<Vec<_>>(),
        vec!["ab", "cd"]
    );
}

#[test]
fn test_try_score_rejects_foreign_symbols() {
    let mut scorer = Scorer::new(LanguageModel::build("thecatsat", 2).unwrap());
    assert!(matches!(
        scorer.try_score("the cat"),
        Err(CipherForgeError::Validation(_))
    ));
    assert!(scorer.try_score("thecat").is_ok());
}
