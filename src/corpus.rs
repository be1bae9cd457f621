// Raw text preparation. Everything the search consumes goes through here
// first: lowercase ASCII letters only, no whitespace.
use crate::vocab::Vocabulary;

/// Drops every non-letter and lowercases the rest.
pub fn clean(content: &str) -> String {
    content
        .chars()
        .filter(char::is_ascii_alphabetic)
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Cleans `content` and also returns its vocabulary.
///
/// Non-letters become word boundaries before splitting, so "don't" yields the
/// tokens "don" and "t", and the cleaned text is the concatenation of all
/// tokens.
pub fn clean_with_vocabulary(content: &str) -> (String, Vocabulary) {
    let spaced: String = content
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                c.to_ascii_lowercase()
            } else {
                ' '
            }
        })
        .collect();

    let vocab = Vocabulary::from_text(&spaced);
    let cleaned = spaced.split_whitespace().collect::<String>();
    (cleaned, vocab)
}
