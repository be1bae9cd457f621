use crate::cipher::Cipher;
use std::collections::HashSet;

/// Set of distinct lowercase word tokens.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Vocabulary {
    words: HashSet<String>,
}

impl Vocabulary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Distinct whitespace-delimited tokens of `text`.
    pub fn from_text(text: &str) -> Self {
        text.split_whitespace().collect()
    }

    pub fn insert(&mut self, word: &str) -> bool {
        self.words.insert(word.to_string())
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    /// Fraction of the decrypted form of `ciphertext_vocab` found in `self`.
    ///
    /// Tokens are decrypted one by one and deduplicated before counting, so
    /// two cipher words collapsing onto the same plaintext count once.
    /// Returns 0.0 for an empty ciphertext vocabulary.
    pub fn overlap<C: Cipher>(&self, cipher: &C, ciphertext_vocab: &Vocabulary) -> f64 {
        let decrypted: HashSet<String> = ciphertext_vocab.iter().map(|w| cipher.decrypt(w)).collect();
        if decrypted.is_empty() {
            return 0.0;
        }
        let known = decrypted.iter().filter(|w| self.contains(w)).count();
        known as f64 / decrypted.len() as f64
    }
}

impl<'a> FromIterator<&'a str> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().map(str::to_string).collect(),
        }
    }
}

impl FromIterator<String> for Vocabulary {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self {
            words: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cipher::SubstitutionCipher;

    #[test]
    fn test_from_text_dedups() {
        let v = Vocabulary::from_text("the cat and the hat");
        assert_eq!(v.len(), 4);
        assert!(v.contains("hat"));
    }

    #[test]
    fn test_overlap_identity() {
        let english = Vocabulary::from_text("the cat sat on the mat");
        let cipher_vocab = Vocabulary::from_text("cat mat dog");
        let identity = SubstitutionCipher::english(crate::alphabet::ENGLISH).unwrap();
        let frac = english.overlap(&identity, &cipher_vocab);
        assert!((frac - 2.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_overlap_decrypts_tokens() {
        // shift-by-one key: decrypt maps 'a' -> 'b', 'b' -> 'c', ...
        let c = SubstitutionCipher::english("bcdefghijklmnopqrstuvwxyza").unwrap();
        let english = Vocabulary::from_text("ifmmp");
        let cipher_vocab = Vocabulary::from_text("hello");
        assert_eq!(english.overlap(&c, &cipher_vocab), 1.0);
    }

    #[test]
    fn test_overlap_empty_is_zero() {
        let english = Vocabulary::from_text("a b c");
        let identity = SubstitutionCipher::english(crate::alphabet::ENGLISH).unwrap();
        assert_eq!(english.overlap(&identity, &Vocabulary::new()), 0.0);
    }
}
