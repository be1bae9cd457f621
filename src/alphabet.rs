use crate::error::{CfResult, CipherForgeError};
use std::collections::HashSet;
use std::fmt;

pub const ENGLISH: &str = "abcdefghijklmnopqrstuvwxyz";

/// An ordered set of distinct symbols. Cipher keys are permutations of it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Alphabet {
    symbols: Vec<char>,
}

impl Alphabet {
    pub fn new(symbols: &str) -> CfResult<Self> {
        let symbols: Vec<char> = symbols.chars().collect();
        if symbols.is_empty() {
            return Err(CipherForgeError::InvalidAlphabet(
                "alphabet is empty".to_string(),
            ));
        }

        let mut seen = HashSet::with_capacity(symbols.len());
        for &c in &symbols {
            if !seen.insert(c) {
                return Err(CipherForgeError::InvalidAlphabet(format!(
                    "symbol '{}' appears more than once",
                    c
                )));
            }
        }

        Ok(Self { symbols })
    }

    /// The lowercase latin alphabet a-z.
    pub fn english() -> Self {
        Self {
            symbols: ENGLISH.chars().collect(),
        }
    }

    pub fn symbols(&self) -> &[char] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, c: char) -> bool {
        self.symbols.contains(&c)
    }

    pub fn as_string(&self) -> String {
        self.symbols.iter().collect()
    }
}

impl Default for Alphabet {
    fn default() -> Self {
        Self::english()
    }
}

impl fmt::Display for Alphabet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_has_26_symbols() {
        let a = Alphabet::english();
        assert_eq!(a.len(), 26);
        assert_eq!(a.symbols()[0], 'a');
        assert_eq!(a.symbols()[25], 'z');
    }

    #[test]
    fn test_duplicate_symbols_rejected() {
        let err = Alphabet::new("abca").unwrap_err();
        assert!(matches!(err, CipherForgeError::InvalidAlphabet(_)));
    }

    #[test]
    fn test_empty_rejected() {
        assert!(Alphabet::new("").is_err());
    }
}
