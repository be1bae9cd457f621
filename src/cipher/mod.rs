pub mod export;

use crate::alphabet::Alphabet;
use crate::error::{CfResult, CipherForgeError};
use fnv::{FnvHashMap, FnvHashSet};
use std::fmt;

/// Capability set shared by character-level ciphers.
pub trait Cipher {
    fn encrypt(&self, text: &str) -> String;
    fn decrypt(&self, text: &str) -> String;
    fn key(&self) -> String;
    fn alphabet(&self) -> String;
}

/// Monoalphabetic substitution over a fixed alphabet.
///
/// `key[i]` is paired with `alphabet[i]`. Encryption maps key symbols onto
/// the alphabet, decryption maps alphabet symbols back onto the key. Any
/// character outside the relevant mapping passes through untouched.
#[derive(Debug, Clone)]
pub struct SubstitutionCipher {
    key: Vec<char>,
    alphabet: Vec<char>,
    key_to_alpha: FnvHashMap<char, char>,
    alpha_to_key: FnvHashMap<char, char>,
}

impl SubstitutionCipher {
    pub fn new(key: &str, alphabet: &Alphabet) -> CfResult<Self> {
        Self::from_symbols(key.chars().collect(), alphabet)
    }

    /// Shorthand for a key over the lowercase english alphabet.
    pub fn english(key: &str) -> CfResult<Self> {
        Self::new(key, &Alphabet::english())
    }

    pub fn from_symbols(key: Vec<char>, alphabet: &Alphabet) -> CfResult<Self> {
        if let Some(&stray) = key.iter().find(|&&c| !alphabet.contains(c)) {
            return Err(CipherForgeError::InvalidKey(format!(
                "symbol {:?} is not in alphabet '{}'",
                stray, alphabet
            )));
        }
        let alphabet = alphabet.symbols().to_vec();

        let unique: FnvHashSet<char> = key.iter().copied().collect();
        if unique.len() != alphabet.len() || key.len() != alphabet.len() {
            return Err(CipherForgeError::InvalidKey(format!(
                "'{}' is not a 1-1 mapping onto '{}'",
                key.iter().collect::<String>(),
                alphabet.iter().collect::<String>()
            )));
        }

        let key_to_alpha = key.iter().copied().zip(alphabet.iter().copied()).collect();
        let alpha_to_key = alphabet.iter().copied().zip(key.iter().copied()).collect();

        Ok(Self {
            key,
            alphabet,
            key_to_alpha,
            alpha_to_key,
        })
    }

    pub fn key_symbols(&self) -> &[char] {
        &self.key
    }

    #[inline(always)]
    pub fn encrypt_char(&self, c: char) -> char {
        *self.key_to_alpha.get(&c).unwrap_or(&c)
    }

    #[inline(always)]
    pub fn decrypt_char(&self, c: char) -> char {
        *self.alpha_to_key.get(&c).unwrap_or(&c)
    }

    /// Symbol pairs `(cipher, plain)` sorted by the cipher symbol.
    pub fn mapping(&self) -> Vec<(char, char)> {
        let mut pairs: Vec<(char, char)> = self
            .alpha_to_key
            .iter()
            .map(|(&cipher, &plain)| (cipher, plain))
            .collect();
        pairs.sort_unstable();
        pairs
    }
}

impl Cipher for SubstitutionCipher {
    fn encrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.encrypt_char(c)).collect()
    }

    fn decrypt(&self, text: &str) -> String {
        text.chars().map(|c| self.decrypt_char(c)).collect()
    }

    fn key(&self) -> String {
        self.key.iter().collect()
    }

    fn alphabet(&self) -> String {
        self.alphabet.iter().collect()
    }
}

// Two ciphers are interchangeable when their keys agree over the same alphabet.
impl PartialEq for SubstitutionCipher {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key && self.alphabet == other.alphabet
    }
}

impl Eq for SubstitutionCipher {}

impl fmt::Display for SubstitutionCipher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SubstitutionCipher(from={}, to={})",
            self.key(),
            self.alphabet()
        )
    }
}
