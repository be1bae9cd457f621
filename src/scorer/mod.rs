pub mod loader;
pub mod model;

pub use self::model::LanguageModel;

use self::model::disjoint_chunks;
use crate::alphabet::Alphabet;
use crate::error::{CfResult, CipherForgeError};

/// Fitness function for candidate decryptions.
///
/// Owns the language model because scoring memoizes unseen n-grams into it;
/// `&mut self` keeps that single mutation path exclusive.
pub struct Scorer {
    model: LanguageModel,
    alphabet: Alphabet,
}

impl Scorer {
    pub fn new(model: LanguageModel) -> Self {
        Self::with_alphabet(model, Alphabet::english())
    }

    pub fn with_alphabet(model: LanguageModel, alphabet: Alphabet) -> Self {
        Self { model, alphabet }
    }

    pub fn model(&self) -> &LanguageModel {
        &self.model
    }

    pub fn alphabet(&self) -> &Alphabet {
        &self.alphabet
    }

    pub fn width(&self) -> usize {
        self.model.width()
    }

    /// Sum of log2-probabilities over disjoint `width`-sized chunks of `text`.
    /// Higher is better.
    pub fn score(&mut self, text: &str) -> f64 {
        let fallback = self.model.unseen_log_prob();
        let mut total = 0.0;

        for chunk in disjoint_chunks(text, self.model.width()) {
            total += match self.model.lookup(chunk) {
                Some(p) => p,
                None => {
                    self.model.insert(chunk, fallback);
                    fallback
                }
            };
        }
        total
    }

    /// Like [`Scorer::score`] but rejects text containing symbols outside the
    /// scorer's alphabet before doing any work.
    pub fn try_score(&mut self, text: &str) -> CfResult<f64> {
        if let Some(bad) = text.chars().find(|&c| !self.alphabet.contains(c)) {
            return Err(CipherForgeError::Validation(format!(
                "cannot score symbol {:?}: not in alphabet '{}'",
                bad, self.alphabet
            )));
        }
        Ok(self.score(text))
    }
}
