use crate::cache::{self, ModelStore};
use crate::corpus;
use crate::error::{CfResult, CipherForgeError};
use crate::optimizer::{ProgressCallback, RestartController, RestartOptions, RestartOutcome};
use crate::scorer::{LanguageModel, Scorer};
use crate::vocab::Vocabulary;
use tracing::info;

/// Everything derived from the training corpus that a solve needs.
pub struct PreparedCorpus {
    pub scorer: Scorer,
    pub vocabulary: Vocabulary,
}

/// A cleaned ciphertext plus the distinct cipher words it contains.
#[derive(Debug, Clone)]
pub struct PreparedCiphertext {
    pub text: String,
    pub vocabulary: Vocabulary,
}

/// Service: clean the training corpus and obtain its language model through
/// `store`.
pub fn prepare_training<S: ModelStore>(
    raw_corpus: &str,
    width: usize,
    store: &mut S,
) -> CfResult<PreparedCorpus> {
    let (cleaned, vocabulary) = corpus::clean_with_vocabulary(raw_corpus);
    let model = cache::load_or_build(store, &cleaned, width)?;
    info!(
        words = vocabulary.len(),
        ngrams = model.len(),
        "training corpus ready"
    );
    Ok(PreparedCorpus {
        scorer: Scorer::new(model),
        vocabulary,
    })
}

/// Service: same as [`prepare_training`] but always builds a fresh model.
pub fn prepare_training_uncached(raw_corpus: &str, width: usize) -> CfResult<PreparedCorpus> {
    let (cleaned, vocabulary) = corpus::clean_with_vocabulary(raw_corpus);
    let model = LanguageModel::build(&cleaned, width)?;
    Ok(PreparedCorpus {
        scorer: Scorer::new(model),
        vocabulary,
    })
}

/// Service: clean an encrypted document for searching.
pub fn prepare_ciphertext(raw_ciphertext: &str) -> CfResult<PreparedCiphertext> {
    let (text, vocabulary) = corpus::clean_with_vocabulary(raw_ciphertext);
    if vocabulary.is_empty() {
        return Err(CipherForgeError::Validation(
            "ciphertext contains no letters".to_string(),
        ));
    }
    Ok(PreparedCiphertext { text, vocabulary })
}

/// Service: recover the key of `raw_ciphertext`.
pub fn decipher<CB: ProgressCallback>(
    raw_ciphertext: &str,
    prepared: &mut PreparedCorpus,
    options: RestartOptions,
    callback: &mut CB,
) -> CfResult<RestartOutcome> {
    let ciphertext = prepare_ciphertext(raw_ciphertext)?;
    info!(
        symbols = ciphertext.text.len(),
        words = ciphertext.vocabulary.len(),
        "ciphertext ready"
    );

    let mut controller = RestartController::new(&mut prepared.scorer, options);
    controller.solve(
        &ciphertext.text,
        &ciphertext.vocabulary,
        &prepared.vocabulary,
        callback,
    )
}

/// Service: fitness of `raw_text` after cleaning.
pub fn score_text(raw_text: &str, prepared: &mut PreparedCorpus) -> f64 {
    prepared.scorer.score(&corpus::clean(raw_text))
}
