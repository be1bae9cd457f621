use thiserror::Error;

#[derive(Error, Debug)]
pub enum CipherForgeError {
    #[error("IO Error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV Parsing Error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON Parsing Error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid Key: {0}")]
    InvalidKey(String),

    #[error("Invalid Alphabet: {0}")]
    InvalidAlphabet(String),

    #[error("Invalid N-gram Width: expected > 0, got {0}")]
    InvalidNgramWidth(usize),

    #[error("Corpus too short: {len} symbols cannot yield a single {width}-gram")]
    InsufficientCorpus { len: usize, width: usize },

    #[error("Configuration Error: {0}")]
    Config(String),

    #[error("Data Validation Error: {0}")]
    Validation(String),

    #[error("Gave up after {attempts} attempts (best vocabulary overlap {best_overlap:.3})")]
    RestartsExhausted { attempts: usize, best_overlap: f64 },
}

pub type CfResult<T> = Result<T, CipherForgeError>;
