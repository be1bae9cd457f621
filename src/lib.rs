pub mod alphabet;
pub mod api;
pub mod cache;
pub mod cipher;
pub mod config;
pub mod corpus;
pub mod error;
pub mod optimizer;
pub mod scorer;
pub mod vocab;

pub use self::alphabet::Alphabet;
pub use self::cipher::{Cipher, SubstitutionCipher};
pub use self::error::{CfResult, CipherForgeError};
pub use self::scorer::{LanguageModel, Scorer};
pub use self::vocab::Vocabulary;
