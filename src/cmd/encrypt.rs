use cipherforge::alphabet::Alphabet;
use cipherforge::cipher::export::{self, KeyFormat};
use cipherforge::cipher::{Cipher, SubstitutionCipher};
use cipherforge::error::CfResult;
use cipherforge::optimizer::mutation;
use clap::Args;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct EncryptArgs {
    /// Plain text file to encrypt
    pub plaintext: String,

    /// 26-letter key; a random one is drawn when omitted
    #[arg(long)]
    pub key: Option<String>,

    /// Seed for the random key
    #[arg(short = 'S', long)]
    pub seed: Option<u64>,

    #[arg(short = 'o', long, default_value = "encrypted.txt")]
    pub output: String,

    /// Where to write the key mapping
    #[arg(short = 'k', long, default_value = "key.txt")]
    pub key_file: String,

    #[arg(long, default_value_t = KeyFormat::Arrow)]
    pub key_format: KeyFormat,
}

pub fn run(args: EncryptArgs) -> CfResult<()> {
    let alphabet = Alphabet::english();
    let cipher = match &args.key {
        Some(key) => SubstitutionCipher::new(&key.to_lowercase(), &alphabet)?,
        None => {
            let mut rng = match args.seed {
                Some(s) => fastrand::Rng::with_seed(s),
                None => fastrand::Rng::new(),
            };
            let key = mutation::generate_key(&mut rng, &alphabet);
            SubstitutionCipher::from_symbols(key, &alphabet)?
        }
    };
    info!("🔑 Key: {}", cipher.key());

    let plaintext = fs::read_to_string(&args.plaintext)?;
    fs::write(
        &args.output,
        export::encrypt_preserving_case(&cipher, &plaintext),
    )?;
    fs::write(&args.key_file, args.key_format.render(&cipher)?)?;

    info!(
        "💾 Wrote ciphertext to {} and key to {}",
        args.output, args.key_file
    );
    Ok(())
}
