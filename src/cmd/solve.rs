use crate::reports;
use cipherforge::api;
use cipherforge::cache::DirStore;
use cipherforge::cipher::export::{self, KeyFormat};
use cipherforge::config::Config;
use cipherforge::error::CfResult;
use cipherforge::optimizer::{ProgressCallback, RestartOptions};
use clap::Args;
use std::fs;
use std::time::{Duration, Instant};
use tracing::{debug, info};

#[derive(Args, Debug, Clone)]
pub struct SolveArgs {
    /// Encrypted text file
    pub encrypted: String,

    /// Plain English text the language model is trained on
    pub training_corpus: String,

    /// Where to write the recovered key
    #[arg(short = 'c', long, default_value = "cipher.txt")]
    pub cipher_file: String,

    /// Where to write the decrypted text
    #[arg(short = 'd', long, default_value = "decrypted.txt")]
    pub decrypted: String,

    #[arg(long, default_value_t = KeyFormat::Arrow)]
    pub key_format: KeyFormat,

    #[command(flatten)]
    pub config: Config,
}

/// Logs improvements at most once per interval.
struct CliLogger {
    last: Instant,
    interval: Duration,
}

impl CliLogger {
    fn new(interval: Duration) -> Self {
        Self {
            last: Instant::now(),
            interval,
        }
    }
}

impl ProgressCallback for CliLogger {
    fn on_progress(&mut self, iteration: usize, fitness: f64, key: &[char]) {
        if self.last.elapsed() < self.interval {
            return;
        }
        self.last = Instant::now();
        debug!(
            "It {:5} | Best: {:.2} | Key: {}",
            iteration,
            fitness,
            key.iter().collect::<String>()
        );
    }
}

pub fn run(args: SolveArgs, config: Config) -> CfResult<()> {
    let width = config.model.ngram_width;

    info!("📂 Loading training corpus: {}", args.training_corpus);
    let corpus_text = fs::read_to_string(&args.training_corpus)?;
    let mut prepared = if config.model.no_cache {
        api::prepare_training_uncached(&corpus_text, width)?
    } else {
        let mut store = DirStore::new(&config.model.ngram_dir);
        api::prepare_training(&corpus_text, width, &mut store)?
    };

    info!("📂 Loading ciphertext: {}", args.encrypted);
    let raw_ciphertext = fs::read_to_string(&args.encrypted)?;

    let options = RestartOptions::from(&config);
    info!(
        "🔎 Searching ({} iterations per attempt, threshold {:.2})",
        options.iterations, options.threshold
    );
    let mut logger = CliLogger::new(Duration::from_millis(500));
    let outcome = api::decipher(&raw_ciphertext, &mut prepared, options, &mut logger)?;

    fs::write(&args.cipher_file, args.key_format.render(&outcome.cipher)?)?;
    fs::write(
        &args.decrypted,
        export::decrypt_document(&outcome.cipher, &raw_ciphertext),
    )?;
    info!(
        "💾 Wrote key to {} and plaintext to {}",
        args.cipher_file, args.decrypted
    );

    reports::print_solve_summary(&outcome);
    reports::print_key_grid(&outcome.cipher);
    Ok(())
}
