use crate::error::{CfResult, CipherForgeError};
use crate::optimizer::runner::{DEFAULT_ITERATIONS, DEFAULT_MAX_ATTEMPTS, DEFAULT_THRESHOLD};
use clap::{parser::ValueSource, ArgMatches, Args};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

#[derive(Args, Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    #[command(flatten)]
    pub search: SearchParams,
    #[command(flatten)]
    pub model: ModelParams,
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchParams {
    /// Hill-climbing iterations per attempt
    #[arg(long, default_value_t = DEFAULT_ITERATIONS)]
    pub iterations: usize,

    /// Fraction of decrypted words that must be known English
    #[arg(long, default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: f64,

    /// Give up after this many restarts
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Ignore --max-attempts and restart until the threshold is met
    #[arg(long, default_value_t = false)]
    pub unbounded: bool,

    /// Wall-clock budget in seconds for all attempts together
    #[arg(short = 'T', long)]
    pub max_time: Option<u64>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

impl Default for SearchParams {
    fn default() -> Self {
        Self {
            iterations: DEFAULT_ITERATIONS,
            threshold: DEFAULT_THRESHOLD,
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            unbounded: false,
            max_time: None,
            seed: None,
        }
    }
}

#[derive(Args, Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ModelParams {
    /// The n-gram window size
    #[arg(short = 'g', long, default_value_t = 4)]
    pub ngram_width: usize,

    /// Directory holding cached n-gram models
    #[arg(short = 'l', long, default_value = "ngrams")]
    pub ngram_dir: String,

    /// Rebuild the language model even if a cached copy exists
    #[arg(long, default_value_t = false)]
    pub no_cache: bool,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            ngram_width: 4,
            ngram_dir: "ngrams".to_string(),
            no_cache: false,
        }
    }
}

impl Config {
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> CfResult<Self> {
        let content = fs::read_to_string(path)?;
        let cfg: Config = serde_json::from_str(&content)?;
        Ok(cfg)
    }

    /// Overlays values the user typed on the command line; defaults supplied
    /// by clap leave the file values alone.
    pub fn merge_from_cli(&mut self, cli: &Config, matches: &ArgMatches) {
        macro_rules! update_if_present {
            ($section:ident . $field:ident) => {
                if matches.value_source(stringify!($field)) == Some(ValueSource::CommandLine) {
                    self.$section.$field = cli.$section.$field.clone();
                }
            };
        }

        update_if_present!(search.iterations);
        update_if_present!(search.threshold);
        update_if_present!(search.max_attempts);
        update_if_present!(search.unbounded);
        update_if_present!(search.max_time);
        update_if_present!(search.seed);

        update_if_present!(model.ngram_width);
        update_if_present!(model.ngram_dir);
        update_if_present!(model.no_cache);
    }

    pub fn validate(&self) -> CfResult<()> {
        if self.model.ngram_width == 0 {
            return Err(CipherForgeError::InvalidNgramWidth(0));
        }
        if self.search.iterations == 0 {
            return Err(CipherForgeError::Config(
                "iterations must be > 0".to_string(),
            ));
        }
        let t = self.search.threshold;
        if !(t > 0.0 && t <= 1.0) {
            return Err(CipherForgeError::Config(format!(
                "threshold must be in (0, 1], got {}",
                t
            )));
        }
        if !self.search.unbounded && self.search.max_attempts == 0 {
            return Err(CipherForgeError::Config(
                "max-attempts must be > 0 (or pass --unbounded)".to_string(),
            ));
        }
        Ok(())
    }
}
