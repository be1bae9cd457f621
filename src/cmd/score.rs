use crate::reports;
use cipherforge::api;
use cipherforge::cache::DirStore;
use cipherforge::config::Config;
use cipherforge::corpus;
use cipherforge::error::CfResult;
use clap::Args;
use std::fs;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct ScoreArgs {
    /// Text to score (cleaned before scoring)
    pub text: String,

    /// Plain English text the language model is trained on
    pub training_corpus: String,

    #[command(flatten)]
    pub config: Config,
}

pub fn run(args: ScoreArgs, config: Config) -> CfResult<()> {
    let width = config.model.ngram_width;

    info!("📂 Loading training corpus: {}", args.training_corpus);
    let corpus_text = fs::read_to_string(&args.training_corpus)?;
    let mut prepared = if config.model.no_cache {
        api::prepare_training_uncached(&corpus_text, width)?
    } else {
        let mut store = DirStore::new(&config.model.ngram_dir);
        api::prepare_training(&corpus_text, width, &mut store)?
    };

    let raw = fs::read_to_string(&args.text)?;
    let symbols = corpus::clean(&raw).chars().count();
    let fitness = api::score_text(&raw, &mut prepared);

    reports::print_score_report(&args.text, symbols, width, fitness);
    Ok(())
}
