use cipherforge::config::Config;
use cipherforge::error::CfResult;
use clap::{ArgMatches, CommandFactory, FromArgMatches, Parser, Subcommand};
use std::process;
use tracing::{error, info, Level};

mod cmd;
mod reports;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// JSON file with search and model settings; explicit flags win
    #[arg(global = true, long)]
    config: Option<String>,

    #[arg(global = true, short, long, default_value_t = false)]
    verbose: bool,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Recover the key of an encrypted text
    Solve(cmd::solve::SolveArgs),
    /// Encrypt a text under a given or random key
    Encrypt(cmd::encrypt::EncryptArgs),
    /// Print the fitness of a text under a training corpus
    Score(cmd::score::ScoreArgs),
}

fn resolve_config(
    cli_config: &Config,
    path: Option<&str>,
    sub_matches: &ArgMatches,
) -> CfResult<Config> {
    let config = match path {
        Some(p) => {
            info!("📂 Loading config from: {}", p);
            let mut file_config = Config::load_from_file(p)?;
            file_config.merge_from_cli(cli_config, sub_matches);
            file_config
        }
        None => cli_config.clone(),
    };
    config.validate()?;
    Ok(config)
}

fn main() {
    let matches = Cli::command().get_matches();
    let cli = Cli::from_arg_matches(&matches).unwrap_or_else(|e| e.exit());

    let level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .init();

    let Some((_, sub_matches)) = matches.subcommand() else {
        error!("no subcommand given");
        process::exit(2);
    };

    let result = match cli.command {
        Commands::Solve(args) => resolve_config(&args.config, cli.config.as_deref(), sub_matches)
            .and_then(|config| cmd::solve::run(args, config)),
        Commands::Score(args) => resolve_config(&args.config, cli.config.as_deref(), sub_matches)
            .and_then(|config| cmd::score::run(args, config)),
        Commands::Encrypt(args) => cmd::encrypt::run(args),
    };

    if let Err(e) = result {
        error!("❌ {}", e);
        process::exit(1);
    }
}
