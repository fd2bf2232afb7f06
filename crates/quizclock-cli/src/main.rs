//! quizclock CLI — a timed question-and-answer quiz in the terminal.

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;

mod config;
mod run;

use config::{load_config_from, Overrides};

#[derive(Parser)]
#[command(name = "quiz", version, about = "Timed question-and-answer quiz")]
struct Cli {
    /// CSV file with prompt,answer rows [default: data/problems.csv]
    #[arg(long)]
    file: Option<PathBuf>,

    /// Time limit for the whole quiz, in seconds [default: 30]
    #[arg(long)]
    limit: Option<u64>,

    /// Shuffle the order of questions
    #[arg(long)]
    shuffle: bool,

    /// Seed for a reproducible shuffle
    #[arg(long)]
    seed: Option<u64>,

    /// Config file path
    #[arg(long)]
    config: Option<PathBuf>,
}

async fn execute(cli: Cli) -> Result<()> {
    let config = load_config_from(cli.config.as_deref())?.with_overrides(Overrides {
        file: cli.file,
        limit_secs: cli.limit,
        shuffle: cli.shuffle,
        seed: cli.seed,
    });
    tracing::debug!(?config, "resolved configuration");

    run::execute(config).await?;
    Ok(())
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new("quizclock_core=warn,quiz=warn")
            }),
        )
        .init();

    let cli = Cli::parse();

    // Exit explicitly: after a timeout the runtime's stdin thread may still be
    // blocked on a read that will never complete.
    match execute(cli).await {
        Ok(()) => process::exit(0),
        Err(e) => {
            eprintln!("Error: {e:#}");
            process::exit(1);
        }
    }
}
