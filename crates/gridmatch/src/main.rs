//! Gridmatch - unified CLI

use anyhow::{Context, Result};
use clap::Parser;
use gridmatch::cli::{Cli, Command};
use gridmatch::{GameConfig, logging, simulate, tui};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = GameConfig::load_or_default(&cli.config)
        .with_context(|| format!("Loading {}", cli.config.display()))?;

    match cli.command {
        Command::Play { mode, delay_ms, seed } => {
            let config = config.with_overrides(mode.map(Into::into), delay_ms, seed);
            tui::run(config).await
        }
        Command::Simulate { rounds, seed } => {
            logging::init_stderr_logging(config.log_level());
            let seed = seed.or(*config.seed()).unwrap_or_else(rand::random);
            let score = simulate::simulate(rounds, seed);
            println!("seed {}: {}", seed, simulate::summary(&score));
            Ok(())
        }
    }
}
