//! Strictly Bot - terminal tic-tac-toe against a scripted opponent.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::Cli;
use strictly_bot::{PlayConfig, run_terminal};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Logs go to stderr so they never interleave with the board on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!(?cli, "Parsed command line");

    let mut config = match &cli.config {
        Some(path) => PlayConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PlayConfig::default(),
    };
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(delay_ms) = cli.delay_ms {
        config = config.with_bot_delay_ms(delay_ms);
    }

    info!("Starting Strictly Bot");
    let score = run_terminal(&config).await?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&score)?);
    } else {
        println!(
            "\nFinal score - {}: {}  {}: {}  Draws: {}",
            config.human_name(),
            score.x_wins(),
            config.bot_name(),
            score.o_wins(),
            score.draws()
        );
    }

    Ok(())
}
