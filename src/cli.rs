//! Command-line interface for strictly_bot.

use clap::Parser;
use std::path::PathBuf;

/// Strictly Bot - play tic-tac-toe against a scripted opponent
#[derive(Parser, Debug)]
#[command(name = "strictly_bot")]
#[command(about = "Play tic-tac-toe against a scripted opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML play configuration
    #[arg(short, long, env = "STRICTLY_BOT_CONFIG")]
    pub config: Option<PathBuf>,

    /// Seed for the opponent's random choices (overrides the config file)
    #[arg(long, env = "STRICTLY_BOT_SEED")]
    pub seed: Option<u64>,

    /// Pause before the opponent moves, in milliseconds (overrides the config file)
    #[arg(long, env = "STRICTLY_BOT_DELAY_MS")]
    pub delay_ms: Option<u64>,

    /// Print the final score as JSON on exit
    #[arg(long)]
    pub json: bool,
}
