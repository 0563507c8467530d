//! Line-based terminal front end.
//!
//! Reads commands from stdin and prints the board, a status line and
//! the running score to stdout after every change.

mod input;
mod orchestrator;
pub mod players;
mod ui;

pub use input::{Command, InputError, parse_command};
pub use orchestrator::Orchestrator;
pub use players::{BotPlayer, HumanPlayer};
pub use ui::{Names, rejection_text, render, score_text, status_text};

use crate::config::PlayConfig;
use crate::games::tictactoe::{Mark, Opponent};
use crate::session::{GameSession, Scoreboard};
use anyhow::Result;
use tokio::io::BufReader;
use tracing::{info, instrument};

/// Builds the opponent described by `config`: seeded if a seed is set.
pub fn opponent_from_config(config: &PlayConfig) -> Opponent {
    match config.seed() {
        Some(seed) => Opponent::seeded(Mark::O, *seed),
        None => Opponent::new(Mark::O),
    }
}

/// Plays on stdin/stdout until the human quits. Returns the final score.
#[instrument(skip(config))]
pub async fn run_terminal(config: &PlayConfig) -> Result<Scoreboard> {
    info!(seed = ?config.seed(), "Starting terminal session");

    let human = HumanPlayer::new(
        config.human_name().clone(),
        BufReader::new(tokio::io::stdin()),
    );
    let bot = BotPlayer::new(
        config.bot_name().clone(),
        opponent_from_config(config),
        config.bot_delay(),
    );
    let orchestrator = Orchestrator::new(
        GameSession::new(),
        Box::new(human),
        Box::new(bot),
        std::io::stdout(),
    );
    orchestrator.run().await
}
