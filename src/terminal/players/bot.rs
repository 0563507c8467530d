//! The scripted opponent as a player.

use super::Player;
use crate::games::tictactoe::{Game, Mark, Opponent};
use crate::terminal::input::Command;
use anyhow::Result;
use std::time::Duration;
use tracing::debug;

/// Bot wrapping an [`Opponent`], pausing before each move.
pub struct BotPlayer {
    name: String,
    opponent: Opponent,
    delay: Duration,
}

impl BotPlayer {
    /// Creates a new bot.
    pub fn new(name: impl Into<String>, opponent: Opponent, delay: Duration) -> Self {
        Self {
            name: name.into(),
            opponent,
            delay,
        }
    }

    /// The mark the bot plays.
    pub fn mark(&self) -> Mark {
        self.opponent.mark()
    }
}

#[async_trait::async_trait]
impl Player for BotPlayer {
    async fn get_move(&mut self, game: &Game) -> Result<Command> {
        debug!(bot = %self.name, delay_ms = self.delay.as_millis() as u64, "Bot making move");

        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }

        let choice = self.opponent.choose_move(game.board())?;
        debug!(bot = %self.name, index = choice.index, rule = %choice.rule, "Bot chose position");
        Ok(Command::Place(choice.index))
    }

    fn name(&self) -> &str {
        &self.name
    }
}
