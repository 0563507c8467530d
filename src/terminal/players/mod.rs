//! Player trait and implementations.

mod bot;
mod human;

pub use bot::BotPlayer;
pub use human::HumanPlayer;

use super::input::Command;
use crate::games::tictactoe::Game;
use anyhow::Result;

/// Something that takes turns at the board.
#[async_trait::async_trait]
pub trait Player: Send {
    /// Waits for this player's next command.
    ///
    /// Bots only ever answer [`Command::Place`].
    async fn get_move(&mut self, game: &Game) -> Result<Command>;

    /// Returns the player's display name.
    fn name(&self) -> &str;
}
