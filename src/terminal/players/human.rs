//! Human player typing commands, one per line.

use super::Player;
use crate::games::tictactoe::Game;
use crate::terminal::input::{Command, parse_command};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, Lines};
use tracing::debug;

/// Human player reading from a line-based input.
///
/// Unparseable lines come back as an [`InputError`](crate::InputError);
/// end of input reads as [`Command::Quit`].
pub struct HumanPlayer<R> {
    name: String,
    lines: Lines<R>,
}

impl<R> HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    /// Creates a new human player.
    pub fn new(name: impl Into<String>, input: R) -> Self {
        Self {
            name: name.into(),
            lines: input.lines(),
        }
    }
}

#[async_trait::async_trait]
impl<R> Player for HumanPlayer<R>
where
    R: AsyncBufRead + Unpin + Send,
{
    async fn get_move(&mut self, _game: &Game) -> Result<Command> {
        match self.lines.next_line().await? {
            Some(line) => Ok(parse_command(&line)?),
            None => {
                debug!(player = %self.name, "Input closed");
                Ok(Command::Quit)
            }
        }
    }

    fn name(&self) -> &str {
        &self.name
    }
}
