//! Game orchestration between the human and the opponent.

use super::input::{Command, InputError};
use super::players::Player;
use super::ui::{self, Names};
use crate::games::tictactoe::{GameEvent, Position};
use crate::session::{GameSession, PlayedMove, Scoreboard};
use anyhow::Result;
use std::io::Write;
use tracing::{debug, info, instrument};

/// Drives a [`GameSession`] by polling its two players in turn.
///
/// The bot is asked whenever the session awaits the opponent; otherwise
/// the human is. The human quitting (or running out of input) ends the
/// session.
pub struct Orchestrator<W> {
    session: GameSession,
    human: Box<dyn Player>,
    bot: Box<dyn Player>,
    output: W,
    names: Names,
}

impl<W: Write> Orchestrator<W> {
    /// Creates a new orchestrator.
    pub fn new(
        session: GameSession,
        human: Box<dyn Player>,
        bot: Box<dyn Player>,
        output: W,
    ) -> Self {
        let names = Names {
            human: human.name().to_string(),
            bot: bot.name().to_string(),
        };
        Self {
            session,
            human,
            bot,
            output,
            names,
        }
    }

    /// Runs the game loop until the human quits.
    ///
    /// Returns the final score.
    #[instrument(skip(self), fields(human = %self.names.human, bot = %self.names.bot))]
    pub async fn run(mut self) -> Result<Scoreboard> {
        info!("Starting game orchestration");
        self.render()?;

        loop {
            let bot_turn = self.session.awaiting_opponent();
            if !bot_turn {
                self.prompt()?;
            }

            let player = if bot_turn { &mut self.bot } else { &mut self.human };
            let command = match player.get_move(self.session.game()).await {
                Ok(command) => command,
                Err(err) => match err.downcast::<InputError>() {
                    Ok(bad) => {
                        writeln!(self.output, "{}", bad)?;
                        continue;
                    }
                    Err(err) => return Err(err),
                },
            };

            match command {
                Command::Place(index) if bot_turn => {
                    let played = self.session.on_opponent_move(index)?;
                    self.announce(&played)?;
                    self.render()?;
                }
                Command::Place(index) => match self.session.on_cell_activated(index) {
                    Ok(_) => self.render()?,
                    Err(e) => {
                        debug!(error = %e, "Move refused");
                        writeln!(self.output, "{}", ui::rejection_text(&e))?;
                    }
                },
                Command::Restart => {
                    self.session.on_restart_requested();
                    writeln!(self.output, "New game.")?;
                    self.render()?;
                }
                Command::Quit => {
                    debug!("Human quit");
                    break;
                }
            }
        }

        let score = *self.session.scoreboard();
        info!(games = score.games_played(), "Session over");
        Ok(score)
    }

    fn announce(&mut self, played: &PlayedMove) -> Result<()> {
        let position = Position::from_index(played.index)
            .map(|p| p.label())
            .unwrap_or("?");
        writeln!(
            self.output,
            "{} plays {} ({}).",
            self.names.bot,
            position,
            played.index + 1
        )?;
        if let GameEvent::GameEnded(outcome) = played.event {
            debug!(%outcome, "Opponent ended the game");
        }
        Ok(())
    }

    fn prompt(&mut self) -> Result<()> {
        if self.session.game().is_over() {
            write!(self.output, "Enter 'r' to play again or 'q' to quit: ")?;
        } else {
            write!(self.output, "Your move (1-9): ")?;
        }
        self.output.flush()?;
        Ok(())
    }

    fn render(&mut self) -> Result<()> {
        let screen = ui::render(
            self.session.game(),
            self.session.scoreboard(),
            self.session.human(),
            &self.names,
        );
        write!(self.output, "{}", screen)?;
        self.output.flush()?;
        Ok(())
    }
}
