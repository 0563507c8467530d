//! Stateless text rendering for the terminal front end.

use crate::games::tictactoe::{Game, GameError, GameStatus, Mark, MoveRejection};
use crate::session::Scoreboard;

/// Display names for the two sides.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Names {
    /// The human (X).
    pub human: String,
    /// The opponent (O).
    pub bot: String,
}

/// Status line for the current game.
///
/// The human is always addressed directly; the bot by name.
pub fn status_text(game: &Game, human: Mark, names: &Names) -> String {
    match game.status() {
        GameStatus::InProgress if game.turn() == human => "Your turn".to_string(),
        GameStatus::InProgress => possessive_turn(&names.bot),
        terminal => match terminal.outcome() {
            Some(outcome) => outcome.to_string(),
            None => String::new(),
        },
    }
}

fn possessive_turn(name: &str) -> String {
    if name.ends_with('s') {
        format!("{}' turn", name)
    } else {
        format!("{}'s turn", name)
    }
}

/// Score line: human wins, bot wins, draws.
pub fn score_text(score: &Scoreboard, human: Mark, names: &Names) -> String {
    format!(
        "{}: {}  {}: {}  Draws: {}",
        names.human,
        score.wins(human),
        names.bot,
        score.wins(human.opponent()),
        score.draws()
    )
}

/// User-facing text for a refused move. Cells are numbered 1-9.
pub fn rejection_text(err: &GameError) -> String {
    match err {
        GameError::InvalidMove(MoveRejection::Occupied(index)) => {
            format!("Square {} is already taken.", index + 1)
        }
        GameError::InvalidMove(MoveRejection::OutOfRange(_)) => {
            "Pick a square from 1 to 9.".to_string()
        }
        GameError::InvalidMove(MoveRejection::GameOver) => {
            "The game is over. Enter 'r' to play again.".to_string()
        }
        GameError::InvalidMove(MoveRejection::NotYourTurn(_)) => "Wait for your turn.".to_string(),
        GameError::NoMoveAvailable => err.to_string(),
    }
}

/// Full screen: board, status and score.
pub fn render(game: &Game, score: &Scoreboard, human: Mark, names: &Names) -> String {
    format!(
        "\n{}\n\n{}\n{}\n",
        game.board().display(),
        status_text(game, human, names),
        score_text(score, human, names)
    )
}
