//! Error types for board mutation and move application.
//!
//! Every failure here is local and recoverable: validation runs before the
//! single write, so a rejected operation never changes the board.

use super::types::Player;

/// Error raised by [`Board`](super::Board) accessors and mutators.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum BoardError {
    /// The index is not one of the nine cells.
    #[display("Index {} is outside the board (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// The cell already holds a mark.
    #[display("Cell {} is already occupied", _0)]
    CellOccupied(usize),
}

impl std::error::Error for BoardError {}

/// Error raised when a textual board layout cannot be parsed.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("Invalid board layout: {}", message)]
pub struct ParseBoardError {
    /// What was wrong with the layout.
    pub message: String,
}

impl ParseBoardError {
    /// Creates a new parse error.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// Reason a move was refused by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// The target cell is not empty.
    #[display("cell {} is already occupied", _0)]
    Occupied(usize),

    /// The target index is not on the board.
    #[display("index {} is outside the board", _0)]
    OutOfRange(usize),

    /// The game has already been won or drawn.
    #[display("the game is already over")]
    GameOver,

    /// The caller tried to move for a player whose turn it is not.
    #[display("it's not {}'s turn", _0)]
    NotYourTurn(Player),
}

impl From<BoardError> for MoveRejection {
    fn from(err: BoardError) -> Self {
        match err {
            BoardError::CellOccupied(index) => MoveRejection::Occupied(index),
            BoardError::IndexOutOfRange(index) => MoveRejection::OutOfRange(index),
        }
    }
}

/// Error raised by the game engine and the opponent.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The move was refused and the game state is unchanged.
    #[display("Invalid move: {}", _0)]
    InvalidMove(MoveRejection),

    /// The opponent was asked to move on a full board.
    #[display("No move available: the board is full")]
    NoMoveAvailable,
}

impl std::error::Error for GameError {}

impl From<MoveRejection> for GameError {
    fn from(rejection: MoveRejection) -> Self {
        GameError::InvalidMove(rejection)
    }
}
