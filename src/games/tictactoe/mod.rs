mod error;
mod game;
mod opponent;
mod phases;
mod position;
mod rules;
mod types;

pub use error::{BoardError, GameError, MoveRejection, ParseBoardError};
pub use game::Game;
pub use opponent::{
    CENTER, CORNERS, MoveChoice, Opponent, Rule, choose_move, completing_move, select_move,
};
pub use phases::{GameEvent, Outcome};
pub use position::Position;
pub use rules::{LINES, check_winner, is_draw, is_full, is_win};
pub use types::{Board, CELL_COUNT, GameState, GameStatus, Player, Square};

/// Alias for clarity in session management.
pub type Mark = Player;
