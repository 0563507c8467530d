//! Strictly Bot library - tic-tac-toe against a scripted opponent
//!
//! # Architecture
//!
//! - **Games**: board, rules, turn engine and the opponent's move policy
//! - **Session**: one human against the opponent, with a running score
//!   and event observers
//! - **Terminal**: a line-based front end driving a session
//! - **Config**: TOML play settings
//!
//! # Example
//!
//! ```
//! use strictly_bot::{GameEvent, GameSession, Mark, Opponent};
//!
//! let mut session = GameSession::new();
//! let mut bot = Opponent::seeded(Mark::O, 7);
//! session.on_cell_activated(0).unwrap();
//! let reply = session.play_opponent_turn(&mut bot).unwrap();
//! assert_eq!(reply.index, 4);
//! assert_eq!(reply.event, GameEvent::TurnChanged(Mark::X));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// Private module declarations
mod config;
mod games;
mod session;
mod terminal;

// Crate-level exports - Configuration
pub use config::{ConfigError, PlayConfig};

// Crate-level exports - Session management
pub use session::{GameObserver, GameSession, PlayedMove, Scoreboard};

// Crate-level exports - Terminal front end
pub use terminal::players;
pub use terminal::{
    BotPlayer, Command, HumanPlayer, InputError, Names, Orchestrator, opponent_from_config,
    parse_command, rejection_text, render, run_terminal, score_text, status_text,
};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, BoardError, CELL_COUNT, CENTER, CORNERS, Game, GameError, GameEvent, GameState,
    GameStatus, LINES, Mark, MoveChoice, MoveRejection, Opponent, Outcome, ParseBoardError,
    Player, Position, Rule, Square, check_winner, choose_move, completing_move, is_draw, is_full,
    is_win, select_move,
};
