//! Game engine for tic-tac-toe.
//!
//! The engine is a small state machine over [`GameStatus`]:
//! `InProgress(turn)` moves to `Won(player)` or `Draw`, and only
//! [`Game::restart`] leaves a terminal state.

use super::error::{GameError, MoveRejection};
use super::phases::{GameEvent, Outcome};
use super::types::{Board, GameState, GameStatus, Player};
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game engine.
#[derive(Debug, Clone, Default)]
pub struct Game {
    state: GameState,
}

impl Game {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the player to move.
    pub fn turn(&self) -> Player {
        self.state.current_player()
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.state.status()
    }

    /// Returns true once the game has been won or drawn.
    pub fn is_over(&self) -> bool {
        self.state.status().is_terminal()
    }

    /// Places the current player's mark at `index` (0-8).
    ///
    /// On success returns the single event this move produced:
    /// [`GameEvent::GameEnded`] if the move won or filled the board,
    /// otherwise [`GameEvent::TurnChanged`] with the next player.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::InvalidMove`] if the game is over, the index is
    /// off the board, or the square is occupied. The state is unchanged.
    #[instrument(skip(self), fields(player = %self.turn()))]
    pub fn apply_move(&mut self, index: usize) -> Result<GameEvent, GameError> {
        if self.is_over() {
            warn!(index, status = ?self.status(), "Move rejected: game is over");
            return Err(MoveRejection::GameOver.into());
        }

        let player = self.turn();
        self.state
            .board_mut()
            .set(index, player)
            .map_err(|e| {
                debug!(error = %e, "Move rejected");
                GameError::InvalidMove(e.into())
            })?;

        let event = if self.board().is_win(player) {
            self.state.set_status(GameStatus::Won(player));
            info!(winner = %player, "Game won");
            GameEvent::GameEnded(Outcome::Winner(player))
        } else if self.board().is_full() {
            self.state.set_status(GameStatus::Draw);
            info!("Game drawn");
            GameEvent::GameEnded(Outcome::Draw)
        } else {
            let next = player.opponent();
            self.state.set_current_player(next);
            debug!(next = %next, "Turn changed");
            GameEvent::TurnChanged(next)
        };

        Ok(event)
    }

    /// Discards the board and returns to the initial state.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(previous = ?self.status(), "Restarting game");
        self.state = GameState::new();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::Square;

    fn play(game: &mut Game, moves: &[usize]) -> GameEvent {
        let mut last = None;
        for &index in moves {
            last = Some(game.apply_move(index).expect("legal move"));
        }
        last.expect("at least one move")
    }

    #[test]
    fn test_new_game_x_to_move() {
        let game = Game::new();
        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert_eq!(game.board(), &Board::new());
    }

    #[test]
    fn test_turn_alternates() {
        let mut game = Game::new();
        assert_eq!(game.apply_move(4), Ok(GameEvent::TurnChanged(Player::O)));
        assert_eq!(game.apply_move(0), Ok(GameEvent::TurnChanged(Player::X)));
        assert_eq!(game.apply_move(8), Ok(GameEvent::TurnChanged(Player::O)));
        assert_eq!(game.turn(), Player::O);
    }

    #[test]
    fn test_win_ends_game() {
        let mut game = Game::new();
        // X: 0, 1, 2 / O: 3, 4
        let event = play(&mut game, &[0, 3, 1, 4, 2]);
        assert_eq!(event, GameEvent::GameEnded(Outcome::Winner(Player::X)));
        assert_eq!(game.status(), GameStatus::Won(Player::X));
        assert!(game.is_over());
    }

    #[test]
    fn test_draw_ends_game() {
        let mut game = Game::new();
        // X O X / X O O / O X X
        let event = play(&mut game, &[0, 1, 2, 4, 3, 5, 7, 6, 8]);
        assert_eq!(event, GameEvent::GameEnded(Outcome::Draw));
        assert_eq!(game.status(), GameStatus::Draw);
    }

    #[test]
    fn test_win_on_last_square_is_not_a_draw() {
        let mut game = Game::new();
        // X O X / O X O / O X X: X's final move at 8 completes the diagonal.
        let event = play(&mut game, &[0, 1, 2, 3, 4, 5, 7, 6, 8]);
        assert_eq!(event, GameEvent::GameEnded(Outcome::Winner(Player::X)));
    }

    #[test]
    fn test_occupied_square_rejected_without_mutation() {
        let mut game = Game::new();
        game.apply_move(4).unwrap();
        let before = game.state().clone();

        assert_eq!(
            game.apply_move(4),
            Err(GameError::InvalidMove(MoveRejection::Occupied(4)))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_out_of_range_rejected() {
        let mut game = Game::new();
        assert_eq!(
            game.apply_move(9),
            Err(GameError::InvalidMove(MoveRejection::OutOfRange(9)))
        );
        assert_eq!(game.turn(), Player::X);
    }

    #[test]
    fn test_moves_rejected_after_game_over() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        let before = game.state().clone();

        assert_eq!(
            game.apply_move(8),
            Err(GameError::InvalidMove(MoveRejection::GameOver))
        );
        assert_eq!(game.state(), &before);
    }

    #[test]
    fn test_restart_resets_everything() {
        let mut game = Game::new();
        play(&mut game, &[0, 3, 1, 4, 2]);
        game.restart();

        assert_eq!(game.turn(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(!game.board().is_full());
        for i in 0..9 {
            assert_eq!(game.board().get(i), Ok(Square::Empty));
        }
    }
}
