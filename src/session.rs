//! Game session: one human against the scripted opponent.
//!
//! A session is what a presentation layer talks to. It forwards cell
//! activations and restart requests to the engine, asks the opponent for
//! its reply, keeps the running score and fans engine events out to
//! subscribed observers.

use crate::games::tictactoe::{
    Game, GameError, GameEvent, Mark, MoveRejection, Opponent, Outcome,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Receives engine events as they happen.
///
/// Both methods default to doing nothing so observers only implement
/// what they care about.
pub trait GameObserver {
    /// Called after a move that did not end the game.
    fn on_turn_changed(&mut self, _turn: Mark) {}

    /// Called once when a game is won or drawn.
    fn on_game_ended(&mut self, _outcome: Outcome) {}
}

/// Running score for the lifetime of a session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Games won by X.
    x_wins: u32,
    /// Games won by O.
    o_wins: u32,
    /// Drawn games.
    draws: u32,
}

impl Scoreboard {
    /// Creates an empty scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Counts one finished game.
    #[instrument(skip(self))]
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Winner(Mark::X) => self.x_wins += 1,
            Outcome::Winner(Mark::O) => self.o_wins += 1,
            Outcome::Draw => self.draws += 1,
        }
    }

    /// Wins recorded for `mark`.
    pub fn wins(&self, mark: Mark) -> u32 {
        match mark {
            Mark::X => self.x_wins,
            Mark::O => self.o_wins,
        }
    }

    /// Total number of finished games.
    pub fn games_played(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }
}

/// A move applied through the session, with the event it produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayedMove {
    /// Board index (0-8).
    pub index: usize,
    /// Who moved.
    pub mark: Mark,
    /// What the engine emitted.
    pub event: GameEvent,
}

/// A human-versus-opponent session.
///
/// The human always plays X and moves first; the opponent plays O. The
/// session referees turns but does not own the opponent's policy: the
/// opponent's square is either supplied by the caller or chosen by an
/// [`Opponent`] lent to [`GameSession::play_opponent_turn`].
pub struct GameSession {
    game: Game,
    human: Mark,
    scoreboard: Scoreboard,
    observers: Vec<Box<dyn GameObserver + Send>>,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// Creates a session with an empty board and an empty score.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating new game session");
        Self {
            game: Game::new(),
            human: Mark::X,
            scoreboard: Scoreboard::new(),
            observers: Vec::new(),
        }
    }

    /// Registers an observer for future events.
    pub fn subscribe(&mut self, observer: Box<dyn GameObserver + Send>) {
        self.observers.push(observer);
    }

    /// The game in progress.
    pub fn game(&self) -> &Game {
        &self.game
    }

    /// Score so far.
    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    /// The human's mark.
    pub fn human(&self) -> Mark {
        self.human
    }

    /// The opponent's mark.
    pub fn opponent(&self) -> Mark {
        self.human.opponent()
    }

    /// True when the game is live and the opponent should move next.
    pub fn awaiting_opponent(&self) -> bool {
        !self.game.is_over() && self.game.turn() == self.opponent()
    }

    /// The human activated a cell.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] if the game is over, it is the opponent's
    /// turn, or the cell cannot be played. Nothing changes on error.
    #[instrument(skip(self))]
    pub fn on_cell_activated(&mut self, index: usize) -> Result<PlayedMove, GameError> {
        self.ensure_turn(self.human)?;
        self.apply(index)
    }

    /// The opponent chose `index`.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] if the game is over, it is the human's
    /// turn, or the cell cannot be played.
    #[instrument(skip(self))]
    pub fn on_opponent_move(&mut self, index: usize) -> Result<PlayedMove, GameError> {
        self.ensure_turn(self.opponent())?;
        self.apply(index)
    }

    /// Asks `opponent` for its square and plays it.
    ///
    /// # Errors
    ///
    /// [`GameError::InvalidMove`] if the game is over, it is the human's
    /// turn, or `opponent` plays the human's mark;
    /// [`GameError::NoMoveAvailable`] if the opponent finds no square.
    #[instrument(skip(self, opponent))]
    pub fn play_opponent_turn(&mut self, opponent: &mut Opponent) -> Result<PlayedMove, GameError> {
        if opponent.mark() != self.opponent() {
            return Err(MoveRejection::NotYourTurn(opponent.mark()).into());
        }
        self.ensure_turn(self.opponent())?;
        let choice = opponent.choose_move(self.game.board())?;
        debug!(index = choice.index, rule = %choice.rule, "Opponent move selected");
        self.apply(choice.index)
    }

    /// Starts a fresh game. The score is kept.
    #[instrument(skip(self))]
    pub fn on_restart_requested(&mut self) {
        self.game.restart();
    }

    fn ensure_turn(&self, mark: Mark) -> Result<(), GameError> {
        if self.game.is_over() {
            return Err(MoveRejection::GameOver.into());
        }
        if self.game.turn() != mark {
            debug!(%mark, turn = %self.game.turn(), "Ignoring out-of-turn move");
            return Err(MoveRejection::NotYourTurn(mark).into());
        }
        Ok(())
    }

    fn apply(&mut self, index: usize) -> Result<PlayedMove, GameError> {
        let mark = self.game.turn();
        let event = self.game.apply_move(index)?;
        self.dispatch(event);
        Ok(PlayedMove { index, mark, event })
    }

    fn dispatch(&mut self, event: GameEvent) {
        match event {
            GameEvent::TurnChanged(turn) => {
                for observer in &mut self.observers {
                    observer.on_turn_changed(turn);
                }
            }
            GameEvent::GameEnded(outcome) => {
                self.scoreboard.record(outcome);
                info!(%outcome, games = self.scoreboard.games_played(), "Game finished");
                for observer in &mut self.observers {
                    observer.on_game_ended(outcome);
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::{GameStatus, Square};
    use std::sync::{Arc, Mutex};

    struct Recorder {
        events: Arc<Mutex<Vec<GameEvent>>>,
    }

    impl GameObserver for Recorder {
        fn on_turn_changed(&mut self, turn: Mark) {
            self.events.lock().unwrap().push(GameEvent::TurnChanged(turn));
        }

        fn on_game_ended(&mut self, outcome: Outcome) {
            self.events.lock().unwrap().push(GameEvent::GameEnded(outcome));
        }
    }

    fn bot(seed: u64) -> Opponent {
        Opponent::seeded(Mark::O, seed)
    }

    fn finish_game(session: &mut GameSession, bot: &mut Opponent) {
        // Human always takes the lowest free square.
        while !session.game().is_over() {
            let index = session.game().board().empty_indices()[0];
            session.on_cell_activated(index).unwrap();
            if session.awaiting_opponent() {
                session.play_opponent_turn(bot).unwrap();
            }
        }
    }

    #[test]
    fn test_opponent_replies_with_center() {
        let mut session = GameSession::new();
        let human = session.on_cell_activated(0).unwrap();
        assert_eq!(human.event, GameEvent::TurnChanged(Mark::O));
        assert!(session.awaiting_opponent());

        let reply = session.play_opponent_turn(&mut bot(3)).unwrap();
        assert_eq!(reply.index, 4);
        assert_eq!(reply.mark, Mark::O);
        assert_eq!(reply.event, GameEvent::TurnChanged(Mark::X));
        assert!(!session.awaiting_opponent());
    }

    #[test]
    fn test_human_cannot_move_on_opponents_turn() {
        let mut session = GameSession::new();
        session.on_cell_activated(0).unwrap();
        assert_eq!(
            session.on_cell_activated(1),
            Err(GameError::InvalidMove(MoveRejection::NotYourTurn(Mark::X)))
        );
        assert_eq!(session.game().board().get(1), Ok(Square::Empty));
    }

    #[test]
    fn test_opponent_cannot_move_on_humans_turn() {
        let mut session = GameSession::new();
        assert_eq!(
            session.play_opponent_turn(&mut bot(3)),
            Err(GameError::InvalidMove(MoveRejection::NotYourTurn(Mark::O)))
        );
        assert_eq!(
            session.on_opponent_move(4),
            Err(GameError::InvalidMove(MoveRejection::NotYourTurn(Mark::O)))
        );
        assert_eq!(session.game().board().get(4), Ok(Square::Empty));
    }

    #[test]
    fn test_opponent_with_human_mark_is_refused() {
        let mut session = GameSession::new();
        session.on_cell_activated(0).unwrap();
        let mut impostor = Opponent::seeded(Mark::X, 3);
        assert_eq!(
            session.play_opponent_turn(&mut impostor),
            Err(GameError::InvalidMove(MoveRejection::NotYourTurn(Mark::X)))
        );
        assert_eq!(session.game().board().count(Mark::X), 1);
    }

    #[test]
    fn test_supplied_opponent_move() {
        let mut session = GameSession::new();
        session.on_cell_activated(4).unwrap();
        let reply = session.on_opponent_move(0).unwrap();
        assert_eq!(reply.mark, Mark::O);
        assert_eq!(session.game().board().get(0), Ok(Square::Occupied(Mark::O)));
        assert_eq!(
            session.on_opponent_move(0),
            Err(GameError::InvalidMove(MoveRejection::NotYourTurn(Mark::O)))
        );
    }

    #[test]
    fn test_observers_see_every_event() {
        let events = Arc::new(Mutex::new(Vec::new()));
        let mut session = GameSession::new();
        session.subscribe(Box::new(Recorder {
            events: Arc::clone(&events),
        }));

        session.on_cell_activated(0).unwrap();
        session.play_opponent_turn(&mut bot(9)).unwrap();

        assert_eq!(
            *events.lock().unwrap(),
            vec![GameEvent::TurnChanged(Mark::O), GameEvent::TurnChanged(Mark::X)]
        );
    }

    #[test]
    fn test_score_counts_each_game_once() {
        let mut session = GameSession::new();
        let mut bot = bot(11);
        finish_game(&mut session, &mut bot);
        assert_eq!(session.scoreboard().games_played(), 1);

        // Rejected moves after the end must not count again.
        assert!(session.on_cell_activated(0).is_err());
        assert!(session.play_opponent_turn(&mut bot).is_err());
        assert_eq!(session.scoreboard().games_played(), 1);
    }

    #[test]
    fn test_restart_keeps_score() {
        let mut session = GameSession::new();
        finish_game(&mut session, &mut bot(5));
        let score = *session.scoreboard();

        session.on_restart_requested();
        assert_eq!(session.game().status(), GameStatus::InProgress);
        assert_eq!(session.game().turn(), Mark::X);
        assert_eq!(session.scoreboard(), &score);
    }

    #[test]
    fn test_scoreboard_record() {
        let mut score = Scoreboard::new();
        score.record(Outcome::Winner(Mark::X));
        score.record(Outcome::Winner(Mark::O));
        score.record(Outcome::Winner(Mark::O));
        score.record(Outcome::Draw);
        assert_eq!(*score.x_wins(), 1);
        assert_eq!(score.wins(Mark::O), 2);
        assert_eq!(*score.draws(), 1);
        assert_eq!(score.games_played(), 4);
    }
}
