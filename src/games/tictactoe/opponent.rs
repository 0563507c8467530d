//! Move selection for the scripted opponent.
//!
//! The policy looks one ply ahead and no further. Rules are tried in
//! order and the first one that applies picks the move:
//!
//! 1. complete one of our own lines,
//! 2. block a line the rival would complete,
//! 3. take the center,
//! 4. take a random free corner,
//! 5. take any random free square.
//!
//! Ties within rules 1 and 2 go to the lowest index. Rules 4 and 5 draw
//! uniformly from the supplied random source.

use super::error::GameError;
use super::types::{Board, Player};
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use tracing::{debug, instrument, warn};

/// Index of the center square.
pub const CENTER: usize = 4;

/// Indices of the corner squares.
pub const CORNERS: [usize; 4] = [0, 2, 6, 8];

/// Which rule of the policy produced a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum Rule {
    /// The move completes a line for the mover.
    Win,
    /// The move occupies the square the rival needs to complete a line.
    Block,
    /// The center was free.
    Center,
    /// A random free corner.
    Corner,
    /// A random free square.
    Any,
}

/// A chosen square together with the rule that chose it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveChoice {
    /// Board index (0-8).
    pub index: usize,
    /// Rule that produced the choice.
    pub rule: Rule,
}

/// Picks a square for `me` on `board`.
///
/// # Errors
///
/// Returns [`GameError::NoMoveAvailable`] if the board has no empty square.
pub fn select_move<R: Rng + ?Sized>(
    board: &Board,
    me: Player,
    rival: Player,
    rng: &mut R,
) -> Result<usize, GameError> {
    choose_move(board, me, rival, rng).map(|choice| choice.index)
}

/// Like [`select_move`], but also reports which rule fired.
#[instrument(level = "debug", skip(board, rng))]
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    me: Player,
    rival: Player,
    rng: &mut R,
) -> Result<MoveChoice, GameError> {
    let empty = board.empty_indices();
    if empty.is_empty() {
        warn!("Opponent asked to move on a full board");
        return Err(GameError::NoMoveAvailable);
    }

    let choice = if let Some(index) = completing_move(board, me) {
        MoveChoice { index, rule: Rule::Win }
    } else if let Some(index) = completing_move(board, rival) {
        MoveChoice { index, rule: Rule::Block }
    } else if board.is_empty(CENTER) {
        MoveChoice {
            index: CENTER,
            rule: Rule::Center,
        }
    } else {
        let corners: Vec<usize> = CORNERS
            .iter()
            .copied()
            .filter(|&i| board.is_empty(i))
            .collect();
        match corners.choose(rng) {
            Some(&index) => MoveChoice {
                index,
                rule: Rule::Corner,
            },
            None => {
                let index = *empty.choose(rng).ok_or(GameError::NoMoveAvailable)?;
                MoveChoice {
                    index,
                    rule: Rule::Any,
                }
            }
        }
    };

    debug!(index = choice.index, rule = %choice.rule, "Opponent chose square");
    Ok(choice)
}

/// First empty square (in index order) that would give `player` a line.
pub fn completing_move(board: &Board, player: Player) -> Option<usize> {
    board.empty_indices().into_iter().find(|&index| {
        let mut trial = board.clone();
        trial.set(index, player).is_ok() && trial.is_win(player)
    })
}

/// The scripted opponent: a fixed mark plus its own random source.
///
/// Each opponent owns its generator, so two games never share
/// random state. Seeded opponents replay the same choices.
#[derive(Debug, Clone)]
pub struct Opponent {
    mark: Player,
    rng: ChaCha8Rng,
}

impl Opponent {
    /// Creates an opponent seeded from OS entropy.
    #[instrument]
    pub fn new(mark: Player) -> Self {
        Self {
            mark,
            rng: ChaCha8Rng::from_entropy(),
        }
    }

    /// Creates an opponent whose random choices are reproducible.
    #[instrument]
    pub fn seeded(mark: Player, seed: u64) -> Self {
        Self {
            mark,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// The mark this opponent plays.
    pub fn mark(&self) -> Player {
        self.mark
    }

    /// Picks a square on `board` for this opponent.
    pub fn select_move(&mut self, board: &Board) -> Result<usize, GameError> {
        self.choose_move(board).map(|choice| choice.index)
    }

    /// Picks a square and reports the rule that chose it.
    pub fn choose_move(&mut self, board: &Board) -> Result<MoveChoice, GameError> {
        choose_move(board, self.mark, self.mark.opponent(), &mut self.rng)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::mock::StepRng;

    fn board(layout: &str) -> Board {
        layout.parse().expect("valid layout")
    }

    fn rng() -> ChaCha8Rng {
        ChaCha8Rng::seed_from_u64(7)
    }

    #[test]
    fn test_takes_center_after_corner_opening() {
        let b = board("X........");
        let choice = choose_move(&b, Player::O, Player::X, &mut rng()).unwrap();
        assert_eq!(choice, MoveChoice { index: 4, rule: Rule::Center });
    }

    #[test]
    fn test_blocks_open_pair() {
        let b = board("XX.......");
        let choice = choose_move(&b, Player::O, Player::X, &mut rng()).unwrap();
        assert_eq!(choice, MoveChoice { index: 2, rule: Rule::Block });
    }

    #[test]
    fn test_win_beats_block() {
        // O can finish the middle row; X threatens the top row.
        let b = board("XX. OO. X..");
        let choice = choose_move(&b, Player::O, Player::X, &mut rng()).unwrap();
        assert_eq!(choice, MoveChoice { index: 5, rule: Rule::Win });
    }

    #[test]
    fn test_first_winning_square_in_index_order() {
        // O wins at 2 (top row) or 6 (left column); 2 comes first.
        let b = board("OO. OXX .X.");
        assert_eq!(completing_move(&b, Player::O), Some(2));
        let choice = choose_move(&b, Player::O, Player::X, &mut rng()).unwrap();
        assert_eq!(choice.index, 2);
    }

    #[test]
    fn test_corner_when_center_taken() {
        let b = board("....X....");
        let choice = choose_move(&b, Player::O, Player::X, &mut rng()).unwrap();
        assert_eq!(choice.rule, Rule::Corner);
        assert!(CORNERS.contains(&choice.index));
    }

    #[test]
    fn test_any_when_center_and_corners_taken() {
        // X O X / . X . / O X O: no threats left for either side.
        let b = board("XOX .X. OXO");
        assert_eq!(completing_move(&b, Player::O), None);
        assert_eq!(completing_move(&b, Player::X), None);
        let choice = choose_move(&b, Player::O, Player::X, &mut rng()).unwrap();
        assert_eq!(choice.rule, Rule::Any);
        assert!([3, 5].contains(&choice.index));
    }

    #[test]
    fn test_random_choice_follows_injected_source() {
        // A zeroed source always picks the first candidate.
        let b = board("....X....");
        let mut zero = StepRng::new(0, 0);
        assert_eq!(select_move(&b, Player::O, Player::X, &mut zero), Ok(0));
    }

    #[test]
    fn test_full_board_has_no_move() {
        let b = board("XOX XOO OXX");
        assert_eq!(
            select_move(&b, Player::O, Player::X, &mut rng()),
            Err(GameError::NoMoveAvailable)
        );
    }

    #[test]
    fn test_seeded_opponents_agree() {
        let b = board("....X....");
        let mut first = Opponent::seeded(Player::O, 42);
        let mut second = Opponent::seeded(Player::O, 42);
        for _ in 0..16 {
            assert_eq!(first.select_move(&b), second.select_move(&b));
        }
    }

    #[test]
    fn test_opponent_plays_its_own_mark() {
        // O to move: O completes the right column.
        let b = board("XXO ..O ...");
        let mut opponent = Opponent::seeded(Player::O, 1);
        assert_eq!(opponent.mark(), Player::O);
        assert_eq!(opponent.choose_move(&b).unwrap(), MoveChoice { index: 8, rule: Rule::Win });
    }
}
