//! Move selection for the computer player.

use super::rules::LINES;
use super::{Board, GameError, Player, Position, Square};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

/// Chooses a square for the side it plays.
pub trait Policy {
    /// Selects an empty square on `board` for `me`.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full.
    fn select_move(&mut self, board: &Board, me: Player) -> Result<Position, GameError>;
}

/// Why the heuristic picked its square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, strum::Display)]
pub enum Reason {
    /// Completes three in a row.
    Win,
    /// Stops the opponent completing three in a row.
    Block,
    /// Takes the center.
    Center,
    /// Takes a random free corner.
    Corner,
    /// Takes a random free side.
    Side,
}

/// Win, block, center, corner, side; first rule that applies wins.
///
/// Corner and side ties are broken with the injected RNG, so a seeded
/// generator makes the policy fully reproducible.
#[derive(Debug, Clone)]
pub struct HeuristicPolicy<R = StdRng> {
    rng: R,
}

impl HeuristicPolicy<StdRng> {
    /// Creates a policy seeded from OS entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a policy with a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for HeuristicPolicy<StdRng> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Rng> HeuristicPolicy<R> {
    /// Creates a policy drawing tie-breaks from `rng`.
    pub fn with_rng(rng: R) -> Self {
        Self { rng }
    }

    /// Selects a square and reports which rule produced it.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::NoLegalMove`] if the board is full.
    #[instrument(skip(self, board))]
    pub fn decide(&mut self, board: &Board, me: Player) -> Result<(Position, Reason), GameError> {
        if let Some(pos) = completing_square(board, me) {
            return Ok((pos, Reason::Win));
        }
        if let Some(pos) = completing_square(board, me.opponent()) {
            return Ok((pos, Reason::Block));
        }
        if board.is_empty(Position::Center) {
            return Ok((Position::Center, Reason::Center));
        }
        if let Some(pos) = self.pick_random(board, &Position::CORNERS) {
            return Ok((pos, Reason::Corner));
        }
        if let Some(pos) = self.pick_random(board, &Position::SIDES) {
            return Ok((pos, Reason::Side));
        }
        Err(GameError::NoLegalMove)
    }

    fn pick_random(&mut self, board: &Board, candidates: &[Position]) -> Option<Position> {
        let free: Vec<Position> = candidates
            .iter()
            .copied()
            .filter(|pos| board.is_empty(*pos))
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.random_range(0..free.len())])
    }
}

impl<R: Rng> Policy for HeuristicPolicy<R> {
    fn select_move(&mut self, board: &Board, me: Player) -> Result<Position, GameError> {
        let (pos, reason) = self.decide(board, me)?;
        debug!(player = %me, position = %pos, %reason, "Policy selected move");
        Ok(pos)
    }
}

/// Finds the empty square of the first line holding two of `player`'s marks
/// and one empty square.
pub fn completing_square(board: &Board, player: Player) -> Option<Position> {
    LINES.iter().find_map(|line| {
        let owned = line
            .iter()
            .filter(|pos| board.get(**pos) == Square::Occupied(player))
            .count();
        let empty = line.iter().copied().find(|pos| board.is_empty(*pos));
        if owned == 2 { empty } else { None }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_blocks_opponent_line() {
        let board = Board::from_squares([X, X, E, E, E, E, E, E, E]);
        let mut policy = HeuristicPolicy::seeded(1);
        assert_eq!(
            policy.decide(&board, Player::O),
            Ok((Position::TopRight, Reason::Block))
        );
    }

    #[test]
    fn test_win_beats_block() {
        let board = Board::from_squares([O, O, E, X, X, E, E, E, E]);
        let mut policy = HeuristicPolicy::seeded(1);
        assert_eq!(
            policy.decide(&board, Player::O),
            Ok((Position::TopRight, Reason::Win))
        );
    }

    #[test]
    fn test_center_when_nothing_to_win_or_block() {
        let board = Board::from_squares([X, E, E, E, E, E, E, E, E]);
        let mut policy = HeuristicPolicy::seeded(1);
        assert_eq!(
            policy.decide(&board, Player::O),
            Ok((Position::Center, Reason::Center))
        );
    }

    #[test]
    fn test_corner_when_center_taken() {
        let board = Board::from_squares([E, E, E, E, X, E, E, E, E]);
        let mut policy = HeuristicPolicy::seeded(7);
        let (pos, reason) = policy.decide(&board, Player::O).unwrap();
        assert_eq!(reason, Reason::Corner);
        assert!(Position::CORNERS.contains(&pos));
    }

    #[test]
    fn test_side_when_corners_and_center_taken() {
        // O X O / . X . / X O X
        let board = Board::from_squares([O, X, O, E, X, E, X, O, X]);
        for seed in 0..20 {
            let mut policy = HeuristicPolicy::seeded(seed);
            let (pos, reason) = policy.decide(&board, Player::O).unwrap();
            assert_eq!(reason, Reason::Side);
            assert!(pos == Position::MiddleLeft || pos == Position::MiddleRight);
        }
    }

    #[test]
    fn test_full_board_has_no_move() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        let mut policy = HeuristicPolicy::seeded(1);
        assert_eq!(policy.select_move(&board, Player::O), Err(GameError::NoLegalMove));
    }

    #[test]
    fn test_same_seed_same_choice() {
        let board = Board::from_squares([E, E, E, E, X, E, E, E, E]);
        let first = HeuristicPolicy::seeded(42).select_move(&board, Player::O);
        for _ in 0..10 {
            assert_eq!(HeuristicPolicy::seeded(42).select_move(&board, Player::O), first);
        }
    }

    #[test]
    fn test_completing_square_ignores_blocked_lines() {
        let board = Board::from_squares([X, X, O, E, E, E, E, E, E]);
        assert_eq!(completing_square(&board, Player::X), None);
    }
}
