//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. The engine calls [`evaluate`] after every
//! placement; the opponent policy reads the same [`LINES`] table.

pub mod draw;
pub mod win;

pub use draw::{is_draw, is_full};
pub use win::{LINES, check_winner, winning_line};

use super::{Board, GameStatus};
use tracing::instrument;

/// Result of evaluating a board.
pub type Outcome = GameStatus;

/// Evaluates a board: the first complete line wins, a full board without one
/// is a draw, anything else is still in progress.
///
/// Pure and idempotent.
#[instrument(skip(board))]
pub fn evaluate(board: &Board) -> Outcome {
    if let Some(winner) = check_winner(board) {
        return GameStatus::Won(winner);
    }
    if is_full(board) {
        return GameStatus::Draw;
    }
    GameStatus::InProgress
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Player, Square};

    const E: Square = Square::Empty;
    const X: Square = Square::Occupied(Player::X);
    const O: Square = Square::Occupied(Player::O);

    #[test]
    fn test_top_row_wins() {
        let board = Board::from_squares([X, X, X, E, E, E, E, E, E]);
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        let board = Board::from_squares([X, O, X, X, O, O, O, X, X]);
        assert_eq!(evaluate(&board), GameStatus::Draw);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        let board = Board::from_squares([X, X, X, O, O, X, X, O, O]);
        assert_eq!(evaluate(&board), GameStatus::Won(Player::X));
    }

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate(&Board::new()), GameStatus::InProgress);
    }

    #[test]
    fn test_evaluate_is_idempotent() {
        let board = Board::from_squares([O, X, E, E, O, X, E, E, O]);
        let first = evaluate(&board);
        assert_eq!(first, GameStatus::Won(Player::O));
        assert_eq!(evaluate(&board), first);
    }
}
