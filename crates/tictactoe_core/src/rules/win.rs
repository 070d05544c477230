//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use tracing::instrument;

/// Winning lines in fixed scan order: rows, columns, diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the first complete line and the player who owns it.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Player, [Position; 3])> {
    LINES.iter().find_map(|&[a, b, c]| {
        let sq = board.get(a);
        match sq {
            Square::Occupied(player) if sq == board.get(b) && sq == board.get(c) => {
                Some((player, [a, b, c]))
            }
            _ => None,
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(player, _)| player)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_top_row() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::X).unwrap();
        board.place(Position::TopRight, Player::X).unwrap();
        assert_eq!(check_winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_anti_diagonal_reports_line() {
        let mut board = Board::new();
        board.place(Position::TopRight, Player::O).unwrap();
        board.place(Position::Center, Player::O).unwrap();
        board.place(Position::BottomLeft, Player::O).unwrap();
        assert_eq!(
            winning_line(&board),
            Some((
                Player::O,
                [Position::TopRight, Position::Center, Position::BottomLeft]
            ))
        );
    }

    #[test]
    fn test_no_winner_mixed_line() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::TopCenter, Player::X).unwrap();
        board.place(Position::TopRight, Player::O).unwrap();
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_every_line_detected() {
        for line in LINES {
            let mut board = Board::new();
            for pos in line {
                board.place(pos, Player::O).unwrap();
            }
            assert_eq!(winning_line(&board), Some((Player::O, line)));
        }
    }
}
