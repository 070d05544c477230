//! Error types for the game engine.

use super::{Player, Position};

/// Broad classification of a [`GameError`].
///
/// Front ends only need the kind to decide what to do: an `InvalidMove` is
/// ignored, the other two indicate a bug in the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, strum::Display)]
pub enum ErrorKind {
    /// The move was rejected by the rules (occupied square, finished game,
    /// or not the submitter's turn).
    InvalidMove,
    /// A cell index outside 0-8 was supplied.
    IndexError,
    /// The opponent policy was asked to move on a full board.
    NoLegalMove,
}

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum GameError {
    /// The game has already been won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(Position),

    /// It's the other side's turn (the computer is thinking).
    #[display("It's not your turn, {:?} is to move", _0)]
    NotYourTurn(Player),

    /// Cell index outside the board.
    #[display("Position {} out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),

    /// No empty square is left for the opponent policy.
    #[display("No legal move available")]
    NoLegalMove,
}

impl GameError {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            GameError::GameOver | GameError::SquareOccupied(_) | GameError::NotYourTurn(_) => {
                ErrorKind::InvalidMove
            }
            GameError::OutOfBounds(_) => ErrorKind::IndexError,
            GameError::NoLegalMove => ErrorKind::NoLegalMove,
        }
    }

    /// Returns true if the error is a rejected move that callers may ignore.
    pub fn is_invalid_move(&self) -> bool {
        self.kind() == ErrorKind::InvalidMove
    }
}

impl std::error::Error for GameError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        assert_eq!(GameError::GameOver.kind(), ErrorKind::InvalidMove);
        assert_eq!(
            GameError::SquareOccupied(Position::Center).kind(),
            ErrorKind::InvalidMove
        );
        assert_eq!(GameError::NotYourTurn(Player::O).kind(), ErrorKind::InvalidMove);
        assert_eq!(GameError::OutOfBounds(9).kind(), ErrorKind::IndexError);
        assert_eq!(GameError::NoLegalMove.kind(), ErrorKind::NoLegalMove);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            GameError::OutOfBounds(12).to_string(),
            "Position 12 out of bounds (must be 0-8)"
        );
        assert_eq!(
            GameError::SquareOccupied(Position::TopLeft).to_string(),
            "Square Top-left is already occupied"
        );
        assert_eq!(ErrorKind::IndexError.to_string(), "IndexError");
    }
}
