//! Core domain types for tic-tac-toe.

use super::action::Move;
use super::error::GameError;
use super::position::Position;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Player in the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display)]
pub enum Player {
    /// Player X (goes first).
    X,
    /// Player O (goes second, the computer in single-player games).
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A square on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Square {
    /// Empty square.
    #[default]
    Empty,
    /// Square occupied by a player.
    Occupied(Player),
}

impl Square {
    /// Returns the occupying player, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Square::Empty => None,
            Square::Occupied(player) => Some(player),
        }
    }
}

/// 3x3 tic-tac-toe board.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    /// Squares in row-major order (0-8).
    squares: [Square; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a board from nine squares in row-major order.
    pub fn from_squares(squares: [Square; 9]) -> Self {
        Self { squares }
    }

    /// Gets the square at the given position.
    pub fn get(&self, pos: Position) -> Square {
        self.squares[pos.to_index()]
    }

    /// Checks if a square is empty.
    pub fn is_empty(&self, pos: Position) -> bool {
        self.get(pos) == Square::Empty
    }

    /// Checks if the square at a raw index is empty.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for indices outside 0-8.
    pub fn is_empty_at(&self, index: usize) -> Result<bool, GameError> {
        Ok(self.is_empty(Position::try_from(index)?))
    }

    /// Places `player`'s mark on an empty square.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::SquareOccupied`] if the square already holds a mark.
    #[instrument(skip(self))]
    pub fn place(&mut self, pos: Position, player: Player) -> Result<(), GameError> {
        if !self.is_empty(pos) {
            return Err(GameError::SquareOccupied(pos));
        }
        self.squares[pos.to_index()] = Square::Occupied(player);
        Ok(())
    }

    /// Places a mark at a raw index.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::OutOfBounds`] for indices outside 0-8, or
    /// [`GameError::SquareOccupied`] if the square already holds a mark.
    pub fn place_at(&mut self, index: usize, player: Player) -> Result<(), GameError> {
        self.place(Position::try_from(index)?, player)
    }

    /// Checks if every square is occupied.
    pub fn is_full(&self) -> bool {
        self.squares.iter().all(|s| *s != Square::Empty)
    }

    /// Number of occupied squares.
    pub fn occupied_count(&self) -> usize {
        self.squares.iter().filter(|s| **s != Square::Empty).count()
    }

    /// Empty squares in index order.
    pub fn empty_positions(&self) -> Vec<Position> {
        Position::valid_moves(self)
    }

    /// Clears every square.
    pub fn reset(&mut self) {
        self.squares = [Square::Empty; 9];
    }

    /// Returns all squares as a slice.
    pub fn squares(&self) -> &[Square; 9] {
        &self.squares
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty squares show their 1-based key so the grid doubles as a keypad.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for pos in Position::ALL {
            let symbol = match self.get(pos) {
                Square::Empty => (pos.to_index() + 1).to_string(),
                Square::Occupied(player) => player.to_string(),
            };
            result.push_str(&symbol);
            match (pos.row(), pos.col()) {
                (2, 2) => {}
                (_, 2) => result.push_str("\n-+-+-\n"),
                _ => result.push('|'),
            }
        }
        result
    }
}

/// Current status of the game: the result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win.
    Won(Player),
    /// Game ended in a draw.
    Draw,
}

impl GameStatus {
    /// Returns true once the game has been won or drawn.
    pub fn is_over(self) -> bool {
        self != GameStatus::InProgress
    }

    /// Returns the winner, if any.
    pub fn winner(self) -> Option<Player> {
        match self {
            GameStatus::Won(player) => Some(player),
            _ => None,
        }
    }
}

/// Who plays the second side.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Mode {
    /// Two humans share the board.
    #[default]
    HumanVsHuman,
    /// The human plays X against the computer.
    HumanVsComputer,
}

impl Mode {
    /// The mark the computer plays in this mode.
    pub fn computer_mark(self) -> Option<Player> {
        match self {
            Mode::HumanVsHuman => None,
            Mode::HumanVsComputer => Some(crate::COMPUTER_MARK),
        }
    }

    /// Label for display.
    pub fn label(self) -> &'static str {
        match self {
            Mode::HumanVsHuman => "Player vs Player",
            Mode::HumanVsComputer => "Player vs Computer",
        }
    }
}

/// Complete game state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Current player to move.
    current_player: Player,
    /// Game status.
    status: GameStatus,
    /// Moves played since the last reset.
    history: Vec<Move>,
}

impl GameState {
    /// Creates a new game.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            status: GameStatus::InProgress,
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the current player.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the game status.
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Returns the move history.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Places the current player's mark and records the move.
    ///
    /// Does not switch turns or evaluate the board; the engine does both.
    pub(crate) fn record_move(&mut self, pos: Position) -> Result<Move, GameError> {
        let action = Move::new(self.current_player, pos);
        self.board.place(pos, action.player())?;
        self.history.push(action);
        Ok(action)
    }

    pub(crate) fn set_status(&mut self, status: GameStatus) {
        self.status = status;
    }

    pub(crate) fn switch_player(&mut self) {
        self.current_player = self.current_player.opponent();
    }

    /// Returns to the initial state: empty board, X to move.
    pub(crate) fn reset(&mut self) {
        self.board.reset();
        self.current_player = Player::X;
        self.status = GameStatus::InProgress;
        self.history.clear();
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_place_rejects_occupied() {
        let mut board = Board::new();
        board.place(Position::Center, Player::X).unwrap();
        assert_eq!(
            board.place(Position::Center, Player::O),
            Err(GameError::SquareOccupied(Position::Center))
        );
        assert_eq!(board.get(Position::Center), Square::Occupied(Player::X));
    }

    #[test]
    fn test_index_accessors_reject_out_of_range() {
        let mut board = Board::new();
        assert_eq!(board.is_empty_at(9), Err(GameError::OutOfBounds(9)));
        assert_eq!(board.place_at(100, Player::X), Err(GameError::OutOfBounds(100)));
        assert_eq!(board.is_empty_at(8), Ok(true));
    }

    #[test]
    fn test_full_and_reset() {
        let mut board = Board::new();
        for pos in Position::ALL {
            assert!(!board.is_full());
            board.place(pos, Player::O).unwrap();
        }
        assert!(board.is_full());
        assert_eq!(board.occupied_count(), 9);

        board.reset();
        assert_eq!(board.occupied_count(), 0);
        assert!(board.empty_positions().len() == 9);
    }

    #[test]
    fn test_display() {
        let mut board = Board::new();
        board.place(Position::TopLeft, Player::X).unwrap();
        board.place(Position::Center, Player::O).unwrap();
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_mode_computer_mark() {
        assert_eq!(Mode::HumanVsComputer.computer_mark(), Some(Player::O));
        assert_eq!(Mode::HumanVsHuman.computer_mark(), None);
    }
}
