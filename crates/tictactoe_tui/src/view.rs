//! Presentation state built from engine events.

use tictactoe_core::rules::winning_line;
use tictactoe_core::{Board, GameEvent, GameStatus, Player, Position, Square};
use tracing::debug;

/// What the status bar is saying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLine {
    /// No game on screen.
    Idle,
    /// `0` is to move.
    Turn(Player),
    /// The computer's reply is pending.
    Thinking,
    /// `0` won.
    Won(Player),
    /// Nobody won.
    Draw,
}

impl StatusLine {
    /// Text for the status bar.
    pub fn text(self) -> String {
        match self {
            StatusLine::Idle => "Choose a game mode".to_string(),
            StatusLine::Turn(player) => format!("Player {}'s turn", player),
            StatusLine::Thinking => "Computer is thinking...".to_string(),
            StatusLine::Won(player) => format!("Player {} wins! 🎉", player),
            StatusLine::Draw => "Draw! 🤝".to_string(),
        }
    }
}

/// The board as the player sees it.
///
/// Updated only through [`BoardView::apply`], never by reading engine state.
#[derive(Debug, Clone)]
pub struct BoardView {
    cells: [Square; 9],
    status: StatusLine,
    winning_line: Option<[Position; 3]>,
}

impl Default for BoardView {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardView {
    /// Creates an empty, idle view.
    pub fn new() -> Self {
        Self {
            cells: [Square::Empty; 9],
            status: StatusLine::Idle,
            winning_line: None,
        }
    }

    /// Square shown at `pos`.
    pub fn cell(&self, pos: Position) -> Square {
        self.cells[pos.to_index()]
    }

    /// Current status.
    pub fn status(&self) -> StatusLine {
        self.status
    }

    /// Line to highlight after a win.
    pub fn winning_line(&self) -> Option<[Position; 3]> {
        self.winning_line
    }

    /// True if `pos` is part of the highlighted line.
    pub fn is_highlighted(&self, pos: Position) -> bool {
        self.winning_line.is_some_and(|line| line.contains(&pos))
    }

    /// Applies one engine event.
    pub fn apply(&mut self, event: &GameEvent) {
        debug!(?event, "Updating view");
        match *event {
            GameEvent::BoardReset => {
                self.cells = [Square::Empty; 9];
                self.winning_line = None;
            }
            GameEvent::CellUpdated { position, player } => {
                self.cells[position.to_index()] = Square::Occupied(player);
            }
            GameEvent::TurnChanged(player) => {
                self.status = StatusLine::Turn(player);
            }
            GameEvent::ComputerMoveRequested(_) => {
                self.status = StatusLine::Thinking;
            }
            GameEvent::GameEnded(GameStatus::Won(player)) => {
                self.status = StatusLine::Won(player);
                self.winning_line = winning_line(&Board::from_squares(self.cells))
                    .map(|(_, line)| line);
            }
            GameEvent::GameEnded(_) => {
                self.status = StatusLine::Draw;
            }
        }
    }

    /// Returns to the menu state.
    pub fn clear(&mut self) {
        *self = Self::new();
    }
}
