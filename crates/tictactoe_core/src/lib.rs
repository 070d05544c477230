//! Tic-tac-toe game engine.
//!
//! Pure game logic with no terminal or runtime dependencies:
//!
//! - [`Board`] and [`Position`]: the 3x3 grid and its validated indices
//! - [`rules`]: outcome evaluation over the eight fixed [`LINES`]
//! - [`policy`]: the computer's win / block / center / corner / side heuristic
//! - [`GameEngine`]: turn order, move validation, and semantic [`GameEvent`]s
//!
//! # Example
//!
//! ```
//! use tictactoe_core::{GameEngine, GameStatus, Mode, Player};
//!
//! let mut engine = GameEngine::seeded(7);
//! engine.start_game(Mode::HumanVsHuman);
//! for index in [0, 3, 1, 4] {
//!     engine.apply_move(index).unwrap();
//! }
//! assert_eq!(engine.apply_move(2), Ok(GameStatus::Won(Player::X)));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod engine;
mod error;
pub mod invariants;
pub mod policy;
mod position;
pub mod rules;
mod types;

pub use action::Move;
pub use engine::{COMPUTER_MARK, EventSink, GameEngine, GameEvent, MoveTicket};
pub use error::{ErrorKind, GameError};
pub use policy::{HeuristicPolicy, Policy};
pub use position::Position;
pub use rules::{LINES, Outcome, evaluate};
pub use types::{Board, GameState, GameStatus, Mode, Player, Square};

/// Alias for clarity: a player's symbol on the board.
pub type Mark = Player;
