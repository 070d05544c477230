//! Game engine: one session of tic-tac-toe.
//!
//! The engine owns the [`GameState`] and is the only thing that mutates it.
//! It never renders anything; every visible change is reported as a
//! [`GameEvent`] to an [`EventSink`].
//!
//! The computer's reply is not played inline. When a human move hands the
//! turn to the computer, the engine emits [`GameEvent::ComputerMoveRequested`]
//! with a [`MoveTicket`] and the front end calls
//! [`GameEngine::play_computer_move`] once its delay has elapsed. Tickets are
//! bound to the engine generation, which every reset bumps, so a reply that
//! arrives after a reset is dropped.

use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::policy::{HeuristicPolicy, Policy};
use super::rules::{self, Outcome};
use super::{GameError, GameState, GameStatus, Mode, Player, Position};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// The mark the computer plays in [`Mode::HumanVsComputer`].
pub const COMPUTER_MARK: Player = Player::O;

/// Semantic notifications emitted by the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// The board was cleared.
    BoardReset,
    /// A mark was placed.
    CellUpdated {
        /// Square that changed.
        position: Position,
        /// Mark placed there.
        player: Player,
    },
    /// It is now `0`'s turn.
    TurnChanged(Player),
    /// The game reached a terminal outcome.
    GameEnded(Outcome),
    /// The computer should move once its thinking delay has elapsed.
    ComputerMoveRequested(MoveTicket),
}

/// Receives engine events.
pub trait EventSink {
    /// Delivers one event.
    fn emit(&mut self, event: GameEvent);
}

impl EventSink for Vec<GameEvent> {
    fn emit(&mut self, event: GameEvent) {
        self.push(event);
    }
}

/// Claim on a scheduled computer move.
///
/// Only valid while the engine is still in the generation, turn, and move
/// count it was issued for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MoveTicket {
    generation: u64,
    player: Player,
    move_number: usize,
}

impl MoveTicket {
    /// Engine generation the ticket was issued in.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Side that is to move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Number of moves on the board when the ticket was issued.
    pub fn move_number(&self) -> usize {
        self.move_number
    }
}

/// Tic-tac-toe game engine.
#[derive(Debug)]
pub struct GameEngine<P = HeuristicPolicy, S = Vec<GameEvent>> {
    state: GameState,
    mode: Mode,
    generation: u64,
    policy: P,
    sink: S,
}

impl GameEngine {
    /// Creates an engine with an entropy-seeded heuristic opponent that
    /// buffers its events.
    pub fn new() -> Self {
        Self::with_parts(HeuristicPolicy::new(), Vec::new())
    }

    /// Creates an engine whose opponent uses a fixed seed.
    pub fn seeded(seed: u64) -> Self {
        Self::with_parts(HeuristicPolicy::seeded(seed), Vec::new())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Policy> GameEngine<P, Vec<GameEvent>> {
    /// Takes the buffered events, oldest first.
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.sink)
    }
}

impl<P: Policy, S: EventSink> GameEngine<P, S> {
    /// Creates an engine from an opponent policy and an event sink.
    ///
    /// The engine starts in [`Mode::HumanVsHuman`] with an empty board; no
    /// events are emitted until the first operation.
    pub fn with_parts(policy: P, sink: S) -> Self {
        Self {
            state: GameState::new(),
            mode: Mode::default(),
            generation: 0,
            policy,
            sink,
        }
    }

    /// Returns the current game state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the session mode.
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Returns the reset counter that scopes [`MoveTicket`]s.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns the event sink.
    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Returns the event sink mutably.
    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    /// True while the game is running and the computer is to move.
    pub fn is_computer_turn(&self) -> bool {
        self.state.status() == GameStatus::InProgress
            && self.mode.computer_mark() == Some(self.state.current_player())
    }

    /// Starts a new session in `mode`.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, mode: Mode) {
        info!(?mode, "Starting game");
        self.mode = mode;
        self.reset();
    }

    /// Clears the board and hands the first move to X.
    ///
    /// Any outstanding [`MoveTicket`] becomes stale.
    #[instrument(skip(self), fields(generation = self.generation))]
    pub fn reset(&mut self) {
        self.state.reset();
        self.generation += 1;
        info!(generation = self.generation, "Board reset");
        self.sink.emit(GameEvent::BoardReset);
        self.sink.emit(GameEvent::TurnChanged(self.state.current_player()));
    }

    /// Plays the current player's mark at `index` (0-8) on behalf of a human.
    ///
    /// Returns the outcome after the move. On error the state is unchanged.
    ///
    /// # Errors
    ///
    /// - [`GameError::GameOver`] if the game was already won or drawn.
    /// - [`GameError::NotYourTurn`] if the computer is to move.
    /// - [`GameError::OutOfBounds`] if `index` is not 0-8.
    /// - [`GameError::SquareOccupied`] if the square is taken.
    #[instrument(skip(self), fields(player = %self.state.current_player()))]
    pub fn apply_move(&mut self, index: usize) -> Result<Outcome, GameError> {
        if self.state.status().is_over() {
            debug!("Rejected move: game over");
            return Err(GameError::GameOver);
        }
        if self.is_computer_turn() {
            debug!("Rejected move: computer is to move");
            return Err(GameError::NotYourTurn(self.state.current_player()));
        }
        let pos = Position::try_from(index)?;
        self.place_and_advance(pos)
    }

    /// Plays the computer's reply for a previously issued ticket.
    ///
    /// Returns `Ok(None)` without touching the state if the ticket is stale:
    /// the board was reset, the game ended, or the turn moved on since it
    /// was issued.
    ///
    /// # Errors
    ///
    /// Propagates [`GameError::NoLegalMove`] from the policy; unreachable
    /// for a live ticket because the game is still in progress.
    #[instrument(skip(self))]
    pub fn play_computer_move(&mut self, ticket: MoveTicket) -> Result<Option<Position>, GameError> {
        if !self.ticket_is_live(&ticket) {
            debug!(
                generation = self.generation,
                moves = self.state.history().len(),
                "Discarding stale computer move"
            );
            return Ok(None);
        }

        let pos = self.policy.select_move(self.state.board(), ticket.player)?;
        self.place_and_advance(pos)?;
        Ok(Some(pos))
    }

    fn ticket_is_live(&self, ticket: &MoveTicket) -> bool {
        ticket.generation == self.generation
            && self.is_computer_turn()
            && ticket.player == self.state.current_player()
            && ticket.move_number == self.state.history().len()
    }

    fn issue_ticket(&self) -> MoveTicket {
        MoveTicket {
            generation: self.generation,
            player: self.state.current_player(),
            move_number: self.state.history().len(),
        }
    }

    /// Places the mark, evaluates the board, and passes the turn.
    fn place_and_advance(&mut self, pos: Position) -> Result<Outcome, GameError> {
        let action = self.state.record_move(pos)?;
        debug!(%action, "Move applied");
        self.sink.emit(GameEvent::CellUpdated {
            position: action.position(),
            player: action.player(),
        });

        let outcome = rules::evaluate(self.state.board());
        match outcome {
            GameStatus::Won(_) | GameStatus::Draw => {
                info!(?outcome, moves = self.state.history().len(), "Game over");
                self.state.set_status(outcome);
                self.sink.emit(GameEvent::GameEnded(outcome));
            }
            GameStatus::InProgress => {
                self.state.switch_player();
                self.sink.emit(GameEvent::TurnChanged(self.state.current_player()));
                if self.is_computer_turn() {
                    let ticket = self.issue_ticket();
                    debug!(?ticket, "Requesting computer move");
                    self.sink.emit(GameEvent::ComputerMoveRequested(ticket));
                }
            }
        }

        debug_assert!(
            TicTacToeInvariants::check_all(&self.state).is_ok(),
            "game invariants violated: {:?}",
            TicTacToeInvariants::check_all(&self.state)
        );
        Ok(outcome)
    }
}
