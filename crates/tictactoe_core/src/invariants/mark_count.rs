//! Mark count invariant: one mark on the board per move played.

use super::super::GameState;
use super::Invariant;

/// Invariant: occupied squares equal the number of moves since reset.
pub struct MarkCountInvariant;

impl Invariant<GameState> for MarkCountInvariant {
    fn holds(state: &GameState) -> bool {
        state.board().occupied_count() == state.history().len()
    }

    fn description() -> &'static str {
        "Occupied squares equal moves played since reset"
    }
}
