//! History consistency invariant: the board is the replay of its history.

use super::super::{GameState, Square};
use super::Invariant;
use std::collections::HashSet;

/// Invariant: every move in history owns the square it claims, and no square
/// appears twice.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(state: &GameState) -> bool {
        let mut seen = HashSet::new();
        state.history().iter().all(|m| {
            seen.insert(m.position())
                && state.board().get(m.position()) == Square::Occupied(m.player())
        })
    }

    fn description() -> &'static str {
        "Board squares match move history"
    }
}
