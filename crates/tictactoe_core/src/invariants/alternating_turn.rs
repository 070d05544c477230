//! Alternating turn invariant: players alternate X, O, X, O, ...

use super::super::{GameState, Player};
use super::Invariant;

/// Invariant: Players alternate turns.
///
/// Move history must show X, O, X, O, ... pattern and, while the game is in
/// progress, the player to move must follow from the history length.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(state: &GameState) -> bool {
        let alternates = state.history().iter().enumerate().all(|(i, m)| {
            let expected = if i % 2 == 0 { Player::X } else { Player::O };
            m.player() == expected
        });
        if !alternates {
            return false;
        }

        // After the last move of a finished game the turn does not pass.
        if state.status().is_over() {
            return true;
        }

        let expected_next = if state.history().len() % 2 == 0 {
            Player::X
        } else {
            Player::O
        };
        state.current_player() == expected_next
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
