//! End-to-end tests for the game engine.

use tictactoe_core::{
    ErrorKind, GameEngine, GameError, GameEvent, GameStatus, Mode, MoveTicket, Player, Position,
    Square,
};

fn fresh(mode: Mode) -> GameEngine {
    let mut engine = GameEngine::seeded(11);
    engine.start_game(mode);
    engine.drain_events();
    engine
}

fn requested_ticket(engine: &mut GameEngine) -> Option<MoveTicket> {
    engine.drain_events().into_iter().find_map(|e| match e {
        GameEvent::ComputerMoveRequested(t) => Some(t),
        _ => None,
    })
}

#[test]
fn test_top_row_scenario() {
    let mut engine = fresh(Mode::HumanVsHuman);

    for index in [0, 3, 1, 4] {
        assert_eq!(engine.apply_move(index), Ok(GameStatus::InProgress));
    }
    assert_eq!(engine.apply_move(2), Ok(GameStatus::Won(Player::X)));
    assert_eq!(engine.state().status(), GameStatus::Won(Player::X));

    let events = engine.drain_events();
    assert_eq!(
        events.last(),
        Some(&GameEvent::GameEnded(GameStatus::Won(Player::X)))
    );

    // No sixth move.
    let result = engine.apply_move(5);
    assert_eq!(result, Err(GameError::GameOver));
    assert_eq!(engine.state().history().len(), 5);
}

#[test]
fn test_occupied_square_rejected_without_change() {
    let mut engine = fresh(Mode::HumanVsHuman);
    engine.apply_move(0).unwrap();
    let before = engine.state().clone();

    let err = engine.apply_move(0).unwrap_err();
    assert_eq!(err, GameError::SquareOccupied(Position::TopLeft));
    assert_eq!(err.kind(), ErrorKind::InvalidMove);
    assert_eq!(engine.state(), &before);
    assert_eq!(engine.state().board().get(Position::TopLeft), Square::Occupied(Player::X));
}

#[test]
fn test_terminal_rejection_after_draw() {
    let mut engine = fresh(Mode::HumanVsHuman);
    // X O X / X O O / O X X
    for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
        engine.apply_move(index).unwrap();
    }
    assert_eq!(engine.state().status(), GameStatus::Draw);

    let before = engine.state().clone();
    for index in 0..9 {
        let err = engine.apply_move(index).unwrap_err();
        assert!(err.is_invalid_move());
    }
    assert_eq!(engine.state(), &before);
}

#[test]
fn test_mark_count_and_alternation() {
    let mut engine = fresh(Mode::HumanVsHuman);
    let mut expected = Player::X;
    for (played, index) in [4, 0, 8, 2, 1].into_iter().enumerate() {
        assert_eq!(engine.state().current_player(), expected);
        engine.apply_move(index).unwrap();
        assert_eq!(engine.state().board().occupied_count(), played + 1);
        expected = expected.opponent();
    }

    // Failed moves do not count.
    let _ = engine.apply_move(4);
    assert_eq!(engine.state().board().occupied_count(), 5);
}

#[test]
fn test_reset_returns_to_initial_state() {
    let mut engine = fresh(Mode::HumanVsHuman);
    for index in [0, 3, 1, 4, 2] {
        engine.apply_move(index).unwrap();
    }
    engine.drain_events();

    engine.reset();
    assert_eq!(engine.state().status(), GameStatus::InProgress);
    assert_eq!(engine.state().current_player(), Player::X);
    assert_eq!(engine.state().board().occupied_count(), 0);
    assert_eq!(
        engine.drain_events(),
        vec![GameEvent::BoardReset, GameEvent::TurnChanged(Player::X)]
    );
    assert!(engine.apply_move(4).is_ok());
}

#[test]
fn test_computer_game_runs_to_completion() {
    let mut engine = fresh(Mode::HumanVsComputer);

    while engine.state().status() == GameStatus::InProgress {
        let index = Position::valid_moves(engine.state().board())[0].to_index();
        engine.apply_move(index).unwrap();
        if let Some(ticket) = requested_ticket(&mut engine) {
            assert!(engine.play_computer_move(ticket).unwrap().is_some());
        }
    }

    let history = engine.state().history();
    for (i, m) in history.iter().enumerate() {
        let expected = if i % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(m.player(), expected);
    }
    // First-free-square play never beats the heuristic.
    assert_ne!(engine.state().status(), GameStatus::Won(Player::X));
}

#[test]
fn test_new_game_invalidates_pending_computer_move() {
    let mut engine = fresh(Mode::HumanVsComputer);
    engine.apply_move(4).unwrap();
    let pending = requested_ticket(&mut engine).unwrap();

    engine.start_game(Mode::HumanVsHuman);
    assert_eq!(engine.play_computer_move(pending), Ok(None));
    assert_eq!(engine.state().board().occupied_count(), 0);
    assert_eq!(engine.state().current_player(), Player::X);
}

#[test]
fn test_computer_blocks_in_engine() {
    let mut engine = fresh(Mode::HumanVsComputer);
    engine.apply_move(0).unwrap();
    let t = requested_ticket(&mut engine).unwrap();
    assert_eq!(engine.play_computer_move(t), Ok(Some(Position::Center)));

    engine.apply_move(1).unwrap();
    let t = requested_ticket(&mut engine).unwrap();
    assert_eq!(engine.play_computer_move(t), Ok(Some(Position::TopRight)));
}
