//! Tests for the tic-tac-toe engine state machine.

use tictactoe::rules::{apply_move, check_draw, check_win};
use tictactoe::{
    Board, Cell, CoinFace, FixedCoin, GameEngine, GameState, MoveError, Outcome, PlayerId,
    Position, SeededCoin, TurnOrder,
};

const E: Cell = Cell::Empty;
const O: Cell = Cell::Occupied(PlayerId::Player1);
const X: Cell = Cell::Occupied(PlayerId::Player2);

fn play(state: GameState, moves: &[(usize, usize)]) -> GameState {
    moves.iter().fold(state, |state, &(row, col)| {
        state.play(row, col).expect("legal move")
    })
}

#[test]
fn test_row_scenario_wins() {
    let board = Board::from_rows([[X, X, X], [E, E, E], [E, E, E]]);
    assert_eq!(check_win(&board), Some(PlayerId::Player2));
}

#[test]
fn test_column_scenario_wins() {
    let board = Board::from_rows([[O, E, E], [O, E, E], [O, E, E]]);
    assert_eq!(check_win(&board), Some(PlayerId::Player1));
}

#[test]
fn test_diagonal_scenario_wins() {
    let board = Board::from_rows([[X, E, E], [E, X, E], [E, E, X]]);
    assert_eq!(check_win(&board), Some(PlayerId::Player2));
}

#[test]
fn test_full_board_draw_scenario() {
    let board = Board::from_rows([[X, O, X], [X, O, O], [O, X, X]]);
    assert_eq!(check_win(&board), None);
    assert!(check_draw(&board, 9));
}

#[test]
fn test_played_out_draw_scenario() {
    // Player 2 (x) opens; ends on x o x / x o o / o x x
    let state = play(
        GameState::new(TurnOrder::from_first(false)),
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );
    assert_eq!(state.outcome(), Outcome::Draw);
    assert_eq!(
        state.board(),
        &Board::from_rows([[X, O, X], [X, O, O], [O, X, X]])
    );
}

#[test]
fn test_in_progress_until_line_or_full() {
    let moves = [(0, 0), (0, 1), (0, 2), (1, 1), (1, 0), (1, 2), (2, 1), (2, 0)];
    let mut state = GameState::new(TurnOrder::from_first(false));
    for &(row, col) in &moves {
        state = state.play(row, col).unwrap();
        assert!(state.board().occupied() < 9);
        assert_eq!(check_win(state.board()), None);
        assert_eq!(state.outcome(), Outcome::InProgress);
    }
}

#[test]
fn test_move_after_win_is_game_over() {
    let state = play(
        GameState::new(TurnOrder::default()),
        &[(0, 0), (1, 0), (0, 1), (1, 1), (0, 2)],
    );
    assert_eq!(state.outcome(), Outcome::Won(PlayerId::Player1));
    assert_eq!(state.play(2, 2), Err(MoveError::GameOver));
}

#[test]
fn test_occupied_cell_rejected_and_board_unchanged() {
    let board = apply_move(&Board::new(), 2, 0, PlayerId::Player2).unwrap();
    let copy = board;
    assert_eq!(
        apply_move(&board, 2, 0, PlayerId::Player1),
        Err(MoveError::CellOccupied(Position::BottomLeft))
    );
    assert_eq!(board, copy);
}

#[test]
fn test_out_of_bounds_rejected() {
    let state = GameState::default();
    for (row, col) in [(3, 0), (0, 3), (3, 3), (100, 1)] {
        assert_eq!(
            state.play(row, col),
            Err(MoveError::OutOfBounds { row, col })
        );
    }
}

#[test]
fn test_seeded_engines_agree_on_first_player() {
    for seed in 0..16 {
        let a = GameEngine::from_coin(&mut SeededCoin::new(seed));
        let b = GameEngine::from_coin(&mut SeededCoin::new(seed));
        assert_eq!(a.active_player(), b.active_player());
    }
}

#[test]
fn test_tails_lets_player_two_open() {
    let mut engine = GameEngine::from_coin(&mut FixedCoin(CoinFace::Tails));
    assert_eq!(engine.active_player(), PlayerId::Player2);
    engine.make_move(1, 1).unwrap();
    assert_eq!(
        engine.state().board().get(Position::Center),
        Cell::Occupied(PlayerId::Player2)
    );
    let state = engine.into_state();
    assert_eq!(state.move_count(), 1);
    assert_eq!(state.active_player(), PlayerId::Player1);
}
