//! End-to-end scenarios for the public move-engine API

use oxo::{Action, Board, Cell, LineAnalyzer, Player, heuristic_move, minimax};
use rand::{SeedableRng, rngs::StdRng};

#[test]
fn opening_move_from_initial_state_is_center() {
    let board = Board::new();
    assert_eq!(minimax(&board).unwrap(), Action::new(1, 1));
}

#[test]
fn both_strategies_take_an_immediate_win() {
    // X X .
    // O O .
    // . . .
    // X to move: (0, 2) wins on the spot, and any non-blocking alternative
    // lets O complete the middle row.
    let board = Board::from_string("XX.OO....").unwrap();

    assert_eq!(minimax(&board).unwrap(), Action::new(0, 2));

    let mut rng = StdRng::seed_from_u64(0);
    assert_eq!(heuristic_move(&board, &mut rng).unwrap(), Action::new(0, 2));
}

#[test]
fn minimax_blocks_a_forced_loss() {
    // X . .
    // O O .
    // . . X
    // X to move: every action other than (1, 2) loses to the middle row.
    let board = Board::from_string("X..OO...X").unwrap();
    let action = minimax(&board).unwrap();
    assert_eq!(action, Action::new(1, 2));

    // Playing on under optimal O replies must not end in an O win.
    let mut board = board.apply_move(action).unwrap();
    while !board.is_terminal() {
        board = board.apply_move(minimax(&board).unwrap()).unwrap();
    }
    assert_ne!(board.winner(), Some(Player::O));
}

#[test]
fn full_board_without_a_line_is_a_draw() {
    // X O X
    // X O O
    // O X X
    let board = Board::from_string("XOXXOOOXX").unwrap();
    assert!(board.is_terminal());
    assert_eq!(board.winner(), None);
    assert_eq!(board.utility(), 0);
    assert!(board.legal_actions().is_empty());
}

#[test]
fn completion_slot_scan_matches_line_semantics() {
    let line = [Cell::X, Cell::Empty, Cell::X];
    assert_eq!(LineAnalyzer::completion_slot(&line, Player::X), Some(1));
    assert_eq!(LineAnalyzer::completion_slot(&line, Player::O), None);
}

#[test]
fn minimax_is_deterministic_across_calls() {
    let boards = ["X........", "X...O....", "XOX.X.O..", "X..OO...X"];
    for encoded in boards {
        let board = Board::from_string(encoded).unwrap();
        assert_eq!(
            minimax(&board).unwrap(),
            minimax(&board).unwrap(),
            "minimax disagreed with itself on {encoded}"
        );
    }
}

#[test]
fn transitions_are_pure_and_shrink_the_action_set() {
    let mut rng = StdRng::seed_from_u64(99);
    let mut board = Board::new();

    while !board.is_terminal() {
        let before = board;
        let actions_before = board.legal_actions();

        let action = heuristic_move(&board, &mut rng).unwrap();
        let next = board.apply_move(action).unwrap();

        assert_eq!(board, before, "apply_move mutated its input");
        assert_eq!(
            next.legal_actions().len(),
            actions_before.len() - 1,
            "each move must consume exactly one empty cell"
        );

        board = next;
    }

    // At most one player holds a winning line in a reachable terminal state.
    assert!(!(board.has_won(Player::X) && board.has_won(Player::O)));
}

#[test]
fn board_and_action_survive_a_json_roundtrip() {
    let board = Board::from_string("XOX.X.O..").unwrap();
    let json = serde_json::to_string(&board).unwrap();
    let parsed: Board = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, board);

    let action = Action::new(2, 1);
    let json = serde_json::to_string(&action).unwrap();
    let parsed: Action = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed, action);
}
