//! Exhaustive adversarial search over the game tree

use crate::board::{Action, Board, Player};

/// Return an optimal action for the active player.
///
/// X maximizes utility and O minimizes it; the search explores the full game
/// tree with no pruning or memoization (at most 9 plies, a few thousand
/// nodes). Tied values are resolved toward the action occurring latest in the
/// row-major [`legal_actions`](Board::legal_actions) order, so repeated calls
/// on the same board return the same action.
///
/// # Errors
///
/// Returns [`GameOver`](crate::Error::GameOver) when the board is terminal;
/// there is no action to recommend, so the precondition is checked instead of
/// leaving the result unspecified.
pub fn minimax(board: &Board) -> Result<Action, crate::Error> {
    if board.is_terminal() {
        return Err(crate::Error::GameOver);
    }

    let player = board.active_player()?;

    // The center is provably optimal on the empty board; answering directly
    // skips the one search that would visit the entire tree.
    if board.occupied_count() == 0 {
        return Ok(Action::CENTER);
    }

    let mut best: Option<Action> = None;
    match player {
        Player::X => {
            let mut v = i32::MIN;
            for action in board.legal_actions() {
                let value = min_value(&board.apply_move(action)?)?;
                // `>=` keeps the last action reaching the running maximum
                if value >= v {
                    v = value;
                    best = Some(action);
                }
            }
        }
        Player::O => {
            let mut v = i32::MAX;
            for action in board.legal_actions() {
                let value = max_value(&board.apply_move(action)?)?;
                if value <= v {
                    v = value;
                    best = Some(action);
                }
            }
        }
    }

    // legal_actions is non-empty on a non-terminal board, so the first
    // iteration always binds `best`.
    best.ok_or(crate::Error::NoLegalActions)
}

/// Value of a board with X to move, assuming optimal play from both sides
fn max_value(board: &Board) -> Result<i32, crate::Error> {
    if board.is_terminal() {
        return Ok(board.utility());
    }
    let mut v = i32::MIN;
    for action in board.legal_actions() {
        v = v.max(min_value(&board.apply_move(action)?)?);
    }
    Ok(v)
}

/// Value of a board with O to move, assuming optimal play from both sides
fn min_value(board: &Board) -> Result<i32, crate::Error> {
    if board.is_terminal() {
        return Ok(board.utility());
    }
    let mut v = i32::MAX;
    for action in board.legal_actions() {
        v = v.min(max_value(&board.apply_move(action)?)?);
    }
    Ok(v)
}
