//! Greedy one-ply move picker
//!
//! An alternate, non-exhaustive strategy: take the center, complete an own
//! line, block the opponent's line, otherwise fall back to a random corner
//! and finally any random legal action. It never looks ahead more than one
//! line completion, so unlike [`minimax`](crate::minimax) it is not optimal.

use rand::{Rng, prelude::IndexedRandom};

use crate::board::{Action, Board};
use crate::lines::LineAnalyzer;

/// Pick a move for the active player by greedy priority.
///
/// Priority order, first match wins:
/// 1. the center, when free;
/// 2. a move completing a line for the active player, scanning rows, then
///    columns, then the diagonals;
/// 3. the same scan for the opponent's mark (a blocking move);
/// 4. a uniformly random free corner;
/// 5. a uniformly random legal action.
///
/// The random source is injected so callers can seed it for reproducible
/// play.
///
/// # Errors
///
/// Returns [`GameOver`](crate::Error::GameOver) when the board is terminal.
pub fn heuristic_move<R: Rng + ?Sized>(
    board: &Board,
    rng: &mut R,
) -> Result<Action, crate::Error> {
    if board.is_terminal() {
        return Err(crate::Error::GameOver);
    }

    let player = board.active_player()?;
    let legal = board.legal_actions();

    if legal.contains(&Action::CENTER) {
        return Ok(Action::CENTER);
    }

    if let Some(pos) = LineAnalyzer::winning_move(&board.cells, player) {
        return Ok(Action::from_index(pos));
    }

    if let Some(pos) = LineAnalyzer::winning_move(&board.cells, player.opponent()) {
        return Ok(Action::from_index(pos));
    }

    let free_corners: Vec<Action> = Action::CORNERS
        .iter()
        .copied()
        .filter(|corner| legal.contains(corner))
        .collect();
    if let Some(&corner) = free_corners.choose(rng) {
        return Ok(corner);
    }

    legal
        .choose(rng)
        .copied()
        .ok_or(crate::Error::NoLegalActions)
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;
    use crate::Error;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(42)
    }

    #[test]
    fn test_takes_free_center() {
        assert_eq!(
            heuristic_move(&Board::new(), &mut rng()).unwrap(),
            Action::new(1, 1)
        );

        let board = Board::from_string("X........").unwrap();
        assert_eq!(
            heuristic_move(&board, &mut rng()).unwrap(),
            Action::new(1, 1)
        );
    }

    #[test]
    fn test_completes_own_line() {
        // X X .
        // O O .
        // . . .
        // X to move with the center gone: winning beats blocking.
        let board = Board::from_string("XX.OO....").unwrap();
        assert_eq!(
            heuristic_move(&board, &mut rng()).unwrap(),
            Action::new(0, 2)
        );
    }

    #[test]
    fn test_wins_rather_than_blocks() {
        // X X .
        // O O .
        // X . .
        // O to move: completing the middle row outranks blocking the top row.
        let board = Board::from_string("XX.OO.X..").unwrap();
        assert_eq!(
            heuristic_move(&board, &mut rng()).unwrap(),
            Action::new(1, 2)
        );
    }

    #[test]
    fn test_blocks_opponent_line() {
        // O O .
        // . X .
        // . . X
        // X to move, no own completion: block the top row at (0, 2).
        let board = Board::from_string("OO..X...X").unwrap();
        assert_eq!(
            heuristic_move(&board, &mut rng()).unwrap(),
            Action::new(0, 2)
        );
    }

    #[test]
    fn test_falls_back_to_corner() {
        // Center taken, nothing to win or block: a free corner is chosen.
        let board = Board::from_string("....X....").unwrap();
        let action = heuristic_move(&board, &mut rng()).unwrap();
        assert!(Action::CORNERS.contains(&action));
    }

    #[test]
    fn test_corner_pick_is_reproducible() {
        let board = Board::from_string("....X....").unwrap();
        let first = heuristic_move(&board, &mut StdRng::seed_from_u64(7)).unwrap();
        let second = heuristic_move(&board, &mut StdRng::seed_from_u64(7)).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_falls_back_to_any_legal_action() {
        // X O X
        // X O .
        // O X O
        // Center and all corners taken, no line to complete or block: the
        // only edge left is chosen by the final fallback.
        let board = Board::from_string("XOXXO.OXO").unwrap();
        assert_eq!(
            heuristic_move(&board, &mut rng()).unwrap(),
            Action::new(1, 2)
        );
    }

    #[test]
    fn test_terminal_board_is_rejected() {
        let won = Board::from_string("XXXOO....").unwrap();
        assert!(matches!(heuristic_move(&won, &mut rng()), Err(Error::GameOver)));
    }
}
