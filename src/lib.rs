//! Optimal and heuristic move selection for 3x3 Tic-Tac-Toe
//!
//! This crate provides:
//! - An immutable board representation with the state queries the search
//!   depends on (active player, legal actions, winner, terminal test, utility)
//! - Exhaustive minimax search returning an optimal action
//! - A greedy one-ply heuristic picker (win, block, corner, random)
//!
//! The board transition is pure: [`Board::apply_move`] returns a new board and
//! never mutates its input, so concurrent searches over different boards need
//! no coordination.

pub mod board;
pub mod error;
pub mod heuristic;
pub mod lines;
pub mod minimax;

pub use board::{Action, Board, Cell, Outcome, Player};
pub use error::{Error, Result};
pub use heuristic::heuristic_move;
pub use lines::{LineAnalyzer, WINNING_LINES};
pub use minimax::minimax;
