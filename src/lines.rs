//! Winning line analysis for the 3x3 board

use crate::board::{Cell, Player};

/// Winning line indices on the 3x3 board, in the scan order used by both
/// win detection and the heuristic: rows, then columns, then the main
/// diagonal, then the anti-diagonal. The order is fixed so that results
/// are deterministic and testable.
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8], // main diagonal
    [2, 4, 6], // anti-diagonal
];

/// Utility for analyzing winning lines
pub struct LineAnalyzer;

impl LineAnalyzer {
    /// Return the player owning a line, if its three cells are uniform and
    /// non-empty.
    pub fn line_owner(cells: &[Cell; 9], line: &[usize; 3]) -> Option<Player> {
        let first = cells[line[0]];
        let owner = first.to_player()?;
        if line.iter().all(|&idx| cells[idx] == first) {
            Some(owner)
        } else {
            None
        }
    }

    /// Check if a player has three in a row anywhere on the board
    pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
        WINNING_LINES
            .iter()
            .any(|line| Self::line_owner(cells, line) == Some(player))
    }

    /// Find the slot that completes a single line for a player.
    ///
    /// Returns the in-line index of the Empty slot when the line holds exactly
    /// one Empty cell and the other two cells carry the player's mark, and
    /// `None` otherwise (including lines the opponent has touched).
    pub fn completion_slot(line: &[Cell; 3], player: Player) -> Option<usize> {
        let target = player.to_cell();
        let mut empty_slot = None;

        for (slot, &cell) in line.iter().enumerate() {
            match cell {
                Cell::Empty => {
                    if empty_slot.is_some() {
                        // More than one empty cell, not a completion
                        return None;
                    }
                    empty_slot = Some(slot);
                }
                c if c == target => {}
                _ => return None, // Opponent piece in line
            }
        }

        empty_slot
    }

    /// Find the first board position that immediately wins for the player,
    /// scanning [`WINNING_LINES`] in order.
    pub fn winning_move(cells: &[Cell; 9], player: Player) -> Option<usize> {
        for line in &WINNING_LINES {
            let triple = [cells[line[0]], cells[line[1]], cells[line[2]]];
            if let Some(slot) = Self::completion_slot(&triple, player) {
                return Some(line[slot]);
            }
        }
        None
    }
}
