//! Board representation and state queries

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::lines::{LineAnalyzer, WINNING_LINES};

/// A cell on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    Empty,
    X,
    O,
}

impl Cell {
    pub fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' | '0' => Some(Cell::O),
            _ => None,
        }
    }

    /// Convert cell to the player holding it, if any
    pub fn to_player(self) -> Option<Player> {
        match self {
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
            Cell::Empty => None,
        }
    }
}

/// A player in the game. X always moves first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Get the opponent player
    pub fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// Convert player to cell
    pub fn to_cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }
}

/// A move target: a (row, col) coordinate on the board.
///
/// An action is only meaningful relative to a specific board; validity
/// (bounds and emptiness of the target cell) is checked by
/// [`Board::apply_move`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Action {
    pub row: usize,
    pub col: usize,
}

impl Action {
    pub fn new(row: usize, col: usize) -> Self {
        Action { row, col }
    }

    /// The center of the board, the strongest opening move
    pub const CENTER: Action = Action { row: 1, col: 1 };

    /// The four corner actions
    pub const CORNERS: [Action; 4] = [
        Action { row: 0, col: 0 },
        Action { row: 0, col: 2 },
        Action { row: 2, col: 0 },
        Action { row: 2, col: 2 },
    ];

    /// Flat row-major index, or `None` when the coordinate is out of bounds
    pub fn index(self) -> Option<usize> {
        (self.row < 3 && self.col < 3).then(|| self.row * 3 + self.col)
    }

    /// Build an action from a flat row-major index (0-8)
    pub fn from_index(index: usize) -> Self {
        Action {
            row: index / 3,
            col: index % 3,
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// Outcome of a game as derived from a board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    Win(Player),
    Draw,
    InProgress,
}

/// A 3x3 board, stored row-major.
///
/// The board does not record whose turn it is; the active player is derived
/// from the piece counts, which also yields the invariant check (X always
/// moves first, so X can never trail O).
///
/// This type implements `Copy` since it's only 9 bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    pub cells: [Cell; 9],
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

impl Board {
    /// Create a new empty board (the initial game state)
    pub fn new() -> Self {
        Board {
            cells: [Cell::Empty; 9],
        }
    }

    /// Helper: Count pieces on the board.
    fn count_pieces(&self) -> PieceCount {
        let mut count = PieceCount {
            x: 0,
            o: 0,
            empty: 0,
        };
        for cell in &self.cells {
            match cell {
                Cell::X => count.x += 1,
                Cell::O => count.o += 1,
                Cell::Empty => count.empty += 1,
            }
        }
        count
    }

    /// Create a board from a string representation.
    ///
    /// The string should contain 9 cell characters; whitespace is filtered
    /// out, so multi-line layouts work:
    ///
    /// ```
    /// use oxo::{Board, Cell};
    ///
    /// let board = Board::from_string(
    ///     "XX.
    ///      OO.
    ///      ...",
    /// )
    /// .unwrap();
    /// assert_eq!(board.cells[3], Cell::O);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns error if:
    /// - Fewer than 9 non-whitespace characters are present
    /// - Any character is not a valid cell representation
    /// - The piece counts are unreachable under alternating X-first play
    pub fn from_string(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() < 9 {
            return Err(crate::Error::InvalidBoardLength {
                expected: 9,
                got: chars.len(),
                context: s.to_string(),
            });
        }

        let mut cells = [Cell::Empty; 9];
        for (i, &c) in chars.iter().take(9).enumerate() {
            cells[i] = Cell::from_char(c).ok_or_else(|| crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
                context: s.to_string(),
            })?;
        }

        let board = Board { cells };
        // Rejects unreachable piece counts
        board.active_player()?;
        Ok(board)
    }

    /// Get a canonical string representation for use as a key
    pub fn encode(&self) -> String {
        self.cells.iter().map(|&c| c.to_char()).collect()
    }

    /// Get cell at a coordinate, or `None` when out of bounds
    pub fn get(&self, row: usize, col: usize) -> Option<Cell> {
        Action::new(row, col).index().map(|idx| self.cells[idx])
    }

    /// Check if a coordinate is in bounds and empty
    pub fn is_empty(&self, row: usize, col: usize) -> bool {
        self.get(row, col) == Some(Cell::Empty)
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Derive the player who moves next from the piece counts.
    ///
    /// # Errors
    ///
    /// Returns [`InvariantViolation`](crate::Error::InvariantViolation) when
    /// O outnumbers X or either player is ahead by more than one move. Such a
    /// board cannot arise from alternating X-first play through
    /// [`apply_move`](Self::apply_move); the counts are checked rather than
    /// silently tolerated.
    pub fn active_player(&self) -> Result<Player, crate::Error> {
        let count = self.count_pieces();
        if count.x == count.o {
            Ok(Player::X)
        } else if count.x == count.o + 1 {
            Ok(Player::O)
        } else {
            Err(crate::Error::InvariantViolation {
                x_count: count.x,
                o_count: count.o,
            })
        }
    }

    /// Get all legal actions: the empty cells, in row-major order.
    ///
    /// Conceptually a set; the row-major order is fixed so that callers
    /// iterating over it (the search tie-break in particular) behave
    /// deterministically. An empty board yields 9 actions, a full board none.
    pub fn legal_actions(&self) -> Vec<Action> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Action::from_index(i))
            .collect()
    }

    /// Apply a move and return the resulting board.
    ///
    /// The transition is pure: the input board is unchanged and the result
    /// differs from it in exactly one cell, which receives the active
    /// player's mark.
    ///
    /// # Errors
    ///
    /// - [`OutOfBounds`](crate::Error::OutOfBounds) when the coordinate is
    ///   outside the 3x3 grid
    /// - [`IllegalMove`](crate::Error::IllegalMove) when the target cell is
    ///   occupied
    /// - [`InvariantViolation`](crate::Error::InvariantViolation) when the
    ///   active player cannot be derived
    #[must_use = "apply_move returns a new board; the original is unchanged"]
    pub fn apply_move(&self, action: Action) -> Result<Board, crate::Error> {
        let idx = action.index().ok_or(crate::Error::OutOfBounds {
            row: action.row,
            col: action.col,
        })?;

        if self.cells[idx] != Cell::Empty {
            return Err(crate::Error::IllegalMove {
                row: action.row,
                col: action.col,
            });
        }

        let mark = self.active_player()?.to_cell();
        let mut next = *self;
        next.cells[idx] = mark;
        Ok(next)
    }

    /// Get the winner if there is one.
    ///
    /// Lines are checked in a fixed order (rows, columns, main diagonal,
    /// anti-diagonal) and the first uniform non-empty line decides. At most
    /// one player can hold a winning line in a reachable game, so the order
    /// only matters for determinism.
    pub fn winner(&self) -> Option<Player> {
        WINNING_LINES
            .iter()
            .find_map(|line| LineAnalyzer::line_owner(&self.cells, line))
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Terminal-state score from X's perspective: +1 if X has won, -1 if O
    /// has won, 0 otherwise.
    ///
    /// The 0 case covers both draws and non-terminal boards; the value is
    /// only meaningful once [`is_terminal`](Self::is_terminal) holds.
    pub fn utility(&self) -> i32 {
        match self.winner() {
            Some(Player::X) => 1,
            Some(Player::O) => -1,
            None => 0,
        }
    }

    /// Derive the game outcome from the board
    pub fn outcome(&self) -> Outcome {
        match self.winner() {
            Some(player) => Outcome::Win(player),
            None if self.cells.contains(&Cell::Empty) => Outcome::InProgress,
            None => Outcome::Draw,
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1).is_multiple_of(3) && i < 8 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
