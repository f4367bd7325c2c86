//! Board state representation and basic operations

use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use super::lines::LineAnalyzer;

/// Number of cells on the board.
pub const BOARD_CELLS: usize = 9;

/// Board side length.
pub const BOARD_SIDE: usize = 3;

/// A cell on the Tic-Tac-Toe board
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
}

/// A player in the game
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

impl fmt::Display for Player {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Player::X => write!(f, "X"),
            Player::O => write!(f, "O"),
        }
    }
}

/// A (row, column) move on the board, both coordinates in `[0, 3)`.
///
/// Construction validates the bounds, so a `Move` held anywhere in the system
/// always addresses a real cell (though not necessarily an empty one).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    row: usize,
    col: usize,
}

impl Move {
    /// Create a new move, validating both coordinates.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::OutOfBounds`] if either coordinate is >= 3.
    pub fn new(row: usize, col: usize) -> Result<Self, crate::Error> {
        if row < BOARD_SIDE && col < BOARD_SIDE {
            Ok(Move { row, col })
        } else {
            Err(crate::Error::OutOfBounds { row, col })
        }
    }

    pub fn row(&self) -> usize {
        self.row
    }

    pub fn col(&self) -> usize {
        self.col
    }

    /// Flat cell index in row-major order.
    pub fn index(&self) -> usize {
        self.row * BOARD_SIDE + self.col
    }

    /// Build a move from a flat row-major cell index.
    fn from_index(index: usize) -> Self {
        Move {
            row: index / BOARD_SIDE,
            col: index % BOARD_SIDE,
        }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.row, self.col)
    }
}

impl FromStr for Move {
    type Err = crate::Error;

    /// Parse a move from `"<row>,<col>"` (surrounding whitespace tolerated).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = |reason: &str| crate::Error::ParseMove {
            input: s.to_string(),
            reason: reason.to_string(),
        };

        let (row_part, col_part) = s
            .split_once(',')
            .ok_or_else(|| malformed("expected two integers separated by a comma"))?;

        let row = row_part
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed("row is not an integer"))?;
        let col = col_part
            .trim()
            .parse::<usize>()
            .map_err(|_| malformed("column is not an integer"))?;

        Move::new(row, col)
    }
}

/// Count of each piece type on the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PieceCount {
    x: usize,
    o: usize,
    empty: usize,
}

/// Complete board state: just the nine cells.
///
/// Whose turn it is falls out of mark parity and is recomputed on every
/// [`BoardState::to_move`] call rather than stored, so the state can never
/// disagree with itself. The type is `Copy` (9 bytes), and every transition
/// returns a fresh value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BoardState {
    pub cells: [Cell; BOARD_CELLS],
}

impl BoardState {
    /// Create a new empty board
    pub fn new() -> Self {
        BoardState {
            cells: [Cell::Empty; BOARD_CELLS],
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

    /// Create a board from a layout string with exactly 9 cell characters
    /// (row-major, whitespace filtered out). `.` is an empty cell; `X`/`O`
    /// are marks.
    ///
    /// # Errors
    ///
    /// Returns an error if the non-whitespace character count is not exactly
    /// 9, any character is not a valid cell, or the mark counts could not
    /// have arisen from legal alternating play (X first).
    pub fn from_layout(s: &str) -> Result<Self, crate::Error> {
        let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.len() != BOARD_CELLS {
            return Err(crate::Error::InvalidBoardLength {
                expected: BOARD_CELLS,
                got: chars.len(),
            });
        }

        let mut cells = [Cell::Empty; BOARD_CELLS];
        for (i, &c) in chars.iter().enumerate() {
            cells[i] = Cell::from_char(c).ok_or(crate::Error::InvalidCellCharacter {
                character: c,
                position: i,
            })?;
        }

        let board = BoardState { cells };
        if !board.is_consistent() {
            let count = board.count_pieces();
            return Err(crate::Error::InvalidPieceCounts {
                x_count: count.x,
                o_count: count.o,
            });
        }

        Ok(board)
    }

    /// The player to move, derived from mark parity: X moves first, so an
    /// even number of filled cells means it is X's turn.
    pub fn to_move(&self) -> Player {
        if self.occupied_count() % 2 == 0 {
            Player::X
        } else {
            Player::O
        }
    }

    /// Turn-alternation invariant: with X moving first, the X count equals
    /// the O count or exceeds it by exactly one.
    pub fn is_consistent(&self) -> bool {
        let count = self.count_pieces();
        count.x == count.o || count.x == count.o + 1
    }

    /// Count the number of occupied cells on the board.
    pub fn occupied_count(&self) -> usize {
        let count = self.count_pieces();
        count.x + count.o
    }

    /// Get the cell addressed by a move
    pub fn get(&self, mv: Move) -> Cell {
        self.cells[mv.index()]
    }

    /// Check if the cell addressed by a move is empty
    pub fn is_empty_cell(&self, mv: Move) -> bool {
        self.get(mv) == Cell::Empty
    }

    /// Every empty cell as a move, in row-major order.
    pub fn empty_moves(&self) -> Vec<Move> {
        self.cells
            .iter()
            .enumerate()
            .filter(|&(_, &cell)| cell == Cell::Empty)
            .map(|(i, _)| Move::from_index(i))
            .collect()
    }

    /// Place the current mover's mark and return the new board state.
    ///
    /// The mark belongs to [`BoardState::to_move`] of `self`, evaluated
    /// before the cell is filled.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidMove`] if the cell is occupied. `self`
    /// is never altered.
    #[must_use = "place returns a new board state; the original is unchanged"]
    pub fn place(&self, mv: Move) -> Result<BoardState, crate::Error> {
        if !self.is_empty_cell(mv) {
            return Err(crate::Error::InvalidMove {
                row: mv.row(),
                col: mv.col(),
            });
        }

        let mut new_state = *self;
        new_state.cells[mv.index()] = self.to_move().to_cell();
        Ok(new_state)
    }

    /// Check if a player has won
    pub fn has_won(&self, player: Player) -> bool {
        LineAnalyzer::has_won(&self.cells, player)
    }

    /// Get the winner if there is one
    pub fn winner(&self) -> Option<Player> {
        LineAnalyzer::winner(&self.cells)
    }

    /// Check if the game is over (win or full board)
    pub fn is_terminal(&self) -> bool {
        self.winner().is_some() || !self.cells.contains(&Cell::Empty)
    }

    /// Check if the position is a draw (all cells filled, no winner)
    pub fn is_draw(&self) -> bool {
        !self.cells.contains(&Cell::Empty) && self.winner().is_none()
    }
}

impl Default for BoardState {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for BoardState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, &cell) in self.cells.iter().enumerate() {
            write!(f, "{}", cell.to_char())?;
            if (i + 1) % BOARD_SIDE == 0 && i < BOARD_CELLS - 1 {
                writeln!(f)?;
            }
        }
        Ok(())
    }
}
