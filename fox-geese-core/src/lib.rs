//! Fox and Geese rules engine on the 33-cell cross board.
//!
//! # Board Layout
//!
//! ```text
//!        0 1 2 3 4 5 6
//!   0        . . .
//!   1        . . .
//!   2    . . . . . . .
//!   3    . . . F . . .
//!   4    G G G G G G G
//!   5        G G G
//!   6        G G G
//! ```
//!
//! A cell is playable when its row or its column is 2, 3 or 4. Every cell is
//! orthogonally connected to its playable neighbours. Diagonal connections
//! exist only inside 2x2 blocks whose four corners are playable, one per
//! block, chosen by the parity of the block's top-left corner (see
//! [`topology`]).
//!
//! # Cell Encoding
//!
//! ```text
//! index = row * 7 + col   (0..49)
//! ```
//!
//! The topology keeps three 49-bit masks indexed this way: playable cells,
//! down-right diagonals and down-left diagonals. Each diagonal is stored once,
//! keyed by its upper endpoint.

mod board;
mod error;
mod game;
mod movegen;
mod terminal;
pub mod topology;

#[cfg(feature = "wasm")]
pub mod wasm;

use serde::{Deserialize, Serialize};

pub use board::Board;
pub use error::{LayoutError, RulesError};
pub use game::{ClickOutcome, GameState, Selection, Snapshot};
pub use terminal::MIN_GEESE;
pub use topology::Topology;

/// Side length of the underlying square grid.
pub const GRID: u8 = 7;

/// Number of cells in the underlying grid, playable or not.
pub const GRID_CELLS: usize = (GRID as usize) * (GRID as usize);

/// One of the two players.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Side {
    Fox,
    Geese,
}

impl Side {
    /// Get the opposing side.
    #[inline]
    pub fn opponent(self) -> Side {
        match self {
            Side::Fox => Side::Geese,
            Side::Geese => Side::Fox,
        }
    }

    /// The occupant this side moves.
    #[inline]
    pub fn piece(self) -> Occupant {
        match self {
            Side::Fox => Occupant::Fox,
            Side::Geese => Occupant::Goose,
        }
    }
}

/// What sits on a grid cell.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum Occupant {
    /// Not part of the cross. Never changes.
    OutOfPlay,
    Empty,
    Fox,
    Goose,
}

impl Occupant {
    /// The side owning this occupant, if it is a piece.
    #[inline]
    pub fn side(self) -> Option<Side> {
        match self {
            Occupant::Fox => Some(Side::Fox),
            Occupant::Goose => Some(Side::Geese),
            Occupant::Empty | Occupant::OutOfPlay => None,
        }
    }

    /// Diagram character: `F`, `G`, `.` or `#`.
    #[inline]
    pub fn symbol(self) -> char {
        match self {
            Occupant::OutOfPlay => '#',
            Occupant::Empty => '.',
            Occupant::Fox => 'F',
            Occupant::Goose => 'G',
        }
    }
}

/// A coordinate on the 7x7 grid (0-48), playable or not.
///
/// Serialized as `[row, col]`.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(into = "[u8; 2]", try_from = "[u8; 2]")]
pub struct Cell(u8);

impl Cell {
    /// Create a cell from row and column, or `None` when off the grid.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Cell> {
        if row < GRID && col < GRID {
            Some(Cell(row * GRID + col))
        } else {
            None
        }
    }

    /// Create a cell from row and column (0-6 each).
    #[inline]
    pub const fn from_row_col(row: u8, col: u8) -> Cell {
        debug_assert!(row < GRID && col < GRID);
        Cell(row * GRID + col)
    }

    /// Get the row (0-6).
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / GRID
    }

    /// Get the column (0-6).
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % GRID
    }

    /// Row-major index (0-48).
    #[inline]
    pub const fn index(self) -> usize {
        self.0 as usize
    }

    /// The adjacent grid cell in `dir`, ignoring playability.
    #[inline]
    pub fn step(self, dir: Direction) -> Option<Cell> {
        let (dr, dc) = dir.delta();
        let row = self.row().checked_add_signed(dr)?;
        let col = self.col().checked_add_signed(dc)?;
        Cell::new(row, col)
    }

    /// Iterate over all 49 grid cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..GRID_CELLS as u8).map(Cell)
    }
}

impl From<Cell> for [u8; 2] {
    fn from(cell: Cell) -> [u8; 2] {
        [cell.row(), cell.col()]
    }
}

impl TryFrom<[u8; 2]> for Cell {
    type Error = LayoutError;

    fn try_from([row, col]: [u8; 2]) -> Result<Cell, LayoutError> {
        Cell::new(row, col).ok_or(LayoutError::OffGrid { row, col })
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row(), self.col())
    }
}

/// One of the eight compass steps. Row 0 is the top of the board.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
    UpLeft,
    UpRight,
    DownLeft,
    DownRight,
}

impl Direction {
    /// Every direction the fox may take.
    pub const ALL: [Direction; 8] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
        Direction::DownLeft,
        Direction::DownRight,
    ];

    /// Geese never step backwards.
    pub const GOOSE: [Direction; 5] = [
        Direction::Up,
        Direction::Left,
        Direction::Right,
        Direction::UpLeft,
        Direction::UpRight,
    ];

    /// (row delta, column delta).
    #[inline]
    pub const fn delta(self) -> (i8, i8) {
        match self {
            Direction::Up => (-1, 0),
            Direction::Down => (1, 0),
            Direction::Left => (0, -1),
            Direction::Right => (0, 1),
            Direction::UpLeft => (-1, -1),
            Direction::UpRight => (-1, 1),
            Direction::DownLeft => (1, -1),
            Direction::DownRight => (1, 1),
        }
    }

    #[inline]
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }
}

/// A move of the selected piece.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Cell,
    pub to: Cell,
    /// The goose jumped over, for fox captures.
    pub captured: Option<Cell>,
}

impl Move {
    #[inline]
    pub fn is_capture(&self) -> bool {
        self.captured.is_some()
    }
}

/// Whether the game is still running and who won.
#[derive(Clone, Copy, PartialEq, Eq, Debug, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    InProgress,
    Won(Side),
}

impl GameStatus {
    #[inline]
    pub fn winner(self) -> Option<Side> {
        match self {
            GameStatus::InProgress => None,
            GameStatus::Won(side) => Some(side),
        }
    }

    #[inline]
    pub fn is_over(self) -> bool {
        matches!(self, GameStatus::Won(_))
    }
}
