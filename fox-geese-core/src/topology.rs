//! Playable cells and diagonal connectivity of the cross board.
//!
//! Orthogonal steps between two playable cells are always connected.
//! Diagonals are not: for every 2x2 block whose four corners are playable,
//! exactly one of its two diagonals is drawn.
//!
//! ```text
//! (r + c) even:  TL ---- TR      (r + c) odd:  TL ---- TR
//!                 |  \    |                     |    /  |
//!                 |   \   |                     |   /   |
//!                BL ---- BR                    BL ---- BR
//! ```
//!
//! where `(r, c)` is the block's top-left corner. The result is the usual
//! alquerque pattern: diagonals only ever join cells with even `row + col`.

use crate::{Cell, Direction, GRID};

/// Immutable connectivity of the board.
///
/// Built by a `const fn`, so [`Topology::STANDARD`] is computed at compile
/// time and copying it around is free.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct Topology {
    /// Bit `i` set when cell `i` is playable.
    playable: u64,
    /// Bit `i` set when cell `i` connects to `i + GRID + 1`.
    down_right: u64,
    /// Bit `i` set when cell `i` connects to `i + GRID - 1`.
    down_left: u64,
}

impl Topology {
    /// The 33-cell cross.
    pub const STANDARD: Topology = Topology::build();

    /// Whether `(row, col)` belongs to the cross.
    #[inline]
    pub const fn is_playable_at(row: u8, col: u8) -> bool {
        row < GRID && col < GRID && ((row >= 2 && row <= 4) || (col >= 2 && col <= 4))
    }

    /// Compute the playable mask and the diagonal edge set.
    pub const fn build() -> Topology {
        let mut playable = 0u64;
        let mut row = 0;
        while row < GRID {
            let mut col = 0;
            while col < GRID {
                if Self::is_playable_at(row, col) {
                    playable |= 1u64 << bit(row, col);
                }
                col += 1;
            }
            row += 1;
        }

        let mut down_right = 0u64;
        let mut down_left = 0u64;
        let mut row = 0;
        while row + 1 < GRID {
            let mut col = 0;
            while col + 1 < GRID {
                let whole_block = Self::is_playable_at(row, col)
                    && Self::is_playable_at(row, col + 1)
                    && Self::is_playable_at(row + 1, col)
                    && Self::is_playable_at(row + 1, col + 1);
                if whole_block {
                    if (row + col) % 2 == 0 {
                        // top-left <-> bottom-right
                        down_right |= 1u64 << bit(row, col);
                    } else {
                        // top-right <-> bottom-left
                        down_left |= 1u64 << bit(row, col + 1);
                    }
                }
                col += 1;
            }
            row += 1;
        }

        Topology {
            playable,
            down_right,
            down_left,
        }
    }

    /// Whether `cell` belongs to the cross.
    #[inline]
    pub fn is_playable(&self, cell: Cell) -> bool {
        (self.playable >> cell.index()) & 1 == 1
    }

    /// Whether a diagonal edge joins `a` and `b`. Symmetric.
    #[inline]
    pub fn has_diagonal(&self, a: Cell, b: Cell) -> bool {
        let (upper, lower) = if a.row() < b.row() { (a, b) } else { (b, a) };
        if lower.row() != upper.row() + 1 {
            return false;
        }
        if lower.col() == upper.col() + 1 {
            (self.down_right >> upper.index()) & 1 == 1
        } else if upper.col() == lower.col() + 1 {
            (self.down_left >> upper.index()) & 1 == 1
        } else {
            false
        }
    }

    /// The playable cell one step from `from` along a board line, if any.
    ///
    /// Orthogonal steps only need a playable target; diagonal steps need a
    /// drawn diagonal. Move generation and the end-of-game checks both walk
    /// the board through this function.
    #[inline]
    pub fn neighbor(&self, from: Cell, dir: Direction) -> Option<Cell> {
        let to = from.step(dir)?;
        if !self.is_playable(from) || !self.is_playable(to) {
            return None;
        }
        if dir.is_diagonal() && !self.has_diagonal(from, to) {
            return None;
        }
        Some(to)
    }

    /// Iterate over the playable cells in row-major order.
    pub fn playable_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.is_playable(cell))
    }

    /// Iterate over every diagonal edge once, upper endpoint first.
    pub fn diagonals(&self) -> impl Iterator<Item = (Cell, Cell)> + '_ {
        Cell::all().flat_map(move |upper| {
            let right = ((self.down_right >> upper.index()) & 1 == 1)
                .then(|| upper.step(Direction::DownRight))
                .flatten();
            let left = ((self.down_left >> upper.index()) & 1 == 1)
                .then(|| upper.step(Direction::DownLeft))
                .flatten();
            right.into_iter().chain(left).map(move |lower| (upper, lower))
        })
    }

    /// Number of diagonal edges.
    #[inline]
    pub fn diagonal_count(&self) -> u32 {
        self.down_right.count_ones() + self.down_left.count_ones()
    }
}

impl Default for Topology {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[inline]
const fn bit(row: u8, col: u8) -> u32 {
    (row * GRID + col) as u32
}
