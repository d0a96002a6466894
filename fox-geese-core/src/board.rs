//! Board occupancy.

use std::fmt;
use std::str::FromStr;

use crate::{Cell, LayoutError, Occupant, Topology, GRID, GRID_CELLS};

/// Occupant of every grid cell, plus the cached fox location.
///
/// Goose positions are never stored separately; [`Board::geese`] scans the
/// cells. The fox cell is only written by [`Board::relocate`], which also
/// moves the fox on the grid, so the two cannot drift apart.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct Board {
    cells: [Occupant; GRID_CELLS],
    fox: Cell,
}

impl Board {
    /// Where the fox starts.
    pub const INITIAL_FOX: Cell = Cell::from_row_col(3, 3);

    /// The opening layout: fox in the centre, geese filling row 4 and the
    /// bottom arm.
    pub fn initial() -> Board {
        let mut board = Board::vacant(Self::INITIAL_FOX);
        for goose in initial_geese() {
            board.cells[goose.index()] = Occupant::Goose;
        }
        board
    }

    /// Build a board from piece locations.
    pub fn with_pieces<I>(fox: Cell, geese: I) -> Result<Board, LayoutError>
    where
        I: IntoIterator<Item = Cell>,
    {
        require_playable(fox)?;
        let mut board = Board::vacant(fox);
        for goose in geese {
            require_playable(goose)?;
            if board.get(goose) != Occupant::Empty {
                return Err(LayoutError::Occupied {
                    row: goose.row(),
                    col: goose.col(),
                });
            }
            board.cells[goose.index()] = Occupant::Goose;
        }
        Ok(board)
    }

    /// All playable cells empty except the fox. `fox` must be playable.
    fn vacant(fox: Cell) -> Board {
        let mut cells = [Occupant::OutOfPlay; GRID_CELLS];
        for cell in Topology::STANDARD.playable_cells() {
            cells[cell.index()] = Occupant::Empty;
        }
        cells[fox.index()] = Occupant::Fox;
        Board { cells, fox }
    }

    #[inline]
    pub fn get(&self, cell: Cell) -> Occupant {
        self.cells[cell.index()]
    }

    #[inline]
    pub fn is_empty(&self, cell: Cell) -> bool {
        self.get(cell) == Occupant::Empty
    }

    #[inline]
    pub fn fox(&self) -> Cell {
        self.fox
    }

    /// Goose cells in row-major order.
    pub fn geese(&self) -> impl Iterator<Item = Cell> + '_ {
        Cell::all().filter(move |&cell| self.get(cell) == Occupant::Goose)
    }

    pub fn goose_count(&self) -> usize {
        self.cells.iter().filter(|&&o| o == Occupant::Goose).count()
    }

    /// Fox plus geese.
    pub fn piece_count(&self) -> usize {
        1 + self.goose_count()
    }

    /// The board as 7 rows of 7 occupants.
    pub fn rows(&self) -> Vec<Vec<Occupant>> {
        self.cells.chunks(GRID as usize).map(|row| row.to_vec()).collect()
    }

    /// Move the piece on `from` to the empty cell `to`.
    ///
    /// Does NOT validate - caller must have checked the move is legal.
    pub(crate) fn relocate(&mut self, from: Cell, to: Cell) {
        let piece = self.get(from);
        debug_assert!(piece.side().is_some(), "no piece on {}", from);
        debug_assert!(self.is_empty(to), "{} is not empty", to);

        self.cells[to.index()] = piece;
        self.cells[from.index()] = Occupant::Empty;
        if piece == Occupant::Fox {
            self.fox = to;
        }
    }

    /// Take a captured goose off the board.
    pub(crate) fn remove_goose(&mut self, cell: Cell) {
        debug_assert_eq!(self.get(cell), Occupant::Goose);
        self.cells[cell.index()] = Occupant::Empty;
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::initial()
    }
}

fn initial_geese() -> impl Iterator<Item = Cell> {
    let row_four = (0..GRID).map(|col| Cell::from_row_col(4, col));
    let bottom_arm = (5..GRID).flat_map(|row| (2..=4).map(move |col| Cell::from_row_col(row, col)));
    row_four.chain(bottom_arm)
}

fn require_playable(cell: Cell) -> Result<(), LayoutError> {
    if Topology::STANDARD.is_playable(cell) {
        Ok(())
    } else {
        Err(LayoutError::Unplayable {
            row: cell.row(),
            col: cell.col(),
        })
    }
}

/// Seven rows of `F` (fox), `G` (goose), `.` (empty) and `#` (out of play).
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(GRID as usize).enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            for occupant in row {
                write!(f, "{}", occupant.symbol())?;
            }
        }
        Ok(())
    }
}

/// Parse the diagram format written by `Display`.
///
/// Out-of-play cells may also be written as spaces, and short rows are
/// padded with out-of-play cells. Blank lines before and after the diagram
/// are ignored.
impl FromStr for Board {
    type Err = LayoutError;

    fn from_str(s: &str) -> Result<Board, LayoutError> {
        let lines: Vec<&str> = s.lines().map(|line| line.trim_end_matches('\r')).collect();
        let start = lines
            .iter()
            .position(|line| !line.trim().is_empty())
            .unwrap_or(lines.len());
        let end = lines
            .iter()
            .rposition(|line| !line.trim().is_empty())
            .map_or(start, |i| i + 1);
        let rows = &lines[start..end];
        if rows.len() != GRID as usize {
            return Err(LayoutError::RowCount(rows.len()));
        }

        let mut foxes = Vec::new();
        let mut geese = Vec::new();
        for (r, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().collect();
            if symbols.len() > GRID as usize {
                return Err(LayoutError::RowTooWide {
                    row: r,
                    len: symbols.len(),
                });
            }
            let row = r as u8;
            for col in 0..GRID {
                let ch = symbols.get(col as usize).copied().unwrap_or(' ');
                let cell = Cell::from_row_col(row, col);
                let playable = Topology::is_playable_at(row, col);
                match ch {
                    ' ' | '#' if playable => return Err(LayoutError::MarkedOutOfPlay { row, col }),
                    ' ' | '#' => {}
                    '.' | 'F' | 'G' if !playable => return Err(LayoutError::Unplayable { row, col }),
                    '.' => {}
                    'F' => foxes.push(cell),
                    'G' => geese.push(cell),
                    other => return Err(LayoutError::UnknownSymbol { ch: other, row, col }),
                }
            }
        }

        match foxes.as_slice() {
            [fox] => Board::with_pieces(*fox, geese),
            _ => Err(LayoutError::FoxCount(foxes.len())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cell(row: u8, col: u8) -> Cell {
        Cell::from_row_col(row, col)
    }

    const INITIAL_DIAGRAM: &str = "\
##...##
##...##
.......
...F...
GGGGGGG
##GGG##
##GGG##";

    #[test]
    fn test_initial_layout() {
        let board = Board::initial();
        assert_eq!(board.fox(), cell(3, 3));
        assert_eq!(board.get(cell(3, 3)), Occupant::Fox);
        assert_eq!(board.goose_count(), 13);
        assert_eq!(board.piece_count(), 14);

        let mut expected: Vec<Cell> = (0..7).map(|c| cell(4, c)).collect();
        for row in 5..7 {
            for col in 2..5 {
                expected.push(cell(row, col));
            }
        }
        assert_eq!(board.geese().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn test_initial_out_of_play_matches_topology() {
        let board = Board::initial();
        for c in Cell::all() {
            let out = board.get(c) == Occupant::OutOfPlay;
            assert_eq!(out, !Topology::STANDARD.is_playable(c), "cell {}", c);
        }
    }

    #[test]
    fn test_display_initial() {
        assert_eq!(Board::initial().to_string(), INITIAL_DIAGRAM);
    }

    #[test]
    fn test_parse_initial() {
        let board: Board = INITIAL_DIAGRAM.parse().unwrap();
        assert_eq!(board, Board::initial());
    }

    #[test]
    fn test_parse_spaces_and_padding() {
        let diagram = "\n  ...\n  ...\n.......\n...F...\n.......\n  ...\n  .G.\n\n";
        let board: Board = diagram.parse().unwrap();
        assert_eq!(board.fox(), cell(3, 3));
        assert_eq!(board.geese().collect::<Vec<_>>(), vec![cell(6, 3)]);
    }

    #[test]
    fn test_parse_rejects_bad_diagrams() {
        assert_eq!("...".parse::<Board>(), Err(LayoutError::RowCount(1)));

        let two_foxes = INITIAL_DIAGRAM.replace(".......", "F......");
        assert_eq!(two_foxes.parse::<Board>(), Err(LayoutError::FoxCount(2)));

        let no_fox = INITIAL_DIAGRAM.replace('F', ".");
        assert_eq!(no_fox.parse::<Board>(), Err(LayoutError::FoxCount(0)));

        let piece_in_corner = INITIAL_DIAGRAM.replacen("##...##", "G#...##", 1);
        assert_eq!(
            piece_in_corner.parse::<Board>(),
            Err(LayoutError::Unplayable { row: 0, col: 0 })
        );

        let hole = INITIAL_DIAGRAM.replacen("##...##", "###..##", 1);
        assert_eq!(
            hole.parse::<Board>(),
            Err(LayoutError::MarkedOutOfPlay { row: 0, col: 2 })
        );

        let junk = INITIAL_DIAGRAM.replace('F', "x");
        assert_eq!(
            junk.parse::<Board>(),
            Err(LayoutError::UnknownSymbol { ch: 'x', row: 3, col: 3 })
        );

        let wide = INITIAL_DIAGRAM.replace("...F...", "...F....");
        assert_eq!(wide.parse::<Board>(), Err(LayoutError::RowTooWide { row: 3, len: 8 }));
    }

    #[test]
    fn test_with_pieces_validation() {
        assert_eq!(
            Board::with_pieces(cell(0, 0), std::iter::empty()),
            Err(LayoutError::Unplayable { row: 0, col: 0 })
        );
        assert_eq!(
            Board::with_pieces(cell(3, 3), [cell(3, 3)]),
            Err(LayoutError::Occupied { row: 3, col: 3 })
        );
        assert_eq!(
            Board::with_pieces(cell(3, 3), [cell(2, 3), cell(2, 3)]),
            Err(LayoutError::Occupied { row: 2, col: 3 })
        );
        let board = Board::with_pieces(cell(2, 2), [cell(0, 3)]).unwrap();
        assert_eq!(board.fox(), cell(2, 2));
        assert_eq!(board.goose_count(), 1);
    }

    #[test]
    fn test_relocate_tracks_fox() {
        let mut board = Board::initial();
        board.relocate(cell(3, 3), cell(2, 3));
        assert_eq!(board.fox(), cell(2, 3));
        assert_eq!(board.get(cell(2, 3)), Occupant::Fox);
        assert_eq!(board.get(cell(3, 3)), Occupant::Empty);
    }

    #[test]
    fn test_relocate_goose_and_remove() {
        let mut board = Board::initial();
        board.relocate(cell(4, 0), cell(3, 0));
        assert_eq!(board.get(cell(3, 0)), Occupant::Goose);
        assert_eq!(board.fox(), cell(3, 3));
        assert_eq!(board.goose_count(), 13);

        board.remove_goose(cell(3, 0));
        assert!(board.is_empty(cell(3, 0)));
        assert_eq!(board.goose_count(), 12);
    }

    #[test]
    fn test_rows_shape() {
        let rows = Board::initial().rows();
        assert_eq!(rows.len(), 7);
        assert!(rows.iter().all(|r| r.len() == 7));
        assert_eq!(rows[3][3], Occupant::Fox);
        assert_eq!(rows[0][0], Occupant::OutOfPlay);
    }
}
