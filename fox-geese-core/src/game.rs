//! The game state machine: selection, move application and status.

use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

use crate::movegen::{legal_moves, side_moves};
use crate::terminal::evaluate;
use crate::{Board, Cell, GameStatus, Move, Occupant, RulesError, Side, Topology};

/// A selected piece and its legal moves, computed when it was selected.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Selection {
    cell: Cell,
    moves: Vec<Move>,
}

impl Selection {
    #[inline]
    pub fn cell(&self) -> Cell {
        self.cell
    }

    #[inline]
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Destination cells, for highlighting.
    pub fn destinations(&self) -> Vec<Cell> {
        self.moves.iter().map(|m| m.to).collect()
    }
}

/// What a [`GameState::click`] did.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ClickOutcome {
    /// The clicked piece is now selected.
    Selected(Cell),
    /// The selected piece moved.
    Moved(Move),
    /// The click matched nothing; the selection was dropped.
    Deselected,
}

/// A complete game of Fox and Geese.
///
/// Mutated only through [`select`](Self::select),
/// [`apply_move`](Self::apply_move) and their `(row, col)` variants.
/// A failed call leaves the state exactly as it was. Once a side has won,
/// both are rejected with [`RulesError::GameOver`] until [`reset`](Self::reset).
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct GameState {
    topology: Topology,
    board: Board,
    to_move: Side,
    selection: Option<Selection>,
    status: GameStatus,
}

impl GameState {
    /// Initial layout, geese to move.
    pub fn new() -> GameState {
        GameState {
            topology: Topology::STANDARD,
            board: Board::initial(),
            to_move: Side::Geese,
            selection: None,
            status: GameStatus::InProgress,
        }
    }

    /// Start from an arbitrary position.
    ///
    /// The position is evaluated immediately, so a board that is already
    /// decided comes back finished.
    pub fn from_position(board: Board, to_move: Side) -> GameState {
        let topology = Topology::STANDARD;
        let status = evaluate(&topology, &board, to_move);
        GameState {
            topology,
            board,
            to_move,
            selection: None,
            status,
        }
    }

    // ========== Queries ==========

    #[inline]
    pub fn topology(&self) -> &Topology {
        &self.topology
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Side whose turn it is.
    #[inline]
    pub fn to_move(&self) -> Side {
        self.to_move
    }

    #[inline]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[inline]
    pub fn winner(&self) -> Option<Side> {
        self.status.winner()
    }

    #[inline]
    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    #[inline]
    pub fn selection(&self) -> Option<&Selection> {
        self.selection.as_ref()
    }

    /// Destinations of the current selection; empty without one.
    pub fn legal_destinations(&self) -> Vec<Cell> {
        self.selection.as_ref().map(Selection::destinations).unwrap_or_default()
    }

    #[inline]
    pub fn fox(&self) -> Cell {
        self.board.fox()
    }

    pub fn geese(&self) -> impl Iterator<Item = Cell> + '_ {
        self.board.geese()
    }

    pub fn goose_count(&self) -> usize {
        self.board.goose_count()
    }

    pub fn piece_count(&self) -> usize {
        self.board.piece_count()
    }

    /// Legal moves of whatever piece stands on `cell`, regardless of turn.
    pub fn legal_moves(&self, cell: Cell) -> Vec<Move> {
        legal_moves(&self.topology, &self.board, cell)
    }

    /// Every legal move available to `side`.
    pub fn moves_for(&self, side: Side) -> Vec<Move> {
        side_moves(&self.topology, &self.board, side)
    }

    // ========== Selection ==========

    /// Select one of the mover's pieces and cache its legal moves.
    ///
    /// A piece with no legal moves can still be selected.
    pub fn select(&mut self, cell: Cell) -> Result<(), RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        let owner = match self.board.get(cell) {
            Occupant::Fox => Side::Fox,
            Occupant::Goose => Side::Geese,
            Occupant::Empty | Occupant::OutOfPlay => return Err(invalid_selection(cell)),
        };
        if owner != self.to_move {
            return Err(invalid_selection(cell));
        }

        let moves = legal_moves(&self.topology, &self.board, cell);
        debug!(%cell, moves = moves.len(), "selected");
        self.selection = Some(Selection { cell, moves });
        Ok(())
    }

    /// [`select`](Self::select) by grid coordinates; off-grid is an
    /// invalid selection.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn select_cell(&mut self, row: u8, col: u8) -> Result<(), RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        let cell = Cell::new(row, col).ok_or(RulesError::InvalidSelection { row, col })?;
        self.select(cell)
    }

    // ========== Moves ==========

    /// Move the selected piece to `to`.
    ///
    /// On success the piece is relocated, a jumped goose is removed, the
    /// selection is cleared, the turn passes and the new position is
    /// evaluated. Nothing is touched until the move is known to be legal.
    pub fn apply_move(&mut self, to: Cell) -> Result<Move, RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        let selection = self.selection.as_ref().ok_or(RulesError::NoSelection)?;
        let mov = selection
            .moves
            .iter()
            .find(|m| m.to == to)
            .copied()
            .ok_or(RulesError::IllegalMove {
                row: to.row(),
                col: to.col(),
            })?;

        self.board.relocate(mov.from, mov.to);
        if let Some(goose) = mov.captured {
            self.board.remove_goose(goose);
            debug!(%goose, remaining = self.board.goose_count(), "goose captured");
        }
        self.selection = None;
        self.to_move = self.to_move.opponent();
        self.status = evaluate(&self.topology, &self.board, self.to_move);

        debug!(from = %mov.from, to = %mov.to, next = ?self.to_move, "move applied");
        if let Some(winner) = self.status.winner() {
            info!(?winner, geese = self.board.goose_count(), "game over");
        }
        Ok(mov)
    }

    /// [`apply_move`](Self::apply_move) by grid coordinates; off-grid is an
    /// illegal move.
    #[instrument(skip(self), fields(to_move = ?self.to_move))]
    pub fn apply_move_at(&mut self, row: u8, col: u8) -> Result<Move, RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        if self.selection.is_none() {
            return Err(RulesError::NoSelection);
        }
        let to = Cell::new(row, col).ok_or(RulesError::IllegalMove { row, col })?;
        self.apply_move(to)
    }

    /// Handle a click on `(row, col)` the way a pointer-driven board does.
    ///
    /// Without a selection the click selects. With one, it first tries to
    /// move there; failing that it re-selects if the cell holds one of the
    /// mover's pieces, and otherwise drops the selection.
    pub fn click(&mut self, row: u8, col: u8) -> Result<ClickOutcome, RulesError> {
        if self.status.is_over() {
            return Err(RulesError::GameOver);
        }
        if self.selection.is_none() {
            self.select_cell(row, col)?;
            return Ok(self.selected_outcome());
        }
        if let Ok(mov) = self.apply_move_at(row, col) {
            return Ok(ClickOutcome::Moved(mov));
        }
        match self.select_cell(row, col) {
            Ok(()) => Ok(self.selected_outcome()),
            Err(_) => {
                self.selection = None;
                Ok(ClickOutcome::Deselected)
            }
        }
    }

    fn selected_outcome(&self) -> ClickOutcome {
        match &self.selection {
            Some(selection) => ClickOutcome::Selected(selection.cell),
            None => ClickOutcome::Deselected,
        }
    }

    /// Throw the game away and start over.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = GameState::new();
        debug!("game reset");
    }

    /// Serializable view of everything a host needs to draw the game.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.board.rows(),
            to_move: self.to_move,
            status: self.status,
            winner: self.status.winner(),
            selected: self.selection.as_ref().map(Selection::cell),
            destinations: self.legal_destinations(),
            fox: self.board.fox(),
            geese: self.board.goose_count(),
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

fn invalid_selection(cell: Cell) -> RulesError {
    RulesError::InvalidSelection {
        row: cell.row(),
        col: cell.col(),
    }
}

/// Read model of a [`GameState`].
#[derive(Clone, PartialEq, Eq, Debug, Serialize, Deserialize)]
pub struct Snapshot {
    /// 7 rows of 7 occupants.
    pub board: Vec<Vec<Occupant>>,
    pub to_move: Side,
    pub status: GameStatus,
    pub winner: Option<Side>,
    pub selected: Option<Cell>,
    pub destinations: Vec<Cell>,
    pub fox: Cell,
    /// Geese still on the board.
    pub geese: usize,
}
