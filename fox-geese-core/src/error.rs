//! Error types for the rules engine.

/// A rejected select or move request.
///
/// None of these are fatal: the game state is left untouched and the host
/// simply lets the player pick again.
#[derive(Clone, Copy, PartialEq, Eq, Debug, thiserror::Error)]
pub enum RulesError {
    /// Off-grid or unplayable cell, empty cell, or a piece of the side not
    /// on move.
    #[error("cannot select ({row}, {col})")]
    InvalidSelection { row: u8, col: u8 },

    /// The destination is not one of the selected piece's legal moves.
    #[error("({row}, {col}) is not a legal destination for the selected piece")]
    IllegalMove { row: u8, col: u8 },

    #[error("no piece is selected")]
    NoSelection,

    /// The game has a winner; only `reset` is accepted.
    #[error("the game is over")]
    GameOver,
}

/// A board diagram or piece list that does not describe a legal layout.
#[derive(Clone, PartialEq, Eq, Debug, thiserror::Error)]
pub enum LayoutError {
    #[error("({row}, {col}) is outside the 7x7 grid")]
    OffGrid { row: u8, col: u8 },

    #[error("({row}, {col}) is not part of the cross")]
    Unplayable { row: u8, col: u8 },

    #[error("({row}, {col}) is part of the cross but marked out of play")]
    MarkedOutOfPlay { row: u8, col: u8 },

    #[error("two pieces placed on ({row}, {col})")]
    Occupied { row: u8, col: u8 },

    #[error("expected exactly one fox, found {0}")]
    FoxCount(usize),

    #[error("expected 7 diagram rows, found {0}")]
    RowCount(usize),

    #[error("diagram row {row} is {len} cells wide, at most 7 allowed")]
    RowTooWide { row: usize, len: usize },

    #[error("unexpected character {ch:?} at ({row}, {col})")]
    UnknownSymbol { ch: char, row: u8, col: u8 },
}
