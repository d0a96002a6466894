//! Move notation: `(r,c)->(r,c)`, e.g. `(4,0)->(3,0)`.

use fox_geese_core::{Cell, GameState, Move, RulesError};

/// Parse "(r,c)" or "r,c" into (row, col).
pub fn parse_coords(s: &str) -> Option<(u8, u8)> {
    let s = s.trim().trim_start_matches('(').trim_end_matches(')');
    let (row, col) = s.split_once(',')?;
    let row: u8 = row.trim().parse().ok()?;
    let col: u8 = col.trim().parse().ok()?;
    Some((row, col))
}

/// Parse a single step from notation like "(4,0)->(3,0)".
pub fn parse_step(s: &str) -> Option<((u8, u8), (u8, u8))> {
    let (from, to) = s.trim().split_once("->")?;
    Some((parse_coords(from)?, parse_coords(to)?))
}

/// Parse a sequence of steps separated by whitespace.
///
/// Returns the first token that does not parse as the error.
pub fn parse_steps(s: &str) -> Result<Vec<((u8, u8), (u8, u8))>, String> {
    s.split_whitespace()
        .map(|token| parse_step(token).ok_or_else(|| token.to_string()))
        .collect()
}

/// Format a cell as "(r,c)".
pub fn format_cell(cell: Cell) -> String {
    format!("({},{})", cell.row(), cell.col())
}

/// Format a move as "(r,c)->(r,c)", with "x(r,c)" appended for captures.
pub fn format_move(mov: &Move) -> String {
    match mov.captured {
        Some(goose) => format!("{}->{} x{}", format_cell(mov.from), format_cell(mov.to), format_cell(goose)),
        None => format!("{}->{}", format_cell(mov.from), format_cell(mov.to)),
    }
}

/// Play one step through the select/apply interface.
pub fn play_step(game: &mut GameState, from: (u8, u8), to: (u8, u8)) -> Result<Move, RulesError> {
    game.select_cell(from.0, from.1)?;
    game.apply_move_at(to.0, to.1)
}
