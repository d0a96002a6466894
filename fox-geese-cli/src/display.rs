//! Text board for the terminal.

use fox_geese_core::{Cell, GameState, GameStatus, Occupant, Side, GRID};

use crate::config::DisplayConfig;

fn glyph(cfg: &DisplayConfig, occupant: Occupant) -> char {
    match occupant {
        Occupant::OutOfPlay => cfg.out_of_play,
        Occupant::Empty => cfg.empty,
        Occupant::Fox => cfg.fox,
        Occupant::Goose => cfg.goose,
    }
}

pub fn side_name(side: Side) -> &'static str {
    match side {
        Side::Fox => "Fox",
        Side::Geese => "Geese",
    }
}

/// One-line summary: whose turn it is or who won, plus the goose count.
pub fn status_line(game: &GameState) -> String {
    let head = match game.status() {
        GameStatus::InProgress => format!("{} to move", side_name(game.to_move())),
        GameStatus::Won(Side::Fox) => "Fox wins!".to_string(),
        GameStatus::Won(Side::Geese) => "Geese win!".to_string(),
    };
    format!("{head}  (geese left: {})", game.goose_count())
}

/// Draw the board. The selected piece is wrapped in brackets and its legal
/// destinations use the destination glyph.
pub fn render_board(game: &GameState, cfg: &DisplayConfig) -> String {
    let selected = game.selection().map(|s| s.cell());
    let destinations = game.legal_destinations();
    let mut out = String::new();

    if cfg.show_coordinates {
        out.push_str("   ");
        for col in 0..GRID {
            out.push_str(&format!(" {col} "));
        }
        out.truncate(out.trim_end_matches(' ').len());
        out.push('\n');
    }

    for row in 0..GRID {
        if cfg.show_coordinates {
            out.push_str(&format!(" {row} "));
        }
        for col in 0..GRID {
            let cell = Cell::from_row_col(row, col);
            let ch = if destinations.contains(&cell) {
                cfg.destination
            } else {
                glyph(cfg, game.board().get(cell))
            };
            if selected == Some(cell) {
                out.push_str(&format!("[{ch}]"));
            } else {
                out.push_str(&format!(" {ch} "));
            }
        }
        out.truncate(out.trim_end_matches(' ').len());
        out.push('\n');
    }

    out.push_str(&status_line(game));
    out.push('\n');
    out
}
