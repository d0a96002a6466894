//! Render game states to SVG.

use fox_geese_core::{Cell, Direction, GameState, Move, Occupant, GRID};

use crate::config::RenderConfig;

// ============================================================================
// Layout
// ============================================================================

/// Margin around the outermost points, in cells.
const MARGIN: f32 = 0.6;
const LINE_WIDTH: f32 = 0.05;
const POINT_RADIUS: f32 = 0.08;
const PIECE_RADIUS: f32 = 0.32;
const DESTINATION_RADIUS: f32 = 0.14;

/// Options for rendering
#[derive(Default)]
pub struct RenderOptions {
    /// Outline the piece that just moved and mark a captured goose.
    pub last_move: Option<Move>,
    /// Scale factor (1.0 = configured cell size)
    pub scale: f32,
}

#[inline]
fn center(cell: Cell, size: f32) -> (f32, f32) {
    (
        (MARGIN + cell.col() as f32) * size,
        (MARGIN + cell.row() as f32) * size,
    )
}

fn line(svg: &mut String, a: Cell, b: Cell, size: f32, color: &str) {
    let (x1, y1) = center(a, size);
    let (x2, y2) = center(b, size);
    svg.push_str(&format!(
        r#"    <line x1="{x1}" y1="{y1}" x2="{x2}" y2="{y2}" stroke="{color}" stroke-width="{}" stroke-linecap="round"/>"#,
        LINE_WIDTH * size
    ));
    svg.push('\n');
}

/// Generate SVG for a game state
pub fn render_svg(game: &GameState, cfg: &RenderConfig, opts: &RenderOptions) -> String {
    let scale = if opts.scale > 0.0 { opts.scale } else { 1.0 };
    let size = cfg.cell_size;
    let topo = game.topology();

    let extent = (GRID as f32 - 1.0 + 2.0 * MARGIN) * size;
    let scaled = extent * scale;

    let mut svg = String::new();
    svg.push_str(&format!(
        r#"<svg xmlns="http://www.w3.org/2000/svg" width="{scaled}" height="{scaled}" viewBox="0 0 {extent} {extent}">"#
    ));
    svg.push('\n');
    svg.push_str(&format!(
        r#"  <rect width="{extent}" height="{extent}" fill="{}"/>"#,
        cfg.background
    ));
    svg.push('\n');

    // Lines: orthogonal links first, then the marked diagonals.
    svg.push_str("  <g id=\"lines\">\n");
    for cell in topo.playable_cells() {
        for dir in [Direction::Right, Direction::Down] {
            if let Some(next) = topo.neighbor(cell, dir) {
                line(&mut svg, cell, next, size, &cfg.line);
            }
        }
    }
    for (upper, lower) in topo.diagonals() {
        line(&mut svg, upper, lower, size, &cfg.line);
    }
    svg.push_str("  </g>\n");

    svg.push_str("  <g id=\"points\">\n");
    for cell in topo.playable_cells() {
        push_circle(&mut svg, cell, size, POINT_RADIUS, &cfg.point, "");
    }
    svg.push_str("  </g>\n");

    // Pieces
    let selected = game.selection().map(|s| s.cell());
    let moved_to = opts.last_move.map(|m| m.to);
    svg.push_str("  <g id=\"pieces\">\n");
    for cell in topo.playable_cells() {
        let fill = match game.board().get(cell) {
            Occupant::Fox => &cfg.fox,
            Occupant::Goose => &cfg.goose,
            Occupant::Empty | Occupant::OutOfPlay => continue,
        };
        let outline = if selected == Some(cell) || moved_to == Some(cell) {
            format!(
                r#" stroke="{}" stroke-width="{}""#,
                cfg.highlight,
                LINE_WIDTH * 1.6 * size
            )
        } else {
            format!(r#" stroke="{}" stroke-width="{}""#, cfg.line, LINE_WIDTH * 0.6 * size)
        };
        push_circle(&mut svg, cell, size, PIECE_RADIUS, fill, &outline);
    }
    svg.push_str("  </g>\n");

    // Highlights
    let destinations = game.legal_destinations();
    let captured = opts.last_move.and_then(|m| m.captured);
    if !destinations.is_empty() || captured.is_some() {
        svg.push_str("  <g id=\"highlights\">\n");
        for cell in destinations {
            push_circle(&mut svg, cell, size, DESTINATION_RADIUS, &cfg.highlight, r#" opacity="0.8""#);
        }
        if let Some(cell) = captured {
            let outline = format!(
                r#" stroke="{}" stroke-width="{}" stroke-dasharray="{}""#,
                cfg.highlight,
                LINE_WIDTH * size,
                LINE_WIDTH * 2.0 * size
            );
            push_circle(&mut svg, cell, size, PIECE_RADIUS, "none", &outline);
        }
        svg.push_str("  </g>\n");
    }

    svg.push_str("</svg>\n");
    svg
}

fn push_circle(svg: &mut String, cell: Cell, size: f32, radius: f32, fill: &str, extra: &str) {
    let (cx, cy) = center(cell, size);
    svg.push_str(&format!(
        r#"    <circle cx="{cx}" cy="{cy}" r="{}" fill="{fill}"{extra}/>"#,
        radius * size
    ));
    svg.push('\n');
}
