//! Move generation.
//!
//! Every adjacency question goes through [`Topology::neighbor`], so the moves
//! offered to a player and the trapped/immobile checks in the terminal
//! evaluator always agree.

use crate::{Board, Cell, Direction, Move, Occupant, Side, Topology};

/// Legal moves of the piece on `from`. Empty and out-of-play cells have none.
pub(crate) fn legal_moves(topology: &Topology, board: &Board, from: Cell) -> Vec<Move> {
    match board.get(from) {
        Occupant::Fox => fox_moves(topology, board, from),
        Occupant::Goose => goose_moves(topology, board, from),
        Occupant::Empty | Occupant::OutOfPlay => Vec::new(),
    }
}

/// Every legal move of `side`.
pub(crate) fn side_moves(topology: &Topology, board: &Board, side: Side) -> Vec<Move> {
    match side {
        Side::Fox => fox_moves(topology, board, board.fox()),
        Side::Geese => board
            .geese()
            .flat_map(|goose| goose_moves(topology, board, goose))
            .collect(),
    }
}

/// Steps to empty cells plus jumps over a goose onto an empty cell.
///
/// A jump follows one direction for both legs, so a diagonal jump needs a
/// drawn diagonal origin->goose and another goose->landing.
fn fox_moves(topology: &Topology, board: &Board, from: Cell) -> Vec<Move> {
    let mut moves = Vec::with_capacity(Direction::ALL.len());

    for dir in Direction::ALL {
        let Some(next) = topology.neighbor(from, dir) else {
            continue;
        };
        match board.get(next) {
            Occupant::Empty => moves.push(Move {
                from,
                to: next,
                captured: None,
            }),
            Occupant::Goose => {
                if let Some(landing) = topology.neighbor(next, dir) {
                    if board.is_empty(landing) {
                        moves.push(Move {
                            from,
                            to: landing,
                            captured: Some(next),
                        });
                    }
                }
            }
            Occupant::Fox | Occupant::OutOfPlay => {}
        }
    }

    moves
}

/// Geese step forward or sideways onto empty cells and never capture.
fn goose_moves(topology: &Topology, board: &Board, from: Cell) -> Vec<Move> {
    Direction::GOOSE
        .iter()
        .filter_map(|&dir| topology.neighbor(from, dir))
        .filter(|&to| board.is_empty(to))
        .map(|to| Move {
            from,
            to,
            captured: None,
        })
        .collect()
}
