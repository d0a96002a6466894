//! End-of-game detection, run after every applied move.

use crate::movegen::{legal_moves, side_moves};
use crate::{Board, GameStatus, Side, Topology};

/// With fewer geese than this the fox has won.
pub const MIN_GEESE: usize = 3;

/// Decide the status of `board` with `to_move` about to play.
///
/// Checked in order:
/// 1. too few geese left: the fox wins whoever moves next;
/// 2. the fox is on move and has no legal move: the geese win;
/// 3. the geese are on move and no goose can move: the fox wins.
pub(crate) fn evaluate(topology: &Topology, board: &Board, to_move: Side) -> GameStatus {
    if board.goose_count() < MIN_GEESE {
        return GameStatus::Won(Side::Fox);
    }

    match to_move {
        Side::Fox if legal_moves(topology, board, board.fox()).is_empty() => GameStatus::Won(Side::Geese),
        Side::Geese if side_moves(topology, board, Side::Geese).is_empty() => GameStatus::Won(Side::Fox),
        Side::Fox | Side::Geese => GameStatus::InProgress,
    }
}
