//! Game-level scenarios played through the public select/apply interface.

use fox_geese_core::{
    Board, Cell, GameState, GameStatus, Move, Occupant, RulesError, Side, Topology, MIN_GEESE,
};

fn cell(row: u8, col: u8) -> Cell {
    Cell::from_row_col(row, col)
}

/// Select `from` and move it to `to`, panicking if either step is refused.
fn play(game: &mut GameState, from: (u8, u8), to: (u8, u8)) -> Move {
    game.select_cell(from.0, from.1)
        .unwrap_or_else(|e| panic!("select {:?}: {}", from, e));
    game.apply_move_at(to.0, to.1)
        .unwrap_or_else(|e| panic!("move {:?} -> {:?}: {}", from, to, e))
}

#[test]
fn test_playable_cells() {
    let topo = Topology::STANDARD;
    let playable: Vec<Cell> = Cell::all().filter(|&c| topo.is_playable(c)).collect();
    assert_eq!(playable.len(), 33);
    for c in Cell::all() {
        let in_cross = (2..=4).contains(&c.row()) || (2..=4).contains(&c.col());
        assert_eq!(topo.is_playable(c), in_cross);
    }
}

#[test]
fn test_initial_position() {
    let game = GameState::new();
    assert_eq!(game.fox(), cell(3, 3));
    assert_eq!(game.to_move(), Side::Geese);
    assert_eq!(game.status(), GameStatus::InProgress);

    let expected = [
        (4, 0), (4, 1), (4, 2), (4, 3), (4, 4), (4, 5), (4, 6),
        (5, 2), (5, 3), (5, 4),
        (6, 2), (6, 3), (6, 4),
    ];
    let geese: Vec<Cell> = game.geese().collect();
    assert_eq!(geese, expected.iter().map(|&(r, c)| cell(r, c)).collect::<Vec<_>>());
    assert_eq!(game.goose_count(), 13);
    assert_eq!(game.piece_count(), 14);
}

#[test]
fn test_goose_cannot_move_onto_goose() {
    let mut game = GameState::new();
    game.select_cell(5, 3).unwrap();
    let before = game.clone();
    assert_eq!(game.apply_move_at(4, 3), Err(RulesError::IllegalMove { row: 4, col: 3 }));
    assert_eq!(game, before);
}

#[test]
fn test_goose_cannot_capture_fox() {
    let mut game = GameState::new();
    game.select_cell(4, 3).unwrap();
    let before = game.clone();
    assert_eq!(game.apply_move_at(3, 3), Err(RulesError::IllegalMove { row: 3, col: 3 }));
    assert_eq!(game, before);
    assert_eq!(game.board().get(cell(3, 3)), Occupant::Fox);
}

#[test]
fn test_illegal_fox_move_leaves_state_untouched() {
    let mut game = GameState::new();
    play(&mut game, (4, 0), (3, 0));
    game.select_cell(3, 3).unwrap();
    let before = game.clone();

    // Two cells away with nothing to jump.
    assert_eq!(game.apply_move_at(1, 3), Err(RulesError::IllegalMove { row: 1, col: 3 }));
    // Onto a goose.
    assert_eq!(game.apply_move_at(4, 3), Err(RulesError::IllegalMove { row: 4, col: 3 }));
    // Out of the cross.
    assert_eq!(game.apply_move_at(1, 1), Err(RulesError::IllegalMove { row: 1, col: 1 }));

    assert_eq!(game, before);
    assert_eq!(game.board().to_string(), before.board().to_string());
}

#[test]
fn test_move_requires_selection() {
    let mut game = GameState::new();
    let before = game.clone();
    assert_eq!(game.apply_move_at(3, 0), Err(RulesError::NoSelection));
    assert_eq!(game, before);
}

#[test]
fn test_simple_moves_preserve_piece_count() {
    let mut game = GameState::new();
    let pieces = game.piece_count();

    play(&mut game, (4, 0), (3, 0));
    play(&mut game, (3, 3), (2, 3));
    play(&mut game, (3, 0), (2, 0));
    play(&mut game, (2, 3), (1, 3));

    assert_eq!(game.piece_count(), pieces);
    assert_eq!(game.fox(), cell(1, 3));
    assert_eq!(game.to_move(), Side::Geese);
}

#[test]
fn test_capture_removes_exactly_one_goose() {
    let mut game = GameState::new();
    // Walk a goose next to the fox with an empty cell behind it.
    play(&mut game, (4, 2), (3, 2));
    let geese = game.goose_count();

    game.select_cell(3, 3).unwrap();
    let capture = Move {
        from: cell(3, 3),
        to: cell(3, 1),
        captured: Some(cell(3, 2)),
    };
    assert!(game.selection().unwrap().moves().contains(&capture));

    let applied = game.apply_move_at(3, 1).unwrap();
    assert_eq!(applied, capture);
    assert_eq!(game.goose_count(), geese - 1);
    assert_eq!(game.board().get(cell(3, 2)), Occupant::Empty);
    assert_eq!(game.board().get(cell(3, 3)), Occupant::Empty);
    assert_eq!(game.fox(), cell(3, 1));
    assert!(!game.geese().any(|g| g == cell(3, 2)));
    assert!(game.selection().is_none());
    assert_eq!(game.to_move(), Side::Geese);
}

#[test]
fn test_fox_wins_by_attrition() {
    let board = Board::with_pieces(cell(3, 3), [cell(2, 3), cell(0, 2), cell(0, 4)]).unwrap();
    let mut game = GameState::from_position(board, Side::Fox);
    assert_eq!(game.goose_count(), MIN_GEESE);
    assert_eq!(game.status(), GameStatus::InProgress);

    let mov = play(&mut game, (3, 3), (1, 3));
    assert_eq!(mov.captured, Some(cell(2, 3)));
    assert_eq!(game.goose_count(), 2);
    assert_eq!(game.status(), GameStatus::Won(Side::Fox));
    assert_eq!(game.winner(), Some(Side::Fox));
    // The turn still passed; the win does not depend on it.
    assert_eq!(game.to_move(), Side::Geese);
}

#[test]
fn test_geese_win_by_surrounding_the_fox() {
    let board: Board = "\
##...##
##.G.##
..GGG..
G.GFGG.
..GGG..
##.G.##
##...##"
        .parse()
        .unwrap();
    let mut game = GameState::from_position(board, Side::Geese);
    assert_eq!(game.status(), GameStatus::InProgress);
    // Before the last goose arrives the fox could still jump to (3,1).
    assert!(game.legal_moves(cell(3, 3)).iter().any(|m| m.to == cell(3, 1)));

    play(&mut game, (3, 0), (3, 1));

    assert_eq!(game.to_move(), Side::Fox);
    assert!(game.legal_moves(game.fox()).is_empty());
    assert_eq!(game.status(), GameStatus::Won(Side::Geese));
}

#[test]
fn test_fox_wins_when_geese_cannot_move() {
    let board = Board::with_pieces(cell(6, 3), [cell(0, 2), cell(0, 3), cell(0, 4)]).unwrap();
    let mut game = GameState::from_position(board, Side::Fox);
    assert_eq!(game.status(), GameStatus::InProgress);

    play(&mut game, (6, 3), (5, 3));

    assert_eq!(game.to_move(), Side::Geese);
    assert!(game.moves_for(Side::Geese).is_empty());
    assert_eq!(game.status(), GameStatus::Won(Side::Fox));
}

#[test]
fn test_finished_game_is_frozen() {
    let board = Board::with_pieces(cell(6, 3), [cell(0, 2), cell(0, 3), cell(0, 4)]).unwrap();
    let mut game = GameState::from_position(board, Side::Fox);
    play(&mut game, (6, 3), (5, 3));
    assert!(game.is_over());

    let before = game.clone();
    assert_eq!(game.select_cell(0, 2), Err(RulesError::GameOver));
    assert_eq!(game.select_cell(5, 3), Err(RulesError::GameOver));
    assert_eq!(game.apply_move_at(4, 3), Err(RulesError::GameOver));
    assert_eq!(game, before);

    game.reset();
    assert_eq!(game, GameState::new());
}

#[test]
fn test_diagonal_jump_needs_both_legs() {
    // Fox on (2,2): (3,3) then (4,4) lies on one drawn line.
    let board = Board::with_pieces(cell(2, 2), [cell(3, 3), cell(0, 3), cell(0, 4)]).unwrap();
    let game = GameState::from_position(board, Side::Fox);
    let jumps: Vec<Move> = game.legal_moves(cell(2, 2)).into_iter().filter(Move::is_capture).collect();
    assert_eq!(
        jumps,
        vec![Move {
            from: cell(2, 2),
            to: cell(4, 4),
            captured: Some(cell(3, 3)),
        }]
    );

    // Fox on (2,3) is odd: no diagonal to (3,4) and so no jump to (4,5).
    let board = Board::with_pieces(cell(2, 3), [cell(3, 4), cell(0, 3), cell(0, 4)]).unwrap();
    let game = GameState::from_position(board, Side::Fox);
    assert!(game.legal_moves(cell(2, 3)).iter().all(|m| !m.is_capture()));
}

#[test]
fn test_selection_cache_matches_queries() {
    let mut game = GameState::new();
    for goose in game.geese().collect::<Vec<_>>() {
        game.select(goose).unwrap();
        let cached: Vec<Move> = game.selection().unwrap().moves().to_vec();
        assert_eq!(cached, game.legal_moves(goose));
    }
}

#[test]
fn test_diagonal_jump_on_down_left_line() {
    let board = Board::with_pieces(cell(2, 4), [cell(3, 3), cell(6, 2), cell(6, 3), cell(6, 4)]).unwrap();
    let mut game = GameState::from_position(board, Side::Fox);
    let mov = play(&mut game, (2, 4), (4, 2));
    assert_eq!(mov.captured, Some(cell(3, 3)));
    assert_eq!(game.board().get(cell(3, 3)), Occupant::Empty);
    assert_eq!(game.goose_count(), 3);

    // Same line the other way, landing blocked.
    let board = Board::with_pieces(cell(4, 2), [cell(3, 3), cell(2, 4), cell(6, 3)]).unwrap();
    let mut game = GameState::from_position(board, Side::Fox);
    game.select_cell(4, 2).unwrap();
    let before = game.clone();
    assert_eq!(game.apply_move_at(2, 4), Err(RulesError::IllegalMove { row: 2, col: 4 }));
    assert_eq!(game, before);
}
