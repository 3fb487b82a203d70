//! Tests for the game state machine through the public API.

use galo_core::{Cell, Coord, GameState, GameStatus, Line, Placement, PlacementError, Player};

fn play(game: &mut GameState, moves: &[(usize, usize)]) -> Vec<Placement> {
    moves
        .iter()
        .map(|&(row, col)| game.select_cell(row, col).expect("Legal move"))
        .collect()
}

#[test]
fn test_opening_trace_wins_for_x() {
    let mut game = GameState::new();
    let placements = play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);

    assert!(
        placements[..4]
            .iter()
            .all(|p| matches!(p, Placement::Continued(_)))
    );
    assert_eq!(placements[4].winner(), Some(Player::X));
    assert_eq!(game.status(), GameStatus::Won(Player::X));
    assert_eq!(game.board().rows()[0], [Cell::Occupied(Player::X); 3]);
    assert_eq!(game.winning_line(), Some((Line::TopRow, Player::X)));
}

#[test]
fn test_turn_alternates_with_parity() {
    let mut game = GameState::new();
    assert_eq!(game.current_player(), Player::X);

    for (n, (row, col)) in [(1, 1), (0, 0), (2, 2), (0, 2)].into_iter().enumerate() {
        game.select_cell(row, col).expect("Legal move");
        let expected = if (n + 1) % 2 == 0 { Player::X } else { Player::O };
        assert_eq!(game.current_player(), expected);
    }
}

#[test]
fn test_occupied_cell_is_noop() {
    let mut game = GameState::new();
    game.select_cell(1, 1).expect("Legal move");
    let snapshot = game.clone();

    let result = game.select_cell(1, 1);
    assert_eq!(
        result,
        Err(PlacementError::CellOccupied(Coord::new(1, 1).unwrap()))
    );
    assert_eq!(game, snapshot);
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_rejection_message_mentions_occupied() {
    let mut game = GameState::new();
    game.select_cell(0, 0).expect("Legal move");
    let err = game.select_cell(0, 0).unwrap_err();
    assert!(err.to_string().contains("occupied"));
}

#[test]
fn test_selection_after_win_rejected_until_reset() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    let snapshot = game.clone();

    assert_eq!(
        game.select_cell(2, 0),
        Err(PlacementError::GameOver(Player::X))
    );
    assert_eq!(game, snapshot);

    assert_eq!(
        game.select_cell(0, 0),
        Err(PlacementError::CellOccupied(Coord::new(0, 0).unwrap()))
    );
    assert_eq!(game, snapshot);

    game.reset();
    assert!(matches!(
        game.select_cell(2, 0),
        Ok(Placement::Continued(_))
    ));
}

#[test]
fn test_full_board_without_line_stays_in_progress() {
    // X O X
    // X O O
    // O X X
    let mut game = GameState::new();
    let placements = play(
        &mut game,
        &[
            (0, 0),
            (0, 1),
            (0, 2),
            (1, 1),
            (1, 0),
            (1, 2),
            (2, 1),
            (2, 0),
            (2, 2),
        ],
    );

    assert!(placements.iter().all(|p| p.winner().is_none()));
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.is_board_full());
    assert_eq!(game.history().len(), 9);
}

#[test]
fn test_o_can_win() {
    let mut game = GameState::new();
    let placements = play(&mut game, &[(0, 0), (0, 2), (1, 0), (1, 1), (2, 2), (2, 0)]);
    assert_eq!(placements.last().and_then(Placement::winner), Some(Player::O));
    assert_eq!(game.winning_line(), Some((Line::AntiDiagonal, Player::O)));
    assert_eq!(game.current_player(), Player::O);
}

#[test]
fn test_reset_from_won_state() {
    let mut game = GameState::new();
    play(&mut game, &[(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)]);
    game.reset();

    assert_eq!(game.current_player(), Player::X);
    assert_eq!(game.status(), GameStatus::InProgress);
    assert!(game.board().iter().all(|(_, cell)| cell == Cell::Empty));
    assert!(game.history().is_empty());
}

#[test]
fn test_history_records_moves_in_order() {
    let mut game = GameState::new();
    play(&mut game, &[(2, 2), (0, 0)]);
    let history: Vec<_> = game
        .history()
        .iter()
        .map(|m| (m.player, m.coord.row(), m.coord.col()))
        .collect();
    assert_eq!(history, vec![(Player::X, 2, 2), (Player::O, 0, 0)]);
}
