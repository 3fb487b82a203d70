//! Monotonic board invariant: marks are never overwritten.

use super::Invariant;
use crate::{Board, Cell, GameState};

/// Invariant: replaying the move history onto an empty board reproduces the
/// current board, and every move landed on an empty cell.
pub struct MonotonicBoardInvariant;

impl Invariant<GameState> for MonotonicBoardInvariant {
    fn holds(game: &GameState) -> bool {
        let mut replayed = Board::new();
        for mov in game.history() {
            if !replayed.is_empty(mov.coord) {
                return false;
            }
            replayed.set(mov.coord, Cell::Occupied(mov.player));
        }
        replayed == *game.board()
    }

    fn description() -> &'static str {
        "Board cells are monotonic (never overwritten)"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Coord, Player};

    #[test]
    fn test_new_game_holds() {
        assert!(MonotonicBoardInvariant::holds(&GameState::new()));
    }

    #[test]
    fn test_moves_hold() {
        let mut game = GameState::new();
        game.select_cell(0, 0).unwrap();
        game.select_cell(1, 1).unwrap();
        game.select_cell(2, 2).unwrap();
        assert!(MonotonicBoardInvariant::holds(&game));
    }

    #[test]
    fn test_overwritten_cell_violates() {
        let mut game = GameState::new();
        game.select_cell(1, 1).unwrap();
        game.board.set(Coord::at(1, 1), Cell::Occupied(Player::O));
        assert!(!MonotonicBoardInvariant::holds(&game));
    }
}
