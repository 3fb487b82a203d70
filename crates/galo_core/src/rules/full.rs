//! Full-board detection.

use crate::types::{Board, Cell};
use tracing::instrument;

/// Checks if every cell holds a mark.
///
/// Informational only: a full board without a line is still in progress.
#[instrument(skip(board))]
pub fn is_full(board: &Board) -> bool {
    board.iter().all(|(_, cell)| cell != Cell::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Coord, Player};

    #[test]
    fn test_empty_board_not_full() {
        assert!(!is_full(&Board::new()));
    }

    #[test]
    fn test_partial_board_not_full() {
        let mut board = Board::new();
        board.set(Coord::at(1, 1), Cell::Occupied(Player::X));
        assert!(!is_full(&board));
    }

    #[test]
    fn test_full_board() {
        let mut board = Board::new();
        for coord in Coord::all() {
            board.set(coord, Cell::Occupied(Player::O));
        }
        assert!(is_full(&board));
    }
}
