//! Win detection logic for tic-tac-toe.

use crate::types::{Board, Cell, Coord, Player};
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::instrument;

/// One of the eight winning triples.
///
/// Declaration order is evaluation order: rows top to bottom, columns left
/// to right, then the main diagonal and the anti-diagonal.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
    strum::EnumIter,
)]
pub enum Line {
    /// Row 0.
    #[display("top row")]
    TopRow,
    /// Row 1.
    #[display("middle row")]
    MiddleRow,
    /// Row 2.
    #[display("bottom row")]
    BottomRow,
    /// Column 0.
    #[display("left column")]
    LeftColumn,
    /// Column 1.
    #[display("center column")]
    CenterColumn,
    /// Column 2.
    #[display("right column")]
    RightColumn,
    /// (0,0), (1,1), (2,2).
    #[display("diagonal")]
    Diagonal,
    /// (0,2), (1,1), (2,0).
    #[display("anti-diagonal")]
    AntiDiagonal,
}

impl Line {
    /// The three cells making up this line.
    pub fn cells(self) -> [Coord; 3] {
        match self {
            Line::TopRow => [Coord::at(0, 0), Coord::at(0, 1), Coord::at(0, 2)],
            Line::MiddleRow => [Coord::at(1, 0), Coord::at(1, 1), Coord::at(1, 2)],
            Line::BottomRow => [Coord::at(2, 0), Coord::at(2, 1), Coord::at(2, 2)],
            Line::LeftColumn => [Coord::at(0, 0), Coord::at(1, 0), Coord::at(2, 0)],
            Line::CenterColumn => [Coord::at(0, 1), Coord::at(1, 1), Coord::at(2, 1)],
            Line::RightColumn => [Coord::at(0, 2), Coord::at(1, 2), Coord::at(2, 2)],
            Line::Diagonal => [Coord::at(0, 0), Coord::at(1, 1), Coord::at(2, 2)],
            Line::AntiDiagonal => [Coord::at(0, 2), Coord::at(1, 1), Coord::at(2, 0)],
        }
    }

    /// The player holding all three cells, if any.
    pub fn owner(self, board: &Board) -> Option<Player> {
        let [a, b, c] = self.cells().map(|coord| board.get(coord));
        match a {
            Cell::Occupied(player) if a == b && b == c => Some(player),
            _ => None,
        }
    }
}

/// Finds the first completed line in evaluation order.
///
/// When one mark completes two lines at once, the earlier line is reported.
#[instrument(skip(board))]
pub fn winning_line(board: &Board) -> Option<(Line, Player)> {
    Line::iter().find_map(|line| line.owner(board).map(|player| (line, player)))
}

/// Checks if there is a winner on the board.
///
/// Returns `Some(player)` if the player has three in a row,
/// `None` otherwise.
#[instrument(skip(board))]
pub fn check_winner(board: &Board) -> Option<Player> {
    winning_line(board).map(|(_, player)| player)
}
