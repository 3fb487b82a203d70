//! Core domain types for tic-tac-toe.

use crate::action::PlacementError;
use serde::{Deserialize, Serialize};

/// Player in the game.
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
pub enum Player {
    /// Player X (goes first).
    #[display("X")]
    X,
    /// Player O (goes second).
    #[display("O")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the board: empty, or holding one player's mark.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Cell {
    /// No mark yet.
    #[default]
    Empty,
    /// Marked by a player.
    Occupied(Player),
}

impl Cell {
    /// Returns the player holding this cell, if any.
    pub fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }
}

/// A board coordinate with `row` and `col` both in `0..3`.
///
/// Only constructible through [`Coord::new`] (or the fixed tables in this
/// crate), so holding a `Coord` means the position is on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, derive_more::Display,
)]
#[serde(try_from = "RawCoord")]
#[display("({row}, {col})")]
pub struct Coord {
    row: usize,
    col: usize,
}

#[derive(Deserialize)]
struct RawCoord {
    row: usize,
    col: usize,
}

impl TryFrom<RawCoord> for Coord {
    type Error = PlacementError;

    fn try_from(raw: RawCoord) -> Result<Self, Self::Error> {
        Coord::new(raw.row, raw.col)
    }
}

impl Coord {
    /// Side length of the board.
    pub const SIZE: usize = 3;

    /// Creates a coordinate, rejecting anything off the board.
    pub fn new(row: usize, col: usize) -> Result<Self, PlacementError> {
        if row < Self::SIZE && col < Self::SIZE {
            Ok(Self { row, col })
        } else {
            Err(PlacementError::OutOfBounds { row, col })
        }
    }

    /// Builds a coordinate from compile-time constants known to be in range.
    pub(crate) const fn at(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row, counted from the top.
    pub fn row(self) -> usize {
        self.row
    }

    /// Column, counted from the left.
    pub fn col(self) -> usize {
        self.col
    }

    /// Row-major index (0-8).
    pub fn index(self) -> usize {
        self.row * Self::SIZE + self.col
    }

    /// Creates a coordinate from a row-major index (0-8).
    pub fn from_index(index: usize) -> Option<Self> {
        Self::new(index / Self::SIZE, index % Self::SIZE).ok()
    }

    /// All nine coordinates in row-major order.
    pub fn all() -> impl Iterator<Item = Coord> {
        (0..Self::SIZE * Self::SIZE).map(|i| Self::at(i / Self::SIZE, i % Self::SIZE))
    }
}

/// 3x3 tic-tac-toe board, row-major.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; Coord::SIZE]; Coord::SIZE],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the cell at the given coordinate.
    pub fn get(&self, coord: Coord) -> Cell {
        self.cells[coord.row][coord.col]
    }

    /// Sets the cell at the given coordinate.
    ///
    /// Only the game itself writes to the board.
    pub(crate) fn set(&mut self, coord: Coord, cell: Cell) {
        self.cells[coord.row][coord.col] = cell;
    }

    /// Checks if a cell is empty.
    pub fn is_empty(&self, coord: Coord) -> bool {
        self.get(coord) == Cell::Empty
    }

    /// Returns the rows, top to bottom.
    pub fn rows(&self) -> &[[Cell; Coord::SIZE]; Coord::SIZE] {
        &self.cells
    }

    /// Iterates over every cell with its coordinate, row-major.
    pub fn iter(&self) -> impl Iterator<Item = (Coord, Cell)> + '_ {
        Coord::all().map(|coord| (coord, self.get(coord)))
    }

    /// Number of cells holding `player`'s mark.
    pub fn count(&self, player: Player) -> usize {
        self.iter()
            .filter(|(_, cell)| *cell == Cell::Occupied(player))
            .count()
    }

    /// Number of non-empty cells.
    pub fn occupied(&self) -> usize {
        self.iter().filter(|(_, cell)| *cell != Cell::Empty).count()
    }

    /// Formats the board as a human-readable string.
    ///
    /// Empty cells show their 1-based row-major number.
    pub fn display(&self) -> String {
        let mut result = String::new();
        for (coord, cell) in self.iter() {
            match cell {
                Cell::Empty => result.push_str(&(coord.index() + 1).to_string()),
                Cell::Occupied(player) => result.push_str(&player.to_string()),
            }
            if coord.col() < Coord::SIZE - 1 {
                result.push('|');
            } else if coord.row() < Coord::SIZE - 1 {
                result.push_str("\n-+-+-\n");
            }
        }
        result
    }
}

/// Current status of the game, derived from the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameStatus {
    /// Game is ongoing.
    InProgress,
    /// Game ended in a win; frozen until reset.
    Won(Player),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coord_bounds() {
        assert!(Coord::new(2, 2).is_ok());
        assert_eq!(
            Coord::new(3, 0),
            Err(PlacementError::OutOfBounds { row: 3, col: 0 })
        );
        assert_eq!(
            Coord::new(0, 7),
            Err(PlacementError::OutOfBounds { row: 0, col: 7 })
        );
    }

    #[test]
    fn test_coord_index_mapping() {
        let coord = Coord::new(1, 2).unwrap();
        assert_eq!(coord.index(), 5);
        assert_eq!(Coord::from_index(5), Some(coord));
        assert_eq!(Coord::from_index(9), None);
        assert_eq!(Coord::all().count(), 9);
    }

    #[test]
    fn test_coord_deserialize_rejects_off_board() {
        let ok: Result<Coord, _> = serde_json::from_str(r#"{"row":1,"col":1}"#);
        assert!(ok.is_ok());
        let bad: Result<Coord, _> = serde_json::from_str(r#"{"row":1,"col":3}"#);
        assert!(bad.is_err());
    }

    #[test]
    fn test_board_display() {
        let mut board = Board::new();
        board.set(Coord::at(0, 0), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 1), Cell::Occupied(Player::O));
        assert_eq!(board.display(), "X|2|3\n-+-+-\n4|O|6\n-+-+-\n7|8|9");
    }

    #[test]
    fn test_board_counts() {
        let mut board = Board::new();
        board.set(Coord::at(0, 0), Cell::Occupied(Player::X));
        board.set(Coord::at(2, 1), Cell::Occupied(Player::X));
        board.set(Coord::at(1, 1), Cell::Occupied(Player::O));
        assert_eq!(board.count(Player::X), 2);
        assert_eq!(board.count(Player::O), 1);
        assert_eq!(board.occupied(), 3);
    }
}
