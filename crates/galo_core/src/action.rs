//! First-class placement types.
//!
//! A placement is a domain event: the current player marking one cell.
//! Successful placements are recorded as [`Move`]s and reported through
//! [`Placement`]; rejected ones come back as a [`PlacementError`] and leave
//! the game untouched.

use super::types::{Coord, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// A successful placement: a player's mark landing on a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    /// The player who placed the mark.
    pub player: Player,
    /// Where the mark was placed.
    pub coord: Coord,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(player: Player, coord: Coord) -> Self {
        Self { player, coord }
    }

    /// Returns the player who made this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the cell this move marked.
    pub fn coord(&self) -> Coord {
        self.coord
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} -> {}", self.player, self.coord)
    }
}

/// Result of a successful `select_cell`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Placement {
    /// Mark placed, no line completed; the turn has passed to the opponent.
    Continued(Move),
    /// Mark placed and it completed a line. The game is frozen until reset.
    Won(Move),
}

impl Placement {
    /// The move that was applied.
    pub fn applied(&self) -> Move {
        match self {
            Placement::Continued(mov) | Placement::Won(mov) => *mov,
        }
    }

    /// The winner, if this placement ended the game.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Placement::Won(mov) => Some(mov.player),
            Placement::Continued(_) => None,
        }
    }
}

/// Why a selection was rejected. The game state is unchanged in every case.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_more::Display)]
pub enum PlacementError {
    /// Row or column outside `0..3`.
    #[display("Cell ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
    },

    /// The cell already holds a mark.
    #[display("Cell {_0} is already occupied")]
    CellOccupied(Coord),

    /// The game has been won and is waiting for a reset.
    #[display("Game is already over: player {_0} won")]
    GameOver(Player),
}

impl std::error::Error for PlacementError {}
