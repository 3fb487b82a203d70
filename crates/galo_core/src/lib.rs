//! Tic-tac-toe game state.
//!
//! The crate owns the 3x3 board and the turn, and nothing else: no
//! rendering, no input handling, no I/O. A front end turns its own input
//! into a `(row, col)` pair, calls [`GameState::select_cell`], and renders
//! whatever the returned [`Placement`] says happened.
//!
//! # Example
//!
//! ```
//! use galo_core::{GameState, GameStatus, Placement, Player};
//!
//! let mut game = GameState::new();
//! for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2)] {
//!     assert!(matches!(game.select_cell(row, col), Ok(Placement::Continued(_))));
//! }
//! let placement = game.select_cell(0, 2).unwrap();
//! assert_eq!(placement.winner(), Some(Player::X));
//! assert_eq!(game.status(), GameStatus::Won(Player::X));
//!
//! game.reset();
//! assert_eq!(game.status(), GameStatus::InProgress);
//! assert_eq!(game.current_player(), Player::X);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod game;
mod invariants;
mod rules;
mod types;

pub use action::{Move, Placement, PlacementError};
pub use contracts::{
    CellInBounds, CellIsEmpty, Contract, GameNotOver, LegalSelection, SelectionContract,
};
pub use game::GameState;
pub use invariants::{
    AlternatingTurnInvariant, GameInvariants, HistoryConsistentInvariant, Invariant,
    InvariantSet, InvariantViolation, MonotonicBoardInvariant,
};
pub use rules::{Line, check_winner, is_full, winning_line};
pub use types::{Board, Cell, Coord, GameStatus, Player};
