//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`](crate::Board). Rules are kept apart
//! from the game state so the contracts and invariants can reuse them.

pub mod full;
pub mod win;

pub use full::is_full;
pub use win::{Line, check_winner, winning_line};
