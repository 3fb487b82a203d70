//! History consistency invariant: one move per occupied cell.

use super::Invariant;
use crate::{GameState, Player};
use tracing::warn;

/// Invariant: the history length equals the number of occupied cells and
/// the mark counts never drift apart by more than one.
pub struct HistoryConsistentInvariant;

impl Invariant<GameState> for HistoryConsistentInvariant {
    fn holds(game: &GameState) -> bool {
        let board = game.board();
        let history_len = game.history().len();
        let occupied = board.occupied();
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);

        let valid = history_len == occupied && x_count.abs_diff(o_count) <= 1;
        if !valid {
            warn!(history_len, occupied, x_count, o_count, "History consistency violated");
        }
        valid
    }

    fn description() -> &'static str {
        "History length matches number of occupied cells"
    }
}
