//! Alternating turn invariant: X, O, X, O, ...

use super::Invariant;
use crate::{GameState, GameStatus, Player};

/// Invariant: players alternate starting with X, and the player to move is
/// consistent with the history.
///
/// While in progress the player to move follows from the parity of the
/// history. Once won, the turn is not advanced, so the player to move is the
/// one who made the last (winning) move.
pub struct AlternatingTurnInvariant;

impl Invariant<GameState> for AlternatingTurnInvariant {
    fn holds(game: &GameState) -> bool {
        let history = game.history();

        if history.first().is_some_and(|mov| mov.player != Player::X) {
            return false;
        }
        if history.windows(2).any(|pair| pair[0].player == pair[1].player) {
            return false;
        }

        match game.status() {
            GameStatus::Won(winner) => history
                .last()
                .is_some_and(|last| last.player == winner && game.current_player() == winner),
            GameStatus::InProgress => {
                let expected = if history.len() % 2 == 0 {
                    Player::X
                } else {
                    Player::O
                };
                game.current_player() == expected
            }
        }
    }

    fn description() -> &'static str {
        "Players alternate turns (X, O, X, O, ...)"
    }
}
