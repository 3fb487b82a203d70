//! Contract-based validation for cell selection.
//!
//! Contracts formalize Hoare-style reasoning: `{P} select {Q}`.
//! Preconditions always run and turn bad input into a [`PlacementError`].
//! Postconditions describe internal consistency and are only checked in
//! debug builds.

use crate::action::PlacementError;
use crate::invariants::{GameInvariants, InvariantSet, InvariantViolation};
use crate::{Coord, GameState, GameStatus};
use tracing::instrument;

/// A contract defines preconditions and postconditions for a transition.
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), PlacementError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), Vec<InvariantViolation>>;
}

// ─────────────────────────────────────────────────────────────
//  Selection preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the raw coordinates are on the board.
pub struct CellInBounds;

impl CellInBounds {
    /// Validates raw coordinates, producing a [`Coord`].
    #[instrument]
    pub fn check(row: usize, col: usize) -> Result<Coord, PlacementError> {
        Coord::new(row, col)
    }
}

/// Precondition: nobody has won yet.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects selections on a won game.
    #[instrument(skip(game))]
    pub fn check(game: &GameState) -> Result<(), PlacementError> {
        match game.status() {
            GameStatus::Won(winner) => Err(PlacementError::GameOver(winner)),
            GameStatus::InProgress => Ok(()),
        }
    }
}

/// Precondition: the cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects selections of an occupied cell.
    #[instrument(skip(game))]
    pub fn check(coord: Coord, game: &GameState) -> Result<(), PlacementError> {
        if game.board().is_empty(coord) {
            Ok(())
        } else {
            Err(PlacementError::CellOccupied(coord))
        }
    }
}

/// Composite precondition: the cell is empty and the game is live.
///
/// An occupied cell is reported as such even after a win.
pub struct LegalSelection;

impl LegalSelection {
    /// Validates all preconditions for a selection.
    #[instrument(skip(game))]
    pub fn check(coord: Coord, game: &GameState) -> Result<(), PlacementError> {
        CellIsEmpty::check(coord, game)?;
        GameNotOver::check(game)?;
        Ok(())
    }
}

// ─────────────────────────────────────────────────────────────
//  Selection contract (pre + post)
// ─────────────────────────────────────────────────────────────

/// Contract for `select_cell`.
///
/// Preconditions:
/// - Cell is empty
/// - Game is not over
///
/// Postconditions:
/// - Exactly one move was added
/// - No previously marked cell changed
/// - All [`GameInvariants`] hold
pub struct SelectionContract;

impl Contract<GameState, Coord> for SelectionContract {
    fn pre(game: &GameState, coord: &Coord) -> Result<(), PlacementError> {
        LegalSelection::check(*coord, game)
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = GameInvariants::check_all(after).err().unwrap_or_default();

        if after.history().len() != before.history().len() + 1 {
            violations.push(InvariantViolation::new("Selection added exactly one move"));
        }

        let kept_marks = before
            .board()
            .iter()
            .filter(|(_, cell)| cell.player().is_some())
            .all(|(coord, cell)| after.board().get(coord) == cell);
        if !kept_marks {
            violations.push(InvariantViolation::new("Selection kept every existing mark"));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Cell, Player};

    #[test]
    fn test_precondition_empty_cell() {
        let game = GameState::new();
        assert!(SelectionContract::pre(&game, &Coord::at(1, 1)).is_ok());
    }

    #[test]
    fn test_precondition_occupied_cell() {
        let mut game = GameState::new();
        game.select_cell(1, 1).unwrap();
        assert_eq!(
            SelectionContract::pre(&game, &Coord::at(1, 1)),
            Err(PlacementError::CellOccupied(Coord::at(1, 1)))
        );
    }

    #[test]
    fn test_precondition_occupied_checked_before_game_over() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 1), (0, 1), (2, 2), (0, 2)] {
            game.select_cell(row, col).unwrap();
        }
        assert_eq!(
            SelectionContract::pre(&game, &Coord::at(0, 0)),
            Err(PlacementError::CellOccupied(Coord::at(0, 0)))
        );
        assert_eq!(
            SelectionContract::pre(&game, &Coord::at(2, 0)),
            Err(PlacementError::GameOver(Player::X))
        );
    }

    #[test]
    fn test_postcondition_holds_after_select() {
        let before = GameState::new();
        let mut after = before.clone();
        after.select_cell(1, 1).unwrap();
        assert!(SelectionContract::post(&before, &after).is_ok());
    }

    #[test]
    fn test_postcondition_detects_missing_move() {
        let before = GameState::new();
        assert!(SelectionContract::post(&before, &before).is_err());
    }

    #[test]
    fn test_postcondition_detects_overwrite() {
        let mut before = GameState::new();
        before.select_cell(1, 1).unwrap();
        let mut after = before.clone();
        after.select_cell(0, 0).unwrap();
        after.board.set(Coord::at(1, 1), Cell::Occupied(Player::O));
        let violations = SelectionContract::post(&before, &after).unwrap_err();
        assert!(
            violations
                .iter()
                .any(|v| v.description == "Selection kept every existing mark")
        );
    }
}
