//! The game state machine.
//!
//! States are `InProgress` and `Won(player)`. [`GameState::select_cell`]
//! moves `InProgress` to `InProgress` or `Won`; [`GameState::reset`] moves
//! any state back to a fresh `InProgress`. `Won` is terminal until reset.

use crate::action::{Move, Placement, PlacementError};
use crate::contracts::{CellInBounds, Contract, SelectionContract};
use crate::rules::{self, Line};
use crate::types::{Board, Cell, Coord, GameStatus, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// Complete game state: the board, whose turn it is, and the moves so far.
///
/// The status is never stored; it is recomputed from the board.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    pub(crate) board: Board,
    pub(crate) current_player: Player,
    pub(crate) history: Vec<Move>,
}

impl GameState {
    /// Creates a new game: empty board, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            current_player: Player::X,
            history: Vec::new(),
        }
    }

    /// Places the current player's mark at `(row, col)`.
    ///
    /// On success the move is recorded and the win lines are evaluated. A
    /// completed line returns [`Placement::Won`] and freezes the game: the
    /// turn is not advanced and the board is kept until [`reset`](Self::reset).
    /// Otherwise the turn passes to the opponent and
    /// [`Placement::Continued`] is returned.
    ///
    /// # Errors
    ///
    /// Every error leaves the state untouched.
    /// - [`PlacementError::OutOfBounds`] if `row` or `col` is not in `0..3`
    /// - [`PlacementError::CellOccupied`] if the cell already holds a mark
    /// - [`PlacementError::GameOver`] if the game has already been won
    #[instrument(skip(self), fields(player = %self.current_player))]
    pub fn select_cell(&mut self, row: usize, col: usize) -> Result<Placement, PlacementError> {
        let coord = CellInBounds::check(row, col)?;
        SelectionContract::pre(self, &coord)?;

        #[cfg(debug_assertions)]
        let before = self.clone();

        let mov = Move::new(self.current_player, coord);
        self.board.set(coord, Cell::Occupied(mov.player));
        self.history.push(mov);

        let placement = match rules::winning_line(&self.board) {
            Some((line, winner)) => {
                info!(%winner, %line, moves = self.history.len(), "Line completed");
                Placement::Won(mov)
            }
            None => {
                self.current_player = self.current_player.opponent();
                debug!(%mov, next = %self.current_player, "Mark placed");
                Placement::Continued(mov)
            }
        };

        #[cfg(debug_assertions)]
        {
            let post = SelectionContract::post(&before, self);
            debug_assert!(post.is_ok(), "Selection broke game invariants: {post:?}");
        }

        Ok(placement)
    }

    /// Clears every cell and hands the first move back to X.
    ///
    /// Always succeeds; resetting a fresh game changes nothing.
    #[instrument(skip(self), fields(moves = self.history.len()))]
    pub fn reset(&mut self) {
        *self = Self::new();
        debug!("Game reset");
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the cell at `coord`.
    pub fn cell(&self, coord: Coord) -> Cell {
        self.board.get(coord)
    }

    /// Returns the player whose mark the next placement will use.
    ///
    /// After a win this is still the winner, since the turn is not advanced.
    pub fn current_player(&self) -> Player {
        self.current_player
    }

    /// Returns the successful moves since the last reset.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Derives the game status from the board.
    pub fn status(&self) -> GameStatus {
        match rules::check_winner(&self.board) {
            Some(winner) => GameStatus::Won(winner),
            None => GameStatus::InProgress,
        }
    }

    /// Returns the winner, if any.
    pub fn winner(&self) -> Option<Player> {
        rules::check_winner(&self.board)
    }

    /// Returns the completed line and its owner, if any.
    pub fn winning_line(&self) -> Option<(Line, Player)> {
        rules::winning_line(&self.board)
    }

    /// Checks if every cell is marked. Does not affect the status.
    pub fn is_board_full(&self) -> bool {
        rules::is_full(&self.board)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = GameState::new();
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.status(), GameStatus::InProgress);
        assert!(game.history().is_empty());
        assert!(game.board().iter().all(|(_, cell)| cell == Cell::Empty));
    }

    #[test]
    fn test_select_marks_and_advances() {
        let mut game = GameState::new();
        let placement = game.select_cell(2, 1).unwrap();
        let coord = Coord::new(2, 1).unwrap();
        assert_eq!(placement, Placement::Continued(Move::new(Player::X, coord)));
        assert_eq!(game.cell(coord), Cell::Occupied(Player::X));
        assert_eq!(game.current_player(), Player::O);
    }

    #[test]
    fn test_out_of_bounds_rejected_without_mutation() {
        let mut game = GameState::new();
        game.select_cell(0, 0).unwrap();
        let snapshot = game.clone();

        assert_eq!(
            game.select_cell(3, 1),
            Err(PlacementError::OutOfBounds { row: 3, col: 1 })
        );
        assert_eq!(
            game.select_cell(usize::MAX, 0),
            Err(PlacementError::OutOfBounds {
                row: usize::MAX,
                col: 0
            })
        );
        assert_eq!(game, snapshot);
    }

    #[test]
    fn test_win_freezes_turn_and_board() {
        let mut game = GameState::new();
        for (row, col) in [(0, 0), (1, 0), (1, 1), (2, 0)] {
            game.select_cell(row, col).unwrap();
        }
        let placement = game.select_cell(2, 2).unwrap();
        assert_eq!(placement.winner(), Some(Player::X));
        assert_eq!(game.current_player(), Player::X);
        assert_eq!(game.winning_line(), Some((Line::Diagonal, Player::X)));
        assert_eq!(game.board().occupied(), 5);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut game = GameState::new();
        game.select_cell(1, 1).unwrap();
        game.reset();
        let once = game.clone();
        game.reset();
        assert_eq!(game, once);
        assert_eq!(game, GameState::new());
    }
}
