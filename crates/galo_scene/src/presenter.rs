//! Event handler tying pointer input, the game state and the scene together.
//!
//! The presenter is the single writer of its [`GameState`]. Each call runs
//! to completion and reports what the front end has to draw as a list of
//! [`SceneEvent`]s.

use crate::camera::PerspectiveCamera;
use crate::config::SceneConfig;
use crate::scene::Scene;
use crate::viewport::Ndc;
use galo_core::{GameState, GameStatus, Line, Placement, Player};
use serde::Serialize;
use tracing::{debug, info, instrument, warn};

/// Something the front end should render or announce.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum SceneEvent {
    /// A mark was added to the scene.
    MarkPlaced {
        /// Board row.
        row: usize,
        /// Board column.
        col: usize,
        /// Whose mark it is.
        player: Player,
        /// Mark colour as `0xRRGGBB`.
        color: u32,
    },
    /// The last placement completed a line.
    WinnerAnnounced {
        /// The winner.
        player: Player,
        /// The completed line.
        line: Line,
    },
    /// The selection was refused; nothing changed.
    Rejected {
        /// Requested row.
        row: usize,
        /// Requested column.
        col: usize,
        /// Human-readable reason.
        reason: String,
    },
    /// All marks were removed and a new game started.
    MarksCleared {
        /// Number of marks removed.
        removed: usize,
    },
    /// The pointer did not hit the board.
    Missed {
        /// Pointer x in NDC.
        x: f32,
        /// Pointer y in NDC.
        y: f32,
    },
}

/// Owns one game and its scene.
#[derive(Debug, Clone)]
pub struct Presenter {
    game: GameState,
    scene: Scene,
    camera: PerspectiveCamera,
    auto_reset_on_win: bool,
}

impl Presenter {
    /// Creates a presenter with a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: &SceneConfig, aspect: f32) -> Self {
        info!(auto_reset_on_win = *config.auto_reset_on_win(), "Creating presenter");
        Self {
            game: GameState::new(),
            scene: Scene::new(config),
            camera: PerspectiveCamera::new(config.camera(), aspect),
            auto_reset_on_win: *config.auto_reset_on_win(),
        }
    }

    /// The game state.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// The scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The camera.
    pub fn camera(&self) -> &PerspectiveCamera {
        &self.camera
    }

    /// Follows a viewport resize.
    pub fn set_aspect(&mut self, aspect: f32) {
        self.camera.set_aspect(aspect);
    }

    /// Handles a click at an NDC point.
    ///
    /// The pick ray hits a tile or a mark; the board cell comes from the hit
    /// object's position.
    #[instrument(skip(self))]
    pub fn click(&mut self, ndc: Ndc) -> Vec<SceneEvent> {
        let target = self
            .camera
            .ray_from_ndc(ndc)
            .and_then(|ray| self.scene.pick(&ray))
            .and_then(|hit| self.scene.coord_of(hit.node));

        match target {
            Some(coord) => self.select(coord.row(), coord.col()),
            None => {
                debug!("Click missed the board");
                vec![SceneEvent::Missed { x: ndc.x, y: ndc.y }]
            }
        }
    }

    /// Handles a direct cell selection.
    #[instrument(skip(self))]
    pub fn select(&mut self, row: usize, col: usize) -> Vec<SceneEvent> {
        let placement = match self.game.select_cell(row, col) {
            Ok(placement) => placement,
            Err(e) => {
                warn!(error = %e, "Selection rejected");
                return vec![SceneEvent::Rejected {
                    row,
                    col,
                    reason: e.to_string(),
                }];
            }
        };

        let mov = placement.applied();
        let color = self.scene.add_mark(mov.coord, mov.player).color();
        let mut events = vec![SceneEvent::MarkPlaced {
            row,
            col,
            player: mov.player,
            color,
        }];

        if let Placement::Won(_) = placement
            && let Some((line, player)) = self.game.winning_line()
        {
            info!(%player, %line, "Announcing winner");
            events.push(SceneEvent::WinnerAnnounced { player, line });
            if self.auto_reset_on_win {
                events.extend(self.reset());
            }
        }
        events
    }

    /// Clears the board and the marks.
    #[instrument(skip(self))]
    pub fn reset(&mut self) -> Vec<SceneEvent> {
        self.game.reset();
        let removed = self.scene.clear_marks();
        vec![SceneEvent::MarksCleared { removed }]
    }

    /// One-line summary for a status bar.
    pub fn status_line(&self) -> String {
        match self.game.status() {
            GameStatus::Won(player) => {
                format!("Player {} wins! Press 'r' to play again.", player)
            }
            GameStatus::InProgress if self.game.is_board_full() => {
                "Board full with no winner. Press 'r' to play again.".to_string()
            }
            GameStatus::InProgress => {
                format!("Player {}'s turn.", self.game.current_player())
            }
        }
    }
}
