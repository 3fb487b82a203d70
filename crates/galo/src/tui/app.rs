//! Application state and input handling.

use galo_core::{Coord, GameStatus};
use galo_scene::{Presenter, SceneConfig, SceneEvent, Viewport};
use ratatui::layout::Rect;
use tracing::debug;

/// Terminal cells are roughly twice as tall as they are wide.
const CELL_ASPECT: f32 = 0.5;

/// Main application state.
pub struct App {
    presenter: Presenter,
    status_message: String,
    scene_area: Rect,
}

impl App {
    /// Creates a new application.
    pub fn new(config: &SceneConfig) -> Self {
        let presenter = Presenter::new(config, 1.0);
        let status_message = presenter.status_line();
        Self {
            presenter,
            status_message,
            scene_area: Rect::default(),
        }
    }

    /// Gets the presenter.
    pub fn presenter(&self) -> &Presenter {
        &self.presenter
    }

    /// Gets the current status message.
    pub fn status_message(&self) -> &str {
        &self.status_message
    }

    /// Records where the scene is drawn and matches the camera to it.
    pub fn set_scene_area(&mut self, area: Rect) {
        if area != self.scene_area {
            debug!(?area, "Scene area changed");
            self.scene_area = area;
            if let Some(aspect) = viewport(area).aspect() {
                self.presenter.set_aspect(aspect * CELL_ASPECT);
            }
        }
    }

    /// Handles a left click at a terminal cell.
    pub fn click(&mut self, column: u16, row: u16) {
        let ndc = viewport(self.scene_area).to_ndc(column as f32 + 0.5, row as f32 + 0.5);
        if let Some(ndc) = ndc {
            let events = self.presenter.click(ndc);
            self.apply(events);
        }
    }

    /// Selects a cell by its 1-based row-major number.
    pub fn select_numbered(&mut self, number: u32) {
        let Some(coord) = (number as usize).checked_sub(1).and_then(Coord::from_index) else {
            return;
        };
        let events = self.presenter.select(coord.row(), coord.col());
        self.apply(events);
    }

    /// Restarts the game.
    pub fn restart(&mut self) {
        let events = self.presenter.reset();
        self.apply(events);
    }

    /// The cells of the winning line, if the game is won.
    pub fn highlighted(&self) -> Option<[Coord; 3]> {
        match self.presenter.game().status() {
            GameStatus::Won(_) => self
                .presenter
                .game()
                .winning_line()
                .map(|(line, _)| line.cells()),
            GameStatus::InProgress => None,
        }
    }

    fn apply(&mut self, events: Vec<SceneEvent>) {
        let mut message = self.presenter.status_line();
        for event in events {
            debug!(?event, "Scene event");
            if let SceneEvent::Rejected { reason, .. } = event {
                message = format!("{}. {}", reason, message);
            }
        }
        self.status_message = message;
    }
}

/// Viewport covering a terminal rectangle, in cell units.
pub fn viewport(area: Rect) -> Viewport {
    Viewport::new(
        area.x as f32,
        area.y as f32,
        area.width as f32,
        area.height as f32,
    )
}
