//! Galo - tic-tac-toe on a pickable 3D board.
//!
//! # Architecture
//!
//! - **galo_core**: the game state (board, turn, win detection, reset)
//! - **galo_scene**: tiles and marks in world space, camera, picking, and
//!   the presenter that feeds clicks into the game
//! - **this crate**: the command line, the terminal UI and the headless
//!   script driver

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod script;
mod tui;

use galo_scene::{ConfigError, SceneConfig};
use std::path::Path;
use tracing::{debug, instrument};

pub use cli::{Cli, Command};
pub use script::{ScriptCommand, ScriptError, parse_line, run_script};
pub use tui::run_tui;

/// Loads the scene configuration, falling back to defaults without a path.
#[instrument]
pub fn load_config(path: Option<&Path>) -> Result<SceneConfig, ConfigError> {
    match path {
        Some(path) => SceneConfig::from_file(path),
        None => {
            debug!("No config file given, using defaults");
            Ok(SceneConfig::default())
        }
    }
}
