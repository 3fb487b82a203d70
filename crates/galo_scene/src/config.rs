//! Scene configuration, loadable from TOML.

use derive_getters::Getters;
use derive_more::{Display, Error};
use galo_core::Player;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Camera settings.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Vertical field of view in degrees.
    fov_degrees: f32,
    /// Near clipping distance.
    near: f32,
    /// Far clipping distance.
    far: f32,
    /// Distance from the camera to the board plane.
    distance: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            fov_degrees: 75.0,
            near: 0.1,
            far: 1000.0,
            distance: 5.0,
        }
    }
}

/// Board geometry, colours and behaviour.
///
/// Every field has a default, so a config file only needs the values it
/// changes. Colours are `0xRRGGBB`.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    /// Edge length of a board tile.
    square_size: f32,
    /// Thickness of tiles and marks.
    tile_depth: f32,
    /// Tile colour.
    tile_color: u32,
    /// Tile opacity in `[0, 1]`.
    tile_opacity: f32,
    /// Edge length of a mark; must not exceed the tile.
    mark_size: f32,
    /// Height of a mark's centre above the board plane.
    mark_lift: f32,
    /// Colour of X's marks.
    x_color: u32,
    /// Colour of O's marks.
    o_color: u32,
    /// Start a new game as soon as a winner has been announced.
    auto_reset_on_win: bool,
    /// Camera settings.
    camera: CameraConfig,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            square_size: 1.0,
            tile_depth: 0.2,
            tile_color: 0xdddddd,
            tile_opacity: 0.8,
            mark_size: 0.8,
            mark_lift: 0.1,
            x_color: 0xff0000,
            o_color: 0x0000ff,
            auto_reset_on_win: false,
            camera: CameraConfig::default(),
        }
    }
}

impl SceneConfig {
    /// Loads and validates configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading scene config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;
        let config = Self::from_toml_str(&content)?;
        info!("Scene config loaded");
        Ok(config)
    }

    /// Parses and validates configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;
        config.validate()?;
        Ok(config)
    }

    /// Checks that the geometry makes sense.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        let camera = &self.camera;
        let positive = [
            ("square_size", self.square_size),
            ("tile_depth", self.tile_depth),
            ("mark_size", self.mark_size),
            ("camera.near", camera.near),
        ];
        if let Some((name, value)) = positive
            .iter()
            .find(|(_, value)| !(value.is_finite() && *value > 0.0))
        {
            return Err(ConfigError::new(format!("{} must be positive, got {}", name, value)));
        }
        let finite = [
            ("tile_opacity", self.tile_opacity),
            ("mark_lift", self.mark_lift),
            ("camera.fov_degrees", camera.fov_degrees),
            ("camera.far", camera.far),
            ("camera.distance", camera.distance),
        ];
        if let Some((name, value)) = finite.iter().find(|(_, value)| !value.is_finite()) {
            return Err(ConfigError::new(format!("{} must be finite, got {}", name, value)));
        }
        if self.mark_size > self.square_size {
            return Err(ConfigError::new(format!(
                "mark_size {} exceeds square_size {}",
                self.mark_size, self.square_size
            )));
        }
        if !(0.0..=1.0).contains(&self.tile_opacity) {
            return Err(ConfigError::new(format!(
                "tile_opacity must be within [0, 1], got {}",
                self.tile_opacity
            )));
        }
        if !(camera.fov_degrees > 0.0 && camera.fov_degrees < 180.0) {
            return Err(ConfigError::new(format!(
                "camera.fov_degrees must be within (0, 180), got {}",
                camera.fov_degrees
            )));
        }
        if camera.near >= camera.far {
            return Err(ConfigError::new(format!(
                "camera.near {} must be less than camera.far {}",
                camera.near, camera.far
            )));
        }
        let surface = self.mark_lift + self.tile_depth;
        if camera.distance - surface <= camera.near {
            return Err(ConfigError::new(format!(
                "camera.distance {} leaves the board inside the near plane",
                camera.distance
            )));
        }
        Ok(())
    }

    /// Colour used for `player`'s marks.
    pub fn mark_color(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_color,
            Player::O => self.o_color,
        }
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
