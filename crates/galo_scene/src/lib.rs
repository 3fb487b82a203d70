//! Pickable 3D scene for the galo board.
//!
//! The board is nine box-shaped tiles in the `z = 0` plane viewed by a
//! perspective camera on the `+z` axis. A pointer position is converted to
//! normalized device coordinates by a [`Viewport`], turned into a pick ray
//! by the [`PerspectiveCamera`], and intersected with the [`Scene`]. The
//! [`Presenter`] maps the hit object back to a board cell, drives the
//! [`galo_core::GameState`], and reports [`SceneEvent`]s.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod camera;
mod config;
mod math;
mod presenter;
mod scene;
mod viewport;

pub use camera::PerspectiveCamera;
pub use config::{CameraConfig, ConfigError, SceneConfig};
pub use math::{Aabb, Ray, Vec3};
pub use presenter::{Presenter, SceneEvent};
pub use scene::{Hit, Node, NodeKind, Scene, coord_at, tile_center};
pub use viewport::{Ndc, Viewport};
