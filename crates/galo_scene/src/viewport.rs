//! Pointer coordinates to normalized device coordinates and back.

use serde::{Deserialize, Serialize};

/// A point in normalized device coordinates: `x` and `y` in `[-1, 1]`,
/// `+y` up, `(0, 0)` in the centre of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Ndc {
    /// Horizontal, -1 at the left edge.
    pub x: f32,
    /// Vertical, -1 at the bottom edge.
    pub y: f32,
}

impl Ndc {
    /// Creates a new NDC point.
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// The on-screen rectangle the scene is drawn into, in pointer units
/// (pixels, terminal columns, ...). `top` grows downwards.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    left: f32,
    top: f32,
    width: f32,
    height: f32,
}

impl Viewport {
    /// Creates a viewport.
    pub fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Width over height, or `None` for an empty viewport.
    pub fn aspect(&self) -> Option<f32> {
        (!self.is_degenerate()).then(|| self.width / self.height)
    }

    fn is_degenerate(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }

    /// Converts a pointer position into NDC.
    ///
    /// Returns `None` for an empty viewport. Positions outside the viewport
    /// map outside `[-1, 1]`, which simply picks nothing.
    pub fn to_ndc(&self, client_x: f32, client_y: f32) -> Option<Ndc> {
        if self.is_degenerate() {
            return None;
        }
        Some(Ndc {
            x: ((client_x - self.left) / self.width) * 2.0 - 1.0,
            y: -((client_y - self.top) / self.height) * 2.0 + 1.0,
        })
    }

    /// Converts NDC back into a pointer position.
    pub fn from_ndc(&self, ndc: Ndc) -> (f32, f32) {
        (
            self.left + (ndc.x + 1.0) * 0.5 * self.width,
            self.top + (1.0 - ndc.y) * 0.5 * self.height,
        )
    }
}
