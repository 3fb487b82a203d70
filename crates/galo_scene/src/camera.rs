//! Perspective camera looking straight down the board's normal.

use crate::config::CameraConfig;
use crate::math::{Ray, Vec3};
use crate::viewport::Ndc;
use tracing::instrument;

/// A perspective camera on the `+z` axis looking towards `-z`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PerspectiveCamera {
    fov_degrees: f32,
    aspect: f32,
    near: f32,
    far: f32,
    position: Vec3,
}

impl PerspectiveCamera {
    /// Creates a camera from its configuration and the viewport aspect ratio.
    #[instrument]
    pub fn new(config: &CameraConfig, aspect: f32) -> Self {
        Self {
            fov_degrees: *config.fov_degrees(),
            aspect,
            near: *config.near(),
            far: *config.far(),
            position: Vec3::new(0.0, 0.0, *config.distance()),
        }
    }

    /// Camera position in world space.
    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Width over height of the image plane.
    pub fn aspect(&self) -> f32 {
        self.aspect
    }

    /// Updates the aspect ratio after the viewport changed shape.
    pub fn set_aspect(&mut self, aspect: f32) {
        if aspect.is_finite() && aspect > 0.0 {
            self.aspect = aspect;
        }
    }

    /// Half extents of the image plane at unit distance.
    fn half_extents(&self) -> (f32, f32) {
        let half_height = (self.fov_degrees.to_radians() * 0.5).tan();
        (half_height * self.aspect, half_height)
    }

    /// Builds the pick ray through an NDC point.
    pub fn ray_from_ndc(&self, ndc: Ndc) -> Option<Ray> {
        let (half_w, half_h) = self.half_extents();
        Ray::new(
            self.position,
            Vec3::new(ndc.x * half_w, ndc.y * half_h, -1.0),
        )
    }

    /// Projects a world point into NDC.
    ///
    /// Returns `None` for points behind the near plane or past the far plane.
    pub fn project(&self, point: Vec3) -> Option<Ndc> {
        let rel = point - self.position;
        let depth = -rel.z;
        if depth < self.near || depth > self.far {
            return None;
        }
        let (half_w, half_h) = self.half_extents();
        Some(Ndc::new(rel.x / (depth * half_w), rel.y / (depth * half_h)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn camera() -> PerspectiveCamera {
        PerspectiveCamera::new(&CameraConfig::default(), 1.5)
    }

    #[test]
    fn test_center_ray_points_down_the_axis() {
        let ray = camera().ray_from_ndc(Ndc::new(0.0, 0.0)).unwrap();
        assert_eq!(ray.origin(), Vec3::new(0.0, 0.0, 5.0));
        assert_eq!(ray.direction(), Vec3::new(0.0, 0.0, -1.0));
    }

    #[test]
    fn test_project_then_ray_passes_through_point() {
        let camera = camera();
        let point = Vec3::new(1.0, -1.0, 0.1);
        let ndc = camera.project(point).unwrap();
        let ray = camera.ray_from_ndc(ndc).unwrap();

        let t = (point.z - ray.origin().z) / ray.direction().z;
        let hit = ray.at(t);
        assert!((hit.x - point.x).abs() < 1e-4);
        assert!((hit.y - point.y).abs() < 1e-4);
    }

    #[test]
    fn test_point_behind_camera_not_projected() {
        assert_eq!(camera().project(Vec3::new(0.0, 0.0, 6.0)), None);
    }

    #[test]
    fn test_set_aspect_ignores_nonsense() {
        let mut camera = camera();
        camera.set_aspect(0.0);
        camera.set_aspect(f32::NAN);
        assert_eq!(camera.aspect(), 1.5);
        camera.set_aspect(2.0);
        assert_eq!(camera.aspect(), 2.0);
    }
}
