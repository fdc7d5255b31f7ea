//! Camera description and screen/world mapping.
//!
//! Types here avoid platform-specific APIs; the web frontend uses them to
//! build matrices, size the pointer plane and place DOM overlays.

use crate::constants::{CAMERA_FAR, CAMERA_FOV_DEG, CAMERA_NEAR, CAMERA_Z};
use crate::pointer::Viewport;
use glam::{Mat4, Vec2, Vec3};

/// Simple right-handed camera description with perspective projection.
#[derive(Clone, Debug)]
pub struct Camera {
    pub eye: Vec3,
    pub target: Vec3,
    pub up: Vec3,
    pub aspect: f32,
    pub fovy_radians: f32,
    pub znear: f32,
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            eye: Vec3::new(0.0, 0.0, CAMERA_Z),
            target: Vec3::ZERO,
            up: Vec3::Y,
            aspect: 1.0,
            fovy_radians: CAMERA_FOV_DEG.to_radians(),
            znear: CAMERA_NEAR,
            zfar: CAMERA_FAR,
        }
    }
}

impl Camera {
    /// Compute the clip-space projection matrix.
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.fovy_radians, self.aspect, self.znear, self.zfar)
    }
    /// Compute the view matrix that transforms world to view space.
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.eye, self.target, self.up)
    }

    pub fn view_proj(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    pub fn set_aspect_from_size(&mut self, width: u32, height: u32) {
        self.aspect = width.max(1) as f32 / height.max(1) as f32;
    }

    /// World-space extent visible at the distance of `point` from the eye.
    pub fn viewport_at(&self, point: Vec3) -> Viewport {
        let distance = (self.eye - point).length();
        let height = 2.0 * (self.fovy_radians / 2.0).tan() * distance;
        Viewport {
            width: height * self.aspect,
            height,
        }
    }

    /// Visible extent at the camera target.
    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport_at(self.target)
    }

    /// Project a world point to normalized device coordinates (+y up).
    ///
    /// Returns `None` for points behind the eye.
    pub fn project(&self, world: Vec3) -> Option<Vec2> {
        let clip = self.view_proj() * world.extend(1.0);
        if clip.w <= 0.0 {
            return None;
        }
        Some(Vec2::new(clip.x / clip.w, clip.y / clip.w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_projects_to_centre() {
        let cam = Camera::default();
        let ndc = cam.project(Vec3::ZERO).unwrap();
        assert!(ndc.length() < 1e-6);
    }

    #[test]
    fn viewport_edges_project_to_ndc_edges() {
        let mut cam = Camera::default();
        cam.set_aspect_from_size(1600, 900);
        let vp = cam.viewport();
        let corner = cam
            .project(Vec3::new(vp.width / 2.0, vp.height / 2.0, 0.0))
            .unwrap();
        assert!((corner - Vec2::ONE).length() < 1e-4, "{corner:?}");
    }

    #[test]
    fn points_behind_eye_do_not_project() {
        let cam = Camera::default();
        assert!(cam.project(Vec3::new(0.0, 0.0, 40.0)).is_none());
    }
}
