use std::f32::consts::FRAC_PI_2;

use glam::{Mat4, Vec3};

use crate::input::PointerState;
use crate::types::CameraUniform;

pub const FOV_Y_DEGREES: f32 = 75.0;
pub const Z_NEAR: f32 = 0.1;
pub const Z_FAR: f32 = 1000.0;

pub const MIN_DISTANCE: f32 = 1.0;
pub const MAX_DISTANCE: f32 = 200.0;
const PITCH_LIMIT: f32 = FRAC_PI_2 - 0.01;

/// Radians per pixel of drag
pub const ORBIT_SPEED: f32 = 0.005;
/// Distance factor per wheel notch
pub const ZOOM_STEP: f32 = 0.9;

/// Orbit camera looking at a movable target
#[derive(Debug, Clone, PartialEq)]
pub struct OrbitCamera {
    pub yaw: f32,
    pub pitch: f32,
    pub distance: f32,
    pub target: Vec3,
}

impl OrbitCamera {
    /// Camera at `eye` looking at `target`
    pub fn from_eye(eye: Vec3, target: Vec3) -> Self {
        let offset = eye - target;
        let distance = offset.length().clamp(MIN_DISTANCE, MAX_DISTANCE);
        let (yaw, pitch) = if offset.length_squared() > 0.0 {
            let dir = offset.normalize();
            (dir.x.atan2(dir.z), dir.y.clamp(-1.0, 1.0).asin())
        } else {
            (0.0, 0.0)
        };

        Self {
            yaw,
            pitch: pitch.clamp(-PITCH_LIMIT, PITCH_LIMIT),
            distance,
            target,
        }
    }

    pub fn position(&self) -> Vec3 {
        let x = self.distance * self.pitch.cos() * self.yaw.sin();
        let y = self.distance * self.pitch.sin();
        let z = self.distance * self.pitch.cos() * self.yaw.cos();
        self.target + Vec3::new(x, y, z)
    }

    pub fn forward(&self) -> Vec3 {
        (self.target - self.position()).normalize_or_zero()
    }

    pub fn right(&self) -> Vec3 {
        self.forward().cross(Vec3::Y).normalize_or_zero()
    }

    pub fn up(&self) -> Vec3 {
        self.right().cross(self.forward())
    }

    /// Rotate around the target by a drag of (dx, dy) pixels
    pub fn orbit(&mut self, dx: f32, dy: f32) {
        self.yaw -= dx * ORBIT_SPEED;
        self.pitch = (self.pitch + dy * ORBIT_SPEED).clamp(-PITCH_LIMIT, PITCH_LIMIT);
    }

    /// Slide the target in the view plane, scaled by distance
    pub fn pan(&mut self, dx: f32, dy: f32) {
        let scale = self.distance * ORBIT_SPEED * 0.2;
        self.target += (-self.right() * dx + self.up() * dy) * scale;
    }

    /// Positive notches move closer
    pub fn zoom(&mut self, notches: f32) {
        self.distance = (self.distance * ZOOM_STEP.powf(notches)).clamp(MIN_DISTANCE, MAX_DISTANCE);
    }

    /// Consume this frame's pointer deltas
    pub fn update(&mut self, pointer: &PointerState) {
        let (dx, dy) = pointer.drag_delta();
        if pointer.is_rotating() {
            self.orbit(dx, dy);
        } else if pointer.is_panning() {
            self.pan(dx, dy);
        }
        if pointer.scroll() != 0.0 {
            self.zoom(pointer.scroll());
        }
    }

    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position(), self.target, Vec3::Y)
    }

    pub fn projection(&self, aspect: f32) -> Mat4 {
        Mat4::perspective_rh(FOV_Y_DEGREES.to_radians(), aspect.max(1e-3), Z_NEAR, Z_FAR)
    }

    pub fn view_proj(&self, aspect: f32) -> Mat4 {
        self.projection(aspect) * self.view_matrix()
    }

    pub fn to_uniform(&self, aspect: f32) -> CameraUniform {
        CameraUniform::new(self.view_proj(aspect), self.position())
    }
}

impl Default for OrbitCamera {
    fn default() -> Self {
        Self::from_eye(Vec3::new(0.0, 2.0, 10.0), Vec3::ZERO)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_eye() {
        let camera = OrbitCamera::default();
        let eye = camera.position();
        assert!((eye - Vec3::new(0.0, 2.0, 10.0)).length() < 1e-4);
    }

    #[test]
    fn test_pitch_clamped() {
        let mut camera = OrbitCamera::default();
        camera.orbit(0.0, 1.0e6);
        assert!(camera.pitch < FRAC_PI_2);
        camera.orbit(0.0, -1.0e6);
        assert!(camera.pitch > -FRAC_PI_2);
    }

    #[test]
    fn test_zoom_clamped() {
        let mut camera = OrbitCamera::default();
        camera.zoom(1000.0);
        assert_eq!(camera.distance, MIN_DISTANCE);
        camera.zoom(-1000.0);
        assert_eq!(camera.distance, MAX_DISTANCE);
    }

    #[test]
    fn test_orbit_keeps_distance() {
        let mut camera = OrbitCamera::default();
        let before = camera.position().distance(camera.target);
        camera.orbit(120.0, -40.0);
        let after = camera.position().distance(camera.target);
        assert!((before - after).abs() < 1e-4);
    }

    #[test]
    fn test_pan_moves_target() {
        let mut camera = OrbitCamera::default();
        camera.pan(100.0, 0.0);
        assert!(camera.target.x < 0.0);
    }

    #[test]
    fn test_target_projects_to_center() {
        let camera = OrbitCamera::default();
        let clip = camera.view_proj(16.0 / 9.0) * camera.target.extend(1.0);
        let ndc = clip.truncate() / clip.w;
        assert!(ndc.x.abs() < 1e-4);
        assert!(ndc.y.abs() < 1e-4);
    }
}
