//! Per-frame sway for flowers and the ground.
//!
//! Both rules only compute a desired [`NodeTransform`]; the scene graph
//! decides where (and whether) it lands.

use glam::{Mat4, Vec3};

pub const DEFAULT_FLOWER_WIND: f32 = 0.1;
pub const DEFAULT_GROUND_WIND: f32 = 0.05;

/// Fraction of the wind intensity used as flower tilt (radians)
pub const FLOWER_TILT_FACTOR: f32 = 0.2;
/// Fraction of the wind intensity used as ground twist (radians)
pub const GROUND_TWIST_FACTOR: f32 = 0.1;
/// Ground accumulator advance per tick, independent of frame time
pub const GROUND_SWAY_STEP: f64 = 0.01;

/// Position plus XYZ Euler rotation in radians
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct NodeTransform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl NodeTransform {
    pub const fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    pub fn with_rotation(mut self, rotation: Vec3) -> Self {
        self.rotation = rotation;
        self
    }

    /// Translation followed by rotation applied X, then Y, then Z in local space
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_rotation_x(self.rotation.x)
            * Mat4::from_rotation_y(self.rotation.y)
            * Mat4::from_rotation_z(self.rotation.z)
    }

    /// Write into `target`; a missing node is skipped
    pub fn apply_to(self, target: Option<&mut NodeTransform>) -> bool {
        match target {
            Some(node) => {
                *node = self;
                true
            }
            None => false,
        }
    }
}

/// Flower sway for a base position at elapsed time `t`
///
/// Pure in `t`: the clock belongs to the caller.
pub fn flower_sway(base: Vec3, time: f32, wind_intensity: f32) -> NodeTransform {
    let wave = time.sin();
    let offset_x = wave * wind_intensity;
    NodeTransform {
        position: base + Vec3::new(offset_x, 0.0, 0.0),
        rotation: Vec3::new(0.0, 0.0, wave * wind_intensity * FLOWER_TILT_FACTOR),
    }
}

/// Elapsed time and wind shared by every flower in a frame
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub elapsed_time: f32,
    pub wind_intensity: f32,
}

impl AnimationState {
    pub fn new(elapsed_time: f32, wind_intensity: f32) -> Self {
        Self {
            elapsed_time,
            wind_intensity,
        }
    }

    pub fn flower_transform(&self, base: Vec3) -> NodeTransform {
        flower_sway(base, self.elapsed_time, self.wind_intensity)
    }
}

impl Default for AnimationState {
    fn default() -> Self {
        Self::new(0.0, DEFAULT_FLOWER_WIND)
    }
}

/// Slow twist of the ground plane around its normal
///
/// Advances by a fixed step per tick rather than by elapsed time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GroundSway {
    ticks: u64,
    wind_intensity: f32,
}

impl GroundSway {
    pub fn new(wind_intensity: f32) -> Self {
        Self {
            ticks: 0,
            wind_intensity,
        }
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn accumulator(&self) -> f64 {
        self.ticks as f64 * GROUND_SWAY_STEP
    }

    pub fn wind_intensity(&self) -> f32 {
        self.wind_intensity
    }

    pub fn set_wind_intensity(&mut self, wind_intensity: f32) {
        self.wind_intensity = wind_intensity;
    }

    /// Current rotation about the plane's local Y axis
    pub fn rotation_y(&self) -> f32 {
        self.accumulator().sin() as f32 * (self.wind_intensity * GROUND_TWIST_FACTOR)
    }

    /// Advance one frame and return the new rotation
    pub fn tick(&mut self) -> f32 {
        self.ticks += 1;
        self.rotation_y()
    }

    /// Apply the current twist to a ground node, keeping its other axes
    pub fn apply_to(&self, target: Option<&mut NodeTransform>) -> bool {
        match target {
            Some(node) => {
                node.rotation.y = self.rotation_y();
                true
            }
            None => false,
        }
    }
}

impl Default for GroundSway {
    fn default() -> Self {
        Self::new(DEFAULT_GROUND_WIND)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_sway_zero_at_start() {
        let base = Vec3::new(3.0, -2.0, 1.0);
        let node = flower_sway(base, 0.0, DEFAULT_FLOWER_WIND);
        assert_eq!(node.position, base);
        assert_eq!(node.rotation.z, 0.0);
    }

    #[test]
    fn test_sway_peak_at_quarter_period() {
        let node = flower_sway(Vec3::ZERO, FRAC_PI_2, 0.1);
        assert!((node.position.x - 0.1).abs() < 1e-6);
        assert!((node.rotation.z - 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_apply_to_missing_node_is_noop() {
        let node = flower_sway(Vec3::ONE, 1.0, 0.1);
        assert!(!node.apply_to(None));
    }

    #[test]
    fn test_ground_tick_counts() {
        let mut sway = GroundSway::default();
        for _ in 0..250 {
            sway.tick();
        }
        assert_eq!(sway.ticks(), 250);
        assert!((sway.accumulator() - 2.5).abs() < 1e-12);
    }

    #[test]
    fn test_matrix_translation() {
        let node = NodeTransform::at(Vec3::new(1.0, 2.0, 3.0));
        let p = node.matrix().transform_point3(Vec3::ZERO);
        assert_eq!(p, Vec3::new(1.0, 2.0, 3.0));
    }
}
