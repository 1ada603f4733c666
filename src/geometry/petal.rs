use std::f32::consts::{PI, TAU};

use glam::Vec3;

use super::{MeshData, ParametricSurface};

pub const PETAL_LENGTH: f32 = 1.0;
pub const PETAL_MAX_WIDTH: f32 = 0.4;
pub const CURVATURE_AMPLITUDE: f32 = 0.3;
pub const RELIEF_AMPLITUDE: f32 = 0.1;

pub const PETAL_SLICES: u32 = 30;
pub const PETAL_STACKS: u32 = 15;

/// Extra offset along the petal axis; zero at base and tip, peaks mid-petal
pub fn curvature(u: f32) -> f32 {
    CURVATURE_AMPLITUDE * (u * PI).sin()
}

/// Orchid petal surface
///
/// `u` runs from the base (0) to the tip (1), `v` across the petal from one
/// edge (0) to the other (1). The width tapers linearly to a point at the tip
/// and the surface gets a slight relief in z.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PetalShape {
    pub length: f32,
    pub max_width: f32,
}

impl PetalShape {
    pub fn point(&self, u: f32, v: f32) -> Vec3 {
        let across = v - 0.5;
        Vec3::new(
            u * self.length + curvature(u),
            across * self.max_width * (1.0 - u) * 2.0,
            RELIEF_AMPLITUDE * (u * TAU).sin() * across,
        )
    }

    pub fn surface(self) -> ParametricSurface<impl Fn(f32, f32) -> Vec3> {
        ParametricSurface::new(move |u, v| self.point(u, v), PETAL_SLICES, PETAL_STACKS)
    }

    pub fn mesh(&self) -> MeshData {
        self.surface().build()
    }
}

impl Default for PetalShape {
    fn default() -> Self {
        Self {
            length: PETAL_LENGTH,
            max_width: PETAL_MAX_WIDTH,
        }
    }
}
