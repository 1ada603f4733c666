use glam::Vec3;

use super::{MeshData, Vertex};

/// Finite-difference step for surface tangents
const DERIVATIVE_STEP: f32 = 1e-4;

/// Squared length below which a derivative normal counts as degenerate
const DEGENERATE_NORMAL: f32 = 1e-10;

/// Surface defined by a function from the unit square to 3D space
///
/// Sampling produces `(slices + 1) * (stacks + 1)` vertices. `u` runs along
/// the slices and `v` along the stacks; vertex `(u = j / slices, v = i / stacks)`
/// sits at index `i * (slices + 1) + j`.
#[derive(Clone)]
pub struct ParametricSurface<F> {
    func: F,
    slices: u32,
    stacks: u32,
}

impl<F> ParametricSurface<F>
where
    F: Fn(f32, f32) -> Vec3,
{
    pub fn new(func: F, slices: u32, stacks: u32) -> Self {
        Self {
            func,
            slices: slices.max(1),
            stacks: stacks.max(1),
        }
    }

    pub fn slices(&self) -> u32 {
        self.slices
    }

    pub fn stacks(&self) -> u32 {
        self.stacks
    }

    pub fn sample(&self, u: f32, v: f32) -> Vec3 {
        (self.func)(u, v)
    }

    /// ∂f/∂u × ∂f/∂v, unnormalized; near the upper edge the difference is taken backward
    pub fn derivative_normal(&self, u: f32, v: f32) -> Vec3 {
        let p = self.sample(u, v);

        let du = if u + DERIVATIVE_STEP <= 1.0 {
            self.sample(u + DERIVATIVE_STEP, v) - p
        } else {
            p - self.sample(u - DERIVATIVE_STEP, v)
        };
        let dv = if v + DERIVATIVE_STEP <= 1.0 {
            self.sample(u, v + DERIVATIVE_STEP) - p
        } else {
            p - self.sample(u, v - DERIVATIVE_STEP)
        };

        (du / DERIVATIVE_STEP).cross(dv / DERIVATIVE_STEP)
    }

    /// Triangulate the sampled grid
    pub fn build(&self) -> MeshData {
        let row = self.slices + 1;

        let vertices: Vec<Vertex> = (0..=self.stacks)
            .flat_map(|i| {
                let v = i as f32 / self.stacks as f32;
                (0..=self.slices).map(move |j| (j as f32 / self.slices as f32, v))
            })
            .map(|(u, v)| {
                let normal = self.derivative_normal(u, v);
                let normal = if normal.length_squared() > DEGENERATE_NORMAL {
                    normal.normalize()
                } else {
                    Vec3::ZERO
                };
                Vertex::new(self.sample(u, v), normal)
            })
            .collect();

        let indices: Vec<u32> = (0..self.stacks)
            .flat_map(|i| (0..self.slices).map(move |j| (i, j)))
            .flat_map(|(i, j)| {
                let a = i * row + j;
                let b = i * row + j + 1;
                let c = (i + 1) * row + j + 1;
                let d = (i + 1) * row + j;
                [a, b, d, b, c, d]
            })
            .collect();

        let mut mesh = MeshData::new(vertices, indices);
        repair_degenerate_normals(&mut mesh);
        mesh
    }
}

/// Fill zero normals from neighbouring faces, then from +Z
fn repair_degenerate_normals(mesh: &mut MeshData) {
    if mesh.vertices.iter().all(|v| v.normal() != Vec3::ZERO) {
        return;
    }

    let fallback = mesh.averaged_face_normals();
    for (vertex, face) in mesh.vertices.iter_mut().zip(fallback) {
        if vertex.normal() == Vec3::ZERO {
            let normal = if face == Vec3::ZERO { Vec3::Z } else { face };
            vertex.normal = normal.to_array();
        }
    }
}
