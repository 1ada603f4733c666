use std::f32::consts::TAU;

use glam::Vec3;

use super::{MeshData, Vertex};

pub const STEM_RADIUS: f32 = 0.03;
pub const STEM_RADIAL_SEGMENTS: u32 = 8;

pub const GROUND_SIZE: f32 = 100.0;
pub const GROUND_SEGMENTS: u32 = 50;

/// Capped cylinder along Y, centered on the origin
pub fn cylinder(radius: f32, height: f32, radial_segments: u32) -> MeshData {
    let segments = radial_segments.max(3);
    let half = height * 0.5;
    let mut mesh = MeshData::default();

    // Side: two rings, seam vertex duplicated so normals stay per-column
    for y in [half, -half] {
        for s in 0..=segments {
            let theta = s as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            let normal = Vec3::new(sin, 0.0, cos);
            mesh.vertices
                .push(Vertex::new(Vec3::new(radius * sin, y, radius * cos), normal));
        }
    }

    let row = segments + 1;
    for s in 0..segments {
        let (a, b) = (s, s + row);
        let (c, d) = (s + row + 1, s + 1);
        mesh.indices.extend_from_slice(&[a, b, d, b, c, d]);
    }

    for (y, normal) in [(half, Vec3::Y), (-half, -Vec3::Y)] {
        let center = mesh.vertices.len() as u32;
        mesh.vertices.push(Vertex::new(Vec3::new(0.0, y, 0.0), normal));
        for s in 0..segments {
            let theta = s as f32 / segments as f32 * TAU;
            let (sin, cos) = theta.sin_cos();
            mesh.vertices
                .push(Vertex::new(Vec3::new(radius * sin, y, radius * cos), normal));
        }
        for s in 0..segments {
            let a = center + 1 + s;
            let b = center + 1 + (s + 1) % segments;
            if normal.y > 0.0 {
                mesh.indices.extend_from_slice(&[center, a, b]);
            } else {
                mesh.indices.extend_from_slice(&[center, b, a]);
            }
        }
    }

    mesh
}

/// Subdivided plane in XY facing +Z, centered on the origin
pub fn plane(width: f32, height: f32, width_segments: u32, height_segments: u32) -> MeshData {
    let (cols, rows) = (width_segments.max(1), height_segments.max(1));

    let vertices = (0..=rows)
        .flat_map(|iy| (0..=cols).map(move |ix| (ix, iy)))
        .map(|(ix, iy)| {
            let x = ix as f32 / cols as f32 * width - width * 0.5;
            let y = height * 0.5 - iy as f32 / rows as f32 * height;
            Vertex::new(Vec3::new(x, y, 0.0), Vec3::Z)
        })
        .collect();

    let row = cols + 1;
    let indices = (0..rows)
        .flat_map(|iy| (0..cols).map(move |ix| (ix, iy)))
        .flat_map(|(ix, iy)| {
            let a = ix + row * iy;
            let b = ix + row * (iy + 1);
            let c = ix + 1 + row * (iy + 1);
            let d = ix + 1 + row * iy;
            [a, b, d, b, c, d]
        })
        .collect();

    MeshData::new(vertices, indices)
}

/// Unit-height stem; the scene scales it to the configured stem height
pub fn stem() -> MeshData {
    cylinder(STEM_RADIUS, 1.0, STEM_RADIAL_SEGMENTS)
}

pub fn ground() -> MeshData {
    plane(GROUND_SIZE, GROUND_SIZE, GROUND_SEGMENTS, GROUND_SEGMENTS)
}
