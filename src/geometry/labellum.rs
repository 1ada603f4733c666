use std::f32::consts::FRAC_PI_2;

use glam::{Vec2, Vec3};

use super::{face_normal, MeshData, Vertex};

/// Points sampled per curve segment of an outline
pub const CURVE_SEGMENTS: u32 = 12;

/// Upper bound on the miter stretch at sharp outline corners
const MITER_LIMIT: f32 = 2.0;

/// Closed 2D outline built from straight and quadratic Bézier segments
#[derive(Debug, Clone, PartialEq)]
pub struct Outline {
    points: Vec<Vec2>,
}

impl Outline {
    pub fn starting_at(start: Vec2) -> Self {
        Self { points: vec![start] }
    }

    fn cursor(&self) -> Vec2 {
        // Never empty: starting_at seeds the first point
        self.points[self.points.len() - 1]
    }

    /// Quadratic Bézier from the current point through `control` to `end`
    pub fn quadratic_to(mut self, control: Vec2, end: Vec2) -> Self {
        let start = self.cursor();
        self.points.extend((1..=CURVE_SEGMENTS).map(|i| {
            let t = i as f32 / CURVE_SEGMENTS as f32;
            quadratic_bezier(start, control, end, t)
        }));
        self
    }

    /// Drop the closing point when the path returns to its start
    pub fn close(mut self) -> Self {
        if self.points.len() > 1 && self.points[0].distance(self.cursor()) < 1e-6 {
            self.points.pop();
        }
        self
    }

    pub fn points(&self) -> &[Vec2] {
        &self.points
    }

    /// Shoelace area, positive when wound counter-clockwise
    pub fn signed_area(&self) -> f32 {
        let n = self.points.len();
        (0..n)
            .map(|i| self.points[i].perp_dot(self.points[(i + 1) % n]))
            .sum::<f32>()
            * 0.5
    }

    pub fn centroid(&self) -> Vec2 {
        self.points.iter().copied().sum::<Vec2>() / self.points.len().max(1) as f32
    }

    /// Same outline wound counter-clockwise
    pub fn counter_clockwise(mut self) -> Self {
        if self.signed_area() < 0.0 {
            self.points.reverse();
        }
        self
    }

    /// Outward miter directions, one per point, for a counter-clockwise outline
    fn bevel_directions(&self) -> Vec<Vec2> {
        let n = self.points.len();
        (0..n)
            .map(|i| {
                let prev = self.points[(i + n - 1) % n];
                let current = self.points[i];
                let next = self.points[(i + 1) % n];

                let incoming = outward_normal(current - prev);
                let outgoing = outward_normal(next - current);
                let bisector = (incoming + outgoing).normalize_or_zero();
                if bisector == Vec2::ZERO {
                    return incoming;
                }

                let stretch = (1.0 / bisector.dot(incoming).max(1.0 / MITER_LIMIT)).min(MITER_LIMIT);
                bisector * stretch
            })
            .collect()
    }
}

fn quadratic_bezier(p0: Vec2, p1: Vec2, p2: Vec2, t: f32) -> Vec2 {
    let k = 1.0 - t;
    p0 * (k * k) + p1 * (2.0 * k * t) + p2 * (t * t)
}

/// Right-hand normal of an edge, outward for counter-clockwise winding
fn outward_normal(edge: Vec2) -> Vec2 {
    Vec2::new(edge.y, -edge.x).normalize_or_zero()
}

/// Extrusion along +Z with a rounded bevel on both faces
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ExtrudeSettings {
    pub depth: f32,
    pub bevel_size: f32,
    pub bevel_thickness: f32,
    pub bevel_segments: u32,
}

impl ExtrudeSettings {
    /// (z, outward offset) for each contour ring, front cap to back cap
    fn layers(&self) -> Vec<(f32, f32)> {
        let segments = self.bevel_segments.max(1);
        let bevel = |b: u32| {
            let t = b as f32 / segments as f32;
            (
                self.bevel_thickness * (t * FRAC_PI_2).cos(),
                self.bevel_size * (t * FRAC_PI_2).sin(),
            )
        };

        let front = (0..=segments).map(|b| {
            let (z, offset) = bevel(b);
            (-z, offset)
        });
        let back = (0..=segments).rev().map(|b| {
            let (z, offset) = bevel(b);
            (self.depth + z, offset)
        });

        front.chain(back).collect()
    }

    pub fn extrude(&self, outline: &Outline) -> MeshData {
        let outline = outline.clone().counter_clockwise();
        let points = outline.points();
        let directions = outline.bevel_directions();
        let n = points.len();

        let rings: Vec<Vec<Vec3>> = self
            .layers()
            .into_iter()
            .map(|(z, offset)| {
                points
                    .iter()
                    .zip(&directions)
                    .map(|(p, dir)| (*p + *dir * offset).extend(z))
                    .collect()
            })
            .collect();

        let mut mesh = MeshData::default();

        for pair in rings.windows(2) {
            let (near, far) = (&pair[0], &pair[1]);
            for i in 0..n {
                let j = (i + 1) % n;
                let quad = [near[i], near[j], far[j], far[i]];
                push_flat_quad(&mut mesh, quad);
            }
        }

        let centroid = outline.centroid();
        if let (Some(front), Some(back)) = (rings.first(), rings.last()) {
            push_cap(&mut mesh, front, centroid, -Vec3::Z);
            push_cap(&mut mesh, back, centroid, Vec3::Z);
        }

        mesh
    }
}

fn push_flat_quad(mesh: &mut MeshData, quad: [Vec3; 4]) {
    let normal = face_normal(quad[0], quad[1], quad[2]);
    let normal = if normal == Vec3::ZERO {
        face_normal(quad[0], quad[2], quad[3])
    } else {
        normal
    };

    let base = mesh.vertices.len() as u32;
    mesh.vertices.extend(quad.iter().map(|p| Vertex::new(*p, normal)));
    mesh.indices
        .extend_from_slice(&[base, base + 1, base + 2, base, base + 2, base + 3]);
}

/// Fan from the centroid; valid because the labellum outline is convex
fn push_cap(mesh: &mut MeshData, ring: &[Vec3], centroid: Vec2, normal: Vec3) {
    let z = ring[0].z;
    let base = mesh.vertices.len() as u32;
    mesh.vertices.push(Vertex::new(centroid.extend(z), normal));
    mesh.vertices.extend(ring.iter().map(|p| Vertex::new(*p, normal)));

    let n = ring.len() as u32;
    for i in 0..n {
        let a = base + 1 + i;
        let b = base + 1 + (i + 1) % n;
        if normal.z > 0.0 {
            mesh.indices.extend_from_slice(&[base, a, b]);
        } else {
            mesh.indices.extend_from_slice(&[base, b, a]);
        }
    }
}

pub const LABELLUM_DEPTH: f32 = 0.05;
pub const LABELLUM_BEVEL_SIZE: f32 = 0.02;
pub const LABELLUM_BEVEL_THICKNESS: f32 = 0.02;
pub const LABELLUM_BEVEL_SEGMENTS: u32 = 2;

/// Central lip of the orchid: a lens-shaped outline extruded into a thin solid
#[derive(Debug, Clone, Copy, Default)]
pub struct LabellumShape;

impl LabellumShape {
    pub fn outline(&self) -> Outline {
        Outline::starting_at(Vec2::new(-0.2, 0.0))
            .quadratic_to(Vec2::new(0.0, 0.3), Vec2::new(0.2, 0.0))
            .quadratic_to(Vec2::new(0.0, -0.15), Vec2::new(-0.2, 0.0))
            .close()
    }

    pub fn settings(&self) -> ExtrudeSettings {
        ExtrudeSettings {
            depth: LABELLUM_DEPTH,
            bevel_size: LABELLUM_BEVEL_SIZE,
            bevel_thickness: LABELLUM_BEVEL_THICKNESS,
            bevel_segments: LABELLUM_BEVEL_SEGMENTS,
        }
    }

    pub fn mesh(&self) -> MeshData {
        self.settings().extrude(&self.outline())
    }
}
