//! Scene graph for the garden and the flat draw list handed to the renderer.
//!
//! Nodes are keyed by [`FlowerId`]. Animation writes node transforms; the
//! composer reads them back together with the current config and garden, so
//! building a frame is a pure function of those inputs.

use std::collections::{HashMap, HashSet};
use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{Mat4, Vec3};

use crate::animation::{AnimationState, GroundSway, NodeTransform};
use crate::config::GardenConfig;
use crate::garden::{FlowerId, FlowerInstance, Garden};
use crate::geometry::{primitives, LabellumShape, MeshData, PetalShape};
use crate::math::Color;

pub const PETAL_COUNT: usize = 5;
pub const PETAL_RING_RADIUS: f32 = 0.2;
pub const PETAL_OPACITY: f32 = 0.95;
pub const LABELLUM_OFFSET_Z: f32 = 0.06;
pub const GROUND_HEIGHT: f32 = -1.9;

/// Draw items emitted per flower: stem, petals, labellum
pub const ITEMS_PER_FLOWER: usize = PETAL_COUNT + 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MeshKind {
    Petal,
    Labellum,
    Stem,
    Ground,
}

impl MeshKind {
    pub const ALL: [MeshKind; 4] = [MeshKind::Petal, MeshKind::Labellum, MeshKind::Stem, MeshKind::Ground];

    /// Ground renders as wireframe, everything else as filled triangles
    pub fn is_wireframe(self) -> bool {
        matches!(self, MeshKind::Ground)
    }
}

/// Shared CPU meshes, built once at start-up
pub struct SceneMeshes {
    pub petal: MeshData,
    pub labellum: MeshData,
    pub stem: MeshData,
    pub ground: MeshData,
}

impl SceneMeshes {
    pub fn build() -> Self {
        Self {
            petal: PetalShape::default().mesh(),
            labellum: LabellumShape.mesh(),
            stem: primitives::stem(),
            ground: primitives::ground(),
        }
    }

    pub fn get(&self, kind: MeshKind) -> &MeshData {
        match kind {
            MeshKind::Petal => &self.petal,
            MeshKind::Labellum => &self.labellum,
            MeshKind::Stem => &self.stem,
            MeshKind::Ground => &self.ground,
        }
    }
}

/// Surface appearance in linear RGB
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    pub color: [f32; 3],
    pub opacity: f32,
    pub emissive: [f32; 3],
    pub emissive_intensity: f32,
}

impl Material {
    pub fn plain(color: Color, opacity: f32) -> Self {
        Self {
            color: color.to_linear(),
            opacity,
            emissive: [0.0; 3],
            emissive_intensity: 0.0,
        }
    }

    pub fn glowing(color: Color, opacity: f32, intensity: f32) -> Self {
        Self {
            emissive: color.to_linear(),
            emissive_intensity: intensity,
            ..Self::plain(color, opacity)
        }
    }

    /// Emission premultiplied by intensity
    pub fn emission(&self) -> [f32; 3] {
        self.emissive.map(|c| c * self.emissive_intensity)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DrawItem {
    pub mesh: MeshKind,
    pub model: Mat4,
    pub material: Material,
    pub owner: Option<FlowerId>,
}

impl DrawItem {
    pub fn world_position(&self) -> Vec3 {
        self.model.w_axis.truncate()
    }
}

/// Live transforms for the ground and for each planted flower
pub struct SceneGraph {
    ground: NodeTransform,
    flowers: HashMap<FlowerId, NodeTransform>,
}

impl SceneGraph {
    pub fn new() -> Self {
        Self {
            ground: NodeTransform::at(Vec3::new(0.0, GROUND_HEIGHT, 0.0))
                .with_rotation(Vec3::new(-FRAC_PI_2, 0.0, 0.0)),
            flowers: HashMap::new(),
        }
    }

    pub fn ground(&self) -> &NodeTransform {
        &self.ground
    }

    pub fn node(&self, id: FlowerId) -> Option<&NodeTransform> {
        self.flowers.get(&id)
    }

    pub fn node_count(&self) -> usize {
        self.flowers.len()
    }

    /// Create nodes for new flowers and drop nodes of removed ones
    pub fn sync(&mut self, garden: &Garden) {
        let live: HashSet<FlowerId> = garden.iter().map(|f| f.id).collect();
        self.flowers.retain(|id, _| live.contains(id));
        for flower in garden.iter() {
            self.flowers
                .entry(flower.id)
                .or_insert_with(|| NodeTransform::at(flower.position));
        }
    }

    /// Apply this frame's sway; flowers without a node are skipped
    pub fn animate(&mut self, garden: &Garden, state: &AnimationState, ground_sway: &GroundSway) {
        ground_sway.apply_to(Some(&mut self.ground));
        for flower in garden.iter() {
            state
                .flower_transform(flower.position)
                .apply_to(self.flowers.get_mut(&flower.id));
        }
    }

    /// Flatten into draw items: ground first, then flowers in planting order
    pub fn compose(&self, config: &GardenConfig, garden: &Garden) -> Vec<DrawItem> {
        let mut items = Vec::with_capacity(1 + garden.len() * ITEMS_PER_FLOWER);

        items.push(DrawItem {
            mesh: MeshKind::Ground,
            model: self.ground.matrix(),
            material: Material::glowing(Color::GREEN, config.ground_opacity, config.ground_glow),
            owner: None,
        });

        for flower in garden.iter() {
            if let Some(node) = self.flowers.get(&flower.id) {
                push_flower(&mut items, flower, node);
            }
        }

        items
    }
}

impl Default for SceneGraph {
    fn default() -> Self {
        Self::new()
    }
}

fn push_flower(items: &mut Vec<DrawItem>, flower: &FlowerInstance, node: &NodeTransform) {
    let params = flower.params;
    let owner = Some(flower.id);
    let group = node.matrix();
    let height = params.stem_height;

    items.push(DrawItem {
        mesh: MeshKind::Stem,
        model: group
            * Mat4::from_translation(Vec3::new(0.0, height * 0.5, 0.0))
            * Mat4::from_scale(Vec3::new(1.0, height, 1.0)),
        material: Material::plain(Color::GREEN, params.opacity),
        owner,
    });

    let head = group * Mat4::from_translation(Vec3::new(0.0, height, 0.0));

    for i in 0..PETAL_COUNT {
        let angle = i as f32 / PETAL_COUNT as f32 * TAU;
        let offset = Vec3::new(angle.cos() * PETAL_RING_RADIUS, angle.sin() * PETAL_RING_RADIUS, 0.0);
        items.push(DrawItem {
            mesh: MeshKind::Petal,
            model: head * Mat4::from_translation(offset) * Mat4::from_rotation_z(angle),
            material: Material::plain(params.color, PETAL_OPACITY),
            owner,
        });
    }

    items.push(DrawItem {
        mesh: MeshKind::Labellum,
        model: head * Mat4::from_translation(Vec3::new(0.0, 0.0, LABELLUM_OFFSET_Z)),
        material: Material::glowing(params.color, params.opacity, params.glow_intensity),
        owner,
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::garden::FlowerParams;

    #[test]
    fn test_empty_garden_draws_ground_only() {
        let graph = SceneGraph::new();
        let items = graph.compose(&GardenConfig::default(), &Garden::with_seed(12.5, 1));
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].mesh, MeshKind::Ground);
        assert!((items[0].world_position().y - GROUND_HEIGHT).abs() < 1e-6);
    }

    #[test]
    fn test_unsynced_flower_is_skipped() {
        let mut garden = Garden::with_seed(12.5, 1);
        garden.add_flower(FlowerParams::default());
        let mut graph = SceneGraph::new();

        graph.animate(&garden, &AnimationState::default(), &GroundSway::default());
        assert_eq!(graph.compose(&GardenConfig::default(), &garden).len(), 1);

        graph.sync(&garden);
        assert_eq!(graph.compose(&GardenConfig::default(), &garden).len(), 1 + ITEMS_PER_FLOWER);
    }

    #[test]
    fn test_material_emission_scales() {
        let m = Material::glowing(Color::rgb(255, 255, 255), 1.0, 2.0);
        for c in m.emission() {
            assert!((c - 2.0).abs() < 1e-4);
        }
    }
}
