//! The ordered collection of planted flowers.

use std::fmt;

use glam::Vec3;
use log::{debug, info};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::config::GardenConfig;
use crate::math::Color;

/// Height of the soil flowers are planted in
pub const GROUND_LEVEL: f32 = -2.0;

/// Stable identity of a planted flower, never reused within a garden
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FlowerId(u64);

impl fmt::Display for FlowerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "flower#{}", self.0)
    }
}

/// Appearance shared by every flower
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerParams {
    pub color: Color,
    pub stem_height: f32,
    pub opacity: f32,
    pub glow_intensity: f32,
}

impl Default for FlowerParams {
    fn default() -> Self {
        GardenConfig::default().flower_params()
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowerInstance {
    pub id: FlowerId,
    /// Fixed at creation
    pub position: Vec3,
    pub params: FlowerParams,
}

/// Flowers in planting order, which is also render order
pub struct Garden {
    flowers: Vec<FlowerInstance>,
    template: FlowerParams,
    half_extent: f32,
    next_id: u64,
    rng: StdRng,
}

impl Garden {
    pub fn new(half_extent: f32) -> Self {
        Self::with_rng(half_extent, StdRng::from_entropy())
    }

    /// Garden with reproducible flower placement
    pub fn with_seed(half_extent: f32, seed: u64) -> Self {
        Self::with_rng(half_extent, StdRng::seed_from_u64(seed))
    }

    fn with_rng(half_extent: f32, rng: StdRng) -> Self {
        Self {
            flowers: Vec::new(),
            template: FlowerParams::default(),
            half_extent: half_extent.abs(),
            next_id: 0,
            rng,
        }
    }

    pub fn half_extent(&self) -> f32 {
        self.half_extent
    }

    pub fn set_half_extent(&mut self, half_extent: f32) {
        self.half_extent = half_extent.abs();
    }

    /// Parameters the next flower will get
    pub fn template(&self) -> FlowerParams {
        self.template
    }

    /// Plant a flower at a random spot inside the spawn square
    pub fn add_flower(&mut self, params: FlowerParams) -> FlowerId {
        let id = FlowerId(self.next_id);
        self.next_id += 1;

        let position = self.random_position();
        self.flowers.push(FlowerInstance { id, position, params });
        debug!("Planted {} at ({:.2}, {:.2}, {:.2})", id, position.x, position.y, position.z);
        id
    }

    /// Difference of two uniform samples, so flowers cluster toward the middle
    fn random_position(&mut self) -> Vec3 {
        let h = self.half_extent;
        let x = (self.rng.gen::<f32>() - self.rng.gen::<f32>()) * h;
        let z = (self.rng.gen::<f32>() - self.rng.gen::<f32>()) * h;
        Vec3::new(x, GROUND_LEVEL, z)
    }

    pub fn clear_flowers(&mut self) {
        if !self.flowers.is_empty() {
            info!("Cleared {} flowers", self.flowers.len());
            self.flowers.clear();
        }
    }

    pub fn set_color(&mut self, color: Color) {
        self.template.color = color;
        self.flowers.iter_mut().for_each(|f| f.params.color = color);
    }

    pub fn set_stem_height(&mut self, stem_height: f32) {
        self.template.stem_height = stem_height;
        self.flowers.iter_mut().for_each(|f| f.params.stem_height = stem_height);
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.template.opacity = opacity;
        self.flowers.iter_mut().for_each(|f| f.params.opacity = opacity);
    }

    pub fn set_glow_intensity(&mut self, glow_intensity: f32) {
        self.template.glow_intensity = glow_intensity;
        self.flowers
            .iter_mut()
            .for_each(|f| f.params.glow_intensity = glow_intensity);
    }

    /// Push the config's flower parameters onto every flower
    pub fn apply_config(&mut self, config: &GardenConfig) {
        let params = config.flower_params();
        if params == self.template && self.flowers.iter().all(|f| f.params == params) {
            return;
        }
        self.set_color(params.color);
        self.set_stem_height(params.stem_height);
        self.set_opacity(params.opacity);
        self.set_glow_intensity(params.glow_intensity);
    }

    pub fn len(&self) -> usize {
        self.flowers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.flowers.is_empty()
    }

    pub fn flowers(&self) -> &[FlowerInstance] {
        &self.flowers
    }

    pub fn iter(&self) -> impl Iterator<Item = &FlowerInstance> {
        self.flowers.iter()
    }

    pub fn get(&self, id: FlowerId) -> Option<&FlowerInstance> {
        self.flowers.iter().find(|f| f.id == id)
    }
}

impl Default for Garden {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_SPAWN_HALF_EXTENT)
    }
}
