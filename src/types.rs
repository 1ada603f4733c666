use glam::{Mat4, Vec3};

use crate::scene::DrawItem;

/// World-space position of the single point light
pub const LIGHT_POSITION: Vec3 = Vec3::new(10.0, 10.0, 10.0);
/// Ambient light intensity, white
pub const AMBIENT_INTENSITY: f32 = 0.5;

/// Camera uniform buffer data for GPU
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub eye: [f32; 4],
    /// xyz position, w ambient intensity
    pub light: [f32; 4],
}

impl CameraUniform {
    pub fn new(view_proj: Mat4, eye: Vec3) -> Self {
        Self {
            view_proj: view_proj.to_cols_array_2d(),
            eye: eye.extend(1.0).to_array(),
            light: LIGHT_POSITION.extend(AMBIENT_INTENSITY).to_array(),
        }
    }
}

/// Per-draw data, bound at a dynamic offset
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ObjectUniform {
    pub model: [[f32; 4]; 4],
    /// rgb linear color, a opacity
    pub color: [f32; 4],
    /// rgb premultiplied emission
    pub emissive: [f32; 4],
}

impl From<&DrawItem> for ObjectUniform {
    fn from(item: &DrawItem) -> Self {
        let material = &item.material;
        let [r, g, b] = material.color;
        let [er, eg, eb] = material.emission();
        Self {
            model: item.model.to_cols_array_2d(),
            color: [r, g, b, material.opacity],
            emissive: [er, eg, eb, 0.0],
        }
    }
}
