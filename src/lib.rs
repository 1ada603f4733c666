pub mod animation;
pub mod camera;
pub mod cli;
pub mod config;
pub mod error;
pub mod frame;
pub mod garden;
pub mod geometry;
pub mod input;
pub mod math;
pub mod renderer;
pub mod scene;
pub mod types;
pub mod ui;

pub use config::GardenConfig;
pub use error::GardenError;
pub use garden::{FlowerId, FlowerParams, Garden};
pub use scene::{DrawItem, SceneGraph};
