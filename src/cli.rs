// cli.rs - Command-line interface configuration
use clap::Parser;

use crate::config::{GardenConfig, DEFAULT_SPAWN_HALF_EXTENT};
use crate::error::Result;
use crate::math::Color;

#[derive(Parser, Debug, Clone)]
#[command(name = "orchid-garden")]
#[command(about = "Procedural orchid garden", long_about = None)]
pub struct Cli {
    /// Hide the control panel
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Flower color as #rrggbb
    #[arg(long, default_value = "#ff69b4")]
    pub color: String,

    #[arg(long = "stem-height", default_value_t = 2.0)]
    pub stem_height: f32,

    #[arg(long, default_value_t = 0.8)]
    pub opacity: f32,

    /// Labellum glow intensity
    #[arg(long, default_value_t = 0.5)]
    pub glow: f32,

    #[arg(long = "ground-opacity", default_value_t = 0.8)]
    pub ground_opacity: f32,

    #[arg(long = "ground-glow", default_value_t = 0.3)]
    pub ground_glow: f32,

    /// Half side of the square flowers are scattered in
    #[arg(long = "spawn-extent", default_value_t = DEFAULT_SPAWN_HALF_EXTENT)]
    pub spawn_extent: f32,

    /// Number of flowers planted at start-up
    #[arg(long = "flowers", default_value_t = 0)]
    pub flowers: usize,

    /// Seed for flower placement
    #[arg(long)]
    pub seed: Option<u64>,

    /// Print the resolved configuration as JSON and exit
    #[arg(long = "print-config", default_value = "false")]
    pub print_config: bool,
}

impl Cli {
    /// Resolve flags into a config, clamping numbers to their slider ranges
    pub fn garden_config(&self) -> Result<GardenConfig> {
        let color: Color = self.color.parse()?;

        let mut config = GardenConfig::default();
        config.set_flower_color(color);
        config.set_stem_height(self.stem_height);
        config.set_opacity(self.opacity);
        config.set_glow_intensity(self.glow);
        config.set_ground_opacity(self.ground_opacity);
        config.set_ground_glow(self.ground_glow);
        config.set_spawn_half_extent(self.spawn_extent);
        Ok(config)
    }
}
