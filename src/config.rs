//! User-adjustable garden parameters, kept in one record.

use std::ops::RangeInclusive;

use serde::{Deserialize, Serialize};

use crate::animation::{DEFAULT_FLOWER_WIND, DEFAULT_GROUND_WIND};
use crate::garden::FlowerParams;
use crate::math::Color;

/// Slider bounds for a numeric parameter
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParamRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ParamRange {
    pub const fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }

    /// Clamp into range; NaN falls back to the minimum
    pub fn clamp(&self, value: f32) -> f32 {
        if value.is_nan() {
            self.min
        } else {
            value.clamp(self.min, self.max)
        }
    }

    pub fn contains(&self, value: f32) -> bool {
        (self.min..=self.max).contains(&value)
    }

    pub fn as_range(&self) -> RangeInclusive<f32> {
        self.min..=self.max
    }
}

pub const STEM_HEIGHT_RANGE: ParamRange = ParamRange::new(1.0, 5.0, 0.1);
pub const OPACITY_RANGE: ParamRange = ParamRange::new(0.0, 1.0, 0.1);
pub const GLOW_RANGE: ParamRange = ParamRange::new(0.0, 2.0, 0.1);
pub const GROUND_OPACITY_RANGE: ParamRange = ParamRange::new(0.0, 1.0, 0.1);
pub const GROUND_GLOW_RANGE: ParamRange = ParamRange::new(0.0, 1.0, 0.1);

pub const DEFAULT_SPAWN_HALF_EXTENT: f32 = 12.5;

/// Every parameter the control panel can change
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GardenConfig {
    pub flower_color: Color,
    pub stem_height: f32,
    pub opacity: f32,
    pub glow_intensity: f32,
    pub ground_opacity: f32,
    pub ground_glow: f32,
    pub flower_wind: f32,
    pub ground_wind: f32,
    /// Half side of the square new flowers are scattered in
    pub spawn_half_extent: f32,
}

impl GardenConfig {
    pub fn set_flower_color(&mut self, color: Color) {
        self.flower_color = color;
    }

    pub fn set_stem_height(&mut self, value: f32) {
        self.stem_height = STEM_HEIGHT_RANGE.clamp(value);
    }

    pub fn set_opacity(&mut self, value: f32) {
        self.opacity = OPACITY_RANGE.clamp(value);
    }

    pub fn set_glow_intensity(&mut self, value: f32) {
        self.glow_intensity = GLOW_RANGE.clamp(value);
    }

    pub fn set_ground_opacity(&mut self, value: f32) {
        self.ground_opacity = GROUND_OPACITY_RANGE.clamp(value);
    }

    pub fn set_ground_glow(&mut self, value: f32) {
        self.ground_glow = GROUND_GLOW_RANGE.clamp(value);
    }

    pub fn set_spawn_half_extent(&mut self, value: f32) {
        self.spawn_half_extent = if value.is_finite() { value.abs() } else { DEFAULT_SPAWN_HALF_EXTENT };
    }

    /// Re-run every setter so all fields are back inside their ranges
    pub fn clamped(mut self) -> Self {
        self.set_stem_height(self.stem_height);
        self.set_opacity(self.opacity);
        self.set_glow_intensity(self.glow_intensity);
        self.set_ground_opacity(self.ground_opacity);
        self.set_ground_glow(self.ground_glow);
        self.set_spawn_half_extent(self.spawn_half_extent);
        self.flower_wind = self.flower_wind.max(0.0);
        self.ground_wind = self.ground_wind.max(0.0);
        self
    }

    /// Parameters stamped onto flowers
    pub fn flower_params(&self) -> FlowerParams {
        FlowerParams {
            color: self.flower_color,
            stem_height: self.stem_height,
            opacity: self.opacity,
            glow_intensity: self.glow_intensity,
        }
    }
}

impl Default for GardenConfig {
    fn default() -> Self {
        Self {
            flower_color: Color::HOT_PINK,
            stem_height: 2.0,
            opacity: 0.8,
            glow_intensity: 0.5,
            ground_opacity: 0.8,
            ground_glow: 0.3,
            flower_wind: DEFAULT_FLOWER_WIND,
            ground_wind: DEFAULT_GROUND_WIND,
            spawn_half_extent: DEFAULT_SPAWN_HALF_EXTENT,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_inside_ranges() {
        let config = GardenConfig::default();
        assert!(STEM_HEIGHT_RANGE.contains(config.stem_height));
        assert!(OPACITY_RANGE.contains(config.opacity));
        assert!(GLOW_RANGE.contains(config.glow_intensity));
        assert!(GROUND_OPACITY_RANGE.contains(config.ground_opacity));
        assert!(GROUND_GLOW_RANGE.contains(config.ground_glow));
        assert_eq!(config, config.clamped());
    }

    #[test]
    fn test_setters_clamp() {
        let mut config = GardenConfig::default();
        config.set_stem_height(9.0);
        config.set_opacity(-0.5);
        config.set_glow_intensity(f32::NAN);
        assert_eq!(config.stem_height, 5.0);
        assert_eq!(config.opacity, 0.0);
        assert_eq!(config.glow_intensity, 0.0);
    }

    #[test]
    fn test_json_round_trip_uses_hex_color() {
        let json = serde_json::to_string(&GardenConfig::default()).unwrap();
        assert!(json.contains("\"#ff69b4\""));
        let back: GardenConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, GardenConfig::default());
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let config: GardenConfig = serde_json::from_str(r##"{"flower_color": "#00ff00"}"##).unwrap();
        assert_eq!(config.flower_color, Color::rgb(0, 255, 0));
        assert_eq!(config.stem_height, 2.0);
    }
}
