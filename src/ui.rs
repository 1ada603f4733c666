//! egui control panel for the garden.

use crate::config::{
    GardenConfig, ParamRange, GLOW_RANGE, GROUND_GLOW_RANGE, GROUND_OPACITY_RANGE, OPACITY_RANGE,
    STEM_HEIGHT_RANGE,
};
use crate::garden::Garden;
use crate::math::Color;

/// Button presses the app carries out after the panel is drawn
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelAction {
    AddFlower,
    Clear,
}

impl PanelAction {
    pub fn apply(self, garden: &mut Garden, config: &GardenConfig) {
        match self {
            PanelAction::AddFlower => {
                garden.add_flower(config.flower_params());
            }
            PanelAction::Clear => garden.clear_flowers(),
        }
    }
}

pub struct ControlPanel {
    pub visible: bool,
}

impl ControlPanel {
    pub fn new(visible: bool) -> Self {
        Self { visible }
    }

    /// Draw the panel; edits land in `config` through its clamping setters
    pub fn show(
        &mut self,
        ctx: &egui::Context,
        config: &mut GardenConfig,
        flower_count: usize,
        fps: f32,
    ) -> Vec<PanelAction> {
        let mut actions = Vec::new();
        if !self.visible {
            return actions;
        }

        egui::Window::new("Orchid Garden")
            .title_bar(true)
            .resizable(false)
            .default_pos(egui::pos2(10.0, 10.0))
            .default_width(260.0)
            .show(ctx, |ui| {
                if ui.button("Add orchid").clicked() {
                    actions.push(PanelAction::AddFlower);
                }

                ui.add_space(5.0);
                ui.separator();

                ui.horizontal(|ui| {
                    let mut rgb = config.flower_color.to_array();
                    if egui::color_picker::color_edit_button_srgb(ui, &mut rgb).changed() {
                        config.set_flower_color(Color::from_array(rgb));
                    }
                    ui.label("Flower color");
                });

                let mut stem_height = config.stem_height;
                if slider(ui, &mut stem_height, STEM_HEIGHT_RANGE, "Stem height") {
                    config.set_stem_height(stem_height);
                }
                let mut opacity = config.opacity;
                if slider(ui, &mut opacity, OPACITY_RANGE, "Opacity") {
                    config.set_opacity(opacity);
                }
                let mut glow = config.glow_intensity;
                if slider(ui, &mut glow, GLOW_RANGE, "Glow") {
                    config.set_glow_intensity(glow);
                }

                ui.add_space(5.0);
                ui.separator();
                ui.label(
                    egui::RichText::new("Ground")
                        .size(14.0)
                        .color(egui::Color32::from_rgb(100, 200, 100)),
                );

                let mut ground_opacity = config.ground_opacity;
                if slider(ui, &mut ground_opacity, GROUND_OPACITY_RANGE, "Opacity") {
                    config.set_ground_opacity(ground_opacity);
                }
                let mut ground_glow = config.ground_glow;
                if slider(ui, &mut ground_glow, GROUND_GLOW_RANGE, "Glow") {
                    config.set_ground_glow(ground_glow);
                }

                ui.add_space(5.0);
                ui.separator();

                if ui.button("Clear").clicked() {
                    actions.push(PanelAction::Clear);
                }

                ui.add_space(5.0);
                ui.monospace(format!("Flowers: {}", flower_count));
                ui.label(
                    egui::RichText::new(format!("{:.0} FPS", fps))
                        .size(14.0)
                        .color(egui::Color32::GRAY),
                );
            });

        actions
    }
}

impl Default for ControlPanel {
    fn default() -> Self {
        Self::new(true)
    }
}

fn slider(ui: &mut egui::Ui, value: &mut f32, range: ParamRange, label: &str) -> bool {
    ui.add(
        egui::Slider::new(value, range.as_range())
            .step_by(range.step as f64)
            .text(label),
    )
    .changed()
}
