/*
 * UI Module
 *
 * This module contains functions for creating and updating the control panel
 * using nannou_egui, and for drawing the debug overlay on the canvas. The
 * simulation constants are fixed at startup, so the panel only shows them.
 */

use nannou_egui::{egui, Egui};

use crate::debug::DebugInfo;
use crate::flock::Flock;

// Runtime toggles owned by the presentation layer
#[derive(Debug, Clone, Default)]
pub struct ViewSettings {
    pub show_debug: bool,
    pub pause_simulation: bool,
}

// Update the UI and return whether a single step was requested while paused
pub fn update_ui(
    egui: &mut Egui,
    settings: &mut ViewSettings,
    flock: &Flock,
    debug_info: &DebugInfo,
) -> bool {
    let mut step_once = false;
    let params = flock.params();

    let ctx = egui.begin_frame();

    egui::Window::new("Simulation Controls")
        .default_pos([10.0, 10.0])
        .show(&ctx, |ui| {
            ui.checkbox(&mut settings.pause_simulation, "Pause Simulation");
            if settings.pause_simulation && ui.button("Step").clicked() {
                step_once = true;
            }
            ui.checkbox(&mut settings.show_debug, "Show Debug Info");

            ui.collapsing("Flocking Parameters", |ui| {
                ui.label(format!("Separation radius: {:.1}", params.minimum_distance));
                ui.label(format!("Alignment/cohesion radius: {:.1}", params.distance_threshold));
                ui.label(format!("Max rule velocity: {:.3}", params.max_rule_velocity));
                ui.label(format!("Max velocity: {:.2}", params.max_velocity));
                ui.label(format!("Scatter factor: {:.2}", params.scattering_velocity_factor));
                ui.label(format!("Step interval: {} ms", params.step_interval_ms));
            });

            ui.separator();

            ui.label(format!("FPS: {:.1}", debug_info.fps));
            ui.label(format!("Boids: {}", flock.len()));
            ui.label("Left click: add boid   Right click: scatter");
        });

    step_once
}

// Draw debug information on the screen
pub fn draw_debug_info(
    draw: &nannou::Draw,
    debug_info: &DebugInfo,
    window_rect: nannou::geom::Rect,
    flock: &Flock,
) {
    let params = flock.params();
    let lines = debug_info.lines(flock.len(), params.width, params.height);

    // Background panel in the top-right corner
    let margin = 20.0;
    let line_height = 20.0;
    let panel_width = 200.0;
    let panel_height = line_height * lines.len() as f32 + margin;
    let panel_x = window_rect.right() - panel_width / 2.0;
    let panel_y = window_rect.top() - panel_height / 2.0;

    draw.rect()
        .x_y(panel_x, panel_y)
        .w_h(panel_width, panel_height)
        .color(nannou::color::rgba(0.0, 0.0, 0.0, 0.7));

    let text_x = panel_x;
    let text_y = window_rect.top() - margin;

    for (i, text) in lines.iter().enumerate() {
        let y = text_y - (i as f32 * line_height);
        draw.text(text)
            .x_y(text_x, y)
            .color(nannou::color::WHITE)
            .font_size(14);
    }
}
