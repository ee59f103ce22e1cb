/*
 * Input Module
 *
 * This module handles pointer events for the boid simulation and forwards
 * them into the flock:
 * - Left click adds a boid under the pointer
 * - Right click scatters the flock away from the pointer
 * Clicks over the egui panel are left to the UI.
 */

use nannou::prelude::*;
use nannou::winit::event::{MouseButton, WindowEvent};
use tracing::warn;

use crate::app::Model;

// Mouse moved event handler
pub fn mouse_moved(_app: &App, model: &mut Model, pos: Point2) {
    model.mouse_position = pos;
}

// Mouse pressed event handler
pub fn mouse_pressed(app: &App, model: &mut Model, button: MouseButton) {
    if model.egui.ctx().is_pointer_over_area() {
        return;
    }

    // Convert mouse position from screen space to arena space
    let window_rect = app.window_rect();
    let point = model.camera.screen_to_world(model.mouse_position, window_rect);

    let result = match button {
        MouseButton::Left => model.flock.add_agent(point.x, point.y),
        MouseButton::Right => model.flock.scatter(point.x, point.y),
        _ => Ok(()),
    };

    if let Err(err) = result {
        warn!(%err, ?button, "Ignored click");
    }
}

// Handle raw window events for egui
pub fn raw_window_event(_app: &App, model: &mut Model, event: &WindowEvent) {
    model.egui.handle_raw_event(event);
}
