/*
 * Renderer Module
 *
 * This module draws the boid simulation: the arena border, one point per
 * agent and a smaller beak marker ahead of it along its velocity, plus the
 * debug overlay when enabled.
 */

use nannou::prelude::*;

use crate::app::Model;
use crate::ui;
use crate::{BEAK_SIZE, POINT_SIZE};

// Render the model
pub fn view(app: &App, model: &Model, frame: Frame) {
    let draw = app.draw();
    draw.background().color(WHITE);

    let window_rect = app.window_rect();
    let camera = &model.camera;

    // Arena boundary
    let arena = camera.arena_rect(window_rect);
    draw.rect()
        .xy(arena.xy())
        .wh(arena.wh())
        .no_fill()
        .stroke_weight(1.0)
        .stroke(rgba(0.3, 0.3, 0.3, 1.0));

    // Marker sizes follow the zoom so the flock keeps its proportions
    let point_radius = POINT_SIZE / 2.0 * camera.zoom;
    let beak_radius = BEAK_SIZE / 2.0 * camera.zoom;

    for position in model.flock.positions() {
        draw.ellipse()
            .xy(camera.world_to_screen(*position, window_rect))
            .radius(point_radius)
            .color(BLACK);
    }

    for beak in model.flock.beaks() {
        draw.ellipse()
            .xy(camera.world_to_screen(beak, window_rect))
            .radius(beak_radius)
            .color(RED);
    }

    if model.settings.show_debug {
        // Rule radii around the first boid
        if let Some(first) = model.flock.positions().first() {
            let params = model.flock.params();
            let center = camera.world_to_screen(*first, window_rect);

            draw.ellipse()
                .xy(center)
                .radius(params.minimum_distance as f32 * camera.zoom)
                .no_fill()
                .stroke(ORANGE)
                .stroke_weight(1.0);

            draw.ellipse()
                .xy(center)
                .radius(params.distance_threshold as f32 * camera.zoom)
                .no_fill()
                .stroke(BLUE)
                .stroke_weight(1.0);
        }

        ui::draw_debug_info(&draw, &model.debug_info, window_rect, &model.flock);
    }

    draw.to_frame(app, &frame).expect("failed to draw frame");
    model.egui.draw_to_frame(&frame).expect("failed to draw egui");
}
