/*
 * Application Module
 *
 * This module defines the nannou application model for the boid simulation.
 * The model owns the Flock; nannou's update loop is the only driver of
 * `Flock::step`. Steps run on a fixed wall-clock tick (`step_interval_ms`,
 * 25 ms by default) through a StepClock, so the flock moves at the same
 * speed on any display refresh rate.
 */

use std::sync::Mutex;
use std::time::Instant;

use nannou::prelude::*;
use nannou_egui::Egui;
use tracing::info;

use crate::camera::Camera;
use crate::clock::StepClock;
use crate::debug::DebugInfo;
use crate::flock::Flock;
use crate::input;
use crate::renderer;
use crate::ui::{self, ViewSettings};

// nannou's model constructor is a plain fn, so the startup flock is handed over here
static STARTUP_FLOCK: Mutex<Option<Flock>> = Mutex::new(None);

// Main model for the application
pub struct Model {
    pub flock: Flock,
    pub egui: Egui,
    pub debug_info: DebugInfo,
    pub camera: Camera,
    pub settings: ViewSettings,
    pub mouse_position: Vec2,
    pub clock: StepClock,
}

// Start the event loop driving the given flock
pub fn run(flock: Flock) {
    if let Ok(mut slot) = STARTUP_FLOCK.lock() {
        *slot = Some(flock);
    }
    nannou::app(model).update(update).run();
}

// Initialize the model
pub fn model(app: &App) -> Model {
    let flock = STARTUP_FLOCK
        .lock()
        .ok()
        .and_then(|mut slot| slot.take())
        .expect("app::run installs the flock before the event loop starts");
    let params = flock.params();

    // The window starts at the arena's size
    let window_id = app
        .new_window()
        .title("Boids")
        .size(params.width as u32, params.height as u32)
        .view(renderer::view)
        .mouse_moved(input::mouse_moved)
        .mouse_pressed(input::mouse_pressed)
        .raw_event(input::raw_window_event)
        .build()
        .expect("failed to build window");

    let window = app.window(window_id).expect("window vanished after creation");
    let egui = Egui::from_window(&window);

    let mut camera = Camera::new(params.width, params.height);
    camera.fit(window.rect());

    let clock = StepClock::new(params.step_interval());

    info!(
        agents = flock.len(),
        step_interval_ms = params.step_interval_ms,
        "Simulation window ready"
    );

    Model {
        flock,
        egui,
        debug_info: DebugInfo::default(),
        camera,
        settings: ViewSettings::default(),
        mouse_position: Vec2::ZERO,
        clock,
    }
}

// Update the model
pub fn update(app: &App, model: &mut Model, update: Update) {
    model.debug_info.fps = app.fps();
    model.debug_info.frame_time = update.since_last;

    let step_once = ui::update_ui(
        &mut model.egui,
        &mut model.settings,
        &model.flock,
        &model.debug_info,
    );

    // Keep the arena fitted to the window as it resizes
    model.camera.fit(app.window_rect());

    // Paused time never turns into a burst of steps on resume
    let due = if model.settings.pause_simulation {
        model.clock.reset();
        <usize as From<bool>>::from(step_once)
    } else {
        model.clock.advance(update.since_last)
    };

    if due > 0 {
        let started = Instant::now();
        for _ in 0..due {
            model.flock.step();
        }
        model.debug_info.step_time = started.elapsed() / due as u32;
        model.debug_info.steps_this_frame = due;
        model.debug_info.steps = model.flock.steps();
    } else {
        model.debug_info.steps_this_frame = 0;
    }
}
