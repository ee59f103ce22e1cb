/*
 * Boid Flocking Simulation - Module Definitions
 *
 * The simulation core (params, vector, distance, rules, flock) has no
 * dependency on the window; the remaining modules are the nannou front end
 * that drives it on a fixed tick and forwards pointer clicks.
 */

// Re-export key components for easier access
pub use distance::DistanceMatrix;
pub use error::FlockError;
pub use flock::Flock;
pub use params::FlockParams;

// Simulation core
pub mod distance;
pub mod error;
pub mod flock;
pub mod params;
pub mod rules;
pub mod vector;

// Front end
pub mod app;
pub mod camera;
pub mod clock;
pub mod cli;
pub mod debug;
pub mod input;
pub mod renderer;
pub mod ui;

// Marker diameters in arena units
pub const POINT_SIZE: f32 = 10.0;
pub const BEAK_SIZE: f32 = 4.0;
