/*
 * Boid Flocking Simulation
 *
 * This application simulates the flocking behavior of birds (boids) based on three rules:
 * 1. Separation: Avoid crowding neighbors
 * 2. Alignment: Steer along the heading of neighbors
 * 3. Cohesion: Steer towards the position of neighbors
 *
 * Left click adds a boid, right click scatters the flock.
 */

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use flocking::app;
use flocking::cli::Args;
use flocking::Flock;

fn main() -> Result<()> {
    init_tracing();

    let args = Args::parse();
    let params = match args.resolve() {
        Ok(params) => params,
        Err(err) => {
            error!(error = %err, "Invalid startup configuration");
            return Err(err).context("failed to resolve simulation parameters");
        }
    };

    if args.dump_config {
        print!("{}", params.to_toml_string()?);
        return Ok(());
    }

    info!(
        agents = params.num_boids,
        width = params.width,
        height = params.height,
        parallel = params.parallel,
        step_interval_ms = params.step_interval_ms,
        "Starting boid simulation"
    );

    let flock = match Flock::new(params) {
        Ok(flock) => flock,
        Err(err) => {
            error!(error = %err, "Could not create flock");
            return Err(err).context("failed to create flock");
        }
    };
    app::run(flock);
    Ok(())
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}
