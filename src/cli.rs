/*
 * Command Line Module
 *
 * Startup arguments. A TOML config file, when given, provides the base
 * parameters; explicit flags override it.
 */

use std::path::PathBuf;

use clap::Parser;

use crate::error::Result;
use crate::params::FlockParams;

#[derive(Debug, Clone, Parser)]
#[command(name = "flocking", about = "A simulation of Craig Reynolds' Boids")]
pub struct Args {
    /// Number of boids to spawn
    #[arg(long = "num-boids")]
    pub num_boids: Option<usize>,

    /// RNG seed for a reproducible flock
    #[arg(long)]
    pub seed: Option<u64>,

    /// TOML file with simulation parameters
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Milliseconds between simulation steps
    #[arg(long = "step-interval-ms")]
    pub step_interval_ms: Option<u64>,

    /// Evaluate rules on a single thread
    #[arg(long)]
    pub sequential: bool,

    /// Print the effective parameters as TOML and exit
    #[arg(long = "dump-config")]
    pub dump_config: bool,
}

impl Args {
    // Merge the config file (if any) with flags; flags win
    pub fn resolve(&self) -> Result<FlockParams> {
        let mut params = match &self.config {
            Some(path) => FlockParams::load(path)?,
            None => FlockParams::default(),
        };

        if let Some(n) = self.num_boids {
            params.num_boids = n;
        }
        if let Some(seed) = self.seed {
            params.seed = Some(seed);
        }
        if let Some(interval) = self.step_interval_ms {
            params.step_interval_ms = interval;
        }
        if self.sequential {
            params.parallel = false;
        }

        params.validate()?;
        Ok(params)
    }
}
