/*
 * Simulation Parameters Module
 *
 * This module defines the FlockParams struct that holds every constant the
 * simulation reads: arena size, rule radii, velocity caps, scattering factor
 * and boundary margin. Values are fixed for the lifetime of a flock; they can
 * be supplied at startup from a TOML file or the command line.
 */

use std::fs;
use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::{FlockError, Result};

// Defaults
pub const DEFAULT_WIDTH: f64 = 640.0;
pub const DEFAULT_HEIGHT: f64 = 480.0;
pub const DEFAULT_BOIDS: usize = 100;
pub const MINIMUM_DISTANCE: f64 = 25.0;
pub const DISTANCE_THRESHOLD: f64 = 50.0;
pub const MAX_RULE_VELOCITY: f64 = 0.03;
pub const MAX_VELOCITY: f64 = 2.0;
pub const SCATTERING_VELOCITY_FACTOR: f64 = 0.1;
pub const BOUNDARY_MARGIN: f64 = 2.0;
pub const SPAWN_SPREAD: f64 = 10.0;
pub const BEAK_LENGTH: f64 = 10.0;
pub const STEP_INTERVAL_MS: u64 = 25;

// Parameters for the simulation, fixed once a flock is built
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlockParams {
    /// Arena width in world units.
    pub width: f64,
    /// Arena height in world units.
    pub height: f64,
    /// Number of agents spawned at startup.
    pub num_boids: usize,
    /// Separation radius.
    pub minimum_distance: f64,
    /// Alignment and cohesion radius.
    pub distance_threshold: f64,
    /// Cap applied to each rule's delta before summation.
    pub max_rule_velocity: f64,
    /// Cap applied to the final velocity of every agent.
    pub max_velocity: f64,
    /// Scale of the outward impulse applied by `scatter`.
    pub scattering_velocity_factor: f64,
    /// Wraparound margin around the arena.
    pub boundary_margin: f64,
    /// Half-width of the square around the arena center agents spawn in.
    pub spawn_spread: f64,
    /// Length of the direction marker at full speed.
    pub beak_length: f64,
    /// Wall-clock time between simulation steps in the front end.
    pub step_interval_ms: u64,
    /// Evaluate distance and rule rows on the rayon pool.
    pub parallel: bool,
    /// Seed for reproducible runs; entropy when absent.
    pub seed: Option<u64>,
}

impl Default for FlockParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            num_boids: DEFAULT_BOIDS,
            minimum_distance: MINIMUM_DISTANCE,
            distance_threshold: DISTANCE_THRESHOLD,
            max_rule_velocity: MAX_RULE_VELOCITY,
            max_velocity: MAX_VELOCITY,
            scattering_velocity_factor: SCATTERING_VELOCITY_FACTOR,
            boundary_margin: BOUNDARY_MARGIN,
            spawn_spread: SPAWN_SPREAD,
            beak_length: BEAK_LENGTH,
            step_interval_ms: STEP_INTERVAL_MS,
            parallel: true,
            seed: None,
        }
    }
}

impl FlockParams {
    // Parse parameters from TOML text, filling missing keys with defaults
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let params: FlockParams =
            toml::from_str(text).map_err(|e| FlockError::Config(e.to_string()))?;
        params.validate()?;
        Ok(params)
    }

    // Load parameters from a TOML file on disk
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)
            .map_err(|e| FlockError::Config(format!("{}: {}", path.display(), e)))?;
        let params = Self::from_toml_str(&text)?;
        info!(path = %path.display(), "Loaded flock parameters");
        Ok(params)
    }

    // Render the parameters as TOML, in the format `load` reads back
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| FlockError::Config(e.to_string()))
    }

    /// Check that every value is inside its legal range.
    pub fn validate(&self) -> Result<()> {
        let strictly_positive = [
            ("width", self.width),
            ("height", self.height),
            ("minimum_distance", self.minimum_distance),
            ("distance_threshold", self.distance_threshold),
            ("max_rule_velocity", self.max_rule_velocity),
            ("max_velocity", self.max_velocity),
            ("boundary_margin", self.boundary_margin),
        ];
        for (name, value) in strictly_positive {
            if !value.is_finite() || value <= 0.0 {
                return Err(FlockError::InvalidParams(format!(
                    "{name} must be finite and positive, got {value}"
                )));
            }
        }

        let non_negative = [
            ("scattering_velocity_factor", self.scattering_velocity_factor),
            ("spawn_spread", self.spawn_spread),
            ("beak_length", self.beak_length),
        ];
        for (name, value) in non_negative {
            if !value.is_finite() || value < 0.0 {
                return Err(FlockError::InvalidParams(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }

        if self.step_interval_ms == 0 {
            return Err(FlockError::InvalidParams(
                "step_interval_ms must be at least 1".to_string(),
            ));
        }

        Ok(())
    }

    pub fn step_interval(&self) -> Duration {
        Duration::from_millis(self.step_interval_ms)
    }

    // Arena center, the spawn point for the initial flock
    pub fn center(&self) -> (f64, f64) {
        (self.width / 2.0, self.height / 2.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_classic_constants() {
        let params = FlockParams::default();
        assert_eq!(params.width, 640.0);
        assert_eq!(params.height, 480.0);
        assert_eq!(params.num_boids, 100);
        assert_eq!(params.minimum_distance, 25.0);
        assert_eq!(params.distance_threshold, 50.0);
        assert_eq!(params.max_rule_velocity, 0.03);
        assert_eq!(params.max_velocity, 2.0);
        assert_eq!(params.scattering_velocity_factor, 0.1);
        assert_eq!(params.boundary_margin, 2.0);
        assert_eq!(params.step_interval(), Duration::from_millis(25));
        assert!(params.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let params = FlockParams::from_toml_str("num_boids = 7\nseed = 42\n").unwrap();
        assert_eq!(params.num_boids, 7);
        assert_eq!(params.seed, Some(42));
        assert_eq!(params.max_velocity, MAX_VELOCITY);
    }

    #[test]
    fn malformed_toml_is_a_config_error() {
        let err = FlockParams::from_toml_str("num_boids = \"many\"").unwrap_err();
        assert!(matches!(err, FlockError::Config(_)));
    }

    #[test]
    fn rejects_non_positive_caps() {
        let params = FlockParams {
            max_velocity: 0.0,
            ..FlockParams::default()
        };
        assert!(matches!(params.validate(), Err(FlockError::InvalidParams(_))));

        let params = FlockParams {
            width: f64::NAN,
            ..FlockParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_negative_scatter_factor() {
        let params = FlockParams {
            scattering_velocity_factor: -0.1,
            ..FlockParams::default()
        };
        assert!(params.validate().is_err());
    }

    #[test]
    fn rejects_zero_step_interval() {
        let params = FlockParams {
            step_interval_ms: 0,
            ..FlockParams::default()
        };
        assert!(matches!(params.validate(), Err(FlockError::InvalidParams(_))));
    }

    #[test]
    fn written_config_reads_back_identically() {
        let params = FlockParams {
            num_boids: 33,
            max_velocity: 3.5,
            step_interval_ms: 40,
            parallel: false,
            seed: Some(12),
            ..FlockParams::default()
        };
        let text = params.to_toml_string().unwrap();
        assert!(text.contains("step_interval_ms = 40"));
        assert_eq!(FlockParams::from_toml_str(&text).unwrap(), params);
    }

    #[test]
    fn missing_file_is_a_config_error() {
        let err = FlockParams::load("/definitely/not/here.toml").unwrap_err();
        assert!(matches!(err, FlockError::Config(_)));
    }
}
