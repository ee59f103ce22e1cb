/*
 * Error Module
 *
 * Errors surfaced by the flocking library. The simulation step itself is
 * total; errors only come from configuration and from coordinates handed in
 * by the renderer.
 */

use thiserror::Error;

/// Errors that can occur when configuring or mutating a flock.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum FlockError {
    /// A configuration value is out of its legal range.
    #[error("invalid parameters: {0}")]
    InvalidParams(String),

    /// A pointer coordinate was NaN or infinite.
    #[error("non-finite coordinate ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },

    /// The config file could not be read or parsed.
    #[error("config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, FlockError>;
