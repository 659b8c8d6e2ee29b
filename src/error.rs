//! Error types
//!
//! The kernel itself is infallible; errors only arise when host settings
//! are loaded or validated.

use thiserror::Error;

/// Settings-related errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Timestep must be finite and positive, got {0}")]
    InvalidTimestep(f64),

    #[error("Substep count must be at least 1")]
    InvalidSubsteps,

    #[error("Gravity must be finite, got {0}")]
    NonFiniteGravity(f64),

    #[error("Sample range bounds must be finite, got [{min}, {max}]")]
    NonFiniteRange { min: f64, max: f64 },

    #[error("Failed to read settings: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}
