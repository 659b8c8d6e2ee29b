//! Simulation settings and gravity presets

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::ConfigError;
use crate::sampling::{Dimension, SampleRange};
use crate::utils::constants::{DEFAULT_GRAVITY, SIM_SUBSTEPS, SIM_TIMESTEP};

/// Gravity presets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Planet {
    #[default]
    Earth,
    Mars,
    Venus,
}

impl Planet {
    pub const ALL: [Planet; 3] = [Planet::Earth, Planet::Mars, Planet::Venus];

    /// Surface gravity in m/s²
    pub fn gravity(&self) -> f64 {
        match self {
            Planet::Earth => 9.81,
            Planet::Mars => 3.71,
            Planet::Venus => 8.87,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Planet::Earth => "Earth",
            Planet::Mars => "Mars",
            Planet::Venus => "Venus",
        }
    }
}

/// Host-loop settings
///
/// Step size and substep count decide how far the pendulum moves between
/// two samples, so both are exposed rather than fixed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationSettings {
    /// Gravitational acceleration
    pub gravity: f64,

    /// Integration time step
    pub dt: f64,

    /// RK4 steps per frame
    pub substeps: usize,

    /// Values per sample
    pub dimension: Dimension,

    /// Lower end of the sample range
    pub range_min: f64,

    /// Upper end of the sample range (may be below `range_min`)
    pub range_max: f64,

    /// Seed for the initial angles; entropy when absent
    pub seed: Option<u64>,
}

impl Default for SimulationSettings {
    fn default() -> Self {
        Self {
            gravity: DEFAULT_GRAVITY,
            dt: SIM_TIMESTEP,
            substeps: SIM_SUBSTEPS,
            dimension: Dimension::OneD,
            range_min: 0.0,
            range_max: 1.0,
            seed: None,
        }
    }
}

impl SimulationSettings {
    /// Default settings with a planet's gravity
    pub fn for_planet(planet: Planet) -> Self {
        Self {
            gravity: planet.gravity(),
            ..Default::default()
        }
    }

    pub fn range(&self) -> SampleRange {
        SampleRange::new(self.range_min, self.range_max)
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Load settings from a JSON file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Reject settings the integrator cannot run with
    ///
    /// An inverted sample range is accepted on purpose.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.dt.is_finite() && self.dt > 0.0) {
            return Err(ConfigError::InvalidTimestep(self.dt));
        }
        if self.substeps == 0 {
            return Err(ConfigError::InvalidSubsteps);
        }
        if !self.gravity.is_finite() {
            return Err(ConfigError::NonFiniteGravity(self.gravity));
        }
        if !(self.range_min.is_finite() && self.range_max.is_finite()) {
            return Err(ConfigError::NonFiniteRange {
                min: self.range_min,
                max: self.range_max,
            });
        }
        Ok(())
    }
}
