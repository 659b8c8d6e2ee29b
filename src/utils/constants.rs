//! Simulation constants and defaults

/// Default gravitational acceleration (Earth, m/s²)
pub const DEFAULT_GRAVITY: f64 = 9.81;

/// Length of every pendulum arm
pub const ARM_LENGTH: f64 = 1.0;

/// Number of links in the chain
pub const NUM_LINKS: usize = 3;

/// State dimension: three angles followed by three angular velocities
pub const STATE_DIM: usize = 2 * NUM_LINKS;

/// Default integration timestep
pub const SIM_TIMESTEP: f64 = 0.002;

/// Default number of integration substeps per rendered frame
pub const SIM_SUBSTEPS: usize = 6;

/// Reach of the chain tip along either axis, `[-REACH, REACH]`
pub const REACH: f64 = NUM_LINKS as f64 * ARM_LENGTH;

/// Decimal digits used when a sample is displayed or exported
pub const SAMPLE_PRECISION: usize = 4;
