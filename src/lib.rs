//! tripendulum - a triple pendulum as a source of unpredictable numbers
//!
//! Integrates the coupled equations of motion of three unit-length links
//! with fixed-step RK4 and reads the tip of the chain as a value in a
//! caller-chosen range. The system is deterministic: identical initial
//! angles give identical trajectories. What makes the output hard to guess
//! is the extreme sensitivity to those initial angles, not any
//! cryptographic or statistical guarantee.
//!
//! # Architecture
//!
//! - [`pendulum`]: state, dynamics, RK4 integrator, forward kinematics
//! - [`solvers`]: generic fixed-step explicit solvers with owned scratch buffers
//! - [`sampling`]: tip position to mapped sample, sample log and CSV export
//! - [`simulation`]: host loop driver (frames, run/pause, reset)
//! - [`config`]: serializable settings and gravity presets
//!
//! # Example
//!
//! ```rust
//! use tripendulum::prelude::*;
//!
//! let mut pendulum = TriplePendulum::with_seed(9.81, 42);
//! for _ in 0..6 {
//!     pendulum.step(0.002);
//! }
//!
//! let s = sample(&pendulum.positions(), Dimension::TwoD, SampleRange::new(0.0, 100.0));
//! assert!(s.values().all(|v| (0.0..=100.0).contains(&v)));
//! ```

pub mod config;
pub mod error;
pub mod pendulum;
pub mod sampling;
pub mod simulation;
pub mod solvers;
pub mod utils;

pub use config::{Planet, SimulationSettings};
pub use error::ConfigError;
pub use pendulum::{BobPositions, Integrator, PendulumState, TriplePendulum};
pub use sampling::{sample, Dimension, Sample, SampleLog, SampleRange};
pub use simulation::Simulation;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::config::{Planet, SimulationSettings};
    pub use crate::error::ConfigError;
    pub use crate::pendulum::{BobPositions, Integrator, PendulumState, TriplePendulum};
    pub use crate::sampling::{sample, Dimension, Sample, SampleLog, SampleRange};
    pub use crate::simulation::Simulation;
    pub use crate::solvers::*;
}
