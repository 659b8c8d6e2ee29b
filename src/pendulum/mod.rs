//! Triple pendulum kernel
//!
//! - [`PendulumState`]: angles, velocities, gravity, arm lengths
//! - [`dynamics`]: equations of motion and the closed-form 3×3 solve
//! - [`Integrator`]: RK4 step plus angle wrapping
//! - [`BobPositions`]: forward kinematics
//! - [`TriplePendulum`]: all of the above plus the random source used for
//!   initial conditions

pub mod dynamics;
mod integrator;
mod kinematics;
mod state;

pub use integrator::Integrator;
pub use kinematics::BobPositions;
pub use state::PendulumState;

use rand::rngs::StdRng;
use rand::SeedableRng;

/// A pendulum together with its integrator and random source
///
/// The random source only feeds initial conditions ([`TriplePendulum::reset`]);
/// the motion itself is deterministic.
#[derive(Debug, Clone)]
pub struct TriplePendulum {
    state: PendulumState,
    integrator: Integrator,
    rng: StdRng,
}

impl TriplePendulum {
    /// Random initial angles from an entropy-seeded generator
    pub fn new(gravity: f64) -> Self {
        Self::with_rng(gravity, StdRng::from_entropy())
    }

    /// Random initial angles from a seeded generator (reproducible)
    pub fn with_seed(gravity: f64, seed: u64) -> Self {
        Self::with_rng(gravity, StdRng::seed_from_u64(seed))
    }

    /// Seeded when `seed` is given, entropy-seeded otherwise
    pub fn from_seed(gravity: f64, seed: Option<u64>) -> Self {
        match seed {
            Some(s) => Self::with_seed(gravity, s),
            None => Self::new(gravity),
        }
    }

    /// Random initial angles from a caller-supplied generator
    pub fn with_rng(gravity: f64, mut rng: StdRng) -> Self {
        let state = PendulumState::random(gravity, &mut rng);
        Self {
            state,
            integrator: Integrator::new(),
            rng,
        }
    }

    /// Start from an explicit state; later resets draw from entropy
    pub fn from_state(state: PendulumState) -> Self {
        Self {
            state,
            integrator: Integrator::new(),
            rng: StdRng::from_entropy(),
        }
    }

    pub fn state(&self) -> &PendulumState {
        &self.state
    }

    pub fn gravity(&self) -> f64 {
        self.state.gravity()
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        self.state.set_gravity(gravity);
    }

    /// Advance one RK4 step of size `dt`
    pub fn step(&mut self, dt: f64) {
        self.integrator.step(&mut self.state, dt);
    }

    /// Advance `substeps` RK4 steps of size `dt`
    pub fn advance(&mut self, dt: f64, substeps: usize) {
        self.integrator.advance(&mut self.state, dt, substeps);
    }

    /// New random angles, zero velocities; gravity and lengths unchanged
    pub fn reset(&mut self) {
        self.state.reset(&mut self.rng);
    }

    /// Current bob positions
    pub fn positions(&self) -> BobPositions {
        BobPositions::project(&self.state.theta, self.state.lengths())
    }
}
