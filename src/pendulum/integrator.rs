//! Fixed-step RK4 stepping of a [`PendulumState`]

use super::dynamics;
use super::state::PendulumState;
use crate::solvers::{ExplicitSolver, RK4};
use crate::utils::constants::{NUM_LINKS, STATE_DIM};
use crate::utils::wrap_angle;

/// Advances a pendulum state with classical RK4
///
/// Owns the stage buffers so stepping never allocates. Drive one
/// instance from one call site only.
#[derive(Debug, Clone, Default)]
pub struct Integrator {
    solver: RK4<STATE_DIM>,
}

impl Integrator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance `state` by exactly `dt`, then wrap every angle
    ///
    /// Non-finite `dt` or gravity propagate NaN into the state; guarding
    /// against that is up to the caller.
    pub fn step(&mut self, state: &mut PendulumState, dt: f64) {
        let g = state.gravity();
        let mut y = state.as_vector();

        self.solver
            .step(|y, out| dynamics::derivatives(y, g, out), &mut y, dt);

        for theta in y[..NUM_LINKS].iter_mut() {
            *theta = wrap_angle(*theta);
        }
        state.set_vector(&y);
    }

    /// Run `substeps` consecutive steps of size `dt`
    pub fn advance(&mut self, state: &mut PendulumState, dt: f64, substeps: usize) {
        for _ in 0..substeps {
            self.step(state, dt);
        }
    }
}
