//! Angular state of the triple pendulum

use rand::distributions::Distribution;
use rand::Rng;
use rand_distr::Uniform;
use std::f64::consts::TAU;

use super::dynamics;
use crate::utils::constants::{ARM_LENGTH, NUM_LINKS, STATE_DIM};

/// Angles, angular velocities and physical parameters of the chain
///
/// Index order is link order: index 0 hangs from the pivot, index 2
/// carries the tip bob. Angles are measured from the downward vertical.
#[derive(Debug, Clone, PartialEq)]
pub struct PendulumState {
    /// Angular positions (radians)
    pub theta: [f64; NUM_LINKS],
    /// Angular velocities (radians per unit time)
    pub omega: [f64; NUM_LINKS],
    gravity: f64,
    lengths: [f64; NUM_LINKS],
}

impl PendulumState {
    /// Create a state with explicit angles and velocities
    ///
    /// Used wherever the initial condition must be reproducible.
    pub fn from_angles(gravity: f64, theta: [f64; NUM_LINKS], omega: [f64; NUM_LINKS]) -> Self {
        Self {
            theta,
            omega,
            gravity,
            lengths: [ARM_LENGTH; NUM_LINKS],
        }
    }

    /// Create a state with angles drawn uniformly from `[0, 2π)` and zero velocities
    pub fn random<R: Rng + ?Sized>(gravity: f64, rng: &mut R) -> Self {
        let mut state = Self::from_angles(gravity, [0.0; NUM_LINKS], [0.0; NUM_LINKS]);
        state.reset(rng);
        state
    }

    /// Redraw the angles from `[0, 2π)` and zero the velocities
    ///
    /// Gravity and arm lengths are left untouched.
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let angle = Uniform::new(0.0, TAU);
        for theta in self.theta.iter_mut() {
            *theta = angle.sample(rng);
        }
        self.omega = [0.0; NUM_LINKS];
    }

    /// Gravitational acceleration
    pub fn gravity(&self) -> f64 {
        self.gravity
    }

    /// Set gravitational acceleration; takes effect on the next step
    pub fn set_gravity(&mut self, gravity: f64) {
        self.gravity = gravity;
    }

    /// Arm lengths, fixed at [`ARM_LENGTH`]
    pub fn lengths(&self) -> &[f64; NUM_LINKS] {
        &self.lengths
    }

    /// Packed `[θ1, θ2, θ3, ω1, ω2, ω3]` vector
    pub fn as_vector(&self) -> [f64; STATE_DIM] {
        let mut y = [0.0; STATE_DIM];
        y[..NUM_LINKS].copy_from_slice(&self.theta);
        y[NUM_LINKS..].copy_from_slice(&self.omega);
        y
    }

    /// Overwrite angles and velocities from a packed vector
    pub fn set_vector(&mut self, y: &[f64; STATE_DIM]) {
        self.theta.copy_from_slice(&y[..NUM_LINKS]);
        self.omega.copy_from_slice(&y[NUM_LINKS..]);
    }

    /// True when no angle or velocity is NaN or infinite
    pub fn is_finite(&self) -> bool {
        self.theta.iter().chain(self.omega.iter()).all(|v| v.is_finite())
    }

    /// Total mechanical energy, see [`dynamics::total_energy`]
    pub fn energy(&self) -> f64 {
        dynamics::total_energy(&self.as_vector(), self.gravity)
    }
}
