//! Equations of motion of the triple pendulum
//!
//! State layout is `[θ1, θ2, θ3, ω1, ω2, ω3]`. The angular accelerations
//! solve `M·α = F` with
//!
//! ```text
//! M = [[3,          cos(θ1-θ2), cos(θ1-θ3)],
//!      [cos(θ1-θ2), 2,          cos(θ2-θ3)],
//!      [cos(θ1-θ3), cos(θ2-θ3), 1         ]]
//! ```
//!
//! The diagonal weights count the bobs hanging at or below each joint, and
//! the gravity terms carry the same weights. Both are fixed by the mass and
//! length configuration and are not parameters.
//!
//! `det(M) >= 2` for every real angle triple, so the closed-form solve
//! below never divides by zero.

use nalgebra::{Matrix3, Vector3};

use crate::utils::constants::STATE_DIM;

/// Pairwise cosines and sines of the angle differences
#[derive(Debug, Clone, Copy)]
struct Coupling {
    c12: f64,
    c13: f64,
    c23: f64,
    s12: f64,
    s13: f64,
    s23: f64,
}

impl Coupling {
    #[inline]
    fn new(th1: f64, th2: f64, th3: f64) -> Self {
        let (s12, c12) = (th1 - th2).sin_cos();
        let (s13, c13) = (th1 - th3).sin_cos();
        let (s23, c23) = (th2 - th3).sin_cos();
        Self {
            c12,
            c13,
            c23,
            s12,
            s13,
            s23,
        }
    }

    #[inline]
    fn mass_matrix(&self) -> Matrix3<f64> {
        Matrix3::new(
            3.0, self.c12, self.c13, //
            self.c12, 2.0, self.c23, //
            self.c13, self.c23, 1.0,
        )
    }

    #[inline]
    fn forcing(&self, y: &[f64; STATE_DIM], g: f64) -> Vector3<f64> {
        let (w1, w2, w3) = (y[3], y[4], y[5]);
        Vector3::new(
            -3.0 * g * y[0].sin() - w2 * w2 * self.s12 - w3 * w3 * self.s13,
            -2.0 * g * y[1].sin() + w1 * w1 * self.s12 - w3 * w3 * self.s23,
            -g * y[2].sin() + w1 * w1 * self.s13 + w2 * w2 * self.s23,
        )
    }
}

/// Mass/coupling matrix `M` for the given angles
pub fn mass_matrix(theta: &[f64; 3]) -> Matrix3<f64> {
    Coupling::new(theta[0], theta[1], theta[2]).mass_matrix()
}

/// Forcing vector `F`: gravity plus centripetal coupling terms
pub fn forcing(y: &[f64; STATE_DIM], g: f64) -> Vector3<f64> {
    Coupling::new(y[0], y[1], y[2]).forcing(y, g)
}

/// Solve `m·x = f` with Cramer's rule
///
/// Closed-form 3×3 adjugate/determinant expansion. No pivoting and no
/// failure path; `m` must be non-singular, which holds for every mass
/// matrix produced by [`mass_matrix`].
#[inline]
pub fn solve_3x3(m: &Matrix3<f64>, f: &Vector3<f64>) -> Vector3<f64> {
    let (m00, m01, m02) = (m[(0, 0)], m[(0, 1)], m[(0, 2)]);
    let (m10, m11, m12) = (m[(1, 0)], m[(1, 1)], m[(1, 2)]);
    let (m20, m21, m22) = (m[(2, 0)], m[(2, 1)], m[(2, 2)]);
    let (f0, f1, f2) = (f[0], f[1], f[2]);

    let det = m00 * (m11 * m22 - m12 * m21) - m01 * (m10 * m22 - m12 * m20)
        + m02 * (m10 * m21 - m11 * m20);
    let inv_det = 1.0 / det;

    let a0 = inv_det
        * (f0 * (m11 * m22 - m12 * m21) - m01 * (f1 * m22 - m12 * f2)
            + m02 * (f1 * m21 - m11 * f2));
    let a1 = inv_det
        * (m00 * (f1 * m22 - m12 * f2) - f0 * (m10 * m22 - m12 * m20)
            + m02 * (m10 * f2 - f1 * m20));
    let a2 = inv_det
        * (m00 * (m11 * f2 - f1 * m21) - m01 * (m10 * f2 - f1 * m20)
            + f0 * (m10 * m21 - m11 * m20));

    Vector3::new(a0, a1, a2)
}

/// Time derivative of the state, written into `out`
///
/// `out[0..3]` are the angular velocities, `out[3..6]` the angular
/// accelerations. Pure and allocation-free.
#[inline]
pub fn derivatives(y: &[f64; STATE_DIM], g: f64, out: &mut [f64; STATE_DIM]) {
    let coupling = Coupling::new(y[0], y[1], y[2]);
    let alpha = solve_3x3(&coupling.mass_matrix(), &coupling.forcing(y, g));

    out[0] = y[3];
    out[1] = y[4];
    out[2] = y[5];
    out[3] = alpha[0];
    out[4] = alpha[1];
    out[5] = alpha[2];
}

/// Total mechanical energy `½·ωᵀMω − g·(3cosθ1 + 2cosθ2 + cosθ3)`
///
/// This is the Lagrangian whose Euler-Lagrange equations are implemented by
/// [`derivatives`], so it is conserved by the exact flow.
pub fn total_energy(y: &[f64; STATE_DIM], g: f64) -> f64 {
    let m = mass_matrix(&[y[0], y[1], y[2]]);
    let omega = Vector3::new(y[3], y[4], y[5]);
    let kinetic = 0.5 * omega.dot(&(m * omega));
    let potential = -g * (3.0 * y[0].cos() + 2.0 * y[1].cos() + y[2].cos());
    kinetic + potential
}
