//! Classic 4th-order Runge-Kutta solver (RK4)

use super::ExplicitSolver;

/// Classic 4th-order Runge-Kutta solver
///
/// The workhorse fixed-step explicit method. Four-stage, 4th order accuracy.
///
/// # Characteristics
/// - Order: 4
/// - Stages: 4
/// - Explicit, fixed timestep
/// - Not A-stable
///
/// # Note
/// Stage slopes and the intermediate state live in arrays owned by the
/// solver and are reused on every call, so stepping never allocates. The
/// state passed to [`ExplicitSolver::step`] is only written by the final
/// weighted combination. One instance must be driven from a single call
/// site at a time; `&mut self` makes the compiler enforce that.
///
/// # References
/// - Kutta, W. (1901). "Beitrag zur näherungsweisen Integration totaler
///   Differentialgleichungen". Zeitschrift für Mathematik und Physik, 46, 435-453.
/// - Butcher, J. C. (2016). "Numerical Methods for Ordinary Differential
///   Equations". John Wiley & Sons, 3rd Edition.
#[derive(Debug, Clone)]
pub struct RK4<const N: usize> {
    k1: [f64; N],
    k2: [f64; N],
    k3: [f64; N],
    k4: [f64; N],
    tmp: [f64; N],
}

impl<const N: usize> RK4<N> {
    /// Create a solver with zeroed scratch buffers
    pub fn new() -> Self {
        Self {
            k1: [0.0; N],
            k2: [0.0; N],
            k3: [0.0; N],
            k4: [0.0; N],
            tmp: [0.0; N],
        }
    }
}

impl<const N: usize> Default for RK4<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> ExplicitSolver<N> for RK4<N> {
    fn step<F>(&mut self, mut f: F, state: &mut [f64; N], dt: f64)
    where
        F: FnMut(&[f64; N], &mut [f64; N]),
    {
        // RK4 Butcher tableau
        // c = [0, 1/2, 1/2, 1]
        // a = [[],
        //      [1/2],
        //      [0, 1/2],
        //      [0, 0, 1]]
        // b = [1/6, 1/3, 1/3, 1/6]

        // k1 = f(y)
        f(&*state, &mut self.k1);

        // k2 = f(y + dt/2 * k1)
        for i in 0..N {
            self.tmp[i] = state[i] + self.k1[i] * dt * 0.5;
        }
        f(&self.tmp, &mut self.k2);

        // k3 = f(y + dt/2 * k2)
        for i in 0..N {
            self.tmp[i] = state[i] + self.k2[i] * dt * 0.5;
        }
        f(&self.tmp, &mut self.k3);

        // k4 = f(y + dt * k3)
        for i in 0..N {
            self.tmp[i] = state[i] + self.k3[i] * dt;
        }
        f(&self.tmp, &mut self.k4);

        // y_new = y + dt/6 * (k1 + 2*k2 + 2*k3 + k4)
        for i in 0..N {
            state[i] += dt / 6.0 * (self.k1[i] + 2.0 * self.k2[i] + 2.0 * self.k3[i] + self.k4[i]);
        }
    }

    fn order(&self) -> usize {
        4
    }

    fn stages(&self) -> usize {
        4
    }
}
