//! Base solver traits

/// Fixed-step explicit solver over a state of compile-time size `N`
///
/// The right-hand side writes the derivative of its first argument into
/// the second one, so implementations can evaluate every stage into
/// buffers they own instead of allocating.
pub trait ExplicitSolver<const N: usize> {
    /// Advance `state` in place by exactly `dt`
    fn step<F>(&mut self, f: F, state: &mut [f64; N], dt: f64)
    where
        F: FnMut(&[f64; N], &mut [f64; N]);

    /// Order of the method
    fn order(&self) -> usize;

    /// Number of stages (right-hand side evaluations per step)
    fn stages(&self) -> usize;
}
