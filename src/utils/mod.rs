//! Shared constants and small numeric helpers

pub mod constants;

use std::f64::consts::{PI, TAU};

/// Wrap an angle into `(-π, π]`.
///
/// Uses `a - 2π·floor((a + π) / 2π)`. Trigonometric functions are periodic,
/// so wrapping never changes the dynamics.
#[inline]
pub fn wrap_angle(a: f64) -> f64 {
    a - TAU * ((a + PI) / TAU).floor()
}
