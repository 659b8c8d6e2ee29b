//! Numerical integration solvers
//!
//! Fixed-step explicit Runge-Kutta over stack-allocated state arrays.

mod base;
mod rk4;

pub use base::*;
pub use rk4::RK4;
