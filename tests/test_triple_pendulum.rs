//! Long-run behaviour of the triple pendulum kernel
//!
//! - Finite state over 10,000 steps for a range of step sizes
//! - Energy drift bound at the reference cadence (dt = 0.002)
//! - Angle wrap after every step
//! - Reproducible trajectories from injected initial conditions

use approx::assert_relative_eq;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::f64::consts::PI;
use tripendulum::pendulum::dynamics;
use tripendulum::prelude::*;
use tripendulum::utils::constants::STATE_DIM;
use tripendulum::utils::wrap_angle;

const SEEDS: [u64; 5] = [1, 7, 42, 1234, 987_654_321];

#[test]
fn test_state_stays_finite() {
    for &dt in &[0.001, 0.002, 0.005, 0.01] {
        for &seed in &SEEDS {
            let mut pendulum = TriplePendulum::with_seed(9.81, seed);
            for n in 0..10_000 {
                pendulum.step(dt);
                assert!(
                    pendulum.state().is_finite(),
                    "dt={} seed={} went non-finite at step {}",
                    dt,
                    seed,
                    n
                );
            }
        }
    }
}

#[test]
fn test_state_stays_finite_for_other_gravities() {
    for planet in Planet::ALL {
        let mut pendulum = TriplePendulum::with_seed(planet.gravity(), 5);
        pendulum.advance(0.002, 10_000);
        assert!(pendulum.state().is_finite(), "{}", planet.label());
    }
}

#[test]
fn test_energy_drift_bound() {
    let g = 9.81;
    // Potential energy spans [-6g, 6g]; E0 itself can sit near zero
    let scale = 6.0 * g;

    for &seed in &SEEDS {
        let mut pendulum = TriplePendulum::with_seed(g, seed);
        let e0 = pendulum.state().energy();

        let mut worst: f64 = 0.0;
        for _ in 0..10_000 {
            pendulum.step(0.002);
            worst = worst.max((pendulum.state().energy() - e0).abs());
        }

        assert!(
            worst / scale < 0.01,
            "seed={} relative drift {}",
            seed,
            worst / scale
        );
    }
}

#[test]
fn test_angles_wrapped_after_every_step() {
    let mut pendulum = TriplePendulum::with_seed(9.81, 77);
    for _ in 0..10_000 {
        pendulum.step(0.002);
        for &theta in &pendulum.state().theta {
            assert!((-PI..PI).contains(&theta), "theta = {}", theta);
        }
    }
}

#[test]
fn test_reset_then_positions_follow_kinematics() {
    let mut pendulum = TriplePendulum::with_seed(9.81, 2024);
    pendulum.advance(0.002, 500);
    pendulum.reset();

    let theta = pendulum.state().theta;
    let p = pendulum.positions();

    let x1 = theta[0].sin();
    let y1 = theta[0].cos();
    let x2 = x1 + theta[1].sin();
    let y2 = y1 + theta[1].cos();
    let x3 = x2 + theta[2].sin();
    let y3 = y2 + theta[2].cos();

    assert_relative_eq!(p.bob(0).x, x1, epsilon = 1e-15);
    assert_relative_eq!(p.bob(0).y, y1, epsilon = 1e-15);
    assert_relative_eq!(p.bob(1).x, x2, epsilon = 1e-15);
    assert_relative_eq!(p.bob(1).y, y2, epsilon = 1e-15);
    assert_relative_eq!(p.tip().x, x3, epsilon = 1e-15);
    assert_relative_eq!(p.tip().y, y3, epsilon = 1e-15);
}

#[test]
fn test_positions_do_not_mutate_state() {
    let pendulum = TriplePendulum::with_seed(9.81, 8);
    let before = pendulum.state().clone();
    let _ = pendulum.positions();
    let _ = pendulum.positions();
    assert_eq!(pendulum.state(), &before);
}

/// Six RK4 steps written out directly against the dynamics function
fn reference_rk4(mut y: [f64; STATE_DIM], g: f64, dt: f64, steps: usize) -> [f64; STATE_DIM] {
    let f = |y: &[f64; STATE_DIM]| {
        let mut out = [0.0; STATE_DIM];
        dynamics::derivatives(y, g, &mut out);
        out
    };

    for _ in 0..steps {
        let mut tmp = [0.0; STATE_DIM];
        let k1 = f(&y);
        for i in 0..STATE_DIM {
            tmp[i] = y[i] + k1[i] * dt * 0.5;
        }
        let k2 = f(&tmp);
        for i in 0..STATE_DIM {
            tmp[i] = y[i] + k2[i] * dt * 0.5;
        }
        let k3 = f(&tmp);
        for i in 0..STATE_DIM {
            tmp[i] = y[i] + k3[i] * dt;
        }
        let k4 = f(&tmp);
        for i in 0..STATE_DIM {
            y[i] += dt / 6.0 * (k1[i] + 2.0 * k2[i] + 2.0 * k3[i] + k4[i]);
        }
        for theta in y[..3].iter_mut() {
            *theta = wrap_angle(*theta);
        }
    }
    y
}

#[test]
fn test_end_to_end_six_steps() {
    let g = 9.81;
    let theta = [2.0, 2.5, -1.0];
    let state = PendulumState::from_angles(g, theta, [0.0; 3]);

    let mut pendulum = TriplePendulum::from_state(state.clone());
    for _ in 0..6 {
        pendulum.step(0.002);
    }

    let expected = reference_rk4(state.as_vector(), g, 0.002, 6);
    let actual = pendulum.state().as_vector();
    assert_eq!(actual, expected);

    let expected_positions =
        BobPositions::project(&[expected[0], expected[1], expected[2]], &[1.0; 3]);
    assert_eq!(pendulum.positions(), expected_positions);
}

#[test]
fn test_random_injection_is_reproducible() {
    let mut rng_a = StdRng::seed_from_u64(31337);
    let mut rng_b = StdRng::seed_from_u64(31337);
    let mut a = PendulumState::random(9.81, &mut rng_a);
    let mut b = PendulumState::random(9.81, &mut rng_b);

    let mut ia = Integrator::new();
    let mut ib = Integrator::new();
    ia.advance(&mut a, 0.002, 3000);
    ib.advance(&mut b, 0.002, 3000);

    assert_eq!(a, b);
}

#[test]
fn test_sensitive_to_initial_conditions() {
    let mut a =
        TriplePendulum::from_state(PendulumState::from_angles(9.81, [2.0, 2.0, 2.0], [0.0; 3]));
    let mut b = TriplePendulum::from_state(PendulumState::from_angles(
        9.81,
        [2.0 + 1e-9, 2.0, 2.0],
        [0.0; 3],
    ));

    let mut widest: f64 = 0.0;
    for _ in 0..10_000 {
        a.step(0.002);
        b.step(0.002);
        widest = widest.max((a.positions().tip() - b.positions().tip()).norm());
    }

    assert!(widest > 0.1, "trajectories stayed within {}", widest);
}
