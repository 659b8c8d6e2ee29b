//! Host-side driver: frame stepping, run/pause, sampling, reset

use tracing::{debug, warn};

use crate::config::{Planet, SimulationSettings};
use crate::pendulum::{BobPositions, TriplePendulum};
use crate::sampling::{self, Dimension, Sample, SampleLog, SampleRange};

/// A running pendulum with its sample log
///
/// Single-owner: every method takes `&mut self`, which is the only
/// synchronization the kernel needs.
#[derive(Debug, Clone)]
pub struct Simulation {
    pendulum: TriplePendulum,
    settings: SimulationSettings,
    log: SampleLog,
    running: bool,
    frames: u64,
    diverged: bool,
}

impl Simulation {
    /// Build from settings; seeded when `settings.seed` is set
    pub fn new(settings: SimulationSettings) -> Self {
        let pendulum = TriplePendulum::from_seed(settings.gravity, settings.seed);
        Self::with_pendulum(pendulum, settings)
    }

    /// Build around an existing pendulum; its gravity is kept
    pub fn with_pendulum(pendulum: TriplePendulum, mut settings: SimulationSettings) -> Self {
        settings.gravity = pendulum.gravity();
        Self {
            pendulum,
            settings,
            log: SampleLog::new(),
            running: true,
            frames: 0,
            diverged: false,
        }
    }

    pub fn pendulum(&self) -> &TriplePendulum {
        &self.pendulum
    }

    pub fn settings(&self) -> &SimulationSettings {
        &self.settings
    }

    pub fn log(&self) -> &SampleLog {
        &self.log
    }

    /// Frames advanced while running since construction or the last reset
    pub fn frames(&self) -> u64 {
        self.frames
    }

    /// Advance one frame (`substeps` steps of `dt`) if running
    ///
    /// Returns the positions to draw, which are current whether or not the
    /// simulation moved.
    pub fn advance_frame(&mut self) -> BobPositions {
        if self.running {
            self.pendulum
                .advance(self.settings.dt, self.settings.substeps);
            self.frames += 1;

            if !self.diverged && !self.pendulum.state().is_finite() {
                self.diverged = true;
                warn!(
                    frame = self.frames,
                    dt = self.settings.dt,
                    gravity = self.pendulum.gravity(),
                    "pendulum state is no longer finite"
                );
            }
        }
        self.pendulum.positions()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn set_running(&mut self, running: bool) {
        self.running = running;
    }

    /// Flip between running and paused; returns the new state
    pub fn toggle_running(&mut self) -> bool {
        self.running = !self.running;
        debug!(running = self.running, "toggled");
        self.running
    }

    pub fn set_gravity(&mut self, gravity: f64) {
        debug!(gravity, "gravity changed");
        self.settings.gravity = gravity;
        self.pendulum.set_gravity(gravity);
    }

    pub fn set_planet(&mut self, planet: Planet) {
        debug!(planet = planet.label(), "planet selected");
        self.set_gravity(planet.gravity());
    }

    /// Change step size and substep count for the following frames
    pub fn set_timing(&mut self, dt: f64, substeps: usize) {
        self.settings.dt = dt;
        self.settings.substeps = substeps;
    }

    pub fn set_dimension(&mut self, dimension: Dimension) {
        self.settings.dimension = dimension;
    }

    pub fn set_range(&mut self, range: SampleRange) {
        self.settings.range_min = range.min;
        self.settings.range_max = range.max;
    }

    /// Sample with the configured dimension and range, and log it
    pub fn draw_sample(&mut self) -> Sample {
        self.draw_sample_with(self.settings.dimension, self.settings.range())
    }

    /// Sample with an explicit dimension and range, and log it
    pub fn draw_sample_with(&mut self, dimension: Dimension, range: SampleRange) -> Sample {
        let sample = sampling::sample(&self.pendulum.positions(), dimension, range);
        debug!(%sample, dimension = dimension.as_str(), "sample drawn");
        self.log.push(sample);
        sample
    }

    /// Fresh random angles, zero velocities, empty log
    pub fn reset(&mut self) {
        self.pendulum.reset();
        self.log.clear();
        self.frames = 0;
        self.diverged = false;
        debug!(theta = ?self.pendulum.state().theta, "reset");
    }
}
