use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::info;
use tracing_subscriber::EnvFilter;

use tripendulum::{Dimension, Planet, SampleRange, Simulation, SimulationSettings};

/// Run a triple pendulum and draw numbers from the tip of the chain
#[derive(Parser, Debug)]
#[command(name = "tripendulum")]
#[command(version, about, long_about = None)]
struct Cli {
    /// JSON settings file; flags below override its values
    #[arg(long)]
    config: Option<std::path::PathBuf>,

    /// Gravity preset
    #[arg(long, value_enum, conflicts_with = "gravity")]
    planet: Option<PlanetArg>,

    /// Gravitational acceleration
    #[arg(long)]
    gravity: Option<f64>,

    /// Integration time step
    #[arg(long)]
    dt: Option<f64>,

    /// RK4 steps per frame
    #[arg(long)]
    substeps: Option<usize>,

    /// Frames to simulate before the first sample
    #[arg(long, default_value_t = 120)]
    warmup: usize,

    /// Number of samples to draw
    #[arg(long, default_value_t = 10)]
    samples: usize,

    /// Frames between two samples
    #[arg(long, default_value_t = 30)]
    every: usize,

    /// Values per sample
    #[arg(long, value_enum)]
    dimension: Option<DimensionArg>,

    /// Lower end of the sample range
    #[arg(long, allow_negative_numbers = true)]
    min: Option<f64>,

    /// Upper end of the sample range
    #[arg(long, allow_negative_numbers = true)]
    max: Option<f64>,

    /// Seed for the initial angles
    #[arg(long)]
    seed: Option<u64>,

    /// Write the sample log to this CSV file
    #[arg(long)]
    csv: Option<String>,

    /// Print samples as JSON lines instead of text
    #[arg(long)]
    json: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum PlanetArg {
    Earth,
    Mars,
    Venus,
}

impl From<PlanetArg> for Planet {
    fn from(p: PlanetArg) -> Self {
        match p {
            PlanetArg::Earth => Planet::Earth,
            PlanetArg::Mars => Planet::Mars,
            PlanetArg::Venus => Planet::Venus,
        }
    }
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum DimensionArg {
    #[value(name = "1d")]
    OneD,
    #[value(name = "2d")]
    TwoD,
}

impl From<DimensionArg> for Dimension {
    fn from(d: DimensionArg) -> Self {
        match d {
            DimensionArg::OneD => Dimension::OneD,
            DimensionArg::TwoD => Dimension::TwoD,
        }
    }
}

impl Cli {
    fn settings(&self) -> Result<SimulationSettings> {
        let mut settings = match &self.config {
            Some(path) => SimulationSettings::from_file(path)
                .with_context(|| format!("loading settings from {}", path.display()))?,
            None => SimulationSettings::default(),
        };

        if let Some(planet) = self.planet {
            settings.gravity = Planet::from(planet).gravity();
        }
        if let Some(gravity) = self.gravity {
            settings.gravity = gravity;
        }
        if let Some(dt) = self.dt {
            settings.dt = dt;
        }
        if let Some(substeps) = self.substeps {
            settings.substeps = substeps;
        }
        if let Some(dimension) = self.dimension {
            settings.dimension = dimension.into();
        }
        if let Some(min) = self.min {
            settings.range_min = min;
        }
        if let Some(max) = self.max {
            settings.range_max = max;
        }
        if self.seed.is_some() {
            settings.seed = self.seed;
        }

        settings.validate()?;
        Ok(settings)
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let settings = cli.settings()?;
    let range = SampleRange::new(settings.range_min, settings.range_max);

    info!(
        gravity = settings.gravity,
        dt = settings.dt,
        substeps = settings.substeps,
        dimension = settings.dimension.as_str(),
        range_min = range.min,
        range_max = range.max,
        "starting pendulum"
    );

    let mut sim = Simulation::new(settings);
    for _ in 0..cli.warmup {
        sim.advance_frame();
    }

    for _ in 0..cli.samples {
        for _ in 0..cli.every {
            sim.advance_frame();
        }
        let sample = sim.draw_sample();
        if cli.json {
            println!("{}", serde_json::to_string(&sample)?);
        } else {
            println!("{}", sample);
        }
    }

    let state = sim.pendulum().state();
    info!(
        frames = sim.frames(),
        energy = state.energy(),
        samples = sim.log().len(),
        "finished"
    );

    if let Some(path) = &cli.csv {
        sim.log()
            .save(path)
            .with_context(|| format!("writing samples to {}", path))?;
        info!(path = %path, "sample log written");
    }

    Ok(())
}
