use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use init_state::{writer, ParticleCreator, SimulationConfig, StandardCreator};
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Generate a random initial state file for the N-body simulator.
#[derive(Parser, Debug)]
#[command(version, about)]
struct CliArgs {
    /// Positional values in header order:
    /// particle-count step-count step-size width height.
    ///
    /// All-or-nothing: fewer than five values means the preset defaults are
    /// used for all five.
    #[arg(num_args = 0..=5, value_name = "VALUE")]
    params: Vec<String>,

    /// File to write the initial state to.
    #[arg(short, long, default_value = "init_state.txt")]
    output: PathBuf,

    /// Default profile used when fewer than five positional values are given.
    #[arg(long, value_enum, default_value_t = Preset::Standard)]
    preset: Preset,

    /// Seed the particle sampler for reproducible output.
    #[arg(long)]
    seed: Option<u64>,

    /// Write through a temporary file and rename it into place.
    #[arg(long)]
    atomic: bool,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Preset {
    /// 3 particles, 2000 steps.
    Standard,
    /// 3 particles, 100 steps.
    Short,
}

impl Preset {
    fn config(self) -> SimulationConfig {
        match self {
            Self::Standard => SimulationConfig::standard(),
            Self::Short => SimulationConfig::short(),
        }
    }
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = CliArgs::parse();
    let config = SimulationConfig::from_positional_args(&args.params, args.preset.config())?;

    match args.seed {
        Some(seed) => run(&args, &config, StandardCreator::standard_seeded(seed))?,
        None => run(&args, &config, StandardCreator::standard())?,
    }

    info!(
        path = %args.output.display(),
        lines = config.particle_count.saturating_add(1),
        "initial state written"
    );

    Ok(())
}

fn run(
    args: &CliArgs,
    config: &SimulationConfig,
    mut creator: impl ParticleCreator,
) -> color_eyre::Result<()> {
    if args.atomic {
        writer::generate_atomic(&args.output, config, &mut creator)?;
    } else {
        writer::generate(&args.output, config, &mut creator)?;
    }
    Ok(())
}
