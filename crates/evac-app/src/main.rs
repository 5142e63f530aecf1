use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, ValueEnum};

use evac_app::game_loop;
use evac_app::ipc::{self, AppError};
use evac_core::layout::MapLayout;
use evac_sim::engine::{SimConfig, SimulationEngine};
use evac_sim::scenario;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Scenario {
    Office,
    School,
}

#[derive(Parser, Debug)]
#[command(name = "evac", about = "Run an evacuation drill over JSON lines on stdin/stdout")]
struct Args {
    /// Map layout JSON file; overrides --scenario
    #[arg(long)]
    layout: Option<PathBuf>,

    /// Built-in map to load when no layout file is given
    #[arg(long, value_enum, default_value_t = Scenario::Office)]
    scenario: Scenario,

    /// Random seed for hazard spread
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Countdown in seconds, overriding the map difficulty
    #[arg(long)]
    time_limit: Option<u32>,

    /// Emit a snapshot at least every N ticks (0 = every tick)
    #[arg(long, default_value_t = 16)]
    snapshot_every: u64,
}

fn main() -> ExitCode {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("evac=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "evacuation drill aborted");
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<(), AppError> {
    let layout = match &args.layout {
        Some(path) => MapLayout::from_file(path)?,
        None => match args.scenario {
            Scenario::Office => scenario::training_office(),
            Scenario::School => scenario::school_wing(),
        },
    };
    tracing::info!(map = %layout.name, seed = args.seed, "loaded map");

    let config = SimConfig {
        seed: args.seed,
        time_limit_secs: args.time_limit,
        ..SimConfig::default()
    };
    let engine = SimulationEngine::new(layout, config);

    let handle = game_loop::spawn_game_loop(engine, args.snapshot_every, std::io::stdout())?;
    ipc::forward_commands(std::io::stdin().lock(), &handle.commands)?;
    handle.join()
}
