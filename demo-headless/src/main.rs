mod render;

use clap::Parser;
use forest_fire_core::{ConfigError, ForestFire, ForestFireConfig, Probability, Schedule};
use std::process::ExitCode;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Forest fire automaton demo with configurable parameters
#[derive(Parser, Debug)]
#[command(name = "forest-fire-demo")]
#[command(about = "Stochastic forest-fire cellular automaton", long_about = None)]
struct Args {
    /// Grid side length in cells
    #[arg(short, long, default_value_t = 512)]
    side: usize,

    /// Probability that an empty cell grows a tree each tick (p)
    #[arg(short, long, default_value_t = 0.006)]
    growth: f32,

    /// Ratio q = p / f between growth and spontaneous ignition
    #[arg(short = 'q', long, default_value_t = 57.0)]
    ratio: f32,

    /// Random seed (OS entropy when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Number of ticks to simulate
    #[arg(short, long, default_value_t = 500)]
    ticks: u64,

    /// Report interval in ticks
    #[arg(short, long, default_value_t = 50)]
    report_interval: u64,

    /// Fraction of cells planted with trees before the first tick
    #[arg(short = 'd', long, default_value_t = 0.0)]
    initial_density: f32,

    /// Process rows in parallel
    #[arg(short, long)]
    parallel: bool,

    /// Print a text frame with every report
    #[arg(short, long)]
    frame: bool,

    /// Frame width in characters
    #[arg(long, default_value_t = 64)]
    frame_size: usize,

    /// Disable ANSI colours in frames
    #[arg(long)]
    no_color: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();

    println!("=== Forest Fire Automaton ===\n");

    let mut sim = match setup(&args) {
        Ok(sim) => sim,
        Err(e) => {
            eprintln!("Invalid configuration: {e}");
            return ExitCode::from(2);
        }
    };

    let rates = sim.rates();
    println!(
        "Grid: {}x{}, p = {}, f = {}, schedule = {:?}",
        sim.width(),
        sim.height(),
        rates.growth,
        rates.ignition,
        sim.schedule()
    );

    println!("\nTick    | Trees   | Burning | Empty   | Density | Tick(ms)");
    println!("--------|---------|---------|---------|---------|---------");
    report(&sim, &args);

    let interval = args.report_interval.max(1);
    let mut peak_burning = 0;
    for _ in 0..args.ticks {
        sim.tick();
        peak_burning = peak_burning.max(sim.stats().burning);
        if sim.generation() % interval == 0 {
            report(&sim, &args);
        }
    }

    let stats = sim.stats();
    println!("\n=== Simulation Complete ===");
    info!(
        "Ran {} generations: final tree density {:.3}, peak burning cells {}, mean tick {:.3} ms",
        stats.generation,
        stats.tree_density(),
        peak_burning,
        sim.mean_tick_ms()
    );

    ExitCode::SUCCESS
}

/// Build the automaton and plant the initial forest
fn setup(args: &Args) -> Result<ForestFire, ConfigError> {
    let density = Probability::try_new("initial_density", args.initial_density)?;
    let mut sim = ForestFire::new(build_config(args)?)?;
    if *density > 0.0 {
        sim.populate(density);
    }
    Ok(sim)
}

fn build_config(args: &Args) -> Result<ForestFireConfig, ConfigError> {
    let schedule = if args.parallel {
        Schedule::Parallel
    } else {
        Schedule::Sequential
    };
    let mut config = ForestFireConfig::from_ratio(args.side, args.growth, args.ratio)?
        .with_schedule(schedule);
    config.seed = args.seed;
    config.validate()?;
    Ok(config)
}

fn report(sim: &ForestFire, args: &Args) {
    let stats = sim.stats();
    println!(
        "{:7} | {:7} | {:7} | {:7} | {:7.3} | {:8.3}",
        stats.generation,
        stats.trees,
        stats.burning,
        stats.empty,
        stats.tree_density(),
        sim.last_tick_ms()
    );
    if args.frame {
        print!(
            "{}",
            render::render_frame(sim.grid(), args.frame_size, !args.no_color)
        );
    }
}
