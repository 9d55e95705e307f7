/*!
 * CFS Simulator - Main Entry Point
 *
 * Loads synthetic process records from a flat file, runs the CFS simulation
 * to completion, and prints per-process and aggregate results.
 */

use anyhow::Context;
use cfs_sim::{load_path, CfsScheduler, SchedulerConfig, SimReport};
use clap::Parser;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::path::PathBuf;

/// Completely Fair Scheduler simulator
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// Process input file: one `id [nice burst arrival]` per line
    input: PathBuf,

    /// Total CPU time divided among contenders per round
    #[arg(long, default_value_t = 10.0)]
    quantum: f64,

    /// Minimum timeslice floor
    #[arg(long, default_value_t = 0.5)]
    granularity: f64,

    /// Clock step while the ready-queue is empty
    #[arg(long = "idle-step", default_value_t = 0.05)]
    idle_step: f64,

    /// Seed for defaulting missing input fields (random when omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit the per-tick scheduling trace
    #[arg(short, long)]
    verbose: bool,

    /// Print the report as JSON instead of text
    #[arg(long)]
    json: bool,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let default_level = if args.verbose { "info" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_entropy(),
    };

    let mut table = load_path(&args.input, &mut rng)
        .with_context(|| format!("failed to load '{}'", args.input.display()))?;
    info!("loaded {} processes from '{}'", table.len(), args.input.display());

    let config = SchedulerConfig::new(args.quantum, args.granularity, args.idle_step)
        .context("invalid scheduler configuration")?
        .verbose(args.verbose);

    let mut scheduler = CfsScheduler::new(config);
    scheduler.run(&mut table);

    let report = SimReport::from_table(&table);
    if args.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{report}");
    }

    Ok(())
}
