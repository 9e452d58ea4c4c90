//! `shipyard_twin` — command-line driver for the shipyard digital twin.
//!
//! ```text
//! shipyard_twin generate --out data --seed 7
//! shipyard_twin run --shipyard data/work_orders.csv \
//!                   --supply-chain data/supply_chain.csv \
//!                   --events events.json --steps 20 --output out/
//! ```
//!
//! Log verbosity follows `RUST_LOG` (default `info`).

mod cli;
mod config;


use std::fs::File;
use std::io::BufWriter;

use anyhow::{Context, Result, bail};
use clap::Parser;
use sy_data::SynthConfig;
use sy_sim::{NoopObserver, SimBuilder};
use sy_state::{ResourcePool, StatusCounts};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command, GenerateArgs, RunArgs};
use config::AppConfig;

/// Step count used when neither `--steps` nor `sim.max_steps` is given.
const DEFAULT_STEPS: u64 = 20;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    match Cli::parse().command {
        Command::Run(args) => {
            let counts = run(&args)?;
            println!(
                "final status: pending={} in_progress={} delayed={} completed={}",
                counts.pending, counts.in_progress, counts.delayed, counts.completed
            );
        }
        Command::Generate(args) => generate(&args)?,
    }
    Ok(())
}

/// Load inputs, run the configured number of steps, and return the final
/// status counts.
fn run(args: &RunArgs) -> Result<StatusCounts> {
    let mut config = match &args.config {
        Some(path) => AppConfig::load(path)?,
        None       => AppConfig::default(),
    };
    if let Some(steps) = args.steps {
        config.sim.max_steps = Some(steps);
    }
    config.sim.max_steps.get_or_insert(DEFAULT_STEPS);

    let Some(work_orders) = sy_data::load_work_orders_or_log(&args.shipyard) else {
        bail!("no work-order data loaded from {}", args.shipyard.display());
    };
    let Some(supply_chain) = sy_data::load_supply_chain_or_log(&args.supply_chain) else {
        bail!("no supply-chain data loaded from {}", args.supply_chain.display());
    };

    let pool = match &args.pool {
        Some(path) => sy_data::load_pool_csv(path)
            .with_context(|| format!("loading resource pool {}", path.display()))?,
        None => ResourcePool::from_config(&config.pool),
    };
    let agents = sy_agent::agents_by_name(&config.agents, &config.sim.policy)?;

    let mut builder = SimBuilder::new(work_orders, supply_chain)
        .config(config.sim.clone())
        .pool(pool)
        .agents(agents);
    if let Some(path) = &args.events {
        let events = sy_events::load_events_json(path)
            .with_context(|| format!("loading events {}", path.display()))?;
        info!(count = events.len(), "scheduled events loaded");
        for event in events {
            builder = builder.event(event);
        }
    }
    let mut sim = builder.build()?;

    match &args.output {
        Some(dir) => {
            let writer = sy_output::CsvWriter::new(dir)?;
            let mut observer = sy_output::SimOutputObserver::new(writer);
            sim.start(&mut observer);
            if let Some(e) = observer.take_error() {
                return Err(e).context("writing simulation output");
            }
            info!(dir = %dir.display(), "output written");
        }
        None => {
            sim.start(&mut NoopObserver);
        }
    }

    Ok(sim.state.work_orders.status_counts())
}

/// Write a synthetic dataset pair in the loader's CSV format.
fn generate(args: &GenerateArgs) -> Result<()> {
    let synth = SynthConfig {
        work_orders:   args.work_orders,
        supply_events: args.supply_events,
        seed:          args.seed,
        ..SynthConfig::default()
    };
    let (work_orders, supply_chain) = sy_data::generate(&synth)?;

    std::fs::create_dir_all(&args.out)
        .with_context(|| format!("creating {}", args.out.display()))?;
    let wo_path = args.out.join("work_orders.csv");
    let sc_path = args.out.join("supply_chain.csv");
    sy_data::write_work_orders(&work_orders, BufWriter::new(File::create(&wo_path)?))?;
    sy_data::write_supply_chain(&supply_chain, BufWriter::new(File::create(&sc_path)?))?;

    info!(
        work_orders = work_orders.len(),
        supply_chain = supply_chain.len(),
        seed = args.seed,
        dir = %args.out.display(),
        "synthetic dataset written"
    );
    Ok(())
}
