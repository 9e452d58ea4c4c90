use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(version, about = "Shipyard supply-chain digital twin")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Load datasets and run the simulation
    Run(RunArgs),
    /// Write a seeded synthetic dataset pair
    Generate(GenerateArgs),
}

#[derive(Args, Debug, Clone)]
pub struct RunArgs {
    /// Work-order CSV
    #[arg(long)]
    pub shipyard: PathBuf,

    /// Supply-chain CSV
    #[arg(long)]
    pub supply_chain: PathBuf,

    /// JSON array of scheduled events
    #[arg(long)]
    pub events: Option<PathBuf>,

    /// JSON run configuration
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Resource pool CSV (unit_id,kind); overrides the config's pool counts
    #[arg(long)]
    pub pool: Option<PathBuf>,

    /// Number of steps; overrides `sim.max_steps`
    #[arg(short = 'n', long)]
    pub steps: Option<u64>,

    /// Directory for work_orders.csv and step_summaries.csv
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Directory to write work_orders.csv and supply_chain.csv into
    #[arg(short, long, default_value = "data")]
    pub out: PathBuf,

    #[arg(long, default_value_t = 100)]
    pub work_orders: usize,

    #[arg(long, default_value_t = 10)]
    pub supply_events: usize,

    #[arg(long, default_value_t = 42)]
    pub seed: u64,
}
