use clap::Parser;
use std::path::PathBuf;

use outbreak_engine::{SimConfig, Strategy};

pub const DEFAULT_OUTPUT: &str = "final_map.txt";

#[derive(Parser, Debug)]
#[command(
    name = "outbreak",
    version,
    about = "Simulate an infection spreading across a square grid map and write the final generation."
)]
pub struct Cli {
    /// Grid map to load (`N M` header followed by H/Z/. cells).
    #[arg(value_name = "INPUT")]
    pub input: PathBuf,

    /// Number of days to simulate.
    #[arg(value_name = "DAYS")]
    pub days: u64,

    /// Worker threads for the parallel engine.
    /// Defaults to the number of available logical cores.
    #[arg(value_name = "WORKERS")]
    pub workers: Option<usize>,

    /// Where to write the final generation.
    #[arg(short, long, value_name = "PATH", default_value = DEFAULT_OUTPUT)]
    pub output: PathBuf,

    /// Run the single-threaded engine instead of the worker pool.
    #[arg(long, conflicts_with = "workers")]
    pub sequential: bool,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a specified file in addition to the console output
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

impl Cli {
    /// Simulation settings implied by the arguments.
    pub fn sim_config(&self) -> SimConfig {
        SimConfig {
            days: self.days,
            strategy: if self.sequential {
                Strategy::Sequential
            } else {
                Strategy::Parallel
            },
            worker_count: self.workers,
        }
    }
}
