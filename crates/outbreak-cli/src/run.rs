use outbreak_codec::{load_grid, save_grid};
use outbreak_engine::{RunReport, Simulation, TransitionEngine};
use tracing::{debug, info};

use crate::cli::Cli;
use crate::error::Result;

/// Load the input map, simulate, and write the final generation.
pub fn execute(cli: &Cli) -> Result<RunReport> {
    let config = cli.sim_config();
    let grid = load_grid(&cli.input)?;
    info!(
        input = %cli.input.display(),
        size = grid.size(),
        census = %grid.census(),
        "map loaded"
    );

    let mut sim = Simulation::with_config(grid, &config)?;
    info!(
        days = sim.days(),
        engine = sim.engine().name(),
        workers = sim.engine().worker_count(),
        "simulating"
    );
    let report = sim.run();

    save_grid(&sim.into_grid(), &cli.output)?;
    debug!(output = %cli.output.display(), "final map written");
    Ok(report)
}

/// Lines printed on stdout after a successful run.
pub fn summary(report: &RunReport) -> String {
    format!(
        "Time = {:.6}\nCores = {}",
        report.elapsed_secs(),
        report.worker_count
    )
}
