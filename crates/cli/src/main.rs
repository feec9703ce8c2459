//! darts — estimate π by throwing darts at a square.
//!
//! Asks for a number of darts, throws them uniformly at `[-1, 1]²`, prints the
//! estimate, and opens a window showing where they landed.
//!
//! Set `RUST_LOG=debug` to see progress records on stderr.

mod config;
mod prompt;
mod report;

use std::{
    error::Error,
    io::{self, Write},
};

use darts_observers::{DartPlot, ProgressLog, ShowConfig};
use darts_solvers::{monte_carlo::pi, source::UniformSquare};
use tracing_subscriber::EnvFilter;

use config::Config;

fn main() -> Result<(), Box<dyn Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let config = Config::default();
    let mut stdout = io::stdout();

    let darts = prompt::prompt_dart_count(&mut io::stdin().lock(), &mut stdout)?;
    if let Some(warning) = report::plot_warning(darts, &config) {
        writeln!(stdout, "{warning}")?;
    }

    let estimate = pi::solve(
        darts,
        UniformSquare::from_entropy(),
        ProgressLog::new(config.progress_interval()),
    )?;
    writeln!(stdout, "{}", report::result_line(&estimate, darts))?;

    if estimate.is_empty() {
        writeln!(stdout, "{}", report::NO_PLOT)?;
        return Ok(());
    }

    if let Err(error) = DartPlot::new(&estimate).show(ShowConfig::new().legend()) {
        tracing::error!(%error, "could not open plot window");
    }

    Ok(())
}
