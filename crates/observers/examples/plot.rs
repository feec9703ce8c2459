//! Reproducible dart plots.
//!
//! Throws a seeded set of darts and opens the scatter plot, so the same
//! picture can be regenerated.
//!
//! # Usage
//!
//! ```text
//! cargo run --example plot --features plot
//! cargo run --example plot --features plot -- 5000
//! cargo run --example plot --features plot -- 5000 7
//! ```
//!
//! The first argument is the number of darts (default 2000), the second the
//! seed (default 42).

use std::error::Error;

use darts_observers::{DartPlot, ShowConfig};
use darts_solvers::monte_carlo::pi;

fn main() -> Result<(), Box<dyn Error>> {
    let mut args = std::env::args().skip(1);
    let darts = args.next().as_deref().map(str::parse::<i64>).transpose()?.unwrap_or(2_000);
    let seed = args.next().as_deref().map(str::parse::<u64>).transpose()?.unwrap_or(42);

    let estimate = pi::estimate_seeded(darts, seed);
    println!(
        "seed {seed}: π ≈ {} from {} darts (error {:.4})",
        estimate.pi,
        estimate.trials,
        estimate.absolute_error()
    );

    if estimate.is_empty() {
        eprintln!("Nothing to plot for {darts} darts");
        return Ok(());
    }

    DartPlot::new(&estimate).show(
        ShowConfig::new()
            .title(format!("Seeded darts: n={darts}, seed={seed}"))
            .legend(),
    )?;

    Ok(())
}
