//! Console messages around an estimation run.

use darts_solvers::monte_carlo::pi::Estimate;

use crate::config::Config;

pub const PLOT_WARNING: &str =
    "Warning: Plotting a very large number of points might be slow and make the plot dense.";

pub const NO_PLOT: &str = "No points were generated, so no plot will be displayed.";

/// Returns the slow-plot warning when `darts` exceeds the configured threshold.
pub fn plot_warning(darts: i64, config: &Config) -> Option<&'static str> {
    (darts > config.warning_threshold()).then_some(PLOT_WARNING)
}

/// Formats the one-line summary of a run.
///
/// The estimate is printed in shortest round-trip form, always with a
/// fractional part (`4.0`, `3.1416`).
pub fn result_line(estimate: &Estimate, darts: i64) -> String {
    format!(
        "the value of pi is {:?} based on a simulation with {darts} darts.",
        estimate.pi
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    use darts_solvers::monte_carlo::pi;

    #[test]
    fn warns_only_above_threshold() {
        let config = Config::default();
        assert_eq!(plot_warning(50_001, &config), Some(PLOT_WARNING));
        assert_eq!(plot_warning(50_000, &config), None);
        assert_eq!(plot_warning(1, &config), None);
    }

    #[test]
    fn result_line_keeps_fractional_part() {
        let mut estimate = pi::Estimate::empty();
        estimate.pi = 4.0;
        assert_eq!(
            result_line(&estimate, 1),
            "the value of pi is 4.0 based on a simulation with 1 darts."
        );

        estimate.pi = 3.1416;
        assert_eq!(
            result_line(&estimate, 10_000),
            "the value of pi is 3.1416 based on a simulation with 10000 darts."
        );
    }

    #[test]
    fn result_line_for_empty_run() {
        assert_eq!(
            result_line(&pi::Estimate::empty(), 0),
            "the value of pi is 0.0 based on a simulation with 0 darts."
        );
    }
}
