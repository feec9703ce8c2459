use darts_core::{Dart, Region};

/// Event emitted by the π estimator after each trial.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The trial number, starting at 1.
    pub trial: u64,

    /// The dart thrown in this trial.
    pub dart: Dart,

    /// Where the dart landed.
    pub region: Region,

    /// Darts inside the circle so far, including this one.
    pub inside_count: u64,
}

impl Event {
    /// Returns the estimate of π over the trials thrown so far.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn running_estimate(&self) -> f64 {
        4.0 * self.inside_count as f64 / self.trial as f64
    }
}
