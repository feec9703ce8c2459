use darts_core::Observer;
use darts_solvers::monte_carlo::pi;

/// An observer that logs the running π estimate at a fixed trial interval.
///
/// Records are emitted at `debug` level under this crate's target, so they
/// are silent unless the subscriber enables them (e.g. `RUST_LOG=debug`).
/// Never stops the estimator.
#[derive(Debug, Clone)]
pub struct ProgressLog {
    interval: u64,
    reports: u64,
}

impl ProgressLog {
    /// Creates an observer that logs every `interval` trials.
    ///
    /// An interval of zero is treated as one.
    #[must_use]
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            reports: 0,
        }
    }

    /// Returns the number of progress records emitted so far.
    #[must_use]
    pub fn reports(&self) -> u64 {
        self.reports
    }
}

impl Observer<pi::Event, pi::Action> for ProgressLog {
    fn observe(&mut self, event: &pi::Event) -> Option<pi::Action> {
        if event.trial % self.interval == 0 {
            self.reports += 1;
            tracing::debug!(
                trial = event.trial,
                inside = event.inside_count,
                estimate = event.running_estimate(),
                "progress"
            );
        }
        None
    }
}

/// Allows `&mut ProgressLog` to be passed to estimators that take an observer
/// by value, so [`ProgressLog::reports`] can be read after the run.
impl Observer<pi::Event, pi::Action> for &mut ProgressLog {
    fn observe(&mut self, event: &pi::Event) -> Option<pi::Action> {
        (*self).observe(event)
    }
}
