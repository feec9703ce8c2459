//! Monte Carlo estimation of π by dart throwing.
//!
//! # Algorithm
//!
//! Darts land uniformly on the square `[-1, 1] × [-1, 1]`. A dart is inside
//! the inscribed unit circle when `x² + y² ≤ 1`; points on the boundary count
//! as inside. The circle covers `π / 4` of the square, so
//!
//! ```text
//! π ≈ 4 × inside / trials
//! ```
//!
//! Each trial does constant work, and every dart is kept so the run can be
//! plotted afterwards. Time and memory both grow linearly with the trial count.
//!
//! A non-positive trial count is not an error: it yields [`Estimate::empty`].
//!
//! # Observer Events
//!
//! The estimator emits one [`Event`] per trial after classifying the dart.
//! Observers can return [`Action::StopEarly`] to halt; the estimate then
//! covers only the trials already thrown.

mod action;
mod error;
mod estimate;
mod event;
mod throw;


pub use action::Action;
pub use error::Error;
pub use estimate::{Darts, Estimate, Status};
pub use event::Event;

use darts_core::{DartSource, Observer};

use crate::source::UniformSquare;

use throw::throw_darts;

/// Estimates π from `n` darts drawn from a fresh entropy-seeded source.
///
/// Calling this twice with the same `n` gives statistically independent
/// results. Returns [`Estimate::empty`] when `n ≤ 0`.
#[must_use]
pub fn estimate(n: i64) -> Estimate {
    let Ok(estimate) = throw_darts(n, UniformSquare::from_entropy(), ());
    estimate
}

/// Estimates π from `n` darts drawn from a source seeded with `seed`.
///
/// The same `n` and `seed` always produce the same [`Estimate`].
#[must_use]
pub fn estimate_seeded(n: i64, seed: u64) -> Estimate {
    let Ok(estimate) = throw_darts(n, UniformSquare::seeded(seed), ());
    estimate
}

/// Estimates π from `n` darts drawn from `source`.
///
/// The observer receives an [`Event`] after each trial.
/// See the [module docs](self) for details on observer actions.
///
/// # Errors
///
/// Returns an error if the source fails to produce a dart.
pub fn solve<S, Obs>(n: i64, source: S, observer: Obs) -> Result<Estimate, Error>
where
    S: DartSource,
    Obs: Observer<Event, Action>,
{
    throw_darts(n, source, observer).map_err(Error::dart_source)
}

/// Estimates π from `n` darts drawn from `source` without observation.
///
/// This is a convenience wrapper around [`solve`] that uses a no-op observer.
///
/// # Errors
///
/// Returns an error if the source fails to produce a dart.
pub fn solve_unobserved<S>(n: i64, source: S) -> Result<Estimate, Error>
where
    S: DartSource,
{
    solve(n, source, ())
}
