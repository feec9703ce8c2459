//! Monte Carlo estimators.
//!
//! Each estimator draws independent darts from a [`DartSource`], classifies
//! them, and turns the counts into an estimate of some quantity.
//!
//! [`DartSource`]: darts_core::DartSource

pub mod pi;
