//! Monte Carlo estimators for the darts framework.
//!
//! # Modules
//!
//! - [`monte_carlo`] — estimators that throw darts and count where they land
//! - [`source`] — random [`DartSource`] implementations
//!
//! [`DartSource`]: darts_core::DartSource

pub mod monte_carlo;
pub mod source;
