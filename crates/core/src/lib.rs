//! Core traits and types for Monte Carlo dart throwing.
//!
//! This crate defines the shared abstractions that estimators, observers, and
//! front ends build on:
//!
//! - [`Dart`] — a single sampled point on the board
//! - [`Region`] — where a dart landed relative to the unit circle
//! - [`DartSource`] — produces darts, usually from a random number generator
//! - [`Observer`] — receives estimator events and optionally returns control actions

mod dart;
mod observer;
mod source;

pub use dart::{Dart, Region};
pub use observer::Observer;
pub use source::DartSource;
