//! Reusable observers and visualization for darts estimators.
//!
//! # Modules
//!
//! - [`geometry`] — outlines of the board: the unit circle and its square
//! - [`ProgressLog`] — an observer that logs the running estimate via `tracing`
//!
//! # Features
//!
//! - `plot` — Enables [`DartPlot`] for viewing where the darts landed via egui.
//!   This feature adds dependencies on `eframe` and `egui_plot`.

pub mod geometry;
mod progress;

#[cfg(feature = "plot")]
mod plot;

pub use progress::ProgressLog;

#[cfg(feature = "plot")]
pub use plot::{DartPlot, ShowConfig};
