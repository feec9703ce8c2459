//! Scatter plot of where the darts landed.
//!
//! See [`DartPlot`] and [`ShowConfig`] for usage.

use darts_solvers::monte_carlo::pi::Estimate;
use eframe::egui::{self, Color32};
use egui_plot::{Legend, Line, Plot, PlotBounds, PlotPoint, Points};

use crate::geometry::{AXIS_LIMIT, CIRCLE_SAMPLES, circle_outline, square_outline};

const DART_RADIUS: f32 = 1.5;
const OUTLINE_WIDTH: f32 = 2.0;
const WINDOW_SIZE: f32 = 800.0;

/// Configuration for rendering a [`DartPlot`].
///
/// Construct with [`ShowConfig::new`] and chain builder methods as needed.
///
/// # Example
///
/// ```ignore
/// plot.show(ShowConfig::new().title("Darts").legend())?;
/// ```
pub struct ShowConfig {
    title: Option<String>,
    legend: bool,
    circle_samples: usize,
}

impl ShowConfig {
    /// Creates a new `ShowConfig` with defaults: generated title, no legend,
    /// and a circle drawn from [`CIRCLE_SAMPLES`] points.
    #[must_use]
    pub fn new() -> Self {
        Self {
            title: None,
            legend: false,
            circle_samples: CIRCLE_SAMPLES,
        }
    }

    /// Sets the window title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Enables a legend labeling each series.
    #[must_use]
    pub fn legend(mut self) -> Self {
        self.legend = true;
        self
    }

    /// Sets how many points are used to draw the unit circle.
    #[must_use]
    pub fn circle_samples(mut self, samples: usize) -> Self {
        self.circle_samples = samples;
        self
    }
}

impl Default for ShowConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// The darts of one estimation run, ready to display.
///
/// Inside darts are drawn blue and outside darts red, over the unit circle
/// and the square board. Axes are fixed to `[-1.1, 1.1]` with equal aspect.
///
/// # Example
///
/// ```ignore
/// let estimate = pi::estimate(1_000);
/// DartPlot::new(&estimate).show(ShowConfig::new().legend())?;
/// ```
pub struct DartPlot {
    trials: u64,
    inside: Vec<PlotPoint>,
    outside: Vec<PlotPoint>,
}

impl DartPlot {
    /// Collects the darts of `estimate` for plotting.
    #[must_use]
    pub fn new(estimate: &Estimate) -> Self {
        let collect = |points: Vec<[f64; 2]>| -> Vec<PlotPoint> {
            points.into_iter().map(PlotPoint::from).collect()
        };
        Self {
            trials: estimate.trials,
            inside: collect(estimate.inside.points()),
            outside: collect(estimate.outside.points()),
        }
    }

    /// Returns the window title used when [`ShowConfig::title`] is not set.
    #[must_use]
    pub fn default_title(&self) -> String {
        format!("Monte Carlo Estimation of Pi with {} Darts", self.trials)
    }

    /// Returns the legend label for darts inside the circle.
    #[must_use]
    pub fn inside_label(&self) -> String {
        format!("Inside Circle ({})", self.inside.len())
    }

    /// Returns the legend label for darts outside the circle.
    #[must_use]
    pub fn outside_label(&self) -> String {
        format!("Outside Circle ({})", self.outside.len())
    }

    /// Opens a blocking egui window displaying the darts.
    ///
    /// Blocks until the window is closed by the user.
    ///
    /// # Errors
    ///
    /// Returns an error if the native window cannot be created.
    pub fn show(self, config: ShowConfig) -> Result<(), eframe::Error> {
        let title = config.title.unwrap_or_else(|| self.default_title());
        let options = eframe::NativeOptions {
            viewport: egui::ViewportBuilder::default()
                .with_inner_size([WINDOW_SIZE, WINDOW_SIZE])
                .with_title(&title),
            ..Default::default()
        };

        let app = PlotApp {
            inside_label: self.inside_label(),
            outside_label: self.outside_label(),
            inside: self.inside,
            outside: self.outside,
            circle: circle_outline(config.circle_samples)
                .into_iter()
                .map(PlotPoint::from)
                .collect(),
            square: square_outline().into_iter().map(PlotPoint::from).collect(),
            legend: config.legend,
        };

        eframe::run_native(&title, options, Box::new(move |_cc| Ok(Box::new(app))))
    }
}

/// The fixed view: the board plus a margin on every side.
///
/// Applied every frame, so together with a square view it keeps both axes
/// at `[-AXIS_LIMIT, AXIS_LIMIT]` with equal scale.
fn board_bounds() -> PlotBounds {
    PlotBounds::from_min_max([-AXIS_LIMIT, -AXIS_LIMIT], [AXIS_LIMIT, AXIS_LIMIT])
}

/// The egui [`eframe::App`] that renders the darts.
struct PlotApp {
    inside_label: String,
    outside_label: String,
    inside: Vec<PlotPoint>,
    outside: Vec<PlotPoint>,
    circle: Vec<PlotPoint>,
    square: Vec<PlotPoint>,
    legend: bool,
}

impl eframe::App for PlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            let mut plot = Plot::new("dart_plot")
                .view_aspect(1.0)
                .show_grid(true)
                .allow_drag(false)
                .allow_zoom(false)
                .allow_scroll(false)
                .x_axis_label("X-coordinate")
                .y_axis_label("Y-coordinate");
            if self.legend {
                plot = plot.legend(Legend::default());
            }

            plot.show(ui, |plot_ui| {
                plot_ui.set_plot_bounds(board_bounds());
                plot_ui.points(
                    Points::new(self.inside.as_slice())
                        .color(Color32::BLUE)
                        .radius(DART_RADIUS)
                        .name(&self.inside_label),
                );
                plot_ui.points(
                    Points::new(self.outside.as_slice())
                        .color(Color32::RED)
                        .radius(DART_RADIUS)
                        .name(&self.outside_label),
                );
                plot_ui.line(
                    Line::new(self.circle.as_slice())
                        .color(Color32::GREEN)
                        .width(OUTLINE_WIDTH)
                        .name("Unit Circle Boundary"),
                );
                plot_ui.line(
                    Line::new(self.square.as_slice())
                        .color(Color32::GRAY)
                        .width(OUTLINE_WIDTH)
                        .name("Square Boundary"),
                );
            });
        });
    }
}
