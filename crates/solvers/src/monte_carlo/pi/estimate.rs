use darts_core::Dart;

/// Indicates how the estimator terminated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Status {
    /// Threw every requested dart.
    Complete,

    /// Stopped early due to an observer action.
    StoppedByObserver,
}

/// Coordinates of darts that landed in one region, in throw order.
///
/// `x[i]` and `y[i]` belong to the same dart.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Darts {
    pub x: Vec<f64>,
    pub y: Vec<f64>,
}

impl Darts {
    pub(super) fn push(&mut self, dart: Dart) {
        self.x.push(dart.x);
        self.y.push(dart.y);
    }

    /// Returns the number of darts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if no darts landed in this region.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Iterates over the darts in throw order.
    pub fn iter(&self) -> impl Iterator<Item = Dart> + '_ {
        self.x.iter().zip(&self.y).map(|(&x, &y)| Dart::new(x, y))
    }

    /// Returns the darts as `[x, y]` pairs, ready for plotting.
    #[must_use]
    pub fn points(&self) -> Vec<[f64; 2]> {
        self.iter().map(Dart::to_array).collect()
    }
}

/// The result of a π estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct Estimate {
    /// How the estimator terminated.
    pub status: Status,

    /// The estimate of π, or `0.0` when no darts were thrown.
    pub pi: f64,

    /// Number of darts thrown.
    pub trials: u64,

    /// Darts on or within the unit circle.
    pub inside: Darts,

    /// Darts outside the unit circle.
    pub outside: Darts,
}

impl Estimate {
    /// The result of a run with no darts: `π = 0` and no points.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            status: Status::Complete,
            pi: 0.0,
            trials: 0,
            inside: Darts::default(),
            outside: Darts::default(),
        }
    }

    /// Returns the number of darts inside the circle.
    #[must_use]
    pub fn inside_count(&self) -> usize {
        self.inside.len()
    }

    /// Returns the number of darts outside the circle.
    #[must_use]
    pub fn outside_count(&self) -> usize {
        self.outside.len()
    }

    /// Returns `true` if no darts were thrown.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.trials == 0
    }

    /// Returns `|π̂ − π|`.
    #[must_use]
    pub fn absolute_error(&self) -> f64 {
        (self.pi - std::f64::consts::PI).abs()
    }

    /// Splits the estimate into `(pi, inside_x, inside_y, outside_x, outside_y)`.
    #[must_use]
    pub fn into_parts(self) -> (f64, Vec<f64>, Vec<f64>, Vec<f64>, Vec<f64>) {
        (
            self.pi,
            self.inside.x,
            self.inside.y,
            self.outside.x,
            self.outside.y,
        )
    }
}
