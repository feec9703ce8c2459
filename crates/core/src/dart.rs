/// A single point thrown at the square board `[-1, 1] × [-1, 1]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dart {
    pub x: f64,
    pub y: f64,
}

/// Where a dart landed relative to the unit circle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Region {
    /// On or within the unit circle.
    Inside,

    /// Outside the unit circle.
    Outside,
}

impl Dart {
    /// Creates a dart at `(x, y)`.
    #[must_use]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Returns the squared distance from the origin, `x² + y²`.
    #[must_use]
    pub fn distance_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Classifies the dart against the unit circle.
    ///
    /// Darts exactly on the boundary count as [`Region::Inside`].
    #[must_use]
    pub fn region(&self) -> Region {
        if self.distance_squared() <= 1.0 {
            Region::Inside
        } else {
            Region::Outside
        }
    }

    /// Returns the dart as an `[x, y]` pair.
    #[must_use]
    pub fn to_array(self) -> [f64; 2] {
        [self.x, self.y]
    }
}

impl From<[f64; 2]> for Dart {
    fn from([x, y]: [f64; 2]) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Dart {
    fn from((x, y): (f64, f64)) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn origin_is_inside() {
        assert_eq!(Dart::new(0.0, 0.0).region(), Region::Inside);
    }

    #[test]
    fn corner_is_outside() {
        let dart = Dart::new(1.0, 1.0);
        assert_relative_eq!(dart.distance_squared(), 2.0);
        assert_eq!(dart.region(), Region::Outside);
    }

    #[test]
    fn boundary_counts_as_inside() {
        assert_eq!(Dart::new(1.0, 0.0).region(), Region::Inside);
        assert_eq!(Dart::new(0.0, -1.0).region(), Region::Inside);
        assert_eq!(Dart::new(0.6, 0.8).region(), Region::Inside);
    }

    #[test]
    fn just_past_boundary_is_outside() {
        assert_eq!(Dart::new(-1.0, 0.5).region(), Region::Outside);
        assert_eq!(Dart::new(0.9, 0.9).region(), Region::Outside);
    }

    #[test]
    fn converts_from_pairs() {
        assert_eq!(Dart::from([0.25, -0.5]), Dart::new(0.25, -0.5));
        assert_eq!(Dart::from((0.25, -0.5)), Dart::new(0.25, -0.5));
        assert_eq!(Dart::new(0.25, -0.5).to_array(), [0.25, -0.5]);
    }
}
