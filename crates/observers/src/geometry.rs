//! Outlines of the dart board.

use std::f64::consts::TAU;

/// Number of samples used to draw a smooth unit circle.
pub const CIRCLE_SAMPLES: usize = 150;

/// Half-width of the plotted area, slightly larger than the board.
pub const AXIS_LIMIT: f64 = 1.1;

/// Returns `samples` points on the unit circle.
///
/// Angles are evenly spaced over `[0, 2π]` with both ends included, so the
/// first and last points coincide and the outline closes.
#[must_use]
pub fn circle_outline(samples: usize) -> Vec<[f64; 2]> {
    match samples {
        0 => Vec::new(),
        1 => vec![[1.0, 0.0]],
        _ => {
            #[allow(clippy::cast_precision_loss)]
            let step = TAU / (samples - 1) as f64;
            (0..samples)
                .map(|i| {
                    #[allow(clippy::cast_precision_loss)]
                    let theta = step * i as f64;
                    [theta.cos(), theta.sin()]
                })
                .collect()
        }
    }
}

/// Returns the corners of the board `[-1, 1]²` as a closed loop.
#[must_use]
pub fn square_outline() -> [[f64; 2]; 5] {
    [[-1.0, -1.0], [1.0, -1.0], [1.0, 1.0], [-1.0, 1.0], [-1.0, -1.0]]
}
