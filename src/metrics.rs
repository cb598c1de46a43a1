use crate::error::{MetricsError, Result};
use crate::math::Vector2;

/// An axis-aligned bounding box over sampled coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    /// Smallest sampled x coordinate.
    pub x_min: f64,
    /// Largest sampled x coordinate.
    pub x_max: f64,
    /// Smallest sampled y coordinate.
    pub y_min: f64,
    /// Largest sampled y coordinate.
    pub y_max: f64,
}

impl BoundingBox {
    /// Returns the horizontal extent of the box.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.x_max - self.x_min
    }

    /// Returns the vertical extent of the box.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.y_max - self.y_min
    }
}

/// Checks that two coordinate sequences are paired and long enough.
pub(crate) fn check_paired(x: &[f64], y: &[f64], min: usize) -> Result<()> {
    if x.len() != y.len() {
        return Err(MetricsError::MismatchedLengths {
            x_len: x.len(),
            y_len: y.len(),
        }
        .into());
    }
    if x.len() < min {
        return Err(MetricsError::InsufficientSamples { got: x.len(), min }.into());
    }
    Ok(())
}

/// Computes the piecewise-linear arc length of a sampled curve.
///
/// Sums the Euclidean distances between consecutive samples in index
/// order. The polyline sum approaches the true arc length from below as
/// the sample count grows.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or hold fewer than
/// two points.
pub fn arc_length(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y, 2)?;
    let mut total = 0.0;
    for i in 1..x.len() {
        total += Vector2::new(x[i] - x[i - 1], y[i] - y[i - 1]).norm();
    }
    Ok(total)
}

/// Computes the axis-aligned bounding box of a sampled curve.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or are empty.
pub fn bounding_box(x: &[f64], y: &[f64]) -> Result<BoundingBox> {
    check_paired(x, y, 1)?;
    let mut bbox = BoundingBox {
        x_min: x[0],
        x_max: x[0],
        y_min: y[0],
        y_max: y[0],
    };
    for i in 1..x.len() {
        bbox.x_min = bbox.x_min.min(x[i]);
        bbox.x_max = bbox.x_max.max(x[i]);
        bbox.y_min = bbox.y_min.min(y[i]);
        bbox.y_max = bbox.y_max.max(y[i]);
    }
    Ok(bbox)
}

/// Scores the point symmetry of a sampled curve on `[0, 1]`.
///
/// Pairs each sample with the sample at the mirrored index: for a curve
/// traced over a full turn, `x_i + x_{n-1-i}` vanishes exactly when the
/// sequence is anti-symmetric about its midpoint. The mean per-axis
/// deviations are normalized by four times the largest coordinate
/// magnitude, subtracted from one, and clamped to `[0, 1]`. An all-zero
/// curve scores exactly `1.0`.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or are empty.
pub fn symmetry_score(x: &[f64], y: &[f64]) -> Result<f64> {
    check_paired(x, y, 1)?;
    let n = x.len();
    let mut x_dev = 0.0;
    let mut y_dev = 0.0;
    let mut max_abs = 0.0_f64;
    for i in 0..n {
        x_dev += (x[i] + x[n - 1 - i]).abs();
        y_dev += (y[i] + y[n - 1 - i]).abs();
        max_abs = max_abs.max(x[i].abs()).max(y[i].abs());
    }
    if max_abs > 0.0 {
        let x_deviation = x_dev / n as f64;
        let y_deviation = y_dev / n as f64;
        let score = 1.0 - (x_deviation + y_deviation) / (4.0 * max_abs);
        Ok(score.clamp(0.0, 1.0))
    } else {
        Ok(1.0)
    }
}
