use crate::error::Result;
use crate::math::Point2;
use crate::metrics::check_paired;

/// Default tolerance for amplitude-bound validation.
pub const AMPLITUDE_TOLERANCE: f64 = 0.01;

/// Default tolerance for the periodicity closure check.
pub const PERIODICITY_TOLERANCE: f64 = 0.1;

/// Default ceiling for the discrete-curvature smoothness check.
pub const MAX_CURVATURE: f64 = 100.0;

fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0_f64, |m, v| m.max(v.abs()))
}

fn max_second_difference(values: &[f64]) -> f64 {
    let mut max = 0.0_f64;
    for i in 2..values.len() {
        let dd = values[i] - 2.0 * values[i - 1] + values[i - 2];
        max = max.max(dd.abs());
    }
    max
}

/// Checks that the sampled peaks match the expected amplitudes.
///
/// Passes when the largest coordinate magnitude on each axis is within
/// `tolerance` of the expected amplitude, in both directions: a sampled
/// peak that exceeds the expected amplitude fails just like one that
/// falls short of it.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or are empty.
pub fn validate_amplitude_bounds(
    x: &[f64],
    y: &[f64],
    expected_x: f64,
    expected_y: f64,
    tolerance: f64,
) -> Result<bool> {
    check_paired(x, y, 1)?;
    let actual_x = max_abs(x);
    let actual_y = max_abs(y);
    Ok((actual_x - expected_x).abs() <= tolerance && (actual_y - expected_y).abs() <= tolerance)
}

/// Checks that a sampled curve closes on itself.
///
/// Compares the distance between the first and last sample against the
/// curve's largest coordinate magnitude; the curve passes when the
/// normalized gap is within `tolerance`. An all-zero curve passes, and
/// fewer than two samples per axis fail without error.
///
/// The `frequency_x` and `frequency_y` arguments are accepted for the
/// caller's bookkeeping but do not influence the result: the check tests
/// geometric closure of the sampled turn, not rational-ratio periodicity
/// over a matched window.
#[must_use]
pub fn validate_periodicity(
    x: &[f64],
    y: &[f64],
    frequency_x: f64,
    frequency_y: f64,
    tolerance: f64,
) -> bool {
    let _ = (frequency_x, frequency_y);
    if x.len() < 2 || y.len() < 2 {
        return false;
    }
    let first = Point2::new(x[0], y[0]);
    let last = Point2::new(x[x.len() - 1], y[y.len() - 1]);
    let gap = (first - last).norm();
    let max_dist = max_abs(x).max(max_abs(y));
    if max_dist > 0.0 {
        gap / max_dist <= tolerance
    } else {
        true
    }
}

/// Checks that the discrete curvature of a sampled curve stays bounded.
///
/// Computes the second difference of each coordinate sequence and passes
/// when the largest magnitude on both axes stays strictly below
/// `max_curvature`.
///
/// # Errors
///
/// Returns an error if the sequences differ in length or hold fewer than
/// three points; no second difference exists below that.
pub fn validate_smoothness(x: &[f64], y: &[f64], max_curvature: f64) -> Result<bool> {
    check_paired(x, y, 3)?;
    Ok(max_second_difference(x) < max_curvature && max_second_difference(y) < max_curvature)
}
