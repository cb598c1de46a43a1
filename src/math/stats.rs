//! Scalar statistics over sampled sequences.

/// Computes the arithmetic mean of a sequence.
///
/// Returns `0.0` for an empty slice.
#[must_use]
pub fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

/// Computes the population variance of a sequence.
///
/// Returns `0.0` for an empty slice.
#[must_use]
pub fn variance(values: &[f64]) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Computes the population standard deviation of a sequence.
#[must_use]
pub fn std_dev(values: &[f64]) -> f64 {
    variance(values).sqrt()
}

/// Computes the Pearson correlation coefficient of two paired sequences.
///
/// Returns `0.0` when the sequences differ in length, hold fewer than two
/// samples, or either one has zero variance; the coefficient is undefined
/// in those cases.
#[must_use]
pub fn pearson(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len();
    if n < 2 || y.len() != n {
        return 0.0;
    }
    let mx = mean(x);
    let my = mean(y);
    let mut num = 0.0;
    let mut sx = 0.0;
    let mut sy = 0.0;
    for i in 0..n {
        let dx = x[i] - mx;
        let dy = y[i] - my;
        num += dx * dy;
        sx += dx * dx;
        sy += dy * dy;
    }
    let denom = sx.sqrt() * sy.sqrt();
    if denom == 0.0 {
        return 0.0;
    }
    num / denom
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    #[test]
    fn mean_basic() {
        let m = mean(&[1.0, 2.0, 3.0, 4.0]);
        assert!((m - 2.5).abs() < TOLERANCE);
    }

    #[test]
    fn mean_empty() {
        assert!(mean(&[]).abs() < TOLERANCE);
    }

    #[test]
    fn variance_and_std_dev() {
        let values = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!((variance(&values) - 4.0).abs() < TOLERANCE);
        assert!((std_dev(&values) - 2.0).abs() < TOLERANCE);
    }

    #[test]
    fn variance_constant_sequence() {
        assert!(variance(&[3.0, 3.0, 3.0]).abs() < TOLERANCE);
    }

    #[test]
    fn pearson_perfect_positive() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [2.0, 4.0, 6.0, 8.0];
        assert!((pearson(&x, &y) - 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn pearson_perfect_negative() {
        let x = [1.0, 2.0, 3.0, 4.0];
        let y = [8.0, 6.0, 4.0, 2.0];
        assert!((pearson(&x, &y) + 1.0).abs() < TOLERANCE);
    }

    #[test]
    fn pearson_zero_variance() {
        let x = [1.0, 2.0, 3.0];
        let y = [5.0, 5.0, 5.0];
        assert!(pearson(&x, &y).abs() < TOLERANCE);
    }

    #[test]
    fn pearson_mismatched_lengths() {
        assert!(pearson(&[1.0, 2.0], &[1.0, 2.0, 3.0]).abs() < TOLERANCE);
    }

    #[test]
    fn pearson_too_short() {
        assert!(pearson(&[1.0], &[2.0]).abs() < TOLERANCE);
    }
}
