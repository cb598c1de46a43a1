use std::f64::consts::{FRAC_PI_2, TAU};

use crate::error::{ParameterError, Result};
use crate::math::Point2;

/// Parameters defining a Lissajous figure.
///
/// The figure is traced by two perpendicular sinusoidal oscillations:
///
/// `x(t) = amplitude_x * sin(frequency_x * t + phase_shift)`
/// `y(t) = amplitude_y * sin(frequency_y * t)`
///
/// Zero or negative amplitudes and frequencies are allowed: a zero
/// amplitude collapses one axis to a constant and a negative frequency
/// mirrors the figure. Only the sample count is constrained, at
/// construction of a [`Lissajous`] generator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CurveParams {
    /// Amplitude of the x oscillation.
    pub amplitude_x: f64,
    /// Amplitude of the y oscillation.
    pub amplitude_y: f64,
    /// Angular frequency of the x oscillation.
    pub frequency_x: f64,
    /// Angular frequency of the y oscillation.
    pub frequency_y: f64,
    /// Phase shift of the x oscillation in radians.
    pub phase_shift: f64,
    /// Number of samples over one full parameter turn.
    pub sample_count: usize,
}

impl Default for CurveParams {
    /// The classic 3:2 figure at unit amplitude and quarter-turn phase,
    /// sampled at 1000 points.
    fn default() -> Self {
        Self {
            amplitude_x: 1.0,
            amplitude_y: 1.0,
            frequency_x: 3.0,
            frequency_y: 2.0,
            phase_shift: FRAC_PI_2,
            sample_count: 1000,
        }
    }
}

/// A sampled planar curve: paired x and y coordinate sequences.
///
/// Both sequences always have the same length.
#[derive(Debug, Clone, PartialEq)]
pub struct SampledCurve {
    /// Sampled x coordinates.
    pub x: Vec<f64>,
    /// Sampled y coordinates.
    pub y: Vec<f64>,
}

impl SampledCurve {
    /// Returns the number of sampled points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.x.len()
    }

    /// Returns `true` if the curve holds no samples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// Returns sample `i` as a 2D point.
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    #[must_use]
    pub fn point(&self, i: usize) -> Point2 {
        Point2::new(self.x[i], self.y[i])
    }
}

/// Generates Lissajous figures from an immutable parameter set.
///
/// Generation is a pure function of the stored parameters: repeated calls
/// yield bit-identical coordinate sequences.
#[derive(Debug, Clone)]
pub struct Lissajous {
    params: CurveParams,
}

impl Lissajous {
    /// Minimum sample count accepted by the generator.
    pub const MIN_SAMPLES: usize = 2;

    /// Creates a generator from the given parameters.
    ///
    /// # Errors
    ///
    /// Returns an error if `params.sample_count` is below
    /// [`Self::MIN_SAMPLES`]; every other parameter combination is
    /// accepted.
    pub fn new(params: CurveParams) -> Result<Self> {
        if params.sample_count < Self::MIN_SAMPLES {
            return Err(ParameterError::SampleCountTooSmall {
                count: params.sample_count,
                min: Self::MIN_SAMPLES,
            }
            .into());
        }
        Ok(Self { params })
    }

    /// Returns the stored parameters.
    #[must_use]
    pub fn params(&self) -> &CurveParams {
        &self.params
    }

    /// Returns the parameter grid: `sample_count` values evenly spaced over
    /// `[0, 2π]` with both endpoints included.
    ///
    /// The first value is exactly `0.0` and the last exactly `2π`.
    #[must_use]
    pub fn sample_grid(&self) -> Vec<f64> {
        let last = (self.params.sample_count - 1) as f64;
        (0..self.params.sample_count)
            .map(|i| i as f64 / last * TAU)
            .collect()
    }

    /// Evaluates the figure at parameter `t`.
    #[must_use]
    pub fn evaluate(&self, t: f64) -> Point2 {
        let p = &self.params;
        Point2::new(
            p.amplitude_x * (p.frequency_x * t + p.phase_shift).sin(),
            p.amplitude_y * (p.frequency_y * t).sin(),
        )
    }

    /// Samples the figure over the full parameter grid, in grid order.
    #[must_use]
    pub fn generate(&self) -> SampledCurve {
        let mut x = Vec::with_capacity(self.params.sample_count);
        let mut y = Vec::with_capacity(self.params.sample_count);
        for t in self.sample_grid() {
            let point = self.evaluate(t);
            x.push(point.x);
            y.push(point.y);
        }
        SampledCurve { x, y }
    }
}
