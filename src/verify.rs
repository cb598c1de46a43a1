use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::curve::{CurveParams, Lissajous};
use crate::error::{ReportError, Result};
use crate::metrics::{arc_length, bounding_box, symmetry_score};
use crate::validate::{
    validate_amplitude_bounds, validate_smoothness, AMPLITUDE_TOLERANCE, MAX_CURVATURE,
};

/// Outcome of a single verification check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum CheckStatus {
    /// The checked property held.
    #[serde(rename = "PASSED")]
    Passed,
    /// The property was violated or the computation failed.
    #[serde(rename = "FAILED")]
    Failed,
}

/// Detail record for one named verification check.
#[derive(Debug, Clone, Serialize)]
pub struct Check {
    /// Human-readable check name.
    #[serde(rename = "test")]
    pub name: String,
    /// Pass or fail outcome.
    pub status: CheckStatus,
    /// Numeric value recorded by value-producing checks.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<f64>,
    /// Failure description, present on failed checks only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Aggregated outcome of a verification run.
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    /// Number of checks that passed.
    pub tests_passed: u32,
    /// Number of checks that failed.
    pub tests_failed: u32,
    /// Per-check records in execution order.
    pub test_details: Vec<Check>,
}

impl VerificationReport {
    fn new() -> Self {
        Self {
            tests_passed: 0,
            tests_failed: 0,
            test_details: Vec::new(),
        }
    }

    /// Returns `true` when every check passed.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.tests_failed == 0
    }

    fn record(&mut self, name: &str, outcome: CheckResult) {
        match outcome {
            Ok(value) => {
                self.tests_passed += 1;
                self.test_details.push(Check {
                    name: name.to_string(),
                    status: CheckStatus::Passed,
                    value,
                    error: None,
                });
            }
            Err(message) => {
                self.tests_failed += 1;
                self.test_details.push(Check {
                    name: name.to_string(),
                    status: CheckStatus::Failed,
                    value: None,
                    error: Some(message),
                });
            }
        }
    }
}

/// `Ok` carries an optional recorded value; `Err` carries the failure text.
type CheckResult = std::result::Result<Option<f64>, String>;

fn check_basic_generation() -> CheckResult {
    let curve = Lissajous::new(CurveParams::default())
        .map_err(|e| e.to_string())?
        .generate();
    if curve.len() != 1000 {
        return Err(format!("expected 1000 points, got {}", curve.len()));
    }
    Ok(None)
}

fn check_amplitude_validation() -> CheckResult {
    let curve = Lissajous::new(CurveParams {
        amplitude_x: 2.0,
        amplitude_y: 1.5,
        ..CurveParams::default()
    })
    .map_err(|e| e.to_string())?
    .generate();
    let valid = validate_amplitude_bounds(&curve.x, &curve.y, 2.0, 1.5, AMPLITUDE_TOLERANCE)
        .map_err(|e| e.to_string())?;
    if valid {
        Ok(None)
    } else {
        Err("sampled peaks do not match the expected amplitudes".to_string())
    }
}

fn check_smoothness_validation() -> CheckResult {
    let curve = Lissajous::new(CurveParams::default())
        .map_err(|e| e.to_string())?
        .generate();
    let smooth =
        validate_smoothness(&curve.x, &curve.y, MAX_CURVATURE).map_err(|e| e.to_string())?;
    if smooth {
        Ok(None)
    } else {
        Err("discrete curvature exceeds the ceiling".to_string())
    }
}

fn check_arc_length() -> CheckResult {
    let curve = Lissajous::new(CurveParams {
        frequency_x: 1.0,
        frequency_y: 1.0,
        phase_shift: 0.0,
        ..CurveParams::default()
    })
    .map_err(|e| e.to_string())?
    .generate();
    let length = arc_length(&curve.x, &curve.y).map_err(|e| e.to_string())?;
    if length > 5.0 && length < 8.0 {
        Ok(Some(length))
    } else {
        Err(format!("arc length {length} outside the expected (5, 8)"))
    }
}

fn check_bounding_box() -> CheckResult {
    let curve = Lissajous::new(CurveParams {
        amplitude_x: 2.0,
        amplitude_y: 1.5,
        ..CurveParams::default()
    })
    .map_err(|e| e.to_string())?
    .generate();
    let bbox = bounding_box(&curve.x, &curve.y).map_err(|e| e.to_string())?;
    if bbox.x_max.abs() <= 2.01 && bbox.y_max.abs() <= 1.51 {
        Ok(None)
    } else {
        Err(format!(
            "bounding box ({}, {}) exceeds the amplitude bounds",
            bbox.x_max, bbox.y_max
        ))
    }
}

fn check_symmetry_score() -> CheckResult {
    let curve = Lissajous::new(CurveParams::default())
        .map_err(|e| e.to_string())?
        .generate();
    let score = symmetry_score(&curve.x, &curve.y).map_err(|e| e.to_string())?;
    if (0.0..=1.0).contains(&score) {
        Ok(Some(score))
    } else {
        Err(format!("symmetry score {score} outside [0, 1]"))
    }
}

/// Runs the built-in verification suite over the reference configurations.
///
/// Covers the properties the dataset exporter depends on: generation
/// point counts, amplitude and smoothness validation, arc length,
/// bounding box, and symmetry scoring. Failures are recorded in the
/// report, never propagated.
#[must_use]
pub fn run_verification_suite() -> VerificationReport {
    let checks: [(&str, fn() -> CheckResult); 6] = [
        ("Basic Generation", check_basic_generation),
        ("Amplitude Validation", check_amplitude_validation),
        ("Smoothness Validation", check_smoothness_validation),
        ("Arc Length", check_arc_length),
        ("Bounding Box", check_bounding_box),
        ("Symmetry Score", check_symmetry_score),
    ];
    let mut report = VerificationReport::new();
    for (name, check) in checks {
        report.record(name, check());
    }
    report
}

/// Writes a report as pretty-printed JSON at `path`.
///
/// # Errors
///
/// Returns an error if serialization fails or the file cannot be written.
pub fn write_report(path: impl AsRef<Path>, report: &VerificationReport) -> Result<()> {
    let path = path.as_ref();
    let content = serde_json::to_string_pretty(report).map_err(ReportError::from)?;
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };

    // Write to a temp file first, then rename into place.
    let temp_path = path.with_extension("json.tmp");
    fs::write(&temp_path, &content).map_err(io_err)?;
    fs::rename(&temp_path, path).map_err(io_err)?;
    Ok(())
}
