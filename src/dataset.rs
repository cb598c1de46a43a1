use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::curve::{CurveParams, Lissajous, SampledCurve};
use crate::error::{ReportError, Result};
use crate::metrics::{arc_length, bounding_box, symmetry_score, BoundingBox};

/// A named curve configuration for dataset export.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveConfig {
    /// Label used in file names and the summary table.
    pub name: String,
    /// Curve parameters.
    pub params: CurveParams,
}

impl CurveConfig {
    /// Creates a named configuration.
    #[must_use]
    pub fn new(name: impl Into<String>, params: CurveParams) -> Self {
        Self {
            name: name.into(),
            params,
        }
    }
}

/// Metrics computed for one exported configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct CurveSummary {
    /// Configuration label.
    pub name: String,
    /// Parameters the curve was generated from.
    pub params: CurveParams,
    /// Piecewise-linear arc length.
    pub arc_length: f64,
    /// Axis-aligned bounding box.
    pub bbox: BoundingBox,
    /// Point-symmetry score on `[0, 1]`.
    pub symmetry_score: f64,
}

/// Returns the six standard export configurations.
///
/// Labels and parameter tuples follow the shipped reference datasets.
#[must_use]
pub fn standard_configurations() -> Vec<CurveConfig> {
    let table = [
        ("circle", 1.0, 1.0, 1.0, 1.0, 0.0),
        ("diagonal", 1.0, 1.0, 1.0, 1.0, FRAC_PI_2),
        ("standard_3_2", 1.0, 1.0, 3.0, 2.0, FRAC_PI_2),
        ("standard_5_4", 1.0, 1.0, 5.0, 4.0, FRAC_PI_2),
        ("asymmetric_3_2", 1.5, 1.0, 3.0, 2.0, 0.0),
        ("inverted_2_3", 1.0, 1.0, 2.0, 3.0, FRAC_PI_4),
    ];
    table
        .iter()
        .map(|&(name, amplitude_x, amplitude_y, frequency_x, frequency_y, phase_shift)| {
            CurveConfig::new(
                name,
                CurveParams {
                    amplitude_x,
                    amplitude_y,
                    frequency_x,
                    frequency_y,
                    phase_shift,
                    sample_count: 1000,
                },
            )
        })
        .collect()
}

/// Exports one CSV table per configuration plus a summary table.
///
/// Each configuration is written to `lissajous_<name>.csv` with a `t,x,y`
/// header and one row per sample; the collected metrics land in
/// `summary.csv`. The directory is created if it does not exist. Returns
/// the summary rows in input order.
///
/// # Errors
///
/// Returns an error if a configuration is invalid, a metric cannot be
/// computed, or a file cannot be written. The batch stops at the first
/// failure.
pub fn export_datasets(dir: impl AsRef<Path>, configs: &[CurveConfig]) -> Result<Vec<CurveSummary>> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir).map_err(|source| ReportError::Io {
        path: dir.display().to_string(),
        source,
    })?;

    let mut summaries = Vec::with_capacity(configs.len());
    for config in configs {
        let generator = Lissajous::new(config.params)?;
        let grid = generator.sample_grid();
        let curve = generator.generate();

        write_curve_table(&dir.join(format!("lissajous_{}.csv", config.name)), &grid, &curve)?;

        summaries.push(CurveSummary {
            name: config.name.clone(),
            params: config.params,
            arc_length: arc_length(&curve.x, &curve.y)?,
            bbox: bounding_box(&curve.x, &curve.y)?,
            symmetry_score: symmetry_score(&curve.x, &curve.y)?,
        });
    }

    write_summary_table(&dir.join("summary.csv"), &summaries)?;
    Ok(summaries)
}

fn write_curve_table(path: &Path, grid: &[f64], curve: &SampledCurve) -> Result<()> {
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    writeln!(out, "t,x,y").map_err(io_err)?;
    for i in 0..curve.len() {
        writeln!(out, "{},{},{}", grid[i], curve.x[i], curve.y[i]).map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    Ok(())
}

fn write_summary_table(path: &Path, summaries: &[CurveSummary]) -> Result<()> {
    let io_err = |source| ReportError::Io {
        path: path.display().to_string(),
        source,
    };
    let mut out = BufWriter::new(File::create(path).map_err(io_err)?);
    writeln!(
        out,
        "name,amplitude_x,amplitude_y,frequency_x,frequency_y,phase_shift,\
         arc_length,x_min,x_max,y_min,y_max,symmetry_score"
    )
    .map_err(io_err)?;
    for s in summaries {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{}",
            s.name,
            s.params.amplitude_x,
            s.params.amplitude_y,
            s.params.frequency_x,
            s.params.frequency_y,
            s.params.phase_shift,
            s.arc_length,
            s.bbox.x_min,
            s.bbox.x_max,
            s.bbox.y_min,
            s.bbox.y_max,
            s.symmetry_score
        )
        .map_err(io_err)?;
    }
    out.flush().map_err(io_err)?;
    Ok(())
}
