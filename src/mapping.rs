//! Data-quality gate for the Resonant Alphabet mapping tables.
//!
//! Independent of the curve kernel: reads three externally produced CSV
//! tables and checks monotonicity, discrete-derivative positivity, and
//! correlation between the value column and its audio mapping in
//! semitone space.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{LissageoError, MappingError, Result};
use crate::math::stats::{mean, pearson, variance};

/// File name of the letters mapping table.
pub const LETTERS_FILE: &str = "letters_audio_map_AZ_f0-440_R-12.csv";

/// File name of the color mapping table.
pub const COLORS_FILE: &str = "color_audio_linking_map_24hues_f0-440_R-12.csv";

/// File name of the inverse sweep table.
pub const SWEEP_FILE: &str = "inverse_sweep_v_audio_color_f0-440_R-12.csv";

/// Minimum acceptable correlation between `v` and the semitone mapping.
pub const CORRELATION_THRESHOLD: f64 = 0.98;

/// Statistics gathered by a successful mapping verification.
#[derive(Debug, Clone, Serialize)]
pub struct MappingSummary {
    /// Letters `v` and `f` columns are strictly increasing.
    pub letters_monotone: bool,
    /// Every discrete derivative `df/dv` of the letters table is positive.
    pub letters_derivative_positive: bool,
    /// Mean of the letters discrete derivatives.
    pub mean_df_dv: f64,
    /// Population variance of the letters discrete derivatives.
    pub var_df_dv: f64,
    /// Correlation between `v` and the letters semitone mapping.
    pub corr_v_semitones: f64,
    /// Correlation between `v` and the colors semitone mapping.
    pub corr_v_semitones_colors: f64,
}

/// Reads one numeric column from a comma-separated file.
///
/// The first line is taken as the header; fields are split on plain
/// commas without quote handling, which matches the unquoted layout of
/// the mapping tables. Header fields are trimmed before matching and
/// blank lines are skipped.
///
/// # Errors
///
/// Returns an error if the file cannot be read, has no header, lacks the
/// requested column, or holds a non-numeric value in it.
pub fn read_column(path: impl AsRef<Path>, column: &str) -> Result<Vec<f64>> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| MappingError::Io {
        path: path.display().to_string(),
        source,
    })?;
    let mut lines = content.lines();
    let header = lines.next().ok_or_else(|| MappingError::EmptyCsv {
        path: path.display().to_string(),
    })?;
    let index = header
        .split(',')
        .position(|field| field.trim() == column)
        .ok_or_else(|| MappingError::MissingColumn {
            column: column.to_string(),
        })?;

    let mut values = Vec::new();
    for line in lines {
        if line.trim().is_empty() {
            continue;
        }
        let field = line.split(',').nth(index).unwrap_or("").trim();
        let value = field.parse::<f64>().map_err(|_| MappingError::NonNumeric {
            column: column.to_string(),
            value: field.to_string(),
        })?;
        values.push(value);
    }
    Ok(values)
}

/// Reads the first of several candidate column names that exists.
///
/// The mapping tables come in two layouts with different column labels,
/// so callers list the acceptable names in preference order.
fn read_column_any(path: &Path, candidates: &[&str]) -> Result<Vec<f64>> {
    for candidate in candidates {
        match read_column(path, candidate) {
            Ok(values) => return Ok(values),
            Err(LissageoError::Mapping(MappingError::MissingColumn { .. })) => {}
            Err(e) => return Err(e),
        }
    }
    Err(MappingError::MissingColumn {
        column: candidates.join(" or "),
    }
    .into())
}

/// Returns whether the sequence is strictly increasing.
///
/// Sequences with fewer than two elements are trivially monotone.
#[must_use]
pub fn is_strictly_increasing(values: &[f64]) -> bool {
    values.windows(2).all(|w| w[1] > w[0])
}

/// Computes the forward-difference derivatives `df/dv`.
///
/// # Errors
///
/// Returns an error if consecutive `v` values coincide, leaving a zero
/// denominator.
pub fn discrete_derivative(v: &[f64], f: &[f64]) -> Result<Vec<f64>> {
    let n = v.len().min(f.len());
    let mut derivatives = Vec::with_capacity(n.saturating_sub(1));
    for i in 1..n {
        let dv = v[i] - v[i - 1];
        if dv == 0.0 {
            return Err(MappingError::ZeroDeltaV.into());
        }
        derivatives.push((f[i] - f[i - 1]) / dv);
    }
    Ok(derivatives)
}

/// Converts frequencies to semitone offsets relative to the first entry.
///
/// Returns an empty vector when the sequence is empty or its first
/// frequency is not positive, since the offset is undefined there.
#[must_use]
pub fn semitone_offsets(frequencies: &[f64]) -> Vec<f64> {
    match frequencies.first() {
        Some(&f0) if f0 > 0.0 => frequencies.iter().map(|f| 12.0 * (f / f0).log2()).collect(),
        _ => Vec::new(),
    }
}

/// Runs the full mapping verification over the tables in `data_dir`.
///
/// Checks that all three tables are present, that the letters `v` and `f`
/// columns are strictly increasing with positive discrete derivatives,
/// and that `v` correlates with the letters semitone mapping at
/// [`CORRELATION_THRESHOLD`] or better. The colors correlation is
/// recorded, and when the colors table carries a precomputed
/// `Δ semitones` column the stricter exact-linearity gate applies to it.
/// The sweep table must hold readable `v` and `f` columns.
///
/// # Errors
///
/// Returns [`MappingError::MissingFiles`] when any table is absent and
/// the matching [`MappingError`] variant when a check fails.
pub fn verify_mapping(data_dir: impl AsRef<Path>) -> Result<MappingSummary> {
    let dir = data_dir.as_ref();
    let letters = dir.join(LETTERS_FILE);
    let colors = dir.join(COLORS_FILE);
    let sweep = dir.join(SWEEP_FILE);

    let missing: Vec<String> = [&letters, &colors, &sweep]
        .into_iter()
        .filter(|path| !path.exists())
        .map(|path| path.display().to_string())
        .collect();
    if !missing.is_empty() {
        return Err(MappingError::MissingFiles { paths: missing }.into());
    }

    let v = read_column(&letters, "v")?;
    let f = read_column_any(&letters, &["f", "audio f (Hz)"])?;
    if !is_strictly_increasing(&v) {
        return Err(MappingError::NotMonotonic { column: "v".into() }.into());
    }
    if !is_strictly_increasing(&f) {
        return Err(MappingError::NotMonotonic { column: "f".into() }.into());
    }

    let derivatives = discrete_derivative(&v, &f)?;
    if !derivatives.iter().all(|d| *d > 0.0) {
        return Err(MappingError::NonPositiveDerivative.into());
    }

    let semitones = semitone_offsets(&f);
    let corr = pearson(&v, &semitones);
    if corr < CORRELATION_THRESHOLD {
        return Err(MappingError::CorrelationTooLow {
            actual: corr,
            threshold: CORRELATION_THRESHOLD,
        }
        .into());
    }

    let colors_v = read_column_any(&colors, &["v", "v (from λ)"])?;
    let colors_f = read_column_any(&colors, &["f", "audio f (Hz)"])?;
    let colors_corr = pearson(&colors_v, &semitone_offsets(&colors_f));

    match read_column(&colors, "Δ semitones") {
        Ok(delta) => {
            let exact = pearson(&colors_v, &delta);
            if (exact - 1.0).abs() > 1e-9 {
                return Err(MappingError::CorrelationNotExact { actual: exact }.into());
            }
        }
        Err(LissageoError::Mapping(MappingError::MissingColumn { .. })) => {}
        Err(e) => return Err(e),
    }

    read_column_any(&sweep, &["v", "v (from λ)"])?;
    read_column_any(&sweep, &["f", "audio f (Hz)"])?;

    Ok(MappingSummary {
        letters_monotone: true,
        letters_derivative_positive: true,
        mean_df_dv: mean(&derivatives),
        var_df_dv: variance(&derivatives),
        corr_v_semitones: corr,
        corr_v_semitones_colors: colors_corr,
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;
    use std::fmt::Write as _;
    use std::path::PathBuf;

    fn write_table(dir: &Path, file: &str, header: &str, rows: &[(f64, f64)]) -> PathBuf {
        let mut content = String::from(header);
        content.push('\n');
        for (v, f) in rows {
            let _ = writeln!(content, "{v},{f}");
        }
        let path = dir.join(file);
        fs::write(&path, content).unwrap();
        path
    }

    fn geometric_rows(count: usize) -> Vec<(f64, f64)> {
        (0..count)
            .map(|i| {
                let v = i as f64;
                (v, 440.0 * (v / 12.0).exp2())
            })
            .collect()
    }

    fn write_valid_tables(dir: &Path) {
        // The letters table carries a leading label column.
        let mut content = String::from("letter,v,f\n");
        for (i, (v, f)) in geometric_rows(26).iter().enumerate() {
            let letter = char::from(b'A' + u8::try_from(i).unwrap());
            let _ = writeln!(content, "{letter},{v},{f}");
        }
        fs::write(dir.join(LETTERS_FILE), content).unwrap();

        write_table(dir, COLORS_FILE, "v,f", &geometric_rows(24));
        write_table(dir, SWEEP_FILE, "v,f", &geometric_rows(50));
    }

    #[test]
    fn read_column_by_name() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "t.csv", "v,f", &[(0.0, 440.0), (1.0, 466.16)]);
        let v = read_column(&path, "v").unwrap();
        let f = read_column(&path, "f").unwrap();
        assert_eq!(v, vec![0.0, 1.0]);
        assert!((f[1] - 466.16).abs() < TOLERANCE);
    }

    #[test]
    fn read_column_trims_header_fields() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "t.csv", " v , f ", &[(1.0, 2.0)]);
        assert_eq!(read_column(&path, "v").unwrap(), vec![1.0]);
    }

    #[test]
    fn read_column_missing_column() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_table(dir.path(), "t.csv", "v,f", &[(1.0, 2.0)]);
        let r = read_column(&path, "frequency");
        assert!(matches!(
            r,
            Err(LissageoError::Mapping(MappingError::MissingColumn { .. }))
        ));
    }

    #[test]
    fn read_column_non_numeric_value() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "v,f\n1.0,abc\n").unwrap();
        let r = read_column(&path, "f");
        assert!(matches!(
            r,
            Err(LissageoError::Mapping(MappingError::NonNumeric { .. }))
        ));
    }

    #[test]
    fn read_column_empty_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("t.csv");
        fs::write(&path, "").unwrap();
        assert!(read_column(&path, "v").is_err());
    }

    #[test]
    fn strictly_increasing_basics() {
        assert!(is_strictly_increasing(&[1.0, 2.0, 3.0]));
        assert!(!is_strictly_increasing(&[1.0, 2.0, 2.0]));
        assert!(!is_strictly_increasing(&[3.0, 2.0, 1.0]));
        assert!(is_strictly_increasing(&[]));
        assert!(is_strictly_increasing(&[5.0]));
    }

    #[test]
    fn discrete_derivative_forward_differences() {
        let d = discrete_derivative(&[0.0, 1.0, 3.0], &[0.0, 2.0, 8.0]).unwrap();
        assert_eq!(d.len(), 2);
        assert!((d[0] - 2.0).abs() < TOLERANCE);
        assert!((d[1] - 3.0).abs() < TOLERANCE);
    }

    #[test]
    fn discrete_derivative_zero_denominator() {
        let r = discrete_derivative(&[1.0, 1.0], &[2.0, 3.0]);
        assert!(matches!(
            r,
            Err(LissageoError::Mapping(MappingError::ZeroDeltaV))
        ));
    }

    #[test]
    fn semitone_offsets_octave() {
        let offsets = semitone_offsets(&[440.0, 880.0, 1760.0]);
        assert!(offsets[0].abs() < TOLERANCE);
        assert!((offsets[1] - 12.0).abs() < TOLERANCE);
        assert!((offsets[2] - 24.0).abs() < TOLERANCE);
    }

    #[test]
    fn semitone_offsets_degenerate_reference() {
        assert!(semitone_offsets(&[]).is_empty());
        assert!(semitone_offsets(&[0.0, 440.0]).is_empty());
    }

    #[test]
    fn verify_accepts_valid_tables() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_tables(dir.path());
        let summary = verify_mapping(dir.path()).unwrap();
        assert!(summary.letters_monotone);
        assert!(summary.letters_derivative_positive);
        assert!(summary.corr_v_semitones >= CORRELATION_THRESHOLD);
        assert!(summary.mean_df_dv > 0.0);
        assert!(summary.var_df_dv >= 0.0);
    }

    #[test]
    fn verify_reports_missing_files() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_tables(dir.path());
        fs::remove_file(dir.path().join(LETTERS_FILE)).unwrap();
        let r = verify_mapping(dir.path());
        match r {
            Err(LissageoError::Mapping(MappingError::MissingFiles { paths })) => {
                assert_eq!(paths.len(), 1);
                assert!(paths[0].contains("letters_audio_map"));
            }
            other => panic!("expected MissingFiles, got {other:?}"),
        }
    }

    #[test]
    fn verify_rejects_non_monotonic_v() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_tables(dir.path());
        let rows = [(0.0, 440.0), (2.0, 466.0), (1.0, 493.0)];
        let mut content = String::from("letter,v,f\n");
        for (i, (v, f)) in rows.iter().enumerate() {
            let letter = char::from(b'A' + u8::try_from(i).unwrap());
            let _ = writeln!(content, "{letter},{v},{f}");
        }
        fs::write(dir.path().join(LETTERS_FILE), content).unwrap();
        let r = verify_mapping(dir.path());
        assert!(matches!(
            r,
            Err(LissageoError::Mapping(MappingError::NotMonotonic { .. }))
        ));
    }

    #[test]
    fn verify_rejects_weak_correlation() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_tables(dir.path());
        // Monotone but nearly flat with one huge jump at the end, which
        // decouples v from the semitone scale.
        let mut rows: Vec<(f64, f64)> = (0..10)
            .map(|i| (i as f64, 440.0 + i as f64 * 0.001))
            .collect();
        rows.push((10.0, 4.4e8));
        let mut content = String::from("letter,v,f\n");
        for (i, (v, f)) in rows.iter().enumerate() {
            let letter = char::from(b'A' + u8::try_from(i).unwrap());
            let _ = writeln!(content, "{letter},{v},{f}");
        }
        fs::write(dir.path().join(LETTERS_FILE), content).unwrap();
        let r = verify_mapping(dir.path());
        assert!(matches!(
            r,
            Err(LissageoError::Mapping(MappingError::CorrelationTooLow { .. }))
        ));
    }

    #[test]
    fn verify_reads_variant_column_labels() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_tables(dir.path());
        let mut content = String::from("v (from λ),audio f (Hz)\n");
        for (v, f) in geometric_rows(24) {
            let _ = writeln!(content, "{v},{f}");
        }
        fs::write(dir.path().join(COLORS_FILE), content).unwrap();
        let summary = verify_mapping(dir.path()).unwrap();
        assert!(summary.corr_v_semitones_colors > 0.99);
    }

    #[test]
    fn verify_applies_exact_gate_when_delta_present() {
        let dir = tempfile::tempdir().unwrap();
        write_valid_tables(dir.path());
        let mut content = String::from("v,f,Δ semitones\n");
        for (v, f) in geometric_rows(24) {
            let _ = writeln!(content, "{v},{f},{v}");
        }
        fs::write(dir.path().join(COLORS_FILE), content).unwrap();
        assert!(verify_mapping(dir.path()).is_ok());

        let mut broken = String::from("v,f,Δ semitones\n");
        for (i, (v, f)) in geometric_rows(24).iter().enumerate() {
            let delta = if i % 2 == 0 { *v } else { -v };
            let _ = writeln!(broken, "{v},{f},{delta}");
        }
        fs::write(dir.path().join(COLORS_FILE), broken).unwrap();
        let r = verify_mapping(dir.path());
        assert!(matches!(
            r,
            Err(LissageoError::Mapping(MappingError::CorrelationNotExact { .. }))
        ));
    }
}
