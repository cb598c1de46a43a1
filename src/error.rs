use thiserror::Error;

/// Top-level error type for the Lissageo kernel.
#[derive(Debug, Error)]
pub enum LissageoError {
    #[error(transparent)]
    Parameter(#[from] ParameterError),

    #[error(transparent)]
    Metrics(#[from] MetricsError),

    #[error(transparent)]
    Report(#[from] ReportError),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

/// Errors related to curve parameter validation.
#[derive(Debug, Error)]
pub enum ParameterError {
    #[error("sample count {count} is below the minimum of {min}")]
    SampleCountTooSmall { count: usize, min: usize },
}

/// Errors related to metric and validation computations.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("insufficient samples: got {got}, need at least {min}")]
    InsufficientSamples { got: usize, min: usize },

    #[error("coordinate sequences differ in length: {x_len} x values vs {y_len} y values")]
    MismatchedLengths { x_len: usize, y_len: usize },
}

/// Errors related to dataset export and report persistence.
#[derive(Debug, Error)]
pub enum ReportError {
    #[error("failed to write {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to serialize report: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Errors related to mapping-table verification.
#[derive(Debug, Error)]
pub enum MappingError {
    #[error("missing data files: {paths:?}")]
    MissingFiles { paths: Vec<String> },

    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },

    #[error("{path} is empty or has no header row")]
    EmptyCsv { path: String },

    #[error("required column missing: {column}")]
    MissingColumn { column: String },

    #[error("non-numeric value {value:?} in column {column}")]
    NonNumeric { column: String, value: String },

    #[error("column {column} is not strictly increasing")]
    NotMonotonic { column: String },

    #[error("repeated v value: zero denominator in df/dv")]
    ZeroDeltaV,

    #[error("discrete derivative df/dv is not positive everywhere")]
    NonPositiveDerivative,

    #[error("correlation {actual:.6} is below the required {threshold}")]
    CorrelationTooLow { actual: f64, threshold: f64 },

    #[error("correlation {actual:.12} deviates from exact linearity")]
    CorrelationNotExact { actual: f64 },
}

/// Convenience type alias for results using [`LissageoError`].
pub type Result<T> = std::result::Result<T, LissageoError>;
