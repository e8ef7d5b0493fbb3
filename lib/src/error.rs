//! Error types shared by every stage of the fit/predict pipeline.

use std::path::PathBuf;
use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, LinfitError>;

/// A row of tabular input that could not be turned into a `(feature, target)` pair.
///
/// Loaders recover from this locally: the row is skipped and reported, loading continues.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("line {line}: {reason}")]
pub struct MalformedRow {
    /// 1-based line number in the source file (header included).
    pub line: u64,
    /// Human readable reason the row was rejected.
    pub reason: String,
}

/// Error type for loading, training, evaluation and parameter persistence.
#[derive(Debug, Error)]
pub enum LinfitError {
    /// A single input row failed to parse.
    #[error("malformed row at {0}")]
    MalformedRow(#[from] MalformedRow),

    /// No samples when at least one was required.
    #[error("empty dataset: {0}")]
    EmptyDataset(&'static str),

    /// Paired sequences of different lengths.
    #[error("length mismatch: expected {expected} values, got {got}")]
    LengthMismatch { expected: usize, got: usize },

    /// Min-max normalization of a constant sequence.
    #[error("degenerate range: every value equals {value}, cannot normalize")]
    DegenerateRange { value: f64 },

    /// R² of a constant target.
    #[error("zero variance: target is constant, R² is undefined")]
    ZeroVariance,

    /// Training diverged or a record carries NaN/inf parameters.
    #[error("non-finite parameters: theta0 = {theta0}, theta1 = {theta1}")]
    NonFiniteParameters { theta0: f64, theta1: f64 },

    /// A hyperparameter or option outside its valid domain.
    #[error("invalid hyperparameter: {0}")]
    InvalidHyperparameter(String),

    /// The parameter record does not exist; training has not been run yet.
    #[error("parameter file '{}' not found, run training first", path.display())]
    MissingParameterFile { path: PathBuf },

    /// The parameter record exists but is not a valid record.
    #[error("malformed parameter file '{}': {source}", path.display())]
    MalformedParameterFile {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// User input that is not a finite number.
    #[error("invalid numeric input: '{0}'")]
    InvalidNumericInput(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Json(#[from] serde_json::Error),
}
