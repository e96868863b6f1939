//! Error types for light-curve analysis
//!
//! Provides a unified error type for all transit-detect crates.
//!
//! Only two kinds of failure matter to callers of the pipeline:
//! validation failures (too few usable samples) and analysis failures
//! (a numeric value escaped the guards inside a stage). A light curve that
//! simply contains no transit is not an error at all.

use thiserror::Error;

/// Core error type for transit detection
#[derive(Error, Debug)]
pub enum Error {
    /// Too few usable samples for the requested operation
    #[error("Insufficient data: expected at least {expected} samples, got {actual}")]
    InsufficientData { expected: usize, actual: usize },

    /// Invalid parameter provided to a function or configuration
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Numeric failure inside a pipeline stage
    #[error("Analysis error in {stage}: {reason}")]
    Analysis { stage: &'static str, reason: String },

    /// IO error (for file operations)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Other errors
    #[error("Other error: {0}")]
    Other(#[from] anyhow::Error),
}

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Create an analysis error for a stage
    pub fn analysis(stage: &'static str, reason: impl Into<String>) -> Self {
        Self::Analysis {
            stage,
            reason: reason.into(),
        }
    }

    /// Create an error for NaN/Inf values produced inside a stage
    pub fn non_finite(stage: &'static str, what: &str) -> Self {
        Self::analysis(stage, format!("{what} is NaN or infinite"))
    }

    /// Whether this is a validation failure (bad or too little input)
    /// rather than a fault inside the analysis.
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::InsufficientData { .. })
    }
}
