//! Error type shared by every trainer, problem and driver.

use thiserror::Error;

/// Errors raised while configuring or running an optimization.
///
/// Configuration problems surface at construction time. Evaluation
/// failures surface from [`Trainer::train`](crate::trainer::Trainer::train)
/// and abort the run; trainers never retry.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum OptError {
    /// A configuration value is missing or out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// The evaluation function could not score a candidate.
    #[error("evaluation failed: {0}")]
    Evaluation(String),

    /// A candidate does not have the length a problem expects.
    #[error("candidate length mismatch: expected {expected}, got {actual}")]
    LengthMismatch { expected: usize, actual: usize },

    /// An evaluation function returned NaN.
    #[error("evaluation produced a NaN fitness")]
    NonFiniteFitness,

    /// A distribution was asked to estimate from zero samples.
    #[error("cannot estimate a distribution from an empty sample")]
    EmptySample,

    /// A dataset or network shape is malformed.
    #[error("dataset error: {0}")]
    DataSet(String),
}

impl OptError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        OptError::InvalidConfig(msg.into())
    }
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, OptError>;
