//! Error types for record parsing and report building.

use std::num::ParseIntError;

use thiserror::Error;

/// Errors raised while reading a duration literal such as `1h30m`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DurationError {
    #[error("empty duration")]
    Empty,

    #[error("invalid duration {0:?}")]
    Invalid(String),

    #[error("missing unit in duration {0:?}")]
    MissingUnit(String),

    #[error("unknown unit {unit:?} in duration {input:?}")]
    UnknownUnit { unit: String, input: String },

    #[error("duration {0:?} out of range")]
    Overflow(String),
}

/// Errors produced by the parser, the report builders and the config layer.
#[derive(Debug, Error)]
pub enum MetricsError {
    #[error("invalid record format: expected {expected} fields, got {found}")]
    FieldCount { expected: usize, found: usize },

    #[error("failed to parse step count: {0}")]
    Steps(#[from] ParseIntError),

    #[error("failed to parse activity duration: {0}")]
    Duration(#[from] DurationError),

    #[error("unknown activity type: {0}")]
    UnknownActivity(String),

    #[error("step count must be positive, got {0}")]
    NonPositiveSteps(i64),

    #[error("configuration error: {0}")]
    Config(String),
}

/// Result type alias for metrics operations.
pub type MetricsResult<T> = Result<T, MetricsError>;
