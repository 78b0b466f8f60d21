//! Error types for the fraud engine

use thiserror::Error;

/// Fraud engine error
#[derive(Debug, Error)]
pub enum Error {
    /// Timestamp could not be parsed as ISO-8601
    #[error("Invalid timestamp: {0}")]
    InvalidTimestamp(#[from] chrono::ParseError),

    /// ML probability outside the [0, 1] range
    #[error("Probability {0} outside [0, 1]")]
    ProbabilityOutOfRange(f64),

    /// Probability source failed to produce a value
    #[error("Probability source unavailable: {0}")]
    ModelUnavailable(String),

    /// Invalid configuration
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result type
pub type Result<T> = std::result::Result<T, Error>;
