//! CLI error types.

use bondrisk_core::RiskError;
use thiserror::Error;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Invalid yield.
    #[error("Invalid yield: {0}. Must be between -10 and 100.")]
    InvalidYield(f64),

    /// Malformed `CUSIP=WEIGHT` pair.
    #[error("Invalid weight argument: {0}. Use CUSIP=WEIGHT.")]
    InvalidWeightArg(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Library error.
    #[error(transparent)]
    Risk(#[from] RiskError),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;
