//! Error types for the Bondrisk library.
//!
//! Every fallible operation in the core and analytics crates returns a
//! [`RiskError`]. Per-row failures in the DV01 batch are collected rather
//! than propagated; everything else aborts the single request.

use thiserror::Error;

use crate::types::{Cusip, Date};

/// A specialized Result type for Bondrisk operations.
pub type RiskResult<T> = Result<T, RiskError>;

/// The main error type for Bondrisk operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum RiskError {
    /// Observation date falls after the bond's maturity date.
    #[error("Invalid date order: observation {observation} is after maturity {maturity}")]
    InvalidDateOrder {
        /// The observation (trade) date.
        observation: Date,
        /// The maturity date.
        maturity: Date,
    },

    /// No reference record exists for a cusip.
    #[error("Missing reference data for cusip {cusip}")]
    MissingReference {
        /// The cusip that could not be joined.
        cusip: Cusip,
    },

    /// No weight was supplied for a cusip present in the series.
    #[error("Missing weight for cusip {cusip}")]
    MissingWeight {
        /// The cusip without a weight.
        cusip: Cusip,
    },

    /// The base price of a finite-difference calculation is zero or non-finite.
    #[error("Degenerate pricing: {reason}")]
    DegeneratePricing {
        /// What made the price unusable.
        reason: String,
    },

    /// Too few observations for a meaningful estimate.
    #[error("Insufficient data: need at least {required}, got {available}")]
    InsufficientData {
        /// Minimum number of observations required.
        required: usize,
        /// Number of observations actually available.
        available: usize,
    },

    /// Confidence level outside the open interval (0, 1).
    #[error("Invalid confidence level: {value} (must be between 0 and 1, exclusive)")]
    InvalidConfidence {
        /// The rejected confidence level.
        value: f64,
    },

    /// A return is NaN or infinite (e.g. the previous portfolio level is zero).
    #[error("Non-finite return at position {index}: {value}")]
    NonFiniteReturn {
        /// Position of the return in its series.
        index: usize,
        /// The offending value.
        value: f64,
    },

    /// Distribution parameters are negative or not finite.
    #[error("Invalid distribution: {reason}")]
    InvalidDistribution {
        /// The rejected parameters.
        reason: String,
    },

    /// A weight could not be parsed or is not a finite number.
    #[error("Invalid weight for cusip {cusip}: {value}")]
    InvalidWeight {
        /// The cusip the weight belongs to.
        cusip: String,
        /// The raw value supplied.
        value: String,
    },

    /// Coupon frequency is not a positive number of payments per year.
    #[error("Invalid coupon frequency: {0}")]
    InvalidFrequency(u32),

    /// Error parsing or constructing a date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// Malformed security identifier.
    #[error("Invalid identifier: {reason}")]
    InvalidIdentifier {
        /// Why the identifier was rejected.
        reason: String,
    },

    /// Configuration value out of range.
    #[error("Invalid configuration: {reason}")]
    InvalidConfig {
        /// The rejected setting.
        reason: String,
    },
}

impl RiskError {
    /// Creates an invalid date error.
    #[must_use]
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates a degenerate pricing error.
    #[must_use]
    pub fn degenerate_pricing(reason: impl Into<String>) -> Self {
        Self::DegeneratePricing {
            reason: reason.into(),
        }
    }

    /// Creates an invalid distribution error.
    #[must_use]
    pub fn invalid_distribution(reason: impl Into<String>) -> Self {
        Self::InvalidDistribution {
            reason: reason.into(),
        }
    }

    /// Creates an invalid identifier error.
    #[must_use]
    pub fn invalid_identifier(reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            reason: reason.into(),
        }
    }

    /// Creates an invalid configuration error.
    #[must_use]
    pub fn invalid_config(reason: impl Into<String>) -> Self {
        Self::InvalidConfig {
            reason: reason.into(),
        }
    }

    /// Creates an invalid weight error.
    #[must_use]
    pub fn invalid_weight(cusip: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidWeight {
            cusip: cusip.into(),
            value: value.into(),
        }
    }

    /// Creates an insufficient data error.
    #[must_use]
    pub fn insufficient_data(required: usize, available: usize) -> Self {
        Self::InsufficientData {
            required,
            available,
        }
    }
}
