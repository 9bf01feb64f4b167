//! Weights-sum-to-one check.
//!
//! An invalid weight vector is advisory: it does not block any
//! computation, but results produced with it should be labelled.

use bondrisk_core::config::DEFAULT_WEIGHT_TOLERANCE;
use bondrisk_core::types::{checked_sum, WeightEntry, Weights};
use rust_decimal::prelude::FromPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Message shown next to a valid weight vector.
pub const VALID_WEIGHTS_MESSAGE: &str =
    "Weight column is editable: input value and press enter to re-weight";

/// Message shown next to an invalid weight vector.
pub const INVALID_WEIGHTS_MESSAGE: &str = "Weights do not add up to 1 (100%)";

/// Outcome of the weight check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightValidity {
    /// Whether the sum is within tolerance of one.
    pub valid: bool,
    /// Exact decimal sum of the weights, `None` if it overflowed.
    pub sum: Option<Decimal>,
}

impl WeightValidity {
    /// Human-readable status.
    #[must_use]
    pub fn message(&self) -> &'static str {
        if self.valid {
            VALID_WEIGHTS_MESSAGE
        } else {
            INVALID_WEIGHTS_MESSAGE
        }
    }
}

impl std::fmt::Display for WeightValidity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.message())
    }
}

/// Returns true if the weights sum to one within the default tolerance.
#[must_use]
pub fn weights_valid(entries: &[WeightEntry]) -> bool {
    check_weights(entries, DEFAULT_WEIGHT_TOLERANCE).valid
}

/// Checks `|Σ weight - 1| <= tolerance`, summing in decimal arithmetic.
///
/// A tolerance that is negative or not representable marks every vector
/// invalid, as does a sum that overflows `Decimal`.
#[must_use]
pub fn check_weights(entries: &[WeightEntry], tolerance: f64) -> WeightValidity {
    validity(checked_sum(entries.iter().map(|e| e.weight)), tolerance)
}

/// Same check over an already-built weight map.
#[must_use]
pub fn check_weight_map(weights: &Weights, tolerance: f64) -> WeightValidity {
    validity(weights.sum(), tolerance)
}

fn validity(sum: Option<Decimal>, tolerance: f64) -> WeightValidity {
    let deviation = sum.and_then(|s| s.checked_sub(Decimal::ONE)).map(|d| d.abs());
    let valid = Decimal::from_f64(tolerance)
        .filter(|t| !t.is_sign_negative())
        .zip(deviation)
        .is_some_and(|(t, d)| d <= t);

    match sum {
        Some(sum) if !valid => warn!(sum = %sum, tolerance, "weights do not sum to one"),
        None => warn!(tolerance, "weight sum overflowed"),
        _ => {}
    }
    WeightValidity { valid, sum }
}
