//! Combined portfolio risk request.
//!
//! [`assess_portfolio`] runs the DV01 batch, both portfolio aggregations,
//! the yield-change series and the two VaR estimators from one set of
//! inputs, and pairs the result with the weight check.

use bondrisk_core::types::{ReferenceTable, WeightEntry, Weights, YieldObservation};
use bondrisk_core::{RiskConfig, RiskResult};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::portfolio::{
    check_weights, create_portfolio, ChangeSeries, PortfolioSeries, WeightValidity,
};
use crate::risk::{compute_dv01_series, RowFailure, VarComparison, VarEstimate};

/// A computed value paired with the validity of the weights behind it.
///
/// Invalid weights never block the computation; callers decide how to
/// present a result built on them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Assessed<T> {
    /// The computed value.
    pub value: T,
    /// Weight check for the vector the value was computed with.
    pub weights: WeightValidity,
}

impl<T> Assessed<T> {
    /// Pairs a value with a weight check.
    pub fn new(value: T, weights: WeightValidity) -> Self {
        Self { value, weights }
    }

    /// Returns true if the weights sum to one.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.weights.valid
    }

    /// The value, or `None` when the weights are invalid.
    #[must_use]
    pub fn valid_value(&self) -> Option<&T> {
        self.is_valid().then_some(&self.value)
    }

    /// Transforms the value, keeping the weight check.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Assessed<U> {
        Assessed {
            value: f(self.value),
            weights: self.weights,
        }
    }

    /// Borrows the value, keeping the weight check.
    pub fn by_ref(&self) -> Assessed<&T> {
        Assessed {
            value: &self.value,
            weights: self.weights,
        }
    }
}

impl std::fmt::Display for Assessed<&VarEstimate> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid() {
            write!(f, "{}", self.value)
        } else {
            write!(f, "{} VaR:", self.value.method)
        }
    }
}

impl std::fmt::Display for Assessed<VarEstimate> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        std::fmt::Display::fmt(&self.by_ref(), f)
    }
}

impl std::fmt::Display for Assessed<VarComparison> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", Assessed::new(&self.value.historical, self.weights))?;
        write!(f, "{}", Assessed::new(&self.value.parametric, self.weights))
    }
}

/// Everything the portfolio view shows for one weight vector.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRiskReport {
    /// Weighted yield series.
    pub yields: PortfolioSeries,
    /// Weighted DV01 series, `None` when no yield row could be priced.
    pub dv01: Option<PortfolioSeries>,
    /// Yield rows the DV01 batch could not price.
    pub dv01_failures: Vec<RowFailure>,
    /// Daily change of the portfolio yield.
    pub yield_changes: ChangeSeries,
    /// Both VaR estimates of the portfolio yield returns.
    pub var: VarComparison,
}

/// Runs the whole portfolio risk request.
///
/// # Errors
///
/// Fails if the yield series cannot be aggregated (missing weight, no
/// observations) or either VaR estimator fails. Per-row DV01 failures are
/// reported in the result instead, even when every row fails.
pub fn assess_portfolio(
    yields: &[YieldObservation],
    references: &ReferenceTable,
    entries: &[WeightEntry],
    confidence: f64,
    config: &RiskConfig,
) -> RiskResult<Assessed<PortfolioRiskReport>> {
    let validity = check_weights(entries, config.weight_tolerance);
    let weights = Weights::from_entries(entries);

    let yield_series = create_portfolio(yields, &weights)?;
    let var = VarComparison::from_series(&yield_series, confidence, config)?;

    let batch = compute_dv01_series(yields, references, config);
    let dv01 = if batch.observations.is_empty() {
        warn!(
            failures = batch.failures.len(),
            "no yield row could be priced, DV01 series omitted"
        );
        None
    } else {
        Some(create_portfolio(&batch.observations, &weights)?)
    };

    debug!(
        dates = yield_series.len(),
        weights_valid = validity.valid,
        dv01_failures = batch.failures.len(),
        "portfolio assessed"
    );

    Ok(Assessed::new(
        PortfolioRiskReport {
            yield_changes: ChangeSeries::from_series(&yield_series),
            yields: yield_series,
            dv01,
            dv01_failures: batch.failures,
            var,
        },
        validity,
    ))
}
