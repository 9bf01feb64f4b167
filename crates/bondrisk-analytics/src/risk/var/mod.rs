//! Value at Risk of a portfolio series.
//!
//! Both estimators work on simple returns of the weighted `Portfolio`
//! column and report the `(1 - c)` quantile of the return distribution.
//! The value is a return, so a loss is negative.

mod historical;
mod parametric;

pub use historical::*;
pub use parametric::*;

use bondrisk_core::config::MIN_RETURNS_FLOOR;
use bondrisk_core::{RiskConfig, RiskError, RiskResult};
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::portfolio::PortfolioSeries;

/// VaR calculation method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum VarMethod {
    /// Empirical quantile of observed returns
    HistoricalSimulation,
    /// Normal quantile from the sample mean and standard deviation
    VarianceCovariance,
}

impl VarMethod {
    /// Display label of the method.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::HistoricalSimulation => "Historical Simulation",
            Self::VarianceCovariance => "Variance-Covariance",
        }
    }
}

impl std::fmt::Display for VarMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// A single VaR estimate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarEstimate {
    /// Method used for calculation
    pub method: VarMethod,
    /// Confidence level (e.g., 0.95 for 95%)
    pub confidence_level: f64,
    /// Return quantile; negative values are losses
    pub value: f64,
    /// Number of returns the estimate was computed from
    pub observations: usize,
}

impl std::fmt::Display for VarEstimate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} VaR: {:.2}%", self.method, self.value * 100.0)
    }
}

/// Both estimators at one confidence level, reported side by side.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct VarComparison {
    /// Historical simulation estimate
    pub historical: VarEstimate,
    /// Variance-covariance estimate
    pub parametric: VarEstimate,
}

impl VarComparison {
    /// Runs both estimators on the same returns.
    ///
    /// # Errors
    ///
    /// Fails if either estimator fails.
    pub fn from_returns(returns: &[f64], confidence: f64, config: &RiskConfig) -> RiskResult<Self> {
        Ok(Self {
            historical: historical_var(returns, confidence, config)?,
            parametric: variance_covariance_var(returns, confidence, config)?,
        })
    }

    /// Runs both estimators on a portfolio series.
    ///
    /// # Errors
    ///
    /// See [`portfolio_returns`] and [`VarComparison::from_returns`].
    pub fn from_series(
        series: &PortfolioSeries,
        confidence: f64,
        config: &RiskConfig,
    ) -> RiskResult<Self> {
        let returns = portfolio_returns(series)?;
        Self::from_returns(&returns, confidence, config)
    }
}

impl std::fmt::Display for VarComparison {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "{}", self.historical)?;
        write!(f, "{}", self.parametric)
    }
}

/// Rejects confidence levels outside the open interval (0, 1).
///
/// # Errors
///
/// Returns `RiskError::InvalidConfidence`.
pub fn validate_confidence(confidence: f64) -> RiskResult<()> {
    if confidence > 0.0 && confidence < 1.0 {
        Ok(())
    } else {
        Err(RiskError::InvalidConfidence { value: confidence })
    }
}

/// Checks a return sample against the configured minimum size.
pub(crate) fn validate_sample(returns: &[f64], config: &RiskConfig) -> RiskResult<()> {
    let required = config.min_returns.max(MIN_RETURNS_FLOOR);
    if returns.len() < required {
        return Err(RiskError::insufficient_data(required, returns.len()));
    }
    if let Some((index, &value)) = returns.iter().enumerate().find(|(_, r)| !r.is_finite()) {
        return Err(RiskError::NonFiniteReturn { index, value });
    }
    Ok(())
}

/// Simple returns of a level series: `levels[t] / levels[t-1] - 1`.
///
/// # Errors
///
/// Returns `RiskError::NonFiniteReturn` if any return is NaN or infinite,
/// typically because the previous level is zero.
pub fn simple_returns(levels: &[f64]) -> RiskResult<Vec<f64>> {
    levels
        .windows(2)
        .enumerate()
        .map(|(index, pair)| {
            let value = pair[1] / pair[0] - 1.0;
            if value.is_finite() {
                Ok(value)
            } else {
                Err(RiskError::NonFiniteReturn { index, value })
            }
        })
        .collect()
}

/// Simple returns of the `Portfolio` column, one per date after the first.
///
/// # Errors
///
/// See [`simple_returns`].
pub fn portfolio_returns(series: &PortfolioSeries) -> RiskResult<Vec<f64>> {
    simple_returns(series.portfolio()).map_err(|e| {
        if let RiskError::NonFiniteReturn { index, .. } = &e {
            if let Some(date) = series.dates().get(index + 1) {
                warn!(date = %date, error = %e, "portfolio return is not finite");
            }
        }
        e
    })
}
