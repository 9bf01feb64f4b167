//! Historical simulation VaR.

use bondrisk_core::{RiskConfig, RiskResult};

use super::{portfolio_returns, validate_confidence, validate_sample, VarEstimate, VarMethod};
use crate::portfolio::PortfolioSeries;

/// Quantile of an ascending sample, interpolating linearly between order
/// statistics.
///
/// The `p` quantile sits at fractional rank `(n - 1) × p`. Returns `None`
/// for an empty sample.
#[must_use]
pub fn empirical_quantile(sorted: &[f64], p: f64) -> Option<f64> {
    let last = sorted.len().checked_sub(1)?;
    let rank = last as f64 * p.clamp(0.0, 1.0);
    let lower = rank.floor() as usize;
    let upper = (lower + 1).min(last);
    let fraction = rank - lower as f64;
    Some(sorted[lower] + fraction * (sorted[upper] - sorted[lower]))
}

/// Historical VaR: the `(1 - confidence)` quantile of observed returns.
///
/// # Arguments
///
/// * `returns` - Returns as decimals (e.g., -0.01 for -1%)
/// * `confidence` - Confidence level (e.g., 0.95 for 95%)
/// * `config` - Supplies the minimum sample size
///
/// # Errors
///
/// - `RiskError::InvalidConfidence` outside (0, 1)
/// - `RiskError::InsufficientData` below the minimum sample size
/// - `RiskError::NonFiniteReturn` if a return is NaN or infinite
pub fn historical_var(
    returns: &[f64],
    confidence: f64,
    config: &RiskConfig,
) -> RiskResult<VarEstimate> {
    validate_confidence(confidence)?;
    validate_sample(returns, config)?;

    let mut sorted = returns.to_vec();
    sorted.sort_by(f64::total_cmp);

    // validate_sample guarantees a non-empty sample
    let value = empirical_quantile(&sorted, 1.0 - confidence).unwrap_or_default();

    Ok(VarEstimate {
        method: VarMethod::HistoricalSimulation,
        confidence_level: confidence,
        value,
        observations: returns.len(),
    })
}

/// Historical VaR of a portfolio series' simple returns.
///
/// # Errors
///
/// See [`super::portfolio_returns`] and [`historical_var`].
pub fn historical_simulation_var(
    series: &PortfolioSeries,
    confidence: f64,
    config: &RiskConfig,
) -> RiskResult<VarEstimate> {
    let returns = portfolio_returns(series)?;
    historical_var(&returns, confidence, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondrisk_core::RiskError;

    #[test]
    fn test_interpolated_quantile() {
        let returns = [0.03, -0.01, 0.0, -0.02, 0.01];
        let var = historical_var(&returns, 0.8, &RiskConfig::default()).unwrap();
        // rank 0.8 between -0.02 and -0.01
        assert_relative_eq!(var.value, -0.012, epsilon = 1e-12);
        assert_eq!(var.method, VarMethod::HistoricalSimulation);
        assert_eq!(var.observations, 5);
    }

    #[test]
    fn test_quantile_endpoints() {
        let sorted = [-0.02, -0.01, 0.0, 0.01, 0.03];
        assert_relative_eq!(empirical_quantile(&sorted, 0.0).unwrap(), -0.02);
        assert_relative_eq!(empirical_quantile(&sorted, 1.0).unwrap(), 0.03);
        assert_relative_eq!(empirical_quantile(&sorted, 0.5).unwrap(), 0.0);
        assert_eq!(empirical_quantile(&[], 0.5), None);
    }

    #[test]
    fn test_higher_confidence_is_not_less_severe() {
        let returns: Vec<f64> = (0..50).map(|i| (f64::from(i) - 25.0) / 1000.0).collect();
        let config = RiskConfig::default();
        let v90 = historical_var(&returns, 0.90, &config).unwrap();
        let v99 = historical_var(&returns, 0.99, &config).unwrap();
        assert!(v99.value <= v90.value);
    }

    #[test]
    fn test_too_few_returns() {
        let result = historical_var(&[0.01, -0.01], 0.95, &RiskConfig::default());
        assert_eq!(result, Err(RiskError::insufficient_data(5, 2)));
    }

    #[test]
    fn test_invalid_confidence() {
        let returns = [0.01; 10];
        assert!(matches!(
            historical_var(&returns, 1.0, &RiskConfig::default()),
            Err(RiskError::InvalidConfidence { .. })
        ));
    }
}
