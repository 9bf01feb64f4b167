//! Variance-covariance (delta-normal) VaR.

use bondrisk_core::{RiskConfig, RiskError, RiskResult};
use statrs::distribution::{ContinuousCDF, Normal};

use super::{portfolio_returns, validate_confidence, validate_sample, VarEstimate, VarMethod};
use crate::portfolio::PortfolioSeries;

/// Mean and sample standard deviation (n - 1 denominator).
#[must_use]
pub fn mean_and_sample_std(returns: &[f64]) -> (f64, f64) {
    let n = returns.len() as f64;
    if returns.is_empty() {
        return (f64::NAN, f64::NAN);
    }
    let mean = returns.iter().sum::<f64>() / n;
    if returns.len() < 2 {
        return (mean, f64::NAN);
    }
    let variance = returns.iter().map(|r| (r - mean).powi(2)).sum::<f64>() / (n - 1.0);
    (mean, variance.sqrt())
}

/// `(1 - confidence)` quantile of `Normal(mean, std_dev)`.
///
/// A zero standard deviation collapses the distribution onto its mean.
///
/// # Errors
///
/// - `RiskError::InvalidConfidence` outside (0, 1)
/// - `RiskError::InvalidDistribution` for a negative or non-finite moment
///
/// # Example
///
/// ```rust
/// use bondrisk_analytics::risk::parametric_var_from_moments;
///
/// let var = parametric_var_from_moments(0.0, 0.01, 0.95).unwrap();
/// assert!((var + 0.016449).abs() < 1e-5);
/// ```
pub fn parametric_var_from_moments(mean: f64, std_dev: f64, confidence: f64) -> RiskResult<f64> {
    validate_confidence(confidence)?;
    if !mean.is_finite() || !std_dev.is_finite() || std_dev < 0.0 {
        return Err(RiskError::invalid_distribution(format!(
            "mean {mean}, standard deviation {std_dev}"
        )));
    }
    if std_dev == 0.0 {
        return Ok(mean);
    }

    let normal =
        Normal::new(mean, std_dev).map_err(|e| RiskError::invalid_distribution(e.to_string()))?;
    Ok(normal.inverse_cdf(1.0 - confidence))
}

/// Parametric VaR of a return sample.
///
/// # Errors
///
/// - `RiskError::InvalidConfidence` outside (0, 1)
/// - `RiskError::InsufficientData` below the minimum sample size
/// - `RiskError::NonFiniteReturn` if a return is NaN or infinite
pub fn variance_covariance_var(
    returns: &[f64],
    confidence: f64,
    config: &RiskConfig,
) -> RiskResult<VarEstimate> {
    validate_confidence(confidence)?;
    validate_sample(returns, config)?;

    let (mean, std_dev) = mean_and_sample_std(returns);
    let value = parametric_var_from_moments(mean, std_dev, confidence)?;

    Ok(VarEstimate {
        method: VarMethod::VarianceCovariance,
        confidence_level: confidence,
        value,
        observations: returns.len(),
    })
}

/// Parametric VaR of a portfolio series' simple returns.
///
/// # Errors
///
/// See [`super::portfolio_returns`] and [`variance_covariance_var`].
pub fn variance_covariance_series_var(
    series: &PortfolioSeries,
    confidence: f64,
    config: &RiskConfig,
) -> RiskResult<VarEstimate> {
    let returns = portfolio_returns(series)?;
    variance_covariance_var(&returns, confidence, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_standard_normal_quantile() {
        let var = parametric_var_from_moments(0.0, 0.01, 0.95).unwrap();
        assert_relative_eq!(var, -0.016_448_54, epsilon = 1e-6);

        let var = parametric_var_from_moments(0.0, 0.01, 0.99).unwrap();
        assert_relative_eq!(var, -0.023_263_48, epsilon = 1e-6);
    }

    #[test]
    fn test_mean_shifts_quantile() {
        let centered = parametric_var_from_moments(0.0, 0.02, 0.9).unwrap();
        let shifted = parametric_var_from_moments(0.001, 0.02, 0.9).unwrap();
        assert_relative_eq!(shifted - centered, 0.001, epsilon = 1e-12);
    }

    #[test]
    fn test_sample_moments() {
        let (mean, std) = mean_and_sample_std(&[1.0, 2.0, 3.0, 4.0]);
        assert_relative_eq!(mean, 2.5);
        assert_relative_eq!(std, (5.0_f64 / 3.0).sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_constant_returns_give_mean() {
        let returns = [0.002; 6];
        let var = variance_covariance_var(&returns, 0.95, &RiskConfig::default()).unwrap();
        assert_relative_eq!(var.value, 0.002);
        assert_eq!(var.method, VarMethod::VarianceCovariance);
    }

    #[test]
    fn test_negative_dispersion_rejected() {
        assert!(matches!(
            parametric_var_from_moments(0.0, -0.01, 0.95),
            Err(RiskError::InvalidDistribution { .. })
        ));
    }

    #[test]
    fn test_matches_moments() {
        let returns = [-0.02, -0.01, 0.0, 0.01, 0.03];
        let (mean, std) = mean_and_sample_std(&returns);
        let var = variance_covariance_var(&returns, 0.95, &RiskConfig::default()).unwrap();
        assert_relative_eq!(var.value, mean - 1.644_853_6 * std, epsilon = 1e-8);
    }
}
