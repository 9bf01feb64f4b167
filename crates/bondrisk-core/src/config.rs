//! Configuration for risk computations.

use serde::{Deserialize, Serialize};

use crate::error::{RiskError, RiskResult};

/// Default DV01 finite-difference bump (one yield unit of 0.01).
pub const DEFAULT_YIELD_BUMP: f64 = 0.01;

/// Default redemption amount.
pub const DEFAULT_FACE_VALUE: f64 = 1000.0;

/// Default tolerance for the weights-sum-to-one check.
pub const DEFAULT_WEIGHT_TOLERANCE: f64 = 1e-4;

/// Default minimum number of returns for a VaR estimate.
pub const DEFAULT_MIN_RETURNS: usize = 5;

/// Smallest sample that still gives a sample standard deviation.
pub const MIN_RETURNS_FLOOR: usize = 2;

/// Parameters shared by the DV01, aggregation, and VaR computations.
///
/// Every field has a default, so a partial TOML or JSON document is enough.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RiskConfig {
    /// Yield bump for the centered finite difference.
    pub yield_bump: f64,

    /// Redemption amount used when pricing.
    pub face_value: f64,

    /// Allowed absolute deviation of the weight sum from one.
    pub weight_tolerance: f64,

    /// Minimum number of returns a VaR estimate needs.
    pub min_returns: usize,

    /// Enable parallel processing of the DV01 batch (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum row count to trigger parallel processing.
    pub parallel_threshold: usize,
}

impl Default for RiskConfig {
    fn default() -> Self {
        Self {
            yield_bump: DEFAULT_YIELD_BUMP,
            face_value: DEFAULT_FACE_VALUE,
            weight_tolerance: DEFAULT_WEIGHT_TOLERANCE,
            min_returns: DEFAULT_MIN_RETURNS,
            parallel: true,
            parallel_threshold: 1000,
        }
    }
}

impl RiskConfig {
    /// Creates a config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that never runs the batch in parallel.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the DV01 yield bump.
    #[must_use]
    pub fn with_yield_bump(mut self, bump: f64) -> Self {
        self.yield_bump = bump;
        self
    }

    /// Sets the face value.
    #[must_use]
    pub fn with_face_value(mut self, face_value: f64) -> Self {
        self.face_value = face_value;
        self
    }

    /// Sets the weight tolerance.
    #[must_use]
    pub fn with_weight_tolerance(mut self, tolerance: f64) -> Self {
        self.weight_tolerance = tolerance;
        self
    }

    /// Sets the minimum VaR sample size.
    #[must_use]
    pub fn with_min_returns(mut self, min_returns: usize) -> Self {
        self.min_returns = min_returns;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        self.parallel && count >= self.parallel_threshold
    }

    /// Checks that every setting is usable.
    pub fn validate(&self) -> RiskResult<()> {
        if !(self.yield_bump.is_finite() && self.yield_bump > 0.0) {
            return Err(RiskError::invalid_config(format!(
                "yield_bump must be positive, got {}",
                self.yield_bump
            )));
        }
        if !(self.face_value.is_finite() && self.face_value > 0.0) {
            return Err(RiskError::invalid_config(format!(
                "face_value must be positive, got {}",
                self.face_value
            )));
        }
        if !(self.weight_tolerance.is_finite() && self.weight_tolerance > 0.0) {
            return Err(RiskError::invalid_config(format!(
                "weight_tolerance must be positive, got {}",
                self.weight_tolerance
            )));
        }
        if self.min_returns < MIN_RETURNS_FLOOR {
            return Err(RiskError::invalid_config(format!(
                "min_returns must be at least {MIN_RETURNS_FLOOR}, got {}",
                self.min_returns
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default() {
        let config = RiskConfig::default();
        assert_eq!(config.yield_bump, 0.01);
        assert_eq!(config.face_value, 1000.0);
        assert_eq!(config.weight_tolerance, 1e-4);
        assert_eq!(config.min_returns, 5);
        assert!(config.parallel);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_pattern() {
        let config = RiskConfig::new()
            .with_yield_bump(0.0001)
            .with_face_value(100.0)
            .with_min_returns(10)
            .with_threshold(50);

        assert_eq!(config.yield_bump, 0.0001);
        assert_eq!(config.face_value, 100.0);
        assert_eq!(config.min_returns, 10);
        assert_eq!(config.parallel_threshold, 50);
    }

    #[test]
    fn test_should_parallelize() {
        let config = RiskConfig::new().with_threshold(100);
        assert!(!config.should_parallelize(50));
        assert!(config.should_parallelize(100));
        assert!(!RiskConfig::sequential().should_parallelize(1_000_000));
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(RiskConfig::new().with_yield_bump(0.0).validate().is_err());
        assert!(RiskConfig::new().with_face_value(-1.0).validate().is_err());
        assert!(RiskConfig::new().with_weight_tolerance(f64::NAN).validate().is_err());
        assert!(matches!(
            RiskConfig::new().with_min_returns(1).validate(),
            Err(RiskError::InvalidConfig { .. })
        ));
    }

    #[test]
    fn test_partial_document() {
        let parsed: RiskConfig = serde_json::from_str(r#"{"min_returns": 20}"#).unwrap();
        assert_eq!(parsed.min_returns, 20);
        assert_eq!(parsed.yield_bump, DEFAULT_YIELD_BUMP);
    }
}
