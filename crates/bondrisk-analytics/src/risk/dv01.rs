//! DV01 by finite-difference re-pricing.
//!
//! ## Formula
//!
//! ```text
//! DV01 = (PV(y - h) - PV(y + h)) / (2 × PV(y) × h)
//! ```
//!
//! A centered difference of the price with respect to yield, divided by the
//! base price. The result is a relative sensitivity (a modified-duration
//! proxy) rather than a currency amount, so bonds of different size can be
//! weighted into one portfolio series.

use bondrisk_core::schedule::num_payments_left;
use bondrisk_core::types::{BondReference, YieldObservation};
use bondrisk_core::{RiskConfig, RiskError, RiskResult};

use crate::pricing::present_value;

/// Computes DV01 for a level-coupon bond.
///
/// # Arguments
///
/// * `ytm` - Periodic yield to maturity as a decimal
/// * `coupon` - Coupon amount paid each period
/// * `num_payments` - Remaining payments
/// * `yield_bump` - Finite-difference bump (0.01 by default)
/// * `face_value` - Redemption amount (1000 by default)
///
/// # Errors
///
/// Returns `RiskError::DegeneratePricing` if the bump is not positive, the
/// base price is zero, or any of the three prices is not finite.
///
/// # Example
///
/// ```rust
/// use bondrisk_analytics::risk::calc_dv01;
///
/// let short = calc_dv01(0.03, 50.0, 1, 0.01, 1000.0).unwrap();
/// let long = calc_dv01(0.03, 50.0, 6, 0.01, 1000.0).unwrap();
/// assert!(long > short);
/// ```
pub fn calc_dv01(
    ytm: f64,
    coupon: f64,
    num_payments: u32,
    yield_bump: f64,
    face_value: f64,
) -> RiskResult<f64> {
    if !(yield_bump.is_finite() && yield_bump > 0.0) {
        return Err(RiskError::degenerate_pricing(format!(
            "yield bump must be positive, got {yield_bump}"
        )));
    }

    let price = present_value(ytm, num_payments, coupon, face_value);
    // Zero up to rounding of the cash flows being summed
    let scale = coupon.abs() * f64::from(num_payments) + face_value.abs();
    if !price.is_finite() || price.abs() <= f64::EPSILON * scale.max(1.0) {
        return Err(RiskError::degenerate_pricing(format!(
            "base price {price} at yield {ytm}"
        )));
    }

    let lower = present_value(ytm - yield_bump, num_payments, coupon, face_value);
    let higher = present_value(ytm + yield_bump, num_payments, coupon, face_value);
    if !lower.is_finite() || !higher.is_finite() {
        return Err(RiskError::degenerate_pricing(format!(
            "bumped prices {lower} / {higher} around yield {ytm}"
        )));
    }

    Ok((lower - higher) / (2.0 * price * yield_bump))
}

/// Computes DV01 with the bump and face value taken from `config`.
pub fn dv01_with_config(
    ytm: f64,
    coupon: f64,
    num_payments: u32,
    config: &RiskConfig,
) -> RiskResult<f64> {
    calc_dv01(ytm, coupon, num_payments, config.yield_bump, config.face_value)
}

/// DV01 of one yield observation given its bond's reference terms.
///
/// The remaining payment count comes from the observation's trade date and
/// the reference maturity and frequency.
pub fn observation_dv01(
    observation: &YieldObservation,
    reference: &BondReference,
    config: &RiskConfig,
) -> RiskResult<f64> {
    let payments = num_payments_left(
        observation.trade_date,
        reference.maturity_date,
        reference.coupon_frequency,
    )?;
    dv01_with_config(observation.yield_value, reference.coupon, payments, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use bondrisk_core::types::{Cusip, Date};

    #[test]
    fn test_single_payment_closed_form() {
        // PV(r) = 1050 / (1 + r), so DV01 = (1/1.02 - 1/1.04) / (2 × 0.01 / 1.03)
        let dv01 = calc_dv01(0.03, 50.0, 1, 0.01, 1000.0).unwrap();
        let expected = (1.0 / 1.02 - 1.0 / 1.04) / (2.0 * 0.01 / 1.03);
        assert_relative_eq!(dv01, expected, epsilon = 1e-12);
        assert_relative_eq!(dv01, 0.97097, epsilon = 1e-4);
    }

    #[test]
    fn test_positive_for_standard_bond() {
        for payments in [1, 2, 5, 10, 30] {
            for ytm in [0.005, 0.02, 0.05, 0.12] {
                let dv01 = calc_dv01(ytm, 40.0, payments, 0.01, 1000.0).unwrap();
                assert!(dv01 > 0.0, "n={payments} ytm={ytm} dv01={dv01}");
            }
        }
    }

    #[test]
    fn test_longer_bond_is_more_sensitive() {
        let one = calc_dv01(0.03, 50.0, 1, 0.01, 1000.0).unwrap();
        let six = calc_dv01(0.03, 50.0, 6, 0.01, 1000.0).unwrap();
        let twenty = calc_dv01(0.03, 50.0, 20, 0.01, 1000.0).unwrap();
        assert!(one < six);
        assert!(six < twenty);
    }

    #[test]
    fn test_no_payments_left_has_no_sensitivity() {
        let dv01 = calc_dv01(0.03, 50.0, 0, 0.01, 1000.0).unwrap();
        assert_relative_eq!(dv01, 0.0);
    }

    #[test]
    fn test_bump_crossing_zero_yield() {
        // ytm - bump = 0 uses the undiscounted limit
        let dv01 = calc_dv01(0.01, 20.0, 5, 0.01, 1000.0).unwrap();
        assert!(dv01.is_finite() && dv01 > 0.0);
    }

    #[test]
    fn test_zero_base_price_is_degenerate() {
        let result = calc_dv01(0.03, 0.0, 5, 0.01, 0.0);
        assert!(matches!(result, Err(RiskError::DegeneratePricing { .. })));

        // A coupon that exactly offsets redemption
        let result = calc_dv01(0.0, -1000.0, 1, 0.01, 1000.0);
        assert!(matches!(result, Err(RiskError::DegeneratePricing { .. })));
    }

    #[test]
    fn test_non_finite_price_is_degenerate() {
        assert!(calc_dv01(-1.0, 50.0, 3, 0.01, 1000.0).is_err());
        // Downward bump reaches a -100% periodic rate
        assert!(calc_dv01(-0.5, 50.0, 3, 0.5, 1000.0).is_err());
        assert!(calc_dv01(f64::NAN, 50.0, 3, 0.01, 1000.0).is_err());
    }

    #[test]
    fn test_invalid_bump() {
        assert!(calc_dv01(0.03, 50.0, 3, 0.0, 1000.0).is_err());
        assert!(calc_dv01(0.03, 50.0, 3, -0.01, 1000.0).is_err());
    }

    #[test]
    fn test_observation_dv01_uses_reference_frequency() {
        let cusip = Cusip::new("AAA").unwrap();
        let trade = Date::from_ymd(2023, 1, 2).unwrap();
        let obs = YieldObservation::new(cusip.clone(), trade, 0.03);
        let annual = BondReference::new(cusip, "Issuer", Date::from_ymd(2026, 6, 1).unwrap(), 50.0);
        let semi = annual
            .clone()
            .with_frequency(bondrisk_core::types::Frequency::SEMI_ANNUAL);

        let config = RiskConfig::default();
        let annual_dv01 = observation_dv01(&obs, &annual, &config).unwrap();
        let semi_dv01 = observation_dv01(&obs, &semi, &config).unwrap();

        assert_relative_eq!(annual_dv01, calc_dv01(0.03, 50.0, 5, 0.01, 1000.0).unwrap());
        assert_relative_eq!(semi_dv01, calc_dv01(0.03, 50.0, 9, 0.01, 1000.0).unwrap());
    }

    #[test]
    fn test_observation_after_maturity() {
        let cusip = Cusip::new("AAA").unwrap();
        let obs = YieldObservation::new(cusip.clone(), Date::from_ymd(2030, 1, 2).unwrap(), 0.03);
        let reference =
            BondReference::new(cusip, "Issuer", Date::from_ymd(2030, 1, 1).unwrap(), 50.0);
        let result = observation_dv01(&obs, &reference, &RiskConfig::default());
        assert!(matches!(result, Err(RiskError::InvalidDateOrder { .. })));
    }
}
