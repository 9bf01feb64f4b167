//! Level-coupon bond present value.
//!
//! ## Formula
//!
//! ```text
//! PV = C × (1 - (1 + r)^-n) / r + F × (1 + r)^-n
//! ```
//!
//! where `r` is the periodic yield, `n` the remaining payments, `C` the
//! coupon paid each period and `F` the redemption amount. At `r = 0` the
//! annuity factor is `n`.

/// Rates closer to zero than this use the undiscounted limit.
const ZERO_RATE_EPSILON: f64 = 1e-12;

/// Present value of `num_payments` coupons of `coupon` plus `face_value` at the end.
///
/// The result is not checked; a periodic rate at or below -100% yields a
/// non-finite value which callers must reject.
///
/// # Example
///
/// ```rust
/// use bondrisk_analytics::pricing::present_value;
///
/// // A bond yielding its coupon rate prices at par.
/// let pv = present_value(0.05, 10, 50.0, 1000.0);
/// assert!((pv - 1000.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn present_value(rate: f64, num_payments: u32, coupon: f64, face_value: f64) -> f64 {
    let n = f64::from(num_payments);

    if rate.abs() < ZERO_RATE_EPSILON {
        return coupon * n + face_value;
    }

    let discount = (1.0 + rate).powf(-n);
    coupon * (1.0 - discount) / rate + face_value * discount
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_no_payments_is_face() {
        assert_relative_eq!(present_value(0.04, 0, 50.0, 1000.0), 1000.0);
    }

    #[test]
    fn test_single_payment() {
        // (50 + 1000) / 1.03
        assert_relative_eq!(
            present_value(0.03, 1, 50.0, 1000.0),
            1050.0 / 1.03,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_rate_is_undiscounted() {
        assert_relative_eq!(present_value(0.0, 5, 50.0, 1000.0), 1250.0);
    }

    #[test]
    fn test_discount_premium() {
        assert!(present_value(0.06, 10, 50.0, 1000.0) < 1000.0);
        assert!(present_value(0.04, 10, 50.0, 1000.0) > 1000.0);
    }

    #[test]
    fn test_matches_cash_flow_sum() {
        let rate: f64 = 0.035;
        let expected: f64 = (1..=7)
            .map(|t| 45.0 / (1.0 + rate).powi(t))
            .sum::<f64>()
            + 1000.0 / (1.0 + rate).powi(7);
        assert_relative_eq!(present_value(rate, 7, 45.0, 1000.0), expected, epsilon = 1e-9);
    }

    #[test]
    fn test_total_loss_rate_is_not_finite() {
        assert!(!present_value(-1.0, 3, 50.0, 1000.0).is_finite());
    }
}
