//! Property-based tests for aggregation and risk invariants.
//!
//! - A single bond at full weight reproduces its own series
//! - The portfolio is the weighted sum of forward-filled constituents
//! - DV01 is positive for ordinary bonds
//! - Historical VaR lies within the observed return range

use bondrisk_analytics::prelude::*;
use proptest::prelude::*;
use rust_decimal::Decimal;

fn cusip(s: &str) -> Cusip {
    Cusip::new(s).unwrap()
}

fn start() -> Date {
    Date::from_ymd(2022, 1, 3).unwrap()
}

proptest! {
    #[test]
    fn single_bond_full_weight_round_trip(
        values in prop::collection::vec(0.0001f64..0.15, 1..60),
    ) {
        let rows: Vec<YieldObservation> = values
            .iter()
            .enumerate()
            .map(|(i, v)| YieldObservation::new(cusip("AAA"), start().add_days(i as i64), *v))
            .collect();
        let weights: Weights = [(cusip("AAA"), Decimal::ONE)].into_iter().collect();

        let series = create_portfolio(&rows, &weights).unwrap();
        prop_assert_eq!(series.portfolio(), values.as_slice());
    }

    #[test]
    fn portfolio_is_weighted_sum(
        a in prop::collection::vec(0.001f64..0.1, 2..30),
        b in prop::collection::vec(0.001f64..0.1, 2..30),
        wa in 0u32..=100,
    ) {
        let mut rows = Vec::new();
        for (i, v) in a.iter().enumerate() {
            rows.push(YieldObservation::new(cusip("AAA"), start().add_days(i as i64), *v));
        }
        // BBB is observed every other day
        for (i, v) in b.iter().enumerate() {
            rows.push(YieldObservation::new(cusip("BBB"), start().add_days(2 * i as i64), *v));
        }
        let w_a = Decimal::new(i64::from(wa), 2);
        let weights: Weights = [(cusip("AAA"), w_a), (cusip("BBB"), Decimal::ONE - w_a)]
            .into_iter()
            .collect();

        let series = create_portfolio(&rows, &weights).unwrap();
        let fa = f64::from(wa) / 100.0;
        let col_a = series.column(&cusip("AAA")).unwrap();
        let col_b = series.column(&cusip("BBB")).unwrap();
        for (i, total) in series.portfolio().iter().enumerate() {
            let expected = col_a[i].map_or(0.0, |v| fa * v) + col_b[i].map_or(0.0, |v| (1.0 - fa) * v);
            prop_assert!((total - expected).abs() < 1e-12);
            prop_assert!(col_b[i].is_some());
        }
    }

    #[test]
    fn dv01_positive(
        ytm in 0.0001f64..0.2,
        coupon in 0.0f64..120.0,
        payments in 1u32..60,
    ) {
        let dv01 = calc_dv01(ytm, coupon, payments, 0.01, 1000.0).unwrap();
        prop_assert!(dv01 > 0.0);
    }

    #[test]
    fn historical_var_within_range(
        returns in prop::collection::vec(-0.1f64..0.1, 5..200),
        confidence in 0.90f64..0.99,
    ) {
        let var = historical_var(&returns, confidence, &RiskConfig::default()).unwrap();
        let min = returns.iter().copied().fold(f64::INFINITY, f64::min);
        let max = returns.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        prop_assert!(var.value >= min && var.value <= max);
    }
}
