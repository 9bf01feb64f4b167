//! Property-based tests for the payment schedule calculator.
//!
//! These tests verify the properties that must hold for any valid date pair:
//! - The count is positive whenever observation precedes maturity
//! - The count never increases as the observation approaches maturity
//! - The maturity payment is counted on and off coupon boundaries
//! - Observations after maturity are rejected

use bondrisk_core::prelude::*;
use proptest::prelude::*;

fn base_date() -> Date {
    Date::from_ymd(2000, 1, 1).unwrap()
}

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::ANNUAL),
        Just(Frequency::SEMI_ANNUAL),
        Just(Frequency::QUARTERLY),
        Just(Frequency::MONTHLY),
    ]
}

proptest! {
    #[test]
    fn payments_positive_before_maturity(
        start in 0i64..20_000,
        tenor in 1i64..15_000,
        freq in frequency_strategy(),
    ) {
        let observation = base_date().add_days(start);
        let maturity = observation.add_days(tenor);
        let payments = num_payments_left(observation, maturity, freq).unwrap();
        prop_assert!(payments > 0);
    }

    #[test]
    fn payments_non_increasing_towards_maturity(
        start in 0i64..20_000,
        tenor in 1i64..15_000,
        step in 1i64..400,
        freq in frequency_strategy(),
    ) {
        let observation = base_date().add_days(start);
        let maturity = observation.add_days(tenor);
        let later = observation.add_days(step.min(tenor));

        let earlier_count = num_payments_left(observation, maturity, freq).unwrap();
        let later_count = num_payments_left(later, maturity, freq).unwrap();
        prop_assert!(later_count <= earlier_count);
    }

    #[test]
    fn maturity_payment_always_counted(
        start in 0i64..20_000,
        tenor in 0i64..15_000,
        freq in frequency_strategy(),
    ) {
        let observation = base_date().add_days(start);
        let maturity = observation.add_days(tenor);
        let payments = num_payments_left(observation, maturity, freq).unwrap();
        let whole_years = u32::try_from((tenor + 364) / 365).unwrap();
        prop_assert_eq!(payments, whole_years * freq.periods_per_year() + 1);
    }

    #[test]
    fn observation_after_maturity_fails(
        start in 0i64..20_000,
        overshoot in 1i64..5_000,
    ) {
        let maturity = base_date().add_days(start);
        let observation = maturity.add_days(overshoot);
        let result = num_payments_left(observation, maturity, Frequency::ANNUAL);
        let is_date_order_error = matches!(result, Err(RiskError::InvalidDateOrder { .. }));
        prop_assert!(is_date_order_error);
    }
}

#[test]
fn annual_counts_include_maturity_payment() {
    let trade = base_date();
    let cases = [
        (0, 1),
        (1, 2),
        (180, 2),
        (364, 2),
        (365, 2),
        (366, 3),
        (729, 3),
        (730, 3),
        (731, 4),
        (1827, 7),
    ];
    for (days, expected) in cases {
        let maturity = trade.add_days(days);
        assert_eq!(
            num_payments_left(trade, maturity, Frequency::ANNUAL).unwrap(),
            expected,
            "days = {days}"
        );
    }
}
