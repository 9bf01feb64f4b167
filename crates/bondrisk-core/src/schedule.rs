//! Remaining coupon payment count.
//!
//! ## Day count approximation
//!
//! The count uses whole calendar days over a fixed 365-day year, matching the
//! granularity of the vendor yield data:
//!
//! ```text
//! years    = days / 365
//! payments = ceil(years) * frequency + 1
//! ```
//!
//! The trailing `+ 1` counts the payment due at maturity. It is meant for
//! observations landing on a coupon boundary, but `ceil(years) * frequency`
//! is always whole, so the extra payment is counted for every observation.
//! Historical DV01 tables were produced this way and the quirk is kept so
//! that recomputed rows match them. A same-day observation has one payment
//! left.
//!
//! Leap days make real calendar years 366 days long, so five calendar years
//! span 1826 or 1827 days and count seven annual payments.

use crate::error::{RiskError, RiskResult};
use crate::types::{Date, Frequency};

/// Days per year in the schedule approximation.
pub const DAYS_PER_YEAR: i64 = 365;

/// Number of coupon payments left between an observation date and maturity.
///
/// # Errors
///
/// Returns `RiskError::InvalidDateOrder` if `observation` is after `maturity`.
///
/// # Example
///
/// ```rust
/// use bondrisk_core::schedule::num_payments_left;
/// use bondrisk_core::types::{Date, Frequency};
///
/// let trade = Date::from_ymd(2023, 1, 2).unwrap();
/// let maturity = Date::from_ymd(2023, 7, 3).unwrap();
/// assert_eq!(num_payments_left(trade, maturity, Frequency::ANNUAL).unwrap(), 2);
/// assert_eq!(num_payments_left(trade, maturity, Frequency::SEMI_ANNUAL).unwrap(), 3);
/// ```
pub fn num_payments_left(
    observation: Date,
    maturity: Date,
    frequency: Frequency,
) -> RiskResult<u32> {
    if observation > maturity {
        return Err(RiskError::InvalidDateOrder {
            observation,
            maturity,
        });
    }

    let days = observation.days_between(&maturity);
    let whole_years = (days + DAYS_PER_YEAR - 1) / DAYS_PER_YEAR;
    let payments = u32::try_from(whole_years)
        .unwrap_or(u32::MAX)
        .saturating_mul(frequency.periods_per_year());

    Ok(payments.saturating_add(1))
}
