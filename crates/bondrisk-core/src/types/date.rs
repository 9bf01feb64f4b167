//! Calendar date for trade and maturity dates.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RiskError, RiskResult};

/// A calendar date.
///
/// Newtype around `chrono::NaiveDate`. Only whole-day arithmetic is exposed,
/// which is all the payment schedule approximation needs.
///
/// # Example
///
/// ```rust
/// use bondrisk_core::types::Date;
///
/// let trade = Date::from_ymd(2024, 1, 15).unwrap();
/// let maturity = Date::parse("2025-01-15").unwrap();
/// assert_eq!(trade.days_between(&maturity), 366);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidDate` if the date does not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> RiskResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| RiskError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses an ISO 8601 date (YYYY-MM-DD).
    ///
    /// A trailing time component separated by a space or `T` is ignored, since
    /// upstream storage often hands dates over as timestamps.
    pub fn parse(s: &str) -> RiskResult<Self> {
        let date_part = s
            .trim()
            .split(|c| c == ' ' || c == 'T')
            .next()
            .unwrap_or_default();
        NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
            .map(Date)
            .map_err(|_| RiskError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds whole years, clamping Feb 29 to Feb 28 in non-leap years.
    pub fn add_years(&self, years: i32) -> RiskResult<Self> {
        let new_year = self.year() + years;
        Self::from_ymd(new_year, self.month(), self.day())
            .or_else(|_| Self::from_ymd(new_year, self.month(), self.day() - 1))
    }

    /// Calendar days from `self` to `other` (negative if `other` is earlier).
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl std::str::FromStr for Date {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}
