//! Coupon frequency.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{RiskError, RiskResult};

/// Number of coupon payments per year.
///
/// Always positive; reference data that omits the frequency gets the
/// annual default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Frequency(u32);

impl Frequency {
    /// One payment per year.
    pub const ANNUAL: Frequency = Frequency(1);
    /// Two payments per year.
    pub const SEMI_ANNUAL: Frequency = Frequency(2);
    /// Four payments per year.
    pub const QUARTERLY: Frequency = Frequency(4);
    /// Twelve payments per year.
    pub const MONTHLY: Frequency = Frequency(12);

    /// Creates a frequency from a payments-per-year count.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidFrequency` for zero.
    pub fn new(periods_per_year: u32) -> RiskResult<Self> {
        if periods_per_year == 0 {
            return Err(RiskError::InvalidFrequency(periods_per_year));
        }
        Ok(Self(periods_per_year))
    }

    /// Returns the number of periods per year.
    #[must_use]
    pub fn periods_per_year(&self) -> u32 {
        self.0
    }
}

impl Default for Frequency {
    fn default() -> Self {
        Self::ANNUAL
    }
}

impl TryFrom<u32> for Frequency {
    type Error = RiskError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Frequency> for u32 {
    fn from(freq: Frequency) -> Self {
        freq.0
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            1 => write!(f, "Annual"),
            2 => write!(f, "Semi-Annual"),
            4 => write!(f, "Quarterly"),
            12 => write!(f, "Monthly"),
            n => write!(f, "{n}x per year"),
        }
    }
}
