//! CLI command implementations.

pub mod dv01;
pub mod payments;
pub mod var;
pub mod weights;

pub use dv01::Dv01Args;
pub use payments::PaymentsArgs;
pub use var::VarArgs;
pub use weights::WeightsArgs;

use bondrisk_core::types::{Cusip, Date, Frequency, WeightEntry};

use crate::error::{CliError, CliResult};

/// Parses a date string in YYYY-MM-DD format.
pub fn parse_date(s: &str) -> CliResult<Date> {
    Date::parse(s).map_err(|_| CliError::InvalidDate(s.to_string()))
}

/// Validates a yield given in percent.
pub fn validate_yield(yield_pct: f64) -> CliResult<f64> {
    if !(-10.0..=100.0).contains(&yield_pct) {
        return Err(CliError::InvalidYield(yield_pct));
    }
    Ok(yield_pct)
}

/// Converts payments per year into a `Frequency`.
pub fn parse_frequency(per_year: u32) -> CliResult<Frequency> {
    Ok(Frequency::new(per_year)?)
}

/// Parses a `CUSIP=WEIGHT` argument.
pub fn parse_weight_arg(arg: &str) -> CliResult<WeightEntry> {
    let (cusip, weight) = arg
        .split_once('=')
        .ok_or_else(|| CliError::InvalidWeightArg(arg.to_string()))?;
    let cusip = Cusip::new(cusip)?;
    Ok(WeightEntry::parse(cusip, weight.trim())?)
}
