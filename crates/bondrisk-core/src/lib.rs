//! # Bondrisk Core
//!
//! Core types and building blocks for the Bondrisk fixed income risk library.
//!
//! - **Types**: `Date`, `Cusip`, `Frequency`, yield and DV01 observations,
//!   bond reference data, and portfolio weights
//! - **Schedule**: remaining coupon payment count under a 365-day year
//! - **Config**: bump size, face value, tolerances and parallelism settings
//! - **Errors**: a single `RiskError` shared by every Bondrisk crate
//!
//! Nothing here performs I/O or keeps state between calls.
//!
//! ## Example
//!
//! ```rust
//! use bondrisk_core::prelude::*;
//!
//! let trade = Date::from_ymd(2023, 1, 3).unwrap();
//! let bond = BondReference::new(
//!     Cusip::new("912810FG8").unwrap(),
//!     "US Treasury",
//!     Date::from_ymd(2026, 2, 15).unwrap(),
//!     26.25,
//! )
//! .with_frequency(Frequency::SEMI_ANNUAL);
//!
//! let payments = num_payments_left(trade, bond.maturity_date, bond.coupon_frequency).unwrap();
//! assert_eq!(payments, 9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod error;
pub mod schedule;
pub mod types;

pub use config::RiskConfig;
pub use error::{RiskError, RiskResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::config::RiskConfig;
    pub use crate::error::{RiskError, RiskResult};
    pub use crate::schedule::num_payments_left;
    pub use crate::types::{
        BondReference, Cusip, Date, Dv01Observation, Frequency, Metric, MetricObservation,
        MetricPoint, ObservationWindow, ReferenceTable, WeightEntry, Weights, YieldObservation,
    };
}
