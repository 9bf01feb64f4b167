//! # Bondrisk Analytics
//!
//! Risk calculations over bond yield histories.
//!
//! ## Features
//!
//! - **Pricing**: level-coupon present value
//! - **DV01**: centered finite-difference sensitivity, per bond and as a
//!   batch over a yield history with per-row failure reporting
//! - **Portfolio aggregation**: weighted, forward-filled yield and DV01
//!   series, and the daily yield-change series
//! - **Value at Risk**: historical simulation and variance-covariance
//!   estimates of portfolio returns, reported side by side
//! - **Weight validation**: advisory sum-to-one check
//!
//! ## Quick Start
//!
//! ```rust
//! use bondrisk_analytics::prelude::*;
//! use rust_decimal::Decimal;
//!
//! let cusip = Cusip::new("AAA").unwrap();
//! let start = Date::from_ymd(2024, 1, 1).unwrap();
//! let yields: Vec<YieldObservation> = [3.00, 3.05, 2.98, 3.10, 3.02, 3.07, 3.01]
//!     .iter()
//!     .enumerate()
//!     .map(|(i, pct)| YieldObservation::from_percent(cusip.clone(), start.add_days(i as i64), *pct))
//!     .collect();
//!
//! let weights: Weights = [(cusip, Decimal::ONE)].into_iter().collect();
//! let series = create_portfolio(&yields, &weights).unwrap();
//! let var = VarComparison::from_series(&series, 0.95, &RiskConfig::default()).unwrap();
//! assert!(var.historical.value < 0.0);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: run the DV01 batch on a rayon pool above a row threshold

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::cast_precision_loss)]

pub mod parallel;
pub mod portfolio;
pub mod pricing;
pub mod report;
pub mod risk;

pub use bondrisk_core::{RiskConfig, RiskError, RiskResult};

/// Prelude module for convenient imports.
pub mod prelude {
    pub use bondrisk_core::prelude::*;

    pub use crate::portfolio::{
        check_weights, create_portfolio, create_yield_change_series, weights_valid, ChangePoint,
        ChangeSeries, PortfolioSeries, WeightValidity,
    };
    pub use crate::pricing::present_value;
    pub use crate::report::{assess_portfolio, Assessed, PortfolioRiskReport};
    pub use crate::risk::{
        calc_dv01, compute_dv01_series, historical_var, observation_dv01, variance_covariance_var,
        Dv01Batch, RowFailure, VarComparison, VarEstimate, VarMethod,
    };
}
