//! Risk measures: DV01 and Value at Risk.

pub mod batch;
pub mod dv01;
pub mod var;

pub use batch::{compute_dv01_series, Dv01Batch, RowFailure};
pub use dv01::{calc_dv01, dv01_with_config, observation_dv01};
pub use var::{
    empirical_quantile, historical_simulation_var, historical_var, mean_and_sample_std,
    parametric_var_from_moments, portfolio_returns, simple_returns, validate_confidence,
    variance_covariance_series_var, variance_covariance_var, VarComparison, VarEstimate,
    VarMethod,
};
