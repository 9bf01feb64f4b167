//! First differences of the portfolio yield.

use bondrisk_core::types::{Date, Weights, YieldObservation};
use bondrisk_core::RiskResult;
use serde::{Deserialize, Serialize};

use super::series::{create_portfolio, PortfolioSeries};

/// Change of the portfolio value between consecutive dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChangePoint {
    /// Row date.
    pub date: Date,
    /// `Portfolio[t] - Portfolio[t-1]`; `None` on the first date.
    pub change: Option<f64>,
}

/// Date-ordered change series of a portfolio.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChangeSeries(Vec<ChangePoint>);

impl ChangeSeries {
    /// Differences the `Portfolio` column of a series.
    #[must_use]
    pub fn from_series(series: &PortfolioSeries) -> Self {
        let mut previous: Option<f64> = None;
        let points = series
            .portfolio_points()
            .map(|(date, value)| {
                let change = previous.map(|p| value - p);
                previous = Some(value);
                ChangePoint { date, change }
            })
            .collect();
        Self(points)
    }

    /// All points, including the leading missing one.
    #[must_use]
    pub fn points(&self) -> &[ChangePoint] {
        &self.0
    }

    /// Only the defined changes.
    pub fn changes(&self) -> impl Iterator<Item = f64> + '_ {
        self.0.iter().filter_map(|p| p.change)
    }

    /// Number of points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Builds the portfolio yield series and differences it.
///
/// # Errors
///
/// Same failures as [`create_portfolio`].
pub fn create_yield_change_series(
    yields: &[YieldObservation],
    weights: &Weights,
) -> RiskResult<ChangeSeries> {
    let series = create_portfolio(yields, weights)?;
    Ok(ChangeSeries::from_series(&series))
}
