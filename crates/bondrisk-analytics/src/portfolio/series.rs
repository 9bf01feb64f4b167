//! Wide, date-indexed portfolio table.
//!
//! Long-format observations are pivoted into one column per bond, each
//! column forward-filled across dates it was not observed on, and a
//! weighted `Portfolio` column is added:
//!
//! ```text
//! Portfolio[t] = Σ weight[c] × value[c][t]    over columns with a value at t
//! ```
//!
//! A column stays empty before its first observation and contributes
//! nothing to the sum until then.

use bondrisk_core::types::{Cusip, Date, Metric, MetricObservation, Weights};
use bondrisk_core::{RiskError, RiskResult};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// Name of the synthetic weighted column.
pub const PORTFOLIO_COLUMN: &str = "Portfolio";

/// Date-indexed table of constituent values plus the weighted portfolio.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PortfolioSeries {
    metric: Metric,
    dates: Vec<Date>,
    columns: BTreeMap<Cusip, Vec<Option<f64>>>,
    weights: BTreeMap<Cusip, f64>,
    portfolio: Vec<f64>,
}

/// One row of a [`PortfolioSeries`].
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PortfolioRow<'a> {
    /// Row date.
    pub date: Date,
    /// Constituent values at this date, ordered by cusip.
    pub values: Vec<(&'a Cusip, Option<f64>)>,
    /// Weighted portfolio value.
    pub portfolio: f64,
}

impl PortfolioSeries {
    /// The metric the table was built from.
    #[must_use]
    pub fn metric(&self) -> Metric {
        self.metric
    }

    /// Row dates, ascending.
    #[must_use]
    pub fn dates(&self) -> &[Date] {
        &self.dates
    }

    /// Constituent cusips, ascending.
    pub fn cusips(&self) -> impl Iterator<Item = &Cusip> {
        self.columns.keys()
    }

    /// Forward-filled values of one constituent.
    #[must_use]
    pub fn column(&self, cusip: &Cusip) -> Option<&[Option<f64>]> {
        self.columns.get(cusip).map(Vec::as_slice)
    }

    /// Weight applied to a constituent.
    #[must_use]
    pub fn weight(&self, cusip: &Cusip) -> Option<f64> {
        self.weights.get(cusip).copied()
    }

    /// The weighted `Portfolio` column.
    #[must_use]
    pub fn portfolio(&self) -> &[f64] {
        &self.portfolio
    }

    /// Forward-filled value of a constituent at a date.
    #[must_use]
    pub fn value(&self, date: Date, cusip: &Cusip) -> Option<f64> {
        let index = self.dates.binary_search(&date).ok()?;
        self.columns.get(cusip)?.get(index).copied().flatten()
    }

    /// `(date, portfolio)` pairs in date order.
    pub fn portfolio_points(&self) -> impl Iterator<Item = (Date, f64)> + '_ {
        self.dates.iter().copied().zip(self.portfolio.iter().copied())
    }

    /// Returns the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<PortfolioRow<'_>> {
        let date = *self.dates.get(index)?;
        let values = self
            .columns
            .iter()
            .map(|(cusip, column)| (cusip, column[index]))
            .collect();
        Some(PortfolioRow {
            date,
            values,
            portfolio: self.portfolio[index],
        })
    }

    /// Iterates over rows in date order.
    pub fn rows(&self) -> impl Iterator<Item = PortfolioRow<'_>> + '_ {
        (0..self.len()).filter_map(move |i| self.row(i))
    }

    /// Number of dates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.dates.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.dates.is_empty()
    }
}

/// Builds the wide portfolio table for a metric series.
///
/// The value column pivoted is the one the observation type carries
/// (`ytm` for yields, `dv01` for DV01 observations). Repeated
/// `(cusip, trade_date)` rows are averaged into one cell.
///
/// # Errors
///
/// - `RiskError::InsufficientData` if there are no observations
/// - `RiskError::MissingWeight` if a cusip in the series has no weight
///
/// Weights are not required to sum to one here.
pub fn create_portfolio<O: MetricObservation>(
    observations: &[O],
    weights: &Weights,
) -> RiskResult<PortfolioSeries> {
    let first = observations
        .first()
        .ok_or_else(|| RiskError::insufficient_data(1, 0))?;
    let metric = first.metric();

    let mut dates = BTreeSet::new();
    let mut cells: BTreeMap<Cusip, BTreeMap<Date, (f64, u32)>> = BTreeMap::new();
    for obs in observations {
        dates.insert(obs.trade_date());
        let cell = cells
            .entry(obs.cusip().clone())
            .or_default()
            .entry(obs.trade_date())
            .or_insert((0.0, 0));
        cell.0 += obs.value();
        cell.1 += 1;
    }
    let dates: Vec<Date> = dates.into_iter().collect();

    let mut applied = BTreeMap::new();
    for cusip in cells.keys() {
        applied.insert(cusip.clone(), weights.require_f64(cusip)?);
    }

    let mut portfolio = vec![0.0; dates.len()];
    let mut columns = BTreeMap::new();
    for (cusip, observed) in cells {
        let weight = applied[&cusip];
        let mut last = None;
        let column: Vec<Option<f64>> = dates
            .iter()
            .map(|date| {
                if let Some((sum, count)) = observed.get(date) {
                    last = Some(sum / f64::from(*count));
                }
                last
            })
            .collect();

        for (total, value) in portfolio.iter_mut().zip(&column) {
            if let Some(v) = value {
                *total += weight * v;
            }
        }
        columns.insert(cusip, column);
    }

    debug!(
        metric = %metric,
        dates = dates.len(),
        bonds = columns.len(),
        "portfolio series built"
    );

    Ok(PortfolioSeries {
        metric,
        dates,
        columns,
        weights: applied,
        portfolio,
    })
}
