//! Time series observations keyed by cusip and trade date.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

use super::{Cusip, Date};

/// Which per-bond metric a series carries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    /// Yield to maturity as a decimal fraction.
    Yield,
    /// DV01 sensitivity.
    Dv01,
}

impl Metric {
    /// Column name used by storage and charting collaborators.
    #[must_use]
    pub fn column(&self) -> &'static str {
        match self {
            Self::Yield => "ytm",
            Self::Dv01 => "dv01",
        }
    }
}

impl fmt::Display for Metric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Yield => write!(f, "Yield"),
            Self::Dv01 => write!(f, "DV01"),
        }
    }
}

/// A long-format observation of one metric for one bond on one date.
///
/// Portfolio aggregation is generic over this trait; the implementing type
/// decides which value column gets pivoted.
pub trait MetricObservation {
    /// The bond this observation belongs to.
    fn cusip(&self) -> &Cusip;

    /// The observation date.
    fn trade_date(&self) -> Date;

    /// The observed value.
    fn value(&self) -> f64;

    /// The metric the value represents.
    fn metric(&self) -> Metric;
}

/// Daily yield of a bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct YieldObservation {
    /// Bond identifier.
    pub cusip: Cusip,
    /// Trade date.
    pub trade_date: Date,
    /// Yield to maturity as a decimal fraction (0.025 for 2.5%).
    #[serde(rename = "ytm")]
    pub yield_value: f64,
}

impl YieldObservation {
    /// Creates an observation from a decimal yield.
    #[must_use]
    pub fn new(cusip: Cusip, trade_date: Date, yield_value: f64) -> Self {
        Self {
            cusip,
            trade_date,
            yield_value,
        }
    }

    /// Creates an observation from a yield quoted in percent, as stored upstream.
    #[must_use]
    pub fn from_percent(cusip: Cusip, trade_date: Date, yield_percent: f64) -> Self {
        Self::new(cusip, trade_date, yield_percent / 100.0)
    }
}

impl MetricObservation for YieldObservation {
    fn cusip(&self) -> &Cusip {
        &self.cusip
    }

    fn trade_date(&self) -> Date {
        self.trade_date
    }

    fn value(&self) -> f64 {
        self.yield_value
    }

    fn metric(&self) -> Metric {
        Metric::Yield
    }
}

/// Derived DV01 of a bond on a trade date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Dv01Observation {
    /// Bond identifier.
    pub cusip: Cusip,
    /// Trade date the DV01 was computed for.
    pub trade_date: Date,
    /// DV01 value.
    pub dv01: f64,
}

impl MetricObservation for Dv01Observation {
    fn cusip(&self) -> &Cusip {
        &self.cusip
    }

    fn trade_date(&self) -> Date {
        self.trade_date
    }

    fn value(&self) -> f64 {
        self.dv01
    }

    fn metric(&self) -> Metric {
        Metric::Dv01
    }
}

/// Metric-agnostic observation for callers that already hold a generic
/// `{cusip, trade_date, value}` table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MetricPoint {
    /// Bond identifier.
    pub cusip: Cusip,
    /// Observation date.
    pub trade_date: Date,
    /// Observed value.
    pub value: f64,
    /// Metric carried by `value`.
    pub metric: Metric,
}

impl MetricObservation for MetricPoint {
    fn cusip(&self) -> &Cusip {
        &self.cusip
    }

    fn trade_date(&self) -> Date {
        self.trade_date
    }

    fn value(&self) -> f64 {
        self.value
    }

    fn metric(&self) -> Metric {
        self.metric
    }
}

/// Inclusive date range and bond selection applied to loaded observations.
///
/// Unset bounds and an unset cusip set match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservationWindow {
    /// First date included.
    pub start: Option<Date>,
    /// Last date included.
    pub end: Option<Date>,
    /// Selected bonds.
    pub cusips: Option<BTreeSet<Cusip>>,
}

impl ObservationWindow {
    /// Creates a window that selects everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Restricts the window to dates on or after `start`.
    #[must_use]
    pub fn with_start(mut self, start: Date) -> Self {
        self.start = Some(start);
        self
    }

    /// Restricts the window to dates on or before `end`.
    #[must_use]
    pub fn with_end(mut self, end: Date) -> Self {
        self.end = Some(end);
        self
    }

    /// Restricts the window to the given bonds.
    #[must_use]
    pub fn with_cusips(mut self, cusips: impl IntoIterator<Item = Cusip>) -> Self {
        self.cusips = Some(cusips.into_iter().collect());
        self
    }

    /// Returns true if the observation falls inside the window.
    pub fn contains<O: MetricObservation>(&self, observation: &O) -> bool {
        let date = observation.trade_date();
        self.start.map_or(true, |s| date >= s)
            && self.end.map_or(true, |e| date <= e)
            && self
                .cusips
                .as_ref()
                .map_or(true, |set| set.contains(observation.cusip()))
    }

    /// Returns the observations inside the window, in input order.
    pub fn select<O: MetricObservation + Clone>(&self, observations: &[O]) -> Vec<O> {
        observations
            .iter()
            .filter(|o| self.contains(*o))
            .cloned()
            .collect()
    }
}
