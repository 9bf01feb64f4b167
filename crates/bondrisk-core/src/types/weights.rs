//! Portfolio weights.

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::str::FromStr;

use super::Cusip;
use crate::error::{RiskError, RiskResult};

/// Decimal places used for equal default weights.
pub const DEFAULT_WEIGHT_DP: u32 = 4;

/// One row of a user-supplied weight vector.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightEntry {
    /// Bond identifier.
    pub cusip: Cusip,
    /// Weight as a decimal fraction of the portfolio.
    #[serde(deserialize_with = "deserialize_weight")]
    pub weight: Decimal,
}

impl WeightEntry {
    /// Creates an entry from a decimal weight.
    #[must_use]
    pub fn new(cusip: Cusip, weight: Decimal) -> Self {
        Self { cusip, weight }
    }

    /// Creates an entry from a weight typed as text (e.g. an edited table cell).
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidWeight` if the text is not a decimal number.
    pub fn parse(cusip: Cusip, weight: &str) -> RiskResult<Self> {
        let value = Decimal::from_str(weight.trim())
            .or_else(|_| Decimal::from_scientific(weight.trim()))
            .map_err(|_| RiskError::invalid_weight(cusip.as_str(), weight))?;
        Ok(Self::new(cusip, value))
    }

    /// Creates an entry from a floating point weight.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidWeight` for NaN or infinite values.
    pub fn from_f64(cusip: Cusip, weight: f64) -> RiskResult<Self> {
        let value = Decimal::from_f64(weight)
            .ok_or_else(|| RiskError::invalid_weight(cusip.as_str(), weight.to_string()))?;
        Ok(Self::new(cusip, value))
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawWeight {
    Number(f64),
    Text(String),
}

fn deserialize_weight<'de, D>(deserializer: D) -> Result<Decimal, D::Error>
where
    D: Deserializer<'de>,
{
    use serde::de::Error;

    match RawWeight::deserialize(deserializer)? {
        RawWeight::Number(n) => {
            Decimal::from_f64(n).ok_or_else(|| D::Error::custom(format!("invalid weight: {n}")))
        }
        RawWeight::Text(s) => Decimal::from_str(s.trim())
            .or_else(|_| Decimal::from_scientific(s.trim()))
            .map_err(|_| D::Error::custom(format!("invalid weight: {s}"))),
    }
}

/// Weight lookup used by portfolio aggregation.
///
/// Weights are not required to sum to one; see the weight validator in the
/// analytics crate.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Weights(BTreeMap<Cusip, Decimal>);

impl Weights {
    /// Creates an empty weight vector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds weights from entries. A repeated cusip keeps the last weight.
    #[must_use]
    pub fn from_entries(entries: &[WeightEntry]) -> Self {
        entries
            .iter()
            .map(|e| (e.cusip.clone(), e.weight))
            .collect()
    }

    /// Equal weights `1/n` rounded to four decimal places.
    ///
    /// Rounding means the weights can miss one by up to `n * 0.00005`; three
    /// bonds get `0.3333` each.
    #[must_use]
    pub fn equal<I>(cusips: I) -> Self
    where
        I: IntoIterator<Item = Cusip>,
    {
        let cusips: Vec<Cusip> = cusips.into_iter().collect();
        if cusips.is_empty() {
            return Self::new();
        }
        let weight = (Decimal::ONE / Decimal::from(cusips.len())).round_dp(DEFAULT_WEIGHT_DP);
        cusips.into_iter().map(|c| (c, weight)).collect()
    }

    /// Sets the weight for a bond.
    pub fn insert(&mut self, cusip: Cusip, weight: Decimal) {
        self.0.insert(cusip, weight);
    }

    /// Returns the decimal weight for a bond.
    #[must_use]
    pub fn get(&self, cusip: &Cusip) -> Option<Decimal> {
        self.0.get(cusip).copied()
    }

    /// Returns the weight as `f64`, failing with `MissingWeight`.
    pub fn require_f64(&self, cusip: &Cusip) -> RiskResult<f64> {
        let weight = self.get(cusip).ok_or_else(|| RiskError::MissingWeight {
            cusip: cusip.clone(),
        })?;
        weight
            .to_f64()
            .ok_or_else(|| RiskError::invalid_weight(cusip.as_str(), weight.to_string()))
    }

    /// Sum of all weights, `None` if it overflows `Decimal`.
    #[must_use]
    pub fn sum(&self) -> Option<Decimal> {
        checked_sum(self.0.values().copied())
    }

    /// Returns the weights as entries, ordered by cusip.
    #[must_use]
    pub fn entries(&self) -> Vec<WeightEntry> {
        self.0
            .iter()
            .map(|(c, w)| WeightEntry::new(c.clone(), *w))
            .collect()
    }

    /// Iterates over `(cusip, weight)` pairs ordered by cusip.
    pub fn iter(&self) -> impl Iterator<Item = (&Cusip, &Decimal)> {
        self.0.iter()
    }

    /// Number of weighted bonds.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no weights are set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<(Cusip, Decimal)> for Weights {
    fn from_iter<I: IntoIterator<Item = (Cusip, Decimal)>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl From<&[WeightEntry]> for Weights {
    fn from(entries: &[WeightEntry]) -> Self {
        Self::from_entries(entries)
    }
}

/// Adds decimal weights, returning `None` on overflow.
pub fn checked_sum(weights: impl IntoIterator<Item = Decimal>) -> Option<Decimal> {
    weights
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, w| acc.checked_add(w))
}
