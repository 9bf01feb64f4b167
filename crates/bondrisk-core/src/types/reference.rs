//! Static bond reference data.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;

use super::{Cusip, Date, Frequency};
use crate::error::{RiskError, RiskResult};

/// Terms of a level-coupon bond.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BondReference {
    /// Bond identifier (primary key).
    pub cusip: Cusip,
    /// Issuer name.
    pub issuer: String,
    /// Redemption date.
    pub maturity_date: Date,
    /// Absolute coupon amount paid each period (not a rate).
    pub coupon: f64,
    /// Coupon payments per year.
    #[serde(default, alias = "coupon_freq")]
    pub coupon_frequency: Frequency,
}

impl BondReference {
    /// Creates a reference record with the default annual frequency.
    #[must_use]
    pub fn new(cusip: Cusip, issuer: impl Into<String>, maturity_date: Date, coupon: f64) -> Self {
        Self {
            cusip,
            issuer: issuer.into(),
            maturity_date,
            coupon,
            coupon_frequency: Frequency::default(),
        }
    }

    /// Sets the coupon frequency.
    #[must_use]
    pub fn with_frequency(mut self, frequency: Frequency) -> Self {
        self.coupon_frequency = frequency;
        self
    }
}

/// Reference records keyed by cusip.
///
/// A later record with the same cusip replaces an earlier one.
#[derive(Debug, Clone, Default)]
pub struct ReferenceTable {
    bonds: HashMap<Cusip, BondReference>,
}

impl ReferenceTable {
    /// Creates an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces a record.
    pub fn insert(&mut self, reference: BondReference) {
        self.bonds.insert(reference.cusip.clone(), reference);
    }

    /// Looks up a record.
    #[must_use]
    pub fn get(&self, cusip: &Cusip) -> Option<&BondReference> {
        self.bonds.get(cusip)
    }

    /// Looks up a record, failing with `MissingReference`.
    pub fn require(&self, cusip: &Cusip) -> RiskResult<&BondReference> {
        self.get(cusip).ok_or_else(|| RiskError::MissingReference {
            cusip: cusip.clone(),
        })
    }

    /// Number of bonds in the table.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bonds.len()
    }

    /// Returns true if the table holds no bonds.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.bonds.is_empty()
    }
}

impl FromIterator<BondReference> for ReferenceTable {
    fn from_iter<I: IntoIterator<Item = BondReference>>(iter: I) -> Self {
        let mut table = Self::new();
        for reference in iter {
            table.insert(reference);
        }
        table
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reference(cusip: &str) -> BondReference {
        BondReference::new(
            Cusip::new(cusip).unwrap(),
            "US Treasury",
            Date::from_ymd(2030, 5, 15).unwrap(),
            25.0,
        )
    }

    #[test]
    fn test_require() {
        let table: ReferenceTable = vec![reference("912810FG8")].into_iter().collect();
        assert_eq!(table.len(), 1);
        assert!(table.require(&Cusip::new("912810FG8").unwrap()).is_ok());

        let missing = Cusip::new("00751YAD8").unwrap();
        assert_eq!(
            table.require(&missing),
            Err(RiskError::MissingReference { cusip: missing })
        );
    }

    #[test]
    fn test_frequency_defaults_when_absent() {
        let json = r#"{
            "cusip": "90131HAY1",
            "issuer": "Fox Corp",
            "maturity_date": "2029-01-25",
            "coupon": 42.3
        }"#;
        let parsed: BondReference = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.coupon_frequency, Frequency::ANNUAL);

        let json = r#"{
            "cusip": "90131HAY1",
            "issuer": "Fox Corp",
            "maturity_date": "2029-01-25",
            "coupon": 21.15,
            "coupon_freq": 2
        }"#;
        let parsed: BondReference = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.coupon_frequency, Frequency::SEMI_ANNUAL);
    }
}
