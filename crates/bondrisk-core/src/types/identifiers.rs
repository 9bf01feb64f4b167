//! Security identifiers.

use serde::{Deserialize, Serialize};
use std::borrow::Borrow;
use std::fmt;

use crate::error::{RiskError, RiskResult};

/// Bond identifier as supplied by the reference data vendor.
///
/// CUSIPs are recycled by some issuers once a bond matures, so this type
/// only normalizes the string (trimmed, upper case, alphanumeric) and does
/// not verify the check digit.
///
/// # Example
///
/// ```
/// use bondrisk_core::types::Cusip;
///
/// let cusip = Cusip::new(" 912810fg8 ").unwrap();
/// assert_eq!(cusip.as_str(), "912810FG8");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Cusip(String);

impl Cusip {
    /// Creates a normalized identifier.
    ///
    /// # Errors
    ///
    /// Returns `RiskError::InvalidIdentifier` if the value is empty or
    /// contains characters other than ASCII letters and digits.
    pub fn new(value: &str) -> RiskResult<Self> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(RiskError::invalid_identifier("cusip is empty"));
        }
        if let Some(bad) = trimmed.chars().find(|c| !c.is_ascii_alphanumeric()) {
            return Err(RiskError::invalid_identifier(format!(
                "cusip '{trimmed}' contains '{bad}'"
            )));
        }
        Ok(Self(trimmed.to_ascii_uppercase()))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Cusip {
    type Error = RiskError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<&str> for Cusip {
    type Error = RiskError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Cusip> for String {
    fn from(cusip: Cusip) -> Self {
        cusip.0
    }
}

impl Borrow<str> for Cusip {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl std::str::FromStr for Cusip {
    type Err = RiskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl fmt::Display for Cusip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalization() {
        let cusip = Cusip::new("00751yad8").unwrap();
        assert_eq!(cusip.as_str(), "00751YAD8");
        assert_eq!(cusip, Cusip::new("00751YAD8").unwrap());
    }

    #[test]
    fn test_short_identifiers_allowed() {
        assert_eq!(Cusip::new("AAA").unwrap().as_str(), "AAA");
    }

    #[test]
    fn test_invalid() {
        assert!(Cusip::new("").is_err());
        assert!(Cusip::new("   ").is_err());
        assert!(Cusip::new("912810-FG8").is_err());
    }

    #[test]
    fn test_serde_validates() {
        let parsed: Cusip = serde_json::from_str("\"90131hay1\"").unwrap();
        assert_eq!(parsed.as_str(), "90131HAY1");
        assert!(serde_json::from_str::<Cusip>("\"\"").is_err());
    }
}
