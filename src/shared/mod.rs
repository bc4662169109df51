//! Shared newtypes used across all domain modules.
//!
//! These types are serialization-transparent: they serialize/deserialize identically
//! to the raw strings the venue sends, so they can be used directly in wire types.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::str::FromStr;

// ─── FundingSymbol ───────────────────────────────────────────────────────────

/// Funding market symbol (e.g. `"fUSD"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct FundingSymbol(String);

impl FundingSymbol {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    /// Funding symbol for a currency code: `USD` → `fUSD`.
    pub fn for_currency(currency: &Currency) -> Self {
        Self(format!("f{}", currency.as_str()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Currency part of the symbol, if it carries the funding prefix.
    pub fn currency(&self) -> Option<Currency> {
        self.0
            .strip_prefix('f')
            .filter(|c| !c.is_empty())
            .map(Currency::from)
    }
}

impl std::fmt::Display for FundingSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for FundingSymbol {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FundingSymbol {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl FromStr for FundingSymbol {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(FundingSymbol(s.to_string()))
    }
}

impl Serialize for FundingSymbol {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for FundingSymbol {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(FundingSymbol(s))
    }
}

// ─── Currency ────────────────────────────────────────────────────────────────

/// Currency code as the venue spells it (e.g. `"USD"`, `"UST"`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Currency(String);

impl Currency {
    pub fn new(s: impl Into<String>) -> Self {
        Self(s.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for Currency {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for Currency {
    fn from(s: String) -> Self {
        Self(s)
    }
}

impl Serialize for Currency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for Currency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Currency(s))
    }
}

// ─── FundingSide ─────────────────────────────────────────────────────────────

/// Which side of a funding contract the account is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FundingSide {
    Lender,
    Both,
    Borrower,
}

impl FundingSide {
    /// Venue encoding: `1` lender, `0` both, `-1` borrower.
    pub fn from_wire(v: i64) -> Option<Self> {
        match v {
            1 => Some(FundingSide::Lender),
            0 => Some(FundingSide::Both),
            -1 => Some(FundingSide::Borrower),
            _ => None,
        }
    }

    pub fn as_wire(&self) -> i64 {
        match self {
            FundingSide::Lender => 1,
            FundingSide::Both => 0,
            FundingSide::Borrower => -1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_funding_symbol_serde() {
        let sym = FundingSymbol::from("fUSD");
        let json = serde_json::to_string(&sym).unwrap();
        assert_eq!(json, "\"fUSD\"");
        let back: FundingSymbol = serde_json::from_str(&json).unwrap();
        assert_eq!(sym, back);
    }

    #[test]
    fn test_funding_symbol_currency() {
        assert_eq!(
            FundingSymbol::from("fUST").currency(),
            Some(Currency::from("UST"))
        );
        assert_eq!(FundingSymbol::from("tBTCUSD").currency(), None);
        assert_eq!(FundingSymbol::from("f").currency(), None);
        assert_eq!(
            FundingSymbol::for_currency(&Currency::from("EUR")).as_str(),
            "fEUR"
        );
    }

    #[test]
    fn test_currency_blank_is_empty() {
        assert!(Currency::from("  ").is_empty());
        assert!(!Currency::from("USD").is_empty());
    }

    #[test]
    fn test_funding_side_wire() {
        assert_eq!(FundingSide::from_wire(1), Some(FundingSide::Lender));
        assert_eq!(FundingSide::from_wire(-1), Some(FundingSide::Borrower));
        assert_eq!(FundingSide::from_wire(0), Some(FundingSide::Both));
        assert_eq!(FundingSide::from_wire(2), None);
        assert_eq!(FundingSide::Borrower.as_wire(), -1);
    }
}
