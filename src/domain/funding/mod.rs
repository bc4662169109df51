//! Funding domain: keep-funding toggles and the funding sub-client.

#[cfg(feature = "http")]
pub mod client;

use crate::codec::Command;
use crate::error::ValidationError;
use crate::permission::CommandKind;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// What a keep-funding request targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KeepFundingKind {
    /// Funding currently used in a position.
    Credit,
    /// Funding taken but not used.
    Loan,
}

impl KeepFundingKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            KeepFundingKind::Credit => "credit",
            KeepFundingKind::Loan => "loan",
        }
    }
}

impl FromStr for KeepFundingKind {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "credit" => Ok(KeepFundingKind::Credit),
            "loan" => Ok(KeepFundingKind::Loan),
            other => Err(ValidationError::NotAllowed {
                field: "type",
                expected: "credit, loan",
                got: other.to_string(),
            }),
        }
    }
}

/// Keep the funding behind a loan or credit from being returned.
///
/// `kind` holds the raw wire string and must be `"credit"` or `"loan"`;
/// it is checked on encode.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeepFundingRequest {
    #[serde(rename = "type")]
    pub kind: String,
    pub id: i64,
}

impl KeepFundingRequest {
    pub fn new(kind: impl Into<String>, id: i64) -> Self {
        Self {
            kind: kind.into(),
            id,
        }
    }

    pub fn typed(kind: KeepFundingKind, id: i64) -> Self {
        Self::new(kind.as_str(), id)
    }
}

impl Command for KeepFundingRequest {
    const KIND: CommandKind = CommandKind::KeepFunding;

    fn validate(&self) -> Result<(), ValidationError> {
        self.kind.parse::<KeepFundingKind>()?;
        if self.id <= 0 {
            return Err(ValidationError::Missing { field: "id" });
        }
        Ok(())
    }
}
