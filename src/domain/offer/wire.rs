//! Wire types for funding offers: request payloads and the offer row layout.

use crate::codec::Command;
use crate::error::ValidationError;
use crate::permission::CommandKind;
use crate::shared::{Currency, FundingSymbol};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Positions of a funding offer row (`funding/offers`, `fon-req`/`foc-req` notifications).
pub mod fields {
    pub const ID: usize = 0;
    pub const SYMBOL: usize = 1;
    pub const MTS_CREATED: usize = 2;
    pub const MTS_UPDATED: usize = 3;
    pub const AMOUNT: usize = 4;
    pub const AMOUNT_ORIG: usize = 5;
    pub const TYPE: usize = 6;
    pub const FLAGS: usize = 9;
    pub const STATUS: usize = 10;
    pub const RATE: usize = 14;
    pub const PERIOD: usize = 15;
    pub const NOTIFY: usize = 16;
    pub const HIDDEN: usize = 17;
    pub const RENEW: usize = 19;
    pub const RATE_REAL: usize = 20;

    /// `ID` through `AMOUNT_ORIG` must be present.
    pub const MIN: usize = 6;
}

/// Offer flag: hide the offer from the public book.
pub const FLAG_HIDDEN: u32 = 64;

const MIN_PERIOD_DAYS: u32 = 2;
const MAX_PERIOD_DAYS: u32 = 120;

// ─── OfferType ───────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum OfferType {
    #[default]
    Limit,
    FrrDeltaVar,
    FrrDeltaFix,
}

// ─── FundingOfferRequest ─────────────────────────────────────────────────────

/// Submit a new funding offer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FundingOfferRequest {
    #[serde(rename = "type")]
    pub offer_type: OfferType,
    pub symbol: FundingSymbol,
    pub amount: Decimal,
    pub rate: Decimal,
    pub period: u32,
    pub flags: u32,
}

impl FundingOfferRequest {
    pub fn new(
        symbol: impl Into<FundingSymbol>,
        amount: Decimal,
        rate: Decimal,
        period: u32,
    ) -> Self {
        Self {
            offer_type: OfferType::Limit,
            symbol: symbol.into(),
            amount,
            rate,
            period,
            flags: 0,
        }
    }

    pub fn offer_type(mut self, offer_type: OfferType) -> Self {
        self.offer_type = offer_type;
        self
    }

    pub fn hidden(mut self, hidden: bool) -> Self {
        if hidden {
            self.flags |= FLAG_HIDDEN;
        } else {
            self.flags &= !FLAG_HIDDEN;
        }
        self
    }
}

impl Command for FundingOfferRequest {
    const KIND: CommandKind = CommandKind::SubmitOffer;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.symbol.is_empty() {
            return Err(ValidationError::Missing { field: "symbol" });
        }
        if !self.symbol.as_str().starts_with('f') {
            return Err(ValidationError::NotAllowed {
                field: "symbol",
                expected: "a funding symbol (fXXX)",
                got: self.symbol.to_string(),
            });
        }
        if self.amount.is_zero() {
            return Err(ValidationError::OutOfRange {
                field: "amount",
                detail: "must be non-zero".to_string(),
            });
        }
        // FRR offers carry a signed offset from the FRR in `rate`
        if self.offer_type == OfferType::Limit && self.rate.is_sign_negative() && !self.rate.is_zero() {
            return Err(ValidationError::OutOfRange {
                field: "rate",
                detail: format!("{} is negative", self.rate),
            });
        }
        if !(MIN_PERIOD_DAYS..=MAX_PERIOD_DAYS).contains(&self.period) {
            return Err(ValidationError::OutOfRange {
                field: "period",
                detail: format!(
                    "{} not within {}..={} days",
                    self.period, MIN_PERIOD_DAYS, MAX_PERIOD_DAYS
                ),
            });
        }
        Ok(())
    }
}

// ─── CancelRequest ───────────────────────────────────────────────────────────

/// Cancel one funding offer by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelRequest {
    pub id: i64,
}

impl CancelRequest {
    pub fn new(id: i64) -> Self {
        Self { id }
    }
}

impl Command for CancelRequest {
    const KIND: CommandKind = CommandKind::CancelOffer;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.id <= 0 {
            return Err(ValidationError::Missing { field: "id" });
        }
        Ok(())
    }
}

// ─── CancelAllRequest ────────────────────────────────────────────────────────

/// Cancel every outstanding offer in one currency.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CancelAllRequest {
    pub currency: Currency,
}

impl CancelAllRequest {
    pub fn new(currency: impl Into<Currency>) -> Self {
        Self {
            currency: currency.into(),
        }
    }
}

impl Command for CancelAllRequest {
    const KIND: CommandKind = CommandKind::CancelAllOffers;

    fn validate(&self) -> Result<(), ValidationError> {
        if self.currency.is_empty() {
            return Err(ValidationError::Missing { field: "currency" });
        }
        Ok(())
    }
}
