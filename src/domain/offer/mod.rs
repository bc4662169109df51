//! Offer domain: funding offers and the requests that create or cancel them.

mod convert;
pub mod wire;

use crate::shared::FundingSymbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

pub use wire::{CancelAllRequest, CancelRequest, FundingOfferRequest, OfferType};

/// A funding offer as reported by the venue.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offer {
    pub id: i64,
    pub symbol: FundingSymbol,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    /// Remaining amount. Positive lends, negative borrows.
    pub amount: Decimal,
    pub amount_orig: Decimal,
    pub offer_type: Option<String>,
    pub flags: i64,
    pub status: Option<String>,
    pub rate: Decimal,
    /// Days.
    pub period: u32,
    pub notify: bool,
    pub hidden: bool,
    pub renew: bool,
    pub rate_real: Option<Decimal>,
}

impl Offer {
    pub fn is_active(&self) -> bool {
        self.status
            .as_deref()
            .map(|s| s.starts_with("ACTIVE"))
            .unwrap_or(false)
    }

    /// Amount already matched.
    pub fn filled(&self) -> Decimal {
        self.amount_orig - self.amount
    }
}
