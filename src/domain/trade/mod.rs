//! Trade domain: matched funding trades.

mod convert;
pub mod wire;

use crate::shared::FundingSymbol;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// One execution of a funding offer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FundingTrade {
    pub id: i64,
    pub symbol: FundingSymbol,
    pub created_at: DateTime<Utc>,
    pub offer_id: i64,
    /// Positive when the account lent, negative when it borrowed.
    pub amount: Decimal,
    pub rate: Decimal,
    pub period: u32,
    pub maker: bool,
}
