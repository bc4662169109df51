//! Loan domain: funding contracts the account is party to.

pub(crate) mod convert;
pub mod wire;

use crate::shared::{FundingSide, FundingSymbol};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// An active (or historical) funding loan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Loan {
    pub id: i64,
    pub symbol: FundingSymbol,
    pub side: FundingSide,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub amount: Decimal,
    pub flags: i64,
    pub status: Option<String>,
    pub rate: Decimal,
    pub period: u32,
    pub opened_at: Option<DateTime<Utc>>,
    pub last_payout_at: Option<DateTime<Utc>>,
    pub notify: bool,
    pub hidden: bool,
    pub renew: bool,
    pub rate_real: Option<Decimal>,
    pub no_close: bool,
}
