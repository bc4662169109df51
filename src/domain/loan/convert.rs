//! Conversion: loan row → `Loan`.

use super::wire::fields;
use super::Loan;
use crate::codec::{FromRow, Row};
use crate::error::DecodeError;
use crate::shared::FundingSide;
use rust_decimal::Decimal;

impl FromRow for Loan {
    const ENTITY: &'static str = "loan";
    const MIN_FIELDS: usize = fields::MIN;

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        decode_contract(row)
    }
}

/// Shared by loans and credits, which use the same leading layout.
pub(crate) fn decode_contract(row: &Row<'_>) -> Result<Loan, DecodeError> {
    let side = row.int(fields::SIDE)?;
    let period = row.opt_int(fields::PERIOD)?.unwrap_or(0);

    Ok(Loan {
        id: row.int(fields::ID)?,
        symbol: row.string(fields::SYMBOL)?.into(),
        side: FundingSide::from_wire(side)
            .ok_or_else(|| row.invalid(fields::SIDE, format!("unknown side {}", side)))?,
        created_at: row.timestamp(fields::MTS_CREATED)?,
        updated_at: row.timestamp(fields::MTS_UPDATED)?,
        amount: row.decimal(fields::AMOUNT)?,
        flags: row.opt_int(fields::FLAGS)?.unwrap_or(0),
        status: row.opt_string(fields::STATUS)?,
        rate: row.opt_decimal(fields::RATE)?.unwrap_or(Decimal::ZERO),
        period: u32::try_from(period)
            .map_err(|_| row.invalid(fields::PERIOD, format!("period {} out of range", period)))?,
        opened_at: row.opt_timestamp(fields::MTS_OPENING)?,
        last_payout_at: row.opt_timestamp(fields::MTS_LAST_PAYOUT)?,
        notify: row.flag(fields::NOTIFY)?,
        hidden: row.flag(fields::HIDDEN)?,
        renew: row.flag(fields::RENEW)?,
        rate_real: row.opt_decimal(fields::RATE_REAL)?,
        no_close: row.flag(fields::NO_CLOSE)?,
    })
}
