//! Conversion: offer row → `Offer`.

use super::wire::fields;
use super::Offer;
use crate::codec::{FromRow, Row};
use crate::error::DecodeError;
use rust_decimal::Decimal;

impl FromRow for Offer {
    const ENTITY: &'static str = "offer";
    const MIN_FIELDS: usize = fields::MIN;

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        let period = row.opt_int(fields::PERIOD)?.unwrap_or(0);
        Ok(Offer {
            id: row.int(fields::ID)?,
            symbol: row.string(fields::SYMBOL)?.into(),
            created_at: row.timestamp(fields::MTS_CREATED)?,
            updated_at: row.timestamp(fields::MTS_UPDATED)?,
            amount: row.decimal(fields::AMOUNT)?,
            amount_orig: row.decimal(fields::AMOUNT_ORIG)?,
            offer_type: row.opt_string(fields::TYPE)?,
            flags: row.opt_int(fields::FLAGS)?.unwrap_or(0),
            status: row.opt_string(fields::STATUS)?,
            rate: row.opt_decimal(fields::RATE)?.unwrap_or(Decimal::ZERO),
            period: u32::try_from(period)
                .map_err(|_| row.invalid(fields::PERIOD, format!("period {} out of range", period)))?,
            notify: row.flag(fields::NOTIFY)?,
            hidden: row.flag(fields::HIDDEN)?,
            renew: row.flag(fields::RENEW)?,
            rate_real: row.opt_decimal(fields::RATE_REAL)?,
        })
    }
}
