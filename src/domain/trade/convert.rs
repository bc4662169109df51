//! Conversion: funding trade row → `FundingTrade`.

use super::wire::fields;
use super::FundingTrade;
use crate::codec::{FromRow, Row};
use crate::error::DecodeError;

impl FromRow for FundingTrade {
    const ENTITY: &'static str = "trade";
    const MIN_FIELDS: usize = fields::MIN;

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        let period = row.int(fields::PERIOD)?;
        Ok(FundingTrade {
            id: row.int(fields::ID)?,
            symbol: row.string(fields::SYMBOL)?.into(),
            created_at: row.timestamp(fields::MTS_CREATED)?,
            offer_id: row.int(fields::OFFER_ID)?,
            amount: row.decimal(fields::AMOUNT)?,
            rate: row.decimal(fields::RATE)?,
            period: u32::try_from(period)
                .map_err(|_| row.invalid(fields::PERIOD, format!("period {} out of range", period)))?,
            maker: row.flag(fields::MAKER)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Snapshot;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_trade_history_rows() {
        let raw = br#"[
            [636854,"fUSD",1575282446000,41238905,-1000,0.002,7,null],
            [636040,"fUST",1575271024000,41237892,"25.5","0.0011",2,1]
        ]"#;
        let snap = Snapshot::<FundingTrade>::from_raw(raw).unwrap();
        assert_eq!(snap.len(), 2);

        let first = &snap.entries()[0];
        assert_eq!(first.id, 636854);
        assert_eq!(first.offer_id, 41238905);
        assert_eq!(first.amount, Decimal::from(-1000));
        assert_eq!(first.rate, Decimal::from_str("0.002").unwrap());
        assert_eq!(first.period, 7);
        assert!(!first.maker);

        let second = &snap.entries()[1];
        assert_eq!(second.symbol.as_str(), "fUST");
        assert_eq!(second.amount, Decimal::from_str("25.5").unwrap());
        assert!(second.maker);
    }

    #[test]
    fn test_trade_requires_period() {
        let err = Snapshot::<FundingTrade>::from_raw(br#"[[1,"fUSD",1,2,10,0.01]]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Shape {
                entity: "trade",
                row: 0,
                min: 7,
                got: 6
            }
        ));
    }

    #[test]
    fn test_null_rate_is_field_type_error() {
        let err = Snapshot::<FundingTrade>::from_raw(br#"[[1,"fUSD",1,2,10,null,7]]"#).unwrap_err();
        assert!(matches!(err, DecodeError::FieldType { field: 5, .. }));
    }
}
