//! Conversion: credit row → `Credit`.

use super::{fields, Credit};
use crate::codec::{FromRow, Row};
use crate::domain::loan::convert::decode_contract;
use crate::error::DecodeError;

impl FromRow for Credit {
    const ENTITY: &'static str = "credit";
    const MIN_FIELDS: usize = fields::MIN;

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
        Ok(Credit {
            loan: decode_contract(row)?,
            position_pair: row.opt_string(fields::POSITION_PAIR)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::codec::Snapshot;
    use crate::shared::FundingSide;
    use rust_decimal::Decimal;

    #[test]
    fn test_credit_row_with_position_pair() {
        let raw = br#"[[26222883,"fUSD",-1,1568115243000,1568115243000,"120.5",0,"ACTIVE",null,null,null,0.002,7,1568115243000,null,0,0,null,0,0.002,0,"tBTCUSD"]]"#;
        let snap = Snapshot::<Credit>::from_raw(raw).unwrap();
        let credit = &snap.entries()[0];
        assert_eq!(credit.loan.id, 26222883);
        assert_eq!(credit.loan.side, FundingSide::Borrower);
        assert_eq!(credit.loan.amount, Decimal::new(1205, 1));
        assert_eq!(credit.loan.last_payout_at, None);
        assert_eq!(credit.position_pair.as_deref(), Some("tBTCUSD"));
    }

    #[test]
    fn test_credit_errors_name_credit() {
        let err = Snapshot::<Credit>::from_raw(br#"[[1,"fUSD",-1]]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { entity: "credit", .. }));
    }

    #[test]
    fn test_credit_without_pair() {
        let snap = Snapshot::<Credit>::from_raw(br#"[1,"fUSD",-1,1,1,5]"#).unwrap();
        assert_eq!(snap.entries()[0].position_pair, None);
    }
}
