//! Conversion: raw notification array → `Notification`.

use super::wire::{carries_offers, fields};
use super::{Notification, NotificationStatus, NotifyInfo};
use crate::codec::{RawShape, Row, Snapshot};
use crate::domain::offer::Offer;
use crate::error::{DecodeError, JsonKind};
use serde_json::Value;

const ENTITY: &str = "notification";

impl Notification {
    /// Decode a REST notification: `[MTS, TYPE, MESSAGE_ID, _, INFO, CODE, STATUS, TEXT]`.
    pub fn from_raw(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        Self::from_value(&value)
    }

    /// Decode a websocket notification frame: `[0, "n", [...]]`.
    pub fn from_ws_frame(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        Self::from_value(crate::ws::notification_body(&value)?)
    }

    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let items = value.as_array().ok_or(DecodeError::UnexpectedShape {
            entity: ENTITY,
            expected: "array",
            actual: JsonKind::of(value),
        })?;
        let row = Row::new(ENTITY, 0, items, fields::MIN)?;

        let kind = row.string(fields::TYPE)?;
        let status = NotificationStatus::from(row.string(fields::STATUS)?.as_str());
        let info = match row.raw(fields::NOTIFY_INFO) {
            None => NotifyInfo::None,
            // error payloads are partial rows; keep them as sent
            Some(raw) if status != NotificationStatus::Success => NotifyInfo::Raw(raw.clone()),
            Some(raw) if carries_offers(&kind) => decode_offers(raw)?,
            Some(raw) => NotifyInfo::Raw(raw.clone()),
        };

        Ok(Notification {
            created_at: row.timestamp(fields::MTS)?,
            kind,
            message_id: row.opt_int(fields::MESSAGE_ID)?,
            info,
            code: row.opt_int(fields::CODE)?,
            status,
            text: row.opt_string(fields::TEXT)?.unwrap_or_default(),
        })
    }
}

fn decode_offers(raw: &Value) -> Result<NotifyInfo, DecodeError> {
    let shape = RawShape::classify(<Offer as crate::codec::FromRow>::ENTITY, raw)?;
    Ok(match shape {
        RawShape::Empty => NotifyInfo::None,
        RawShape::SingleRow(_) => match shape.decode::<Offer>()?.pop() {
            Some(offer) => NotifyInfo::FundingOffer(offer),
            None => NotifyInfo::None,
        },
        RawShape::MultiRow(_) => NotifyInfo::FundingOffers(Snapshot::new(shape.decode()?)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use serde_json::json;

    const SUBMIT_OK: &str = r#"[1568711312155,"fon-req",null,null,[41238905,"fUSD",1568711312000,1568711312000,1000,1000,"LIMIT",null,null,0,"ACTIVE",null,null,null,0.0012,2,0,0,null,0,null],null,"SUCCESS","Submitting funding bid of 1000.0 USD at 0.12000 for 2 days."]"#;

    #[test]
    fn test_submit_notification() {
        let n = Notification::from_raw(SUBMIT_OK.as_bytes()).unwrap();
        assert!(n.is_success());
        assert_eq!(n.kind, "fon-req");
        assert_eq!(n.created_at.timestamp_millis(), 1568711312155);
        assert_eq!(n.message_id, None);
        assert_eq!(n.code, None);
        let offer = n.offer().expect("offer payload");
        assert_eq!(offer.id, 41238905);
        assert_eq!(offer.amount, Decimal::from(1000));
        assert!(n.text.starts_with("Submitting funding bid"));
    }

    #[test]
    fn test_ws_frame_matches_rest_notification() {
        let frame = format!("[0,\"n\",{}]", SUBMIT_OK);
        let ws = Notification::from_ws_frame(frame.as_bytes()).unwrap();
        let rest = Notification::from_raw(SUBMIT_OK.as_bytes()).unwrap();
        assert_eq!(ws, rest);
    }

    #[test]
    fn test_cancel_all_notification_carries_offer_list() {
        let raw = json!([
            1575289447641_i64, "foc_all-req", null, null,
            [[1, "fUSD", 1, 1, 10, 10], [2, "fUSD", 1, 1, 20, 20]],
            null, "SUCCESS", "Cancelled 2 offers"
        ]);
        let n = Notification::from_value(&raw).unwrap();
        match n.info {
            NotifyInfo::FundingOffers(snap) => {
                let ids: Vec<i64> = snap.iter().map(|o| o.id).collect();
                assert_eq!(ids, vec![1, 2]);
            }
            other => panic!("unexpected info: {other:?}"),
        }
    }

    #[test]
    fn test_error_notification_keeps_raw_info() {
        let raw = json!([
            1568711312155_i64, "fon-req", null, null,
            [null, "fUSD", null, null, 1000],
            null, "ERROR", "Invalid period."
        ]);
        let n = Notification::from_value(&raw).unwrap();
        assert_eq!(n.status, NotificationStatus::Error);
        assert!(matches!(n.info, NotifyInfo::Raw(_)));
        assert_eq!(n.text, "Invalid period.");
    }

    #[test]
    fn test_other_kinds_keep_raw_info() {
        let raw = json!([1, "fk-req", 5, null, {"id": 7}, 0, "SUCCESS", "ok"]);
        let n = Notification::from_value(&raw).unwrap();
        assert_eq!(n.message_id, Some(5));
        assert_eq!(n.code, Some(0));
        assert_eq!(n.info, NotifyInfo::Raw(json!({"id": 7})));
    }

    #[test]
    fn test_short_notification_is_shape_error() {
        let err = Notification::from_raw(br#"[1,"foc-req",null,null,[],null,"SUCCESS"]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::Shape {
                entity: "notification",
                min: 8,
                got: 7,
                ..
            }
        ));
    }

    #[test]
    fn test_wrong_status_type_is_field_type_error() {
        let err = Notification::from_raw(br#"[1,"foc-req",null,null,null,null,200,"ok"]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::FieldType {
                field: 6,
                expected: "string",
                actual: JsonKind::Number,
                ..
            }
        ));
    }

    #[test]
    fn test_object_is_unexpected_shape() {
        let err = Notification::from_raw(br#"{"status":"SUCCESS"}"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_truncated_notification_is_parse_error() {
        let err = Notification::from_raw(&SUBMIT_OK.as_bytes()[..40]).unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)));
    }
}
