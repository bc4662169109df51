//! Websocket payloads: the positional input envelope and inbound frames.
//!
//! Account-level commands are sent on channel `0` as
//! `[0, "<code>", null, <payload>]`. Socket management is left to the
//! application; this module only builds and takes apart the arrays.

use crate::error::{DecodeError, EncodeError, JsonKind};
use serde::de::DeserializeOwned;
use serde_json::Value;

/// Channel id of the authenticated account channel.
pub const ACCOUNT_CHANNEL: u64 = 0;

/// Message code of an inbound notification frame (`[0, "n", [...]]`).
pub const NOTIFICATION_CODE: &str = "n";

const ENVELOPE: &str = "ws envelope";

/// Wrap a canonical payload in the account-channel input envelope.
pub(crate) fn envelope(code: &str, payload: &Value) -> Result<Vec<u8>, EncodeError> {
    Ok(serde_json::to_vec(&(ACCOUNT_CHANNEL, code, (), payload))?)
}

/// A parsed outbound command envelope.
#[derive(Debug, Clone, PartialEq)]
pub struct WsEnvelope {
    pub code: String,
    pub payload: Value,
}

impl WsEnvelope {
    pub fn parse(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        let items = match value.as_array() {
            Some(items) if items.len() == 4 => items,
            _ => {
                return Err(DecodeError::UnexpectedShape {
                    entity: ENVELOPE,
                    expected: "a 4-element array",
                    actual: JsonKind::of(&value),
                })
            }
        };

        if items[0].as_u64() != Some(ACCOUNT_CHANNEL) {
            return Err(DecodeError::InvalidValue {
                entity: ENVELOPE,
                row: 0,
                field: 0,
                detail: format!("expected channel {}, got {}", ACCOUNT_CHANNEL, items[0]),
            });
        }
        let code = items[1].as_str().ok_or_else(|| field_type(1, "string", &items[1]))?;
        if !items[2].is_null() {
            return Err(field_type(2, "null", &items[2]));
        }
        if !items[3].is_object() {
            return Err(field_type(3, "object", &items[3]));
        }

        Ok(Self {
            code: code.to_string(),
            payload: items[3].clone(),
        })
    }

    /// Deserialize the payload back into a typed command.
    pub fn payload_as<T: DeserializeOwned>(&self) -> Result<T, DecodeError> {
        Ok(serde_json::from_value(self.payload.clone())?)
    }
}

/// Extract the inner notification array from `[0, "n", [...]]`.
pub(crate) fn notification_body(value: &Value) -> Result<&Value, DecodeError> {
    const FRAME: &str = "ws notification frame";
    let items = value.as_array().ok_or(DecodeError::UnexpectedShape {
        entity: FRAME,
        expected: "array",
        actual: JsonKind::of(value),
    })?;
    if items.len() < 3 {
        return Err(DecodeError::Shape {
            entity: FRAME,
            row: 0,
            min: 3,
            got: items.len(),
        });
    }
    match items[1].as_str() {
        Some(NOTIFICATION_CODE) => Ok(&items[2]),
        Some(other) => Err(DecodeError::InvalidValue {
            entity: FRAME,
            row: 0,
            field: 1,
            detail: format!("expected message code {:?}, got {:?}", NOTIFICATION_CODE, other),
        }),
        None => Err(DecodeError::FieldType {
            entity: FRAME,
            row: 0,
            field: 1,
            expected: "string",
            actual: JsonKind::of(&items[1]),
        }),
    }
}

fn field_type(field: usize, expected: &'static str, value: &Value) -> DecodeError {
    DecodeError::FieldType {
        entity: ENVELOPE,
        row: 0,
        field,
        expected,
        actual: JsonKind::of(value),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_envelope_layout() {
        let bytes = envelope("foc", &json!({"id": 5})).unwrap();
        assert_eq!(bytes, br#"[0,"foc",null,{"id":5}]"#);
    }

    #[test]
    fn test_parse_round_trip() {
        let bytes = envelope("fon", &json!({"symbol": "fUSD"})).unwrap();
        let env = WsEnvelope::parse(&bytes).unwrap();
        assert_eq!(env.code, "fon");
        assert_eq!(env.payload, json!({"symbol": "fUSD"}));
    }

    #[test]
    fn test_parse_rejects_wrong_arity() {
        let err = WsEnvelope::parse(br#"[0,"foc",{"id":1}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::UnexpectedShape { .. }));
    }

    #[test]
    fn test_parse_rejects_non_null_reserved_slot() {
        let err = WsEnvelope::parse(br#"[0,"foc",1,{"id":1}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::FieldType { field: 2, .. }));
    }

    #[test]
    fn test_parse_rejects_other_channel() {
        let err = WsEnvelope::parse(br#"[3,"foc",null,{"id":1}]"#).unwrap_err();
        assert!(matches!(err, DecodeError::InvalidValue { field: 0, .. }));
    }

    #[test]
    fn test_notification_body() {
        let frame = json!([0, "n", [1, "foc-req"]]);
        assert_eq!(notification_body(&frame).unwrap(), &json!([1, "foc-req"]));

        let heartbeat = json!([0, "hb", []]);
        assert!(matches!(
            notification_body(&heartbeat),
            Err(DecodeError::InvalidValue { field: 1, .. })
        ));
    }
}
