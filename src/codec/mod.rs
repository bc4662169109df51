//! Wire codec: typed commands to bytes, raw venue JSON to typed results.
//!
//! Every command has one canonical JSON-object payload. The REST body *is*
//! that object; the websocket form wraps the same object in the positional
//! envelope `[0, "<code>", null, <payload>]`. Field names therefore live in
//! exactly one place (the command's `Serialize` impl).
//!
//! Nothing in here performs I/O, logs, or keeps state.

pub mod row;
pub mod snapshot;

pub use row::Row;
pub use snapshot::{FromRow, RawShape, Snapshot};

use crate::domain::notification::Notification;
use crate::error::{DecodeError, EncodeError, SdkError, ValidationError};
use crate::permission::{CommandKind, Permission};
use serde::Serialize;
use serde_json::Value;

/// A typed write command the venue accepts.
pub trait Command: Serialize {
    const KIND: CommandKind;

    /// Pre-encode checks. Runs before any byte is produced.
    fn validate(&self) -> Result<(), ValidationError> {
        Ok(())
    }

    fn permission(&self) -> Permission {
        Self::KIND.permission()
    }
}

/// Validated canonical payload shared by both transports.
pub fn payload<C: Command>(cmd: &C) -> Result<Value, SdkError> {
    cmd.validate()?;
    Ok(serde_json::to_value(cmd).map_err(EncodeError::from)?)
}

/// REST request body: the bare JSON object.
pub fn encode_rest<C: Command>(cmd: &C) -> Result<Vec<u8>, SdkError> {
    let payload = payload(cmd)?;
    Ok(serde_json::to_vec(&payload).map_err(EncodeError::from)?)
}

/// Websocket input message: the JSON object inside the account envelope.
pub fn encode_ws<C: Command>(cmd: &C) -> Result<Vec<u8>, SdkError> {
    let payload = payload(cmd)?;
    let code = C::KIND.ws_code().ok_or(EncodeError::NoWsForm(C::KIND))?;
    Ok(crate::ws::envelope(code, &payload)?)
}

/// Decode a REST notification array.
pub fn decode_notification(raw: &[u8]) -> Result<Notification, DecodeError> {
    Notification::from_raw(raw)
}

/// Decode a list response into an ordered snapshot.
pub fn decode_snapshot<T: FromRow>(raw: &[u8]) -> Result<Snapshot<T>, DecodeError> {
    Snapshot::from_raw(raw)
}
