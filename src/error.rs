//! Unified SDK error types.

use crate::permission::CommandKind;
use serde_json::Value;
use thiserror::Error;

/// Top-level SDK error.
#[derive(Error, Debug)]
pub enum SdkError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Encode error: {0}")]
    Encode(#[from] EncodeError),

    #[error("Decode error: {0}")]
    Decode(#[from] DecodeError),

    #[error("HTTP error: {0}")]
    Http(#[from] HttpError),

    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),
}

/// A typed request failed a pre-encode check. Nothing was sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Missing { field: &'static str },

    #[error("{field}: expected one of {expected}, got {got:?}")]
    NotAllowed {
        field: &'static str,
        expected: &'static str,
        got: String,
    },

    #[error("{field} out of range: {detail}")]
    OutOfRange { field: &'static str, detail: String },
}

/// Failure to turn a valid command into bytes.
#[derive(Error, Debug)]
pub enum EncodeError {
    #[error("JSON encoding failed: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0:?} has no websocket form")]
    NoWsForm(CommandKind),
}

/// A raw venue payload did not match the expected decode contract.
#[derive(Error, Debug)]
pub enum DecodeError {
    #[error("Malformed JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("{entity}: expected {expected}, got {actual}")]
    UnexpectedShape {
        entity: &'static str,
        expected: &'static str,
        actual: JsonKind,
    },

    #[error("{entity} row {row}: expected at least {min} fields, got {got}")]
    Shape {
        entity: &'static str,
        row: usize,
        min: usize,
        got: usize,
    },

    #[error("{entity} row {row}: expected an array, got {actual}")]
    RowType {
        entity: &'static str,
        row: usize,
        actual: JsonKind,
    },

    #[error("{entity} row {row} field {field}: expected {expected}, got {actual}")]
    FieldType {
        entity: &'static str,
        row: usize,
        field: usize,
        expected: &'static str,
        actual: JsonKind,
    },

    #[error("{entity} row {row} field {field}: {detail}")]
    InvalidValue {
        entity: &'static str,
        row: usize,
        field: usize,
        detail: String,
    },
}

/// The JSON type of a raw value, used in decode error context.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

impl std::fmt::Display for JsonKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            JsonKind::Null => "null",
            JsonKind::Bool => "bool",
            JsonKind::Number => "number",
            JsonKind::String => "string",
            JsonKind::Array => "array",
            JsonKind::Object => "object",
        };
        f.write_str(s)
    }
}

/// HTTP-layer errors. Opaque to the codec; passed through unchanged.
#[derive(Error, Debug)]
pub enum HttpError {
    #[cfg(feature = "http")]
    #[error("Request failed: {0}")]
    Reqwest(#[from] reqwest::Error),

    #[error("Server error {status}: {body}")]
    ServerError { status: u16, body: String },

    #[error("Venue error {code}: {message}")]
    Venue { code: i64, message: String },

    #[error("Rate limited")]
    RateLimited,

    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Max retries exceeded after {attempts} attempts: {last_error}")]
    MaxRetriesExceeded { attempts: u32, last_error: String },
}

/// Request Factory errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("No API credentials configured")]
    MissingCredentials,

    #[error("Invalid API secret: {0}")]
    InvalidSecret(String),

    #[error("Environment variable {0} is not set")]
    MissingEnv(&'static str),
}
