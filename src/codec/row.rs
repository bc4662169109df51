//! Positional row reader.
//!
//! A venue row is a JSON array whose field meaning is fixed by position. `Row`
//! wraps one such array and exposes typed accessors that coerce the venue's
//! inconsistent encodings (numbers sent as strings, `0`/`1` flags, `null`
//! placeholders). Every entity decoder goes through this one type.

use crate::error::{DecodeError, JsonKind};
use chrono::{DateTime, Utc};
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde_json::Value;
use std::str::FromStr;

/// One positional row of a raw payload.
#[derive(Debug, Clone, Copy)]
pub struct Row<'a> {
    entity: &'static str,
    index: usize,
    fields: &'a [Value],
}

impl<'a> Row<'a> {
    /// Wrap `fields` as row `index` of `entity`, requiring at least `min` fields.
    pub fn new(
        entity: &'static str,
        index: usize,
        fields: &'a [Value],
        min: usize,
    ) -> Result<Self, DecodeError> {
        if fields.len() < min {
            return Err(DecodeError::Shape {
                entity,
                row: index,
                min,
                got: fields.len(),
            });
        }
        Ok(Self {
            entity,
            index,
            fields,
        })
    }

    pub fn entity(&self) -> &'static str {
        self.entity
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Raw field at `pos`. Missing trailing fields and `null` both read as `None`.
    pub fn raw(&self, pos: usize) -> Option<&'a Value> {
        self.fields.get(pos).filter(|v| !v.is_null())
    }

    // ── Integers ─────────────────────────────────────────────────────────

    pub fn int(&self, pos: usize) -> Result<i64, DecodeError> {
        self.opt_int(pos)?
            .ok_or_else(|| self.type_error(pos, "integer"))
    }

    pub fn opt_int(&self, pos: usize) -> Result<Option<i64>, DecodeError> {
        match self.raw(pos) {
            None => Ok(None),
            Some(v) => coerce_int(v)
                .map(Some)
                .ok_or_else(|| self.type_error(pos, "integer")),
        }
    }

    // ── Decimals ─────────────────────────────────────────────────────────

    pub fn decimal(&self, pos: usize) -> Result<Decimal, DecodeError> {
        self.opt_decimal(pos)?
            .ok_or_else(|| self.type_error(pos, "number"))
    }

    pub fn opt_decimal(&self, pos: usize) -> Result<Option<Decimal>, DecodeError> {
        match self.raw(pos) {
            None => Ok(None),
            Some(v) => match coerce_decimal(v) {
                Some(d) => Ok(Some(d)),
                // well-formed JSON number beyond Decimal's range
                None if v.is_number() => Err(self.invalid(pos, format!("{} out of range", v))),
                None => Err(self.type_error(pos, "number")),
            },
        }
    }

    // ── Strings ──────────────────────────────────────────────────────────

    pub fn string(&self, pos: usize) -> Result<String, DecodeError> {
        self.opt_string(pos)?
            .ok_or_else(|| self.type_error(pos, "string"))
    }

    pub fn opt_string(&self, pos: usize) -> Result<Option<String>, DecodeError> {
        match self.raw(pos) {
            None => Ok(None),
            Some(Value::String(s)) => Ok(Some(s.clone())),
            Some(_) => Err(self.type_error(pos, "string")),
        }
    }

    // ── Flags ────────────────────────────────────────────────────────────

    /// `0`/`1`, `true`/`false`, or absent (false).
    pub fn flag(&self, pos: usize) -> Result<bool, DecodeError> {
        match self.raw(pos) {
            None => Ok(false),
            Some(Value::Bool(b)) => Ok(*b),
            Some(v) => coerce_decimal(v)
                .map(|d| !d.is_zero())
                .ok_or_else(|| self.type_error(pos, "flag")),
        }
    }

    // ── Timestamps ───────────────────────────────────────────────────────

    /// Epoch milliseconds.
    pub fn timestamp(&self, pos: usize) -> Result<DateTime<Utc>, DecodeError> {
        let millis = self.int(pos)?;
        self.millis_to_datetime(pos, millis)
    }

    pub fn opt_timestamp(&self, pos: usize) -> Result<Option<DateTime<Utc>>, DecodeError> {
        match self.opt_int(pos)? {
            None => Ok(None),
            Some(millis) => self.millis_to_datetime(pos, millis).map(Some),
        }
    }

    fn millis_to_datetime(&self, pos: usize, millis: i64) -> Result<DateTime<Utc>, DecodeError> {
        DateTime::<Utc>::from_timestamp_millis(millis)
            .ok_or_else(|| self.invalid(pos, format!("timestamp {} out of range", millis)))
    }

    // ── Errors ───────────────────────────────────────────────────────────

    /// A well-typed value outside the field's domain.
    pub fn invalid(&self, pos: usize, detail: impl Into<String>) -> DecodeError {
        DecodeError::InvalidValue {
            entity: self.entity,
            row: self.index,
            field: pos,
            detail: detail.into(),
        }
    }

    fn type_error(&self, pos: usize, expected: &'static str) -> DecodeError {
        let actual = self
            .fields
            .get(pos)
            .map(JsonKind::of)
            .unwrap_or(JsonKind::Null);
        DecodeError::FieldType {
            entity: self.entity,
            row: self.index,
            field: pos,
            expected,
            actual,
        }
    }
}

fn coerce_int(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .and_then(|f| Decimal::from_f64_retain(f))
                .and_then(|d| d.to_i64())
        }),
        Value::String(s) => {
            let s = s.trim();
            s.parse::<i64>().ok().or_else(|| {
                parse_decimal(s)
                    .filter(|d| d.fract().is_zero())
                    .and_then(|d| d.to_i64())
            })
        }
        _ => None,
    }
}

fn coerce_decimal(value: &Value) -> Option<Decimal> {
    match value {
        Value::Number(n) => parse_decimal(&n.to_string()),
        Value::String(s) => parse_decimal(s.trim()),
        _ => None,
    }
}

/// Plain (`"0.002"`) or scientific (`"1e-8"`) notation.
pub(crate) fn parse_decimal(s: &str) -> Option<Decimal> {
    if s.is_empty() {
        return None;
    }
    Decimal::from_str(s)
        .or_else(|_| Decimal::from_scientific(s))
        .ok()
}
