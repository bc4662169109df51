//! Snapshot decoding: raw shape classification + positional row dispatch.
//!
//! The venue answers list queries with either an array of rows
//! (`[[f0, f1, ...], ...]`) or, occasionally, a single unwrapped row
//! (`[f0, f1, ...]`). [`RawShape::classify`] settles which one it is, then
//! every row goes through the same [`Row`] decoder.

use super::row::Row;
use crate::error::{DecodeError, JsonKind};
use serde::Serialize;
use serde_json::Value;

/// An entity that can be rebuilt from one positional row.
pub trait FromRow: Sized {
    /// Entity name used in decode errors.
    const ENTITY: &'static str;

    /// Number of leading fields a row must carry.
    const MIN_FIELDS: usize;

    fn from_row(row: &Row<'_>) -> Result<Self, DecodeError>;
}

/// Top-level shape of a raw snapshot payload.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RawShape<'a> {
    /// `[]`
    Empty,
    /// `[f0, f1, ...]`
    SingleRow(&'a [Value]),
    /// `[[f0, ...], [f0, ...], ...]`
    MultiRow(&'a [Value]),
}

impl<'a> RawShape<'a> {
    pub fn classify(entity: &'static str, value: &'a Value) -> Result<Self, DecodeError> {
        let items = value.as_array().ok_or(DecodeError::UnexpectedShape {
            entity,
            expected: "array",
            actual: JsonKind::of(value),
        })?;

        match items.first() {
            None => Ok(RawShape::Empty),
            Some(Value::Array(_)) => Ok(RawShape::MultiRow(items)),
            Some(_) => Ok(RawShape::SingleRow(items)),
        }
    }

    /// Decode every row in payload order.
    pub fn decode<T: FromRow>(self) -> Result<Vec<T>, DecodeError> {
        match self {
            RawShape::Empty => Ok(Vec::new()),
            RawShape::SingleRow(fields) => {
                let row = Row::new(T::ENTITY, 0, fields, T::MIN_FIELDS)?;
                Ok(vec![T::from_row(&row)?])
            }
            RawShape::MultiRow(rows) => rows
                .iter()
                .enumerate()
                .map(|(i, raw)| {
                    let fields = raw.as_array().ok_or(DecodeError::RowType {
                        entity: T::ENTITY,
                        row: i,
                        actual: JsonKind::of(raw),
                    })?;
                    let row = Row::new(T::ENTITY, i, fields, T::MIN_FIELDS)?;
                    T::from_row(&row)
                })
                .collect(),
        }
    }
}

/// Ordered collection of entities returned by one query.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot<T> {
    entries: Vec<T>,
}

impl<T: FromRow> Snapshot<T> {
    /// Decode raw response bytes. Malformed JSON yields no entries at all.
    pub fn from_raw(raw: &[u8]) -> Result<Self, DecodeError> {
        let value: Value = serde_json::from_slice(raw)?;
        Self::from_value(&value)
    }

    pub fn from_value(value: &Value) -> Result<Self, DecodeError> {
        let entries = RawShape::classify(T::ENTITY, value)?.decode()?;
        Ok(Self { entries })
    }
}

impl<T> Snapshot<T> {
    pub fn new(entries: Vec<T>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[T] {
        &self.entries
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.entries.iter()
    }

    pub fn first(&self) -> Option<&T> {
        self.entries.first()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn into_inner(self) -> Vec<T> {
        self.entries
    }
}

impl<T> Default for Snapshot<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
        }
    }
}

impl<T> IntoIterator for Snapshot<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Snapshot<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    /// Minimal two-field entity for exercising the shape logic.
    #[derive(Debug, PartialEq)]
    struct Pair {
        id: i64,
        name: String,
    }

    impl FromRow for Pair {
        const ENTITY: &'static str = "pair";
        const MIN_FIELDS: usize = 2;

        fn from_row(row: &Row<'_>) -> Result<Self, DecodeError> {
            Ok(Pair {
                id: row.int(0)?,
                name: row.string(1)?,
            })
        }
    }

    #[test]
    fn test_classify_shapes() {
        let empty = json!([]);
        let single = json!([1, "a"]);
        let multi = json!([[1, "a"], [2, "b"]]);
        assert_eq!(RawShape::classify("pair", &empty).unwrap(), RawShape::Empty);
        assert!(matches!(
            RawShape::classify("pair", &single).unwrap(),
            RawShape::SingleRow(_)
        ));
        assert!(matches!(
            RawShape::classify("pair", &multi).unwrap(),
            RawShape::MultiRow(_)
        ));
    }

    #[test]
    fn test_object_payload_is_unexpected_shape() {
        let err = Snapshot::<Pair>::from_raw(br#"{"id": 1}"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::UnexpectedShape {
                entity: "pair",
                actual: JsonKind::Object,
                ..
            }
        ));
    }

    #[test]
    fn test_single_and_wrapped_rows_agree() {
        let wrapped = Snapshot::<Pair>::from_raw(br#"[[7, "x"]]"#).unwrap();
        let bare = Snapshot::<Pair>::from_raw(br#"[7, "x"]"#).unwrap();
        assert_eq!(wrapped, bare);
        assert_eq!(bare.len(), 1);
    }

    #[test]
    fn test_row_order_is_preserved() {
        let snap = Snapshot::<Pair>::from_raw(br#"[[3,"c"],[1,"a"],[2,"b"]]"#).unwrap();
        let ids: Vec<i64> = snap.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_mixed_rows_report_row_type() {
        let err = Snapshot::<Pair>::from_raw(br#"[[1,"a"], 5]"#).unwrap_err();
        assert!(matches!(
            err,
            DecodeError::RowType {
                row: 1,
                actual: JsonKind::Number,
                ..
            }
        ));
    }

    #[test]
    fn test_short_second_row_names_its_index() {
        let err = Snapshot::<Pair>::from_raw(br#"[[1,"a"],[2]]"#).unwrap_err();
        assert!(matches!(err, DecodeError::Shape { row: 1, min: 2, got: 1, .. }));
    }

    #[test]
    fn test_truncated_json_is_parse_error() {
        let err = Snapshot::<Pair>::from_raw(br#"[[1,"a"],[2,"#).unwrap_err();
        assert!(matches!(err, DecodeError::Parse(_)));
    }

    #[test]
    fn test_empty_array_is_empty_snapshot() {
        let snap = Snapshot::<Pair>::from_raw(b"[]").unwrap();
        assert!(snap.is_empty());
    }
}
