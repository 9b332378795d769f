//! Dynamic column values and records
//!
//! Reads project an arbitrary subset of a table's columns, so results are
//! carried as ordered `(column, value)` pairs rather than typed models.

use crate::errors::StoreError;
use crate::traits::RecordTable;
use chrono::{DateTime, NaiveDateTime, Utc};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::cmp::Ordering;

/// A single column value as read from a store
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Timestamp(DateTime<Utc>),
    Text(String),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            FieldValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Numeric view, integers widened
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            FieldValue::Int(v) => Some(*v as f64),
            FieldValue::Float(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::Text(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub fn as_timestamp(&self) -> Option<DateTime<Utc>> {
        match self {
            FieldValue::Timestamp(v) => Some(*v),
            _ => None,
        }
    }

    /// Ordering between two non-null values of compatible kinds.
    ///
    /// Integers and floats compare numerically; anything else across kinds,
    /// and any comparison involving `Null`, is unordered.
    pub fn compare(&self, other: &FieldValue) -> Option<Ordering> {
        match (self, other) {
            (FieldValue::Bool(a), FieldValue::Bool(b)) => Some(a.cmp(b)),
            (FieldValue::Int(a), FieldValue::Int(b)) => Some(a.cmp(b)),
            (FieldValue::Timestamp(a), FieldValue::Timestamp(b)) => Some(a.cmp(b)),
            (FieldValue::Text(a), FieldValue::Text(b)) => Some(a.cmp(b)),
            (FieldValue::Int(_) | FieldValue::Float(_), FieldValue::Int(_) | FieldValue::Float(_)) => {
                self.as_f64()?.partial_cmp(&other.as_f64()?)
            }
            _ => None,
        }
    }

    /// Equality as evaluated by an equality condition.
    ///
    /// `Null` only matches `Null`, mirroring `IS NULL` in generated SQL.
    pub fn matches(&self, other: &FieldValue) -> bool {
        match (self, other) {
            (FieldValue::Null, FieldValue::Null) => true,
            (FieldValue::Null, _) | (_, FieldValue::Null) => false,
            _ => self.compare(other) == Some(Ordering::Equal),
        }
    }

    /// Convert a JSON value into the representation used for a column of `pg_type`
    pub(crate) fn from_json(column: &str, pg_type: &str, value: Value) -> Result<Self, StoreError> {
        let mismatch = |value: &Value| {
            StoreError::decode(column, format!("expected {} but found {}", pg_type, value))
        };

        if value.is_null() {
            return Ok(FieldValue::Null);
        }

        match pg_type {
            "BOOLEAN" => value.as_bool().map(FieldValue::Bool).ok_or_else(|| mismatch(&value)),
            "SMALLINT" | "INTEGER" | "BIGINT" => {
                value.as_i64().map(FieldValue::Int).ok_or_else(|| mismatch(&value))
            }
            "REAL" | "DOUBLE PRECISION" => {
                value.as_f64().map(FieldValue::Float).ok_or_else(|| mismatch(&value))
            }
            "TIMESTAMP WITH TIME ZONE" | "TIMESTAMPTZ" => {
                let text = value.as_str().ok_or_else(|| mismatch(&value))?;
                DateTime::parse_from_rfc3339(text)
                    .map(|ts| FieldValue::Timestamp(ts.with_timezone(&Utc)))
                    .map_err(|e| StoreError::decode(column, e.to_string()))
            }
            "TIMESTAMP" => {
                let text = value.as_str().ok_or_else(|| mismatch(&value))?;
                text.parse::<NaiveDateTime>()
                    .map(|ts| FieldValue::Timestamp(ts.and_utc()))
                    .map_err(|e| StoreError::decode(column, e.to_string()))
            }
            "VARCHAR" | "TEXT" => match value {
                Value::String(text) => Ok(FieldValue::Text(text)),
                other => Err(mismatch(&other)),
            },
            other => Err(StoreError::decode(
                column,
                format!("unsupported column type {}", other),
            )),
        }
    }
}

impl From<bool> for FieldValue {
    fn from(value: bool) -> Self {
        FieldValue::Bool(value)
    }
}

impl From<i32> for FieldValue {
    fn from(value: i32) -> Self {
        FieldValue::Int(value as i64)
    }
}

impl From<i64> for FieldValue {
    fn from(value: i64) -> Self {
        FieldValue::Int(value)
    }
}

impl From<f64> for FieldValue {
    fn from(value: f64) -> Self {
        FieldValue::Float(value)
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        FieldValue::Text(value.to_string())
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        FieldValue::Text(value)
    }
}

impl From<DateTime<Utc>> for FieldValue {
    fn from(value: DateTime<Utc>) -> Self {
        FieldValue::Timestamp(value)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map_or(FieldValue::Null, Into::into)
    }
}

/// One result row: the projected columns in projection order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, FieldValue)>,
}

impl Record {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set `column`, replacing any earlier value under the same name
    pub fn insert(&mut self, column: impl Into<String>, value: impl Into<FieldValue>) {
        let column = column.into();
        let value = value.into();
        match self.fields.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = value,
            None => self.fields.push((column, value)),
        }
    }

    /// Builder form of [`Record::insert`]
    pub fn with(mut self, column: impl Into<String>, value: impl Into<FieldValue>) -> Self {
        self.insert(column, value);
        self
    }

    pub fn get(&self, column: &str) -> Option<&FieldValue> {
        self.fields
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.fields.iter().map(|(name, _)| name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.fields.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Keep exactly `columns`, in that order. Columns absent from the record come back as `Null`.
    pub fn project<S: AsRef<str>>(&self, columns: &[S]) -> Record {
        columns
            .iter()
            .map(|column| {
                let column = column.as_ref();
                let value = self.get(column).cloned().unwrap_or(FieldValue::Null);
                (column.to_string(), value)
            })
            .collect()
    }

    /// Flatten a table model into a full-width record using the table's column types
    pub fn from_model<T: RecordTable + Serialize>(model: &T) -> Result<Record, StoreError> {
        let table = T::table();
        let json = serde_json::to_value(model)
            .map_err(|e| StoreError::decode(table.name, e.to_string()))?;
        let Value::Object(mut object) = json else {
            return Err(StoreError::decode(table.name, "model did not serialize to an object"));
        };

        let mut record = Record::new();
        for column in table.columns {
            let value = object.remove(column.name).unwrap_or(Value::Null);
            record.insert(column.name, FieldValue::from_json(column.name, column.pg_type, value)?);
        }
        Ok(record)
    }
}

impl FromIterator<(String, FieldValue)> for Record {
    fn from_iter<I: IntoIterator<Item = (String, FieldValue)>>(iter: I) -> Self {
        let mut record = Record::new();
        for (column, value) in iter {
            record.insert(column, value);
        }
        record
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (column, value) in &self.fields {
            map.serialize_entry(column, value)?;
        }
        map.end()
    }
}
