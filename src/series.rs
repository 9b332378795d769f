//! Columnar reshaping of time-series reads
//!
//! Charts consume one array per column rather than one object per row.

use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use store_object::{FieldValue, Record};

use crate::dispatch::ACQ_TIME;

/// Column name to values, columns in first-seen order, rows in input order
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ColumnarSeries {
    columns: Vec<(String, Vec<FieldValue>)>,
}

impl ColumnarSeries {
    /// Pivot `records` into columns. `acq_time` values become unix milliseconds.
    pub fn from_records(records: &[Record]) -> Self {
        let mut series = Self::default();
        for record in records {
            for (column, value) in record.iter() {
                let value = match value {
                    FieldValue::Timestamp(ts) if column == ACQ_TIME => {
                        FieldValue::Int(ts.timestamp_millis())
                    }
                    other => other.clone(),
                };
                series.push(column, value);
            }
        }
        series
    }

    fn push(&mut self, column: &str, value: FieldValue) {
        match self.columns.iter_mut().find(|(name, _)| name == column) {
            Some((_, values)) => values.push(value),
            None => self.columns.push((column.to_string(), vec![value])),
        }
    }

    pub fn get(&self, column: &str) -> Option<&[FieldValue]> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, values)| values.as_slice())
    }

    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

impl Serialize for ColumnarSeries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (column, values) in &self.columns {
            map.serialize_entry(column, values)?;
        }
        map.end()
    }
}
