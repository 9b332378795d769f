//! Row decoding by column type

use crate::errors::StoreError;
use crate::value::{FieldValue, Record};
use chrono::{DateTime, NaiveDateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{Column, Row, TypeInfo, ValueRef};

/// Decode `columns` of `row` into a record, in the given order
pub fn decode_row(row: &PgRow, columns: &[&str]) -> Result<Record, StoreError> {
    let mut record = Record::new();
    for (index, column) in columns.iter().enumerate() {
        record.insert(*column, decode_column(row, index, column)?);
    }
    Ok(record)
}

fn decode_column(row: &PgRow, index: usize, column: &str) -> Result<FieldValue, StoreError> {
    let raw = row
        .try_get_raw(index)
        .map_err(|e| StoreError::decode(column, e.to_string()))?;
    if raw.is_null() {
        return Ok(FieldValue::Null);
    }

    let type_name = row.column(index).type_info().name().to_string();
    let decode_err = |e: sqlx::Error| StoreError::decode(column, e.to_string());

    let value = match type_name.as_str() {
        "BOOL" => FieldValue::Bool(row.try_get::<bool, _>(index).map_err(decode_err)?),
        "INT2" => FieldValue::Int(row.try_get::<i16, _>(index).map_err(decode_err)? as i64),
        "INT4" => FieldValue::Int(row.try_get::<i32, _>(index).map_err(decode_err)? as i64),
        "INT8" => FieldValue::Int(row.try_get::<i64, _>(index).map_err(decode_err)?),
        "FLOAT4" => FieldValue::Float(row.try_get::<f32, _>(index).map_err(decode_err)? as f64),
        "FLOAT8" => FieldValue::Float(row.try_get::<f64, _>(index).map_err(decode_err)?),
        "TEXT" | "VARCHAR" | "BPCHAR" | "NAME" => {
            FieldValue::Text(row.try_get::<String, _>(index).map_err(decode_err)?)
        }
        "TIMESTAMPTZ" => {
            FieldValue::Timestamp(row.try_get::<DateTime<Utc>, _>(index).map_err(decode_err)?)
        }
        "TIMESTAMP" => FieldValue::Timestamp(
            row.try_get::<NaiveDateTime, _>(index)
                .map_err(decode_err)?
                .and_utc(),
        ),
        other => {
            return Err(StoreError::decode(
                column,
                format!("unsupported column type {}", other),
            ))
        }
    };
    Ok(value)
}
