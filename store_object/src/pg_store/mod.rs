//! PostgreSQL record source

mod decode;

use crate::errors::StoreError;
use crate::query_builder::QueryPlan;
use crate::traits::RecordSource;
use crate::value::{FieldValue, Record};
use crate::{debug_log, trace_log};
use async_trait::async_trait;
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::{PgPool, Postgres};
use std::time::Duration;

pub use decode::decode_row;

/// Executes plans against one PostgreSQL pool.
///
/// Every read is bounded by `read_timeout`, measured from acquiring a
/// connection to receiving the last row.
#[derive(Debug, Clone)]
pub struct PgSource {
    name: String,
    pool: PgPool,
    read_timeout: Duration,
}

impl PgSource {
    pub fn new(name: impl Into<String>, pool: PgPool, read_timeout: Duration) -> Self {
        Self {
            name: name.into(),
            pool,
            read_timeout,
        }
    }

    pub fn pool(&self) -> &PgPool {
        &self.pool
    }

    pub fn read_timeout(&self) -> Duration {
        self.read_timeout
    }

    /// Run a statement that returns no rows, such as DDL
    pub async fn execute(&self, sql: &str) -> Result<u64, StoreError> {
        debug_log!("[{}] execute: {}", self.name, sql);
        let result = tokio::time::timeout(self.read_timeout, sqlx::query(sql).execute(&self.pool))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| StoreError::from_sqlx(&self.name, e))?;
        Ok(result.rows_affected())
    }

    /// Round-trip a trivial query to prove the pool can serve reads
    pub async fn ping(&self) -> Result<(), StoreError> {
        tokio::time::timeout(self.read_timeout, sqlx::query("SELECT 1").execute(&self.pool))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| StoreError::from_sqlx(&self.name, e))?;
        Ok(())
    }

    fn timeout_error(&self) -> StoreError {
        StoreError::Timeout {
            store: self.name.clone(),
            seconds: self.read_timeout.as_secs(),
        }
    }
}

#[async_trait]
impl RecordSource for PgSource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, plan: &QueryPlan<'_>) -> Result<Vec<Record>, StoreError> {
        let (sql, params) = plan.to_sql();
        debug_log!("[{}] fetch: {} ({} params)", self.name, sql, params.len());

        let mut query = sqlx::query(&sql);
        for param in params {
            query = bind_value(query, param);
        }

        let rows = tokio::time::timeout(self.read_timeout, query.fetch_all(&self.pool))
            .await
            .map_err(|_| self.timeout_error())?
            .map_err(|e| StoreError::from_sqlx(&self.name, e))?;

        trace_log!("[{}] {} rows from {}", self.name, rows.len(), plan.table_name());

        let columns = plan.schema().column_names();
        rows.iter().map(|row| decode_row(row, &columns)).collect()
    }
}

fn bind_value(
    query: Query<'_, Postgres, PgArguments>,
    value: FieldValue,
) -> Query<'_, Postgres, PgArguments> {
    match value {
        FieldValue::Int(i) => {
            if i >= i32::MIN as i64 && i <= i32::MAX as i64 {
                query.bind(i as i32)
            } else {
                query.bind(i)
            }
        }
        FieldValue::Float(f) => query.bind(f),
        FieldValue::Bool(b) => query.bind(b),
        FieldValue::Text(s) => query.bind(s),
        FieldValue::Timestamp(ts) => query.bind(ts),
        FieldValue::Null => query.bind(Option::<String>::None),
    }
}
