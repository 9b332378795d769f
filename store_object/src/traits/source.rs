//! Record sources
//!
//! A source executes a checked [`QueryPlan`] and returns projected records.
//! The provided methods build and check the plan, so implementors only deal
//! with execution.

use crate::errors::StoreError;
use crate::query_builder::{QueryPlan, QuerySpec};
use crate::schema::SchemaDescriptor;
use crate::value::Record;
use async_trait::async_trait;

#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Logical store name, used in error messages
    fn name(&self) -> &str;

    /// Execute a plan. Each returned record carries exactly the plan's
    /// projected columns, in projection order.
    async fn fetch(&self, plan: &QueryPlan<'_>) -> Result<Vec<Record>, StoreError>;

    /// Check `spec` against `schema` and run it
    async fn select(
        &self,
        schema: &SchemaDescriptor,
        spec: &QuerySpec,
    ) -> Result<Vec<Record>, StoreError> {
        let plan = QueryPlan::new(schema, spec)?;
        self.fetch(&plan).await
    }

    /// Run `spec` and require exactly one matching record
    async fn select_one(
        &self,
        schema: &SchemaDescriptor,
        spec: &QuerySpec,
    ) -> Result<Record, StoreError> {
        let records = self.select(schema, spec).await?;
        expect_one(schema.table_name(), spec, records)
    }

    /// Run `spec` and return the first record, if any
    async fn select_first(
        &self,
        schema: &SchemaDescriptor,
        spec: &QuerySpec,
    ) -> Result<Option<Record>, StoreError> {
        Ok(self.select(schema, spec).await?.into_iter().next())
    }
}

/// Unpack a result set that must hold a single record
pub fn expect_one(
    table: &str,
    spec: &QuerySpec,
    mut records: Vec<Record>,
) -> Result<Record, StoreError> {
    match records.len() {
        0 => Err(StoreError::not_found(table, spec.describe())),
        1 => Ok(records.remove(0)),
        count => Err(StoreError::MultipleMatches {
            table: table.to_string(),
            count,
            context: spec.describe(),
        }),
    }
}
