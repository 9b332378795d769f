//! In-memory record source
//!
//! Evaluates plans over full-width records held per table. Used by tests and
//! by deployments that replay captured data without a database.

use crate::errors::StoreError;
use crate::query_builder::{QueryPlan, SortOrder};
use crate::traits::{RecordSource, RecordTable};
use crate::trace_log;
use crate::value::{FieldValue, Record};
use async_trait::async_trait;
use serde::Serialize;
use std::cmp::Ordering;
use std::collections::HashMap;

#[derive(Debug, Clone, Default)]
pub struct MemorySource {
    name: String,
    tables: HashMap<String, Vec<Record>>,
}

impl MemorySource {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            tables: HashMap::new(),
        }
    }

    /// Append a raw record to `table`
    pub fn insert(&mut self, table: &str, record: Record) {
        self.tables.entry(table.to_string()).or_default().push(record);
    }

    /// Append a model to its table
    pub fn insert_model<T: RecordTable + Serialize>(&mut self, model: &T) -> Result<(), StoreError> {
        let record = Record::from_model(model)?;
        self.insert(T::table().name, record);
        Ok(())
    }

    /// Builder form of [`MemorySource::insert_model`]
    pub fn with_models<'a, T, I>(mut self, models: I) -> Result<Self, StoreError>
    where
        T: RecordTable + Serialize + 'a,
        I: IntoIterator<Item = &'a T>,
    {
        for model in models {
            self.insert_model(model)?;
        }
        Ok(self)
    }

    pub fn len(&self, table: &str) -> usize {
        self.tables.get(table).map_or(0, Vec::len)
    }

    pub fn is_empty(&self, table: &str) -> bool {
        self.len(table) == 0
    }
}

/// Sort key comparison with nulls after every value in ascending order
fn compare_for_sort(a: Option<&FieldValue>, b: Option<&FieldValue>) -> Ordering {
    let a = a.filter(|value| !value.is_null());
    let b = b.filter(|value| !value.is_null());
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Greater,
        (Some(_), None) => Ordering::Less,
        (Some(a), Some(b)) => a.compare(b).unwrap_or(Ordering::Equal),
    }
}

#[async_trait]
impl RecordSource for MemorySource {
    fn name(&self) -> &str {
        &self.name
    }

    async fn fetch(&self, plan: &QueryPlan<'_>) -> Result<Vec<Record>, StoreError> {
        let Some(rows) = self.tables.get(plan.table_name()) else {
            return Ok(Vec::new());
        };

        let mut matched: Vec<&Record> = rows
            .iter()
            .filter(|row| {
                plan.range()
                    .is_none_or(|range| range.matches(row.get(&range.column)))
            })
            .filter(|row| {
                plan.equality_conditions()
                    .iter()
                    .all(|condition| condition.matches(row.get(&condition.column)))
            })
            .collect();

        // Stable sort, so ties keep insertion order
        if let Some(order_by) = plan.order_by() {
            matched.sort_by(|a, b| {
                let ordering = compare_for_sort(a.get(&order_by.column), b.get(&order_by.column));
                match order_by.order {
                    SortOrder::Asc => ordering,
                    SortOrder::Desc => ordering.reverse(),
                }
            });
        }

        if let Some(limit) = plan.limit() {
            matched.truncate(limit as usize);
        }

        trace_log!("[{}] {} rows from {}", self.name, matched.len(), plan.table_name());

        let columns = plan.schema().column_names();
        Ok(matched.into_iter().map(|row| row.project(&columns)).collect())
    }
}
