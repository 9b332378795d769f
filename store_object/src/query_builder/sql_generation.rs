//! SQL generation
//!
//! Turns a schema-checked spec into one parameterized SELECT statement.

use crate::errors::StoreError;
use crate::query_builder::builder::QuerySpec;
use crate::query_builder::filter::{EqualityCondition, RangeCondition};
use crate::query_builder::ordering::OrderBy;
use crate::schema::SchemaDescriptor;
use crate::validation::quote_identifier;
use crate::value::FieldValue;

/// A [`QuerySpec`] bound to the [`SchemaDescriptor`] it reads from.
///
/// Every column named by a condition or the ordering exists on the table;
/// construction fails with [`StoreError::SchemaMismatch`] otherwise.
#[derive(Debug, Clone)]
pub struct QueryPlan<'a> {
    schema: &'a SchemaDescriptor,
    spec: &'a QuerySpec,
    order_by: Option<OrderBy>,
}

impl<'a> QueryPlan<'a> {
    pub fn new(schema: &'a SchemaDescriptor, spec: &'a QuerySpec) -> Result<Self, StoreError> {
        let table = schema.table();
        let check = |column: &str| {
            if table.has_column(column) {
                Ok(())
            } else {
                Err(StoreError::schema_mismatch(table.name, column))
            }
        };

        for condition in &spec.equals {
            check(&condition.column)?;
        }
        if let Some(range) = &spec.range {
            check(&range.column)?;
        }
        if let Some(order_by) = &spec.order_by {
            check(&order_by.column)?;
        }

        // Reads without an explicit order follow the table's time column
        let order_by = spec
            .order_by
            .clone()
            .or_else(|| schema.timestamp_column().map(OrderBy::asc));

        Ok(Self {
            schema,
            spec,
            order_by,
        })
    }

    pub fn schema(&self) -> &SchemaDescriptor {
        self.schema
    }

    pub fn spec(&self) -> &QuerySpec {
        self.spec
    }

    pub fn table_name(&self) -> &'static str {
        self.schema.table_name()
    }

    pub fn equality_conditions(&self) -> &[EqualityCondition] {
        &self.spec.equals
    }

    pub fn range(&self) -> Option<&RangeCondition> {
        self.spec.range.as_ref().filter(|range| !range.is_unbounded())
    }

    /// Ordering actually applied, after the timestamp default
    pub fn order_by(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub fn limit(&self) -> Option<u32> {
        self.spec.limit
    }

    /// Render the statement and its positional parameters
    pub fn to_sql(&self) -> (String, Vec<FieldValue>) {
        let columns = self
            .schema
            .columns()
            .iter()
            .map(|column| column.quoted())
            .collect::<Vec<_>>()
            .join(", ");

        let mut sql = format!(
            "SELECT {} FROM {}",
            columns,
            quote_identifier(self.schema.table_name())
        );

        let (where_clause, values) = self.build_where_clause();
        if !where_clause.is_empty() {
            sql.push(' ');
            sql.push_str(&where_clause);
        }

        if let Some(order_by) = &self.order_by {
            sql.push_str(&format!(
                " ORDER BY {} {}",
                quote_identifier(&order_by.column),
                order_by.order.to_sql()
            ));
        }

        if let Some(limit) = self.spec.limit {
            sql.push_str(&format!(" LIMIT {}", limit));
        }

        (sql, values)
    }

    fn build_where_clause(&self) -> (String, Vec<FieldValue>) {
        let mut values = Vec::new();
        let mut conditions = Vec::new();
        let mut param_counter = 1;

        let mut push_param = |value: &FieldValue, values: &mut Vec<FieldValue>| {
            values.push(value.clone());
            let param = format!("${}", param_counter);
            param_counter += 1;
            param
        };

        if let Some(range) = self.range() {
            let column = quote_identifier(&range.column);
            if let Some(lower) = &range.lower {
                conditions.push(format!("{} > {}", column, push_param(lower, &mut values)));
            }
            if let Some(upper) = &range.upper {
                conditions.push(format!("{} < {}", column, push_param(upper, &mut values)));
            }
        }

        for condition in &self.spec.equals {
            let column = quote_identifier(&condition.column);
            if condition.value.is_null() {
                conditions.push(format!("{} IS NULL", column));
            } else {
                conditions.push(format!(
                    "{} = {}",
                    column,
                    push_param(&condition.value, &mut values)
                ));
            }
        }

        if conditions.is_empty() {
            (String::new(), values)
        } else {
            (format!("WHERE {}", conditions.join(" AND ")), values)
        }
    }
}
