//! Query specification builder

use crate::query_builder::filter::{EqualityCondition, RangeCondition};
use crate::query_builder::ordering::{OrderBy, SortOrder};
use crate::value::FieldValue;

/// What a filtered read asks for, independent of any table.
///
/// Checked against a schema only when it becomes a
/// [`QueryPlan`](crate::QueryPlan).
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuerySpec {
    pub(crate) equals: Vec<EqualityCondition>,
    pub(crate) range: Option<RangeCondition>,
    pub(crate) order_by: Option<OrderBy>,
    pub(crate) limit: Option<u32>,
}

impl QuerySpec {
    pub fn new() -> Self {
        Self::default()
    }

    /// Require `column = value`. A later condition on the same column replaces the earlier one.
    pub fn eq(mut self, column: &str, value: impl Into<FieldValue>) -> Self {
        let condition = EqualityCondition::new(column, value);
        match self.equals.iter_mut().find(|existing| existing.column == column) {
            Some(existing) => *existing = condition,
            None => self.equals.push(condition),
        }
        self
    }

    /// Add several equality conditions
    pub fn equals<I, V>(self, conditions: I) -> Self
    where
        I: IntoIterator<Item = (&'static str, V)>,
        V: Into<FieldValue>,
    {
        conditions
            .into_iter()
            .fold(self, |spec, (column, value)| spec.eq(column, value))
    }

    /// Set the exclusive range condition, replacing any earlier one
    pub fn range(mut self, range: RangeCondition) -> Self {
        self.range = Some(range);
        self
    }

    /// `lower < column < upper`; an absent bound is left open
    pub fn between<L, U>(self, column: &str, lower: Option<L>, upper: Option<U>) -> Self
    where
        L: Into<FieldValue>,
        U: Into<FieldValue>,
    {
        self.range(RangeCondition::new(
            column,
            lower.map(Into::into),
            upper.map(Into::into),
        ))
    }

    pub fn order_by(mut self, column: &str, order: SortOrder) -> Self {
        self.order_by = Some(OrderBy::new(column, order));
        self
    }

    pub fn ordering(mut self, order_by: OrderBy) -> Self {
        self.order_by = Some(order_by);
        self
    }

    pub fn limit(mut self, limit: u32) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn equality_conditions(&self) -> &[EqualityCondition] {
        &self.equals
    }

    pub fn range_condition(&self) -> Option<&RangeCondition> {
        self.range.as_ref()
    }

    pub fn requested_order(&self) -> Option<&OrderBy> {
        self.order_by.as_ref()
    }

    pub fn limit_value(&self) -> Option<u32> {
        self.limit
    }

    /// Short rendering of the equality conditions, used in not-found messages
    pub fn describe(&self) -> String {
        if self.equals.is_empty() {
            return "no conditions".to_string();
        }
        self.equals
            .iter()
            .map(|condition| match &condition.value {
                FieldValue::Null => format!("{} IS NULL", condition.column),
                FieldValue::Text(text) => format!("{}='{}'", condition.column, text),
                FieldValue::Timestamp(ts) => format!("{}={}", condition.column, ts.to_rfc3339()),
                FieldValue::Bool(v) => format!("{}={}", condition.column, v),
                FieldValue::Int(v) => format!("{}={}", condition.column, v),
                FieldValue::Float(v) => format!("{}={}", condition.column, v),
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}
