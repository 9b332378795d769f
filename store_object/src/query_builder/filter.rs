//! Filter conditions
//!
//! Equality conditions are combined with AND. The single range condition has
//! exclusive bounds on both sides; either side may be absent.

use crate::value::FieldValue;

/// `column = value`, or `column IS NULL` when the value is `Null`
#[derive(Debug, Clone, PartialEq)]
pub struct EqualityCondition {
    pub column: String,
    pub value: FieldValue,
}

impl EqualityCondition {
    pub fn new(column: &str, value: impl Into<FieldValue>) -> Self {
        Self {
            column: column.to_string(),
            value: value.into(),
        }
    }

    pub fn matches(&self, candidate: Option<&FieldValue>) -> bool {
        candidate.unwrap_or(&FieldValue::Null).matches(&self.value)
    }
}

/// `lower < column < upper`
#[derive(Debug, Clone, PartialEq)]
pub struct RangeCondition {
    pub column: String,
    pub lower: Option<FieldValue>,
    pub upper: Option<FieldValue>,
}

impl RangeCondition {
    /// A `Null` bound is treated as absent.
    pub fn new(column: &str, lower: Option<FieldValue>, upper: Option<FieldValue>) -> Self {
        Self {
            column: column.to_string(),
            lower: lower.filter(|bound| !bound.is_null()),
            upper: upper.filter(|bound| !bound.is_null()),
        }
    }

    /// A range with neither bound filters nothing
    pub fn is_unbounded(&self) -> bool {
        self.lower.is_none() && self.upper.is_none()
    }

    /// Evaluate the range against a candidate value.
    ///
    /// A null or incomparable candidate fails any present bound, matching SQL
    /// comparison semantics.
    pub fn matches(&self, candidate: Option<&FieldValue>) -> bool {
        let candidate = candidate.unwrap_or(&FieldValue::Null);
        let above_lower = self
            .lower
            .as_ref()
            .is_none_or(|lower| candidate.compare(lower) == Some(std::cmp::Ordering::Greater));
        let below_upper = self
            .upper
            .as_ref()
            .is_none_or(|upper| candidate.compare(upper) == Some(std::cmp::Ordering::Less));
        above_lower && below_upper
    }
}
