//! Query builder utilities
//!
//! A [`QuerySpec`] states what a read wants (equality filters, an exclusive
//! range, ordering and a limit). A [`QueryPlan`] checks that spec against a
//! [`SchemaDescriptor`](crate::SchemaDescriptor) and renders parameterized SQL.

pub mod builder;
pub mod filter;
pub mod ordering;
pub mod sql_generation;

#[cfg(test)]
mod tests;

pub use builder::QuerySpec;
pub use filter::{EqualityCondition, RangeCondition};
pub use ordering::{OrderBy, SortOrder};
pub use sql_generation::QueryPlan;
