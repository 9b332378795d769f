//! Store Object - filtered read layer for MotorHaus
//!
//! This crate provides the table descriptors, query specifications, SQL
//! generation and record sources that every dashboard read goes through.

// Lets `#[derive(RecordTable)]` expansions resolve `::store_object` inside this crate's tests
extern crate self as store_object;

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod errors;
pub mod memory;
pub mod pg_store;
pub mod prelude;
pub mod query_builder;
pub mod schema;
pub mod traits;
pub mod validation;
pub mod value;

pub use errors::StoreError;
pub use memory::MemorySource;
pub use pg_store::PgSource;
pub use query_builder::{OrderBy, QueryPlan, QuerySpec, RangeCondition, SortOrder};
pub use schema::SchemaDescriptor;
pub use traits::*;
pub use validation::{ValidatedFieldName, ValidatedTableName, ValidationError};
pub use value::{FieldValue, Record};
