//! Convenience re-exports for common store-object usage

// Core traits
pub use crate::traits::{ColumnInfo, RecordSource, RecordTable, TableInfo};

// Error types
pub use crate::errors::StoreError;

// Sources
pub use crate::memory::MemorySource;
pub use crate::pg_store::PgSource;

// Validation
pub use crate::validation::{ValidatedFieldName, ValidatedTableName, ValidationError};

// Query building
pub use crate::query_builder::{OrderBy, QueryPlan, QuerySpec, RangeCondition, SortOrder};
pub use crate::schema::SchemaDescriptor;
pub use crate::value::{FieldValue, Record};

// Common external dependencies that are frequently used
pub use async_trait::async_trait;
pub use serde::{Deserialize, Serialize};
pub use sqlx::PgPool;
