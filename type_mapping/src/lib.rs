//! Type mapping between Rust field types and PostgreSQL column types
//! Used by the `RecordTable` derive to describe tables at compile time

pub mod sql;

pub use sql::{is_optional_type, rust_type_to_pg_type, strip_option};
