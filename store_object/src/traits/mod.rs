//! Store object traits module
//!
//! Table metadata produced by `#[derive(RecordTable)]` and the source
//! abstraction every filtered read executes against.

pub mod source;
pub mod table;

pub use source::{expect_one, RecordSource};
pub use table::{ColumnInfo, RecordTable, TableInfo};
