//! Schema descriptors
//!
//! A descriptor pairs a physical table with the columns one read projects.
//! Construction checks every column against the table metadata so a typo in a
//! column list fails before any SQL is generated.

use crate::errors::StoreError;
use crate::traits::{RecordTable, TableInfo};
use crate::validation::ValidatedFieldName;

#[derive(Debug, Clone)]
pub struct SchemaDescriptor {
    table: &'static TableInfo,
    columns: Vec<ValidatedFieldName>,
}

impl SchemaDescriptor {
    /// Describe a projection of `columns`, in order, from `table`
    pub fn new<I, S>(table: &'static TableInfo, columns: I) -> Result<Self, StoreError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut validated: Vec<ValidatedFieldName> = Vec::new();
        for column in columns {
            let column = column.as_ref();
            let field = ValidatedFieldName::new(column)?;
            if !table.has_column(column) {
                return Err(StoreError::schema_mismatch(table.name, column));
            }
            if validated.contains(&field) {
                return Err(StoreError::DuplicateColumn {
                    table: table.name.to_string(),
                    column: column.to_string(),
                });
            }
            validated.push(field);
        }

        if validated.is_empty() {
            return Err(StoreError::EmptyProjection {
                table: table.name.to_string(),
            });
        }

        Ok(Self {
            table,
            columns: validated,
        })
    }

    /// Projection of `columns` from the table behind model `T`
    pub fn for_table<T, I, S>(columns: I) -> Result<Self, StoreError>
    where
        T: RecordTable,
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::new(T::table(), columns)
    }

    /// Every column of the table behind model `T`
    pub fn all_columns<T: RecordTable>() -> Result<Self, StoreError> {
        let table = T::table();
        Self::new(table, table.column_names())
    }

    pub fn table(&self) -> &'static TableInfo {
        self.table
    }

    pub fn table_name(&self) -> &'static str {
        self.table.name
    }

    pub fn columns(&self) -> &[ValidatedFieldName] {
        &self.columns
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(ValidatedFieldName::as_str).collect()
    }

    pub fn timestamp_column(&self) -> Option<&'static str> {
        self.table.timestamp_column
    }
}
