//! Table metadata
//!
//! Static description of a physical table: its name, typed columns and the
//! column that orders its rows in time.

use crate::validation::quote_identifier;

/// One physical column
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColumnInfo {
    pub name: &'static str,
    /// PostgreSQL type used in DDL
    pub pg_type: &'static str,
    pub nullable: bool,
    pub primary_key: bool,
}

/// Static metadata for one table, generated by `#[derive(RecordTable)]`
#[derive(Debug, PartialEq, Eq)]
pub struct TableInfo {
    pub name: &'static str,
    pub columns: &'static [ColumnInfo],
    /// Default ordering column for reads that request none
    pub timestamp_column: Option<&'static str>,
}

impl TableInfo {
    pub fn column(&self, name: &str) -> Option<&ColumnInfo> {
        self.columns.iter().find(|column| column.name == name)
    }

    pub fn has_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    pub fn column_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.columns.iter().map(|column| column.name)
    }

    /// Generate CREATE TABLE IF NOT EXISTS statement
    pub fn create_table_sql(&self) -> String {
        let mut definitions: Vec<String> = self
            .columns
            .iter()
            .map(|column| {
                let mut definition = format!("{} {}", quote_identifier(column.name), column.pg_type);
                if !column.nullable && !column.primary_key {
                    definition.push_str(" NOT NULL");
                }
                definition
            })
            .collect();

        let primary_keys: Vec<String> = self
            .columns
            .iter()
            .filter(|column| column.primary_key)
            .map(|column| quote_identifier(column.name))
            .collect();
        if !primary_keys.is_empty() {
            definitions.push(format!("PRIMARY KEY ({})", primary_keys.join(", ")));
        }

        format!(
            "CREATE TABLE IF NOT EXISTS {} (\n    {}\n)",
            quote_identifier(self.name),
            definitions.join(",\n    ")
        )
    }

    /// Generate DROP TABLE IF EXISTS statement
    pub fn drop_table_sql(&self) -> String {
        format!("DROP TABLE IF EXISTS {}", quote_identifier(self.name))
    }
}

/// A model type backed by a physical table
pub trait RecordTable {
    fn table() -> &'static TableInfo;
}

#[cfg(test)]
mod tests {
    use super::*;

    static LOG_COLUMNS: [ColumnInfo; 3] = [
        ColumnInfo {
            name: "id",
            pg_type: "INTEGER",
            nullable: false,
            primary_key: true,
        },
        ColumnInfo {
            name: "mm_id",
            pg_type: "INTEGER",
            nullable: false,
            primary_key: false,
        },
        ColumnInfo {
            name: "value",
            pg_type: "VARCHAR",
            nullable: true,
            primary_key: false,
        },
    ];

    static LOG: TableInfo = TableInfo {
        name: "log",
        columns: &LOG_COLUMNS,
        timestamp_column: None,
    };

    #[test]
    fn test_column_lookup() {
        assert!(LOG.has_column("mm_id"));
        assert!(!LOG.has_column("timestamp"));
        assert_eq!(LOG.column("value").map(|c| c.nullable), Some(true));
        assert_eq!(LOG.column_names().collect::<Vec<_>>(), vec!["id", "mm_id", "value"]);
    }

    #[test]
    fn test_create_table_sql() {
        assert_eq!(
            LOG.create_table_sql(),
            "CREATE TABLE IF NOT EXISTS \"log\" (\n    \"id\" INTEGER,\n    \"mm_id\" INTEGER NOT NULL,\n    \"value\" VARCHAR,\n    PRIMARY KEY (\"id\")\n)"
        );
        assert_eq!(LOG.drop_table_sql(), "DROP TABLE IF EXISTS \"log\"");
    }
}
