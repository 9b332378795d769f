//! Result ordering

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn to_sql(&self) -> &'static str {
        match self {
            SortOrder::Asc => "ASC",
            SortOrder::Desc => "DESC",
        }
    }

    /// Parse a direction word, case-insensitively. Unrecognized input yields `None`.
    pub fn parse(direction: &str) -> Option<Self> {
        match direction.trim().to_ascii_lowercase().as_str() {
            "asc" => Some(SortOrder::Asc),
            "desc" => Some(SortOrder::Desc),
            _ => None,
        }
    }
}

impl fmt::Display for SortOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.to_sql())
    }
}

/// A single ordering key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
    pub column: String,
    pub order: SortOrder,
}

impl OrderBy {
    pub fn new(column: &str, order: SortOrder) -> Self {
        Self {
            column: column.to_string(),
            order,
        }
    }

    pub fn asc(column: &str) -> Self {
        Self::new(column, SortOrder::Asc)
    }

    pub fn desc(column: &str) -> Self {
        Self::new(column, SortOrder::Desc)
    }

    /// Build an ordering from loosely supplied parts.
    ///
    /// A missing column falls back to `default_column`; a missing or
    /// unrecognized direction falls back to ascending.
    pub fn from_parts(column: Option<&str>, direction: Option<&str>, default_column: &str) -> Self {
        let order = direction.and_then(SortOrder::parse).unwrap_or_default();
        Self::new(column.unwrap_or(default_column), order)
    }
}
