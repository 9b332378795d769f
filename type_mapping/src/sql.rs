//! SQL type conversion utilities
//!
//! This module maps the Rust field types used in record models
//! to their PostgreSQL equivalents.

/// Map a Rust type name to the PostgreSQL type used for DDL generation.
///
/// `Option<T>` maps to the same type as `T`; nullability is reported
/// separately by [`is_optional_type`]. Returns `None` for types the record
/// layer cannot decode, so the derive can reject them at compile time.
pub fn rust_type_to_pg_type(rust_type: &str) -> Option<&'static str> {
    // Normalize type string by removing all whitespace for consistent matching
    let normalized = rust_type.replace(' ', "");
    let inner = strip_option(&normalized);
    let pg_type = match inner {
        "String" => "VARCHAR",
        "i16" => "SMALLINT",
        "i32" => "INTEGER",
        "i64" => "BIGINT",
        "f32" => "REAL",
        "f64" => "DOUBLE PRECISION",
        "bool" => "BOOLEAN",
        "DateTime<Utc>" | "chrono::DateTime<chrono::Utc>" | "chrono::DateTime<Utc>" => {
            "TIMESTAMP WITH TIME ZONE"
        }
        "NaiveDateTime" | "chrono::NaiveDateTime" => "TIMESTAMP",
        _ => return None,
    };
    Some(pg_type)
}

/// Check if a Rust type is Optional (nullable in SQL)
pub fn is_optional_type(rust_type: &str) -> bool {
    let normalized = rust_type.replace(' ', "");
    normalized.starts_with("Option<") || normalized.starts_with("std::option::Option<")
}

/// Strip one `Option<...>` wrapper, if present
pub fn strip_option(rust_type: &str) -> &str {
    let trimmed = rust_type.trim();
    for prefix in ["std::option::Option<", "Option<"] {
        if let Some(rest) = trimmed.strip_prefix(prefix) {
            if let Some(inner) = rest.strip_suffix('>') {
                return inner.trim();
            }
        }
    }
    trimmed
}
