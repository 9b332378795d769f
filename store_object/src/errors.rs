use crate::validation::ValidationError;
use thiserror::Error;

/// Faults raised while describing, planning or executing a filtered read.
///
/// Nothing here is retried or downgraded; callers map variants to transport
/// status codes (see [`StoreError::is_client_error`] and friends).
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Column '{column}' does not exist on table '{table}'")]
    SchemaMismatch { table: String, column: String },

    #[error("Column '{column}' is projected more than once from table '{table}'")]
    DuplicateColumn { table: String, column: String },

    #[error("Projection on table '{table}' selects no columns")]
    EmptyProjection { table: String },

    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(#[from] ValidationError),

    #[error("Unknown motor category: {0}")]
    UnknownCategory(String),

    #[error("No record in '{table}' matches {context}")]
    NotFound { table: String, context: String },

    #[error("Expected one record in '{table}' but {count} matched {context}")]
    MultipleMatches {
        table: String,
        count: usize,
        context: String,
    },

    #[error("Store '{store}' unavailable: {message}")]
    StoreUnavailable { store: String, message: String },

    #[error("Query on store '{store}' failed: {message}")]
    Query { store: String, message: String },

    #[error("Read on store '{store}' exceeded {seconds}s")]
    Timeout { store: String, seconds: u64 },

    #[error("Cannot decode column '{column}': {message}")]
    Decode { column: String, message: String },
}

impl StoreError {
    pub fn schema_mismatch(table: &str, column: &str) -> Self {
        Self::SchemaMismatch {
            table: table.to_string(),
            column: column.to_string(),
        }
    }

    pub fn not_found(table: &str, context: impl Into<String>) -> Self {
        Self::NotFound {
            table: table.to_string(),
            context: context.into(),
        }
    }

    /// Wrap a driver error raised while talking to `store`.
    ///
    /// Transport and pool failures mean the store is unavailable; anything
    /// the server rejected or returned malformed is a failed query.
    pub fn from_sqlx(store: &str, error: sqlx::Error) -> Self {
        let store = store.to_string();
        let message = error.to_string();
        match error {
            sqlx::Error::Io(_)
            | sqlx::Error::Tls(_)
            | sqlx::Error::PoolTimedOut
            | sqlx::Error::PoolClosed
            | sqlx::Error::WorkerCrashed => Self::StoreUnavailable { store, message },
            _ => Self::Query { store, message },
        }
    }

    pub fn decode(column: &str, message: impl Into<String>) -> Self {
        Self::Decode {
            column: column.to_string(),
            message: message.into(),
        }
    }

    /// Faults caused by the request itself (bad category tag)
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::UnknownCategory(_))
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Connection or read failures, timeouts included
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::StoreUnavailable { .. } | Self::Timeout { .. })
    }
}
