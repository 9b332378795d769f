//! Error types for the MotorHaus crate
//!
//! This module contains all error types that can be returned by MotorHaus operations.

use store_object::StoreError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum MotorHausError {
    #[error("Database connection error ({database}): {source}")]
    DatabaseConnection {
        database: &'static str,
        #[source]
        source: sqlx::Error,
    },

    #[error(transparent)]
    Store(#[from] StoreError),

    #[error(transparent)]
    Config(#[from] config::ConfigError),
}

impl MotorHausError {
    /// Faults the caller caused, e.g. an unknown category tag
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_client_error())
    }

    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::Store(e) if e.is_not_found())
    }

    /// Store could not be reached or did not answer in time
    pub fn is_unavailable(&self) -> bool {
        match self {
            Self::DatabaseConnection { .. } => true,
            Self::Store(e) => e.is_unavailable(),
            Self::Config(_) => false,
        }
    }
}
