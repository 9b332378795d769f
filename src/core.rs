//! Core MotorHaus functionality
//!
//! This module contains the main MotorHaus struct, which owns one connection
//! pool per logical database and hands out readers over them.

use std::fmt;
use std::time::Duration;

use config::{AppConfig, DatabaseConfig, QueryConfig};
use sqlx::postgres::PgPoolOptions;
use store_object::{PgSource, RecordTable};

use crate::debug_log;
use crate::errors::MotorHausError;
use crate::reader::MotorReader;

/// Logical databases the dashboard reads from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Database {
    /// Motor specifications and settings
    Service,
    /// Per-acquisition features and diagnoses
    Feature,
    Metadata,
    /// Production models and the PLC memory log
    Plc,
    Fdc,
}

impl Database {
    pub const ALL: [Database; 5] = [
        Database::Service,
        Database::Feature,
        Database::Metadata,
        Database::Plc,
        Database::Fdc,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Database::Service => "service",
            Database::Feature => "feature",
            Database::Metadata => "metadata",
            Database::Plc => "plc",
            Database::Fdc => "fdc",
        }
    }

    fn config<'a>(&self, config: &'a AppConfig) -> &'a DatabaseConfig {
        match self {
            Database::Service => &config.service,
            Database::Feature => &config.feature,
            Database::Metadata => &config.metadata,
            Database::Plc => &config.plc,
            Database::Fdc => &config.fdc,
        }
    }
}

impl fmt::Display for Database {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main MotorHaus coordinator that manages the database connections
pub struct MotorHaus {
    service: PgSource,
    feature: PgSource,
    metadata: PgSource,
    plc: PgSource,
    fdc: PgSource,
    query: QueryConfig,
}

impl MotorHaus {
    /// Connect to every configured database
    pub async fn connect(config: &AppConfig) -> Result<Self, MotorHausError> {
        config.validate()?;

        Ok(Self {
            service: connect_source(Database::Service, config).await?,
            feature: connect_source(Database::Feature, config).await?,
            metadata: connect_source(Database::Metadata, config).await?,
            plc: connect_source(Database::Plc, config).await?,
            fdc: connect_source(Database::Fdc, config).await?,
            query: config.query.clone(),
        })
    }

    /// Load configuration from the environment and connect
    pub async fn from_env() -> Result<Self, MotorHausError> {
        let config = AppConfig::load()?;
        Self::connect(&config).await
    }

    pub fn source(&self, database: Database) -> &PgSource {
        match database {
            Database::Service => &self.service,
            Database::Feature => &self.feature,
            Database::Metadata => &self.metadata,
            Database::Plc => &self.plc,
            Database::Fdc => &self.fdc,
        }
    }

    pub fn query_config(&self) -> &QueryConfig {
        &self.query
    }

    /// Dashboard reads over all five databases
    pub fn reader(&self) -> MotorReader<'_> {
        MotorReader::new(
            &self.service,
            &self.feature,
            &self.metadata,
            &self.plc,
            &self.fdc,
            &self.query,
        )
    }

    /// Create the table behind model `T` in `database` if it does not exist
    pub async fn ensure_table<T: RecordTable>(&self, database: Database) -> Result<(), MotorHausError> {
        let sql = T::table().create_table_sql();
        self.source(database).execute(&sql).await?;
        Ok(())
    }

    /// Check every database connection
    pub async fn health_check(&self) -> Result<(), MotorHausError> {
        for database in Database::ALL {
            self.source(database).ping().await?;
        }
        Ok(())
    }
}

async fn connect_source(database: Database, config: &AppConfig) -> Result<PgSource, MotorHausError> {
    let db_config = database.config(config);
    debug_log!(
        "connecting {} database at {}:{}/{}",
        database,
        db_config.host,
        db_config.port,
        db_config.database
    );

    let mut pool_options = PgPoolOptions::new()
        .max_connections(db_config.max_connections)
        .min_connections(db_config.min_connections)
        .acquire_timeout(Duration::from_secs(db_config.connection_timeout_seconds))
        .idle_timeout(Duration::from_secs(db_config.idle_timeout_seconds));

    // Set max lifetime if specified
    if db_config.max_lifetime_seconds > 0 {
        pool_options = pool_options.max_lifetime(Duration::from_secs(db_config.max_lifetime_seconds));
    }

    let pool = pool_options
        .connect(&db_config.connection_string())
        .await
        .map_err(|source| MotorHausError::DatabaseConnection {
            database: database.as_str(),
            source,
        })?;

    Ok(PgSource::new(
        database.as_str(),
        pool,
        Duration::from_secs(db_config.read_timeout_seconds),
    ))
}
