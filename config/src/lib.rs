//! # Configuration Management for MotorHaus
//!
//! Centralized configuration for the five logical databases the dashboard reads
//! from, plus the business defaults applied by the query layer.
//!
//! ## TOML File Configuration
//! ```toml
//! [service]
//! host = "localhost"
//! port = 5432
//! database = "service"
//! username = "postgres"
//! password = "password"
//! min_connections = 1
//! max_connections = 10
//! connection_timeout_seconds = 30
//! read_timeout_seconds = 30
//! idle_timeout_seconds = 600
//! max_lifetime_seconds = 3600
//!
//! # [feature], [metadata], [plc] and [fdc] take the same keys
//!
//! [query]
//! lookback_days = 30
//! default_plc_model = 3
//! line_id = 1
//! plc_model_memory_name = "CellState_Model"
//! ```
//!
//! Load configuration:
//! ```rust,no_run
//! use config::AppConfig;
//!
//! // Load from MOTORHAUS_CONFIG or ./motorhaus.toml
//! let config = AppConfig::load()?;
//!
//! // Or load from custom path
//! let config = AppConfig::from_file("config/production.toml")?;
//! # Ok::<(), config::ConfigError>(())
//! ```

use serde::{Deserialize, Serialize};
use std::{env, path::Path};
use thiserror::Error;

const DEFAULT_CONFIG_PATH: &str = "./motorhaus.toml";
const CONFIG_PATH_VAR: &str = "MOTORHAUS_CONFIG";
/// Upper bound for `[query] lookback_days`, about a century
pub const MAX_LOOKBACK_DAYS: i64 = 36_500;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parsing error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Dotenvy error: {0}")]
    Dotenvy(#[from] dotenvy::Error),
    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Complete application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub service: DatabaseConfig,
    pub feature: DatabaseConfig,
    pub metadata: DatabaseConfig,
    pub plc: DatabaseConfig,
    pub fdc: DatabaseConfig,
    #[serde(default)]
    pub query: QueryConfig,
}

/// Connection settings for one logical database
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub host: String,
    pub port: u16,
    pub database: String,
    pub username: String,
    pub password: String,
    pub min_connections: u32,
    pub max_connections: u32,
    /// Upper bound for acquiring a pooled connection
    pub connection_timeout_seconds: u64,
    /// Upper bound for a single read, measured from acquire to last row
    pub read_timeout_seconds: u64,
    pub idle_timeout_seconds: u64,
    pub max_lifetime_seconds: u64,
}

/// Business defaults used when building queries
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct QueryConfig {
    /// Lookback applied to time-series reads when the caller gives no end time
    pub lookback_days: i64,
    /// PLC model assumed when the PLC log holds no usable value, and for
    /// supply-frequency lookups made without an explicit model
    pub default_plc_model: i32,
    /// Every deployment so far runs a single line per database
    pub line_id: i32,
    /// Memory-mapping entry whose log value is the running PLC model
    pub plc_model_memory_name: String,
}

impl Default for QueryConfig {
    fn default() -> Self {
        Self {
            lookback_days: 30,
            default_plc_model: 3,
            line_id: 1,
            plc_model_memory_name: "CellState_Model".to_string(),
        }
    }
}

impl AppConfig {
    /// Load configuration from the TOML file named in the environment or the default path
    pub fn load() -> Result<Self, ConfigError> {
        // A missing .env file is fine; a malformed one is not
        match dotenvy::dotenv() {
            Ok(_) => {}
            Err(e) if e.not_found() => {}
            Err(e) => return Err(e.into()),
        }

        if let Ok(config_path) = env::var(CONFIG_PATH_VAR) {
            Self::from_file(&config_path)
        } else if Path::new(DEFAULT_CONFIG_PATH).exists() {
            Self::from_file(DEFAULT_CONFIG_PATH)
        } else {
            Err(ConfigError::Invalid(format!(
                "Config path must be specified as {} (environment or .env) or in {} file",
                CONFIG_PATH_VAR, DEFAULT_CONFIG_PATH
            )))
        }
    }

    /// Load configuration from TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate configuration from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// All database sections paired with their section name
    pub fn databases(&self) -> [(&'static str, &DatabaseConfig); 5] {
        [
            ("service", &self.service),
            ("feature", &self.feature),
            ("metadata", &self.metadata),
            ("plc", &self.plc),
            ("fdc", &self.fdc),
        ]
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (section, database) in self.databases() {
            database.validate(section)?;
        }
        self.query.validate()
    }
}

impl DatabaseConfig {
    /// Create a new database configuration
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        host: String,
        port: u16,
        database: String,
        username: String,
        password: String,
        min_connections: u32,
        max_connections: u32,
        connection_timeout_seconds: u64,
        read_timeout_seconds: u64,
        idle_timeout_seconds: u64,
        max_lifetime_seconds: u64,
    ) -> Self {
        Self {
            host,
            port,
            database,
            username,
            password,
            min_connections,
            max_connections,
            connection_timeout_seconds,
            read_timeout_seconds,
            idle_timeout_seconds,
            max_lifetime_seconds,
        }
    }

    /// Build connection string
    pub fn connection_string(&self) -> String {
        format!(
            "postgresql://{}:{}@{}:{}/{}",
            self.username, self.password, self.host, self.port, self.database
        )
    }

    fn validate(&self, section: &str) -> Result<(), ConfigError> {
        let invalid = |what: &str| Err(ConfigError::Invalid(format!("[{}] {}", section, what)));

        if self.host.is_empty() {
            return invalid("host cannot be empty");
        }
        if self.port == 0 {
            return invalid("port cannot be zero");
        }
        if self.database.is_empty() {
            return invalid("database name cannot be empty");
        }
        if self.username.is_empty() {
            return invalid("username cannot be empty");
        }
        if self.min_connections == 0 {
            return invalid("min_connections must be greater than 0");
        }
        if self.max_connections == 0 {
            return invalid("max_connections must be greater than 0");
        }
        if self.min_connections > self.max_connections {
            return invalid("min_connections cannot be greater than max_connections");
        }
        if self.connection_timeout_seconds == 0 {
            return invalid("connection_timeout_seconds must be greater than 0");
        }
        if self.read_timeout_seconds == 0 {
            return invalid("read_timeout_seconds must be greater than 0");
        }

        Ok(())
    }
}

impl QueryConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if self.lookback_days <= 0 || self.lookback_days > MAX_LOOKBACK_DAYS {
            return Err(ConfigError::Invalid(format!(
                "[query] lookback_days must be between 1 and {}",
                MAX_LOOKBACK_DAYS
            )));
        }
        if self.plc_model_memory_name.is_empty() {
            return Err(ConfigError::Invalid(
                "[query] plc_model_memory_name cannot be empty".to_string(),
            ));
        }
        Ok(())
    }
}
