//! # MotorHaus
//!
//! Filtered read layer for a motor-diagnostics dashboard. Feature tables are
//! described once as typed models; every dashboard, detail and trend read is a
//! projection plus a query specification built from a motor's category.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use motorhaus::prelude::*;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = AppConfig::load()?;
//!     let motorhaus = MotorHaus::connect(&config).await?;
//!     let reader = motorhaus.reader();
//!
//!     let category = reader.motor_category(1, 3).await?;
//!     let key = reader.motor_key(1, 3, None).await?;
//!
//!     let latest = reader.dashboard(category, &key).await?;
//!     println!("latest diagnosis: {:?}", latest.get("final_diagnosis"));
//!
//!     let trend = reader
//!         .trend_columns(TrendKind::Load, category, &key, None, None)
//!         .await?;
//!     println!("{}", serde_json::to_string(&trend)?);
//!
//!     Ok(())
//! }
//! ```

/// Conditional debug logging macros
/// These macros only compile in code when the `debug-logging` feature is enabled
#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {
        tracing::debug!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! debug_log {
    ($($arg:tt)*) => {};
}

#[cfg(feature = "debug-logging")]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {
        tracing::trace!($($arg)*)
    };
}

#[cfg(not(feature = "debug-logging"))]
#[macro_export]
macro_rules! trace_log {
    ($($arg:tt)*) => {};
}

pub mod category;
pub mod columns;
pub mod core;
pub mod dispatch;
pub mod errors;
pub mod models;
pub mod prelude;
pub mod reader;
pub mod series;
pub mod window;

// Re-export the main public types for convenience
pub use category::MotorCategory;
pub use crate::core::{Database, MotorHaus};
pub use dispatch::{MotorKey, ReadRequest, TrendKind, UseCase};
pub use errors::MotorHausError;
pub use reader::MotorReader;
pub use series::ColumnarSeries;
pub use window::TimeWindow;

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, QueryConfig};

// Re-export internal crates used by macros and public API
// These MUST be public for the generated macro code to work correctly
pub use store_object;
pub use table_derive;
pub use type_mapping;

// Re-export external dependencies used in public API
pub use async_trait;
pub use sqlx;
