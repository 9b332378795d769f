//! Convenience re-exports for common MotorHaus usage
//!
//! # Example
//!
//! ```rust
//! use motorhaus::prelude::*;
//!
//! let key = MotorKey::new(1, 3, 3);
//! let read = dispatch::request(
//!     MotorCategory::SingleBearingUniform,
//!     UseCase::Dashboard,
//!     &key,
//!     TimeWindow::new(None, None),
//! )
//! .unwrap();
//! assert_eq!(read.spec.limit_value(), Some(1));
//! ```

// Core MotorHaus components
pub use crate::category::MotorCategory;
pub use crate::core::{Database, MotorHaus};
pub use crate::dispatch::{self, MotorKey, ReadRequest, TrendKind, UseCase};
pub use crate::errors::MotorHausError;
pub use crate::models::*;
pub use crate::reader::MotorReader;
pub use crate::series::ColumnarSeries;
pub use crate::window::{resolve_window, TimeWindow};

// Re-export centralized config
pub use config::{AppConfig, DatabaseConfig, QueryConfig};

// Re-export commonly used store-object types for convenience
pub use store_object::prelude::*;

// Re-export store_object module for macro-generated code
pub use store_object;

// Re-export table derive for model creation
pub use table_derive::{model, RecordTable};

// Common external dependencies
pub use anyhow;
pub use chrono::{DateTime, Utc};
pub use serde_json;
pub use sqlx;
pub use tokio;
