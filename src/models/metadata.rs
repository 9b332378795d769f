//! Metadata database: where each raw acquisition was stored

use chrono::{DateTime, Utc};
use table_derive::model;

/// One raw acquisition file per motor, phase and acquisition time
#[model]
#[table(name = "metadata", timestamp = "acq_time")]
pub struct Metadata {
    #[primary_key]
    pub line_id: i32,
    #[primary_key]
    pub equipment_id: i32,
    #[primary_key]
    pub motor_number: i32,
    /// Signal kind, e.g. `uvw` for three-phase current
    #[primary_key]
    pub phase: String,
    #[primary_key]
    pub acq_time: DateTime<Utc>,
    pub file_path: String,
    pub sampling_rate: i32,
    /// Samples per acquisition, sampling rate times duration
    pub sample_size: i32,
}
