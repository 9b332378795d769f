//! Feature database: per-acquisition features and diagnoses
//!
//! Rows are keyed by (equipment, motor, acquisition time, PLC model).
//! Diagnosis columns hold integer severity levels.

use chrono::{DateTime, Utc};
use table_derive::model;

/// Raw acquisition trigger, written for every motor regardless of category
#[model]
#[table(name = "trigger", timestamp = "acq_time")]
pub struct Trigger {
    #[primary_key]
    pub equipment_id: i32,
    #[primary_key]
    pub motor_number: i32,
    #[primary_key]
    pub acq_time: DateTime<Utc>,
    #[primary_key]
    pub plc: i32,
    pub status: i32,
    pub plc_status: i32,
    pub supply_freq_by_data: f64,
    pub rms_u: f64,
}

/// Uniform-speed motor with a single external bearing
#[model]
#[table(name = "uniform_speed_external_feature", timestamp = "acq_time")]
pub struct UniformSpeedExternalFeature {
    #[primary_key]
    pub equipment_id: i32,
    #[primary_key]
    pub motor_number: i32,
    #[primary_key]
    pub acq_time: DateTime<Utc>,
    #[primary_key]
    pub plc: i32,
    pub rms_u: f64,
    pub rms_v: f64,
    pub rms_w: f64,
    pub signal_noise_ratio: f64,
    pub rolling_load_ratio: f64,
    pub rolling_load: f64,
    pub winding_supply_freq_amp_unbalance_ratio_median: f64,
    pub motor_bpfi_1x_median: f64,
    pub gearbox_rotation_freq_amp_median: f64,
    pub external_bpfo_1x_median: f64,
    pub coupling_supply_freq_amp_median: f64,
    pub belt_kurtosis_max_median: f64,
    pub stator_diagnosis: i32,
    pub motor_bearing_diagnosis: i32,
    pub gear_shaft_diagnosis: i32,
    pub external_bearing_diagnosis: i32,
    pub coupling_diagnosis: i32,
    pub belt_diagnosis: i32,
    pub final_diagnosis: i32,
}

/// Uniform-speed motor with external main and tension bearings
#[model]
#[table(name = "uniform_speed_tension_feature", timestamp = "acq_time")]
pub struct UniformSpeedTensionFeature {
    #[primary_key]
    pub equipment_id: i32,
    #[primary_key]
    pub motor_number: i32,
    #[primary_key]
    pub acq_time: DateTime<Utc>,
    #[primary_key]
    pub plc: i32,
    pub rms_u: f64,
    pub rms_v: f64,
    pub rms_w: f64,
    pub signal_noise_ratio: f64,
    pub rolling_load_ratio: f64,
    pub rolling_load: f64,
    pub winding_supply_freq_amp_unbalance_ratio_median: f64,
    pub motor_bpfi_1x_median: f64,
    pub gearbox_rotation_freq_amp_median: f64,
    pub external_bpfo_1x_median: f64,
    pub tension_bpfo_1x_median: f64,
    pub coupling_supply_freq_amp_median: f64,
    pub belt_kurtosis_max_median: f64,
    pub stator_diagnosis: i32,
    pub motor_bearing_diagnosis: i32,
    pub gear_shaft_diagnosis: i32,
    pub external_main_bearing_diagnosis: i32,
    pub external_tension_bearing_diagnosis: i32,
    pub coupling_diagnosis: i32,
    pub belt_diagnosis: i32,
    pub final_diagnosis: i32,
}

/// Variable-speed three-phase motor
#[model]
#[table(name = "variable_speed_phase3_feature", timestamp = "acq_time")]
pub struct VariableSpeedPhase3Feature {
    #[primary_key]
    pub equipment_id: i32,
    #[primary_key]
    pub motor_number: i32,
    #[primary_key]
    pub acq_time: DateTime<Utc>,
    #[primary_key]
    pub plc: i32,
    pub avg_load: f64,
    pub peak_load: f64,
    pub avg_load_ratio: f64,
    pub peak_load_ratio: f64,
    pub cutting_interval: f64,
    pub current_corr_pvm: f64,
    pub current_noise_rms_pvm: f64,
    pub current_corr_pvm_median: f64,
    pub current_noise_rms_pvm_median: f64,
    pub current_corr_pvm_diagnosis: i32,
    pub current_noise_rms_pvm_diagnosis: i32,
    pub final_diagnosis: i32,
}
