//! Column sets per use case and category
//!
//! Every list is immutable. The tension-bearing sets are derived from the
//! external-bearing sets by [`compose_columns`] once, at first use, and then
//! shared; nothing ever edits a list in place.

use std::sync::LazyLock;

use crate::category::MotorCategory;
use crate::dispatch::{TrendKind, UseCase};

/// Diagnosis column the tension variant drops
pub const EXTERNAL_BEARING_DIAGNOSIS: &str = "external_bearing_diagnosis";

/// Diagnosis columns the tension variant adds in its place
pub const TENSION_BEARING_DIAGNOSES: [&str; 2] = [
    "external_main_bearing_diagnosis",
    "external_tension_bearing_diagnosis",
];

pub const DASHBOARD_VARIABLE: &[&str] = &[
    "equipment_id",
    "acq_time",
    "motor_number",
    "plc",
    "final_diagnosis",
];

pub const DASHBOARD_EXTERNAL: &[&str] = &[
    "equipment_id",
    "acq_time",
    "motor_number",
    "plc",
    "stator_diagnosis",
    "motor_bearing_diagnosis",
    "gear_shaft_diagnosis",
    "external_bearing_diagnosis",
    "coupling_diagnosis",
    "belt_diagnosis",
    "final_diagnosis",
];

pub const TRIGGER_SNAPSHOT: &[&str] = &[
    "equipment_id",
    "acq_time",
    "motor_number",
    "plc",
    "status",
    "plc_status",
    "supply_freq_by_data",
    "rms_u",
];

pub const DETAIL_EXTERNAL: &[&str] = &[
    "equipment_id",
    "motor_number",
    "plc",
    "acq_time",
    "rolling_load",
    "rolling_load_ratio",
    "signal_noise_ratio",
    "winding_supply_freq_amp_unbalance_ratio_median",
    "motor_bpfi_1x_median",
    "gearbox_rotation_freq_amp_median",
    "external_bpfo_1x_median",
    "coupling_supply_freq_amp_median",
    "belt_kurtosis_max_median",
    "stator_diagnosis",
    "motor_bearing_diagnosis",
    "gear_shaft_diagnosis",
    "external_bearing_diagnosis",
    "coupling_diagnosis",
    "belt_diagnosis",
    "final_diagnosis",
];

pub const DETAIL_VARIABLE: &[&str] = &[
    "equipment_id",
    "motor_number",
    "plc",
    "acq_time",
    "avg_load",
    "avg_load_ratio",
    "peak_load",
    "peak_load_ratio",
    "cutting_interval",
    "current_corr_pvm_median",
    "current_noise_rms_pvm_median",
    "current_corr_pvm_diagnosis",
    "current_noise_rms_pvm_diagnosis",
    "final_diagnosis",
];

pub const TREND_LOAD_UNIFORM: &[&str] = &["acq_time", "rolling_load", "rolling_load_ratio"];

pub const TREND_LOAD_VARIABLE: &[&str] = &[
    "acq_time",
    "avg_load",
    "avg_load_ratio",
    "peak_load",
    "peak_load_ratio",
];

pub const TREND_OPERATING_UNIFORM: &[&str] = &["acq_time", "signal_noise_ratio"];

pub const TREND_OPERATING_VARIABLE: &[&str] = &["acq_time", "cutting_interval"];

pub const TREND_DIAGNOSIS_EXTERNAL: &[&str] = &[
    "acq_time",
    "stator_diagnosis",
    "motor_bearing_diagnosis",
    "gear_shaft_diagnosis",
    "external_bearing_diagnosis",
    "coupling_diagnosis",
    "belt_diagnosis",
    "final_diagnosis",
];

pub const TREND_DIAGNOSIS_VARIABLE: &[&str] = &[
    "acq_time",
    "current_corr_pvm_median",
    "current_noise_rms_pvm_median",
];

static DASHBOARD_TENSION: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    compose_columns(
        DASHBOARD_EXTERNAL,
        &[EXTERNAL_BEARING_DIAGNOSIS],
        &TENSION_BEARING_DIAGNOSES,
    )
});

static DETAIL_TENSION: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    let mut added = vec!["tension_bpfo_1x_median"];
    added.extend(TENSION_BEARING_DIAGNOSES);
    compose_columns(DETAIL_EXTERNAL, &[EXTERNAL_BEARING_DIAGNOSIS], &added)
});

static TREND_DIAGNOSIS_TENSION: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    compose_columns(
        TREND_DIAGNOSIS_EXTERNAL,
        &[EXTERNAL_BEARING_DIAGNOSIS],
        &TENSION_BEARING_DIAGNOSES,
    )
});

/// Derive a column list from `base`: drop every column in `remove`, then
/// append each column of `add` that is not already present.
///
/// Returns a fresh list; `base` is never touched.
pub fn compose_columns(
    base: &[&'static str],
    remove: &[&str],
    add: &[&'static str],
) -> Vec<&'static str> {
    let mut columns: Vec<&'static str> = base
        .iter()
        .copied()
        .filter(|column| !remove.contains(column))
        .collect();
    for column in add {
        if !columns.contains(column) {
            columns.push(*column);
        }
    }
    columns
}

/// Columns projected for `use_case` on a motor of `category`
pub fn column_set(use_case: UseCase, category: MotorCategory) -> &'static [&'static str] {
    use MotorCategory::*;

    match (use_case, category) {
        (UseCase::Dashboard, SingleBearingUniform) => DASHBOARD_EXTERNAL,
        (UseCase::Dashboard, TensionBearingUniform) => DASHBOARD_TENSION.as_slice(),
        (UseCase::Dashboard, VariableThreePhase) => DASHBOARD_VARIABLE,

        (UseCase::Detail, SingleBearingUniform) => DETAIL_EXTERNAL,
        (UseCase::Detail, TensionBearingUniform) => DETAIL_TENSION.as_slice(),
        (UseCase::Detail, VariableThreePhase) => DETAIL_VARIABLE,

        (UseCase::Trend(TrendKind::Load), SingleBearingUniform | TensionBearingUniform) => {
            TREND_LOAD_UNIFORM
        }
        (UseCase::Trend(TrendKind::Load), VariableThreePhase) => TREND_LOAD_VARIABLE,

        (UseCase::Trend(TrendKind::Operating), SingleBearingUniform | TensionBearingUniform) => {
            TREND_OPERATING_UNIFORM
        }
        (UseCase::Trend(TrendKind::Operating), VariableThreePhase) => TREND_OPERATING_VARIABLE,

        (UseCase::Trend(TrendKind::Diagnosis), SingleBearingUniform) => TREND_DIAGNOSIS_EXTERNAL,
        (UseCase::Trend(TrendKind::Diagnosis), TensionBearingUniform) => TREND_DIAGNOSIS_TENSION.as_slice(),
        (UseCase::Trend(TrendKind::Diagnosis), VariableThreePhase) => TREND_DIAGNOSIS_VARIABLE,
    }
}
