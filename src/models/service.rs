//! Service database: motor specifications and settings

use chrono::{DateTime, Utc};
use table_derive::model;

/// Current specification of one motor on one equipment
#[model]
#[table(name = "motor")]
pub struct Motor {
    #[primary_key]
    pub id: i32,
    pub equipment_id: i32,
    pub number: i32,
    pub updated_time: DateTime<Utc>,
    pub name: String,
    /// Category code, see [`MotorCategory`](crate::MotorCategory)
    pub category: String,
    pub rated_current: f64,
    pub pole: Option<i32>,
    pub gear_ratio: Option<f64>,
    pub max_current: Option<f64>,
}

/// Motor-bearing settings per PLC model
#[model]
#[table(name = "motor_bearing")]
pub struct MotorBearing {
    #[primary_key]
    pub id: i32,
    pub equipment_id: i32,
    pub motor_number: i32,
    pub plc: i32,
    pub updated_time: DateTime<Utc>,
    pub supply_freq: f64,
    pub moving_median_sample_number: i32,
    pub motor_bearing_ball_diameter: Option<f64>,
    pub motor_bearing_pitch_diameter: Option<f64>,
    pub motor_bearing_ball_number: Option<i32>,
}
