//! FDC database: settings for the plant fault-detection bridge

use chrono::NaiveDateTime;
use table_derive::model;

/// Connection settings for publishing diagnoses to the plant FDC broker
#[model]
#[table(name = "config")]
pub struct FdcConfig {
    #[primary_key]
    pub id: i32,
    pub updated_time: NaiveDateTime,
    pub host: String,
    pub vpn: String,
    pub topic: String,
    pub user_name: String,
    pub password: String,
    pub client_name: String,
    pub connect_attempts: i32,
    pub reconnect_attempts: i32,
    pub reconnect_interval: i32,
    pub connect_retries_per_host: i32,
    pub message_interval: i32,
    pub sheet_path: String,
    pub featuredb_uri: String,
}
