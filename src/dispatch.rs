//! Category dispatch
//!
//! Maps a motor category and a use case to the schema descriptor and query
//! specification that serve it. Pure: nothing here touches a store.

use serde::{Deserialize, Serialize};
use store_object::{QuerySpec, RecordTable, SchemaDescriptor, SortOrder, StoreError};

use crate::category::MotorCategory;
use crate::columns::{column_set, TRIGGER_SNAPSHOT};
use crate::models::{FdcConfig, Metadata, Trigger};
use crate::window::TimeWindow;

/// Acquisition-time column shared by every feature table
pub const ACQ_TIME: &str = "acq_time";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendKind {
    Load,
    Operating,
    Diagnosis,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UseCase {
    /// Most recent record only
    Dashboard,
    /// Detail-page time series
    Detail,
    Trend(TrendKind),
}

impl UseCase {
    pub const ALL: [UseCase; 5] = [
        UseCase::Dashboard,
        UseCase::Detail,
        UseCase::Trend(TrendKind::Load),
        UseCase::Trend(TrendKind::Operating),
        UseCase::Trend(TrendKind::Diagnosis),
    ];

    pub fn is_snapshot(&self) -> bool {
        matches!(self, UseCase::Dashboard)
    }
}

/// Identifies the rows of one motor under one PLC model
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct MotorKey {
    pub equipment_id: i32,
    pub motor_number: i32,
    pub plc: i32,
}

impl MotorKey {
    pub fn new(equipment_id: i32, motor_number: i32, plc: i32) -> Self {
        Self {
            equipment_id,
            motor_number,
            plc,
        }
    }

    fn equality(&self) -> QuerySpec {
        QuerySpec::new()
            .eq("equipment_id", self.equipment_id)
            .eq("motor_number", self.motor_number)
            .eq("plc", self.plc)
    }
}

/// A schema descriptor and query specification ready for a record source
#[derive(Debug, Clone)]
pub struct ReadRequest {
    pub schema: SchemaDescriptor,
    pub spec: QuerySpec,
}

/// Newest matching record: `acq_time` descending, limit 1
pub fn snapshot_spec(key: &MotorKey) -> QuerySpec {
    key.equality().order_by(ACQ_TIME, SortOrder::Desc).limit(1)
}

/// Records inside `window`, oldest first
pub fn series_spec(key: &MotorKey, window: TimeWindow) -> QuerySpec {
    key.equality()
        .between(ACQ_TIME, window.start, window.end)
        .order_by(ACQ_TIME, SortOrder::Asc)
}

/// Projection of `use_case` columns from the feature table of `category`
pub fn schema_for(use_case: UseCase, category: MotorCategory) -> Result<SchemaDescriptor, StoreError> {
    SchemaDescriptor::new(category.feature_table(), column_set(use_case, category))
}

/// Build the read for `use_case` on a motor of `category`.
///
/// `window` only applies to time-series use cases; the dashboard snapshot ignores it.
pub fn request(
    category: MotorCategory,
    use_case: UseCase,
    key: &MotorKey,
    window: TimeWindow,
) -> Result<ReadRequest, StoreError> {
    let schema = schema_for(use_case, category)?;
    let spec = if use_case.is_snapshot() {
        snapshot_spec(key)
    } else {
        series_spec(key, window)
    };
    Ok(ReadRequest { schema, spec })
}

/// [`request`] for a raw category tag; an unrecognized tag is `UnknownCategory`
pub fn dispatch(
    tag: &str,
    use_case: UseCase,
    key: &MotorKey,
    window: TimeWindow,
) -> Result<ReadRequest, StoreError> {
    request(tag.parse()?, use_case, key, window)
}

/// Latest trigger row for a motor, whatever its category
pub fn trigger_request(key: &MotorKey) -> Result<ReadRequest, StoreError> {
    Ok(ReadRequest {
        schema: SchemaDescriptor::new(Trigger::table(), TRIGGER_SNAPSHOT)?,
        spec: snapshot_spec(key),
    })
}

/// Raw-acquisition metadata for one motor inside `window`, newest first
pub fn metadata_request(
    equipment_id: i32,
    motor_number: i32,
    window: TimeWindow,
) -> Result<ReadRequest, StoreError> {
    Ok(ReadRequest {
        schema: SchemaDescriptor::all_columns::<Metadata>()?,
        spec: QuerySpec::new()
            .eq("equipment_id", equipment_id)
            .eq("motor_number", motor_number)
            .between(ACQ_TIME, window.start, window.end)
            .order_by(ACQ_TIME, SortOrder::Desc),
    })
}

/// Bookkeeping columns left out of the FDC settings read
pub const FDC_CONFIG_EXCLUDED: [&str; 2] = ["id", "updated_time"];

/// The FDC settings row with the lowest id
pub fn fdc_config_request() -> Result<ReadRequest, StoreError> {
    let table = FdcConfig::table();
    let columns = table
        .column_names()
        .filter(|column| !FDC_CONFIG_EXCLUDED.contains(column));
    Ok(ReadRequest {
        schema: SchemaDescriptor::new(table, columns)?,
        spec: QuerySpec::new().order_by("id", SortOrder::Asc).limit(1),
    })
}
