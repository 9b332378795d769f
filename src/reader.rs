//! Dashboard read workflows
//!
//! Each operation resolves what it needs (category, PLC model, time window),
//! builds a request through [`dispatch`](crate::dispatch) and runs it against
//! the owning store.

use chrono::{DateTime, Duration, Utc};
use config::QueryConfig;
use store_object::{
    FieldValue, QuerySpec, Record, RecordSource, RecordTable, SchemaDescriptor, SortOrder,
    StoreError,
};

use crate::category::MotorCategory;
use crate::debug_log;
use crate::dispatch::{self, MotorKey, ReadRequest, TrendKind, UseCase};
use crate::errors::MotorHausError;
use crate::models::{MemoryMapping, Motor, MotorBearing, PlcLog, PlcModel};
use crate::series::ColumnarSeries;
use crate::window::{resolve_window, TimeWindow};

/// Columns returned by [`MotorReader::plc_models`]
pub const PLC_MODEL_COLUMNS: &[&str] = &["equipment_id", "model", "name", "description"];

/// Read workflows over the service, feature, metadata, PLC and FDC stores
#[derive(Clone, Copy)]
pub struct MotorReader<'a> {
    service: &'a dyn RecordSource,
    feature: &'a dyn RecordSource,
    metadata: &'a dyn RecordSource,
    plc: &'a dyn RecordSource,
    fdc: &'a dyn RecordSource,
    query: &'a QueryConfig,
}

impl<'a> MotorReader<'a> {
    pub fn new(
        service: &'a dyn RecordSource,
        feature: &'a dyn RecordSource,
        metadata: &'a dyn RecordSource,
        plc: &'a dyn RecordSource,
        fdc: &'a dyn RecordSource,
        query: &'a QueryConfig,
    ) -> Self {
        Self {
            service,
            feature,
            metadata,
            plc,
            fdc,
            query,
        }
    }

    pub fn query_config(&self) -> &QueryConfig {
        self.query
    }

    /// Window for a time-series read, relative to the current time
    pub fn window(&self, start: Option<DateTime<Utc>>, end: Option<DateTime<Utc>>) -> TimeWindow {
        let lookback = Duration::try_days(self.query.lookback_days).unwrap_or(Duration::MAX);
        resolve_window(start, end, Utc::now(), lookback)
    }

    /// Category recorded for a motor; exactly one motor row must match
    pub async fn motor_category(
        &self,
        equipment_id: i32,
        motor_number: i32,
    ) -> Result<MotorCategory, MotorHausError> {
        let schema = SchemaDescriptor::for_table::<Motor, _, _>(["category"])?;
        let spec = QuerySpec::new()
            .eq("equipment_id", equipment_id)
            .eq("number", motor_number);
        let record = self.service.select_one(&schema, &spec).await?;

        let tag = record
            .get("category")
            .and_then(FieldValue::as_str)
            .ok_or_else(|| StoreError::decode("category", "expected text"))?;
        Ok(tag.parse()?)
    }

    /// Production model the equipment currently runs, per the PLC memory log.
    ///
    /// An empty log value falls back to the configured default model.
    pub async fn current_plc_model(&self, equipment_id: i32) -> Result<i32, MotorHausError> {
        let mapping_schema = SchemaDescriptor::for_table::<MemoryMapping, _, _>(["id"])?;
        let mapping_spec = QuerySpec::new()
            .eq("line_id", self.query.line_id)
            .eq("equipment_id", equipment_id)
            .eq("name", self.query.plc_model_memory_name.as_str())
            .order_by("id", SortOrder::Asc)
            .limit(1);
        let mapping = self
            .plc
            .select_first(&mapping_schema, &mapping_spec)
            .await?
            .ok_or_else(|| StoreError::not_found(MemoryMapping::table().name, mapping_spec.describe()))?;
        let mm_id = mapping
            .get("id")
            .and_then(FieldValue::as_i64)
            .ok_or_else(|| StoreError::decode("id", "expected integer"))?;

        let log_schema = SchemaDescriptor::for_table::<PlcLog, _, _>(["value"])?;
        let log_spec = QuerySpec::new()
            .eq("mm_id", mm_id)
            .order_by("id", SortOrder::Desc)
            .limit(1);
        let log = self
            .plc
            .select_first(&log_schema, &log_spec)
            .await?
            .ok_or_else(|| StoreError::not_found(PlcLog::table().name, log_spec.describe()))?;

        let value = log.get("value").and_then(FieldValue::as_str).unwrap_or("").trim();
        if value.is_empty() {
            tracing::warn!(
                equipment_id,
                default_model = self.query.default_plc_model,
                "PLC model log value is empty, using default model"
            );
            return Ok(self.query.default_plc_model);
        }

        value
            .parse::<i32>()
            .map_err(|e| StoreError::decode("value", format!("'{}' is not a PLC model: {}", value, e)).into())
    }

    /// Key for a motor, resolving the current PLC model when none is given
    pub async fn motor_key(
        &self,
        equipment_id: i32,
        motor_number: i32,
        plc: Option<i32>,
    ) -> Result<MotorKey, MotorHausError> {
        let plc = match plc {
            Some(plc) => plc,
            None => self.current_plc_model(equipment_id).await?,
        };
        Ok(MotorKey::new(equipment_id, motor_number, plc))
    }

    /// Most recent dashboard record for a motor of `category`
    pub async fn dashboard(
        &self,
        category: MotorCategory,
        key: &MotorKey,
    ) -> Result<Record, MotorHausError> {
        let read = dispatch::request(category, UseCase::Dashboard, key, TimeWindow::new(None, None))?;
        self.snapshot(self.feature, read).await
    }

    /// Detail-page series for a motor of `category`
    pub async fn detail(
        &self,
        category: MotorCategory,
        key: &MotorKey,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Record>, MotorHausError> {
        let read = dispatch::request(category, UseCase::Detail, key, self.window(start, end))?;
        self.series(self.feature, read).await
    }

    /// Trend series of `kind` for a motor of `category`
    pub async fn trend(
        &self,
        kind: TrendKind,
        category: MotorCategory,
        key: &MotorKey,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Record>, MotorHausError> {
        let read = dispatch::request(category, UseCase::Trend(kind), key, self.window(start, end))?;
        self.series(self.feature, read).await
    }

    /// [`MotorReader::trend`] pivoted into one array per column
    pub async fn trend_columns(
        &self,
        kind: TrendKind,
        category: MotorCategory,
        key: &MotorKey,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<ColumnarSeries, MotorHausError> {
        let records = self.trend(kind, category, key, start, end).await?;
        Ok(ColumnarSeries::from_records(&records))
    }

    /// Dashboard record for a motor identified only by equipment and number.
    ///
    /// Looks up the motor's category and, when `plc` is absent, the current PLC model.
    pub async fn motor_dashboard(
        &self,
        equipment_id: i32,
        motor_number: i32,
        plc: Option<i32>,
    ) -> Result<(MotorCategory, Record), MotorHausError> {
        let category = self.motor_category(equipment_id, motor_number).await?;
        let key = self.motor_key(equipment_id, motor_number, plc).await?;
        let record = self.dashboard(category, &key).await?;
        Ok((category, record))
    }

    /// Most recent trigger record for a motor
    pub async fn trigger_snapshot(&self, key: &MotorKey) -> Result<Record, MotorHausError> {
        let read = dispatch::trigger_request(key)?;
        self.snapshot(self.feature, read).await
    }

    /// Production models configured for an equipment; none at all is `NotFound`
    pub async fn plc_models(&self, equipment_id: i32) -> Result<Vec<Record>, MotorHausError> {
        let schema = SchemaDescriptor::for_table::<PlcModel, _, _>(PLC_MODEL_COLUMNS.iter().copied())?;
        let spec = QuerySpec::new()
            .eq("line_id", self.query.line_id)
            .eq("equipment_id", equipment_id);
        let records = self.plc.select(&schema, &spec).await?;
        if records.is_empty() {
            return Err(StoreError::not_found(schema.table_name(), spec.describe()).into());
        }
        Ok(records)
    }

    /// Configured supply frequency of a uniform-speed motor.
    ///
    /// Without an explicit `plc` the configured default model is used, not the
    /// model currently running.
    pub async fn supply_frequency(
        &self,
        equipment_id: i32,
        motor_number: i32,
        plc: Option<i32>,
    ) -> Result<f64, MotorHausError> {
        let schema = SchemaDescriptor::for_table::<MotorBearing, _, _>(["supply_freq"])?;
        let spec = QuerySpec::new()
            .eq("equipment_id", equipment_id)
            .eq("motor_number", motor_number)
            .eq("plc", plc.unwrap_or(self.query.default_plc_model));
        let record = self
            .service
            .select_first(&schema, &spec)
            .await?
            .ok_or_else(|| StoreError::not_found(schema.table_name(), spec.describe()))?;

        record
            .get("supply_freq")
            .and_then(FieldValue::as_f64)
            .ok_or_else(|| StoreError::decode("supply_freq", "expected number").into())
    }

    /// Raw-acquisition metadata for a motor, newest first
    pub async fn metadata(
        &self,
        equipment_id: i32,
        motor_number: i32,
        start: Option<DateTime<Utc>>,
        end: Option<DateTime<Utc>>,
    ) -> Result<Vec<Record>, MotorHausError> {
        let read = dispatch::metadata_request(equipment_id, motor_number, self.window(start, end))?;
        self.series(self.metadata, read).await
    }

    /// FDC bridge settings.
    ///
    /// With no settings row every column is present as empty text.
    pub async fn fdc_config(&self) -> Result<Record, MotorHausError> {
        let read = dispatch::fdc_config_request()?;
        match self.fdc.select_first(&read.schema, &read.spec).await? {
            Some(record) => Ok(record),
            None => {
                tracing::warn!(store = self.fdc.name(), "no FDC settings row, returning empty settings");
                Ok(read
                    .schema
                    .column_names()
                    .into_iter()
                    .map(|column| (column.to_string(), FieldValue::Text(String::new())))
                    .collect())
            }
        }
    }

    async fn snapshot(
        &self,
        source: &dyn RecordSource,
        read: ReadRequest,
    ) -> Result<Record, MotorHausError> {
        debug_log!(
            "snapshot from {} on {}: {}",
            read.schema.table_name(),
            source.name(),
            read.spec.describe()
        );
        let record = source
            .select_first(&read.schema, &read.spec)
            .await?
            .ok_or_else(|| StoreError::not_found(read.schema.table_name(), read.spec.describe()))?;
        Ok(record)
    }

    async fn series(
        &self,
        source: &dyn RecordSource,
        read: ReadRequest,
    ) -> Result<Vec<Record>, MotorHausError> {
        debug_log!(
            "series from {} on {}: {}",
            read.schema.table_name(),
            source.name(),
            read.spec.describe()
        );
        Ok(source.select(&read.schema, &read.spec).await?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::columns::column_set;
    use crate::models::{
        FdcConfig, Metadata, Trigger, UniformSpeedExternalFeature, UniformSpeedTensionFeature,
    };
    use chrono::TimeZone;
    use store_object::MemorySource;

    fn ts(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, mo, d, h, mi, s).unwrap()
    }

    fn external_row(equipment_id: i32, motor_number: i32, plc: i32, acq_time: DateTime<Utc>) -> UniformSpeedExternalFeature {
        UniformSpeedExternalFeature {
            equipment_id,
            motor_number,
            acq_time,
            plc,
            rms_u: 1.0,
            rms_v: 1.0,
            rms_w: 1.0,
            signal_noise_ratio: 20.0,
            rolling_load_ratio: 0.5,
            rolling_load: 3.2,
            winding_supply_freq_amp_unbalance_ratio_median: 0.01,
            motor_bpfi_1x_median: 0.02,
            gearbox_rotation_freq_amp_median: 0.03,
            external_bpfo_1x_median: 0.04,
            coupling_supply_freq_amp_median: 0.05,
            belt_kurtosis_max_median: 3.0,
            stator_diagnosis: 0,
            motor_bearing_diagnosis: 0,
            gear_shaft_diagnosis: 0,
            external_bearing_diagnosis: 1,
            coupling_diagnosis: 0,
            belt_diagnosis: 0,
            final_diagnosis: 1,
        }
    }

    fn tension_row(acq_time: DateTime<Utc>) -> UniformSpeedTensionFeature {
        UniformSpeedTensionFeature {
            equipment_id: 1,
            motor_number: 5,
            acq_time,
            plc: 3,
            rms_u: 1.0,
            rms_v: 1.0,
            rms_w: 1.0,
            signal_noise_ratio: 18.0,
            rolling_load_ratio: 0.4,
            rolling_load: 2.9,
            winding_supply_freq_amp_unbalance_ratio_median: 0.01,
            motor_bpfi_1x_median: 0.02,
            gearbox_rotation_freq_amp_median: 0.03,
            external_bpfo_1x_median: 0.04,
            tension_bpfo_1x_median: 0.06,
            coupling_supply_freq_amp_median: 0.05,
            belt_kurtosis_max_median: 3.0,
            stator_diagnosis: 0,
            motor_bearing_diagnosis: 0,
            gear_shaft_diagnosis: 0,
            external_main_bearing_diagnosis: 2,
            external_tension_bearing_diagnosis: 1,
            coupling_diagnosis: 0,
            belt_diagnosis: 0,
            final_diagnosis: 2,
        }
    }

    fn motor(id: i32, number: i32, category: &str) -> Motor {
        Motor {
            id,
            equipment_id: 1,
            number,
            updated_time: ts(2023, 1, 1, 0, 0, 0),
            name: format!("Motor{}", number),
            category: category.to_string(),
            rated_current: 4.2,
            pole: Some(4),
            gear_ratio: None,
            max_current: None,
        }
    }

    fn metadata_row(motor_number: i32, acq_time: DateTime<Utc>) -> Metadata {
        Metadata {
            line_id: 1,
            equipment_id: 1,
            motor_number,
            phase: "uvw".into(),
            acq_time,
            file_path: format!("/data/1/{}/{}.npy", motor_number, acq_time.timestamp()),
            sampling_rate: 10_000,
            sample_size: 100_000,
        }
    }

    fn fdc_row(id: i32, host: &str) -> FdcConfig {
        FdcConfig {
            id,
            updated_time: ts(2023, 1, 1, 0, 0, 0).naive_utc(),
            host: host.into(),
            vpn: "plant".into(),
            topic: "motor/diagnosis".into(),
            user_name: "bridge".into(),
            password: "secret".into(),
            client_name: "motorhaus".into(),
            connect_attempts: 3,
            reconnect_attempts: 5,
            reconnect_interval: 1000,
            connect_retries_per_host: 2,
            message_interval: 60,
            sheet_path: "/srv/sheet.xlsx".into(),
            featuredb_uri: "postgres://feature".into(),
        }
    }

    struct Fixture {
        service: MemorySource,
        feature: MemorySource,
        metadata: MemorySource,
        plc: MemorySource,
        fdc: MemorySource,
        query: QueryConfig,
    }

    impl Fixture {
        fn new() -> Self {
            let feature_rows = [
                external_row(1, 3, 3, ts(2022, 12, 31, 23, 59, 59)),
                external_row(1, 3, 3, ts(2023, 1, 1, 12, 0, 0)),
                external_row(1, 3, 3, ts(2023, 1, 2, 0, 0, 1)),
                external_row(1, 3, 7, ts(2023, 1, 3, 0, 0, 0)),
                external_row(1, 4, 3, ts(2023, 1, 4, 0, 0, 0)),
            ];
            let feature = MemorySource::new("feature")
                .with_models(&feature_rows)
                .unwrap()
                .with_models(&[tension_row(ts(2023, 1, 1, 6, 0, 0))])
                .unwrap()
                .with_models(&[Trigger {
                    equipment_id: 1,
                    motor_number: 3,
                    acq_time: ts(2023, 1, 2, 0, 0, 1),
                    plc: 3,
                    status: 1,
                    plc_status: 0,
                    supply_freq_by_data: 59.8,
                    rms_u: 1.1,
                }])
                .unwrap();

            let service = MemorySource::new("service")
                .with_models(&[motor(1, 3, "u3e"), motor(2, 5, "u3t"), motor(3, 6, "x9"), motor(4, 7, "v3"), motor(5, 7, "v3")])
                .unwrap()
                .with_models(&[MotorBearing {
                    id: 1,
                    equipment_id: 1,
                    motor_number: 3,
                    plc: 3,
                    updated_time: ts(2023, 1, 1, 0, 0, 0),
                    supply_freq: 60.0,
                    moving_median_sample_number: 10,
                    motor_bearing_ball_diameter: None,
                    motor_bearing_pitch_diameter: None,
                    motor_bearing_ball_number: None,
                }])
                .unwrap();

            let plc = MemorySource::new("plc")
                .with_models(&[
                    MemoryMapping {
                        id: 11,
                        line_id: 1,
                        equipment_id: 1,
                        name: "CellState_Model".into(),
                    },
                    MemoryMapping {
                        id: 12,
                        line_id: 1,
                        equipment_id: 2,
                        name: "CellState_Model".into(),
                    },
                    MemoryMapping {
                        id: 13,
                        line_id: 1,
                        equipment_id: 3,
                        name: "CellState_Model".into(),
                    },
                ])
                .unwrap()
                .with_models(&[
                    PlcLog { id: 1, mm_id: 11, value: "5".into() },
                    PlcLog { id: 2, mm_id: 11, value: "3".into() },
                    PlcLog { id: 3, mm_id: 12, value: "  ".into() },
                    PlcLog { id: 4, mm_id: 13, value: "auto".into() },
                ])
                .unwrap()
                .with_models(&[PlcModel {
                    id: 1,
                    line_id: 1,
                    equipment_id: 1,
                    model: 3,
                    name: "Pouch".into(),
                    description: "Standard pouch cell".into(),
                }])
                .unwrap();

            let metadata = MemorySource::new("metadata")
                .with_models(&[
                    metadata_row(3, ts(2023, 1, 1, 0, 0, 0)),
                    metadata_row(3, ts(2023, 1, 1, 8, 0, 0)),
                    metadata_row(3, ts(2023, 1, 1, 16, 0, 0)),
                    metadata_row(3, ts(2023, 1, 2, 0, 0, 0)),
                    metadata_row(4, ts(2023, 1, 1, 8, 0, 0)),
                ])
                .unwrap();

            Self {
                service,
                feature,
                metadata,
                plc,
                fdc: MemorySource::new("fdc"),
                query: QueryConfig::default(),
            }
        }

        fn reader(&self) -> MotorReader<'_> {
            MotorReader::new(
                &self.service,
                &self.feature,
                &self.metadata,
                &self.plc,
                &self.fdc,
                &self.query,
            )
        }
    }

    #[tokio::test]
    async fn test_dashboard_snapshot_matches_key() {
        let fixture = Fixture::new();
        let key = MotorKey::new(1, 3, 3);
        let record = fixture
            .reader()
            .dashboard(MotorCategory::SingleBearingUniform, &key)
            .await
            .unwrap();

        assert_eq!(
            record.columns().collect::<Vec<_>>(),
            column_set(UseCase::Dashboard, MotorCategory::SingleBearingUniform).to_vec()
        );
        assert_eq!(record.get("equipment_id"), Some(&FieldValue::Int(1)));
        assert_eq!(record.get("motor_number"), Some(&FieldValue::Int(3)));
        assert_eq!(record.get("plc"), Some(&FieldValue::Int(3)));
        assert_eq!(
            record.get("acq_time"),
            Some(&FieldValue::Timestamp(ts(2023, 1, 2, 0, 0, 1)))
        );
    }

    #[tokio::test]
    async fn test_dashboard_without_rows_is_not_found() {
        let fixture = Fixture::new();
        let err = fixture
            .reader()
            .dashboard(MotorCategory::VariableThreePhase, &MotorKey::new(1, 3, 3))
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn test_detail_window_is_exclusive() {
        let fixture = Fixture::new();
        let records = fixture
            .reader()
            .detail(
                MotorCategory::SingleBearingUniform,
                &MotorKey::new(1, 3, 3),
                Some(ts(2023, 1, 1, 0, 0, 0)),
                Some(ts(2023, 1, 2, 0, 0, 0)),
            )
            .await
            .unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(
            records[0].get("acq_time"),
            Some(&FieldValue::Timestamp(ts(2023, 1, 1, 12, 0, 0)))
        );
    }

    #[tokio::test]
    async fn test_end_without_start_reads_everything_before_end() {
        let fixture = Fixture::new();
        let records = fixture
            .reader()
            .trend(
                TrendKind::Load,
                MotorCategory::SingleBearingUniform,
                &MotorKey::new(1, 3, 3),
                None,
                Some(ts(2023, 1, 10, 0, 0, 0)),
            )
            .await
            .unwrap();
        assert_eq!(records.len(), 3);
        assert!(records.iter().all(|r| r.len() == 3));
    }

    #[tokio::test]
    async fn test_default_window_excludes_old_rows() {
        let fixture = Fixture::new();
        let records = fixture
            .reader()
            .trend(
                TrendKind::Operating,
                MotorCategory::SingleBearingUniform,
                &MotorKey::new(1, 3, 3),
                None,
                None,
            )
            .await
            .unwrap();
        assert!(records.is_empty());
    }

    #[tokio::test]
    async fn test_tension_trend_reads_tension_table() {
        let fixture = Fixture::new();
        let series = fixture
            .reader()
            .trend_columns(
                TrendKind::Diagnosis,
                MotorCategory::TensionBearingUniform,
                &MotorKey::new(1, 5, 3),
                Some(ts(2023, 1, 1, 0, 0, 0)),
                Some(ts(2023, 1, 2, 0, 0, 0)),
            )
            .await
            .unwrap();
        assert_eq!(
            series.get("external_tension_bearing_diagnosis"),
            Some(&[FieldValue::Int(1)][..])
        );
        assert!(series.get("external_bearing_diagnosis").is_none());
        assert_eq!(
            series.get("acq_time"),
            Some(&[FieldValue::Int(ts(2023, 1, 1, 6, 0, 0).timestamp_millis())][..])
        );
    }

    #[tokio::test]
    async fn test_series_reads_are_idempotent() {
        let fixture = Fixture::new();
        let reader = fixture.reader();
        let key = MotorKey::new(1, 3, 3);
        let first = reader
            .detail(MotorCategory::SingleBearingUniform, &key, None, Some(ts(2024, 1, 1, 0, 0, 0)))
            .await
            .unwrap();
        let second = reader
            .detail(MotorCategory::SingleBearingUniform, &key, None, Some(ts(2024, 1, 1, 0, 0, 0)))
            .await
            .unwrap();
        assert_eq!(first, second);
    }

    #[tokio::test]
    async fn test_motor_category_lookup() {
        let fixture = Fixture::new();
        let reader = fixture.reader();
        assert_eq!(
            reader.motor_category(1, 5).await.unwrap(),
            MotorCategory::TensionBearingUniform
        );
        assert!(reader.motor_category(1, 6).await.unwrap_err().is_client_error());
        assert!(reader.motor_category(1, 99).await.unwrap_err().is_not_found());
        assert!(matches!(
            reader.motor_category(1, 7).await.unwrap_err(),
            MotorHausError::Store(StoreError::MultipleMatches { count: 2, .. })
        ));
    }

    #[tokio::test]
    async fn test_current_plc_model_uses_newest_log() {
        let fixture = Fixture::new();
        let reader = fixture.reader();
        assert_eq!(reader.current_plc_model(1).await.unwrap(), 3);
        // Blank value falls back to the default model
        assert_eq!(reader.current_plc_model(2).await.unwrap(), 3);
        assert!(matches!(
            reader.current_plc_model(3).await.unwrap_err(),
            MotorHausError::Store(StoreError::Decode { .. })
        ));
        assert!(reader.current_plc_model(4).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_motor_dashboard_resolves_category_and_plc() {
        let fixture = Fixture::new();
        let (category, record) = fixture.reader().motor_dashboard(1, 3, None).await.unwrap();
        assert_eq!(category, MotorCategory::SingleBearingUniform);
        assert_eq!(record.get("plc"), Some(&FieldValue::Int(3)));
    }

    #[tokio::test]
    async fn test_trigger_snapshot() {
        let fixture = Fixture::new();
        let record = fixture
            .reader()
            .trigger_snapshot(&MotorKey::new(1, 3, 3))
            .await
            .unwrap();
        assert_eq!(record.get("supply_freq_by_data"), Some(&FieldValue::Float(59.8)));
        assert_eq!(record.len(), 8);
    }

    #[tokio::test]
    async fn test_plc_models_and_supply_frequency() {
        let fixture = Fixture::new();
        let reader = fixture.reader();

        let models = reader.plc_models(1).await.unwrap();
        assert_eq!(models.len(), 1);
        assert_eq!(models[0].columns().collect::<Vec<_>>(), PLC_MODEL_COLUMNS.to_vec());
        assert!(reader.plc_models(2).await.unwrap_err().is_not_found());

        assert_eq!(reader.supply_frequency(1, 3, None).await.unwrap(), 60.0);
        assert!(reader.supply_frequency(1, 3, Some(9)).await.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_metadata_is_newest_first_inside_window() {
        let fixture = Fixture::new();
        let records = fixture
            .reader()
            .metadata(1, 3, Some(ts(2023, 1, 1, 0, 0, 0)), Some(ts(2023, 1, 2, 0, 0, 0)))
            .await
            .unwrap();
        let times: Vec<_> = records.iter().map(|r| r.get("acq_time").cloned()).collect();
        assert_eq!(
            times,
            vec![
                Some(FieldValue::Timestamp(ts(2023, 1, 1, 16, 0, 0))),
                Some(FieldValue::Timestamp(ts(2023, 1, 1, 8, 0, 0))),
            ]
        );
        assert_eq!(records[0].get("phase"), Some(&FieldValue::Text("uvw".into())));
        assert_eq!(records[0].len(), 8);
    }

    #[tokio::test]
    async fn test_fdc_config_without_row_is_empty_text() {
        let fixture = Fixture::new();
        let record = fixture.reader().fdc_config().await.unwrap();
        assert_eq!(record.len(), 13);
        assert!(record.get("id").is_none());
        assert_eq!(record.get("host"), Some(&FieldValue::Text(String::new())));
        assert_eq!(record.get("message_interval"), Some(&FieldValue::Text(String::new())));
    }

    #[tokio::test]
    async fn test_fdc_config_reads_first_row() {
        let mut fixture = Fixture::new();
        fixture.fdc = MemorySource::new("fdc")
            .with_models(&[fdc_row(2, "broker-b"), fdc_row(1, "broker-a")])
            .unwrap();
        let record = fixture.reader().fdc_config().await.unwrap();
        assert_eq!(record.get("host"), Some(&FieldValue::Text("broker-a".into())));
        assert_eq!(record.get("connect_attempts"), Some(&FieldValue::Int(3)));
        assert!(record.get("updated_time").is_none());
    }

    #[test]
    fn test_huge_lookback_leaves_window_open() {
        let fixture = Fixture::new();
        let query = QueryConfig {
            lookback_days: i64::MAX,
            ..QueryConfig::default()
        };
        let reader = MotorReader::new(
            &fixture.service,
            &fixture.feature,
            &fixture.metadata,
            &fixture.plc,
            &fixture.fdc,
            &query,
        );
        let window = reader.window(None, None);
        assert_eq!(window.start, None);
        assert!(window.end.is_some());
    }
}
