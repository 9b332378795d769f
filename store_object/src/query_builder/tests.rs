//! Query builder tests

use crate::errors::StoreError;
use crate::query_builder::{OrderBy, QueryPlan, QuerySpec, SortOrder};
use crate::schema::SchemaDescriptor;
use crate::value::FieldValue;
use chrono::{DateTime, TimeZone, Utc};
use table_derive::RecordTable;

#[allow(dead_code)]
#[derive(RecordTable)]
#[table(name = "trigger", timestamp = "acq_time")]
struct TriggerRow {
    #[primary_key]
    id: i32,
    equipment_id: String,
    motor_number: i32,
    acq_time: DateTime<Utc>,
    plc: Option<i32>,
    status: Option<String>,
    rms_u: Option<f64>,
}

#[allow(dead_code)]
#[derive(RecordTable)]
#[table(name = "model")]
struct ModelRow {
    #[primary_key]
    id: i32,
    line_id: i32,
    equipment_id: String,
    model: i32,
}

fn ts(day: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, day, 0, 0, 0).unwrap()
}

fn trigger_schema(columns: &[&str]) -> SchemaDescriptor {
    SchemaDescriptor::for_table::<TriggerRow, _, _>(columns.iter().copied()).unwrap()
}

// ========================================
// QuerySpec construction
// ========================================

#[test]
fn test_eq_replaces_same_column() {
    let spec = QuerySpec::new()
        .eq("motor_number", 1)
        .eq("plc", 3)
        .eq("motor_number", 2);

    assert_eq!(spec.equality_conditions().len(), 2);
    assert_eq!(spec.equality_conditions()[0].value, FieldValue::Int(2));
    assert_eq!(spec.describe(), "motor_number=2, plc=3");
}

#[test]
fn test_equals_from_pairs() {
    let spec = QuerySpec::new().equals([("equipment_id", "EQ-7"), ("status", "run")]);
    assert_eq!(spec.describe(), "equipment_id='EQ-7', status='run'");
    assert_eq!(QuerySpec::new().describe(), "no conditions");
}

#[test]
fn test_order_from_parts_defaults() {
    assert_eq!(OrderBy::from_parts(None, None, "acq_time"), OrderBy::asc("acq_time"));
    assert_eq!(
        OrderBy::from_parts(Some("id"), Some("DESC"), "acq_time"),
        OrderBy::desc("id")
    );
    // Malformed direction is treated as ascending
    assert_eq!(
        OrderBy::from_parts(Some("id"), Some("sideways"), "acq_time"),
        OrderBy::asc("id")
    );
    assert_eq!(SortOrder::parse(" Desc "), Some(SortOrder::Desc));
}

// ========================================
// Plan validation
// ========================================

#[test]
fn test_plan_rejects_unknown_condition_columns() {
    let schema = trigger_schema(&["acq_time", "status"]);

    let spec = QuerySpec::new().eq("line_id", 1);
    assert!(matches!(
        QueryPlan::new(&schema, &spec),
        Err(StoreError::SchemaMismatch { ref column, .. }) if column == "line_id"
    ));

    let spec = QuerySpec::new().between("supply_freq", Some(1.0), None::<f64>);
    assert!(QueryPlan::new(&schema, &spec).is_err());

    let spec = QuerySpec::new().order_by("timestamp", SortOrder::Desc);
    assert!(QueryPlan::new(&schema, &spec).is_err());
}

#[test]
fn test_conditions_may_use_unprojected_columns() {
    let schema = trigger_schema(&["acq_time", "rms_u"]);
    let spec = QuerySpec::new().eq("equipment_id", "EQ-1").eq("motor_number", 2);
    assert!(QueryPlan::new(&schema, &spec).is_ok());
}

#[test]
fn test_default_order_follows_timestamp_column() {
    let schema = trigger_schema(&["acq_time"]);
    let spec = QuerySpec::new();
    let plan = QueryPlan::new(&schema, &spec).unwrap();
    assert_eq!(plan.order_by(), Some(&OrderBy::asc("acq_time")));

    let schema = SchemaDescriptor::all_columns::<ModelRow>().unwrap();
    let plan = QueryPlan::new(&schema, &spec).unwrap();
    assert_eq!(plan.order_by(), None);
}

// ========================================
// SQL rendering
// ========================================

#[test]
fn test_sql_full_shape() {
    let schema = trigger_schema(&["equipment_id", "acq_time", "status"]);
    let spec = QuerySpec::new()
        .eq("equipment_id", "EQ-1")
        .eq("motor_number", 3)
        .between("acq_time", Some(ts(1)), Some(ts(31)))
        .order_by("acq_time", SortOrder::Desc)
        .limit(1);
    let plan = QueryPlan::new(&schema, &spec).unwrap();
    let (sql, values) = plan.to_sql();

    assert_eq!(
        sql,
        "SELECT \"equipment_id\", \"acq_time\", \"status\" FROM \"trigger\" \
         WHERE \"acq_time\" > $1 AND \"acq_time\" < $2 AND \"equipment_id\" = $3 AND \"motor_number\" = $4 \
         ORDER BY \"acq_time\" DESC LIMIT 1"
    );
    assert_eq!(
        values,
        vec![
            FieldValue::Timestamp(ts(1)),
            FieldValue::Timestamp(ts(31)),
            FieldValue::Text("EQ-1".into()),
            FieldValue::Int(3),
        ]
    );
}

#[test]
fn test_sql_null_equality_and_open_range() {
    let schema = trigger_schema(&["acq_time"]);
    let spec = QuerySpec::new()
        .eq("plc", None::<i32>)
        .between("acq_time", None::<DateTime<Utc>>, Some(ts(10)));
    let (sql, values) = QueryPlan::new(&schema, &spec).unwrap().to_sql();

    assert_eq!(
        sql,
        "SELECT \"acq_time\" FROM \"trigger\" WHERE \"acq_time\" < $1 AND \"plc\" IS NULL ORDER BY \"acq_time\" ASC"
    );
    assert_eq!(values, vec![FieldValue::Timestamp(ts(10))]);
}

#[test]
fn test_sql_without_conditions() {
    let schema = SchemaDescriptor::for_table::<ModelRow, _, _>(["model", "equipment_id"]).unwrap();
    let spec = QuerySpec::new().between("model", None::<i32>, None::<i32>);
    let plan = QueryPlan::new(&schema, &spec).unwrap();
    assert!(plan.range().is_none());

    let (sql, values) = plan.to_sql();
    assert_eq!(sql, "SELECT \"model\", \"equipment_id\" FROM \"model\"");
    assert!(values.is_empty());
}

#[test]
fn test_null_range_bounds_are_dropped() {
    let schema = trigger_schema(&["acq_time"]);
    let spec = QuerySpec::new().between("plc", Some(None::<i32>), Some(5));
    let range = spec.range_condition().unwrap();
    assert_eq!(range.lower, None);
    assert_eq!(range.upper, Some(FieldValue::Int(5)));

    let (sql, values) = QueryPlan::new(&schema, &spec).unwrap().to_sql();
    assert_eq!(
        sql,
        "SELECT \"acq_time\" FROM \"trigger\" WHERE \"plc\" < $1 ORDER BY \"acq_time\" ASC"
    );
    assert_eq!(values, vec![FieldValue::Int(5)]);

    let spec = QuerySpec::new().between("plc", Some(None::<i32>), Some(None::<i32>));
    let plan = QueryPlan::new(&schema, &spec).unwrap();
    assert!(plan.range().is_none());
    assert_eq!(
        plan.to_sql().0,
        "SELECT \"acq_time\" FROM \"trigger\" ORDER BY \"acq_time\" ASC"
    );
}

#[test]
fn test_sql_injection_in_values_stays_parameterized() {
    let schema = trigger_schema(&["status"]);
    let spec = QuerySpec::new().eq("equipment_id", "x'; DROP TABLE motor; --");
    let (sql, values) = QueryPlan::new(&schema, &spec).unwrap().to_sql();
    assert!(!sql.contains("DROP"));
    assert_eq!(values.len(), 1);
}
