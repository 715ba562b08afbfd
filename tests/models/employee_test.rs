//! Tests for the serialized shape of employee records

use chrono::{TimeZone, Utc};
use employee_stats::{EmployeeRecord, Gender, Workload};
use serde_json::json;

fn sample() -> EmployeeRecord {
    EmployeeRecord::new(
        Gender::Female,
        "Tereza",
        "Kučerová",
        Utc.with_ymd_and_hms(1998, 4, 2, 8, 15, 0).unwrap(),
        Workload::Thirty,
    )
}

#[test]
fn test_record_uses_output_field_names() {
    let value = serde_json::to_value(sample()).unwrap();

    assert_eq!(value["gender"], "female");
    assert_eq!(value["name"], "Tereza");
    assert_eq!(value["surname"], "Kučerová");
    assert_eq!(value["workload"], 30);
    assert_eq!(value["birthdate"], "1998-04-02T08:15:00Z");
    assert!(value.get("given_name").is_none());
}

#[test]
fn test_record_reads_back_from_json() {
    let record: EmployeeRecord = serde_json::from_value(json!({
        "gender": "female",
        "name": "Tereza",
        "surname": "Kučerová",
        "birthdate": "1998-04-02T08:15:00Z",
        "workload": 30
    }))
    .unwrap();

    assert_eq!(record, sample());
}

#[test]
fn test_gender_accepts_only_lowercase_labels() {
    assert_eq!(serde_json::from_value::<Gender>(json!("male")).unwrap(), Gender::Male);
    assert_eq!(serde_json::from_value::<Gender>(json!("female")).unwrap(), Gender::Female);
    assert!(serde_json::from_value::<Gender>(json!("1")).is_err());
    assert!(serde_json::from_value::<Gender>(json!("Female")).is_err());
}

#[test]
fn test_workload_serializes_as_hours() {
    let hours: Vec<serde_json::Value> = Workload::ALL
        .iter()
        .map(|w| serde_json::to_value(w).unwrap())
        .collect();
    assert_eq!(hours, vec![json!(10), json!(20), json!(30), json!(40)]);

    assert_eq!(serde_json::from_value::<Workload>(json!(20)).unwrap(), Workload::Twenty);
    assert!(serde_json::from_value::<Workload>(json!(25)).is_err());
}
