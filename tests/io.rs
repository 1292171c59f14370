#![forbid(unsafe_code)]
use roulement::{generate, io, Configuration};
use std::fs;
use tempfile::tempdir;

#[test]
fn import_employees_with_optional_slot() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("people.csv");
    fs::write(&path, "name,initial_slot\nAlice,2\nBob,\nCarol\n").unwrap();

    let rows = io::import_employees_csv(&path).unwrap();
    assert_eq!(
        rows,
        [
            ("Alice".to_string(), Some(2)),
            ("Bob".to_string(), None),
            ("Carol".to_string(), None),
        ]
    );
}

#[test]
fn import_rejects_bad_rows() {
    let dir = tempdir().unwrap();
    let empty = dir.path().join("empty.csv");
    fs::write(&empty, "name\n \n").unwrap();
    assert!(io::import_employees_csv(&empty).is_err());

    let bad_slot = dir.path().join("bad.csv");
    fs::write(&bad_slot, "name,initial_slot\nAlice,two\n").unwrap();
    assert!(io::import_employees_csv(&bad_slot).is_err());
}

#[test]
fn json_export_round_trips_weeks() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("planning.json");
    let schedule = generate(&Configuration::default(), 2026);
    io::export_schedule_json(&path, &schedule).unwrap();

    let value: serde_json::Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value.as_array().map(Vec::len), Some(52));
    assert_eq!(value[0]["dateRange"]["start"], "2025-12-29");
    assert_eq!(value[0]["onCall"], "Employee 1");
    assert_eq!(value[0]["assignments"][0]["timeslotLabel"], "9:00 AM - 5:00 PM");
}
