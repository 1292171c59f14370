#![forbid(unsafe_code)]
use roulement::migration::{
    detect_version, migrate, RawConfig, RawEmployee, SchemaVersion, CURRENT_VERSION,
};
use roulement::{Configuration, Employee, Timeslot};
use serde_json::json;

fn raw(value: serde_json::Value) -> RawConfig {
    serde_json::from_value(value).unwrap()
}

#[test]
fn legacy_string_lists_are_wrapped() {
    let legacy = raw(json!({ "employees": ["A", "B"], "timeslots": ["S0", "S1"] }));
    assert_eq!(detect_version(&legacy), SchemaVersion::BareLists);

    let migrated = migrate(legacy);
    assert!(migrated.changed);
    assert_eq!(migrated.from, SchemaVersion::BareLists);
    assert_eq!(
        migrated.config,
        Configuration {
            employees: vec![Employee::new("A", 0), Employee::new("B", 1)],
            timeslots: vec![Timeslot::new("S0"), Timeslot::new("S1")],
            start_week: 1,
            on_call_order: vec![0, 1],
            on_call_start_index: 0,
        }
    );
}

#[test]
fn legacy_store_keeps_its_start_week() {
    let legacy = raw(json!({
        "employees": ["A", "B", "C"],
        "timeslots": ["S0", "S1"],
        "startWeek": 7
    }));
    let config = migrate(legacy).config;
    assert_eq!(config.start_week, 7);
    // index mod nombre de créneaux
    let slots: Vec<i64> = config.employees.iter().map(|e| e.initial_slot).collect();
    assert_eq!(slots, [0, 1, 0]);
}

#[test]
fn bare_employees_without_timeslots_start_at_zero() {
    let config = migrate(raw(json!({ "employees": ["A", "B"] }))).config;
    assert!(config.employees.iter().all(|e| e.initial_slot == 0));
    assert!(config.timeslots.is_empty());
}

#[test]
fn mixed_entries_are_normalized_in_one_pass() {
    let partial = raw(json!({
        "employees": ["A", { "name": "B", "initialSlot": 0 }, { "name": "C" }],
        "timeslots": [{ "time": "S0", "note": "front desk" }, "S1"],
        "startWeek": 3
    }));
    let migrated = migrate(partial);
    assert!(migrated.changed);
    let config = migrated.config;
    assert_eq!(
        config.employees,
        [Employee::new("A", 0), Employee::new("B", 0), Employee::new("C", 0)]
    );
    assert_eq!(
        config.timeslots,
        [Timeslot::with_note("S0", "front desk"), Timeslot::new("S1")]
    );
    assert_eq!(config.on_call_order, [0, 1, 2]);

    // seconde passe : plus rien à faire
    let again = migrate(RawConfig::from(config.clone()));
    assert!(!again.changed);
    assert_eq!(again.config, config);
}

#[test]
fn records_without_on_call_get_identity_order() {
    let v2 = raw(json!({
        "employees": [{ "name": "A", "initialSlot": 1 }, { "name": "B", "initialSlot": 0 }],
        "timeslots": [{ "time": "S0", "note": "" }, { "time": "S1", "note": "" }],
        "startWeek": 1
    }));
    assert_eq!(detect_version(&v2), SchemaVersion::Records);
    let migrated = migrate(v2);
    assert!(migrated.changed);
    assert_eq!(migrated.config.on_call_order, [0, 1]);
    assert_eq!(migrated.config.on_call_start_index, 0);
    assert_eq!(migrated.config.employees[0].initial_slot, 1);
}

#[test]
fn missing_start_index_is_filled() {
    let cfg = raw(json!({
        "employees": [{ "name": "A", "initialSlot": 0 }],
        "timeslots": [{ "time": "S0", "note": "" }],
        "startWeek": 1,
        "onCallOrder": [0]
    }));
    let migrated = migrate(cfg);
    assert!(migrated.changed);
    assert_eq!(migrated.config.on_call_start_index, 0);
}

#[test]
fn canonical_configuration_is_left_alone() {
    let mut canonical = Configuration::default();
    canonical.start_week = -4;
    canonical.on_call_order = vec![2, 0, 1];
    canonical.on_call_start_index = 2;
    canonical.timeslots[1].note = "backup".into();

    let stored = serde_json::to_value(&canonical).unwrap();
    let loaded = raw(stored);
    assert_eq!(detect_version(&loaded), SchemaVersion::OnCall);

    let migrated = migrate(loaded);
    assert!(!migrated.changed);
    assert_eq!(migrated.config, canonical);
}

#[test]
fn migration_never_rejects_or_repairs_content() {
    // doublons, noms vides et ordre divergent passent tels quels
    let odd = raw(json!({
        "employees": ["A", "A", ""],
        "timeslots": [""],
        "startWeek": 0,
        "onCallOrder": [5],
        "onCallStartIndex": 3
    }));
    let config = migrate(odd).config;
    assert_eq!(config.employees.len(), 3);
    assert_eq!(config.on_call_order, [5]);
    assert_eq!(config.on_call_start_index, 3);
    assert_eq!(config.start_week, 0);
}

#[test]
fn canonical_raw_form_uses_records() {
    let raw = RawConfig::from(Configuration::default());
    assert_eq!(detect_version(&raw), CURRENT_VERSION);
    assert!(raw
        .employees
        .iter()
        .all(|e| matches!(e, RawEmployee::Record { initial_slot: Some(_), .. })));
    let json = serde_json::to_value(&raw).unwrap();
    assert_eq!(json["employees"][0], json!({ "name": "Employee 1", "initialSlot": 0 }));
    assert_eq!(json["onCallOrder"], json!([0, 1, 2]));
}
