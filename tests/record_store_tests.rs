mod harness;

use std::collections::HashSet;

use harness::temp_db::TempDb;
use servicebay::domain::{Assignment, Mechanic, ServiceRecord};
use servicebay::error::StoreError;

fn record(vin: &str, date: &str, description: &str) -> ServiceRecord {
    ServiceRecord::new(vin, "John Doe", date, description, "A. Mechanic")
}

// -------------------------------------------------------------------------
// Service records
// -------------------------------------------------------------------------

#[test]
fn inserted_ids_are_unique_and_listed() {
    let db = TempDb::create("ids");
    let mut store = db.open();

    let mut ids = HashSet::new();
    for (vin, date) in [
        ("VIN-A", "2025-01-01"),
        ("VIN-A", "2025-02-01"),
        ("VIN-B", "2025-02-01"),
        ("VIN-A", "2025-02-01"),
    ] {
        let id = store.add_service_record(&record(vin, date, "Service")).unwrap();
        assert!(ids.insert(id), "id {id} returned twice");

        let listed = store.list_service_records_by_vin(vin).unwrap();
        assert!(listed.iter().any(|r| r.id == id));
    }
}

#[test]
fn list_and_export_orders_are_exact_reverses() {
    let db = TempDb::create("orders");
    let mut store = db.open();
    for (date, description) in [
        ("2025-03-01", "third"),
        ("2025-01-01", "first"),
        ("2025-03-01", "fourth"),
        ("2025-02-01", "second"),
    ] {
        store
            .add_service_record(&record("JT123TESTVIN00001", date, description))
            .unwrap();
    }

    let listed: Vec<i32> = store
        .list_service_records_by_vin("JT123TESTVIN00001")
        .unwrap()
        .iter()
        .map(|r| r.id)
        .collect();

    let csv_path = db.dir().join("history.csv");
    let rows = store
        .export_service_history_csv("JT123TESTVIN00001", &csv_path)
        .unwrap();
    assert_eq!(rows, 4);

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let mut exported: Vec<i32> = csv
        .lines()
        .skip(1)
        .map(|line| line.split(',').next().unwrap().parse().unwrap())
        .collect();
    exported.reverse();

    assert_eq!(listed, exported);
}

#[test]
fn records_survive_reopening_the_file() {
    let db = TempDb::create("reopen");
    let id = {
        let mut store = db.open();
        store
            .add_service_record(&record("VIN-A", "2025-09-16", "Oil change"))
            .unwrap()
    };

    let mut store = db.open();
    let listed = store.list_service_records_by_vin("VIN-A").unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, id);
    assert_eq!(listed[0].description, "Oil change");
}

#[test]
fn csv_export_quotes_only_special_fields() {
    let db = TempDb::create("csv");
    let mut store = db.open();
    let tricky = ServiceRecord::new(
        "VIN-A",
        "Plain Name",
        "2025-09-16",
        "Replaced \"front\" pads, rotors\nand fluid",
        "A. Mechanic",
    );
    let id = store.add_service_record(&tricky).unwrap();

    let csv_path = db.dir().join("history.csv");
    store.export_service_history_csv("VIN-A", &csv_path).unwrap();

    let csv = std::fs::read_to_string(&csv_path).unwrap();
    let expected = format!(
        "id,vin,customer_name,service_date,description,mechanic\n\
         {id},VIN-A,Plain Name,2025-09-16,\
         \"Replaced \"\"front\"\" pads, rotors\nand fluid\",A. Mechanic\n"
    );
    assert_eq!(csv, expected);
}

#[test]
fn date_range_count_is_inclusive() {
    let db = TempDb::create("range");
    let mut store = db.open();
    for date in ["2024-12-31", "2025-01-01", "2025-07-04", "2025-12-31", "2026-01-01"] {
        store.add_service_record(&record("VIN-A", date, "Service")).unwrap();
    }

    assert_eq!(
        store
            .count_service_records_by_date_range("2025-01-01", "2025-12-31")
            .unwrap(),
        3
    );
}

// -------------------------------------------------------------------------
// Users
// -------------------------------------------------------------------------

#[test]
fn default_admin_is_idempotent() {
    let db = TempDb::create("admin");
    let mut store = db.open();

    store.ensure_default_admin().unwrap();
    assert_eq!(store.count_users().unwrap(), 1);
    assert!(store.verify_login("admin", "admin"));

    store.ensure_default_admin().unwrap();
    assert_eq!(store.count_users().unwrap(), 1);
}

#[test]
fn bad_logins_are_false_without_errors() {
    let db = TempDb::create("login");
    let mut store = db.open();
    store.ensure_default_admin().unwrap();

    assert!(!store.verify_login("admin", "wrong"));
    assert!(!store.verify_login("nobody", "admin"));
    assert!(store.last_error().is_none());
}

// -------------------------------------------------------------------------
// Mechanics and assignments
// -------------------------------------------------------------------------

#[test]
fn mechanic_listing_scenario() {
    let db = TempDb::create("mechanics");
    let mut store = db.open();
    store
        .add_mechanic(&Mechanic::new("Jane Smith", "Engine", true))
        .unwrap();
    store
        .add_mechanic(&Mechanic::new("Bob Lee", "Brakes", false))
        .unwrap();

    let active: Vec<String> = store
        .list_mechanics(true)
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(active, vec!["Jane Smith".to_string()]);

    let all: Vec<String> = store
        .list_mechanics(false)
        .unwrap()
        .into_iter()
        .map(|m| m.name)
        .collect();
    assert_eq!(all, vec!["Bob Lee".to_string(), "Jane Smith".to_string()]);
}

#[test]
fn deleting_a_mechanic_leaves_assignments_dangling() {
    let db = TempDb::create("dangling");
    let mut store = db.open();
    let jane = store
        .add_mechanic(&Mechanic::new("Jane Smith", "Engine", true))
        .unwrap();
    let bob = store
        .add_mechanic(&Mechanic::new("Bob Lee", "Brakes", true))
        .unwrap();
    let assignment = store
        .add_assignment(&Assignment::new(1, jane, "2025-09-20T09:00:00"))
        .unwrap();

    let err = store.delete_mechanic(9999).unwrap_err();
    assert!(matches!(err, StoreError::StatementFailed(_)));
    assert_eq!(store.list_mechanics(false).unwrap().len(), 2);

    store.delete_mechanic(jane).unwrap();
    let remaining = store.list_mechanics(false).unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, bob);

    let orphaned = store.list_assignments_by_mechanic(jane).unwrap();
    assert_eq!(orphaned.len(), 1);
    assert_eq!(orphaned[0].id, assignment);
    assert_eq!(orphaned[0].mechanic_id, jane);
}

// -------------------------------------------------------------------------
// Lifecycle and failures
// -------------------------------------------------------------------------

#[test]
fn closed_store_reports_not_available() {
    let db = TempDb::create("closed");
    let mut store = db.open();
    store.close();
    store.close();

    let err = store.list_service_records_by_vin("VIN-A").unwrap_err();
    assert!(matches!(err, StoreError::NotAvailable(_)));
    assert_eq!(store.last_error(), Some(&err));
}

#[test]
fn schema_is_reapplicable_and_bad_ddl_is_contained() {
    let db = TempDb::create("schema");
    let mut store = db.open();
    store
        .initialize_schema(servicebay::adapter::outbound::sqlite::database::BUNDLED_SCHEMA)
        .unwrap();

    let err = store.initialize_schema("CREATE TABLEX broken (").unwrap_err();
    assert!(matches!(err, StoreError::StatementFailed(_)));

    store.clear_last_error();
    store.add_service_record(&record("VIN-A", "2025-01-01", "x")).unwrap();
    assert!(store.last_error().is_none());
}

#[test]
fn open_in_missing_directory_fails() {
    let db = TempDb::create("missing-dir");
    let result =
        servicebay::RecordStore::open_or_create(db.dir().join("no-such-dir").join("x.db"));
    assert!(matches!(result, Err(StoreError::ConnectionFailed(_))));
}

#[test]
fn schema_file_errors_are_io_failures() {
    let db = TempDb::create("schema-file");
    let mut store = db.open();

    let err = store
        .initialize_schema_from_file(db.dir().join("absent.sql"))
        .unwrap_err();
    assert!(matches!(err, StoreError::IoFailed(_)));
    assert!(err.message().starts_with("Cannot open schema file:"));

    let schema_path = db.dir().join("schema.sql");
    std::fs::write(&schema_path, "CREATE TABLE IF NOT EXISTS extra (id INTEGER);").unwrap();
    store.initialize_schema_from_file(&schema_path).unwrap();
}
