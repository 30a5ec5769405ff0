use chrono::{TimeZone, Utc};
use rsavetracker::core::ledger::TreatLedger;
use rsavetracker::models::treat::Treat;
use rsavetracker::store::{KeyValueStore, MemoryStore, TREAT_LOG_KEY};

mod common;
use common::assert_close;

fn treat(label: &str, amount: f64, minute: u32) -> Treat {
    Treat::new(
        label,
        amount,
        Utc.with_ymd_and_hms(2025, 1, 10, 12, minute, 0).unwrap(),
    )
}

#[test]
fn test_empty_ledger_totals_zero() {
    let ledger = TreatLedger::new();
    assert!(ledger.is_empty());
    assert_eq!(ledger.total_spent(), 0.0);
}

#[test]
fn test_append_keeps_order_and_grows_total() {
    let ledger = TreatLedger::new().append(treat("Cake", 4.5, 0));
    let before = ledger.total_spent();

    let ledger = ledger.append(treat("Tea", 0.01, 5));

    assert!(ledger.total_spent() > before);
    assert_close(ledger.total_spent(), 4.51);
    let labels: Vec<_> = ledger.entries().iter().map(|t| t.label.as_str()).collect();
    assert_eq!(labels, ["Cake", "Tea"]);
    let newest: Vec<_> = ledger.newest_first().map(|t| t.label.as_str()).collect();
    assert_eq!(newest, ["Tea", "Cake"]);
}

#[test]
fn test_parses_browser_written_log() {
    let raw = r#"[{"label":"Cake","amount":4.5,"timestamp":"2025-01-10T12:00:00.000Z"},
                  {"label":"Pizza","amount":12,"timestamp":"2025-01-11T19:30:00.000Z"}]"#;

    let ledger = TreatLedger::parse(raw).unwrap();

    assert_eq!(ledger.len(), 2);
    assert_close(ledger.total_spent(), 16.5);
    assert_eq!(ledger.entries()[0], treat("Cake", 4.5, 0));
}

#[test]
fn test_persist_then_load() {
    let mut store = MemoryStore::new();
    let ledger = TreatLedger::new()
        .append(treat("Cake", 4.5, 0))
        .append(treat("Tea", 2.0, 1));

    ledger.persist(&mut store).unwrap();
    let loaded = TreatLedger::load(&mut store).unwrap();

    assert_eq!(loaded, ledger);
}

#[test]
fn test_missing_key_loads_empty_without_logging() {
    let mut store = MemoryStore::new();
    let ledger = TreatLedger::load(&mut store).unwrap();

    assert!(ledger.is_empty());
    assert!(store.log_entries().is_empty());
}

#[test]
fn test_corrupt_log_degrades_to_empty_and_is_logged() {
    let mut store = MemoryStore::new().with(TREAT_LOG_KEY, "{not json");

    assert!(TreatLedger::parse("{not json").is_err());
    let ledger = TreatLedger::load(&mut store).unwrap();

    assert!(ledger.is_empty());
    let entries = store.log_entries();
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].operation, "corruption");
    assert_eq!(entries[0].target, TREAT_LOG_KEY);
}

#[test]
fn test_clear_removes_the_key() {
    let mut store = MemoryStore::new();
    TreatLedger::new().persist(&mut store).unwrap();
    assert_eq!(store.get(TREAT_LOG_KEY).unwrap().as_deref(), Some("[]"));
    assert!(TreatLedger::exists(&store).unwrap());

    TreatLedger::clear(&mut store).unwrap();

    assert!(!TreatLedger::exists(&store).unwrap());
    assert_eq!(store.get(TREAT_LOG_KEY).unwrap(), None);
}
