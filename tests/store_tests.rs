use rsavetracker::db::initialize::init_db;
use rsavetracker::db::log::load_log;
use rsavetracker::store::{KeyValueStore, MemoryStore, OperationLog, SqliteStore, TRACKER_LABEL_KEY};

#[test]
fn test_sqlite_get_set_remove() {
    let mut store = SqliteStore::in_memory().unwrap();

    assert_eq!(store.get(TRACKER_LABEL_KEY).unwrap(), None);

    store.set(TRACKER_LABEL_KEY, "Coffee").unwrap();
    assert_eq!(store.get(TRACKER_LABEL_KEY).unwrap().as_deref(), Some("Coffee"));

    store.set(TRACKER_LABEL_KEY, "Cigarettes").unwrap();
    assert_eq!(
        store.get(TRACKER_LABEL_KEY).unwrap().as_deref(),
        Some("Cigarettes")
    );

    store.remove(TRACKER_LABEL_KEY).unwrap();
    assert!(!store.contains(TRACKER_LABEL_KEY).unwrap());

    // removing a missing key is not an error
    store.remove(TRACKER_LABEL_KEY).unwrap();
}

#[test]
fn test_sqlite_operation_log_rows() {
    let mut store = SqliteStore::in_memory().unwrap();
    store.log_operation("start", "Coffee", "Tracker started");

    let rows = load_log(&store.pool().conn).unwrap();
    let last = rows.last().unwrap();
    assert_eq!(last.operation, "start");
    assert_eq!(last.target, "Coffee");
    assert_eq!(last.message, "Tracker started");
}

#[test]
fn test_migrations_are_idempotent() {
    let store = SqliteStore::in_memory().unwrap();
    let conn = &store.pool().conn;

    init_db(conn).unwrap();
    init_db(conn).unwrap();

    let applied = load_log(conn)
        .unwrap()
        .into_iter()
        .filter(|r| r.operation == "migration_applied")
        .count();
    assert_eq!(applied, 1);
}

#[test]
fn test_memory_store_starts_empty() {
    let mut store = MemoryStore::new();
    assert!(store.is_empty());
    store.set("k", "v").unwrap();
    assert_eq!(store.len(), 1);
    store.remove("k").unwrap();
    assert!(store.is_empty());
}
