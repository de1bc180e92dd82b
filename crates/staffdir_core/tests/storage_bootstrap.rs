use rusqlite::Connection;
use staffdir_core::storage::migrations::latest_version;
use staffdir_core::{SqliteStorage, Storage, StorageError};
use tempfile::TempDir;

#[test]
fn fresh_storage_has_no_value_under_a_key() {
    let storage = SqliteStorage::open_in_memory().unwrap();

    assert_eq!(storage.get("employees").unwrap(), None);
}

#[test]
fn set_then_get_round_trips() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();

    storage.set("employees", "[]").unwrap();

    assert_eq!(storage.get("employees").unwrap().as_deref(), Some("[]"));
}

#[test]
fn set_replaces_the_previous_value() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();

    storage.set("employees", "[]").unwrap();
    storage.set("employees", r#"[{"id":1}]"#).unwrap();

    assert_eq!(
        storage.get("employees").unwrap().as_deref(),
        Some(r#"[{"id":1}]"#)
    );
}

#[test]
fn keys_are_independent() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();

    storage.set("employees", "[]").unwrap();

    assert_eq!(storage.get("settings").unwrap(), None);
}

#[test]
fn file_storage_preserves_values_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kv.db");

    {
        let mut storage = SqliteStorage::open(&path).unwrap();
        storage.set("employees", "[]").unwrap();
    }

    let storage = SqliteStorage::open(&path).unwrap();
    assert_eq!(storage.get("employees").unwrap().as_deref(), Some("[]"));
}

#[test]
fn bootstrap_stamps_latest_schema_version() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kv.db");
    drop(SqliteStorage::open(&path).unwrap());

    let conn = Connection::open(&path).unwrap();
    let version: u32 = conn
        .query_row("PRAGMA user_version;", [], |row| row.get(0))
        .unwrap();

    assert_eq!(version, latest_version());
    assert!(version > 0);
}

#[test]
fn future_schema_version_is_rejected() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("kv.db");
    let conn = Connection::open(&path).unwrap();
    conn.execute_batch("PRAGMA user_version = 99;").unwrap();
    drop(conn);

    match SqliteStorage::open(&path) {
        Err(StorageError::UnsupportedSchemaVersion {
            db_version,
            latest_supported,
        }) => {
            assert_eq!(db_version, 99);
            assert_eq!(latest_supported, latest_version());
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("expected unsupported schema version error"),
    }
}
