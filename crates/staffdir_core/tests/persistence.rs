use staffdir_core::{
    Department, EmployeeDraft, EmployeeStore, Role, SqliteStorage, Storage, StorageResult,
    STORAGE_KEY,
};
use tempfile::TempDir;

fn draft(name: &str, email: &str, department: Department, role: Role) -> EmployeeDraft {
    EmployeeDraft::new(name, email, department, role)
}

#[test]
fn snapshot_round_trip_reproduces_equal_collection() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("directory.db");

    let mut store = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();
    store
        .create(&draft("Juan Park", "juan@corp.test", Department::It, Role::Developer))
        .unwrap();
    let written = store.list().to_vec();
    drop(store);

    let reopened = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    assert_eq!(reopened.list(), written.as_slice());
}

#[test]
fn legacy_snapshot_shape_is_accepted_verbatim() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage
        .set(
            STORAGE_KEY,
            r#"[{"id":1,"name":"Ann Lee","email":"ann@corp.test","department":"HR","role":"Manager"}]"#,
        )
        .unwrap();

    let store = EmployeeStore::open(storage).unwrap();

    assert_eq!(store.list().len(), 1);
    let record = &store.list()[0];
    assert_eq!(record.id, 1);
    assert_eq!(record.name, "Ann Lee");
    assert_eq!(record.email, "ann@corp.test");
    assert_eq!(record.department, Department::Hr);
    assert_eq!(record.role, Role::Manager);
}

#[test]
fn persisted_snapshot_uses_legacy_shape() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("directory.db");

    let mut store = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();

    let reader = SqliteStorage::open(&path).unwrap();
    let raw = reader.get(STORAGE_KEY).unwrap().unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();

    assert_eq!(
        value,
        serde_json::json!([{
            "id": 1,
            "name": "Ann Lee",
            "email": "ann@corp.test",
            "department": "HR",
            "role": "Manager"
        }])
    );
}

#[test]
fn absent_snapshot_loads_as_empty() {
    let store = EmployeeStore::open(SqliteStorage::open_in_memory().unwrap()).unwrap();

    assert!(store.list().is_empty());
}

#[test]
fn corrupt_snapshot_loads_as_empty_and_recovers_on_next_write() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage.set(STORAGE_KEY, "not valid json").unwrap();

    let mut store = EmployeeStore::open(storage).unwrap();
    assert!(store.list().is_empty());

    let created = store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();
    assert_eq!(created.id, 1);
}

#[test]
fn snapshot_with_unknown_department_loads_as_empty() {
    let mut storage = SqliteStorage::open_in_memory().unwrap();
    storage
        .set(
            STORAGE_KEY,
            r#"[{"id":1,"name":"Ann Lee","email":"ann@corp.test","department":"Sales","role":"Manager"}]"#,
        )
        .unwrap();

    let store = EmployeeStore::open(storage).unwrap();

    assert!(store.list().is_empty());
}

#[test]
fn id_assignment_consults_freshest_persisted_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("directory.db");

    let mut store = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();

    // Another writer appends directly to the shared storage with a higher id.
    let mut external = SqliteStorage::open(&path).unwrap();
    external
        .set(
            STORAGE_KEY,
            r#"[{"id":1,"name":"Ann Lee","email":"ann@corp.test","department":"HR","role":"Manager"},
                {"id":7,"name":"Juan Park","email":"juan@corp.test","department":"IT","role":"Developer"}]"#,
        )
        .unwrap();

    let created = store
        .create(&draft("Maya Ruiz", "maya@corp.test", Department::Marketing, Role::Designer))
        .unwrap();

    assert_eq!(created.id, 8);
}

#[test]
fn persist_rewrites_the_current_in_memory_snapshot() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("directory.db");

    let mut store = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    let created = store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();

    let mut external = SqliteStorage::open(&path).unwrap();
    external.set(STORAGE_KEY, "[]").unwrap();

    store.persist().unwrap();

    let reopened = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    assert_eq!(reopened.list().len(), 1);
    assert_eq!(reopened.list()[0].id, created.id);
}

#[test]
fn load_refreshes_from_external_changes() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("directory.db");

    let mut store = EmployeeStore::open(SqliteStorage::open(&path).unwrap()).unwrap();
    store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();

    let mut external = SqliteStorage::open(&path).unwrap();
    external
        .set(
            STORAGE_KEY,
            r#"[{"id":7,"name":"Juan Park","email":"juan@corp.test","department":"IT","role":"Developer"}]"#,
        )
        .unwrap();

    store.load().unwrap();

    assert_eq!(store.list().len(), 1);
    assert_eq!(store.list()[0].id, 7);
}

/// Backend that accepts writes but always reads back empty.
struct AmnesicStorage;

impl Storage for AmnesicStorage {
    fn get(&self, _key: &str) -> StorageResult<Option<String>> {
        Ok(None)
    }

    fn set(&mut self, _key: &str, _value: &str) -> StorageResult<()> {
        Ok(())
    }
}

#[test]
fn in_memory_ids_keep_the_sequence_monotonic_on_stale_reads() {
    let mut store = EmployeeStore::open(AmnesicStorage).unwrap();

    let first = store
        .create(&draft("Ann Lee", "ann@corp.test", Department::Hr, Role::Manager))
        .unwrap();
    let second = store
        .create(&draft("Juan Park", "juan@corp.test", Department::It, Role::Developer))
        .unwrap();

    assert_eq!((first.id, second.id), (1, 2));
}
