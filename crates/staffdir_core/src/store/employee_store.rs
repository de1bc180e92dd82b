//! Employee record store over key-value snapshot persistence.
//!
//! # Responsibility
//! - Own the canonical in-memory employee collection.
//! - Mirror every mutation to storage before committing it in memory.
//! - Assign unique positive ids via refresh-then-max.
//!
//! # Invariants
//! - A mutation that returns `Ok` has been persisted in full.
//! - A mutation that returns `Err` left the in-memory collection unchanged.
//! - Absent or unparseable snapshots load as the empty collection.

use crate::model::employee::{Employee, EmployeeDraft, EmployeeId, ValidationError};
use crate::storage::{Storage, StorageError};
use log::warn;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Storage key holding the serialized employee collection.
pub const STORAGE_KEY: &str = "employees";

pub type StoreResult<T> = Result<T, StoreError>;

/// Store-level error for mutation and load operations.
#[derive(Debug)]
pub enum StoreError {
    Validation(ValidationError),
    Storage(StorageError),
    NotFound(EmployeeId),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
            Self::NotFound(id) => write!(f, "employee not found: {id}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound(_) => None,
        }
    }
}

impl From<ValidationError> for StoreError {
    fn from(value: ValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StorageError> for StoreError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

/// Authoritative employee collection mirrored to a storage backend.
///
/// Mutations are staged on a copy of the collection; the copy is persisted
/// first and replaces the in-memory state only when the write succeeds, so
/// the two representations cannot diverge.
pub struct EmployeeStore<S: Storage> {
    storage: S,
    records: Vec<Employee>,
}

impl<S: Storage> EmployeeStore<S> {
    /// Opens a store over `storage` and loads the persisted snapshot.
    pub fn open(storage: S) -> StoreResult<Self> {
        let mut store = Self {
            storage,
            records: Vec::new(),
        };
        store.load()?;
        Ok(store)
    }

    /// Reloads the in-memory collection from storage.
    ///
    /// An absent key or unparseable snapshot degrades to the empty
    /// collection; only a failing backend read is propagated.
    pub fn load(&mut self) -> StoreResult<()> {
        let raw = self.storage.get(STORAGE_KEY)?;
        self.records = decode_snapshot(raw.as_deref());
        Ok(())
    }

    /// Read-only view of the full collection in insertion order.
    pub fn list(&self) -> &[Employee] {
        &self.records
    }

    /// Appends a new record built from `draft` and persists the collection.
    ///
    /// Returns the created record with its assigned id.
    pub fn create(&mut self, draft: &EmployeeDraft) -> StoreResult<Employee> {
        draft.validate()?;

        let record = Employee::from_draft(self.next_id()?, draft);

        let mut staged = self.records.clone();
        staged.push(record.clone());
        self.commit(staged)?;
        Ok(record)
    }

    /// Replaces every mutable field of the record with `id` from `draft`.
    ///
    /// The record keeps its id and its position in the collection.
    pub fn update(&mut self, id: EmployeeId, draft: &EmployeeDraft) -> StoreResult<Employee> {
        draft.validate()?;

        let position = self
            .records
            .iter()
            .position(|record| record.id == id)
            .ok_or(StoreError::NotFound(id))?;

        let mut staged = self.records.clone();
        staged[position].apply_draft(draft);
        let updated = staged[position].clone();
        self.commit(staged)?;
        Ok(updated)
    }

    /// Removes the record with `id`, if present, and persists the collection.
    ///
    /// A missing id is a no-op: no error, no write.
    pub fn delete(&mut self, id: EmployeeId) -> StoreResult<()> {
        if !self.records.iter().any(|record| record.id == id) {
            return Ok(());
        }

        let mut staged = self.records.clone();
        staged.retain(|record| record.id != id);
        self.commit(staged)
    }

    /// Writes the current in-memory collection to storage as one snapshot.
    pub fn persist(&mut self) -> StoreResult<()> {
        let encoded = encode_snapshot(&self.records)?;
        self.storage.set(STORAGE_KEY, &encoded)?;
        Ok(())
    }

    /// Persists `staged` and replaces the in-memory collection on success.
    fn commit(&mut self, staged: Vec<Employee>) -> StoreResult<()> {
        let encoded = encode_snapshot(&staged)?;
        self.storage.set(STORAGE_KEY, &encoded)?;
        self.records = staged;
        Ok(())
    }

    /// Computes the next id from the freshest persisted snapshot.
    ///
    /// Storage is re-read immediately before assignment so that ids stay
    /// unique when another writer shares the same backing storage. The
    /// in-memory ids are folded in as well, so the sequence cannot move
    /// backwards on a stale read.
    fn next_id(&self) -> StoreResult<EmployeeId> {
        let raw = self.storage.get(STORAGE_KEY)?;
        let persisted = decode_snapshot(raw.as_deref());

        let max_id = persisted
            .iter()
            .chain(self.records.iter())
            .map(|record| record.id)
            .max()
            .unwrap_or(0);
        Ok(max_id + 1)
    }
}

fn encode_snapshot(records: &[Employee]) -> StoreResult<String> {
    let encoded = serde_json::to_string(records).map_err(StorageError::from)?;
    Ok(encoded)
}

/// Decodes a snapshot, treating absent or invalid text as empty.
fn decode_snapshot(raw: Option<&str>) -> Vec<Employee> {
    let Some(text) = raw else {
        return Vec::new();
    };

    match serde_json::from_str(text) {
        Ok(records) => records,
        Err(err) => {
            warn!("event=snapshot_decode module=store status=degraded error={err}");
            Vec::new()
        }
    }
}
