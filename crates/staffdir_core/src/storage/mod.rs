//! Durable key-value storage boundary.
//!
//! # Responsibility
//! - Define the string key-value contract the store persists through.
//! - Expose the SQLite-backed implementation and its bootstrap entry points.
//!
//! # Invariants
//! - `set` replaces the whole value under a key in a single write.
//! - Backends are fully bootstrapped before they are handed out.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod migrations;
mod sqlite;

pub use sqlite::SqliteStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Failure raised by a storage backend or while preparing a write.
#[derive(Debug)]
pub enum StorageError {
    Sqlite(rusqlite::Error),
    /// Snapshot text could not be encoded before the write was issued.
    Codec(serde_json::Error),
    UnsupportedSchemaVersion {
        db_version: u32,
        latest_supported: u32,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Sqlite(err) => write!(f, "{err}"),
            Self::Codec(err) => write!(f, "snapshot encoding failed: {err}"),
            Self::UnsupportedSchemaVersion {
                db_version,
                latest_supported,
            } => write!(
                f,
                "storage schema version {db_version} is newer than supported {latest_supported}"
            ),
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Sqlite(err) => Some(err),
            Self::Codec(err) => Some(err),
            Self::UnsupportedSchemaVersion { .. } => None,
        }
    }
}

impl From<rusqlite::Error> for StorageError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Sqlite(value)
    }
}

impl From<serde_json::Error> for StorageError {
    fn from(value: serde_json::Error) -> Self {
        Self::Codec(value)
    }
}

/// String key-value storage contract, modeled on browser local storage.
///
/// The record store is generic over this trait so tests can substitute a
/// failing backend for the persistence error paths.
pub trait Storage {
    /// Returns the value stored under `key`, if any.
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// The write must be atomic: a failed `set` leaves the old value intact.
    fn set(&mut self, key: &str, value: &str) -> StorageResult<()>;
}
