//! SQLite-backed key-value storage.
//!
//! # Responsibility
//! - Open file or in-memory databases for the directory core.
//! - Configure connection pragmas and apply schema bootstrap migrations.
//! - Serve `get`/`set` over the single `kv` table.
//!
//! # Invariants
//! - Returned storages have migrations fully applied.
//! - `set` is one UPSERT statement, atomic per SQLite semantics.

use super::migrations::apply_migrations;
use super::{Storage, StorageResult};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::{Duration, Instant};

/// Key-value storage over a bootstrapped SQLite connection.
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Opens a database file and applies all pending migrations.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=file");

        let conn = match Connection::open(path) {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=file duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, started_at, "file")
    }

    /// Opens an in-memory database and applies all pending migrations.
    ///
    /// # Side effects
    /// - Emits `storage_open` logging events with duration and status.
    pub fn open_in_memory() -> StorageResult<Self> {
        let started_at = Instant::now();
        info!("event=storage_open module=storage status=start mode=memory");

        let conn = match Connection::open_in_memory() {
            Ok(conn) => conn,
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode=memory duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                return Err(err.into());
            }
        };

        Self::bootstrap(conn, started_at, "memory")
    }

    fn bootstrap(mut conn: Connection, started_at: Instant, mode: &str) -> StorageResult<Self> {
        match configure(&mut conn) {
            Ok(()) => {
                info!(
                    "event=storage_open module=storage status=ok mode={mode} duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                Ok(Self { conn })
            }
            Err(err) => {
                error!(
                    "event=storage_open module=storage status=error mode={mode} duration_ms={} error={}",
                    started_at.elapsed().as_millis(),
                    err
                );
                Err(err)
            }
        }
    }
}

impl Storage for SqliteStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let value = self
            .conn
            .query_row("SELECT value FROM kv WHERE key = ?1;", [key], |row| {
                row.get(0)
            })
            .optional()?;
        Ok(value)
    }

    fn set(&mut self, key: &str, value: &str) -> StorageResult<()> {
        self.conn.execute(
            "INSERT INTO kv (key, value) VALUES (?1, ?2)
             ON CONFLICT(key) DO UPDATE SET value = excluded.value;",
            params![key, value],
        )?;
        Ok(())
    }
}

fn configure(conn: &mut Connection) -> StorageResult<()> {
    conn.busy_timeout(Duration::from_secs(5))?;
    apply_migrations(conn)?;
    Ok(())
}
