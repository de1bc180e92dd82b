//! Record store layer.
//!
//! # Responsibility
//! - Own the authoritative employee collection.
//! - Keep the in-memory and persisted snapshots reconciled.
//!
//! # Invariants
//! - Every successful mutation has been persisted before it returns.
//! - A failed mutation leaves the in-memory collection unchanged.

pub mod employee_store;
