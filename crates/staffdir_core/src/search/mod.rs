//! Filter engine entry points.
//!
//! # Responsibility
//! - Expose pure query evaluation over employee snapshots.
//! - Keep result shaping free of store mutation and I/O.

pub mod filter;
