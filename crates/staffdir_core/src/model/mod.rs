//! Domain model for the employee directory.
//!
//! # Responsibility
//! - Define canonical data structures used by core business logic.
//! - Keep the closed department/role sets unrepresentable-if-invalid.
//!
//! # Invariants
//! - Every record is identified by a stable positive `EmployeeId`.
//! - Identity never changes; all other fields are mutable via update.

pub mod employee;
