//! Employee domain model.
//!
//! # Responsibility
//! - Define the canonical record owned by the store.
//! - Encode the department/role closed sets as types.
//! - Validate draft input before any mutation is attempted.
//!
//! # Invariants
//! - `id` is positive and never reused for a different person while stored.
//! - Department/role values outside the closed sets are unrepresentable.
//! - Draft values arrive pre-trimmed; the model performs no normalization.

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Stable identifier for an employee record.
///
/// Kept as a type alias to make semantic intent explicit in signatures.
pub type EmployeeId = u64;

/// Closed set of departments offered by the directory.
///
/// The serialized form is the legacy wire string, not the variant name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Department {
    #[serde(rename = "HR")]
    Hr,
    #[serde(rename = "IT")]
    It,
    Finance,
    Marketing,
}

/// Closed set of roles offered by the directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    Manager,
    Developer,
    Analyst,
    Designer,
}

impl Department {
    /// Wire string for this department.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Hr => "HR",
            Self::It => "IT",
            Self::Finance => "Finance",
            Self::Marketing => "Marketing",
        }
    }

    /// Parses the exact wire string back into a department.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "HR" => Some(Self::Hr),
            "IT" => Some(Self::It),
            "Finance" => Some(Self::Finance),
            "Marketing" => Some(Self::Marketing),
            _ => None,
        }
    }
}

impl Role {
    /// Wire string for this role.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Manager => "Manager",
            Self::Developer => "Developer",
            Self::Analyst => "Analyst",
            Self::Designer => "Designer",
        }
    }

    /// Parses the exact wire string back into a role.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "Manager" => Some(Self::Manager),
            "Developer" => Some(Self::Developer),
            "Analyst" => Some(Self::Analyst),
            "Designer" => Some(Self::Designer),
            _ => None,
        }
    }
}

impl Display for Department {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Display for Role {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Canonical employee record.
///
/// Field order matches the persisted object layout.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    /// Store-assigned, unique, immutable after creation.
    pub id: EmployeeId,
    /// Conventionally "First Last"; matched by both filter paths.
    pub name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

impl Employee {
    /// Builds a record from draft fields under a store-assigned id.
    ///
    /// The store validates the draft before calling this.
    pub fn from_draft(id: EmployeeId, draft: &EmployeeDraft) -> Self {
        Self {
            id,
            name: draft.name.clone(),
            email: draft.email.clone(),
            department: draft.department,
            role: draft.role,
        }
    }

    /// Replaces every mutable field from `draft`. Identity is untouched.
    pub fn apply_draft(&mut self, draft: &EmployeeDraft) {
        self.name = draft.name.clone();
        self.email = draft.email.clone();
        self.department = draft.department;
        self.role = draft.role;
    }
}

/// Create/update payload: every record field except the identity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmployeeDraft {
    pub name: String,
    pub email: String,
    pub department: Department,
    pub role: Role,
}

impl EmployeeDraft {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        department: Department,
        role: Role,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            department,
            role,
        }
    }

    /// Checks required-field presence.
    ///
    /// Values are expected pre-trimmed by the caller; emptiness is the only
    /// condition checked here. Department and role presence is enforced by
    /// their types.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.name.is_empty() {
            return Err(ValidationError::EmptyField("name"));
        }
        if self.email.is_empty() {
            return Err(ValidationError::EmptyField("email"));
        }
        Ok(())
    }
}

/// Rejection of a draft with a missing required field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Carries the name of the first empty required field.
    EmptyField(&'static str),
}

impl Display for ValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyField(field) => write!(f, "required field `{field}` is empty"),
        }
    }
}

impl Error for ValidationError {}
