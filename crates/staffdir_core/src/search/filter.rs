//! Text search and faceted filtering over employee snapshots.
//!
//! # Responsibility
//! - Evaluate query predicates over a borrowed record slice.
//! - Return new, order-preserving sequences without touching the input.
//!
//! # Invariants
//! - Matching is case-insensitive on both sides.
//! - An empty query or facet matches every record.
//! - Same inputs always produce the same output sequence.

use crate::model::employee::Employee;

/// Facet predicate set for sidebar-style filtering.
///
/// Every facet is optional; an empty string is a wildcard. Facets combine
/// with AND. `Default` yields the match-all query.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetQuery {
    /// Matched by containment within the first space-delimited token of
    /// the record name. Containment, not an anchored prefix: `"an"`
    /// matches both "Anna" and "Juan".
    pub first_name: String,
    /// Matched by containment against the department wire string.
    pub department: String,
    /// Matched by containment against the role wire string.
    pub role: String,
}

/// Returns records whose name or email contains `query`, case-insensitively.
///
/// An empty query matches everything. Relative order is preserved.
pub fn search_by_text(records: &[Employee], query: &str) -> Vec<Employee> {
    let needle = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record.email.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Returns records matching every facet in `facets`, preserving order.
pub fn filter_by_facets(records: &[Employee], facets: &FacetQuery) -> Vec<Employee> {
    let first_name = facets.first_name.to_lowercase();
    let department = facets.department.to_lowercase();
    let role = facets.role.to_lowercase();

    records
        .iter()
        .filter(|record| {
            first_name_token(&record.name).contains(&first_name)
                && record
                    .department
                    .as_str()
                    .to_lowercase()
                    .contains(&department)
                && record.role.as_str().to_lowercase().contains(&role)
        })
        .cloned()
        .collect()
}

/// First space-delimited token of `name`, lowercased.
fn first_name_token(name: &str) -> String {
    name.to_lowercase()
        .split(' ')
        .next()
        .unwrap_or_default()
        .to_string()
}
