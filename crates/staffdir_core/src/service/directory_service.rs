//! Directory use-case façade.
//!
//! # Responsibility
//! - Provide the single entry surface a presentation layer consumes.
//! - Compose store snapshots with the filter engine.
//!
//! # Invariants
//! - Query APIs never mutate the store.
//! - Mutation APIs never bypass store validation/persistence contracts.

use crate::model::employee::{Employee, EmployeeDraft, EmployeeId};
use crate::search::filter::{filter_by_facets, search_by_text, FacetQuery};
use crate::storage::Storage;
use crate::store::employee_store::{EmployeeStore, StoreResult};

/// Use-case façade over one employee store.
pub struct DirectoryService<S: Storage> {
    store: EmployeeStore<S>,
}

impl<S: Storage> DirectoryService<S> {
    /// Opens a service over `storage`, loading the persisted snapshot.
    pub fn open(storage: S) -> StoreResult<Self> {
        Ok(Self {
            store: EmployeeStore::open(storage)?,
        })
    }

    /// Wraps an already opened store.
    pub fn new(store: EmployeeStore<S>) -> Self {
        Self { store }
    }

    /// Full directory in insertion order.
    pub fn list(&self) -> &[Employee] {
        self.store.list()
    }

    /// Free-text search over the current snapshot.
    pub fn search(&self, query: &str) -> Vec<Employee> {
        search_by_text(self.store.list(), query)
    }

    /// Faceted filtering over the current snapshot.
    pub fn filter(&self, facets: &FacetQuery) -> Vec<Employee> {
        filter_by_facets(self.store.list(), facets)
    }

    /// Creates a record and returns it with its assigned id.
    pub fn create(&mut self, draft: &EmployeeDraft) -> StoreResult<Employee> {
        self.store.create(draft)
    }

    /// Updates the record with `id`, returning the new state.
    pub fn update(&mut self, id: EmployeeId, draft: &EmployeeDraft) -> StoreResult<Employee> {
        self.store.update(id, draft)
    }

    /// Deletes the record with `id`; missing ids are a no-op.
    pub fn delete(&mut self, id: EmployeeId) -> StoreResult<()> {
        self.store.delete(id)
    }
}
