//! Application state for the gross-up engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::repository::{EmployeeRepository, InMemoryEmployeeRepository};

/// Shared application state.
///
/// Holds the employee repository behind an `Arc` so every handler sees
/// the same store. The calculation endpoints never touch it.
#[derive(Clone)]
pub struct AppState {
    employees: Arc<dyn EmployeeRepository + Send + Sync>,
}

impl AppState {
    /// Creates a new application state over the given repository.
    pub fn new(repository: impl EmployeeRepository + Send + Sync + 'static) -> Self {
        Self {
            employees: Arc::new(repository),
        }
    }

    /// Returns a reference to the employee repository.
    pub fn employees(&self) -> &(dyn EmployeeRepository + Send + Sync) {
        self.employees.as_ref()
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(InMemoryEmployeeRepository::new())
    }
}
