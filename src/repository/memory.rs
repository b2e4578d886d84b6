//! In-memory employee repository.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::error::{EngineError, EngineResult};
use crate::models::Employee;

use super::EmployeeRepository;

/// An [`EmployeeRepository`] backed by an in-process map.
///
/// Records live only as long as the process; there is no durable
/// storage behind this type.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    records: RwLock<HashMap<String, Employee>>,
}

impl InMemoryEmployeeRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Employee>> {
        // A poisoned lock only means another thread panicked mid-access;
        // the map itself is still usable.
        self.records.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Employee>> {
        self.records.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl EmployeeRepository for InMemoryEmployeeRepository {
    fn save(&self, employee: Employee) -> EngineResult<()> {
        let mut records = self.write();
        if records.contains_key(&employee.code) {
            return Err(EngineError::DuplicateEmployee {
                code: employee.code,
            });
        }
        records.insert(employee.code.clone(), employee);
        Ok(())
    }

    fn find(&self, code: &str) -> EngineResult<Employee> {
        self.read()
            .get(code)
            .cloned()
            .ok_or_else(|| EngineError::EmployeeNotFound {
                code: code.to_string(),
            })
    }

    fn update(&self, employee: Employee) -> EngineResult<()> {
        let mut records = self.write();
        if !records.contains_key(&employee.code) {
            return Err(EngineError::EmployeeNotFound {
                code: employee.code,
            });
        }
        records.insert(employee.code.clone(), employee);
        Ok(())
    }

    fn delete(&self, code: &str) -> EngineResult<()> {
        let mut records = self.write();
        match records.remove(code) {
            Some(_) => Ok(()),
            None => Err(EngineError::EmployeeNotFound {
                code: code.to_string(),
            }),
        }
    }

    fn list(&self) -> EngineResult<Vec<Employee>> {
        let mut employees: Vec<Employee> = self.read().values().cloned().collect();
        employees.sort_by(|a, b| a.code.cmp(&b.code));
        Ok(employees)
    }
}
