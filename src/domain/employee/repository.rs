//! Employee repository trait
//!
//! The contract every storage backend must satisfy. Backends are
//! interchangeable: the test suite published from this module runs verbatim
//! against each implementation.

use std::fmt::Debug;

use async_trait::async_trait;

use super::entity::{Employee, EmployeeId};
use crate::domain::error::DomainError;

/// Repository for employee records
#[async_trait]
pub trait EmployeeRepository: Send + Sync + Debug {
    /// All employees, ordered by id ascending; empty result is not an error
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError>;

    /// Get one employee; `NotFound` when no row has the id
    async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, DomainError>;

    /// Employees whose first and last names contain the given fragments
    /// (case-sensitive); `NotFound` when nothing matches
    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, DomainError>;

    /// Persist a new employee; the store assigns the id, any caller-supplied
    /// id is ignored
    async fn create(&self, employee: Employee) -> Result<Employee, DomainError>;

    /// Overwrite all non-id fields of an existing employee; `NotFound` when
    /// the id does not exist
    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError>;

    /// Remove an employee; `NotFound` when the id does not exist
    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError>;

    /// Existence probe with no side effects
    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, DomainError>;

    /// Total number of employees
    async fn count(&self) -> Result<u64, DomainError>;
}

/// The canonical not-found error for a missing employee id
pub fn employee_not_found(id: EmployeeId) -> DomainError {
    DomainError::not_found(format!("Employee id: {} was not found in database", id))
}

/// The not-found error for an empty name search
pub fn employees_not_found_by_name(first_name: &str, last_name: &str) -> DomainError {
    DomainError::not_found(format!(
        "Employees matching firstName '{}' and lastName '{}' were not found in database",
        first_name, last_name
    ))
}
