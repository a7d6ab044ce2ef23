//! Employee service - business rules on top of the repository

use std::sync::Arc;

use chrono::Utc;
use tracing::{debug, info};

use crate::domain::employee::{
    employee_not_found, validate_employee, Employee, EmployeeId, EmployeeRepository,
};
use crate::domain::error::DomainError;

/// Business-rule layer between the request handlers and the store
///
/// The repository is chosen once at startup, so the service holds it behind
/// dynamic dispatch.
#[derive(Debug, Clone)]
pub struct EmployeeService {
    repository: Arc<dyn EmployeeRepository>,
}

impl EmployeeService {
    /// Create a new employee service
    pub fn new(repository: Arc<dyn EmployeeRepository>) -> Self {
        Self { repository }
    }

    /// All employees, id-ascending
    pub async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        debug!("Employees list request from repository");
        self.repository.find_all().await
    }

    /// One employee by id
    pub async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, DomainError> {
        debug!(%id, "Get employee from repository");
        self.repository.find_by_id(id).await
    }

    /// Employees whose names contain the given fragments
    pub async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, DomainError> {
        debug!(first_name, last_name, "Search employees by name");
        self.repository.find_by_name(first_name, last_name).await
    }

    /// Validate a candidate; surfaces only the first violation
    pub fn validate(&self, employee: &Employee) -> Result<(), DomainError> {
        validate_employee(employee, Utc::now().date_naive()).map_err(|violations| {
            let first = violations
                .first()
                .map(ToString::to_string)
                .unwrap_or_default();
            DomainError::validation(first)
        })
    }

    /// Validate and persist a new employee; the store assigns the id
    pub async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        self.validate(&employee)?;

        info!("Saving new employee");
        self.repository.create(employee).await
    }

    /// Validate and overwrite an existing employee
    ///
    /// The existence pre-check keeps an unknown id distinguishable from a
    /// validation failure. It is not atomic with the write: a concurrent
    /// delete in between yields a NotFound from the store's own conditional
    /// write, never a silent no-op.
    pub async fn update(&self, employee: Employee) -> Result<Employee, DomainError> {
        self.validate(&employee)?;

        let id = employee
            .employee_id
            .ok_or_else(|| DomainError::internal("Employee id is required for update"))?;

        if !self.repository.exists_by_id(id).await? {
            debug!(%id, "employee not found for update");
            return Err(employee_not_found(id));
        }

        info!(%id, "Updating employee");
        self.repository.update(&employee).await
    }

    /// Delete an employee by id
    pub async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        if !self.repository.exists_by_id(id).await? {
            debug!(%id, "employee not found for delete");
            return Err(employee_not_found(id));
        }

        info!(%id, "Deleting employee");
        self.repository.delete(id).await
    }

    /// Total number of employees
    pub async fn count(&self) -> Result<u64, DomainError> {
        debug!("Get employees count");
        self.repository.count().await
    }
}
