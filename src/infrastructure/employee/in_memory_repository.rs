//! In-memory employee repository implementation

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::employee::{
    employee_not_found, employees_not_found_by_name, Employee, EmployeeId, EmployeeRepository,
};
use crate::domain::error::DomainError;

/// In-memory implementation of `EmployeeRepository`
///
/// Rows live in an ordered map keyed by id, so `find_all` is id-ascending
/// by construction. Ids come from a monotonic sequence and are never reused,
/// matching the behavior of a database serial column.
#[derive(Debug, Default)]
pub struct InMemoryEmployeeRepository {
    inner: RwLock<Inner>,
}

#[derive(Debug, Default)]
struct Inner {
    rows: BTreeMap<i32, Employee>,
    next_id: i32,
}

impl InMemoryEmployeeRepository {
    /// Create a new empty repository
    pub fn new() -> Self {
        Self::default()
    }
}

fn contains_fragment(value: Option<&str>, fragment: &str) -> bool {
    value.is_some_and(|v| v.contains(fragment))
}

#[async_trait]
impl EmployeeRepository for InMemoryEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, DomainError> {
        let inner = self.inner.read().await;
        inner
            .rows
            .get(&id.value())
            .cloned()
            .ok_or_else(|| employee_not_found(id))
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, DomainError> {
        let inner = self.inner.read().await;
        let matches: Vec<Employee> = inner
            .rows
            .values()
            .filter(|e| {
                contains_fragment(e.first_name.as_deref(), first_name)
                    && contains_fragment(e.last_name.as_deref(), last_name)
            })
            .cloned()
            .collect();

        if matches.is_empty() {
            return Err(employees_not_found_by_name(first_name, last_name));
        }

        Ok(matches)
    }

    async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        let mut inner = self.inner.write().await;
        inner.next_id += 1;
        let id = EmployeeId::new(inner.next_id);

        let persisted = Employee {
            employee_id: Some(id),
            ..employee
        };
        inner.rows.insert(id.value(), persisted.clone());

        Ok(persisted)
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let id = employee
            .employee_id
            .ok_or_else(|| DomainError::internal("Employee id is required for update"))?;

        let mut inner = self.inner.write().await;

        if !inner.rows.contains_key(&id.value()) {
            return Err(employee_not_found(id));
        }

        inner.rows.insert(id.value(), employee.clone());
        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        let mut inner = self.inner.write().await;

        if inner.rows.remove(&id.value()).is_none() {
            return Err(employee_not_found(id));
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.contains_key(&id.value()))
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let inner = self.inner.read().await;
        Ok(inner.rows.len() as u64)
    }
}
