//! PostgreSQL employee repository implementation

use async_trait::async_trait;
use sqlx::{PgPool, Row};

use crate::domain::employee::{
    employee_not_found, employees_not_found_by_name, Employee, EmployeeId, EmployeeRepository,
    Gender,
};
use crate::domain::error::DomainError;

/// PostgreSQL implementation of `EmployeeRepository`
///
/// All statements bind parameters by placeholder; update and delete are
/// single conditional statements whose affected-row count is the
/// authoritative not-found signal, so no separate existence read is needed
/// inside this backend.
#[derive(Debug, Clone)]
pub struct PostgresEmployeeRepository {
    pool: PgPool,
}

impl PostgresEmployeeRepository {
    /// Create a new repository with the given connection pool
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Create the employees table if it does not exist yet
    pub async fn ensure_table(&self) -> Result<(), DomainError> {
        sqlx::query(
            r#"
            CREATE TABLE IF NOT EXISTS employees (
                employee_id   SERIAL PRIMARY KEY,
                first_name    TEXT,
                last_name     TEXT,
                department_id INTEGER,
                job_title     TEXT,
                gender        TEXT NOT NULL DEFAULT 'UNSPECIFIED',
                date_of_birth DATE
            )
            "#,
        )
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to ensure employees table: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl EmployeeRepository for PostgresEmployeeRepository {
    async fn find_all(&self) -> Result<Vec<Employee>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT employee_id, first_name, last_name, department_id, job_title,
                   gender, date_of_birth
            FROM employees
            ORDER BY employee_id
            "#,
        )
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to list employees: {}", e)))?;

        rows.iter().map(row_to_employee).collect()
    }

    async fn find_by_id(&self, id: EmployeeId) -> Result<Employee, DomainError> {
        let row = sqlx::query(
            r#"
            SELECT employee_id, first_name, last_name, department_id, job_title,
                   gender, date_of_birth
            FROM employees
            WHERE employee_id = $1
            "#,
        )
        .bind(id.value())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to get employee: {}", e)))?;

        match row {
            Some(row) => row_to_employee(&row),
            None => Err(employee_not_found(id)),
        }
    }

    async fn find_by_name(
        &self,
        first_name: &str,
        last_name: &str,
    ) -> Result<Vec<Employee>, DomainError> {
        let rows = sqlx::query(
            r#"
            SELECT employee_id, first_name, last_name, department_id, job_title,
                   gender, date_of_birth
            FROM employees
            WHERE strpos(first_name, $1) > 0 AND strpos(last_name, $2) > 0
            ORDER BY employee_id
            "#,
        )
        .bind(first_name)
        .bind(last_name)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to search employees: {}", e)))?;

        if rows.is_empty() {
            return Err(employees_not_found_by_name(first_name, last_name));
        }

        rows.iter().map(row_to_employee).collect()
    }

    async fn create(&self, employee: Employee) -> Result<Employee, DomainError> {
        // RETURNING makes id retrieval atomic with the insert
        let id: i32 = sqlx::query_scalar(
            r#"
            INSERT INTO employees (first_name, last_name, department_id, job_title,
                                   gender, date_of_birth)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING employee_id
            "#,
        )
        .bind(employee.first_name.as_deref())
        .bind(employee.last_name.as_deref())
        .bind(employee.department_id)
        .bind(employee.job_title.as_deref())
        .bind(gender_to_str(employee.gender))
        .bind(employee.date_of_birth)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to create employee: {}", e)))?;

        Ok(Employee {
            employee_id: Some(EmployeeId::new(id)),
            ..employee
        })
    }

    async fn update(&self, employee: &Employee) -> Result<Employee, DomainError> {
        let id = employee
            .employee_id
            .ok_or_else(|| DomainError::internal("Employee id is required for update"))?;

        let result = sqlx::query(
            r#"
            UPDATE employees
            SET first_name = $2, last_name = $3, department_id = $4,
                job_title = $5, gender = $6, date_of_birth = $7
            WHERE employee_id = $1
            "#,
        )
        .bind(id.value())
        .bind(employee.first_name.as_deref())
        .bind(employee.last_name.as_deref())
        .bind(employee.department_id)
        .bind(employee.job_title.as_deref())
        .bind(gender_to_str(employee.gender))
        .bind(employee.date_of_birth)
        .execute(&self.pool)
        .await
        .map_err(|e| DomainError::storage(format!("Failed to update employee: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(employee_not_found(id));
        }

        Ok(employee.clone())
    }

    async fn delete(&self, id: EmployeeId) -> Result<(), DomainError> {
        let result = sqlx::query("DELETE FROM employees WHERE employee_id = $1")
            .bind(id.value())
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to delete employee: {}", e)))?;

        if result.rows_affected() == 0 {
            return Err(employee_not_found(id));
        }

        Ok(())
    }

    async fn exists_by_id(&self, id: EmployeeId) -> Result<bool, DomainError> {
        let exists: bool =
            sqlx::query_scalar("SELECT EXISTS(SELECT 1 FROM employees WHERE employee_id = $1)")
                .bind(id.value())
                .fetch_one(&self.pool)
                .await
                .map_err(|e| {
                    DomainError::storage(format!("Failed to check employee existence: {}", e))
                })?;

        Ok(exists)
    }

    async fn count(&self) -> Result<u64, DomainError> {
        let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM employees")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::storage(format!("Failed to count employees: {}", e)))?;

        Ok(count as u64)
    }
}

fn row_to_employee(row: &sqlx::postgres::PgRow) -> Result<Employee, DomainError> {
    let employee_id: i32 = row
        .try_get("employee_id")
        .map_err(|e| DomainError::storage(format!("Invalid employee_id column: {}", e)))?;
    let gender: String = row
        .try_get("gender")
        .map_err(|e| DomainError::storage(format!("Invalid gender column: {}", e)))?;

    Ok(Employee {
        employee_id: Some(EmployeeId::new(employee_id)),
        first_name: row
            .try_get("first_name")
            .map_err(|e| DomainError::storage(format!("Invalid first_name column: {}", e)))?,
        last_name: row
            .try_get("last_name")
            .map_err(|e| DomainError::storage(format!("Invalid last_name column: {}", e)))?,
        department_id: row
            .try_get("department_id")
            .map_err(|e| DomainError::storage(format!("Invalid department_id column: {}", e)))?,
        job_title: row
            .try_get("job_title")
            .map_err(|e| DomainError::storage(format!("Invalid job_title column: {}", e)))?,
        gender: str_to_gender(&gender),
        date_of_birth: row
            .try_get("date_of_birth")
            .map_err(|e| DomainError::storage(format!("Invalid date_of_birth column: {}", e)))?,
    })
}

fn gender_to_str(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "MALE",
        Gender::Female => "FEMALE",
        Gender::Unspecified => "UNSPECIFIED",
    }
}

fn str_to_gender(s: &str) -> Gender {
    match s {
        "MALE" => Gender::Male,
        "FEMALE" => Gender::Female,
        _ => Gender::Unspecified,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gender_conversion() {
        assert_eq!(gender_to_str(Gender::Male), "MALE");
        assert_eq!(gender_to_str(Gender::Female), "FEMALE");
        assert_eq!(gender_to_str(Gender::Unspecified), "UNSPECIFIED");

        assert_eq!(str_to_gender("MALE"), Gender::Male);
        assert_eq!(str_to_gender("FEMALE"), Gender::Female);
        assert_eq!(str_to_gender("UNSPECIFIED"), Gender::Unspecified);
        assert_eq!(str_to_gender("unknown"), Gender::Unspecified);
    }

    #[test]
    fn test_gender_round_trip() {
        for gender in [Gender::Male, Gender::Female, Gender::Unspecified] {
            assert_eq!(str_to_gender(gender_to_str(gender)), gender);
        }
    }
}
