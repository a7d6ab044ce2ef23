//! Employee REST endpoints

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use serde::Deserialize;
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::employee::{Employee, EmployeeId};
use crate::domain::DomainError;

/// Query parameters for the name search endpoint; absent fragments match
/// everything
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NameSearchParams {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

/// GET /employees
pub async fn list_employees(
    State(state): State<AppState>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    info!("IN: list_employees()");

    let employees = state.employee_service.find_all().await?;

    info!(count = employees.len(), "OUT: list_employees()");
    Ok(Json(employees))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<Json<Employee>, ApiError> {
    info!(id, "IN: get_employee()");

    let employee = state
        .employee_service
        .find_by_id(EmployeeId::new(id))
        .await?;

    info!(id, "OUT: get_employee()");
    Ok(Json(employee))
}

/// GET /employees/search?firstName=&lastName=
pub async fn search_employees(
    State(state): State<AppState>,
    Query(params): Query<NameSearchParams>,
) -> Result<Json<Vec<Employee>>, ApiError> {
    info!(
        first_name = %params.first_name,
        last_name = %params.last_name,
        "IN: search_employees()"
    );

    let employees = state
        .employee_service
        .find_by_name(&params.first_name, &params.last_name)
        .await?;

    info!(count = employees.len(), "OUT: search_employees()");
    Ok(Json(employees))
}

/// POST /employees
pub async fn create_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<(StatusCode, Json<Employee>), ApiError> {
    info!("IN: create_employee()");

    let created = state.employee_service.create(employee).await?;

    info!(id = ?created.employee_id, "OUT: create_employee()");
    Ok((StatusCode::CREATED, Json(created)))
}

/// PUT /employees/{id}
pub async fn update_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
    Json(mut employee): Json<Employee>,
) -> Result<Json<Employee>, ApiError> {
    info!(id, "IN: update_employee()");

    let path_id = EmployeeId::new(id);
    match employee.employee_id {
        Some(body_id) if body_id != path_id => return Err(DomainError::IdMismatch.into()),
        _ => employee.employee_id = Some(path_id),
    }

    let updated = state.employee_service.update(employee).await?;

    info!(id, "OUT: update_employee()");
    Ok(Json(updated))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<AppState>,
    Path(id): Path<i32>,
) -> Result<StatusCode, ApiError> {
    info!(id, "IN: delete_employee()");

    state.employee_service.delete(EmployeeId::new(id)).await?;

    info!(id, "OUT: delete_employee() - deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// GET /employees/count
pub async fn count_employees(State(state): State<AppState>) -> Result<Json<u64>, ApiError> {
    info!("IN: count_employees()");

    let count = state.employee_service.count().await?;

    info!(count, "OUT: count_employees()");
    Ok(Json(count))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    use crate::domain::employee::Gender;

    #[test]
    fn test_search_params_default_to_empty() {
        let params: NameSearchParams = serde_json::from_str("{}").unwrap();
        assert_eq!(params.first_name, "");
        assert_eq!(params.last_name, "");
    }

    #[test]
    fn test_search_params_field_names() {
        let params: NameSearchParams =
            serde_json::from_str(r#"{"firstName": "Ann", "lastName": "Lee"}"#).unwrap();
        assert_eq!(params.first_name, "Ann");
        assert_eq!(params.last_name, "Lee");
    }

    #[test]
    fn test_create_payload_deserialization() {
        let json = r#"{
            "firstName": "Ann",
            "lastName": "Lee",
            "dateOfBirth": "2000-01-01",
            "gender": "FEMALE"
        }"#;

        let employee: Employee = serde_json::from_str(json).unwrap();

        assert!(employee.employee_id.is_none());
        assert_eq!(employee.first_name.as_deref(), Some("Ann"));
        assert_eq!(employee.last_name.as_deref(), Some("Lee"));
        assert_eq!(employee.gender, Gender::Female);
        assert_eq!(
            employee.date_of_birth,
            NaiveDate::from_ymd_opt(2000, 1, 1)
        );
    }

    #[test]
    fn test_created_response_carries_assigned_id() {
        let created = Employee::new("Ann", "Lee")
            .with_id(EmployeeId::new(4))
            .with_gender(Gender::Female)
            .with_date_of_birth(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap());

        let json = serde_json::to_string(&created).unwrap();

        assert!(json.contains("\"employeeId\":4"));
        assert!(json.contains("\"firstName\":\"Ann\""));
        assert!(json.contains("\"lastName\":\"Lee\""));
        assert!(json.contains("\"dateOfBirth\":\"2000-01-01\""));
        assert!(json.contains("\"gender\":\"FEMALE\""));
    }
}
