//! Asynchronous create endpoint - produces onto the employee queue

use axum::{extract::State, http::StatusCode, Json};
use tracing::info;

use crate::api::state::AppState;
use crate::api::types::ApiError;
use crate::domain::employee::Employee;

/// POST /queue/employees
///
/// Validates the payload, hands it to the queue and returns immediately;
/// the listener persists it through the same create path as POST /employees.
pub async fn enqueue_employee(
    State(state): State<AppState>,
    Json(employee): Json<Employee>,
) -> Result<StatusCode, ApiError> {
    info!("IN: enqueue_employee()");

    state.employee_service.validate(&employee)?;
    state.employee_queue.send(employee).await?;

    info!("OUT: enqueue_employee() - queued");
    Ok(StatusCode::OK)
}
