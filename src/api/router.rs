use axum::{
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use super::employees;
use super::health;
use super::queue;
use super::state::AppState;

/// Create the full router with application state
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health endpoints
        .route("/health", get(health::health_check))
        .route("/ready", get(health::ready_check))
        .route("/live", get(health::live_check))
        // Employee CRUD
        .route(
            "/employees",
            get(employees::list_employees).post(employees::create_employee),
        )
        .route("/employees/count", get(employees::count_employees))
        .route("/employees/search", get(employees::search_employees))
        .route(
            "/employees/{id}",
            get(employees::get_employee)
                .put(employees::update_employee)
                .delete(employees::delete_employee),
        )
        // Asynchronous create path
        .route("/queue/employees", post(queue::enqueue_employee))
        // Add state and middleware
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
