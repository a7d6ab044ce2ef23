//! Application state shared by request handlers

use std::sync::Arc;

use crate::infrastructure::employee::EmployeeService;
use crate::infrastructure::queue::EmployeeQueue;

/// Application state containing the shared service and queue producer
#[derive(Clone)]
pub struct AppState {
    pub employee_service: Arc<EmployeeService>,
    pub employee_queue: EmployeeQueue,
}
