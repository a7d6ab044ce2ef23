//! Employee Directory API
//!
//! A persistence-backed CRUD service for employee records with:
//! - Interchangeable storage backends (PostgreSQL or in-memory)
//! - Field and business-rule validation
//! - A queue-backed asynchronous create path

pub mod api;
pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;

use std::sync::Arc;

use tracing::info;

use api::state::AppState;
use infrastructure::employee::{EmployeeService, RepositoryFactory, StorageBackend};
use infrastructure::queue::{self, EmployeeQueue};

/// Create the application state with default configuration
pub async fn create_app_state() -> anyhow::Result<AppState> {
    create_app_state_with_config(&AppConfig::default()).await
}

/// Create the application state with custom configuration
///
/// Resolves the storage backend once, wires the employee service on top of
/// it, and spawns the queue listener that drains the asynchronous create
/// path into the same service.
pub async fn create_app_state_with_config(config: &AppConfig) -> anyhow::Result<AppState> {
    let backend = StorageBackend::from_str(&config.storage.backend)
        .unwrap_or(StorageBackend::InMemory);

    info!("Storage backend: {:?}", backend);

    let repository = RepositoryFactory::create(backend, &config.storage).await?;
    let employee_service = Arc::new(EmployeeService::new(repository));

    let (employee_queue, receiver) = EmployeeQueue::new(config.queue.capacity);
    tokio::spawn(queue::run_listener(receiver, Arc::clone(&employee_service)));

    Ok(AppState {
        employee_service,
        employee_queue,
    })
}
