//! Employee persistence backends and business service

pub mod factory;
pub mod in_memory_repository;
pub mod postgres_repository;
pub mod service;

pub use factory::{RepositoryFactory, StorageBackend};
pub use in_memory_repository::InMemoryEmployeeRepository;
pub use postgres_repository::PostgresEmployeeRepository;
pub use service::EmployeeService;
