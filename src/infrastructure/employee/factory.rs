//! Repository factory for runtime backend selection

use std::sync::Arc;

use sqlx::postgres::PgPoolOptions;
use tracing::info;

use crate::config::StorageSettings;
use crate::domain::employee::EmployeeRepository;
use crate::domain::error::DomainError;

use super::in_memory_repository::InMemoryEmployeeRepository;
use super::postgres_repository::PostgresEmployeeRepository;

/// Supported storage backends
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    /// In-memory storage (for testing/development)
    InMemory,
    /// PostgreSQL storage
    Postgres,
}

impl StorageBackend {
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "memory" | "inmemory" | "in-memory" | "in_memory" => Some(Self::InMemory),
            "postgres" | "postgresql" | "pg" => Some(Self::Postgres),
            _ => None,
        }
    }
}

/// Factory for creating the employee repository selected at startup
#[derive(Debug)]
pub struct RepositoryFactory;

impl RepositoryFactory {
    /// Create a repository for the chosen backend
    ///
    /// The Postgres backend reads its connection URL from `DATABASE_URL`,
    /// connects a pool and makes sure the employees table exists.
    pub async fn create(
        backend: StorageBackend,
        settings: &StorageSettings,
    ) -> Result<Arc<dyn EmployeeRepository>, DomainError> {
        match backend {
            StorageBackend::InMemory => Ok(Arc::new(InMemoryEmployeeRepository::new())),
            StorageBackend::Postgres => {
                let url = std::env::var("DATABASE_URL").map_err(|_| {
                    DomainError::configuration(
                        "DATABASE_URL environment variable is required for the postgres backend",
                    )
                })?;

                info!("Connecting to PostgreSQL...");
                let pool = PgPoolOptions::new()
                    .max_connections(settings.max_connections)
                    .connect(&url)
                    .await
                    .map_err(|e| {
                        DomainError::storage(format!("Failed to connect to PostgreSQL: {}", e))
                    })?;
                info!("PostgreSQL connection established");

                let repository = PostgresEmployeeRepository::new(pool);
                repository.ensure_table().await?;

                Ok(Arc::new(repository))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_backend_from_str() {
        assert_eq!(
            StorageBackend::from_str("memory"),
            Some(StorageBackend::InMemory)
        );
        assert_eq!(
            StorageBackend::from_str("in-memory"),
            Some(StorageBackend::InMemory)
        );
        assert_eq!(
            StorageBackend::from_str("Postgres"),
            Some(StorageBackend::Postgres)
        );
        assert_eq!(
            StorageBackend::from_str("pg"),
            Some(StorageBackend::Postgres)
        );
        assert_eq!(StorageBackend::from_str("unknown"), None);
    }

    #[tokio::test]
    async fn test_factory_creates_in_memory_backend() {
        let repository =
            RepositoryFactory::create(StorageBackend::InMemory, &StorageSettings::default())
                .await
                .unwrap();

        assert_eq!(repository.count().await.unwrap(), 0);
    }
}
