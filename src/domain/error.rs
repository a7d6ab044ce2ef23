use thiserror::Error;

/// Core domain errors
///
/// `NotFound`, `Validation` and `IdMismatch` are expected, caller-recoverable
/// conditions; the remaining kinds indicate a defect or infrastructure
/// failure and are surfaced to callers only as a generic message.
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("{message}")]
    NotFound { message: String },

    #[error("{message}")]
    Validation { message: String },

    #[error("Id mismatch")]
    IdMismatch,

    #[error("Storage error: {message}")]
    Storage { message: String },

    #[error("Configuration error: {message}")]
    Configuration { message: String },

    #[error("Internal error: {message}")]
    Internal { message: String },
}

impl DomainError {
    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }

    /// Whether the caller can recover by correcting the request
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            Self::NotFound { .. } | Self::Validation { .. } | Self::IdMismatch
        )
    }
}
