use thiserror::Error;

use super::store::StoreError;

/// Domain-specific errors using thiserror
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("template not found")]
    NotFound,

    #[error("{field}: {message}")]
    Validation { field: String, message: String },

    #[error("internal error: {0}")]
    Internal(String),
}

impl DomainError {
    pub fn validation(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(e: StoreError) -> Self {
        match e {
            StoreError::NotFound => Self::NotFound,
            StoreError::Unavailable(detail) => Self::Internal(detail),
        }
    }
}
