use async_trait::async_trait;
use thiserror::Error;
use uuid::Uuid;

use super::model::{InvoiceTemplate, NewTemplate};

/// Failure reported by a template store.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("template not found")]
    NotFound,

    #[error("template store unavailable: {0}")]
    Unavailable(String),
}

/// Template persistence collaborator.
///
/// Every operation is scoped to `owner_id`: a template owned by someone else
/// is reported as [`StoreError::NotFound`].
#[async_trait]
pub trait TemplateStore: Send + Sync {
    async fn list(&self, owner_id: &str) -> Result<Vec<InvoiceTemplate>, StoreError>;

    async fn get(&self, owner_id: &str, id: Uuid) -> Result<InvoiceTemplate, StoreError>;

    async fn create(
        &self,
        owner_id: &str,
        template: NewTemplate,
    ) -> Result<InvoiceTemplate, StoreError>;
}
