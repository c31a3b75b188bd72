//! In-process template store for development and tests.

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::model::{InvoiceTemplate, NewTemplate};
use crate::domain::store::{StoreError, TemplateStore};

/// Keeps templates in insertion order. Contents are lost on restart.
#[derive(Default)]
pub struct InMemoryTemplateStore {
    templates: RwLock<Vec<InvoiceTemplate>>,
}

impl InMemoryTemplateStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TemplateStore for InMemoryTemplateStore {
    async fn list(&self, owner_id: &str) -> Result<Vec<InvoiceTemplate>, StoreError> {
        let templates = self.templates.read().await;
        Ok(templates
            .iter()
            .filter(|t| t.owner_id == owner_id)
            .cloned()
            .collect())
    }

    async fn get(&self, owner_id: &str, id: Uuid) -> Result<InvoiceTemplate, StoreError> {
        let templates = self.templates.read().await;
        templates
            .iter()
            .find(|t| t.id == id && t.owner_id == owner_id)
            .cloned()
            .ok_or(StoreError::NotFound)
    }

    async fn create(
        &self,
        owner_id: &str,
        template: NewTemplate,
    ) -> Result<InvoiceTemplate, StoreError> {
        let created = InvoiceTemplate {
            id: Uuid::new_v4(),
            owner_id: owner_id.to_owned(),
            name: template.name,
            currency: template.currency,
            body: template.body,
            created_at: Utc::now(),
        };
        self.templates.write().await.push(created.clone());
        Ok(created)
    }
}
