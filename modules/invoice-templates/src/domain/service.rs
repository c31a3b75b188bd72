use std::sync::Arc;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::error::DomainError;
use super::model::{InvoiceTemplate, NewTemplate};
use super::store::TemplateStore;

// ============================================================================
// Service Configuration
// ============================================================================

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServiceConfig {
    /// Maximum template name length, in characters.
    pub max_name_len: usize,
    /// Maximum template body length, in characters.
    pub max_body_len: usize,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            max_name_len: 120,
            max_body_len: 65_536,
        }
    }
}

// ============================================================================
// Service Implementation
// ============================================================================

pub struct Service {
    store: Arc<dyn TemplateStore>,
    config: ServiceConfig,
}

impl Service {
    #[must_use]
    pub fn new(store: Arc<dyn TemplateStore>, config: ServiceConfig) -> Self {
        Self { store, config }
    }

    /// List the caller's templates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Internal`] if the store fails.
    pub async fn list_templates(&self, owner_id: &str) -> Result<Vec<InvoiceTemplate>, DomainError> {
        Ok(self.store.list(owner_id).await?)
    }

    /// Fetch one of the caller's templates.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::NotFound`] if the template does not exist or
    /// belongs to another user, [`DomainError::Internal`] if the store fails.
    pub async fn get_template(
        &self,
        owner_id: &str,
        id: Uuid,
    ) -> Result<InvoiceTemplate, DomainError> {
        Ok(self.store.get(owner_id, id).await?)
    }

    /// Validate and store a new template for the caller.
    ///
    /// # Errors
    ///
    /// Returns [`DomainError::Validation`] for invalid input (the store is not
    /// called), [`DomainError::Internal`] if the store fails.
    pub async fn create_template(
        &self,
        owner_id: &str,
        template: NewTemplate,
    ) -> Result<InvoiceTemplate, DomainError> {
        let template = self.validate(template)?;
        let created = self.store.create(owner_id, template).await?;
        tracing::info!(template.id = %created.id, "invoice template created");
        Ok(created)
    }

    fn validate(&self, template: NewTemplate) -> Result<NewTemplate, DomainError> {
        let name = template.name.trim();
        if name.is_empty() {
            return Err(DomainError::validation("name", "must not be empty"));
        }
        if name.chars().count() > self.config.max_name_len {
            return Err(DomainError::validation(
                "name",
                format!("exceeds maximum length of {}", self.config.max_name_len),
            ));
        }

        if template.currency.len() != 3
            || !template.currency.bytes().all(|b| b.is_ascii_uppercase())
        {
            return Err(DomainError::validation(
                "currency",
                "must be a three-letter uppercase currency code",
            ));
        }

        if template.body.trim().is_empty() {
            return Err(DomainError::validation("body", "must not be empty"));
        }
        if template.body.chars().count() > self.config.max_body_len {
            return Err(DomainError::validation(
                "body",
                format!("exceeds maximum length of {}", self.config.max_body_len),
            ));
        }

        Ok(NewTemplate {
            name: name.to_owned(),
            currency: template.currency,
            body: template.body,
        })
    }
}
