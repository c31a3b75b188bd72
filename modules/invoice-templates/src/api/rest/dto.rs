use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::model::{InvoiceTemplate, NewTemplate};

/// Identity of the authenticated caller.
#[derive(Debug, Serialize)]
pub struct MeDto {
    pub id: String,
}

/// REST DTO for an invoice template
#[derive(Debug, Serialize)]
pub struct TemplateDto {
    pub id: Uuid,
    pub name: String,
    pub currency: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Request body for `POST /v1/templates`
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateTemplateReq {
    pub name: String,
    pub currency: String,
    pub body: String,
}

impl From<InvoiceTemplate> for TemplateDto {
    fn from(t: InvoiceTemplate) -> Self {
        Self {
            id: t.id,
            name: t.name,
            currency: t.currency,
            body: t.body,
            created_at: t.created_at,
        }
    }
}

impl From<CreateTemplateReq> for NewTemplate {
    fn from(req: CreateTemplateReq) -> Self {
        Self {
            name: req.name,
            currency: req.currency,
            body: req.body,
        }
    }
}
