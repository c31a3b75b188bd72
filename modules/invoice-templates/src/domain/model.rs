use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A stored invoice template, owned by exactly one user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvoiceTemplate {
    pub id: Uuid,
    pub owner_id: String,
    pub name: String,
    pub currency: String,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

/// Validated input for a new template.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTemplate {
    pub name: String,
    pub currency: String,
    pub body: String,
}
