//! Invoice Templates
//!
//! Protected REST routes for a caller's invoice templates. Storage is an
//! injected [`TemplateStore`] collaborator; request bodies are validated at
//! the boundary before the store is touched.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod domain;
pub mod infra;

pub use api::rest::routes::router;
pub use domain::error::DomainError;
pub use domain::model::{InvoiceTemplate, NewTemplate};
pub use domain::service::{Service, ServiceConfig};
pub use domain::store::{StoreError, TemplateStore};
pub use infra::memory::InMemoryTemplateStore;
