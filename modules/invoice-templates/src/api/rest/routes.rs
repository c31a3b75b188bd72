use std::sync::Arc;

use axum::routing::get;
use axum::{Extension, Router};

use crate::api::rest::handlers;
use crate::domain::service::Service;

/// Template routes, unguarded.
///
/// Callers wrap the result with [`auth_gate::protect`]; every handler reads
/// the caller through [`auth_gate::AuthUser`] and answers 500 if the gate is
/// missing.
#[must_use]
pub fn router(service: Arc<Service>) -> Router {
    Router::new()
        .route("/v1/me", get(handlers::me))
        .route(
            "/v1/templates",
            get(handlers::list_templates).post(handlers::create_template),
        )
        .route("/v1/templates/{id}", get(handlers::get_template))
        .layer(Extension(service))
}
