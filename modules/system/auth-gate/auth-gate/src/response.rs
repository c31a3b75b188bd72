//! JSON error body shared by every route: `{ "error": "<message>" }`.

use axum::Json;
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::domain::AuthError;

#[derive(Debug, Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
}

impl<'a> ErrorBody<'a> {
    #[must_use]
    pub fn new(error: &'a str) -> Self {
        Self { error }
    }
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        (self.status_code(), Json(ErrorBody::new(self.error()))).into_response()
    }
}
