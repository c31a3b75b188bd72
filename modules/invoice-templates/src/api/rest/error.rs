use auth_gate::ErrorBody;
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use crate::domain::error::DomainError;

/// Map domain errors to `{ "error": ... }` responses.
impl IntoResponse for DomainError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            Self::NotFound => (StatusCode::NOT_FOUND, self.to_string()),
            Self::Validation { .. } => (StatusCode::BAD_REQUEST, self.to_string()),
            Self::Internal(_) => {
                // Log the internal error details but don't expose them to the client
                tracing::error!(error = ?self, "Template store error occurred");
                (StatusCode::INTERNAL_SERVER_ERROR, "internal error".to_owned())
            }
        };
        (status, Json(ErrorBody::new(&message))).into_response()
    }
}

/// Handler error: a domain failure or a rejected request body.
#[derive(Debug)]
pub enum ApiError {
    Domain(DomainError),
    Body(JsonRejection),
}

impl From<DomainError> for ApiError {
    fn from(e: DomainError) -> Self {
        Self::Domain(e)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        Self::Body(rejection)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Domain(e) => e.into_response(),
            Self::Body(rejection) => {
                // Unparseable or mistyped JSON is a validation failure; size and
                // content-type rejections keep their own status.
                let status = match &rejection {
                    JsonRejection::JsonDataError(_) | JsonRejection::JsonSyntaxError(_) => {
                        StatusCode::BAD_REQUEST
                    }
                    other => other.status(),
                };
                let message = format!("body: {}", rejection.body_text());
                (status, Json(ErrorBody::new(&message))).into_response()
            }
        }
    }
}
