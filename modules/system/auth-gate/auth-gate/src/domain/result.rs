//! The gate's per-request outcome.

use auth_gate_sdk::{RejectReason, UserIdentity};
use axum::http::StatusCode;

/// Outcome of authenticating one request.
///
/// Exactly one variant is populated. Branch with [`is_auth_error`] or a
/// `match` before touching the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum AuthResult {
    Authenticated { user: UserIdentity },
    Error(AuthError),
}

/// The single discriminator route code relies on.
#[must_use]
pub fn is_auth_error(result: &AuthResult) -> bool {
    matches!(result, AuthResult::Error(_))
}

impl AuthResult {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !is_auth_error(self)
    }

    #[must_use]
    pub fn user(&self) -> Option<&UserIdentity> {
        match self {
            Self::Authenticated { user } => Some(user),
            Self::Error(_) => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&AuthError> {
        match self {
            Self::Authenticated { .. } => None,
            Self::Error(err) => Some(err),
        }
    }

    /// Convert into a `Result` so handlers can use `?`.
    ///
    /// # Errors
    ///
    /// Returns the [`AuthError`] when the request was not authenticated.
    pub fn into_result(self) -> Result<UserIdentity, AuthError> {
        match self {
            Self::Authenticated { user } => Ok(user),
            Self::Error(err) => Err(err),
        }
    }
}

/// Auth failure classes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthErrorKind {
    MissingCredential,
    InvalidCredential,
    /// Verifier fault or timeout. Distinct from a rejection so operators can
    /// alert on it.
    VerifierUnavailable,
    /// Server wiring fault, e.g. a handler reading the identity on a route
    /// the gate does not guard.
    Internal,
}

impl AuthErrorKind {
    #[must_use]
    pub fn status(self) -> StatusCode {
        match self {
            Self::MissingCredential | Self::InvalidCredential => StatusCode::UNAUTHORIZED,
            Self::VerifierUnavailable | Self::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Structured auth failure carrying a client-safe message and an HTTP status.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{error}")]
pub struct AuthError {
    kind: AuthErrorKind,
    error: String,
}

impl AuthError {
    #[must_use]
    pub fn missing_credential() -> Self {
        Self {
            kind: AuthErrorKind::MissingCredential,
            error: "missing credential".to_owned(),
        }
    }

    #[must_use]
    pub fn invalid_credential(reason: RejectReason) -> Self {
        Self {
            kind: AuthErrorKind::InvalidCredential,
            error: reason.to_string(),
        }
    }

    #[must_use]
    pub fn verifier_unavailable() -> Self {
        Self {
            kind: AuthErrorKind::VerifierUnavailable,
            error: "internal error".to_owned(),
        }
    }

    #[must_use]
    pub fn internal() -> Self {
        Self {
            kind: AuthErrorKind::Internal,
            error: "internal error".to_owned(),
        }
    }

    #[must_use]
    pub fn kind(&self) -> AuthErrorKind {
        self.kind
    }

    /// Human-readable reason, safe to return to the client.
    #[must_use]
    pub fn error(&self) -> &str {
        &self.error
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        self.kind.status()
    }

    #[must_use]
    pub fn status(&self) -> u16 {
        self.status_code().as_u16()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;

    #[test]
    fn missing_credential_is_401() {
        let err = AuthError::missing_credential();
        assert_eq!(err.status(), 401);
        assert_eq!(err.error(), "missing credential");
        assert_eq!(err.kind(), AuthErrorKind::MissingCredential);
    }

    #[test]
    fn invalid_credential_carries_reason_text() {
        let err = AuthError::invalid_credential(RejectReason::Revoked);
        assert_eq!(err.status(), 401);
        assert_eq!(err.error(), "credential revoked");
    }

    #[test]
    fn verifier_unavailable_is_500_with_generic_message() {
        let err = AuthError::verifier_unavailable();
        assert_eq!(err.status(), 500);
        assert_eq!(err.error(), "internal error");
    }

    #[test]
    fn internal_is_500_with_its_own_kind() {
        let err = AuthError::internal();
        assert_eq!(err.status(), 500);
        assert_eq!(err.error(), "internal error");
        assert_eq!(err.kind(), AuthErrorKind::Internal);
    }

    #[test]
    fn discriminator_matches_variant() {
        let ok = AuthResult::Authenticated {
            user: UserIdentity::new("u_1"),
        };
        let denied = AuthResult::Error(AuthError::missing_credential());

        assert!(!is_auth_error(&ok));
        assert!(ok.is_authenticated());
        assert_eq!(ok.user().map(UserIdentity::id), Some("u_1"));
        assert!(ok.error().is_none());

        assert!(is_auth_error(&denied));
        assert!(denied.user().is_none());
        assert_eq!(denied.error().map(AuthError::status), Some(401));
    }

    #[test]
    fn into_result_splits_variants() {
        let ok = AuthResult::Authenticated {
            user: UserIdentity::new("u_2"),
        };
        assert_eq!(ok.into_result().unwrap().id(), "u_2");

        let denied = AuthResult::Error(AuthError::verifier_unavailable());
        assert_eq!(denied.into_result().unwrap_err().status(), 500);
    }
}
