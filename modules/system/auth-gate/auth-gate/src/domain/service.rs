//! The gate itself.

use std::sync::Arc;
use std::time::Duration;

use auth_gate_sdk::{CredentialVerifier, VerifierError};
use axum::http::HeaderMap;
use tracing::{debug, error};

use super::extract::CredentialSource;
use super::result::{AuthError, AuthResult};
use crate::config::{AuthGateConfig, ConfigError};

/// Stateless request authenticator.
///
/// Holds only immutable configuration and a shared verifier handle, so one
/// instance serves all concurrent requests without locking.
pub struct AuthGate {
    verifier: Arc<dyn CredentialVerifier>,
    source: CredentialSource,
    timeout: Duration,
}

impl AuthGate {
    /// Build a gate from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the credential source is invalid or the timeout is zero.
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        cfg: &AuthGateConfig,
    ) -> Result<Self, ConfigError> {
        if cfg.verifier_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        let source = CredentialSource::from_config(&cfg.credential)?;
        Ok(Self::with_parts(
            verifier,
            source,
            Duration::from_millis(cfg.verifier_timeout_ms),
        ))
    }

    #[must_use]
    pub fn with_parts(
        verifier: Arc<dyn CredentialVerifier>,
        source: CredentialSource,
        timeout: Duration,
    ) -> Self {
        Self {
            verifier,
            source,
            timeout,
        }
    }

    /// Authenticate a request from its headers.
    ///
    /// 1. No credential -> 401 `missing credential`; the verifier is not called.
    /// 2. Verifier rejection -> 401 with the rejection reason.
    /// 3. Verifier fault or timeout -> 500 `internal error`.
    /// 4. Otherwise the verifier's identity is returned.
    ///
    /// The verifier is called at most once and never retried.
    pub async fn authenticate_request(&self, headers: &HeaderMap) -> AuthResult {
        let Some(credential) = self.source.extract(headers) else {
            debug!("request carries no credential");
            return AuthResult::Error(AuthError::missing_credential());
        };

        match tokio::time::timeout(self.timeout, self.verifier.verify(&credential)).await {
            Ok(Ok(user)) => {
                debug!(user.id = %user.id(), "request authenticated");
                AuthResult::Authenticated { user }
            }
            Ok(Err(VerifierError::Invalid(reason))) => {
                debug!(%reason, "credential rejected");
                AuthResult::Error(AuthError::invalid_credential(reason))
            }
            Ok(Err(VerifierError::Unavailable(detail))) => {
                error!(%detail, "credential verifier unavailable");
                AuthResult::Error(AuthError::verifier_unavailable())
            }
            Err(_) => {
                error!(timeout = ?self.timeout, "credential verifier timed out");
                AuthResult::Error(AuthError::verifier_unavailable())
            }
        }
    }
}
