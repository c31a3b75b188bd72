//! Verifier trait consumed by the auth gate.
//!
//! Implementations map a credential to a user identity or reject it. The
//! gate owns timeouts and error-to-status mapping; verifiers only classify.

use async_trait::async_trait;

use crate::error::VerifierError;
use crate::models::{Credential, UserIdentity};

/// Identity verification collaborator.
///
/// Injected into the gate at construction time:
///
/// ```ignore
/// let verifier: Arc<dyn CredentialVerifier> = Arc::new(StaticVerifier::from_config(&cfg));
/// let gate = AuthGate::new(verifier, &gate_cfg);
/// ```
///
/// Implementations must be safe to call concurrently from many requests.
#[async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Verify a credential and return the identity it belongs to.
    ///
    /// # Errors
    ///
    /// - `Invalid` if the credential is expired, malformed, revoked, or unknown
    /// - `Unavailable` if the verifier could not reach its backing store
    async fn verify(&self, credential: &Credential) -> Result<UserIdentity, VerifierError>;
}
