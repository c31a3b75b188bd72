//! Verifier implementation for the static plugin.
//!
//! Implements `CredentialVerifier` using the domain service.

use async_trait::async_trait;
use auth_gate_sdk::{Credential, CredentialVerifier, UserIdentity, VerifierError};

use super::service::Service;

#[async_trait]
impl CredentialVerifier for Service {
    async fn verify(&self, credential: &Credential) -> Result<UserIdentity, VerifierError> {
        self.verify_token(credential.expose())
            .map_err(VerifierError::Invalid)
    }
}
