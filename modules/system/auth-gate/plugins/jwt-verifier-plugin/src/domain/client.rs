//! Verifier implementation for the JWT plugin.

use async_trait::async_trait;
use auth_gate_sdk::{Credential, CredentialVerifier, UserIdentity, VerifierError};

use super::service::Service;

#[async_trait]
impl CredentialVerifier for Service {
    async fn verify(&self, credential: &Credential) -> Result<UserIdentity, VerifierError> {
        self.verify_token(credential.expose())
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use auth_gate_sdk::RejectReason;
    use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
    use secrecy::SecretString;

    use super::*;
    use crate::config::JwtVerifierConfig;

    #[tokio::test]
    async fn verifier_trait_resolves_subject() {
        let cfg = JwtVerifierConfig {
            secret: SecretString::from("trait-secret".to_owned()),
            ..JwtVerifierConfig::default()
        };
        let service = Service::from_config(&cfg).unwrap();
        let verifier: &dyn CredentialVerifier = &service;

        let token = encode(
            &Header::default(),
            &serde_json::json!({ "sub": "u_9", "exp": get_current_timestamp() + 600 }),
            &EncodingKey::from_secret(b"trait-secret"),
        )
        .unwrap();

        let user = verifier.verify(&Credential::new(token)).await.unwrap();
        assert_eq!(user.id(), "u_9");

        let err = verifier
            .verify(&Credential::new("garbage"))
            .await
            .unwrap_err();
        assert!(matches!(err, VerifierError::Invalid(RejectReason::Malformed)));
    }
}
