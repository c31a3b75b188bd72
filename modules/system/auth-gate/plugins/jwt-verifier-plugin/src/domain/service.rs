//! Service implementation for the JWT credential verifier.

use auth_gate_sdk::{RejectReason, UserIdentity, VerifierError};
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};
use secrecy::ExposeSecret;
use serde::Deserialize;

use crate::config::{JwtConfigError, JwtVerifierConfig};

/// Claims the verifier reads. `exp` is enforced by `Validation`.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
}

/// HS256 JWT verifier.
pub struct Service {
    key: DecodingKey,
    validation: Validation,
}

impl Service {
    /// Create a service from plugin configuration.
    ///
    /// # Errors
    ///
    /// Returns [`JwtConfigError::EmptySecret`] if no signing secret is configured.
    pub fn from_config(cfg: &JwtVerifierConfig) -> Result<Self, JwtConfigError> {
        let secret = cfg.secret.expose_secret();
        if secret.is_empty() {
            return Err(JwtConfigError::EmptySecret);
        }

        let mut validation = Validation::new(Algorithm::HS256);
        validation.leeway = cfg.leeway_seconds;
        validation.set_required_spec_claims(&["exp", "sub"]);
        if let Some(issuer) = &cfg.issuer {
            validation.set_issuer(&[issuer]);
        }
        match &cfg.audience {
            Some(audience) => validation.set_audience(&[audience]),
            None => validation.validate_aud = false,
        }

        tracing::info!(
            issuer = cfg.issuer.as_deref().unwrap_or("<any>"),
            audience = cfg.audience.as_deref().unwrap_or("<any>"),
            leeway_seconds = cfg.leeway_seconds,
            "Loaded JWT verifier configuration"
        );

        Ok(Self {
            key: DecodingKey::from_secret(secret.as_bytes()),
            validation,
        })
    }

    /// Validate a token and return the identity from its `sub` claim.
    ///
    /// # Errors
    ///
    /// - `Invalid(Expired)` if `exp` is in the past (beyond leeway)
    /// - `Invalid(Malformed)` if the token cannot be decoded or lacks required claims
    /// - `Invalid(Unknown)` for signature, issuer, or audience mismatches
    /// - `Unavailable` if the configured key material cannot be used
    pub fn verify_token(&self, token: &str) -> Result<UserIdentity, VerifierError> {
        let data = decode::<Claims>(token, &self.key, &self.validation).map_err(|e| {
            let err = classify(e.kind());
            tracing::debug!(kind = ?e.kind(), "JWT validation failed");
            err
        })?;

        if data.claims.sub.trim().is_empty() {
            return Err(VerifierError::Invalid(RejectReason::Malformed));
        }

        Ok(UserIdentity::new(data.claims.sub))
    }
}

fn classify(kind: &ErrorKind) -> VerifierError {
    let reason = match kind {
        ErrorKind::ExpiredSignature => RejectReason::Expired,
        ErrorKind::InvalidToken
        | ErrorKind::Base64(_)
        | ErrorKind::Json(_)
        | ErrorKind::Utf8(_)
        | ErrorKind::MissingRequiredClaim(_) => RejectReason::Malformed,
        ErrorKind::InvalidKeyFormat => {
            return VerifierError::unavailable("configured JWT key cannot be used");
        }
        _ => RejectReason::Unknown,
    };
    VerifierError::Invalid(reason)
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use jsonwebtoken::{EncodingKey, Header, encode, get_current_timestamp};
    use secrecy::SecretString;
    use serde::Serialize;

    use super::*;

    const SECRET: &str = "test-signing-secret";

    #[derive(Serialize)]
    struct TestClaims<'a> {
        sub: &'a str,
        #[serde(skip_serializing_if = "Option::is_none")]
        exp: Option<u64>,
        #[serde(skip_serializing_if = "Option::is_none")]
        iss: Option<&'a str>,
        #[serde(skip_serializing_if = "Option::is_none")]
        aud: Option<&'a str>,
    }

    impl<'a> TestClaims<'a> {
        fn for_user(sub: &'a str) -> Self {
            Self {
                sub,
                exp: Some(get_current_timestamp() + 3600),
                iss: None,
                aud: None,
            }
        }
    }

    fn sign(claims: &TestClaims<'_>, secret: &str) -> String {
        encode(
            &Header::default(),
            claims,
            &EncodingKey::from_secret(secret.as_bytes()),
        )
        .unwrap()
    }

    fn config() -> JwtVerifierConfig {
        JwtVerifierConfig {
            secret: SecretString::from(SECRET.to_owned()),
            ..JwtVerifierConfig::default()
        }
    }

    fn reject_reason(result: Result<UserIdentity, VerifierError>) -> RejectReason {
        match result {
            Err(VerifierError::Invalid(reason)) => reason,
            other => panic!("Expected Invalid, got: {other:?}"),
        }
    }

    #[test]
    fn valid_token_maps_sub_to_identity() {
        let service = Service::from_config(&config()).unwrap();
        let token = sign(&TestClaims::for_user("u_1"), SECRET);

        assert_eq!(service.verify_token(&token).unwrap().id(), "u_1");
    }

    #[test]
    fn expired_token_is_rejected_as_expired() {
        let service = Service::from_config(&config()).unwrap();
        let claims = TestClaims {
            exp: Some(get_current_timestamp() - 7200),
            ..TestClaims::for_user("u_1")
        };
        let token = sign(&claims, SECRET);

        assert_eq!(
            reject_reason(service.verify_token(&token)),
            RejectReason::Expired
        );
    }

    #[test]
    fn wrong_signature_is_rejected_without_detail() {
        let service = Service::from_config(&config()).unwrap();
        let token = sign(&TestClaims::for_user("u_1"), "some-other-secret");

        assert_eq!(
            reject_reason(service.verify_token(&token)),
            RejectReason::Unknown
        );
    }

    #[test]
    fn garbage_is_malformed() {
        let service = Service::from_config(&config()).unwrap();

        assert_eq!(
            reject_reason(service.verify_token("not-a-jwt")),
            RejectReason::Malformed
        );
    }

    #[test]
    fn missing_exp_is_malformed() {
        let service = Service::from_config(&config()).unwrap();
        let claims = TestClaims {
            exp: None,
            ..TestClaims::for_user("u_1")
        };
        let token = sign(&claims, SECRET);

        assert_eq!(
            reject_reason(service.verify_token(&token)),
            RejectReason::Malformed
        );
    }

    #[test]
    fn empty_subject_is_malformed() {
        let service = Service::from_config(&config()).unwrap();
        let token = sign(&TestClaims::for_user(""), SECRET);

        assert_eq!(
            reject_reason(service.verify_token(&token)),
            RejectReason::Malformed
        );
    }

    #[test]
    fn issuer_and_audience_are_enforced_when_configured() {
        let cfg = JwtVerifierConfig {
            issuer: Some("https://auth.invoicing.example".to_owned()),
            audience: Some("invoicing-api".to_owned()),
            ..config()
        };
        let service = Service::from_config(&cfg).unwrap();

        let good = TestClaims {
            iss: Some("https://auth.invoicing.example"),
            aud: Some("invoicing-api"),
            ..TestClaims::for_user("u_3")
        };
        assert_eq!(
            service.verify_token(&sign(&good, SECRET)).unwrap().id(),
            "u_3"
        );

        let wrong_issuer = TestClaims {
            iss: Some("https://evil.example"),
            aud: Some("invoicing-api"),
            ..TestClaims::for_user("u_3")
        };
        assert_eq!(
            reject_reason(service.verify_token(&sign(&wrong_issuer, SECRET))),
            RejectReason::Unknown
        );

        let wrong_audience = TestClaims {
            iss: Some("https://auth.invoicing.example"),
            aud: Some("another-api"),
            ..TestClaims::for_user("u_3")
        };
        assert_eq!(
            reject_reason(service.verify_token(&sign(&wrong_audience, SECRET))),
            RejectReason::Unknown
        );
    }

    #[test]
    fn audience_claim_is_ignored_when_not_configured() {
        let service = Service::from_config(&config()).unwrap();
        let claims = TestClaims {
            aud: Some("whatever"),
            ..TestClaims::for_user("u_4")
        };

        assert_eq!(
            service.verify_token(&sign(&claims, SECRET)).unwrap().id(),
            "u_4"
        );
    }

    #[test]
    fn empty_secret_is_a_config_error() {
        let result = Service::from_config(&JwtVerifierConfig::default());
        assert!(matches!(result, Err(JwtConfigError::EmptySecret)));
    }
}
