//! Configuration for the JWT credential verifier.

use secrecy::SecretString;
use serde::{Deserialize, Serialize, Serializer};
use thiserror::Error;

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct JwtVerifierConfig {
    /// HMAC signing secret. Redacted when the configuration is printed.
    #[serde(serialize_with = "redacted")]
    pub secret: SecretString,

    /// Required `iss` claim, if set.
    pub issuer: Option<String>,

    /// Required `aud` claim, if set. Audience is not checked otherwise.
    pub audience: Option<String>,

    /// Clock skew tolerated on `exp`/`nbf`, in seconds.
    pub leeway_seconds: u64,
}

impl Default for JwtVerifierConfig {
    fn default() -> Self {
        Self {
            secret: SecretString::from(String::new()),
            issuer: None,
            audience: None,
            leeway_seconds: 30,
        }
    }
}

fn redacted<S: Serializer>(_secret: &SecretString, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str("[REDACTED]")
}

/// Invalid JWT verifier configuration.
#[derive(Debug, Error)]
pub enum JwtConfigError {
    #[error("jwt verifier secret must not be empty")]
    EmptySecret,
}
