//! Domain models shared by the gate and verifiers.

use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};

/// Opaque per-request proof of identity.
///
/// The gate only extracts it and hands it to a verifier. Wrapped in
/// `SecretString` so `Debug` redacts the value.
#[derive(Debug, Clone)]
pub struct Credential(SecretString);

impl Credential {
    #[must_use]
    pub fn new(raw: impl Into<String>) -> Self {
        Self(SecretString::from(raw.into()))
    }

    /// Raw credential value, for verifiers only.
    #[must_use]
    pub fn expose(&self) -> &str {
        self.0.expose_secret()
    }
}

/// Identity resolved from a verified credential.
///
/// `id` is the only field route handlers rely on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserIdentity {
    id: String,
}

impl UserIdentity {
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }
}
