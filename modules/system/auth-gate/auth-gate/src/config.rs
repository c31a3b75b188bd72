//! Configuration for the auth gate.

use serde::{Deserialize, Serialize};
use thiserror::Error;

fn default_header() -> String {
    "authorization".to_owned()
}

fn default_scheme() -> Option<String> {
    Some("Bearer".to_owned())
}

fn default_cookie() -> Option<String> {
    Some("session".to_owned())
}

/// Gate configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AuthGateConfig {
    /// Skip credential verification entirely and attach `dev_user_id` to every request.
    /// Only meant for local development.
    pub auth_disabled: bool,

    /// Identity injected when `auth_disabled` is true.
    pub dev_user_id: String,

    /// Upper bound on a single verifier call. Exceeding it is treated as a
    /// verifier fault (500), never as a rejection.
    pub verifier_timeout_ms: u64,

    /// Where the credential is read from.
    pub credential: CredentialSourceConfig,
}

impl Default for AuthGateConfig {
    fn default() -> Self {
        Self {
            auth_disabled: false,
            dev_user_id: "dev-user".to_owned(),
            verifier_timeout_ms: 5_000,
            credential: CredentialSourceConfig::default(),
        }
    }
}

/// Credential transport settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct CredentialSourceConfig {
    /// Header carrying the credential.
    pub header: String,
    /// Auth scheme prefix expected in the header (case-insensitive).
    /// `None` takes the whole header value as the credential.
    pub scheme: Option<String>,
    /// Cookie consulted when the header yields nothing. `None` disables cookies.
    pub cookie: Option<String>,
}

impl Default for CredentialSourceConfig {
    fn default() -> Self {
        Self {
            header: default_header(),
            scheme: default_scheme(),
            cookie: default_cookie(),
        }
    }
}

/// Invalid gate configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid credential header name '{name}': {source}")]
    InvalidHeaderName {
        name: String,
        #[source]
        source: axum::http::header::InvalidHeaderName,
    },

    #[error("verifier_timeout_ms must be greater than zero")]
    ZeroTimeout,

    #[error("dev_user_id must not be empty when auth is disabled")]
    EmptyDevUser,
}
