//! Configuration for the static credential verifier.

use serde::{Deserialize, Serialize};

/// Identity returned in `accept_all` mode unless configured otherwise.
pub const DEFAULT_USER_ID: &str = "u_dev";

/// Plugin configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct StaticVerifierConfig {
    /// Verification mode.
    pub mode: VerifierMode,

    /// Default identity returned in `accept_all` mode.
    pub default_identity: IdentityConfig,

    /// Static token-to-identity mappings for `static_tokens` mode.
    pub tokens: Vec<TokenMapping>,

    /// Tokens that are always refused as revoked.
    pub revoked: Vec<String>,
}

impl Default for StaticVerifierConfig {
    fn default() -> Self {
        Self {
            mode: VerifierMode::AcceptAll,
            default_identity: IdentityConfig::default(),
            tokens: Vec::new(),
            revoked: Vec::new(),
        }
    }
}

/// Verification mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum VerifierMode {
    /// Accept any non-empty token and return the default identity.
    #[default]
    AcceptAll,
    /// Map specific tokens to specific identities.
    StaticTokens,
}

/// Identity configuration for a user.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct IdentityConfig {
    pub user_id: String,
}

impl Default for IdentityConfig {
    fn default() -> Self {
        Self {
            user_id: DEFAULT_USER_ID.to_owned(),
        }
    }
}

/// Maps a static token to a specific identity.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(deny_unknown_fields)]
pub struct TokenMapping {
    /// The token value to match.
    pub token: String,
    /// The identity to return when this token is presented.
    pub identity: IdentityConfig,
}
