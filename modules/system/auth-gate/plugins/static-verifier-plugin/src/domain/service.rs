//! Service implementation for the static credential verifier.

use std::collections::{HashMap, HashSet};

use auth_gate_sdk::{RejectReason, UserIdentity};

use crate::config::{IdentityConfig, StaticVerifierConfig, VerifierMode};

/// Static credential verifier.
///
/// Provides token-to-identity mapping based on configuration mode:
/// - `accept_all`: Any non-empty token maps to the default identity
/// - `static_tokens`: Specific tokens map to specific identities
pub struct Service {
    mode: VerifierMode,
    default_identity: IdentityConfig,
    token_map: HashMap<String, IdentityConfig>,
    revoked: HashSet<String>,
}

impl Service {
    /// Create a service from plugin configuration.
    #[must_use]
    pub fn from_config(cfg: &StaticVerifierConfig) -> Self {
        if cfg.mode == VerifierMode::AcceptAll {
            tracing::warn!(
                "Static verifier is running in `accept_all` mode: \
                 every non-empty credential maps to a hardcoded identity. \
                 Do NOT use this mode in production."
            );
        }

        tracing::info!(
            mode = ?cfg.mode,
            token_count = cfg.tokens.len(),
            revoked_count = cfg.revoked.len(),
            "Loaded static verifier configuration"
        );

        let token_map: HashMap<String, IdentityConfig> = cfg
            .tokens
            .iter()
            .map(|m| (m.token.clone(), m.identity.clone()))
            .collect();

        Self {
            mode: cfg.mode,
            default_identity: cfg.default_identity.clone(),
            token_map,
            revoked: cfg.revoked.iter().cloned().collect(),
        }
    }

    /// Resolve a token to an identity.
    ///
    /// # Errors
    ///
    /// - `Malformed` for an empty token
    /// - `Revoked` for a token on the revocation list
    /// - `Unknown` for a token missing from the table (in `static_tokens` mode)
    pub fn verify_token(&self, token: &str) -> Result<UserIdentity, RejectReason> {
        if token.is_empty() {
            return Err(RejectReason::Malformed);
        }
        if self.revoked.contains(token) {
            return Err(RejectReason::Revoked);
        }

        let identity = match self.mode {
            VerifierMode::AcceptAll => &self.default_identity,
            VerifierMode::StaticTokens => {
                self.token_map.get(token).ok_or(RejectReason::Unknown)?
            }
        };

        Ok(UserIdentity::new(identity.user_id.clone()))
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use super::*;
    use crate::config::{DEFAULT_USER_ID, TokenMapping};

    fn default_config() -> StaticVerifierConfig {
        StaticVerifierConfig::default()
    }

    fn mapping(token: &str, user_id: &str) -> TokenMapping {
        TokenMapping {
            token: token.to_owned(),
            identity: IdentityConfig {
                user_id: user_id.to_owned(),
            },
        }
    }

    #[test]
    fn accept_all_mode_returns_default_identity() {
        let service = Service::from_config(&default_config());

        let user = service.verify_token("any-token-value").unwrap();
        assert_eq!(user.id(), DEFAULT_USER_ID);
    }

    #[test]
    fn accept_all_mode_rejects_empty_token() {
        let service = Service::from_config(&default_config());

        assert_eq!(service.verify_token(""), Err(RejectReason::Malformed));
    }

    #[test]
    fn static_tokens_mode_returns_mapped_identity() {
        let cfg = StaticVerifierConfig {
            mode: VerifierMode::StaticTokens,
            tokens: vec![mapping("abc123", "u_1"), mapping("def456", "u_2")],
            ..default_config()
        };

        let service = Service::from_config(&cfg);

        assert_eq!(service.verify_token("abc123").unwrap().id(), "u_1");
        assert_eq!(service.verify_token("def456").unwrap().id(), "u_2");
    }

    #[test]
    fn static_tokens_mode_rejects_unknown_token() {
        let cfg = StaticVerifierConfig {
            mode: VerifierMode::StaticTokens,
            tokens: vec![mapping("known-token", "u_1")],
            ..default_config()
        };

        let service = Service::from_config(&cfg);

        assert_eq!(
            service.verify_token("unknown-token"),
            Err(RejectReason::Unknown)
        );
    }

    #[test]
    fn revoked_token_is_refused_even_if_mapped() {
        let cfg = StaticVerifierConfig {
            mode: VerifierMode::StaticTokens,
            tokens: vec![mapping("leaked", "u_1")],
            revoked: vec!["leaked".to_owned()],
            ..default_config()
        };

        let service = Service::from_config(&cfg);

        assert_eq!(service.verify_token("leaked"), Err(RejectReason::Revoked));
    }

    #[test]
    fn revoked_token_is_refused_in_accept_all_mode() {
        let cfg = StaticVerifierConfig {
            revoked: vec!["leaked".to_owned()],
            ..default_config()
        };

        let service = Service::from_config(&cfg);

        assert_eq!(service.verify_token("leaked"), Err(RejectReason::Revoked));
        assert!(service.verify_token("fine").is_ok());
    }
}
