//! Auth Gate
//!
//! Every protected route passes through this gate. For each request it:
//! 1. Extracts a credential from the configured header or cookie
//! 2. Hands it to the injected [`CredentialVerifier`](auth_gate_sdk::CredentialVerifier)
//!    under a bounded timeout
//! 3. Returns an [`AuthResult`]: either the caller's identity or a
//!    status-bearing [`AuthError`]
//!
//! The gate never aborts the request pipeline itself. The axum
//! [`middleware::require_auth`] layer turns an [`AuthError`] into a
//! `{ "error": ... }` JSON response; handlers read the identity through
//! [`middleware::AuthUser`].
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod config;
pub mod domain;
pub mod middleware;
pub mod response;

pub use config::{AuthGateConfig, ConfigError, CredentialSourceConfig};
pub use domain::{
    AuthError, AuthErrorKind, AuthGate, AuthResult, CredentialSource, is_auth_error,
};
pub use middleware::{AuthUser, GateMode, protect};
pub use response::ErrorBody;
