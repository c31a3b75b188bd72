//! Axum integration: the gating middleware and the identity extractor.

use std::sync::Arc;

use auth_gate_sdk::{CredentialVerifier, UserIdentity};
use axum::Router;
use axum::extract::{FromRequestParts, Request, State};
use axum::http::request::Parts;
use axum::http::{HeaderMap, Method, header};
use axum::middleware::{Next, from_fn, from_fn_with_state};
use axum::response::{IntoResponse, Response};

use crate::config::{AuthGateConfig, ConfigError};
use crate::domain::{AuthError, AuthGate, AuthResult};

/// How protected routes are guarded.
#[derive(Clone)]
pub enum GateMode {
    /// Every request goes through the gate.
    Enforced(Arc<AuthGate>),
    /// Every request runs as the given identity. Development only.
    Disabled(UserIdentity),
}

impl GateMode {
    /// Pick the mode from configuration. The verifier is only used when auth is enforced.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the gate settings are invalid, or if auth is
    /// disabled without a development identity.
    pub fn from_config(
        verifier: Arc<dyn CredentialVerifier>,
        cfg: &AuthGateConfig,
    ) -> Result<Self, ConfigError> {
        if cfg.auth_disabled {
            if cfg.dev_user_id.trim().is_empty() {
                return Err(ConfigError::EmptyDevUser);
            }
            return Ok(Self::Disabled(UserIdentity::new(cfg.dev_user_id.clone())));
        }
        Ok(Self::Enforced(Arc::new(AuthGate::new(verifier, cfg)?)))
    }
}

/// Guard all routes currently registered on `router`.
///
/// Uses `route_layer`, so routes merged afterwards (health probes) stay public
/// and unmatched paths still produce 404 rather than 401.
#[must_use]
pub fn protect<S>(router: Router<S>, mode: GateMode) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    match mode {
        GateMode::Enforced(gate) => router.route_layer(from_fn_with_state(gate, require_auth)),
        GateMode::Disabled(user) => {
            tracing::warn!(
                user.id = %user.id(),
                "Auth gate is DISABLED: every request runs as a fixed development identity. \
                 Do NOT use this mode in production."
            );
            router.route_layer(from_fn(move |mut req: Request, next: Next| {
                let user = user.clone();
                async move {
                    req.extensions_mut().insert(user);
                    next.run(req).await
                }
            }))
        }
    }
}

/// Authentication middleware.
///
/// For each request:
/// 1. Skips CORS preflight requests
/// 2. Runs the gate against the request headers
/// 3. On success inserts [`UserIdentity`] into request extensions and continues
/// 4. On failure answers with the gate's status and `{ "error": ... }`; the handler never runs
pub async fn require_auth(
    State(gate): State<Arc<AuthGate>>,
    mut req: Request,
    next: Next,
) -> Response {
    if is_preflight_request(req.method(), req.headers()) {
        return next.run(req).await;
    }

    match gate.authenticate_request(req.headers()).await {
        AuthResult::Authenticated { user } => {
            req.extensions_mut().insert(user);
            next.run(req).await
        }
        AuthResult::Error(err) => err.into_response(),
    }
}

/// Extractor for the authenticated caller - requires the gate to have run.
#[derive(Debug, Clone)]
pub struct AuthUser(pub UserIdentity);

impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<UserIdentity>()
            .cloned()
            .map(AuthUser)
            .ok_or_else(|| {
                tracing::error!("UserIdentity not found - auth gate middleware not configured");
                AuthError::internal()
            })
    }
}

/// Check if this is a CORS preflight request
///
/// Preflight requests are OPTIONS requests with:
/// - Origin header present
/// - Access-Control-Request-Method header present
fn is_preflight_request(method: &Method, headers: &HeaderMap) -> bool {
    method == Method::OPTIONS
        && headers.contains_key(header::ORIGIN)
        && headers.contains_key(header::ACCESS_CONTROL_REQUEST_METHOD)
}
