//! Router assembly: verifier, gate, protected routes, and HTTP middleware.

use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use auth_gate::{GateMode, protect};
use auth_gate_sdk::CredentialVerifier;
use axum::http::{Request, StatusCode};
use axum::routing::get;
use axum::{Json, Router};
use invoice_templates::{InMemoryTemplateStore, Service};
use jwt_verifier_plugin::JwtVerifier;
use serde_json::json;
use static_verifier_plugin::StaticVerifier;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::timeout::TimeoutLayer;
use tower_http::trace::TraceLayer;
use tracing::field::Empty;

use crate::config::{AppConfig, VerifierConfig};

/// Construct the configured credential verifier.
///
/// # Errors
///
/// Returns an error if the verifier configuration is invalid.
pub fn build_verifier(cfg: &VerifierConfig) -> anyhow::Result<Arc<dyn CredentialVerifier>> {
    Ok(match cfg {
        VerifierConfig::Static(static_cfg) => Arc::new(StaticVerifier::from_config(static_cfg)),
        VerifierConfig::Jwt(jwt_cfg) => {
            Arc::new(JwtVerifier::from_config(jwt_cfg).context("invalid jwt verifier config")?)
        }
    })
}

/// Build the full application router from configuration.
///
/// # Errors
///
/// Returns an error if the verifier or gate configuration is invalid.
pub fn build_router(cfg: &AppConfig) -> anyhow::Result<Router> {
    let verifier = build_verifier(&cfg.verifier)?;
    build_router_with(cfg, verifier)
}

/// Build the router around an already constructed verifier.
///
/// # Errors
///
/// Returns an error if the gate configuration is invalid or its timeouts
/// conflict with the request timeout.
pub fn build_router_with(
    cfg: &AppConfig,
    verifier: Arc<dyn CredentialVerifier>,
) -> anyhow::Result<Router> {
    cfg.validate().context("invalid server config")?;
    let mode = GateMode::from_config(verifier, &cfg.auth).context("invalid auth config")?;

    let templates = Arc::new(Service::new(
        Arc::new(InMemoryTemplateStore::new()),
        cfg.templates.clone(),
    ));

    let router = protect(invoice_templates::router(templates), mode)
        .route("/health", get(health))
        .layer(RequestBodyLimitLayer::new(cfg.server.body_limit_bytes))
        .layer(TimeoutLayer::with_status_code(
            StatusCode::GATEWAY_TIMEOUT,
            Duration::from_secs(cfg.server.request_timeout_secs),
        ))
        .layer(
            TraceLayer::new_for_http().make_span_with(|req: &Request<axum::body::Body>| {
                tracing::info_span!(
                    "http_request",
                    method = %req.method(),
                    uri = %req.uri().path(),
                    version = ?req.version(),
                    status = Empty,
                    latency_ms = Empty,
                )
            })
            .on_response(
                |res: &axum::http::Response<axum::body::Body>,
                 latency: Duration,
                 span: &tracing::Span| {
                    span.record("status", res.status().as_u16());
                    span.record("latency_ms", latency.as_millis());
                },
            ),
        );

    Ok(router)
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}
