#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! JWT Credential Verifier
//!
//! Validates HS256-signed bearer tokens against a shared secret and maps the
//! `sub` claim to the caller's identity. Stateless: no backing store, so it
//! never reports `Unavailable` for a well-formed configuration.
//!
//! ## Configuration
//!
//! ```yaml
//! verifier:
//!   kind: jwt
//!   secret: "change-me"            # or INVOICING__VERIFIER__SECRET
//!   issuer: "https://auth.invoicing.example"
//!   audience: "invoicing-api"
//!   leeway_seconds: 30
//! ```

pub mod config;
pub mod domain;

pub use config::{JwtConfigError, JwtVerifierConfig};
pub use domain::Service as JwtVerifier;
