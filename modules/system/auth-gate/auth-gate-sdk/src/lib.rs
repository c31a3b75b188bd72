//! Auth Gate SDK
//!
//! This crate provides the contract between the auth gate and the identity
//! verifiers it delegates to:
//!
//! - [`CredentialVerifier`] - Trait every verifier implementation provides
//! - [`Credential`] - Opaque credential extracted from a request
//! - [`UserIdentity`] - Identity resolved from a credential
//! - [`VerifierError`] / [`RejectReason`] - Verifier failure taxonomy
//!
//! ## Usage
//!
//! ```ignore
//! use auth_gate_sdk::{Credential, CredentialVerifier};
//!
//! let verifier: Arc<dyn CredentialVerifier> = build_verifier(&cfg)?;
//! let user = verifier.verify(&Credential::new("abc123")).await?;
//! println!("{}", user.id());
//! ```
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

pub mod api;
pub mod error;
pub mod models;

// Re-export main types at crate root
pub use api::CredentialVerifier;
pub use error::{RejectReason, VerifierError};
pub use models::{Credential, UserIdentity};
