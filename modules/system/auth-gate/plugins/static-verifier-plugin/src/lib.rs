#![cfg_attr(coverage_nightly, feature(coverage_attribute))]
//! Static Credential Verifier
//!
//! This plugin provides static token-to-identity mapping for development and testing.
//!
//! ## Modes
//!
//! - **`accept_all`** (default): Accepts any non-empty token, returns the configured default identity.
//!
//! - **`static_tokens`**: Maps specific tokens to specific identities. Useful for E2E tests
//!   with distinct users.
//!
//! Tokens listed under `revoked` are refused in both modes.
//!
//! ## Configuration
//!
//! ```yaml
//! verifier:
//!   kind: static
//!   mode: static_tokens
//!   tokens:
//!     - token: "abc123"
//!       identity:
//!         user_id: "u_1"
//!   revoked: ["leaked-token"]
//! ```

pub mod config;
pub mod domain;

pub use config::StaticVerifierConfig;
pub use domain::Service as StaticVerifier;
