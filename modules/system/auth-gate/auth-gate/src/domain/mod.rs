//! Domain layer for the auth gate.

pub mod extract;
pub mod result;
pub mod service;

pub use extract::CredentialSource;
pub use result::{AuthError, AuthErrorKind, AuthResult, is_auth_error};
pub use service::AuthGate;
