//! Error types for credential verification.

use std::fmt;

use thiserror::Error;

/// Errors a verifier can report.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The credential was looked at and refused.
    #[error("credential rejected: {0}")]
    Invalid(RejectReason),

    /// The verifier could not decide (backing store unreachable, crypto fault, timeout).
    #[error("verifier unavailable: {0}")]
    Unavailable(String),
}

impl VerifierError {
    #[must_use]
    pub fn unavailable(detail: impl Into<String>) -> Self {
        Self::Unavailable(detail.into())
    }
}

/// Why a credential was refused.
///
/// Deliberately coarse: the [`fmt::Display`] text is returned to clients, so
/// it must never carry lookup details.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RejectReason {
    Expired,
    Malformed,
    Revoked,
    /// Not recognized, bad signature, or wrong audience.
    Unknown,
}

impl fmt::Display for RejectReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Expired => f.write_str("credential expired"),
            Self::Malformed => f.write_str("malformed credential"),
            Self::Revoked => f.write_str("credential revoked"),
            Self::Unknown => f.write_str("invalid credential"),
        }
    }
}
