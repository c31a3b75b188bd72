//! Credential extraction from request headers and cookies.

use auth_gate_sdk::Credential;
use axum::http::header::{COOKIE, HeaderName};
use axum::http::HeaderMap;

use crate::config::{ConfigError, CredentialSourceConfig};

/// Resolved credential location.
///
/// The header is consulted first; the cookie only when the header yields nothing.
#[derive(Debug, Clone)]
pub struct CredentialSource {
    header: HeaderName,
    scheme: Option<String>,
    cookie: Option<String>,
}

impl CredentialSource {
    /// Build from configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidHeaderName`] if the header name is not a valid HTTP header.
    pub fn from_config(cfg: &CredentialSourceConfig) -> Result<Self, ConfigError> {
        let header = HeaderName::try_from(cfg.header.to_ascii_lowercase()).map_err(|source| {
            ConfigError::InvalidHeaderName {
                name: cfg.header.clone(),
                source,
            }
        })?;

        Ok(Self {
            header,
            scheme: cfg.scheme.clone().filter(|s| !s.trim().is_empty()),
            cookie: cfg.cookie.clone().filter(|c| !c.trim().is_empty()),
        })
    }

    /// Pull the credential out of the request headers, if any.
    #[must_use]
    pub fn extract(&self, headers: &HeaderMap) -> Option<Credential> {
        self.header_value(headers)
            .or_else(|| self.cookie_value(headers))
            .map(Credential::new)
    }

    fn header_value<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        let value = headers.get(&self.header)?.to_str().ok()?.trim();
        let token = match &self.scheme {
            Some(scheme) => strip_scheme(value, scheme)?,
            None => value,
        };
        (!token.is_empty()).then_some(token)
    }

    fn cookie_value<'a>(&self, headers: &'a HeaderMap) -> Option<&'a str> {
        let name = self.cookie.as_deref()?;
        headers
            .get_all(COOKIE)
            .iter()
            .filter_map(|v| v.to_str().ok())
            .flat_map(|v| v.split(';'))
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(key, _)| key.trim() == name)
            .map(|(_, value)| value.trim().trim_matches('"'))
            .filter(|value| !value.is_empty())
    }
}

/// `"Bearer abc"` -> `"abc"`; scheme comparison is case-insensitive.
fn strip_scheme<'a>(value: &'a str, scheme: &str) -> Option<&'a str> {
    let (prefix, rest) = value.split_once(' ')?;
    prefix.eq_ignore_ascii_case(scheme).then(|| rest.trim())
}
