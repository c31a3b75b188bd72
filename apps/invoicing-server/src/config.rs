//! Layered server configuration.
//!
//! Sources, lowest to highest precedence:
//! 1. Built-in defaults
//! 2. Optional YAML file passed with `--config`
//! 3. Environment variables prefixed `INVOICING__`, nested with `__`
//!    (e.g. `INVOICING__SERVER__BIND_ADDR=0.0.0.0:8080`)

use std::path::Path;

use anyhow::Context;
use auth_gate::AuthGateConfig;
use figment::Figment;
use figment::providers::{Env, Format, Yaml};
use invoice_templates::ServiceConfig;
use jwt_verifier_plugin::JwtVerifierConfig;
use serde::{Deserialize, Serialize};
use static_verifier_plugin::StaticVerifierConfig;

pub const ENV_PREFIX: &str = "INVOICING__";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub logging: LoggingConfig,
    pub auth: AuthGateConfig,
    pub verifier: VerifierConfig,
    pub templates: ServiceConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct ServerConfig {
    pub bind_addr: String,
    /// Whole-request deadline; exceeding it answers 504.
    pub request_timeout_secs: u64,
    pub body_limit_bytes: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:8087".to_owned(),
            request_timeout_secs: 30,
            body_limit_bytes: 1024 * 1024,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct LoggingConfig {
    /// Default filter directive. `RUST_LOG` overrides it when set.
    pub level: String,
    /// Emit JSON lines instead of human-readable output.
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_owned(),
            json: false,
        }
    }
}

/// Which credential verifier backs the gate.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum VerifierConfig {
    Static(StaticVerifierConfig),
    Jwt(JwtVerifierConfig),
}

impl Default for VerifierConfig {
    fn default() -> Self {
        Self::Static(StaticVerifierConfig::default())
    }
}

impl AppConfig {
    /// Load configuration from defaults, an optional YAML file and the environment.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing or any source fails to deserialize.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        Self::load_with(path, Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Cross-section checks that serde defaults cannot express.
    ///
    /// The gate's verifier timeout must fire strictly before the whole-request
    /// timeout, otherwise a hung verifier surfaces as 504 instead of 500.
    ///
    /// # Errors
    ///
    /// Returns an error if the request timeout is zero or does not exceed the
    /// verifier timeout.
    pub fn validate(&self) -> anyhow::Result<()> {
        anyhow::ensure!(
            self.server.request_timeout_secs > 0,
            "server.request_timeout_secs must be greater than zero"
        );
        if !self.auth.auth_disabled {
            let request_timeout_ms = self.server.request_timeout_secs.saturating_mul(1000);
            anyhow::ensure!(
                self.auth.verifier_timeout_ms < request_timeout_ms,
                "auth.verifier_timeout_ms ({}) must be less than server.request_timeout_secs ({}s)",
                self.auth.verifier_timeout_ms,
                self.server.request_timeout_secs
            );
        }
        Ok(())
    }

    fn load_with(path: Option<&Path>, env: Env) -> anyhow::Result<Self> {
        let mut figment = Figment::new();
        if let Some(path) = path {
            anyhow::ensure!(path.exists(), "config file not found: {}", path.display());
            figment = figment.merge(Yaml::file(path));
        }
        figment
            .merge(env)
            .extract()
            .context("failed to load configuration")
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use std::io::Write;

    use static_verifier_plugin::config::VerifierMode;

    use super::*;

    fn yaml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".yaml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn no_env() -> Env {
        Env::prefixed("INVOICING_TEST_UNUSED__").split("__")
    }

    #[test]
    fn defaults_without_sources() {
        let cfg = AppConfig::load_with(None, no_env()).unwrap();

        assert_eq!(cfg.server.bind_addr, "127.0.0.1:8087");
        assert_eq!(cfg.logging.level, "info");
        assert!(!cfg.auth.auth_disabled);
        assert!(matches!(
            cfg.verifier,
            VerifierConfig::Static(ref s) if s.mode == VerifierMode::AcceptAll
        ));
    }

    #[test]
    fn yaml_file_overrides_defaults() {
        let file = yaml_file(
            r#"
server:
  bind_addr: "0.0.0.0:9000"
auth:
  verifier_timeout_ms: 250
  credential:
    cookie: null
verifier:
  kind: jwt
  secret: "from-file"
  issuer: "https://auth.invoicing.example"
templates:
  max_name_len: 64
"#,
        );

        let cfg = AppConfig::load_with(Some(file.path()), no_env()).unwrap();

        assert_eq!(cfg.server.bind_addr, "0.0.0.0:9000");
        assert_eq!(cfg.server.request_timeout_secs, 30);
        assert_eq!(cfg.auth.verifier_timeout_ms, 250);
        assert!(cfg.auth.credential.cookie.is_none());
        assert_eq!(cfg.templates.max_name_len, 64);
        match cfg.verifier {
            VerifierConfig::Jwt(jwt) => {
                assert_eq!(jwt.issuer.as_deref(), Some("https://auth.invoicing.example"));
            }
            VerifierConfig::Static(_) => panic!("Expected jwt verifier"),
        }
    }

    #[test]
    fn environment_overrides_file() {
        let file = yaml_file("logging:\n  level: debug\n");

        figment::Jail::expect_with(|jail| {
            jail.set_env("INVOICING_JAIL__LOGGING__JSON", "true");
            jail.set_env("INVOICING_JAIL__LOGGING__LEVEL", "warn");

            let cfg = AppConfig::load_with(
                Some(file.path()),
                Env::prefixed("INVOICING_JAIL__").split("__"),
            )
            .unwrap();

            assert!(cfg.logging.json);
            assert_eq!(cfg.logging.level, "warn");
            Ok(())
        });
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let file = yaml_file("server:\n  bind_address: \"0.0.0.0:1\"\n");

        let err = AppConfig::load_with(Some(file.path()), no_env()).unwrap_err();
        assert!(format!("{err:#}").contains("bind_address"));
    }

    #[test]
    fn defaults_pass_validation() {
        AppConfig::default().validate().unwrap();
    }

    #[test]
    fn zero_request_timeout_is_rejected() {
        let mut cfg = AppConfig::default();
        cfg.server.request_timeout_secs = 0;

        let err = cfg.validate().unwrap_err();
        assert!(err.to_string().contains("request_timeout_secs"));
    }

    #[test]
    fn verifier_timeout_must_be_below_request_timeout() {
        let mut cfg = AppConfig::default();
        cfg.server.request_timeout_secs = 1;
        cfg.auth.verifier_timeout_ms = 5_000;
        assert!(cfg.validate().is_err());

        cfg.auth.verifier_timeout_ms = 1_000;
        assert!(cfg.validate().is_err());

        cfg.auth.verifier_timeout_ms = 999;
        cfg.validate().unwrap();
    }

    #[test]
    fn verifier_timeout_is_ignored_when_auth_disabled() {
        let mut cfg = AppConfig::default();
        cfg.auth.auth_disabled = true;
        cfg.server.request_timeout_secs = 1;
        cfg.auth.verifier_timeout_ms = 5_000;

        cfg.validate().unwrap();
    }

    #[test]
    fn missing_file_is_an_error() {
        let result = AppConfig::load_with(Some(Path::new("/nonexistent/invoicing.yaml")), no_env());
        assert!(result.is_err());
    }
}
