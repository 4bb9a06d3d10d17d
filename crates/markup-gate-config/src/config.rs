// crates/markup-gate-config/src/config.rs
// ============================================================================
// Module: Markup Gate Configuration
// Description: Configuration model, TOML loading, and validation.
// Purpose: Fail fast on malformed or inconsistent settings.
// Dependencies: markup-gate-core, serde, toml
// ============================================================================

//! ## Overview
//! The configuration file carries the validation service endpoint, the
//! transport retry budget, the HTTP session limits, and the selector map.
//! Selector keys keep the legacy camelCase spelling under the `selectors`
//! table. Every field has a default targeting the W3C validator's
//! input-by-text form, so an absent file section still yields a runnable
//! configuration.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::env;
use std::fs;
use std::path::Path;
use std::path::PathBuf;

use markup_gate_core::RetryPolicy;
use markup_gate_core::SelectorMap;
use markup_gate_core::SelectorRole;
use serde::Deserialize;
use serde::Serialize;
use thiserror::Error;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Default configuration filename when no path is specified.
const DEFAULT_CONFIG_NAME: &str = "markup-gate.toml";
/// Environment variable used to override the config path.
pub(crate) const CONFIG_ENV_VAR: &str = "MARKUP_GATE_CONFIG";
/// Maximum configuration file size in bytes.
pub(crate) const MAX_CONFIG_FILE_SIZE: usize = 1024 * 1024;
/// Maximum length of a selector expression.
pub(crate) const MAX_SELECTOR_LENGTH: usize = 1024;
/// Maximum length of the user agent string.
pub(crate) const MAX_USER_AGENT_LENGTH: usize = 256;
/// Default validator entry URL (input-by-text form).
const DEFAULT_VALIDATOR_URL: &str = "https://validator.w3.org/#validate_by_input";
/// Default per-attempt HTTP timeout in milliseconds.
const DEFAULT_TIMEOUT_MS: u64 = 30_000;
/// Default maximum response size in bytes.
const DEFAULT_MAX_RESPONSE_BYTES: usize = 4 * 1024 * 1024;

// ============================================================================
// SECTION: Configuration Model
// ============================================================================

/// Root configuration for the markup gate.
///
/// # Invariants
/// - `load` returns only validated configurations.
/// - All four selector expressions are non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MarkupGateConfig {
    /// Validation service endpoint and retry budget.
    #[serde(default)]
    pub validator: ValidatorConfig,
    /// HTTP session limits.
    #[serde(default)]
    pub session: SessionConfig,
    /// Selector expressions for the service's page elements.
    #[serde(default)]
    pub selectors: SelectorMap,
}

/// Validation service endpoint settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ValidatorConfig {
    /// Entry URL of the input-by-text validation form.
    #[serde(default = "default_validator_url")]
    pub url: String,
    /// Transport-fault retry budget.
    #[serde(default)]
    pub retry: RetryPolicy,
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            url: default_validator_url(),
            retry: RetryPolicy::default(),
        }
    }
}

/// HTTP session limits for the bundled session driver.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct SessionConfig {
    /// Per-attempt request timeout in milliseconds.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// User agent string for outbound requests.
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Maximum response size allowed, in bytes.
    #[serde(default = "default_max_response_bytes")]
    pub max_response_bytes: usize,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            timeout_ms: default_timeout_ms(),
            user_agent: default_user_agent(),
            max_response_bytes: default_max_response_bytes(),
        }
    }
}

// ============================================================================
// SECTION: Loading and Validation
// ============================================================================

impl MarkupGateConfig {
    /// Loads and validates configuration from the given path.
    ///
    /// When `path` is `None`, the `MARKUP_GATE_CONFIG` environment variable
    /// is consulted, then the default filename in the working directory. A
    /// missing file at the default location yields the default config; an
    /// explicitly named file must exist.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] on I/O failures, parse errors, or invalid
    /// configuration content.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let (resolved, explicit) = resolve_path(path);
        if !explicit && !resolved.exists() {
            let config = Self::default();
            config.validate()?;
            return Ok(config);
        }
        let bytes = fs::read(&resolved).map_err(|err| ConfigError::Io(err.to_string()))?;
        if bytes.len() > MAX_CONFIG_FILE_SIZE {
            return Err(ConfigError::Invalid("config file exceeds size limit".to_string()));
        }
        let content = std::str::from_utf8(&bytes)
            .map_err(|_| ConfigError::Invalid("config file must be utf-8".to_string()))?;
        let config: Self =
            toml::from_str(content).map_err(|err| ConfigError::Parse(err.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the configuration for internal consistency.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when configuration is invalid.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validator.validate()?;
        self.session.validate()?;
        validate_selectors(&self.selectors)?;
        Ok(())
    }
}

impl ValidatorConfig {
    /// Validates the endpoint URL and retry budget.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when the URL scheme is not http(s) or the
    /// retry budget is zero.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.url.starts_with("https://") || self.url.starts_with("http://")) {
            return Err(ConfigError::Invalid(format!(
                "validator.url must be http(s), got '{}'",
                self.url
            )));
        }
        if self.retry.max_attempts == 0 {
            return Err(ConfigError::Invalid(
                "validator.retry.max_attempts must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

impl SessionConfig {
    /// Validates the session limits.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] when a limit is zero or the user agent is
    /// empty or oversized.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.timeout_ms == 0 {
            return Err(ConfigError::Invalid("session.timeout_ms must be at least 1".to_string()));
        }
        if self.max_response_bytes == 0 {
            return Err(ConfigError::Invalid(
                "session.max_response_bytes must be at least 1".to_string(),
            ));
        }
        if self.user_agent.is_empty() || self.user_agent.len() > MAX_USER_AGENT_LENGTH {
            return Err(ConfigError::Invalid(
                "session.user_agent must be non-empty and at most 256 bytes".to_string(),
            ));
        }
        Ok(())
    }
}

/// Validates that every selector role has a usable expression.
fn validate_selectors(selectors: &SelectorMap) -> Result<(), ConfigError> {
    for role in [
        SelectorRole::SourceTextArea,
        SelectorRole::SubmitButton,
        SelectorRole::Warning,
        SelectorRole::Errors,
    ] {
        let expression = selectors.selector(role);
        if expression.trim().is_empty() {
            return Err(ConfigError::Invalid(format!("selector for {role} must be non-empty")));
        }
        if expression.len() > MAX_SELECTOR_LENGTH {
            return Err(ConfigError::Invalid(format!("selector for {role} exceeds length limit")));
        }
    }
    Ok(())
}

// ============================================================================
// SECTION: Errors
// ============================================================================

/// Configuration loading and validation errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// I/O failure while reading configuration.
    #[error("config io error: {0}")]
    Io(String),
    /// TOML parsing error.
    #[error("config parse error: {0}")]
    Parse(String),
    /// Invalid configuration data.
    #[error("invalid config: {0}")]
    Invalid(String),
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Resolves the config path; the flag marks explicitly requested paths.
fn resolve_path(path: Option<&Path>) -> (PathBuf, bool) {
    if let Some(path) = path {
        return (path.to_path_buf(), true);
    }
    if let Ok(env_path) = env::var(CONFIG_ENV_VAR) {
        return (PathBuf::from(env_path), true);
    }
    (PathBuf::from(DEFAULT_CONFIG_NAME), false)
}

/// Default validator entry URL.
fn default_validator_url() -> String {
    DEFAULT_VALIDATOR_URL.to_string()
}

/// Default per-attempt timeout.
const fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

/// Default user agent string.
fn default_user_agent() -> String {
    concat!("markup-gate/", env!("CARGO_PKG_VERSION")).to_string()
}

/// Default response size limit.
const fn default_max_response_bytes() -> usize {
    DEFAULT_MAX_RESPONSE_BYTES
}
