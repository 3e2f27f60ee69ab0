//! # Dashboard configuration: `dashboard.toml`
//!
//! The web binary embeds a `dashboard.toml` at build time and parses it with
//! [`DashboardConfig::from_toml`]. Every section is optional, so an empty file
//! is equivalent to [`DashboardConfig::default`].
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:3000"
//! timeout_secs = 30
//!
//! [ui]
//! page_size = 10
//! toast_duration_secs = 5
//!
//! [auth]
//! token_key = "token"
//! ```
//!
//! The default API base URL can be baked in at compile time through the
//! `DASHBOARD_API_URL` environment variable.

use serde::{Deserialize, Serialize};
use thiserror::Error;

const FALLBACK_API_URL: &str = "http://localhost:3000";

/// Errors raised while loading the configuration file.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid dashboard.toml: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration stored in `dashboard.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
}

/// Remote REST API settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to.
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Request timeout. Ignored in the browser, where fetch has no timeout knob.
    #[serde(default = "default_timeout")]
    pub timeout_secs: u64,
}

/// Presentation settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Rows per table page.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// How long a toast stays on screen.
    #[serde(default = "default_toast_duration")]
    pub toast_duration_secs: u64,
}

/// Where the bearer token lives on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    #[serde(default = "default_token_key")]
    pub token_key: String,
}

fn default_base_url() -> String {
    option_env!("DASHBOARD_API_URL")
        .unwrap_or(FALLBACK_API_URL)
        .to_string()
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> usize {
    10
}

fn default_toast_duration() -> u64 {
    5
}

fn default_token_key() -> String {
    "token".to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            toast_duration_secs: default_toast_duration(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: default_token_key(),
        }
    }
}

impl DashboardConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "dashboard.toml"
    }

    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.api.base_url = url.into();
        self
    }

    /// Builder method to change the table page size.
    pub fn with_page_size(mut self, page_size: usize) -> Self {
        self.ui.page_size = page_size;
        self
    }

    /// Parse and validate a TOML document.
    pub fn from_toml(s: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(s)?;
        config.validate()?;
        Ok(config)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.ui.page_size == 0 {
            return Err(ConfigError::Invalid("ui.page_size must be at least 1".into()));
        }
        if self.api.base_url.trim().is_empty() {
            return Err(ConfigError::Invalid("api.base_url must not be empty".into()));
        }
        if self.auth.token_key.is_empty() {
            return Err(ConfigError::Invalid("auth.token_key must not be empty".into()));
        }
        Ok(())
    }

    /// Base URL without a trailing slash, ready for `format!("{base}{path}")`.
    pub fn api_base(&self) -> &str {
        self.api.base_url.trim_end_matches('/')
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_document_is_default() {
        let config = DashboardConfig::from_toml("").unwrap();
        assert_eq!(config, DashboardConfig::default());
        assert_eq!(config.ui.page_size, 10);
        assert_eq!(config.ui.toast_duration_secs, 5);
        assert_eq!(config.auth.token_key, "token");
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = DashboardConfig::from_toml(
            r#"
            [api]
            base_url = "https://api.example.com/"

            [ui]
            page_size = 25
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "https://api.example.com/");
        assert_eq!(config.api_base(), "https://api.example.com");
        assert_eq!(config.api.timeout_secs, 30);
        assert_eq!(config.ui.page_size, 25);
        assert_eq!(config.ui.toast_duration_secs, 5);
    }

    #[test]
    fn zero_page_size_is_rejected() {
        let err = DashboardConfig::from_toml("[ui]\npage_size = 0\n").unwrap_err();
        assert!(matches!(err, ConfigError::Invalid(_)));
    }

    #[test]
    fn malformed_toml_is_a_parse_error() {
        let err = DashboardConfig::from_toml("[ui\npage_size = ").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn toml_round_trip() {
        let config = DashboardConfig::default()
            .with_base_url("http://10.0.0.5:3000")
            .with_page_size(20);
        let text = config.to_toml().unwrap();
        assert_eq!(DashboardConfig::from_toml(&text).unwrap(), config);
    }
}
