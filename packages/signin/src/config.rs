//! # Form configuration: `phone_auth.toml`
//!
//! Deployment knobs for the sign-in form, read from a small TOML file
//! (filename: [`FormConfig::filename`] = `"phone_auth.toml"`).
//!
//! ## Structure
//!
//! ```toml
//! [verify]
//! endpoint = "/api/verify"              # absolute URL, or a path on the page origin
//! base_url = "http://localhost:8080"    # origin used when no page origin is known
//!
//! [focus]
//! submit_delay_ms = 100                 # delay before focusing submit after the last cell
//!
//! [ui]
//! default_language = "en"
//! privacy_url = "#"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`FormConfig`] | Top-level config with TOML (de)serialisation, endpoint resolution and the canonical filename. |
//! | [`VerifyConfig`] | Where the code verification request goes. |
//! | [`FocusConfig`] | Timing of the deferred focus move to the submit button. |
//! | [`UiConfig`] | Initial language and the privacy policy link. |
//!
//! Every field has a default, so a missing or empty file is equivalent to the
//! default configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::content::Language;

/// Top-level configuration stored in `phone_auth.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct FormConfig {
    #[serde(default)]
    pub verify: VerifyConfig,
    #[serde(default)]
    pub focus: FocusConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct VerifyConfig {
    #[serde(default = "default_endpoint")]
    pub endpoint: String,
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_endpoint() -> String {
    "/api/verify".to_string()
}

fn default_base_url() -> String {
    "http://localhost:8080".to_string()
}

impl Default for VerifyConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FocusConfig {
    /// Milliseconds to wait before focusing the submit button once the last
    /// code cell is filled.
    #[serde(default = "default_submit_delay")]
    pub submit_delay_ms: u64,
}

fn default_submit_delay() -> u64 {
    100
}

impl Default for FocusConfig {
    fn default() -> Self {
        Self {
            submit_delay_ms: default_submit_delay(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default)]
    pub default_language: Language,
    #[serde(default = "default_privacy_url")]
    pub privacy_url: String,
}

fn default_privacy_url() -> String {
    "#".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            default_language: Language::default(),
            privacy_url: default_privacy_url(),
        }
    }
}

impl FormConfig {
    /// Builder method to point verification at another endpoint.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.verify.endpoint = endpoint.into();
        self
    }

    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "phone_auth.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    pub fn submit_focus_delay(&self) -> Duration {
        Duration::from_millis(self.focus.submit_delay_ms)
    }

    /// Absolute URL of the verification endpoint.
    ///
    /// A relative endpoint is joined to `origin` (the page the form is served
    /// from) or, without one, to `verify.base_url`.
    pub fn verify_url(&self, origin: Option<&str>) -> String {
        let endpoint = self.verify.endpoint.trim();
        if endpoint.starts_with("http://") || endpoint.starts_with("https://") {
            return endpoint.to_string();
        }
        let base = origin.unwrap_or(self.verify.base_url.as_str());
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_file_is_default() {
        let config = FormConfig::from_toml("").unwrap();
        assert_eq!(config, FormConfig::default());
        assert_eq!(config.verify.endpoint, "/api/verify");
        assert_eq!(config.submit_focus_delay(), Duration::from_millis(100));
        assert_eq!(config.ui.default_language, Language::En);
    }

    #[test]
    fn test_partial_file() {
        let config = FormConfig::from_toml(
            r#"
            [focus]
            submit_delay_ms = 250

            [ui]
            default_language = "da"
            "#,
        )
        .unwrap();

        assert_eq!(config.submit_focus_delay(), Duration::from_millis(250));
        assert_eq!(config.ui.default_language, Language::Da);
        assert_eq!(config.ui.privacy_url, "#");
        assert_eq!(config.verify, VerifyConfig::default());
    }

    #[test]
    fn test_toml_roundtrip() {
        let config = FormConfig::default().with_endpoint("https://auth.example.com/verify");
        let text = config.to_toml().unwrap();
        assert_eq!(FormConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn test_unknown_language_is_rejected() {
        assert!(FormConfig::from_toml("[ui]\ndefault_language = \"xx\"").is_err());
    }

    #[test]
    fn test_verify_url() {
        let config = FormConfig::default();
        assert_eq!(config.verify_url(None), "http://localhost:8080/api/verify");
        assert_eq!(
            config.verify_url(Some("https://signin.example.com/")),
            "https://signin.example.com/api/verify"
        );

        let absolute = config.with_endpoint("https://auth.example.com/verify");
        assert_eq!(
            absolute.verify_url(Some("https://signin.example.com")),
            "https://auth.example.com/verify"
        );
    }
}
