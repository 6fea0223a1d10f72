//! # Application configuration: `bridal.toml`
//!
//! The front end reads a small TOML file embedded at build time (filename:
//! [`AppConfig::filename`] = `"bridal.toml"`). It tells the client where the
//! backend lives and how to configure the Razorpay checkout.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "http://localhost:5000"
//!
//! [auth]
//! google_client_id = ""   # empty hides the Google button
//!
//! [payment]
//! razorpay_key_id = "rzp_test_xxx"
//! currency = "INR"
//! merchant_name = "Bridal Studio"
//!
//! [ui]
//! page_size = 9
//! face_models_url = "/models"
//! ```
//!
//! ## Types
//!
//! | Struct | Purpose |
//! |--------|---------|
//! | [`AppConfig`] | Top-level config with TOML (de)serialisation and the canonical filename. |
//! | [`ApiConfig`] | Backend origin used by every REST call. |
//! | [`AuthConfig`] | Google Identity Services client id. |
//! | [`PaymentConfig`] | Public Razorpay key, currency and merchant name shown in checkout. |
//! | [`UiConfig`] | List page size and where the face-landmark model files are served from. |
//!
//! All structs derive `Default` so that a missing or empty file is equivalent
//! to the default configuration.

use serde::{Deserialize, Serialize};

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

/// Top-level configuration stored in `bridal.toml`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub auth: AuthConfig,
    #[serde(default)]
    pub payment: PaymentConfig,
    #[serde(default)]
    pub ui: UiConfig,
}

/// Backend connection settings.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Origin of the REST backend, without a trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Empty disables Google sign-in.
    #[serde(default)]
    pub google_client_id: String,
}

/// Checkout settings. Only the public key id lives on the client.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PaymentConfig {
    #[serde(default)]
    pub razorpay_key_id: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default = "default_merchant_name")]
    pub merchant_name: String,
}

fn default_currency() -> String {
    "INR".to_string()
}

fn default_merchant_name() -> String {
    "Bridal Studio".to_string()
}

impl Default for PaymentConfig {
    fn default() -> Self {
        Self {
            razorpay_key_id: String::new(),
            currency: default_currency(),
            merchant_name: default_merchant_name(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UiConfig {
    /// Items per page in catalog and admin lists.
    #[serde(default = "default_page_size")]
    pub page_size: usize,
    /// Directory holding the face-landmark model weights.
    #[serde(default = "default_face_models_url")]
    pub face_models_url: String,
}

fn default_page_size() -> usize {
    9
}

fn default_face_models_url() -> String {
    "/models".to_string()
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            page_size: default_page_size(),
            face_models_url: default_face_models_url(),
        }
    }
}

impl AppConfig {
    /// The well-known filename for the config file.
    pub fn filename() -> &'static str {
        "bridal.toml"
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Replace the backend origin, trimming any trailing slash.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Parse the embedded config, then apply the `BRIDAL_API_URL` build-time override.
    ///
    /// A malformed file falls back to defaults so the app still boots.
    pub fn load(embedded: &str) -> Self {
        let config = Self::from_toml(embedded).unwrap_or_default();
        match option_env!("BRIDAL_API_URL") {
            Some(url) if !url.trim().is_empty() => config.with_base_url(url),
            _ => config,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_is_default() {
        let config = AppConfig::from_toml("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.api.base_url, "http://localhost:5000");
        assert_eq!(config.payment.currency, "INR");
        assert_eq!(config.ui.page_size, 9);
        assert_eq!(config.ui.face_models_url, "/models");
        assert!(config.auth.google_client_id.is_empty());
    }

    #[test]
    fn partial_sections_keep_defaults() {
        let config = AppConfig::from_toml(
            r#"
            [payment]
            razorpay_key_id = "rzp_test_123"
            "#,
        )
        .unwrap();
        assert_eq!(config.payment.razorpay_key_id, "rzp_test_123");
        assert_eq!(config.payment.merchant_name, "Bridal Studio");
        assert_eq!(config.api, ApiConfig::default());
    }

    #[test]
    fn toml_roundtrip() {
        let config = AppConfig::default().with_base_url("https://api.example.com/");
        let text = config.to_toml().unwrap();
        assert_eq!(AppConfig::from_toml(&text).unwrap(), config);
        assert_eq!(config.api.base_url, "https://api.example.com");
    }

    #[test]
    fn malformed_file_loads_defaults() {
        let config = AppConfig::from_toml("[ui]\npage_size = \"many\"");
        assert!(config.is_err());
        assert_eq!(AppConfig::load("[ui]\npage_size = \"many\"").ui.page_size, 9);
    }
}
