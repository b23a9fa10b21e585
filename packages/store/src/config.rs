//! # Client configuration (`fairpadel.toml` format)
//!
//! Settings the web client needs at runtime. The browser has no filesystem,
//! so [`ClientConfig::from_env`] reads the TOML text from the
//! `FAIRPADEL_CONFIG` variable at build time, with `FAIRPADEL_API_URL` as a
//! shortcut for the one setting that differs between deployments.
//!
//! ## Structure
//!
//! ```toml
//! [api]
//! base_url = "https://api.fairpadel.com"
//!
//! [uploads]
//! max_proof_bytes = 5242880   # 5 MB
//!
//! [banners]
//! rotation_secs = 5
//!
//! [autocomplete]
//! max_suggestions = 8
//! ```
//!
//! Every section derives `Default` so a missing or empty file equals the
//! production configuration.

use serde::{Deserialize, Serialize};

pub const DEFAULT_API_URL: &str = "https://api.fairpadel.com";

/// Top-level client configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ClientConfig {
    #[serde(default)]
    pub api: ApiConfig,
    #[serde(default)]
    pub uploads: UploadConfig,
    #[serde(default)]
    pub banners: BannerConfig,
    #[serde(default)]
    pub autocomplete: AutocompleteConfig,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the REST API, without trailing slash.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_API_URL.to_string()
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct UploadConfig {
    /// Maximum payment-proof size in bytes.
    #[serde(default = "default_max_proof_bytes")]
    pub max_proof_bytes: u64,
}

fn default_max_proof_bytes() -> u64 {
    5 * 1024 * 1024
}

impl Default for UploadConfig {
    fn default() -> Self {
        Self {
            max_proof_bytes: default_max_proof_bytes(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BannerConfig {
    /// Carousel auto-advance interval in seconds.
    #[serde(default = "default_rotation_secs")]
    pub rotation_secs: u32,
}

fn default_rotation_secs() -> u32 {
    5
}

impl Default for BannerConfig {
    fn default() -> Self {
        Self {
            rotation_secs: default_rotation_secs(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AutocompleteConfig {
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,
}

fn default_max_suggestions() -> usize {
    8
}

impl Default for AutocompleteConfig {
    fn default() -> Self {
        Self {
            max_suggestions: default_max_suggestions(),
        }
    }
}

impl ClientConfig {
    /// Build-time configuration: the TOML in `FAIRPADEL_CONFIG` if it was
    /// set, otherwise defaults. `FAIRPADEL_API_URL` overrides the base URL.
    pub fn from_env() -> Result<Self, toml::de::Error> {
        Self::from_sources(option_env!("FAIRPADEL_CONFIG"), option_env!("FAIRPADEL_API_URL"))
    }

    fn from_sources(toml_text: Option<&str>, api_url: Option<&str>) -> Result<Self, toml::de::Error> {
        let mut config = match toml_text {
            Some(text) => Self::from_toml(text)?,
            None => Self::default(),
        };
        if let Some(url) = api_url {
            config = config.with_base_url(url);
        }
        Ok(config)
    }

    /// Builder method to point the client at another API.
    pub fn with_base_url(mut self, url: &str) -> Self {
        self.api.base_url = url.trim_end_matches('/').to_string();
        self
    }

    /// Parse from TOML string.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(s)
    }

    /// Serialize to TOML string.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_toml_is_default() {
        let config = ClientConfig::from_toml("").unwrap();
        assert_eq!(config, ClientConfig::default());
        assert_eq!(config.uploads.max_proof_bytes, 5 * 1024 * 1024);
        assert_eq!(config.banners.rotation_secs, 5);
        assert_eq!(config.autocomplete.max_suggestions, 8);
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config = ClientConfig::from_toml(
            r#"
            [api]
            base_url = "http://localhost:3000"
            "#,
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.banners, BannerConfig::default());
    }

    #[test]
    fn toml_roundtrip() {
        let config = ClientConfig::default().with_base_url("http://127.0.0.1:3000/");
        assert_eq!(config.api.base_url, "http://127.0.0.1:3000");
        let text = config.to_toml().unwrap();
        assert_eq!(ClientConfig::from_toml(&text).unwrap(), config);
    }

    #[test]
    fn api_url_override_wins_over_toml() {
        let config = ClientConfig::from_sources(
            Some("[api]\nbase_url = \"http://staging.local\"\n[banners]\nrotation_secs = 8\n"),
            Some("http://localhost:3000/"),
        )
        .unwrap();
        assert_eq!(config.api.base_url, "http://localhost:3000");
        assert_eq!(config.banners.rotation_secs, 8);
        assert!(ClientConfig::from_sources(Some("[api"), None).is_err());
    }
}
