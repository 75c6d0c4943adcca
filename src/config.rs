use crate::error::{Error, Result};
use crate::generator::rules::KeywordTables;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use url::Url;

/// Environment variable overriding the backend API key
pub const API_KEY_ENV: &str = "LEADPAGES_API_KEY";

/// Environment variable overriding the backend access token
pub const ACCESS_TOKEN_ENV: &str = "LEADPAGES_ACCESS_TOKEN";

/// Configuration for the hosted table backend
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RestBackendConfig {
    /// Project URL (or a proxy in front of it)
    pub url: Url,

    /// Anonymous API key sent with every request
    #[serde(default)]
    pub api_key: String,

    /// Value of the client-info header
    #[serde(default = "default_client_info")]
    pub client_info: String,

    /// Access token used when the session carries none
    #[serde(default)]
    pub access_token: Option<String>,
}

/// Which store the application talks to
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum BackendConfig {
    /// In-process store, nothing leaves the process
    #[default]
    Demo,

    /// Hosted table API
    Rest(RestBackendConfig),
}

/// Application configuration, resolved once at startup
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Store selection
    #[serde(default)]
    pub backend: BackendConfig,

    /// Public site under which pages are served
    #[serde(default = "default_site_url")]
    pub site_url: Url,

    /// Lookup tables for the page generator
    #[serde(default)]
    pub tables: KeywordTables,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            backend: BackendConfig::default(),
            site_url: default_site_url(),
            tables: KeywordTables::default(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut file = File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;

        Self::from_json(&contents)
    }

    /// Load configuration from a JSON string
    pub fn from_json(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        Ok(config)
    }

    /// Apply secrets from the environment
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(
            std::env::var(API_KEY_ENV).ok(),
            std::env::var(ACCESS_TOKEN_ENV).ok(),
        );
    }

    fn apply_overrides(&mut self, api_key: Option<String>, access_token: Option<String>) {
        if let BackendConfig::Rest(rest) = &mut self.backend {
            if let Some(api_key) = api_key.filter(|key| !key.is_empty()) {
                rest.api_key = api_key;
            }
            if let Some(token) = access_token.filter(|token| !token.is_empty()) {
                rest.access_token = Some(token);
            }
        }
    }

    /// Reject configurations that cannot work
    pub fn validate(&self) -> Result<()> {
        if let BackendConfig::Rest(rest) = &self.backend {
            if rest.api_key.is_empty() {
                return Err(Error::Config(format!(
                    "rest backend needs an api_key (or {})",
                    API_KEY_ENV
                )));
            }
        }
        if self.site_url.cannot_be_a_base() {
            return Err(Error::Config(format!("site_url {} is not a base URL", self.site_url)));
        }
        Ok(())
    }

    pub fn is_demo(&self) -> bool {
        matches!(self.backend, BackendConfig::Demo)
    }
}

/// Default value for client_info
fn default_client_info() -> String {
    format!("{}/{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"))
}

/// Default value for site_url
fn default_site_url() -> Url {
    Url::parse("http://localhost:3000/").expect("default site URL should be valid")
}
