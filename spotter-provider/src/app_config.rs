use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub server: ServerConfig,
    pub amadeus: AmadeusConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    pub port: u16,
}

/// What the search endpoint does when the token exchange is unavailable:
/// `strict` surfaces 401, `mock` serves the pre-baked offer set so the UI
/// is never blocked by missing credentials.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum AuthFallback {
    #[default]
    Strict,
    Mock,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AmadeusConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default)]
    pub client_id: String,
    #[serde(default)]
    pub client_secret: String,
    #[serde(default = "default_timeout_seconds")]
    pub timeout_seconds: u64,
    #[serde(default)]
    pub auth_fallback: AuthFallback,
}

fn default_base_url() -> String {
    "https://test.api.amadeus.com".to_string()
}

fn default_timeout_seconds() -> u64 {
    10
}

impl AmadeusConfig {
    /// Absent or placeholder credentials disable live lookups.
    pub fn has_live_credentials(&self) -> bool {
        !self.client_id.is_empty()
            && !self.client_secret.is_empty()
            && !self.client_id.contains("REPLACE")
            && !self.client_secret.contains("REPLACE")
    }
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            .add_source(config::File::with_name("config/default"))
            // Environment-specific file, optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Eg. `SPOTTER__AMADEUS__CLIENT_ID=...`
            .add_source(config::Environment::with_prefix("SPOTTER").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
