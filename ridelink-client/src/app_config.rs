use serde::Deserialize;
use std::env;

#[derive(Debug, Deserialize, Clone)]
pub struct Config {
    pub api: ApiConfig,
    pub paging: PagingConfig,
    pub session: SessionConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ApiConfig {
    pub base_url: String,
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,
}

#[derive(Debug, Deserialize, Clone)]
pub struct PagingConfig {
    #[serde(default = "default_page_size")]
    pub default_size: u32,
}

#[derive(Debug, Deserialize, Clone)]
pub struct SessionConfig {
    /// Where the session survives a reload; None keeps it in memory only.
    pub token_file: Option<String>,
}

fn default_timeout() -> u64 {
    30
}

fn default_page_size() -> u32 {
    10
}

impl Config {
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let s = config::Config::builder()
            // Start off by merging in the "default" configuration file
            .add_source(config::File::with_name("config/default"))
            // Add in the current environment file; optional
            .add_source(config::File::with_name(&format!("config/{}", run_mode)).required(false))
            // Local overrides, not checked in
            .add_source(config::File::with_name("config/local").required(false))
            // Environment overrides, e.g. RIDELINK__API__BASE_URL
            .add_source(config::Environment::with_prefix("RIDELINK").separator("__"))
            .build()?;

        s.try_deserialize()
    }
}
