use serde::Deserialize;
use std::env;
use std::sync::OnceLock;
use thiserror::Error;

/// Errors encountered while loading configuration from environment variables.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Required environment variable was not provided.
    #[error("Missing environment variable: {0}")]
    MissingVariable(String),
    /// Environment variable contained a value that could not be parsed.
    #[error("Invalid value for environment variable: {0}")]
    InvalidValue(String),
}

/// Default base URL of the hosted memory store.
pub const DEFAULT_BASE_URL: &str = "https://api.supermemory.ai/";

/// Default number of results rendered by `search_memories`.
pub const DEFAULT_SEARCH_LIMIT: usize = 5;

/// Runtime configuration for the Membridge server.
#[derive(Debug, Deserialize)]
pub struct Config {
    /// Credential presented to the hosted memory store.
    pub api_key: String,
    /// Base URL of the hosted memory store.
    pub base_url: String,
    /// Number of search results rendered when callers omit `limit`.
    pub search_default_limit: usize,
}

impl Config {
    /// Load configuration from environment variables, performing validation along the way.
    pub fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            api_key: load_env("SUPERMEMORY_API_KEY")?,
            base_url: load_env_optional("SUPERMEMORY_BASE_URL")
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            search_default_limit: load_env_optional("SEARCH_DEFAULT_LIMIT")
                .map(|value| {
                    value
                        .parse()
                        .map_err(|_| ConfigError::InvalidValue("SEARCH_DEFAULT_LIMIT".into()))
                })
                .transpose()?
                .unwrap_or(DEFAULT_SEARCH_LIMIT),
        })
    }
}

fn load_env(key: &str) -> Result<String, ConfigError> {
    env::var(key)
        .ok()
        .filter(|value| !value.trim().is_empty())
        .ok_or_else(|| ConfigError::MissingVariable(key.to_string()))
}

fn load_env_optional(key: &str) -> Option<String> {
    env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Global configuration cache populated during process start.
pub static CONFIG: OnceLock<Config> = OnceLock::new();

/// Retrieve the loaded configuration, panicking if initialization has not occurred.
pub fn get_config() -> &'static Config {
    CONFIG.get().expect("Config not initialized")
}

/// Load configuration from the environment and install it in the global cache.
pub fn init_config() {
    dotenvy::dotenv().ok();
    let config = Config::from_env().expect("Failed to load config from environment");
    tracing::debug!(
        base_url = %config.base_url,
        search_default_limit = config.search_default_limit,
        "Loaded configuration"
    );
    CONFIG.set(config).expect("Failed to set config");
}
