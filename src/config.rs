//! Application configuration loaded from environment variables.
//!
//! A `.env` file in the working directory is honored for local runs.

use std::env;
use std::path::PathBuf;

/// Application configuration, loaded once at startup.
#[derive(Debug, Clone)]
pub struct Config {
    /// Path of the JSON file backing the local key-value store
    pub store_path: PathBuf,
    /// Optional JSON catalog overriding the built-in teams, tiers and quests
    pub catalog_path: Option<PathBuf>,
    /// Show the landing page on every start, even for returning visitors
    pub always_show_landing: bool,
    /// Emit logs as JSON lines instead of human-readable text
    pub log_json: bool,
}

impl Default for Config {
    /// Default config for testing only.
    fn default() -> Self {
        Self {
            store_path: PathBuf::from("fanzone-store.json"),
            catalog_path: None,
            always_show_landing: false,
            log_json: false,
        }
    }
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        Ok(Self {
            store_path: env::var("FANZONE_STORE_PATH")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from("fanzone-store.json")),
            catalog_path: env::var("FANZONE_CATALOG_PATH")
                .ok()
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from),
            always_show_landing: bool_var("FANZONE_ALWAYS_SHOW_LANDING")?,
            log_json: bool_var("FANZONE_LOG_JSON")?,
        })
    }
}

/// Read an optional boolean variable. Unset means `false`.
fn bool_var(name: &'static str) -> Result<bool, ConfigError> {
    match env::var(name) {
        Ok(value) => parse_bool(&value).ok_or(ConfigError::Invalid { name, value }),
        Err(_) => Ok(false),
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}

/// Configuration errors
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {name}: {value:?}")]
    Invalid { name: &'static str, value: String },
}
