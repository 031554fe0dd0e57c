//! Frontend configuration
//!
//! The configuration is embedded in the wasm bundle. `PIZZA_API_BASE_URL`
//! set at build time (e.g. `PIZZA_API_BASE_URL=https://pizza.example trunk build`)
//! overrides the API base URL.

use once_cell::sync::Lazy;
use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Config {
    pub api: ApiConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
}

#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct LoggingConfig {
    pub level: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "debug".to_string(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ApiConfig {
                base_url: "http://localhost:9009".to_string(),
            },
            logging: LoggingConfig::default(),
        }
    }
}

/// Default configuration embedded in the bundle
const DEFAULT_CONFIG: &str = r#"
[api]
base_url = "http://localhost:9009"

[logging]
level = "debug"
"#;

pub fn parse_config(contents: &str) -> Result<Config, toml::de::Error> {
    toml::from_str(contents)
}

/// Load the embedded configuration and apply build-time overrides.
///
/// Falls back to `Config::default()` if the embedded TOML does not parse.
pub fn load_config() -> Config {
    let mut config = match parse_config(DEFAULT_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid embedded config, using defaults: {}", e);
            Config::default()
        }
    };
    if let Some(base_url) = option_env!("PIZZA_API_BASE_URL") {
        config.api.base_url = base_url.to_string();
    }
    config
}

static CONFIG: Lazy<Config> = Lazy::new(load_config);

pub fn config() -> &'static Config {
    &CONFIG
}

/// Log level from configuration; unknown names mean `Debug`.
pub fn log_level() -> log::Level {
    config().logging.level.parse().unwrap_or(log::Level::Debug)
}
