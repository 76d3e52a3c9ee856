use std::env;
use std::fs;
use std::str::FromStr;

use serde::Deserialize;

use crate::constants::{DEFAULT_HTTP_RESPONSE_CODE, DEFAULT_LOG_LEVEL, DEFAULT_PORT, TEXT_HTML};
use crate::errors::ConfigError;


#[derive(Clone, Debug, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    /// The master switch for maintenance mode.
    pub enabled: bool,
    /// The file holding the maintenance page.
    pub filename: String,
    /// The file whose presence turns maintenance mode on. Empty means always on.
    pub trigger_filename: String,
    /// The status code of the maintenance response.
    pub http_response_code: u16,
    /// The content type of the maintenance response.
    pub http_content_type: String,
    /// The CIDR ranges exempt from the maintenance page.
    pub ip_allow_list: Vec<String>,
    /// The URI patterns that always get the maintenance page.
    pub deny_uri: Vec<String>,
    /// The listening port.
    #[serde(skip)]
    pub port: u16,
    /// The log level.
    #[serde(skip)]
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            enabled: false,
            filename: String::new(),
            trigger_filename: String::new(),
            http_response_code: DEFAULT_HTTP_RESPONSE_CODE,
            http_content_type: String::from(TEXT_HTML),
            ip_allow_list: Vec::new(),
            deny_uri: Vec::new(),
            port: DEFAULT_PORT,
            log_level: String::from(DEFAULT_LOG_LEVEL),
        }
    }
}

fn parse_var<T: FromStr>(name: &str, value: String) -> Result<T, ConfigError> {
    value
        .trim()
        .parse::<T>()
        .map_err(|_| ConfigError::InvalidVariable {
            name: name.to_string(),
            value,
        })
}

/// Read a JSON configuration file using the plugin's camelCase keys.
pub fn read_config_file(path: &str) -> Result<Config, ConfigError> {
    let content = fs::read_to_string(path).map_err(|error| ConfigError::FileRead {
        path: path.to_string(),
        error,
    })?;
    serde_json::from_str(&content).map_err(|error| ConfigError::FileParse {
        path: path.to_string(),
        error,
    })
}

/// Read the log level from `$LOG_LEVEL`. Invalid values fall back to `warn`.
pub fn read_log_level() -> String {
    match env::var("LOG_LEVEL") {
        Ok(val) => {
            let level = val.to_lowercase();
            match level.as_str() {
                "debug" | "info" | "warn" | "error" => level,
                _ => {
                    eprintln!(
                        "Invalid LOG_LEVEL '{}'. Using default 'warn'. Valid values: debug, info, warn, error",
                        val
                    );
                    String::from(DEFAULT_LOG_LEVEL)
                }
            }
        }
        Err(_) => String::from(DEFAULT_LOG_LEVEL),
    }
}

/// Read the configuration from an optional JSON file and the environment variables.
/// Environment variables override values from the file.
/// # Returns
/// The configuration or the first variable that could not be parsed.
pub fn read_config() -> Result<Config, ConfigError> {
    let mut config = match env::var("MAINTENANCE_CONFIG_FILE") {
        Ok(path) if !path.trim().is_empty() => read_config_file(path.trim())?,
        _ => Config::default(),
    };

    if let Ok(val) = env::var("MAINTENANCE_ENABLED") {
        config.enabled = parse_var("MAINTENANCE_ENABLED", val)?;
    }
    if let Ok(val) = env::var("MAINTENANCE_FILENAME") {
        config.filename = val.trim().to_string();
    }
    if let Ok(val) = env::var("MAINTENANCE_TRIGGER_FILENAME") {
        config.trigger_filename = val.trim().to_string();
    }
    if let Ok(val) = env::var("MAINTENANCE_HTTP_RESPONSE_CODE") {
        config.http_response_code = parse_var("MAINTENANCE_HTTP_RESPONSE_CODE", val)?;
    }
    if let Ok(val) = env::var("MAINTENANCE_HTTP_CONTENT_TYPE") {
        config.http_content_type = val.trim().to_string();
    }

    // Get the allowed IP ranges.
    if let Ok(val) = env::var("MAINTENANCE_IP_ALLOW_LIST") {
        config.ip_allow_list = val
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect();
    }

    // Get the deny URI patterns. Patterns may contain commas, so split on whitespace.
    if let Ok(val) = env::var("MAINTENANCE_DENY_URI") {
        config.deny_uri = val.split_whitespace().map(str::to_string).collect();
    }

    // Get the listening port.
    config.port = match env::var("PORT") {
        Ok(val) => val.parse::<u16>().unwrap_or(config.port),
        Err(_) => config.port,
    };

    config.log_level = read_log_level();

    Ok(config)
}
