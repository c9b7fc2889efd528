// src/core/config.rs
use std::env;
use std::time::Duration;

use log::LevelFilter;

use crate::breach;

// Configuration for the strength service
#[derive(Debug, Clone)]
pub struct Config {
    // Web Interface
    pub web_address: String,
    pub web_port: u16,

    // Breach Lookup
    pub breach_api_url: String,
    pub breach_timeout: Duration,

    // Password Generation
    pub default_password_length: usize,

    // Logging
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            // Web Interface
            web_address: "127.0.0.1".to_string(),
            web_port: 5000,

            // Breach Lookup
            breach_api_url: breach::DEFAULT_API_URL.to_string(),
            breach_timeout: breach::DEFAULT_TIMEOUT,

            // Password Generation
            default_password_length: 16,

            // Logging
            log_level: LevelFilter::Info,
        }
    }
}

impl Config {
    // Load configuration from environment variables
    pub fn load() -> Self {
        let mut config = Config::default();

        // Web Interface
        if let Ok(address) = env::var("WEB_ADDRESS") {
            config.web_address = address;
        }

        if let Ok(val) = env::var("WEB_PORT") {
            if let Ok(port) = val.parse() {
                config.web_port = port;
            }
        }

        // Breach Lookup
        if let Ok(url) = env::var("BREACH_API_URL") {
            config.breach_api_url = url.trim_end_matches('/').to_string();
        }

        if let Ok(val) = env::var("BREACH_TIMEOUT_SECS") {
            if let Ok(secs) = val.parse::<u64>() {
                config.breach_timeout = Duration::from_secs(secs);
            }
        }

        // Password Generation
        if let Ok(val) = env::var("DEFAULT_PASSWORD_LENGTH") {
            if let Ok(length) = val.parse() {
                config.default_password_length = length;
            }
        }

        // Logging
        if let Ok(level) = env::var("LOG_LEVEL") {
            match level.to_lowercase().as_str() {
                "error" => config.log_level = LevelFilter::Error,
                "warn" => config.log_level = LevelFilter::Warn,
                "info" => config.log_level = LevelFilter::Info,
                "debug" => config.log_level = LevelFilter::Debug,
                "trace" => config.log_level = LevelFilter::Trace,
                _ => {}
            }
        }

        config
    }
}
