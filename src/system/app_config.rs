//! Application configuration
//!
//! Configuration is loaded once at startup: the first existing TOML file
//! wins, then environment variables override individual fields.

use std::env;
use std::fs;
use std::path::Path;
use std::sync::OnceLock;
use tracing::{debug, error, warn};

use serde::{Deserialize, Serialize};

static CONFIG: OnceLock<AppConfig> = OnceLock::new();

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct AppConfig {
    pub logging: LoggingConfig,
    pub demo: DemoConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Log level filter (tracing EnvFilter syntax)
    pub level: String,
    /// Optional log file path; empty or missing means stderr
    pub file: Option<String>,
    /// "text" or "json"
    pub format: String,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: None,
            format: "text".to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct DemoConfig {
    /// How many array elements the sort harness prints before truncating
    pub display_limit: usize,
    /// Lower bound for generated random values
    pub value_min: i32,
    /// Upper bound for generated random values
    pub value_max: i32,
    /// Fixed RNG seed for reproducible sort runs; unset means thread RNG
    pub sort_seed: Option<u64>,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            display_limit: 20,
            value_min: 1,
            value_max: 1000,
            sort_seed: None,
        }
    }
}

impl AppConfig {
    /// Global accessor; loads the configuration on first use.
    pub fn get() -> &'static AppConfig {
        CONFIG.get_or_init(Self::load)
    }

    /// Load configuration from TOML file with environment variable fallback
    pub fn load() -> Self {
        let mut config = Self::load_from_file();
        config.override_with_env();
        config
    }

    /// Load configuration from the first TOML file that exists
    fn load_from_file() -> Self {
        let config_paths = ["dsa-lab.toml", "config.toml", "config/dsa-lab.toml"];

        for path in &config_paths {
            if Path::new(path).exists() {
                debug!("Loading config from: {}", path);
                if let Some(config) = Self::load_from_path(path) {
                    return config;
                }
            }
        }

        debug!("No config file found, using defaults");
        Self::default()
    }

    /// Read and parse one TOML file; None if unreadable or malformed
    pub fn load_from_path<P: AsRef<Path>>(path: P) -> Option<Self> {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(content) => match toml::from_str::<AppConfig>(&content) {
                Ok(config) => {
                    debug!("Successfully loaded config from: {}", path.display());
                    Some(config)
                }
                Err(e) => {
                    warn!("Failed to parse config file {}: {}", path.display(), e);
                    None
                }
            },
            Err(e) => {
                warn!("Failed to read config file {}: {}", path.display(), e);
                None
            }
        }
    }

    /// Override configuration with environment variables
    fn override_with_env(&mut self) {
        // Logging config
        if let Ok(level) = env::var("DSA_LOG_LEVEL") {
            self.logging.level = level;
        }
        if let Ok(file) = env::var("DSA_LOG_FILE") {
            self.logging.file = Some(file);
        }
        if let Ok(format) = env::var("DSA_LOG_FORMAT") {
            self.logging.format = format;
        }

        // Demo config
        if let Ok(limit) = env::var("DSA_DISPLAY_LIMIT") {
            if let Ok(limit) = limit.parse() {
                self.demo.display_limit = limit;
            } else {
                error!("Invalid DSA_DISPLAY_LIMIT: {}", limit);
            }
        }
        if let Ok(min) = env::var("DSA_VALUE_MIN") {
            if let Ok(min) = min.parse() {
                self.demo.value_min = min;
            } else {
                error!("Invalid DSA_VALUE_MIN: {}", min);
            }
        }
        if let Ok(max) = env::var("DSA_VALUE_MAX") {
            if let Ok(max) = max.parse() {
                self.demo.value_max = max;
            } else {
                error!("Invalid DSA_VALUE_MAX: {}", max);
            }
        }
        if let Ok(seed) = env::var("DSA_SORT_SEED") {
            if let Ok(seed) = seed.parse::<u64>() {
                self.demo.sort_seed = Some(seed);
            } else {
                error!("Invalid DSA_SORT_SEED: {}", seed);
            }
        }
    }
}
