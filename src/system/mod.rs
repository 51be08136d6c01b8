//! Platform and application lifecycle utilities
//!
//! - `app_config`: configuration loading (TOML file + environment overrides)
//! - `logging`: tracing subscriber initialization

pub mod app_config;
pub mod logging;

pub use app_config::AppConfig;
pub use logging::init_logging;
