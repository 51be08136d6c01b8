//! Logging system initialization
//!
//! Sets up the tracing subscriber from the loaded configuration. Demo output
//! goes to stdout, so log output is written to stderr (or a file) to keep the
//! console session readable.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

use super::app_config::AppConfig;

/// Initialize the logging system based on configuration
///
/// **Note**: call once during startup, after configuration has been loaded.
///
/// # Returns
/// * `WorkerGuard` - must be kept alive for the duration of the program to
///   ensure non-blocking log writes are flushed
///
/// # Panics
/// * If opening the log file fails
/// * If setting the global subscriber fails (e.g. already initialized)
pub fn init_logging(config: &AppConfig) -> WorkerGuard {
    let writer: Box<dyn std::io::Write + Send + Sync> = match &config.logging.file {
        Some(log_file) if !log_file.is_empty() => {
            let file = std::fs::OpenOptions::new()
                .create(true)
                .append(true)
                .open(log_file)
                .expect("Failed to open log file");
            Box::new(file)
        }
        _ => Box::new(std::io::stderr()),
    };

    let (non_blocking_writer, guard) = tracing_appender::non_blocking(writer);
    let filter = EnvFilter::new(config.logging.level.clone());

    let subscriber_builder = tracing_subscriber::fmt()
        .with_writer(non_blocking_writer)
        .with_env_filter(filter)
        .with_level(true)
        .with_ansi(config.logging.file.as_ref().is_none_or(|f| f.is_empty()));

    if config.logging.format == "json" {
        subscriber_builder.json().init();
    } else {
        subscriber_builder.init();
    }

    guard
}
