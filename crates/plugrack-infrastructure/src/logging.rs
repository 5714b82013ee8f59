//! Structured logging with tracing
//!
//! Installs the global subscriber: an `EnvFilter` (overridable through
//! `PLUGRACK_LOG`), human or JSON output on stderr, and an optional
//! daily-rolling log file.

use crate::config::LoggingConfig;
use crate::constants::LOG_FILTER_ENV;
use plugrack_domain::error::{Error, Result};
use std::ffi::OsStr;
use std::path::Path;
use tracing::{Level, info};
use tracing_subscriber::{EnvFilter, Registry, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging with the provided configuration
///
/// Fails when the level is unknown or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = parse_log_level(&config.level)?;
    let filter =
        EnvFilter::try_from_env(LOG_FILTER_ENV).unwrap_or_else(|_| EnvFilter::new(&config.level));

    let file_appender = config.file_output.as_ref().map(|path| {
        tracing_appender::rolling::daily(
            path.parent()
                .filter(|parent| !parent.as_os_str().is_empty())
                .unwrap_or_else(|| Path::new(".")),
            path.file_name().unwrap_or_else(|| OsStr::new("plugrack.log")),
        )
    });

    let registry = Registry::default().with(filter);
    let stderr = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match (config.json_format, file_appender) {
        (true, Some(appender)) => registry
            .with(stderr.json())
            .with(fmt::layer().json().with_writer(appender).with_ansi(false))
            .try_init(),
        (true, None) => registry.with(stderr.json()).try_init(),
        (false, Some(appender)) => registry
            .with(stderr)
            .with(fmt::layer().with_writer(appender).with_ansi(false))
            .try_init(),
        (false, None) => registry.with(stderr).try_init(),
    };
    installed.map_err(|e| Error::configuration_with_source("Failed to install logger", e))?;

    info!("Logging initialized with level: {}", level);
    Ok(())
}

/// Parse log level string to tracing Level
pub fn parse_log_level(level: &str) -> Result<Level> {
    match level.to_lowercase().as_str() {
        "trace" => Ok(Level::TRACE),
        "debug" => Ok(Level::DEBUG),
        "info" => Ok(Level::INFO),
        "warn" | "warning" => Ok(Level::WARN),
        "error" => Ok(Level::ERROR),
        _ => Err(Error::config(format!(
            "Invalid log level: {level}. Use trace, debug, info, warn, or error"
        ))),
    }
}
