//! Infrastructure constants

// ============================================================================
// Configuration
// ============================================================================

/// Default configuration file name
pub const DEFAULT_CONFIG_FILENAME: &str = "plugrack.toml";

/// Default configuration directory name
pub const DEFAULT_CONFIG_DIR: &str = "plugrack";

/// Environment variable prefix for configuration overrides
pub const CONFIG_ENV_PREFIX: &str = "PLUGRACK";

/// Separator between nested keys in environment variable names
pub const CONFIG_ENV_SEPARATOR: &str = "__";

// ============================================================================
// Logging
// ============================================================================

/// Default log level
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Environment variable overriding the log filter
pub const LOG_FILTER_ENV: &str = "PLUGRACK_LOG";

// ============================================================================
// Definition stores
// ============================================================================

/// Default directory for JSON file stores, relative to the working directory
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of a kind's JSON store
pub fn store_file_name(kind: &str) -> String {
    format!("{kind}.providers.json")
}

// ============================================================================
// HTTP
// ============================================================================

/// Default HTTP request timeout in seconds
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

/// Default HTTP user agent
pub const DEFAULT_USER_AGENT: &str = concat!("plugrack/", env!("CARGO_PKG_VERSION"));
