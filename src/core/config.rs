//! # Configuration
//!
//! Centralizes all settings with a clear override hierarchy:
//! defaults → config file → env vars → CLI flags.
//!
//! Config lives at `~/.storefront/config.toml`. If missing on first run, a
//! commented-out default is generated so users can discover all options.
//!
//! The log file is the exception: it is chosen from the CLI or env before
//! the config file is read, so that loading the config can itself log.
//! The configured level is applied once resolution finishes.

use log::{LevelFilter, debug, warn};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};

use crate::core::resolver::UnknownRoutePolicy;

// ============================================================================
// Config Structs (all fields Option<T> for sparse TOML)
// ============================================================================

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct StorefrontConfig {
    #[serde(default)]
    pub router: RouterConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct RouterConfig {
    pub start_location: Option<String>,
    pub unknown_route: Option<UnknownRoutePolicy>,
    pub history_limit: Option<usize>,
}

#[derive(Debug, Default, Deserialize, Serialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

// ============================================================================
// Defaults
// ============================================================================

pub const DEFAULT_START_LOCATION: &str = "";
pub const DEFAULT_HISTORY_LIMIT: usize = 100;
pub const DEFAULT_LOG_FILE: &str = "storefront.log";
pub const DEFAULT_LOG_LEVEL: LevelFilter = LevelFilter::Debug;

// ============================================================================
// Resolved Config (concrete values, no Options)
// ============================================================================

#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    pub start_location: String,
    pub unknown_route: UnknownRoutePolicy,
    pub history_limit: usize,
    pub log_level: LevelFilter,
}

/// Values given on the command line. `None` means the flag was not passed.
#[derive(Debug, Default, Clone)]
pub struct CliOverrides {
    pub location: Option<String>,
    pub unknown_route: Option<UnknownRoutePolicy>,
}

// ============================================================================
// Error Type
// ============================================================================

#[derive(Debug)]
pub enum ConfigError {
    Io(std::io::Error),
    Parse(toml::de::Error),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::Io(e) => write!(f, "config I/O error: {e}"),
            ConfigError::Parse(e) => write!(f, "config parse error: {e}"),
        }
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Loading
// ============================================================================

/// Returns the path to `~/.storefront/config.toml`.
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|h| h.join(".storefront").join("config.toml"))
}

/// Load config from `~/.storefront/config.toml`.
///
/// If the file doesn't exist, generates a commented-out default and
/// returns `StorefrontConfig::default()`. If it exists but is malformed,
/// returns `ConfigError::Parse`.
pub fn load_config() -> Result<StorefrontConfig, ConfigError> {
    let path = match config_path() {
        Some(p) => p,
        None => {
            warn!("Could not determine home directory, using default config");
            return Ok(StorefrontConfig::default());
        }
    };

    if !path.exists() {
        generate_default_config(&path);
        return Ok(StorefrontConfig::default());
    }

    let contents = fs::read_to_string(&path).map_err(ConfigError::Io)?;
    let config = parse_config(&contents)?;
    debug!("Config: {:?}", config);
    Ok(config)
}

pub fn parse_config(contents: &str) -> Result<StorefrontConfig, ConfigError> {
    toml::from_str(contents).map_err(ConfigError::Parse)
}

/// Generates a commented-out default config file at the given path.
fn generate_default_config(path: &PathBuf) {
    let default_content = r##"# Storefront Configuration
# All settings are optional. Defaults are used for anything not specified.
# Override hierarchy: defaults → this file → env vars → CLI flags.

# [router]
# start_location = "#products?category=NEET"   # Or set STOREFRONT_START_LOCATION
# unknown_route = "fallback-home"                # "fallback-home" or "not-found"
# history_limit = 100

# [logging]
# level = "debug"                                # "off", "error", "warn", "info", "debug", "trace"
# The log file is set with --log-file or STOREFRONT_LOG_FILE (default storefront.log).
"##;

    if let Some(parent) = path.parent() {
        if let Err(e) = fs::create_dir_all(parent) {
            warn!("Failed to create config directory: {}", e);
            return;
        }
    }
    if let Err(e) = fs::write(path, default_content) {
        warn!("Failed to write default config: {}", e);
    }
}

// ============================================================================
// Resolution
// ============================================================================

/// Resolve the final config by collapsing: defaults → config file → env vars → CLI.
pub fn resolve(config: &StorefrontConfig, cli: &CliOverrides) -> ResolvedConfig {
    // Start location: CLI → env → config → default
    let start_location = cli
        .location
        .clone()
        .or_else(|| std::env::var("STOREFRONT_START_LOCATION").ok())
        .or_else(|| config.router.start_location.clone())
        .unwrap_or_else(|| DEFAULT_START_LOCATION.to_string());

    // Unknown route policy: CLI → env → config → default
    let unknown_route = cli
        .unknown_route
        .or_else(|| env_policy("STOREFRONT_UNKNOWN_ROUTE"))
        .or(config.router.unknown_route)
        .unwrap_or_default();

    // Log level: env → config → default
    let log_level = std::env::var("STOREFRONT_LOG_LEVEL")
        .ok()
        .or_else(|| config.logging.level.clone())
        .and_then(|level| parse_level(&level))
        .unwrap_or(DEFAULT_LOG_LEVEL);

    ResolvedConfig {
        start_location,
        unknown_route,
        history_limit: config
            .router
            .history_limit
            .unwrap_or(DEFAULT_HISTORY_LIMIT),
        log_level,
    }
}

/// Log file path: CLI → env → default.
pub fn log_file_path(cli: Option<&Path>) -> PathBuf {
    cli.map(Path::to_path_buf)
        .or_else(|| std::env::var_os("STOREFRONT_LOG_FILE").map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_LOG_FILE))
}

fn env_policy(var: &str) -> Option<UnknownRoutePolicy> {
    let value = std::env::var(var).ok()?;
    let policy = UnknownRoutePolicy::parse(&value);
    if policy.is_none() {
        warn!("Ignoring {}={:?}: expected fallback-home or not-found", var, value);
    }
    policy
}

fn parse_level(level: &str) -> Option<LevelFilter> {
    match level.parse() {
        Ok(filter) => Some(filter),
        Err(_) => {
            warn!("Unknown log level {:?}, using default", level);
            None
        }
    }
}
