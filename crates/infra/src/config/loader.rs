//! Configuration loader
//!
//! Loads application configuration from environment variables or files.
//!
//! ## Loading Strategy
//! 1. Environment variables, when `DAYBREAK_STORAGE_BACKEND` is set
//! 2. Otherwise the first config file found by [`probe_config_paths`]
//! 3. Otherwise built-in defaults
//!
//! Every result is passed through [`validate`].
//!
//! ## Environment Variables
//! - `DAYBREAK_STORAGE_BACKEND`: `memory` or `sqlite` (required for env loading)
//! - `DAYBREAK_DB_PATH`: Database file path
//! - `DAYBREAK_DB_POOL_SIZE`: Connection pool size
//! - `DAYBREAK_DAY_BOUNDARY_HOUR`: Local hour (0-23) that starts a logical day
//! - `DAYBREAK_TIMEZONE`: IANA zone name for the day boundary
//! - `DAYBREAK_LOG`: `EnvFilter` directive
//! - `DAYBREAK_LOG_JSON`: Emit JSON logs (true/false)
//!
//! ## File Locations
//! The loader probes `daybreak.{toml,json}` and `config.{toml,json}` in the
//! working directory, its parent, and next to the executable.

use std::path::{Path, PathBuf};

use daybreak_core::DayZone;
use daybreak_domain::{Config, DaybreakError, Result, StorageBackend};

const ENV_BACKEND: &str = "DAYBREAK_STORAGE_BACKEND";
const ENV_DB_PATH: &str = "DAYBREAK_DB_PATH";
const ENV_POOL_SIZE: &str = "DAYBREAK_DB_POOL_SIZE";
const ENV_BOUNDARY_HOUR: &str = "DAYBREAK_DAY_BOUNDARY_HOUR";
const ENV_TIMEZONE: &str = "DAYBREAK_TIMEZONE";
const ENV_LOG: &str = "DAYBREAK_LOG";
const ENV_LOG_JSON: &str = "DAYBREAK_LOG_JSON";

const CONFIG_FILE_NAMES: [&str; 4] =
    ["daybreak.toml", "daybreak.json", "config.toml", "config.json"];

/// Load configuration with automatic fallback strategy
///
/// # Errors
/// Returns `DaybreakError::Config` if the selected source is malformed or
/// the resulting configuration fails validation.
pub fn load() -> Result<Config> {
    let config = match load_from_env() {
        Ok(config) => {
            tracing::info!("Configuration loaded from environment variables");
            config
        }
        Err(e) => {
            tracing::debug!(error = ?e, "Failed to load from environment, trying file");
            match probe_config_paths() {
                Some(path) => load_from_file(Some(path))?,
                None => {
                    tracing::info!("No configuration found, using defaults");
                    Config::default()
                }
            }
        }
    };

    validate(&config)?;
    Ok(config)
}

/// Load configuration from environment variables
///
/// `DAYBREAK_STORAGE_BACKEND` must be present; every other variable falls
/// back to its default.
///
/// # Errors
/// Returns `DaybreakError::Config` if the backend variable is missing or any
/// variable has an invalid value.
pub fn load_from_env() -> Result<Config> {
    let backend = env_var(ENV_BACKEND)?
        .parse::<StorageBackend>()
        .map_err(|e| DaybreakError::Config(format!("Invalid storage backend: {e}")))?;

    let mut config = Config::default();
    config.storage.backend = backend;

    if let Some(path) = env_opt(ENV_DB_PATH) {
        config.storage.path = path;
    }
    if let Some(raw) = env_opt(ENV_POOL_SIZE) {
        config.storage.pool_size = raw
            .parse::<u32>()
            .map_err(|e| DaybreakError::Config(format!("Invalid pool size: {e}")))?;
    }
    if let Some(raw) = env_opt(ENV_BOUNDARY_HOUR) {
        config.day.boundary_hour = raw
            .parse::<u32>()
            .map_err(|e| DaybreakError::Config(format!("Invalid day boundary hour: {e}")))?;
    }
    if let Some(zone) = env_opt(ENV_TIMEZONE) {
        config.day.timezone = Some(zone);
    }
    if let Some(filter) = env_opt(ENV_LOG) {
        config.logging.filter = filter;
    }
    config.logging.json = env_bool(ENV_LOG_JSON, config.logging.json);

    Ok(config)
}

/// Load configuration from a file
///
/// If `path` is `None`, probes the standard locations. Supports JSON and
/// TOML, detected by file extension. The result is not validated; [`load`]
/// does that.
///
/// # Errors
/// Returns `DaybreakError::Config` if no file is found or it cannot be read
/// or parsed.
pub fn load_from_file(path: Option<PathBuf>) -> Result<Config> {
    let config_path = match path {
        Some(p) => {
            if !p.exists() {
                return Err(DaybreakError::Config(format!(
                    "Config file not found: {}",
                    p.display()
                )));
            }
            p
        }
        None => probe_config_paths().ok_or_else(|| {
            DaybreakError::Config("No config file found in any of the standard locations".into())
        })?,
    };

    tracing::info!(path = %config_path.display(), "Loading configuration from file");

    let contents = std::fs::read_to_string(&config_path)
        .map_err(|e| DaybreakError::Config(format!("Failed to read config file: {e}")))?;

    parse_config(&contents, &config_path)
}

/// Parse configuration from string content
///
/// Format is detected by the extension of `path`; missing sections take
/// their defaults.
///
/// # Errors
/// Returns `DaybreakError::Config` if the format is unsupported or parsing
/// fails.
pub fn parse_config(contents: &str, path: &Path) -> Result<Config> {
    let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("json");

    match extension {
        "toml" => toml::from_str(contents)
            .map_err(|e| DaybreakError::Config(format!("Invalid TOML format: {e}"))),
        "json" => serde_json::from_str(contents)
            .map_err(|e| DaybreakError::Config(format!("Invalid JSON format: {e}"))),
        _ => Err(DaybreakError::Config(format!("Unsupported config format: {extension}"))),
    }
}

/// Range checks from [`Config::validate`] plus time zone resolution.
pub fn validate(config: &Config) -> Result<()> {
    config.validate()?;
    DayZone::from_name(config.day.timezone.as_deref())?;
    Ok(())
}

/// Probe multiple paths for configuration files
///
/// # Returns
/// The first config file found, or `None` if no file exists.
pub fn probe_config_paths() -> Option<PathBuf> {
    let mut dirs = Vec::new();

    if let Ok(cwd) = std::env::current_dir() {
        dirs.push(cwd.join(".."));
        dirs.insert(0, cwd);
    }
    if let Ok(exe_path) = std::env::current_exe() {
        if let Some(exe_dir) = exe_path.parent() {
            dirs.push(exe_dir.to_path_buf());
        }
    }

    dirs.iter()
        .flat_map(|dir| CONFIG_FILE_NAMES.iter().map(move |name| dir.join(name)))
        .find(|path| path.exists())
}

/// Get required environment variable
///
/// # Errors
/// Returns `DaybreakError::Config` if the variable is not set.
fn env_var(key: &str) -> Result<String> {
    std::env::var(key)
        .map_err(|_| DaybreakError::Config(format!("Missing required environment variable: {key}")))
}

/// Optional environment variable; blank values count as unset.
fn env_opt(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|value| !value.trim().is_empty())
}

/// Parse boolean from environment variable
///
/// Accepts: `1`/`0`, `true`/`false`, `yes`/`no`, `on`/`off` (case-insensitive)
fn env_bool(key: &str, default: bool) -> bool {
    std::env::var(key)
        .ok()
        .map(|s| matches!(s.to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on"))
        .unwrap_or(default)
}
