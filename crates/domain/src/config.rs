//! Configuration structures
//!
//! Loading lives in `daybreak-infra`; this module only defines the shape and
//! the defaults so every layer agrees on them.

use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_DAY_BOUNDARY_HOUR, DEFAULT_DB_PATH, DEFAULT_LOG_FILTER, DEFAULT_POOL_SIZE,
};
use crate::impl_domain_status_conversions;
use crate::{DaybreakError, Result};

/// Which session store adapter backs the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    #[default]
    Sqlite,
}

impl_domain_status_conversions!(StorageBackend {
    Memory => "memory",
    Sqlite => "sqlite",
});

/// Storage settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: String,
    pub pool_size: u32,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::default(),
            path: DEFAULT_DB_PATH.to_string(),
            pool_size: DEFAULT_POOL_SIZE,
        }
    }
}

/// Logical-day settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DayConfig {
    /// Local hour (0-23) at which a new logical day begins.
    pub boundary_hour: u32,
    /// IANA zone name. `None` uses the process-local zone.
    pub timezone: Option<String>,
}

impl Default for DayConfig {
    fn default() -> Self {
        Self { boundary_hour: DEFAULT_DAY_BOUNDARY_HOUR, timezone: None }
    }
}

/// Logging settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// `EnvFilter` directive, e.g. `info` or `daybreak_core=debug`.
    pub filter: String,
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { filter: DEFAULT_LOG_FILTER.to_string(), json: false }
    }
}

/// Configuration for the application
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub storage: StorageConfig,
    pub day: DayConfig,
    pub logging: LoggingConfig,
}

impl Config {
    /// Check value ranges that serde cannot express.
    ///
    /// Time zone names are checked by the infra loader, which owns the zone
    /// database.
    pub fn validate(&self) -> Result<()> {
        if self.day.boundary_hour > 23 {
            return Err(DaybreakError::Config(format!(
                "day boundary hour must be 0-23, got {}",
                self.day.boundary_hour
            )));
        }
        if self.storage.pool_size == 0 {
            return Err(DaybreakError::Config("storage pool size must be at least 1".into()));
        }
        if self.storage.backend == StorageBackend::Sqlite && self.storage.path.trim().is_empty() {
            return Err(DaybreakError::Config("sqlite backend requires a database path".into()));
        }
        Ok(())
    }
}
