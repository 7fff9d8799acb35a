//! Tracing subscriber setup
//!
//! Installs a global `tracing-subscriber` fmt layer. `RUST_LOG` takes
//! precedence over the configured filter so a single run can be made more
//! verbose without editing config.

use daybreak_domain::{DaybreakError, LoggingConfig, Result};
use tracing_subscriber::EnvFilter;

/// Build the filter for `config`, preferring `RUST_LOG` when set.
pub fn build_filter(config: &LoggingConfig) -> Result<EnvFilter> {
    if let Ok(filter) = EnvFilter::try_from_default_env() {
        return Ok(filter);
    }
    EnvFilter::try_new(&config.filter).map_err(|e| {
        DaybreakError::Config(format!("invalid log filter '{}': {e}", config.filter))
    })
}

/// Install the global subscriber.
///
/// Returns `Ok(false)` when a subscriber was already installed, so hosts and
/// tests can call this more than once.
pub fn init_tracing(config: &LoggingConfig) -> Result<bool> {
    let filter = build_filter(config)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    let installed = if config.json {
        builder.json().try_init().is_ok()
    } else {
        builder.try_init().is_ok()
    };

    if installed {
        tracing::debug!(filter = %config.filter, json = config.json, "tracing initialised");
    }
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejects_malformed_filter() {
        if std::env::var("RUST_LOG").is_ok() {
            return;
        }
        let config = LoggingConfig { filter: "daybreak=loud".into(), json: false };
        assert!(matches!(build_filter(&config), Err(DaybreakError::Config(_))));
    }

    #[test]
    fn second_init_is_harmless() {
        let config = LoggingConfig::default();
        let _ = init_tracing(&config).unwrap();
        assert!(!init_tracing(&config).unwrap());
    }
}
