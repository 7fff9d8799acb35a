//! Application context - dependency injection container

use std::sync::Arc;

use daybreak_core::{
    ActivitySessionEngine, Clock, DayBoundaryClassifier, DayZone, InstanceService, SessionStore,
    SystemClock,
};
use daybreak_domain::{Config, Result};
use daybreak_infra::build_store;
use daybreak_infra::config::validate as validate_config;
use tracing::info;

/// Application context - holds all services and dependencies
pub struct AppContext {
    pub config: Config,
    pub store: Arc<dyn SessionStore>,
    pub clock: Arc<dyn Clock>,
    pub classifier: Arc<DayBoundaryClassifier>,
    pub engine: Arc<ActivitySessionEngine>,
    pub instances: Arc<InstanceService>,
}

impl AppContext {
    /// Validate `config`, open the configured store and load the persisted
    /// session.
    pub async fn new(config: Config) -> Result<Self> {
        validate_config(&config)?;
        let store = build_store(&config)?;
        Self::with_parts(config, store, Arc::new(SystemClock)).await
    }

    /// Wire services over an existing store and clock.
    pub async fn with_parts(
        config: Config,
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
    ) -> Result<Self> {
        let zone = DayZone::from_name(config.day.timezone.as_deref())?;
        let classifier = Arc::new(DayBoundaryClassifier::new(
            Arc::clone(&clock),
            zone,
            config.day.boundary_hour,
        )?);

        let engine = Arc::new(ActivitySessionEngine::new(Arc::clone(&store), Arc::clone(&clock)));
        let instances = Arc::new(InstanceService::new(
            Arc::clone(&store),
            Arc::clone(&clock),
            Arc::clone(&classifier),
        ));

        let session = engine.load().await?;
        info!(
            backend = %config.storage.backend,
            boundary_hour = config.day.boundary_hour,
            has_session = session.is_some(),
            "application context ready"
        );

        Ok(Self { config, store, clock, classifier, engine, instances })
    }
}
