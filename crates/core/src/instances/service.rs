//! Activity instance service - CRUD and lifecycle transitions

use std::sync::Arc;

use daybreak_domain::constants::{
    ACTIVITY_INSTANCE_INDEX_NAMESPACE, ACTIVITY_INSTANCE_NAMESPACE, ALL_INDEX_KEY,
};
use daybreak_domain::{
    ActivityInstance, Completion, DaybreakError, InstanceUpdate, NewInstance, Result,
};
use tracing::{debug, info, instrument, warn};

use crate::store::records::{
    append_to_id_list, get_id_list, get_record, put_record, remove_from_id_list,
};
use crate::store::SessionStore;
use crate::time::clock::Clock;
use crate::time::day_boundary::DayBoundaryClassifier;

/// Activity instance service
pub struct InstanceService {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    classifier: Arc<DayBoundaryClassifier>,
}

impl InstanceService {
    /// Create a new instance service
    pub fn new(
        store: Arc<dyn SessionStore>,
        clock: Arc<dyn Clock>,
        classifier: Arc<DayBoundaryClassifier>,
    ) -> Self {
        Self { store, clock, classifier }
    }

    pub fn classifier(&self) -> &DayBoundaryClassifier {
        &self.classifier
    }

    /// Create and index a new incomplete instance.
    #[instrument(skip(self, new), fields(type_id = %new.type_id))]
    pub async fn create_instance(&self, new: NewInstance) -> Result<ActivityInstance> {
        if new.title.trim().is_empty() {
            warn!("rejected instance with empty title");
            return Err(DaybreakError::InvalidInput("instance title must not be empty".into()));
        }

        let instance = ActivityInstance::create(new, self.clock.now_millis());
        self.save(&instance).await?;
        append_to_id_list(
            self.store.as_ref(),
            ACTIVITY_INSTANCE_INDEX_NAMESPACE,
            ALL_INDEX_KEY,
            &instance.id,
        )
        .await?;

        info!(instance_id = %instance.id, "activity instance created");
        Ok(instance)
    }

    pub async fn get_instance(&self, id: &str) -> Result<Option<ActivityInstance>> {
        get_record(self.store.as_ref(), ACTIVITY_INSTANCE_NAMESPACE, id).await
    }

    /// All indexed instances in index order. Dangling index entries are
    /// skipped.
    pub async fn list_instances(&self) -> Result<Vec<ActivityInstance>> {
        let ids =
            get_id_list(self.store.as_ref(), ACTIVITY_INSTANCE_INDEX_NAMESPACE, ALL_INDEX_KEY)
                .await?;

        let mut instances = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get_instance(&id).await? {
                Some(instance) => instances.push(instance),
                None => warn!(instance_id = %id, "index references missing instance"),
            }
        }
        Ok(instances)
    }

    /// Apply a partial update to title and/or type.
    pub async fn update_instance(
        &self,
        id: &str,
        update: InstanceUpdate,
    ) -> Result<ActivityInstance> {
        let mut instance = self.require(id).await?;
        if update.is_empty() {
            return Ok(instance);
        }

        if let Some(title) = update.title {
            if title.trim().is_empty() {
                return Err(DaybreakError::InvalidInput(
                    "instance title must not be empty".into(),
                ));
            }
            instance.title = title;
        }
        if let Some(type_id) = update.type_id {
            instance.type_id = type_id;
        }

        self.save(&instance).await?;
        debug!(instance_id = %id, "activity instance updated");
        Ok(instance)
    }

    /// Remove the record and its index entry. Deleting a missing instance is
    /// a no-op.
    pub async fn delete_instance(&self, id: &str) -> Result<()> {
        self.store.remove(ACTIVITY_INSTANCE_NAMESPACE, id).await?;
        let was_indexed = remove_from_id_list(
            self.store.as_ref(),
            ACTIVITY_INSTANCE_INDEX_NAMESPACE,
            ALL_INDEX_KEY,
            id,
        )
        .await?;
        info!(instance_id = %id, was_indexed, "activity instance deleted");
        Ok(())
    }

    pub async fn complete_instance(&self, id: &str) -> Result<ActivityInstance> {
        let mut instance = self.require(id).await?;
        let now = self.clock.now_millis();
        instance.completion = Completion::Completed { at: now };
        instance.last_active_at = now;
        self.save(&instance).await?;
        info!(instance_id = %id, "activity instance completed");
        Ok(instance)
    }

    /// Revert to incomplete regardless of when the instance was completed.
    pub async fn uncomplete_instance(&self, id: &str) -> Result<ActivityInstance> {
        let mut instance = self.require(id).await?;
        instance.completion = Completion::Incomplete;
        self.save(&instance).await?;
        info!(instance_id = %id, "activity instance marked incomplete");
        Ok(instance)
    }

    /// Reopen an instance completed during the current logical day.
    pub async fn restart_instance(&self, id: &str) -> Result<ActivityInstance> {
        let mut instance = self.require(id).await?;

        let Completion::Completed { at } = instance.completion else {
            return Err(DaybreakError::InstanceNotCompleted);
        };
        if !self.classifier.is_current_day(at)? {
            debug!(instance_id = %id, completed_at = at, "restart refused for previous day");
            return Err(DaybreakError::RestartFromPreviousDay);
        }

        instance.completion = Completion::Incomplete;
        instance.last_active_at = self.clock.now_millis();
        self.save(&instance).await?;
        info!(instance_id = %id, "activity instance restarted");
        Ok(instance)
    }

    /// Bump `last_active_at` to now.
    pub async fn touch_instance(&self, id: &str) -> Result<ActivityInstance> {
        let mut instance = self.require(id).await?;
        instance.last_active_at = self.clock.now_millis();
        self.save(&instance).await?;
        Ok(instance)
    }

    /// Like [`touch_instance`](Self::touch_instance) but tolerates ids that
    /// are not instances, such as free-standing activities.
    pub async fn touch_if_exists(&self, id: &str) -> Result<Option<ActivityInstance>> {
        match self.touch_instance(id).await {
            Ok(instance) => Ok(Some(instance)),
            Err(DaybreakError::NotFound(_)) => Ok(None),
            Err(err) => Err(err),
        }
    }

    /// Instances that are incomplete or were completed today, in index order.
    pub async fn current_day_instances(&self) -> Result<Vec<ActivityInstance>> {
        let all = self.list_instances().await?;
        self.classifier.current_day_instances(all)
    }

    async fn require(&self, id: &str) -> Result<ActivityInstance> {
        self.get_instance(id)
            .await?
            .ok_or_else(|| DaybreakError::NotFound(format!("activity instance {id}")))
    }

    async fn save(&self, instance: &ActivityInstance) -> Result<()> {
        put_record(self.store.as_ref(), ACTIVITY_INSTANCE_NAMESPACE, &instance.id, instance).await
    }
}
