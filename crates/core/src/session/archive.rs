//! Archive of finalized activity logs
//!
//! Each log is stored under `activity-log/{id}` and indexed twice: in the
//! global `activity-logs/all` list and in `activity-logs/{activityId}`.

use std::sync::Arc;

use daybreak_domain::constants::{
    ACTIVITY_LOG_INDEX_NAMESPACE, ACTIVITY_LOG_NAMESPACE, ALL_INDEX_KEY,
};
use daybreak_domain::{ActivityLog, DaybreakError, Result};
use tracing::{info, warn};

use crate::store::records::{append_to_id_list, get_id_list, get_record, put_record};
use crate::store::SessionStore;

/// Read/append access to finished activity logs.
#[derive(Clone)]
pub struct ActivityLogArchive {
    store: Arc<dyn SessionStore>,
}

impl ActivityLogArchive {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        Self { store }
    }

    /// Persist a finalized log and add it to both indices.
    pub async fn archive(&self, log: &ActivityLog) -> Result<()> {
        if !log.is_finished() {
            return Err(DaybreakError::InvalidInput(format!(
                "activity log {} has not been stopped",
                log.id
            )));
        }

        let store = self.store.as_ref();
        put_record(store, ACTIVITY_LOG_NAMESPACE, &log.id, log).await?;
        append_to_id_list(store, ACTIVITY_LOG_INDEX_NAMESPACE, ALL_INDEX_KEY, &log.id).await?;
        append_to_id_list(store, ACTIVITY_LOG_INDEX_NAMESPACE, &log.activity_id, &log.id).await?;

        info!(
            log_id = %log.id,
            activity_id = %log.activity_id,
            duration_ms = log.duration,
            "activity log archived"
        );
        Ok(())
    }

    pub async fn get_log(&self, id: &str) -> Result<Option<ActivityLog>> {
        get_record(self.store.as_ref(), ACTIVITY_LOG_NAMESPACE, id).await
    }

    /// Every archived log, oldest first.
    pub async fn list_logs(&self) -> Result<Vec<ActivityLog>> {
        self.load_index(ALL_INDEX_KEY).await
    }

    /// Archived logs of one activity, oldest first.
    pub async fn list_logs_for_activity(&self, activity_id: &str) -> Result<Vec<ActivityLog>> {
        // An activity id of "all" shares its index key with the global list.
        let logs = self.load_index(activity_id).await?;
        Ok(logs.into_iter().filter(|log| log.activity_id == activity_id).collect())
    }

    /// Sum of archived durations for one activity.
    pub async fn total_duration_for_activity(&self, activity_id: &str) -> Result<i64> {
        let logs = self.list_logs_for_activity(activity_id).await?;
        Ok(logs.iter().map(ActivityLog::recorded_duration).sum())
    }

    /// Replace the notes on an archived log.
    pub async fn update_notes(&self, id: &str, notes: Option<String>) -> Result<ActivityLog> {
        let mut log = self
            .get_log(id)
            .await?
            .ok_or_else(|| DaybreakError::NotFound(format!("activity log {id}")))?;

        log.notes = notes.filter(|text| !text.trim().is_empty());
        put_record(self.store.as_ref(), ACTIVITY_LOG_NAMESPACE, &log.id, &log).await?;
        Ok(log)
    }

    async fn load_index(&self, key: &str) -> Result<Vec<ActivityLog>> {
        let ids = get_id_list(self.store.as_ref(), ACTIVITY_LOG_INDEX_NAMESPACE, key).await?;

        let mut logs = Vec::with_capacity(ids.len());
        for id in ids {
            match self.get_log(&id).await? {
                Some(log) => logs.push(log),
                None => warn!(log_id = %id, index = key, "index references missing activity log"),
            }
        }
        Ok(logs)
    }
}
