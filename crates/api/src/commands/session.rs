//! Activity session commands
//!
//! Starting, switching or resuming an activity also bumps the matching
//! instance's `lastActiveAt` when the activity id names an instance.

use daybreak_domain::{format_elapsed, ActivityLog, Result, Session};
use serde::Serialize;
use tracing::{info, warn};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

/// Session state as shown by a host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSnapshot {
    pub session: Option<Session>,
    pub loading: bool,
    pub elapsed_ms: i64,
    /// `elapsed_ms` as `H:MM:SS`.
    pub elapsed: String,
}

/// Start a new activity, stacking any current one.
pub async fn start_activity(ctx: &AppContext, activity_id: &str) -> Result<Session> {
    execute_command("session::start_activity", || async move {
        info!(activity_id, "Starting activity");
        let session = ctx.engine.start(activity_id).await?;
        touch_activity(ctx, activity_id).await;
        Ok(session)
    })
    .await
}

pub async fn pause_activity(ctx: &AppContext) -> Result<Option<Session>> {
    execute_command("session::pause_activity", || ctx.engine.pause()).await
}

pub async fn resume_activity(ctx: &AppContext) -> Result<Option<Session>> {
    execute_command("session::resume_activity", || async move {
        let session = ctx.engine.resume().await?;
        if let Some(session) = &session {
            touch_activity(ctx, &session.current_log.activity_id).await;
        }
        Ok(session)
    })
    .await
}

/// Stop and archive the current activity.
pub async fn stop_activity(ctx: &AppContext) -> Result<Option<ActivityLog>> {
    execute_command("session::stop_activity", || ctx.engine.stop()).await
}

pub async fn switch_activity(ctx: &AppContext, activity_id: &str) -> Result<Session> {
    execute_command("session::switch_activity", || async move {
        info!(activity_id, "Switching activity");
        let session = ctx.engine.switch_activity(activity_id).await?;
        touch_activity(ctx, activity_id).await;
        Ok(session)
    })
    .await
}

/// Promote a stacked activity; `index` defaults to the most recently
/// stacked one.
pub async fn resume_from_stack(ctx: &AppContext, index: Option<usize>) -> Result<Option<Session>> {
    execute_command("session::resume_from_stack", || async move {
        let session = ctx.engine.resume_from_stack(index).await?;
        if let Some(session) = &session {
            touch_activity(ctx, &session.current_log.activity_id).await;
        }
        Ok(session)
    })
    .await
}

/// Current session with its elapsed time recomputed against the clock.
pub fn get_session(ctx: &AppContext) -> SessionSnapshot {
    let elapsed_ms = ctx.engine.elapsed_ms();
    SessionSnapshot {
        session: ctx.engine.session(),
        loading: ctx.engine.is_loading(),
        elapsed_ms,
        elapsed: format_elapsed(elapsed_ms),
    }
}

/// Archived logs, optionally restricted to one activity.
pub async fn list_activity_logs(
    ctx: &AppContext,
    activity_id: Option<&str>,
) -> Result<Vec<ActivityLog>> {
    execute_command("session::list_activity_logs", || async move {
        match activity_id {
            Some(activity_id) => ctx.engine.archive().list_logs_for_activity(activity_id).await,
            None => ctx.engine.archive().list_logs().await,
        }
    })
    .await
}

pub async fn update_activity_log_notes(
    ctx: &AppContext,
    log_id: &str,
    notes: Option<String>,
) -> Result<ActivityLog> {
    execute_command("session::update_activity_log_notes", || {
        ctx.engine.archive().update_notes(log_id, notes)
    })
    .await
}

/// Total archived time for one activity.
pub async fn activity_total_duration(ctx: &AppContext, activity_id: &str) -> Result<i64> {
    execute_command("session::activity_total_duration", || {
        ctx.engine.archive().total_duration_for_activity(activity_id)
    })
    .await
}

/// Best-effort recency bump. The session change has already been written,
/// so a failure here is logged rather than returned.
async fn touch_activity(ctx: &AppContext, activity_id: &str) {
    if let Err(err) = ctx.instances.touch_if_exists(activity_id).await {
        warn!(activity_id, error = %err, "failed to update instance activity time");
    }
}
