//! Activity session engine - core business logic
//!
//! Exactly one session record exists at a time, stored under
//! `activity-session/current`. Each operation reads it, builds the complete
//! next state in memory and writes it back with a single `set`, so a failed
//! write leaves the previous state untouched.
//!
//! ## State machine (per activity log)
//!
//! ```text
//! NoSession ─start─▶ Running ⇄ Paused
//!                       │  switch / start
//!                       ▼
//!                    Stacked (always paused) ─resume_from_stack─▶ Running
//!
//! Running | Paused ─stop─▶ Stopped (archive only)
//! ```

use std::sync::Arc;

use daybreak_domain::constants::{SESSION_KEY, SESSION_NAMESPACE};
use daybreak_domain::utils::format::format_duration_short;
use daybreak_domain::{ActivityLog, DaybreakError, EpochMillis, Result, Session};
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info, instrument, warn};

use super::archive::ActivityLogArchive;
use crate::store::records::{get_record, put_record};
use crate::store::SessionStore;
use crate::time::clock::Clock;
use crate::time::duration::calculate_accumulated_duration;

/// Last session observed by this engine, for synchronous reads by the host.
#[derive(Debug, Clone)]
struct SessionView {
    session: Option<Session>,
    loading: bool,
}

/// Activity session engine
pub struct ActivitySessionEngine {
    store: Arc<dyn SessionStore>,
    clock: Arc<dyn Clock>,
    archive: ActivityLogArchive,
    view: RwLock<SessionView>,
    /// Serializes operations so no two interleave their storage calls.
    op_lock: Mutex<()>,
}

impl ActivitySessionEngine {
    /// Create a new engine over the given store and clock
    pub fn new(store: Arc<dyn SessionStore>, clock: Arc<dyn Clock>) -> Self {
        let archive = ActivityLogArchive::new(Arc::clone(&store));
        Self {
            store,
            clock,
            archive,
            view: RwLock::new(SessionView { session: None, loading: true }),
            op_lock: Mutex::new(()),
        }
    }

    /// Archive that receives logs on [`stop`](Self::stop).
    pub fn archive(&self) -> &ActivityLogArchive {
        &self.archive
    }

    /// Session as of the last completed operation or [`load`](Self::load).
    pub fn session(&self) -> Option<Session> {
        self.view.read().session.clone()
    }

    /// True until the first load or operation has completed.
    pub fn is_loading(&self) -> bool {
        self.view.read().loading
    }

    /// Net elapsed time of the current log, recomputed against the clock on
    /// every call. Zero without a session.
    pub fn elapsed_ms(&self) -> i64 {
        self.view.read().session.as_ref().map_or(0, |session| {
            calculate_accumulated_duration(&session.current_log, self.clock.now_millis())
        })
    }

    /// Read the persisted session into the engine's view.
    pub async fn load(&self) -> Result<Option<Session>> {
        let _guard = self.op_lock.lock().await;
        let session = self.read_session().await?;
        self.publish(session.clone());
        Ok(session)
    }

    /// Start a fresh log for `activity_id`.
    ///
    /// An existing current log is suspended and pushed onto the stack.
    #[instrument(skip(self))]
    pub async fn start(&self, activity_id: &str) -> Result<Session> {
        let _guard = self.op_lock.lock().await;
        let existing = self.read_session().await?;
        let next = self.begin_activity(existing, activity_id);

        self.write_session(&next).await?;
        info!(
            log_id = %next.current_log.id,
            stack_depth = next.stack_len(),
            "activity started"
        );
        self.publish(Some(next.clone()));
        Ok(next)
    }

    /// Pause the current log. No-op without a session or when already paused.
    #[instrument(skip(self))]
    pub async fn pause(&self) -> Result<Option<Session>> {
        let _guard = self.op_lock.lock().await;
        let Some(mut session) = self.read_session().await? else {
            debug!("pause ignored: no session");
            self.publish(None);
            return Ok(None);
        };

        if !suspend_current(&mut session, self.clock.now_millis()) {
            debug!("pause ignored: already paused");
            self.publish(Some(session.clone()));
            return Ok(Some(session));
        }

        self.write_session(&session).await?;
        info!(log_id = %session.current_log.id, "activity paused");
        self.publish(Some(session.clone()));
        Ok(Some(session))
    }

    /// Resume the current log. No-op without a session or when running.
    #[instrument(skip(self))]
    pub async fn resume(&self) -> Result<Option<Session>> {
        let _guard = self.op_lock.lock().await;
        let Some(mut session) = self.read_session().await? else {
            debug!("resume ignored: no session");
            self.publish(None);
            return Ok(None);
        };

        if !session.current_log.close_pause(self.clock.now_millis()) {
            debug!("resume ignored: not paused");
            self.publish(Some(session.clone()));
            return Ok(Some(session));
        }
        session.is_paused = false;

        self.write_session(&session).await?;
        info!(log_id = %session.current_log.id, "activity resumed");
        self.publish(Some(session.clone()));
        Ok(Some(session))
    }

    /// Finalize the current log, archive it and delete the session record.
    ///
    /// Stacked logs are discarded together with the session.
    #[instrument(skip(self))]
    pub async fn stop(&self) -> Result<Option<ActivityLog>> {
        let _guard = self.op_lock.lock().await;
        let Some(session) = self.read_session().await? else {
            debug!("stop ignored: no session");
            self.publish(None);
            return Ok(None);
        };

        let now = self.clock.now_millis();
        let mut log = session.current_log;
        let duration = calculate_accumulated_duration(&log, now);
        log.close_pause(now);
        log.end_time = Some(now);
        log.duration = duration;

        self.archive.archive(&log).await?;
        self.store.remove(SESSION_NAMESPACE, SESSION_KEY).await?;

        if !session.paused_activity_stack.is_empty() {
            info!(
                discarded = session.paused_activity_stack.len(),
                "stacked activities dropped with the session"
            );
        }
        info!(
            log_id = %log.id,
            activity_id = %log.activity_id,
            duration_ms = duration,
            elapsed = %format_duration_short(duration),
            "activity stopped"
        );
        self.publish(None);
        Ok(Some(log))
    }

    /// Suspend the current activity onto the stack and start `activity_id`.
    ///
    /// Without a session this is exactly [`start`](Self::start).
    #[instrument(skip(self))]
    pub async fn switch_activity(&self, activity_id: &str) -> Result<Session> {
        let _guard = self.op_lock.lock().await;
        let existing = self.read_session().await?;
        let had_session = existing.is_some();
        let next = self.begin_activity(existing, activity_id);

        self.write_session(&next).await?;
        info!(
            log_id = %next.current_log.id,
            stack_depth = next.stack_len(),
            had_session,
            "activity switched"
        );
        self.publish(Some(next.clone()));
        Ok(next)
    }

    /// Promote a stacked log back to current.
    ///
    /// `index` defaults to the stack's last entry. With an empty stack and no
    /// index this is a no-op; an explicit index outside the stack fails with
    /// [`DaybreakError::InvalidStackIndex`]. The current log, if any, is
    /// suspended and pushed first; indices refer to the stack before that
    /// push.
    #[instrument(skip(self))]
    pub async fn resume_from_stack(&self, index: Option<usize>) -> Result<Option<Session>> {
        let _guard = self.op_lock.lock().await;
        let existing = self.read_session().await?;
        let stack_len = existing.as_ref().map_or(0, Session::stack_len);

        let target = match index {
            Some(index) if index >= stack_len => {
                warn!(index, stack_len, "resume from stack rejected");
                return Err(DaybreakError::InvalidStackIndex);
            }
            Some(index) => index,
            None if stack_len == 0 => {
                debug!("resume from stack ignored: stack empty");
                self.publish(existing.clone());
                return Ok(existing);
            }
            None => stack_len - 1,
        };

        // stack_len > 0 implies a session exists
        let Some(mut session) = existing else {
            return Err(DaybreakError::Internal("stacked logs without a session".into()));
        };

        let now = self.clock.now_millis();
        suspend_current(&mut session, now);
        let Session { current_log, paused_activity_stack: mut stack, .. } = session;
        stack.push(current_log);

        let mut resumed = stack.remove(target);
        resumed.close_pause(now);
        let next = Session::running(resumed, stack);

        self.write_session(&next).await?;
        info!(
            log_id = %next.current_log.id,
            activity_id = %next.current_log.activity_id,
            stack_depth = next.stack_len(),
            "activity resumed from stack"
        );
        self.publish(Some(next.clone()));
        Ok(Some(next))
    }

    /// Build the session for a newly started log, stacking any current one.
    fn begin_activity(&self, existing: Option<Session>, activity_id: &str) -> Session {
        let now = self.clock.now_millis();
        let stack = match existing {
            Some(mut session) => {
                suspend_current(&mut session, now);
                let mut stack = session.paused_activity_stack;
                stack.push(session.current_log);
                stack
            }
            None => Vec::new(),
        };
        Session::running(ActivityLog::start(activity_id, now), stack)
    }

    async fn read_session(&self) -> Result<Option<Session>> {
        let session: Option<Session> =
            get_record(self.store.as_ref(), SESSION_NAMESPACE, SESSION_KEY).await?;

        Ok(session.map(|mut session| {
            if !session.is_consistent() {
                warn!(
                    stored = session.is_paused,
                    "stored pause flag disagrees with pause intervals"
                );
                session.is_paused = session.current_log.is_paused();
            }
            session
        }))
    }

    async fn write_session(&self, session: &Session) -> Result<()> {
        put_record(self.store.as_ref(), SESSION_NAMESPACE, SESSION_KEY, session).await
    }

    fn publish(&self, session: Option<Session>) {
        let mut view = self.view.write();
        view.session = session;
        view.loading = false;
    }
}

/// Open a pause interval on the current log and mark the session paused.
///
/// Shared by `pause`, `start`, `switch_activity` and `resume_from_stack`.
/// Returns `false` when the log was already paused.
fn suspend_current(session: &mut Session, now: EpochMillis) -> bool {
    let opened = session.current_log.open_pause(now);
    session.is_paused = true;
    opened
}
