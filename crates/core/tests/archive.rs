//! Integration tests for the activity log archive.

mod support;

use std::sync::Arc;

use daybreak_core::ActivityLogArchive;
use daybreak_domain::constants::{ACTIVITY_LOG_INDEX_NAMESPACE, ALL_INDEX_KEY};
use daybreak_domain::{ActivityLog, DaybreakError};
use serde_json::json;
use support::MockSessionStore;

fn finished(activity_id: &str, start: i64, duration: i64) -> ActivityLog {
    let mut log = ActivityLog::start(activity_id, start);
    log.end_time = Some(start + duration);
    log.duration = duration;
    log
}

fn archive() -> (Arc<MockSessionStore>, ActivityLogArchive) {
    let store = Arc::new(MockSessionStore::new());
    (store.clone(), ActivityLogArchive::new(store))
}

#[tokio::test]
async fn archive_writes_record_and_both_indices() -> anyhow::Result<()> {
    let (store, archive) = archive();
    let log = finished("reading", 1_000, 500);

    archive.archive(&log).await?;

    assert_eq!(store.raw(ACTIVITY_LOG_INDEX_NAMESPACE, ALL_INDEX_KEY), Some(json!([log.id])));
    assert_eq!(store.raw(ACTIVITY_LOG_INDEX_NAMESPACE, "reading"), Some(json!([log.id])));
    assert_eq!(archive.get_log(&log.id).await?, Some(log));
    Ok(())
}

#[tokio::test]
async fn archive_rejects_unfinished_log() {
    let (store, archive) = archive();

    let err = archive.archive(&ActivityLog::start("reading", 0)).await.unwrap_err();

    assert!(matches!(err, DaybreakError::InvalidInput(_)));
    assert_eq!(store.write_count(), 0);
}

#[tokio::test]
async fn listing_is_per_activity_in_archive_order() -> anyhow::Result<()> {
    let (_, archive) = archive();
    let first = finished("reading", 0, 100);
    let other = finished("writing", 200, 50);
    let second = finished("reading", 400, 300);
    for log in [&first, &other, &second] {
        archive.archive(log).await?;
    }

    let reading = archive.list_logs_for_activity("reading").await?;
    assert_eq!(reading, vec![first.clone(), second.clone()]);
    assert_eq!(archive.list_logs().await?, vec![first, other, second]);
    assert_eq!(archive.total_duration_for_activity("reading").await?, 400);
    Ok(())
}

#[tokio::test]
async fn activity_named_all_does_not_list_other_activities() -> anyhow::Result<()> {
    let (_, archive) = archive();
    archive.archive(&finished("reading", 0, 100)).await?;
    let all_log = finished("all", 200, 100);
    archive.archive(&all_log).await?;

    assert_eq!(archive.list_logs_for_activity("all").await?, vec![all_log]);
    Ok(())
}

#[tokio::test]
async fn update_notes_replaces_and_clears() -> anyhow::Result<()> {
    let (_, archive) = archive();
    let log = finished("reading", 0, 100);
    archive.archive(&log).await?;

    let noted = archive.update_notes(&log.id, Some("chapter 3".into())).await?;
    assert_eq!(noted.notes.as_deref(), Some("chapter 3"));

    let cleared = archive.update_notes(&log.id, Some("  ".into())).await?;
    assert_eq!(cleared.notes, None);
    assert_eq!(archive.get_log(&log.id).await?.and_then(|l| l.notes), None);
    Ok(())
}

#[tokio::test]
async fn update_notes_on_missing_log_is_not_found() {
    let (_, archive) = archive();

    let err = archive.update_notes("missing", None).await.unwrap_err();

    assert!(matches!(err, DaybreakError::NotFound(_)));
}

#[tokio::test]
async fn dangling_index_entries_are_skipped() -> anyhow::Result<()> {
    let (store, archive) = archive();
    let log = finished("reading", 0, 100);
    archive.archive(&log).await?;
    store.seed(ACTIVITY_LOG_INDEX_NAMESPACE, ALL_INDEX_KEY, json!(["ghost", log.id]));

    assert_eq!(archive.list_logs().await?, vec![log]);
    Ok(())
}
