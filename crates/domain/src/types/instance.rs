//! Activity instance types
//!
//! In memory, completion is a tagged variant so "completed without a
//! completion time" cannot be represented. On the wire the record keeps the
//! flat `completed` / `completedAt` pair.

use serde::{Deserialize, Serialize};

use super::{new_record_id, EpochMillis};

/// Completion state of an instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    Incomplete,
    Completed { at: EpochMillis },
}

impl Completion {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed { .. })
    }

    pub fn completed_at(&self) -> Option<EpochMillis> {
        match *self {
            Self::Incomplete => None,
            Self::Completed { at } => Some(at),
        }
    }
}

/// A day-scoped, title-bearing unit of timed work.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ActivityInstanceRecord", into = "ActivityInstanceRecord")]
pub struct ActivityInstance {
    pub id: String,
    pub title: String,
    pub type_id: String,
    pub completion: Completion,
    pub last_active_at: EpochMillis,
    pub created_at: EpochMillis,
}

impl ActivityInstance {
    /// New incomplete instance created at `now`.
    pub fn create(new: NewInstance, now: EpochMillis) -> Self {
        Self {
            id: new_record_id(),
            title: new.title,
            type_id: new.type_id,
            completion: Completion::Incomplete,
            last_active_at: now,
            created_at: now,
        }
    }

    pub fn is_completed(&self) -> bool {
        self.completion.is_completed()
    }

    pub fn completed_at(&self) -> Option<EpochMillis> {
        self.completion.completed_at()
    }
}

/// Persisted shape of an [`ActivityInstance`].
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ActivityInstanceRecord {
    id: String,
    title: String,
    type_id: String,
    #[serde(default)]
    completed: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    completed_at: Option<EpochMillis>,
    last_active_at: EpochMillis,
    created_at: EpochMillis,
}

impl From<ActivityInstanceRecord> for ActivityInstance {
    fn from(record: ActivityInstanceRecord) -> Self {
        // A completed record without a timestamp predates every day boundary.
        let completion = if record.completed {
            Completion::Completed { at: record.completed_at.unwrap_or(0) }
        } else {
            Completion::Incomplete
        };

        Self {
            id: record.id,
            title: record.title,
            type_id: record.type_id,
            completion,
            last_active_at: record.last_active_at,
            created_at: record.created_at,
        }
    }
}

impl From<ActivityInstance> for ActivityInstanceRecord {
    fn from(instance: ActivityInstance) -> Self {
        Self {
            id: instance.id,
            title: instance.title,
            type_id: instance.type_id,
            completed: instance.completion.is_completed(),
            completed_at: instance.completion.completed_at(),
            last_active_at: instance.last_active_at,
            created_at: instance.created_at,
        }
    }
}

/// Input for creating an instance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NewInstance {
    pub title: String,
    pub type_id: String,
}

/// Partial update of an instance's descriptive fields.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstanceUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub type_id: Option<String>,
}

impl InstanceUpdate {
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.type_id.is_none()
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn completed_instance_keeps_flat_wire_shape() {
        let instance = ActivityInstance {
            id: "i-1".into(),
            title: "Write report".into(),
            type_id: "deep-work".into(),
            completion: Completion::Completed { at: 42 },
            last_active_at: 40,
            created_at: 10,
        };

        let value = serde_json::to_value(&instance).unwrap();
        assert_eq!(
            value,
            json!({
                "id": "i-1",
                "title": "Write report",
                "typeId": "deep-work",
                "completed": true,
                "completedAt": 42,
                "lastActiveAt": 40,
                "createdAt": 10
            })
        );

        let back: ActivityInstance = serde_json::from_value(value).unwrap();
        assert_eq!(back, instance);
    }

    #[test]
    fn stray_completed_at_on_incomplete_record_is_dropped() {
        let instance: ActivityInstance = serde_json::from_value(json!({
            "id": "i-2",
            "title": "Stretch",
            "typeId": "break",
            "completed": false,
            "completedAt": 99,
            "lastActiveAt": 5,
            "createdAt": 5
        }))
        .unwrap();
        assert_eq!(instance.completion, Completion::Incomplete);
    }

    #[test]
    fn completed_without_timestamp_reads_as_epoch() {
        let instance: ActivityInstance = serde_json::from_value(json!({
            "id": "i-3",
            "title": "Legacy",
            "typeId": "misc",
            "completed": true,
            "lastActiveAt": 5,
            "createdAt": 5
        }))
        .unwrap();
        assert_eq!(instance.completed_at(), Some(0));
    }

    #[test]
    fn create_starts_incomplete() {
        let instance = ActivityInstance::create(
            NewInstance { title: "Plan".into(), type_id: "t".into() },
            1_000,
        );
        assert!(!instance.is_completed());
        assert_eq!(instance.created_at, 1_000);
        assert_eq!(instance.last_active_at, 1_000);
    }
}
