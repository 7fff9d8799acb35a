//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for Daybreak
///
/// The three validation variants carry fixed messages because hosts display
/// them verbatim.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum DaybreakError {
    #[error("Invalid stack index")]
    InvalidStackIndex,

    #[error("Activity instance is not completed")]
    InstanceNotCompleted,

    #[error("Cannot restart activity from a previous day")]
    RestartFromPreviousDay,

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

impl DaybreakError {
    /// True for the fixed-message validation errors a host shows to the user.
    pub fn is_user_facing(&self) -> bool {
        matches!(
            self,
            Self::InvalidStackIndex | Self::InstanceNotCompleted | Self::RestartFromPreviousDay
        )
    }
}

impl From<serde_json::Error> for DaybreakError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}

/// Result type alias for Daybreak operations
pub type Result<T> = std::result::Result<T, DaybreakError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn validation_messages_are_stable() {
        assert_eq!(DaybreakError::InvalidStackIndex.to_string(), "Invalid stack index");
        assert_eq!(
            DaybreakError::InstanceNotCompleted.to_string(),
            "Activity instance is not completed"
        );
        assert_eq!(
            DaybreakError::RestartFromPreviousDay.to_string(),
            "Cannot restart activity from a previous day"
        );
    }

    #[test]
    fn user_facing_classification() {
        assert!(DaybreakError::InvalidStackIndex.is_user_facing());
        assert!(!DaybreakError::Storage("disk full".into()).is_user_facing());
    }

    #[test]
    fn serializes_with_type_tag() {
        let json = serde_json::to_value(DaybreakError::NotFound("log-1".into())).unwrap();
        assert_eq!(json, serde_json::json!({ "type": "NotFound", "message": "log-1" }));
    }
}
