use std::time::Duration;

use daybreak_domain::DaybreakError;
use tracing::{info, warn};

/// Log the outcome of a command execution with structured fields.
///
/// `command` is a logical identifier such as `"session::start_activity"`.
/// Validation errors the host shows to the user are logged at info; every
/// other failure is a warning.
#[inline]
pub fn log_command_execution(command: &str, elapsed: Duration, error: Option<&DaybreakError>) {
    let duration_ms = elapsed.as_millis() as u64;

    match error {
        None => info!(command, duration_ms, "command_execution_success"),
        Some(err) if err.is_user_facing() => {
            info!(command, duration_ms, error_type = error_label(err), "command_rejected");
        }
        Some(err) => {
            warn!(
                command,
                duration_ms,
                error_type = error_label(err),
                error = %err,
                "command_execution_failure"
            );
        }
    }
}

/// Convert a `DaybreakError` into a stable label suitable for logging.
#[inline]
pub fn error_label(error: &DaybreakError) -> &'static str {
    match error {
        DaybreakError::InvalidStackIndex => "invalid_stack_index",
        DaybreakError::InstanceNotCompleted => "instance_not_completed",
        DaybreakError::RestartFromPreviousDay => "restart_from_previous_day",
        DaybreakError::Storage(_) => "storage",
        DaybreakError::Serialization(_) => "serialization",
        DaybreakError::Config(_) => "config",
        DaybreakError::NotFound(_) => "not_found",
        DaybreakError::InvalidInput(_) => "invalid_input",
        DaybreakError::Internal(_) => "internal",
    }
}
