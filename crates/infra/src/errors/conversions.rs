//! Conversions from external infrastructure errors into domain errors.

use daybreak_domain::DaybreakError;
use r2d2::Error as PoolCheckoutError;
use rusqlite::Error as SqlError;
use tokio::task::JoinError;

use crate::database::pool::PoolError;

/// Error newtype that keeps conversions on the infrastructure side and can be
/// converted back into the domain error.
#[derive(Debug)]
pub struct InfraError(pub DaybreakError);

impl From<InfraError> for DaybreakError {
    fn from(value: InfraError) -> Self {
        value.0
    }
}

impl From<DaybreakError> for InfraError {
    fn from(value: DaybreakError) -> Self {
        InfraError(value)
    }
}

trait IntoDaybreakError {
    fn into_daybreak(self) -> DaybreakError;
}

/* -------------------------------------------------------------------------- */
/* rusqlite::Error → DaybreakError */
/* -------------------------------------------------------------------------- */

impl IntoDaybreakError for SqlError {
    fn into_daybreak(self) -> DaybreakError {
        use rusqlite::ffi::ErrorCode;
        use rusqlite::Error as RE;

        match self {
            RE::SqliteFailure(err, maybe_message) => {
                let message = maybe_message.unwrap_or_default();
                match err.code {
                    ErrorCode::DatabaseBusy => DaybreakError::Storage("database is busy".into()),
                    ErrorCode::DatabaseLocked => {
                        DaybreakError::Storage("database is locked".into())
                    }
                    ErrorCode::NotADatabase => {
                        DaybreakError::Storage("file is not a sqlite database".into())
                    }
                    ErrorCode::ReadOnly => {
                        DaybreakError::Storage("database is read-only".into())
                    }
                    _ => DaybreakError::Storage(format!(
                        "sqlite failure {:?} (code {}): {}",
                        err.code, err.extended_code, message
                    )),
                }
            }
            RE::QueryReturnedNoRows => DaybreakError::NotFound("no rows returned by query".into()),
            RE::FromSqlConversionFailure(_, _, cause) => {
                DaybreakError::Serialization(format!("failed to convert sqlite value: {cause}"))
            }
            RE::InvalidColumnType(_, _, ty) => {
                DaybreakError::Serialization(format!("invalid column type: {ty}"))
            }
            RE::Utf8Error(_) => {
                DaybreakError::Serialization("invalid UTF-8 returned from sqlite".into())
            }
            RE::InvalidPath(path) => DaybreakError::Config(format!(
                "invalid database path: {}",
                path.to_string_lossy()
            )),
            other => DaybreakError::Storage(other.to_string()),
        }
    }
}

impl From<SqlError> for InfraError {
    fn from(value: SqlError) -> Self {
        InfraError(value.into_daybreak())
    }
}

/* -------------------------------------------------------------------------- */
/* r2d2::Error → DaybreakError */
/* -------------------------------------------------------------------------- */

impl IntoDaybreakError for PoolCheckoutError {
    fn into_daybreak(self) -> DaybreakError {
        DaybreakError::Storage(format!("failed to acquire database connection: {self}"))
    }
}

impl From<PoolCheckoutError> for InfraError {
    fn from(value: PoolCheckoutError) -> Self {
        InfraError(value.into_daybreak())
    }
}

/* -------------------------------------------------------------------------- */
/* PoolError → DaybreakError */
/* -------------------------------------------------------------------------- */

impl IntoDaybreakError for PoolError {
    fn into_daybreak(self) -> DaybreakError {
        match self {
            PoolError::Sql(err) => err.into_daybreak(),
            other => DaybreakError::Storage(other.to_string()),
        }
    }
}

impl From<PoolError> for InfraError {
    fn from(value: PoolError) -> Self {
        InfraError(value.into_daybreak())
    }
}

/* -------------------------------------------------------------------------- */
/* tokio::task::JoinError → DaybreakError */
/* -------------------------------------------------------------------------- */

/// Map a failed `spawn_blocking` join into the domain error.
pub fn map_join_error(err: JoinError) -> DaybreakError {
    if err.is_cancelled() {
        DaybreakError::Internal("blocking task cancelled".into())
    } else {
        DaybreakError::Internal(format!("blocking task failed: {err}"))
    }
}
