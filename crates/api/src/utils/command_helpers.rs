//! Command execution helpers
//!
//! Provides utilities to reduce boilerplate when implementing commands with
//! timing and logging.

use std::future::Future;
use std::time::Instant;

use daybreak_domain::Result as DomainResult;

use crate::utils::logging::log_command_execution;

/// Execute a command, timing it and logging the outcome.
///
/// # Example
///
/// ```rust,ignore
/// pub async fn pause_activity(ctx: &AppContext) -> Result<Option<Session>> {
///     execute_command("session::pause_activity", || ctx.engine.pause()).await
/// }
/// ```
pub async fn execute_command<F, Fut, T>(command_name: &str, command_fn: F) -> DomainResult<T>
where
    F: FnOnce() -> Fut,
    Fut: Future<Output = DomainResult<T>>,
{
    let start = Instant::now();

    let result = command_fn().await;

    log_command_execution(command_name, start.elapsed(), result.as_ref().err());

    result
}
