//! Activity instance commands

use daybreak_core::get_sorted_instances;
use daybreak_domain::{ActivityInstance, InstanceUpdate, NewInstance, Result};

use crate::utils::command_helpers::execute_command;
use crate::AppContext;

pub async fn create_instance(ctx: &AppContext, new: NewInstance) -> Result<ActivityInstance> {
    execute_command("instances::create_instance", || ctx.instances.create_instance(new)).await
}

pub async fn get_instance(ctx: &AppContext, id: &str) -> Result<Option<ActivityInstance>> {
    execute_command("instances::get_instance", || ctx.instances.get_instance(id)).await
}

pub async fn update_instance(
    ctx: &AppContext,
    id: &str,
    update: InstanceUpdate,
) -> Result<ActivityInstance> {
    execute_command("instances::update_instance", || ctx.instances.update_instance(id, update))
        .await
}

pub async fn delete_instance(ctx: &AppContext, id: &str) -> Result<()> {
    execute_command("instances::delete_instance", || ctx.instances.delete_instance(id)).await
}

pub async fn complete_instance(ctx: &AppContext, id: &str) -> Result<ActivityInstance> {
    execute_command("instances::complete_instance", || ctx.instances.complete_instance(id)).await
}

pub async fn uncomplete_instance(ctx: &AppContext, id: &str) -> Result<ActivityInstance> {
    execute_command("instances::uncomplete_instance", || ctx.instances.uncomplete_instance(id))
        .await
}

/// Reopen an instance completed during the current logical day.
pub async fn restart_instance(ctx: &AppContext, id: &str) -> Result<ActivityInstance> {
    execute_command("instances::restart_instance", || ctx.instances.restart_instance(id)).await
}

pub async fn touch_instance(ctx: &AppContext, id: &str) -> Result<ActivityInstance> {
    execute_command("instances::touch_instance", || ctx.instances.touch_instance(id)).await
}

/// Today's instances in display order: incomplete first, then completed,
/// each most recently active first.
pub async fn current_day_instances(ctx: &AppContext) -> Result<Vec<ActivityInstance>> {
    execute_command("instances::current_day_instances", || async move {
        let today = ctx.instances.current_day_instances().await?;
        Ok(get_sorted_instances(&today))
    })
    .await
}
