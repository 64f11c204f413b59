//! Role event handlers repairing drift on game roles.
//!
//! Edits and deletions of roles the game created are reverted; events for any
//! other role are ignored by the reconciler.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildId, Role, RoleId};

use crate::{bot::handler::Handler, model::platform::LiveRole, service::game::GameService};

/// Handles the guild_role_update event.
///
/// # Arguments
/// - `handler` - Bot state holding the database, template and guild locks
/// - `ctx` - Discord context for platform calls
/// - `_old` - Previous role state if cached (unused, the mirror is the reference)
/// - `new` - Updated role state from Discord
pub async fn handle_guild_role_update(
    handler: &Handler,
    ctx: Context,
    _old: Option<Role>,
    new: Role,
) {
    let live = LiveRole::from(&new);
    let _guard = handler.locks.lock(live.guild_id).await;

    let platform = Handler::platform(&ctx);
    let service = GameService::new(&handler.db, &platform, &handler.template);

    if let Err(e) = service.role_updated(&live).await {
        tracing::error!(
            "Failed to repair role {} in guild {}: {:?}",
            live.id,
            live.guild_id,
            e
        );
    }
}

/// Handles the guild_role_delete event.
///
/// # Arguments
/// - `handler` - Bot state holding the database, template and guild locks
/// - `ctx` - Discord context for platform calls
/// - `guild_id` - ID of the guild the role was deleted from
/// - `removed_role_id` - ID of the deleted role
/// - `_removed_role_data_if_in_cache` - Role data if it was in cache (unused)
pub async fn handle_guild_role_delete(
    handler: &Handler,
    ctx: Context,
    guild_id: GuildId,
    removed_role_id: RoleId,
    _removed_role_data_if_in_cache: Option<Role>,
) {
    let guild_id = guild_id.get();
    let role_id = removed_role_id.get();
    let _guard = handler.locks.lock(guild_id).await;

    let platform = Handler::platform(&ctx);
    let service = GameService::new(&handler.db, &platform, &handler.template);

    if let Err(e) = service.role_deleted(guild_id, role_id).await {
        tracing::error!(
            "Failed to recreate role {} in guild {}: {:?}",
            role_id,
            guild_id,
            e
        );
    }
}
