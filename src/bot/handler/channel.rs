//! Channel event handlers repairing drift on game channels.

use dioxus_logger::tracing;
use serenity::all::{Context, GuildChannel, Message};

use crate::{bot::handler::Handler, model::platform::LiveChannel, service::game::GameService};

/// Handles the channel_update event.
///
/// Placement and permission overwrites of game channels are restored; name and
/// topic edits are left alone.
///
/// # Arguments
/// - `handler` - Bot state holding the database, template and guild locks
/// - `ctx` - Discord context for platform calls
/// - `_old` - Previous channel state if cached (unused, the mirror is the reference)
/// - `new` - Updated channel state from Discord
pub async fn handle_channel_update(
    handler: &Handler,
    ctx: Context,
    _old: Option<GuildChannel>,
    new: GuildChannel,
) {
    let live = LiveChannel::from(&new);
    let _guard = handler.locks.lock(live.guild_id).await;

    let platform = Handler::platform(&ctx);
    let service = GameService::new(&handler.db, &platform, &handler.template);

    if let Err(e) = service.channel_updated(&live).await {
        tracing::error!(
            "Failed to repair channel {} ({}) in guild {}: {:?}",
            live.name,
            live.id,
            live.guild_id,
            e
        );
    }
}

/// Handles the channel_delete event.
///
/// # Arguments
/// - `handler` - Bot state holding the database, template and guild locks
/// - `ctx` - Discord context for platform calls
/// - `channel` - The deleted guild channel from Discord
/// - `_messages` - Messages that were in the channel if available (unused)
pub async fn handle_channel_delete(
    handler: &Handler,
    ctx: Context,
    channel: GuildChannel,
    _messages: Option<Vec<Message>>,
) {
    let guild_id = channel.guild_id.get();
    let channel_id = channel.id.get();
    let _guard = handler.locks.lock(guild_id).await;

    let platform = Handler::platform(&ctx);
    let service = GameService::new(&handler.db, &platform, &handler.template);

    if let Err(e) = service.channel_deleted(guild_id, channel_id).await {
        tracing::error!(
            "Failed to recreate channel {} ({}) in guild {}: {:?}",
            channel.name,
            channel_id,
            guild_id,
            e
        );
    }
}
