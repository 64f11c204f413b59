//! Guild event handlers driving the game lifecycle.
//!
//! `guild_create` fires on startup for every guild the bot is in, when the bot
//! joins a new guild and when a guild comes back after an outage. Depending on
//! the guild's mirror it builds the game, resumes an aborted build or runs the
//! startup integrity check.
//!
//! `guild_delete` fires when the bot is removed from a guild and also when a
//! guild becomes unavailable; only the former deletes the mirror.

use dioxus_logger::tracing;
use serenity::all::{Context, Guild, UnavailableGuild};

use crate::{
    bot::handler::Handler,
    data::game_server::GameServerRepository,
    model::platform::LiveGuild,
    service::game::GameService,
};

/// Handles the guild_create event when a guild becomes available.
///
/// - No mirror: the game is built from scratch.
/// - Mirror not playing: the build stopped part-way and is resumed.
/// - Mirror playing and flagged at startup: the guild is checked against it.
/// - Otherwise nothing happens.
///
/// # Arguments
/// - `handler` - Bot state holding the database, template and guild locks
/// - `ctx` - Discord context for platform calls
/// - `guild` - Full guild snapshot including roles and channels
/// - `_is_new` - Whether this is a new guild join (unused, the mirror decides)
pub async fn handle_guild_create(
    handler: &Handler,
    ctx: Context,
    guild: Guild,
    _is_new: Option<bool>,
) {
    let live = LiveGuild::from(&guild);
    let _guard = handler.locks.lock(live.id).await;

    tracing::debug!(
        "Guild create event: {} ({}) - roles: {}, channels: {}",
        live.name,
        live.id,
        live.roles.len(),
        live.channels.len()
    );

    let repo = GameServerRepository::new(&handler.db);
    let mirror = match repo.find_by_guild_id(live.id).await {
        Ok(mirror) => mirror,
        Err(e) => {
            tracing::error!("Failed to load mirror of guild {}: {:?}", live.id, e);
            return;
        }
    };

    let platform = Handler::platform(&ctx);
    let service = GameService::new(&handler.db, &platform, &handler.template);

    match mirror {
        Some(mirror) if mirror.playing && mirror.needs_check => {
            if let Err(e) = service.check_guild(&live).await {
                tracing::error!("Integrity check of guild {} failed: {:?}", live.id, e);
            }
        }
        Some(mirror) if mirror.playing => {
            tracing::debug!("Guild {} already playing", live.id);
        }
        _ => {
            if let Err(e) = service.build_server(&live).await {
                tracing::error!("Failed to build game on guild {}: {:?}", live.id, e);
            }
        }
    }
}

/// Handles the guild_delete event.
///
/// Outages are ignored. When the bot was removed from the guild the mirror is
/// deleted since nothing left on Discord can be managed any more.
///
/// # Arguments
/// - `handler` - Bot state holding the database and guild locks
/// - `_ctx` - Discord context (unused, required by event handler signature)
/// - `incomplete` - Guild ID and whether it merely became unavailable
/// - `_full` - Cached guild data if available (unused)
pub async fn handle_guild_delete(
    handler: &Handler,
    _ctx: Context,
    incomplete: UnavailableGuild,
    _full: Option<Guild>,
) {
    let guild_id = incomplete.id.get();

    if incomplete.unavailable {
        tracing::warn!("Guild {} became unavailable", guild_id);
        return;
    }

    let guard = handler.locks.lock(guild_id).await;
    let repo = GameServerRepository::new(&handler.db);

    if let Err(e) = repo.delete(guild_id).await {
        tracing::error!("Failed to delete mirror of guild {}: {:?}", guild_id, e);
    } else {
        tracing::info!("Removed from guild {}, mirror deleted", guild_id);
    }

    drop(guard);
    handler.locks.forget(guild_id).await;
}
