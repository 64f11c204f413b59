//! Ready event handler for bot initialization.
//!
//! Fired once per gateway connection after authentication. Guilds arrive
//! afterwards as `guild_create` events, which is where building and the
//! startup integrity check happen.

use dioxus_logger::tracing;
use serenity::all::{ActivityData, Context, Ready};

/// Handles the ready event when the bot connects to Discord.
///
/// # Arguments
/// - `ctx` - Discord context for setting activity status
/// - `ready` - Ready event data containing bot user information
pub async fn handle_ready(ctx: Context, ready: Ready) {
    tracing::info!(
        "{} is connected to Discord, {} guilds pending",
        ready.user.name,
        ready.guilds.len()
    );

    ctx.set_activity(Some(ActivityData::custom("Guarding the castle")));
}
