use dioxus_logger::tracing;
use serenity::all::{Context, Reaction};

use crate::{
    bot::handler::Handler,
    platform::discord::emoji_key,
    service::dispatch::{Dispatcher, ReactionEvent},
};

/// Handle a reaction added to a message
pub async fn handle_reaction_add(handler: &Handler, ctx: Context, reaction: Reaction) {
    let (Some(guild_id), Some(user_id)) = (reaction.guild_id, reaction.user_id) else {
        return;
    };

    let event = ReactionEvent {
        guild_id: guild_id.get(),
        channel_id: reaction.channel_id.get(),
        message_id: reaction.message_id.get(),
        user_id: user_id.get(),
        emoji: emoji_key(&reaction.emoji),
    };

    let _guard = handler.locks.lock(event.guild_id).await;
    let platform = Handler::platform(&ctx);
    let dispatcher = Dispatcher::new(&handler.db, &platform, &handler.template, &handler.prefix);

    if let Err(e) = dispatcher.handle_reaction(&event).await {
        tracing::error!(
            "Failed to handle reaction by {} in guild {}: {:?}",
            event.user_id,
            event.guild_id,
            e
        );
    }
}
