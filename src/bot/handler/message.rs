use dioxus_logger::tracing;
use serenity::all::{Context, Message};

use crate::{
    bot::handler::Handler,
    service::dispatch::{parse_command, CommandEvent, Dispatcher},
};

/// Handle message creation in a channel
pub async fn handle_message(handler: &Handler, ctx: Context, message: Message) {
    // Commands only run in guilds
    let Some(guild_id) = message.guild_id else {
        return;
    };
    if message.author.bot || parse_command(&handler.prefix, &message.content).is_none() {
        return;
    }

    let cached_owner = message.guild(&ctx.cache).map(|guild| guild.owner_id);
    let owner_id = match cached_owner {
        Some(owner_id) => owner_id,
        None => match ctx.http.get_guild(guild_id).await {
            Ok(guild) => guild.owner_id,
            Err(e) => {
                tracing::error!("Failed to resolve owner of guild {}: {:?}", guild_id, e);
                return;
            }
        },
    };

    let event = CommandEvent {
        guild_id: guild_id.get(),
        channel_id: message.channel_id.get(),
        author_id: message.author.id.get(),
        owner_id: owner_id.get(),
        content: message.content,
    };

    let _guard = handler.locks.lock(event.guild_id).await;
    let platform = Handler::platform(&ctx);
    let dispatcher = Dispatcher::new(&handler.db, &platform, &handler.template, &handler.prefix);

    if let Err(e) = dispatcher.handle_message(&event).await {
        tracing::error!(
            "Failed to handle command from {} in guild {}: {:?}",
            event.author_id,
            event.guild_id,
            e
        );
    }
}
