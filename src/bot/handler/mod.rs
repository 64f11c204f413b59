use sea_orm::DatabaseConnection;
use serenity::all::{
    Context, EventHandler, Guild, GuildChannel, GuildId, Message, Reaction, Ready, Role, RoleId,
    UnavailableGuild,
};
use serenity::async_trait;
use std::sync::Arc;

use crate::{model::template::Template, platform::SerenityPlatform, service::lock::GuildLocks};

pub mod channel;
pub mod guild;
pub mod message;
pub mod reaction;
pub mod ready;
pub mod role;

/// Discord bot event handler
pub struct Handler {
    pub db: DatabaseConnection,
    pub template: Arc<Template>,
    pub prefix: String,
    pub locks: GuildLocks,
}

impl Handler {
    pub fn new(db: DatabaseConnection, template: Arc<Template>, prefix: String) -> Self {
        Self {
            db,
            template,
            prefix,
            locks: GuildLocks::new(),
        }
    }

    /// Platform gateway acting as the connected bot user.
    pub fn platform(ctx: &Context) -> SerenityPlatform {
        let bot_user_id = ctx.cache.current_user().id.get();
        SerenityPlatform::new(ctx.http.clone(), bot_user_id)
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        ready::handle_ready(ctx, ready).await;
    }

    /// Called when a guild becomes available or the bot joins a new guild
    async fn guild_create(&self, ctx: Context, guild: Guild, is_new: Option<bool>) {
        guild::handle_guild_create(self, ctx, guild, is_new).await;
    }

    /// Called when the bot is removed from a guild or the guild goes offline
    async fn guild_delete(&self, ctx: Context, incomplete: UnavailableGuild, full: Option<Guild>) {
        guild::handle_guild_delete(self, ctx, incomplete, full).await;
    }

    /// Called when a role is updated in a guild
    async fn guild_role_update(&self, ctx: Context, old: Option<Role>, new: Role) {
        role::handle_guild_role_update(self, ctx, old, new).await;
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        removed_role_data_if_in_cache: Option<Role>,
    ) {
        role::handle_guild_role_delete(
            self,
            ctx,
            guild_id,
            removed_role_id,
            removed_role_data_if_in_cache,
        )
        .await;
    }

    /// Called when a channel is updated in a guild
    async fn channel_update(&self, ctx: Context, old: Option<GuildChannel>, new: GuildChannel) {
        channel::handle_channel_update(self, ctx, old, new).await;
    }

    /// Called when a channel is deleted from a guild
    async fn channel_delete(
        &self,
        ctx: Context,
        channel: GuildChannel,
        messages: Option<Vec<Message>>,
    ) {
        channel::handle_channel_delete(self, ctx, channel, messages).await;
    }

    /// Called when a message is sent in a channel
    async fn message(&self, ctx: Context, message: Message) {
        message::handle_message(self, ctx, message).await;
    }

    /// Called when a reaction is added to a message
    async fn reaction_add(&self, ctx: Context, reaction: Reaction) {
        reaction::handle_reaction_add(self, ctx, reaction).await;
    }
}
