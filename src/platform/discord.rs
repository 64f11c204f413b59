//! Serenity-backed implementation of the Discord gateway seam.
//!
//! Also hosts the conversions from serenity's gateway models to the snapshots the
//! reconciler works on.

use serenity::{
    all::{
        ChannelId, ChannelType, CreateChannel, CreateEmbed, CreateEmbedFooter, CreateMessage,
        EditChannel, EditRole, EmojiId, Guild, GuildChannel, GuildId, MessageId,
        PermissionOverwrite, PermissionOverwriteType, Permissions, ReactionType, Role, RoleId,
        UserId,
    },
    async_trait,
    http::Http,
};
use std::sync::Arc;

use crate::{
    error::platform::PlatformError,
    model::platform::{
        ChannelPlacement, ChannelSettings, ChannelShape, Embed, LiveChannel, LiveGuild, LiveRole,
        Overwrite, OverwriteTarget, RoleSettings,
    },
    platform::Platform,
};

/// Discord gateway backed by serenity's HTTP client.
///
/// Cheap to construct per event: the HTTP client is shared through an `Arc`.
pub struct SerenityPlatform {
    http: Arc<Http>,
    bot_user_id: u64,
}

impl SerenityPlatform {
    /// Creates a new platform handle.
    ///
    /// # Arguments
    /// - `http` - Arc-wrapped Discord HTTP client for API requests
    /// - `bot_user_id` - User ID of the connected bot
    pub fn new(http: Arc<Http>, bot_user_id: u64) -> Self {
        Self { http, bot_user_id }
    }
}

fn edit_role_builder(settings: &RoleSettings) -> EditRole<'static> {
    EditRole::new()
        .name(settings.name.clone())
        .permissions(Permissions::from_bits_truncate(settings.permissions))
        .colour(settings.color)
        .hoist(settings.hoist)
        .mentionable(settings.mentionable)
}

fn overwrite_kind(target: OverwriteTarget) -> PermissionOverwriteType {
    match target {
        OverwriteTarget::Role(id) => PermissionOverwriteType::Role(RoleId::new(id)),
        OverwriteTarget::Member(id) => PermissionOverwriteType::Member(UserId::new(id)),
    }
}

/// Parses a configured emoji, either unicode or a custom `name:id` pair.
pub fn parse_emoji(emoji: &str) -> ReactionType {
    if let Some((name, id)) = emoji.rsplit_once(':') {
        if let Ok(id) = id.parse::<u64>() {
            return ReactionType::Custom {
                animated: false,
                id: EmojiId::new(id),
                name: Some(name.to_string()),
            };
        }
    }
    ReactionType::Unicode(emoji.to_string())
}

/// Key used to compare a received reaction with the configured join emoji.
///
/// Custom emoji are identified by their ID alone, unicode emoji by their text.
pub fn emoji_key(reaction: &ReactionType) -> String {
    match reaction {
        ReactionType::Custom { id, .. } => id.get().to_string(),
        ReactionType::Unicode(text) => text.clone(),
        other => other.to_string(),
    }
}

/// Key of the configured join emoji, comparable with `emoji_key`.
pub fn configured_emoji_key(emoji: &str) -> String {
    emoji_key(&parse_emoji(emoji))
}

#[async_trait]
impl Platform for SerenityPlatform {
    fn current_user_id(&self) -> u64 {
        self.bot_user_id
    }

    async fn guild_roles(&self, guild_id: u64) -> Result<Vec<LiveRole>, PlatformError> {
        let roles = self
            .http
            .get_guild_roles(GuildId::new(guild_id))
            .await
            .map_err(|e| PlatformError::operation("get_guild_roles", e))?;

        Ok(roles
            .iter()
            .map(|role| {
                let mut live = LiveRole::from(role);
                live.guild_id = guild_id;
                live
            })
            .collect())
    }

    async fn create_role(
        &self,
        guild_id: u64,
        settings: &RoleSettings,
    ) -> Result<u64, PlatformError> {
        let role = GuildId::new(guild_id)
            .create_role(&self.http, edit_role_builder(settings))
            .await
            .map_err(|e| PlatformError::operation("create_role", e))?;

        Ok(role.id.get())
    }

    async fn edit_role(
        &self,
        guild_id: u64,
        role_id: u64,
        settings: &RoleSettings,
    ) -> Result<(), PlatformError> {
        GuildId::new(guild_id)
            .edit_role(&self.http, RoleId::new(role_id), edit_role_builder(settings))
            .await
            .map_err(|e| PlatformError::operation("edit_role", e))?;

        Ok(())
    }

    async fn delete_role(&self, guild_id: u64, role_id: u64) -> Result<(), PlatformError> {
        self.http
            .delete_role(GuildId::new(guild_id), RoleId::new(role_id), None)
            .await
            .map_err(|e| PlatformError::operation("delete_role", e))
    }

    async fn create_channel(
        &self,
        guild_id: u64,
        settings: &ChannelSettings,
    ) -> Result<u64, PlatformError> {
        let kind = match settings.shape {
            ChannelShape::Category => ChannelType::Category,
            ChannelShape::Text => ChannelType::Text,
        };

        let mut builder = CreateChannel::new(settings.name.clone()).kind(kind);
        if let Some(topic) = &settings.topic {
            builder = builder.topic(topic.clone());
        }
        if let Some(parent_id) = settings.parent_id {
            builder = builder.category(ChannelId::new(parent_id));
        }
        if let Some(position) = settings.position {
            builder = builder.position(position);
        }

        let channel = GuildId::new(guild_id)
            .create_channel(&self.http, builder)
            .await
            .map_err(|e| PlatformError::operation("create_channel", e))?;

        Ok(channel.id.get())
    }

    async fn edit_channel(
        &self,
        channel_id: u64,
        placement: ChannelPlacement,
    ) -> Result<(), PlatformError> {
        let builder = EditChannel::new()
            .category(ChannelId::new(placement.parent_id))
            .position(placement.position);

        ChannelId::new(channel_id)
            .edit(&self.http, builder)
            .await
            .map_err(|e| PlatformError::operation("edit_channel", e))?;

        Ok(())
    }

    async fn delete_channel(&self, channel_id: u64) -> Result<(), PlatformError> {
        self.http
            .delete_channel(ChannelId::new(channel_id), None)
            .await
            .map_err(|e| PlatformError::operation("delete_channel", e))?;

        Ok(())
    }

    async fn set_overwrite(
        &self,
        channel_id: u64,
        overwrite: &Overwrite,
    ) -> Result<(), PlatformError> {
        let target = PermissionOverwrite {
            allow: Permissions::from_bits_truncate(overwrite.allow),
            deny: Permissions::from_bits_truncate(overwrite.deny),
            kind: overwrite_kind(overwrite.target),
        };

        ChannelId::new(channel_id)
            .create_permission(&self.http, target)
            .await
            .map_err(|e| PlatformError::operation("set_overwrite", e))
    }

    async fn delete_overwrite(
        &self,
        channel_id: u64,
        target: OverwriteTarget,
    ) -> Result<(), PlatformError> {
        ChannelId::new(channel_id)
            .delete_permission(&self.http, overwrite_kind(target))
            .await
            .map_err(|e| PlatformError::operation("delete_overwrite", e))
    }

    async fn send_embed(&self, channel_id: u64, embed: &Embed) -> Result<u64, PlatformError> {
        let mut builder = CreateEmbed::new()
            .title(embed.title.clone())
            .description(embed.description.clone())
            .color(embed.color);
        if let Some(icon) = &embed.icon {
            builder = builder.thumbnail(icon.clone());
        }
        if let Some(footer) = &embed.footer {
            builder = builder.footer(CreateEmbedFooter::new(footer.clone()));
        }
        for field in &embed.fields {
            builder = builder.field(field.title.clone(), field.value.clone(), field.inline);
        }

        let message = ChannelId::new(channel_id)
            .send_message(&self.http, CreateMessage::new().embed(builder))
            .await
            .map_err(|e| PlatformError::operation("send_embed", e))?;

        Ok(message.id.get())
    }

    async fn add_reaction(
        &self,
        channel_id: u64,
        message_id: u64,
        emoji: &str,
    ) -> Result<(), PlatformError> {
        self.http
            .create_reaction(
                ChannelId::new(channel_id),
                MessageId::new(message_id),
                &parse_emoji(emoji),
            )
            .await
            .map_err(|e| PlatformError::operation("add_reaction", e))
    }

    async fn add_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError> {
        self.http
            .add_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                None,
            )
            .await
            .map_err(|e| PlatformError::operation("add_member_role", e))
    }

    async fn remove_member_role(
        &self,
        guild_id: u64,
        user_id: u64,
        role_id: u64,
    ) -> Result<(), PlatformError> {
        self.http
            .remove_member_role(
                GuildId::new(guild_id),
                UserId::new(user_id),
                RoleId::new(role_id),
                None,
            )
            .await
            .map_err(|e| PlatformError::operation("remove_member_role", e))
    }

    async fn direct_message(&self, user_id: u64, content: &str) -> Result<(), PlatformError> {
        let channel = UserId::new(user_id)
            .create_dm_channel(&self.http)
            .await
            .map_err(|e| PlatformError::operation("direct_message", e))?;

        channel
            .id
            .send_message(&self.http, CreateMessage::new().content(content))
            .await
            .map_err(|e| PlatformError::operation("direct_message", e))?;

        Ok(())
    }

    async fn leave_guild(&self, guild_id: u64) -> Result<(), PlatformError> {
        self.http
            .leave_guild(GuildId::new(guild_id))
            .await
            .map_err(|e| PlatformError::operation("leave_guild", e))
    }
}

impl From<&Role> for LiveRole {
    fn from(role: &Role) -> Self {
        Self {
            id: role.id.get(),
            guild_id: role.guild_id.get(),
            name: role.name.clone(),
            permissions: role.permissions.bits(),
            color: role.colour.0,
            hoist: role.hoist,
            mentionable: role.mentionable,
        }
    }
}

impl From<&GuildChannel> for LiveChannel {
    fn from(channel: &GuildChannel) -> Self {
        let overwrites = channel
            .permission_overwrites
            .iter()
            .filter_map(|o| {
                let target = match o.kind {
                    PermissionOverwriteType::Role(id) => OverwriteTarget::Role(id.get()),
                    PermissionOverwriteType::Member(id) => OverwriteTarget::Member(id.get()),
                    _ => return None,
                };
                Some(Overwrite::new(target, o.allow.bits(), o.deny.bits()))
            })
            .collect();

        Self {
            id: channel.id.get(),
            guild_id: channel.guild_id.get(),
            name: channel.name.clone(),
            parent_id: channel.parent_id.map(|id| id.get()),
            position: channel.position,
            overwrites,
        }
    }
}

impl From<&Guild> for LiveGuild {
    fn from(guild: &Guild) -> Self {
        let guild_id = guild.id.get();

        Self {
            id: guild_id,
            name: guild.name.clone(),
            owner_id: guild.owner_id.get(),
            roles: guild
                .roles
                .values()
                .map(|role| {
                    let mut live = LiveRole::from(role);
                    live.guild_id = guild_id;
                    live
                })
                .collect(),
            channels: guild
                .channels
                .values()
                .map(|channel| {
                    let mut live = LiveChannel::from(channel);
                    live.guild_id = guild_id;
                    live
                })
                .collect(),
        }
    }
}
