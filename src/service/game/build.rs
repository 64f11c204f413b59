//! Building the game topology on a guild.
//!
//! Objects are created in dependency order: roles, the category, channels, their
//! permission overwrites, then seed messages. The first failed platform call
//! aborts the build without rolling back; the mirror records everything created
//! so far with `playing = false` and the next build resumes from it.

use dioxus_logger::tracing;

use crate::{
    data::game_server::GameServerRepository,
    error::{platform::PlatformError, AppError},
    model::{
        mirror::{GuildMirror, MirrorChannel, MirrorMessage, MirrorRole},
        platform::{ChannelSettings, ChannelShape, LiveChannel, LiveGuild, RoleSettings},
        template::{ChannelTemplate, RoleTemplate, RULES_MESSAGE},
    },
    service::{embed, permission::desired_overwrites},
};

use super::GameService;

impl<'a> GameService<'a> {
    /// Builds the game on a guild, or resumes a build that stopped part-way.
    ///
    /// A guild seen for the first time gets a fresh mirror. For a guild whose
    /// mirror exists but is not playing, every recorded object that is still live
    /// is reused instead of created again.
    ///
    /// # Arguments
    /// - `guild` - Snapshot of the guild as delivered by the gateway
    ///
    /// # Returns
    /// - `Ok(GuildMirror)` - Persisted mirror with `playing = true`
    /// - `Err(AppError::PlatformErr)` - Base role missing or a platform call failed
    /// - `Err(AppError::DbErr)` - The mirror could not be read or written
    pub async fn build_server(&self, guild: &LiveGuild) -> Result<GuildMirror, AppError> {
        let repo = GameServerRepository::new(self.db);
        let everyone_role_id = self.resolve_everyone(guild.id).await?;

        let mut mirror = match repo.find_by_guild_id(guild.id).await? {
            Some(mirror) => {
                tracing::info!("Resuming game build on guild {} ({})", guild.name, guild.id);
                mirror
            }
            None => {
                let mirror = GuildMirror::new(
                    guild.id,
                    everyone_role_id,
                    self.template.category.name.clone(),
                );
                repo.create(&mirror).await?;
                tracing::info!("Building game on guild {} ({})", guild.name, guild.id);
                mirror
            }
        };
        mirror.everyone_role_id = everyone_role_id;
        mirror.playing = false;

        let outcome = self.populate(&mut mirror, guild).await;
        if outcome.is_ok() {
            mirror.playing = true;
            mirror.needs_check = false;
        }
        self.save_then(&mirror, outcome).await?;

        tracing::info!(
            "Game built on guild {}: {} roles, {} channels, {} messages",
            guild.id,
            mirror.roles.len(),
            mirror.channels.len(),
            mirror.messages.len()
        );

        Ok(mirror)
    }

    async fn populate(
        &self,
        mirror: &mut GuildMirror,
        guild: &LiveGuild,
    ) -> Result<(), AppError> {
        for role in self.template.game_roles() {
            match mirror.role(&role.name).map(|recorded| recorded.role_id) {
                Some(role_id) if guild.has_role(role_id) => {}
                Some(old_id) => self.replace_role(mirror, role, old_id).await?,
                None => {
                    self.create_role(mirror, role).await?;
                }
            }
        }

        let category_live = mirror
            .category
            .channel_id
            .is_some_and(|id| guild.channel(id).is_some());
        if !category_live {
            self.create_category(mirror).await?;
        }

        let mut reused = Vec::new();
        for channel in &self.template.channels {
            let live = mirror
                .channel(&channel.name)
                .and_then(|recorded| guild.channel(recorded.channel_id));
            match live {
                Some(live) => reused.push((channel.name.as_str(), live.clone())),
                None => {
                    self.create_channel(mirror, channel).await?;
                }
            }
        }

        for channel in &self.template.channels {
            let live = reused
                .iter()
                .find(|(name, _)| *name == channel.name)
                .map(|(_, live)| live);
            self.apply_overwrites(mirror, channel, live).await?;
        }

        for message in &self.template.messages {
            let posted = match (
                mirror.messages.get(&message.name),
                mirror.channel(&message.channel),
            ) {
                (Some(posted), Some(channel)) => posted.channel_id == channel.channel_id,
                _ => false,
            };
            if !posted {
                self.post_message(mirror, &message.name).await?;
            }
        }

        Ok(())
    }

    /// Finds the guild's base role.
    ///
    /// # Returns
    /// - `Ok(u64)` - ID of the `@everyone` role
    /// - `Err(PlatformError::Lookup)` - The guild reports no such role
    pub(super) async fn resolve_everyone(&self, guild_id: u64) -> Result<u64, AppError> {
        let roles = self.platform.guild_roles(guild_id).await?;

        roles
            .iter()
            .find(|r| r.id == guild_id || r.name == "@everyone")
            .map(|r| r.id)
            .ok_or_else(|| {
                PlatformError::Lookup(format!("everyone role of guild {}", guild_id)).into()
            })
    }

    /// Creates one game role and records it under its default name.
    pub(super) async fn create_role(
        &self,
        mirror: &mut GuildMirror,
        role: &RoleTemplate,
    ) -> Result<u64, AppError> {
        let settings = RoleSettings {
            name: role.name.clone(),
            permissions: role.permissions,
            color: role.color,
            hoist: role.hoist,
            mentionable: role.mentionable,
        };

        let role_id = self.platform.create_role(mirror.guild_id, &settings).await?;
        mirror.roles.insert(
            role.name.clone(),
            MirrorRole {
                role_id,
                tier: role.tier,
                permissions: role.permissions,
                hoist: role.hoist,
                mentionable: role.mentionable,
            },
        );

        tracing::debug!(
            "Created role {} ({}) in guild {}",
            role.name,
            role_id,
            mirror.guild_id
        );
        Ok(role_id)
    }

    pub(super) async fn create_category(
        &self,
        mirror: &mut GuildMirror,
    ) -> Result<u64, AppError> {
        let settings = ChannelSettings {
            name: self.template.category.name.clone(),
            shape: ChannelShape::Category,
            topic: None,
            parent_id: None,
            position: None,
        };

        let category_id = self
            .platform
            .create_channel(mirror.guild_id, &settings)
            .await?;
        mirror.category.channel_id = Some(category_id);
        mirror.category.name = settings.name;

        tracing::debug!(
            "Created category {} in guild {}",
            category_id,
            mirror.guild_id
        );
        Ok(category_id)
    }

    /// Creates one channel under the game category at its template position.
    ///
    /// Overwrites recorded for a previous instance of the channel are discarded;
    /// `apply_overwrites` records the new ones.
    pub(super) async fn create_channel(
        &self,
        mirror: &mut GuildMirror,
        channel: &ChannelTemplate,
    ) -> Result<u64, AppError> {
        let parent_id = mirror.category.channel_id.ok_or_else(|| {
            PlatformError::Lookup(format!("category of guild {}", mirror.guild_id))
        })?;
        let position = self
            .template
            .channel_position(&channel.name)
            .unwrap_or_default();

        let settings = ChannelSettings {
            name: channel.name.clone(),
            shape: ChannelShape::Text,
            topic: (!channel.topic.is_empty()).then(|| channel.topic.clone()),
            parent_id: Some(parent_id),
            position: Some(position),
        };

        let channel_id = self
            .platform
            .create_channel(mirror.guild_id, &settings)
            .await?;
        mirror.channels.insert(
            channel.name.clone(),
            MirrorChannel {
                channel_id,
                tier: channel.tier,
                kind: channel.kind,
                position,
                allow: channel.allow,
                deny: channel.deny,
                overwrites: Vec::new(),
            },
        );

        tracing::debug!(
            "Created channel {} ({}) in guild {}",
            channel.name,
            channel_id,
            mirror.guild_id
        );
        Ok(channel_id)
    }

    /// Applies a channel's overwrites one principal at a time.
    ///
    /// When the live channel is known, overwrites it already carries are skipped.
    /// Each applied overwrite is recorded immediately so an aborted run keeps
    /// what succeeded. Recorded overwrites for principals the channel no longer
    /// grants are forgotten.
    pub(super) async fn apply_overwrites(
        &self,
        mirror: &mut GuildMirror,
        channel: &ChannelTemplate,
        live: Option<&LiveChannel>,
    ) -> Result<(), AppError> {
        let desired = desired_overwrites(
            self.template,
            channel,
            mirror,
            self.platform.current_user_id(),
        );
        let Some(recorded) = mirror.channels.get_mut(&channel.name) else {
            return Ok(());
        };
        let channel_id = recorded.channel_id;
        recorded
            .overwrites
            .retain(|o| desired.iter().any(|d| d.target == o.target));

        for overwrite in desired {
            let present = live.is_some_and(|l| l.overwrites.contains(&overwrite));
            if !present {
                self.platform.set_overwrite(channel_id, &overwrite).await?;
            }

            if let Some(recorded) = mirror.channels.get_mut(&channel.name) {
                recorded.overwrites.retain(|o| o.target != overwrite.target);
                recorded.overwrites.push(overwrite);
            }
        }

        Ok(())
    }

    /// Posts one seed message into its channel and records it.
    ///
    /// The rules message also receives the join reaction.
    pub(super) async fn post_message(
        &self,
        mirror: &mut GuildMirror,
        name: &str,
    ) -> Result<u64, AppError> {
        let Some(message) = self.template.messages.iter().find(|m| m.name == name) else {
            return Err(AppError::NotFound(format!("Seed message {} not found", name)));
        };
        let channel_id = mirror
            .channel(&message.channel)
            .map(|c| c.channel_id)
            .ok_or_else(|| {
                PlatformError::Lookup(format!(
                    "channel {} of guild {}",
                    message.channel, mirror.guild_id
                ))
            })?;

        let message_id = self
            .platform
            .send_embed(channel_id, &embed::seed_message(message))
            .await?;
        mirror.messages.insert(
            message.name.clone(),
            MirrorMessage {
                message_id,
                channel_id,
            },
        );

        if message.name == RULES_MESSAGE {
            self.platform
                .add_reaction(channel_id, message_id, &self.template.join_emoji)
                .await?;
        }

        Ok(message_id)
    }
}
