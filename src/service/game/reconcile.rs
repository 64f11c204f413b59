//! Drift repair for tracked roles and channels.
//!
//! Each event is handled on its own and idempotently: an object already matching
//! its desired state costs no platform call. Events for guilds that are not
//! playing and for objects the mirror does not track are ignored. A failed
//! correction is logged by the caller and retried only when the next event for the
//! same object arrives.

use dioxus_logger::tracing;

use crate::{
    error::AppError,
    model::{
        mirror::GuildMirror,
        platform::{
            ChannelPlacement, LiveChannel, LiveGuild, LiveRole, OverwriteTarget, RoleSettings,
        },
        template::{ChannelTemplate, RoleTemplate},
    },
};

use super::GameService;

impl<'a> GameService<'a> {
    /// Reverts edits to a tracked role's permissions, hoist or mentionable flag.
    ///
    /// Name and colour changes made on Discord are kept.
    pub async fn role_updated(&self, role: &LiveRole) -> Result<(), AppError> {
        let Some(mirror) = self.load_playing(role.guild_id).await? else {
            return Ok(());
        };
        let Some((name, _)) = mirror.role_by_id(role.id) else {
            tracing::debug!("Ignoring update of untracked role {}", role.id);
            return Ok(());
        };
        let Some(template) = self.template.role(name) else {
            return Ok(());
        };

        self.repair_role(&mirror, template, role).await
    }

    /// Recreates a deleted game role and moves everything that referenced it over
    /// to the new role.
    pub async fn role_deleted(&self, guild_id: u64, role_id: u64) -> Result<(), AppError> {
        let Some(mut mirror) = self.load_playing(guild_id).await? else {
            return Ok(());
        };
        let Some(template) = mirror
            .role_by_id(role_id)
            .and_then(|(name, _)| self.template.role(name))
        else {
            tracing::debug!("Ignoring deletion of untracked role {}", role_id);
            return Ok(());
        };

        tracing::warn!(
            "Role {} ({}) deleted in guild {}, recreating",
            template.name,
            role_id,
            guild_id
        );

        let outcome = self.replace_role(&mut mirror, template, role_id).await;
        self.save_then(&mirror, outcome).await
    }

    /// Restores a tracked channel's placement and permission overwrites.
    pub async fn channel_updated(&self, channel: &LiveChannel) -> Result<(), AppError> {
        let Some(mirror) = self.load_playing(channel.guild_id).await? else {
            return Ok(());
        };
        let Some((name, _)) = mirror.channel_by_id(channel.id) else {
            tracing::debug!("Ignoring update of untracked channel {}", channel.id);
            return Ok(());
        };

        self.repair_channel(&mirror, name, channel).await
    }

    /// Recreates a deleted game channel or the game category.
    ///
    /// Channels left under a deleted category are not touched here; their own
    /// update events move them under the new category.
    pub async fn channel_deleted(&self, guild_id: u64, channel_id: u64) -> Result<(), AppError> {
        let Some(mut mirror) = self.load_playing(guild_id).await? else {
            return Ok(());
        };

        if mirror.is_category(channel_id) {
            tracing::warn!("Category deleted in guild {}, recreating", guild_id);
            let outcome = self.create_category(&mut mirror).await.map(|_| ());
            return self.save_then(&mirror, outcome).await;
        }

        let Some(template) = mirror
            .channel_by_id(channel_id)
            .and_then(|(name, _)| self.template.channel(name))
        else {
            tracing::debug!("Ignoring deletion of untracked channel {}", channel_id);
            return Ok(());
        };

        tracing::warn!(
            "Channel {} ({}) deleted in guild {}, recreating",
            template.name,
            channel_id,
            guild_id
        );

        let outcome = self.replace_channel(&mut mirror, template).await;
        self.save_then(&mirror, outcome).await
    }

    /// Compares a whole guild against its mirror and repairs every difference.
    ///
    /// Runs once per startup for each flagged guild. Missing objects are recreated,
    /// drifted ones corrected. Individual failures are logged and the check moves
    /// on; the flag is cleared once every object has been visited.
    pub async fn check_guild(&self, guild: &LiveGuild) -> Result<(), AppError> {
        let Some(mut mirror) = self.load_playing(guild.id).await? else {
            return Ok(());
        };

        tracing::info!(
            "Checking game integrity of guild {} ({})",
            guild.name,
            guild.id
        );

        for template in self.template.game_roles() {
            let recorded = mirror.role(&template.name).map(|r| r.role_id);
            let live = recorded.and_then(|id| guild.roles.iter().find(|r| r.id == id));

            let result = match (recorded, live) {
                (_, Some(live)) => self.repair_role(&mirror, template, live).await,
                (Some(old_id), None) => self.replace_role(&mut mirror, template, old_id).await,
                (None, None) => self.create_role(&mut mirror, template).await.map(|_| ()),
            };
            if let Err(e) = result {
                tracing::error!(
                    "Failed to repair role {} in guild {}: {:?}",
                    template.name,
                    guild.id,
                    e
                );
            }
        }

        let category_live = mirror
            .category
            .channel_id
            .is_some_and(|id| guild.channel(id).is_some());
        if !category_live {
            tracing::warn!("Category missing in guild {}, recreating", guild.id);
            if let Err(e) = self.create_category(&mut mirror).await {
                tracing::error!(
                    "Failed to recreate category in guild {}: {:?}",
                    guild.id,
                    e
                );
            }
        }

        for template in &self.template.channels {
            let live = mirror
                .channel(&template.name)
                .and_then(|c| guild.channel(c.channel_id));

            let result = match live {
                Some(live) => self.repair_channel(&mirror, &template.name, live).await,
                None => self.replace_channel(&mut mirror, template).await,
            };
            if let Err(e) = result {
                tracing::error!(
                    "Failed to repair channel {} in guild {}: {:?}",
                    template.name,
                    guild.id,
                    e
                );
            }
        }

        mirror.needs_check = false;
        self.save_then(&mirror, Ok(())).await
    }

    async fn repair_role(
        &self,
        mirror: &GuildMirror,
        template: &RoleTemplate,
        live: &LiveRole,
    ) -> Result<(), AppError> {
        let in_sync = live.permissions == template.permissions
            && live.hoist == template.hoist
            && live.mentionable == template.mentionable;
        if in_sync {
            tracing::debug!(
                "Role {} in guild {} is in sync",
                template.name,
                mirror.guild_id
            );
            return Ok(());
        }

        tracing::warn!(
            "Role {} ({}) drifted in guild {}, restoring",
            template.name,
            live.id,
            mirror.guild_id
        );

        let settings = RoleSettings {
            name: live.name.clone(),
            permissions: template.permissions,
            color: live.color,
            hoist: template.hoist,
            mentionable: template.mentionable,
        };
        self.platform
            .edit_role(mirror.guild_id, live.id, &settings)
            .await?;

        Ok(())
    }

    /// Creates a role again and re-points overwrites and players from the old ID.
    ///
    /// Follow-up failures are logged so one rejected overwrite does not strand
    /// the rest.
    pub(super) async fn replace_role(
        &self,
        mirror: &mut GuildMirror,
        template: &RoleTemplate,
        old_id: u64,
    ) -> Result<(), AppError> {
        let new_id = self.create_role(mirror, template).await?;
        let old_target = OverwriteTarget::Role(old_id);

        let mut reapply = Vec::new();
        for channel in mirror.channels.values_mut() {
            for overwrite in channel.overwrites.iter_mut() {
                if overwrite.target == old_target {
                    overwrite.target = OverwriteTarget::Role(new_id);
                    reapply.push((channel.channel_id, *overwrite));
                }
            }
        }

        for (channel_id, overwrite) in reapply {
            if let Err(e) = self.platform.set_overwrite(channel_id, &overwrite).await {
                tracing::error!(
                    "Failed to re-apply overwrite for role {} on channel {}: {:?}",
                    new_id,
                    channel_id,
                    e
                );
            }
        }

        let guild_id = mirror.guild_id;
        for player in mirror.players.iter_mut().filter(|p| p.role_id == old_id) {
            player.role_id = new_id;
            if let Err(e) = self
                .platform
                .add_member_role(guild_id, player.user_id, new_id)
                .await
            {
                tracing::error!(
                    "Failed to give role {} back to player {}: {:?}",
                    new_id,
                    player.user_id,
                    e
                );
            }
        }

        Ok(())
    }

    /// Diffs a live channel against its mirror entry and issues only the missing
    /// corrections.
    async fn repair_channel(
        &self,
        mirror: &GuildMirror,
        name: &str,
        live: &LiveChannel,
    ) -> Result<(), AppError> {
        let Some(recorded) = mirror.channel(name) else {
            return Ok(());
        };
        let mut corrections = 0;

        if let Some(parent_id) = mirror.category.channel_id {
            if live.parent_id != Some(parent_id) || live.position != recorded.position {
                tracing::warn!(
                    "Channel {} ({}) moved in guild {}, restoring placement",
                    name,
                    live.id,
                    mirror.guild_id
                );
                self.platform
                    .edit_channel(
                        live.id,
                        ChannelPlacement {
                            parent_id,
                            position: recorded.position,
                        },
                    )
                    .await?;
                corrections += 1;
            }
        }

        for overwrite in &live.overwrites {
            match recorded.overwrite_for(overwrite.target) {
                Some(expected) if expected == overwrite => {}
                Some(expected) => {
                    self.platform.set_overwrite(live.id, expected).await?;
                    corrections += 1;
                }
                None => {
                    self.platform
                        .delete_overwrite(live.id, overwrite.target)
                        .await?;
                    corrections += 1;
                }
            }
        }

        for expected in &recorded.overwrites {
            if !live.overwrites.iter().any(|o| o.target == expected.target) {
                self.platform.set_overwrite(live.id, expected).await?;
                corrections += 1;
            }
        }

        if corrections == 0 {
            tracing::debug!("Channel {} in guild {} is in sync", name, mirror.guild_id);
        } else {
            tracing::warn!(
                "Applied {} corrections to channel {} in guild {}",
                corrections,
                name,
                mirror.guild_id
            );
        }

        Ok(())
    }

    /// Creates a channel again, applies its overwrites and re-posts the seed
    /// messages it held.
    async fn replace_channel(
        &self,
        mirror: &mut GuildMirror,
        template: &ChannelTemplate,
    ) -> Result<(), AppError> {
        self.create_channel(mirror, template).await?;
        self.apply_overwrites(mirror, template, None).await?;

        let messages: Vec<String> = self
            .template
            .messages_for_channel(&template.name)
            .map(|m| m.name.clone())
            .collect();
        for message in messages {
            self.post_message(mirror, &message).await?;
        }

        Ok(())
    }
}
