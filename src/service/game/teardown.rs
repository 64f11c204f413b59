use dioxus_logger::tracing;

use crate::{data::game_server::GameServerRepository, error::AppError};

use super::GameService;

impl<'a> GameService<'a> {
    /// Removes the game from a guild.
    ///
    /// The mirror is marked not playing before anything is deleted so drift events
    /// caused by the teardown itself are ignored. Every role, every channel and the
    /// category are then deleted, each failure logged without stopping the rest.
    /// The mirror is deleted once every deletion has been attempted.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(())` - Topology deleted (best effort) and mirror removed
    /// - `Err(AppError::NotFound)` - The guild has no game
    /// - `Err(AppError::DbErr)` - The mirror could not be updated or deleted
    pub async fn destroy_server(&self, guild_id: u64) -> Result<(), AppError> {
        let repo = GameServerRepository::new(self.db);

        let mirror = repo
            .find_by_guild_id(guild_id)
            .await?
            .ok_or_else(|| AppError::NotFound(format!("No game on guild {}", guild_id)))?;

        repo.set_playing(guild_id, false).await?;

        for (name, role) in &mirror.roles {
            if let Err(e) = self.platform.delete_role(guild_id, role.role_id).await {
                tracing::error!(
                    "Failed to delete role {} ({}) from guild {}: {:?}",
                    name,
                    role.role_id,
                    guild_id,
                    e
                );
            }
        }

        for (name, channel) in &mirror.channels {
            if let Err(e) = self.platform.delete_channel(channel.channel_id).await {
                tracing::error!(
                    "Failed to delete channel {} ({}) from guild {}: {:?}",
                    name,
                    channel.channel_id,
                    guild_id,
                    e
                );
            }
        }

        if let Some(category_id) = mirror.category.channel_id {
            if let Err(e) = self.platform.delete_channel(category_id).await {
                tracing::error!(
                    "Failed to delete category {} from guild {}: {:?}",
                    category_id,
                    guild_id,
                    e
                );
            }
        }

        repo.delete(guild_id).await?;

        tracing::info!(
            "Game removed from guild {}: {} roles, {} channels",
            guild_id,
            mirror.roles.len(),
            mirror.channels.len()
        );

        Ok(())
    }
}
