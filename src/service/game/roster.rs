//! Players joining and leaving the game.

use dioxus_logger::tracing;

use crate::{
    data::game_server::GameServerRepository,
    error::AppError,
    model::mirror::GamePlayer,
};

use super::GameService;

const WELCOME_MESSAGE: &str =
    "Welcome to Knights of Discord! You start out as a villager; the castle awaits.";

/// Result of a join request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JoinOutcome {
    Joined,
    AlreadyPlaying,
    /// The guild has no running game.
    NotPlaying,
}

impl<'a> GameService<'a> {
    /// Adds a user to the roster and gives them the entry role.
    ///
    /// The welcome direct message is best effort; users who block DMs still join.
    ///
    /// # Returns
    /// - `Ok(JoinOutcome)` - Whether the user joined
    /// - `Err(AppError::NotFound)` - The join role is missing from the mirror
    /// - `Err(AppError::PlatformErr)` - The role could not be assigned
    /// - `Err(AppError::DbErr)` - The roster could not be read or written
    pub async fn join(&self, guild_id: u64, user_id: u64) -> Result<JoinOutcome, AppError> {
        let Some(mirror) = self.load_playing(guild_id).await? else {
            return Ok(JoinOutcome::NotPlaying);
        };
        if mirror.player(user_id).is_some() {
            return Ok(JoinOutcome::AlreadyPlaying);
        }

        let role_id = self
            .template
            .join_role()
            .and_then(|role| mirror.role(&role.name))
            .map(|role| role.role_id)
            .ok_or_else(|| AppError::NotFound(format!("Join role of guild {}", guild_id)))?;

        self.platform
            .add_member_role(guild_id, user_id, role_id)
            .await?;

        let repo = GameServerRepository::new(self.db);
        repo.add_user(
            guild_id,
            &GamePlayer {
                user_id,
                role_id,
                contribution: 0,
            },
        )
        .await?;

        if let Err(e) = self.platform.direct_message(user_id, WELCOME_MESSAGE).await {
            tracing::warn!("Failed to send welcome message to {}: {:?}", user_id, e);
        }

        tracing::info!("User {} joined the game on guild {}", user_id, guild_id);
        Ok(JoinOutcome::Joined)
    }

    /// Removes a user from the roster and takes their game role away.
    ///
    /// # Returns
    /// - `Ok(true)` - The user was playing and has left
    /// - `Ok(false)` - The user was not on the roster
    /// - `Err(AppError::DbErr)` - The roster could not be read or written
    pub async fn leave(&self, guild_id: u64, user_id: u64) -> Result<bool, AppError> {
        let repo = GameServerRepository::new(self.db);

        let Some(mirror) = repo.find_by_guild_id(guild_id).await? else {
            return Ok(false);
        };
        let Some(player) = mirror.player(user_id) else {
            return Ok(false);
        };

        repo.remove_user(guild_id, user_id).await?;

        if let Err(e) = self
            .platform
            .remove_member_role(guild_id, user_id, player.role_id)
            .await
        {
            tracing::error!(
                "Failed to remove role {} from user {}: {:?}",
                player.role_id,
                user_id,
                e
            );
        }

        tracing::info!("User {} left the game on guild {}", user_id, guild_id);
        Ok(true)
    }
}
