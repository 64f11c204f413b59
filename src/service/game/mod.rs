//! Game service owning a guild's live topology and its mirror.
//!
//! The service is organized into separate modules by concern:
//! - `build` - Materializing the template on a guild, plus the single-object
//!   creation steps reused by repairs
//! - `reconcile` - Repairing drift reported by role and channel events
//! - `teardown` - Deleting the topology and the mirror
//! - `roster` - Players joining and leaving

pub mod build;
pub mod reconcile;
pub mod roster;
pub mod teardown;

#[cfg(test)]
mod test;

use dioxus_logger::tracing;
use sea_orm::DatabaseConnection;

use crate::{
    data::game_server::GameServerRepository,
    error::AppError,
    model::{mirror::GuildMirror, template::Template},
    platform::Platform,
};

/// Service coordinating the template, the mirror store and the Discord gateway.
///
/// Every operation reads the mirror fresh from the store, issues its platform
/// calls one after another and writes the mirror back. Callers serialize
/// operations on the same guild through `GuildLocks`.
pub struct GameService<'a> {
    /// Database connection for mirror persistence
    db: &'a DatabaseConnection,
    /// Discord gateway receiving every mutation
    platform: &'a dyn Platform,
    /// Desired topology shared by all guilds
    template: &'a Template,
}

impl<'a> GameService<'a> {
    /// Creates a new GameService instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    /// - `platform` - Discord gateway implementation
    /// - `template` - Game template loaded at startup
    pub fn new(
        db: &'a DatabaseConnection,
        platform: &'a dyn Platform,
        template: &'a Template,
    ) -> Self {
        Self {
            db,
            platform,
            template,
        }
    }

    /// Loads the mirror of a guild if a game is running on it.
    ///
    /// # Returns
    /// - `Ok(Some(GuildMirror))` - Mirror of a playing guild
    /// - `Ok(None)` - No mirror, or the game is not running
    /// - `Err(AppError::DbErr)` - Database error loading the mirror
    async fn load_playing(&self, guild_id: u64) -> Result<Option<GuildMirror>, AppError> {
        let repo = GameServerRepository::new(self.db);

        match repo.find_by_guild_id(guild_id).await? {
            Some(mirror) if mirror.playing => Ok(Some(mirror)),
            Some(_) => {
                tracing::debug!("Guild {} is not playing, ignoring event", guild_id);
                Ok(None)
            }
            None => {
                tracing::debug!("Guild {} has no game, ignoring event", guild_id);
                Ok(None)
            }
        }
    }

    /// Persists the mirror, then hands back the outcome of the platform work that
    /// preceded it.
    ///
    /// Platform objects created before a failure are recorded so the next repair
    /// reuses them.
    async fn save_then<T>(
        &self,
        mirror: &GuildMirror,
        outcome: Result<T, AppError>,
    ) -> Result<T, AppError> {
        let repo = GameServerRepository::new(self.db);

        if let Err(e) = repo.save(mirror).await {
            tracing::error!(
                "Failed to save mirror of guild {}: {:?}",
                mirror.guild_id,
                e
            );
            outcome?;
            return Err(e.into());
        }

        outcome
    }
}
