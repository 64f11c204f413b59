//! Game user factory for adding players to a test roster.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test `game_user` rows.
///
/// The referenced `game_server` row must already exist.
pub struct GameUserFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: String,
    user_id: u64,
    role_id: u64,
    contribution: i32,
}

impl<'a> GameUserFactory<'a> {
    /// Creates a new GameUserFactory for the given guild.
    ///
    /// Defaults:
    /// - user_id: auto-incremented
    /// - role_id: auto-incremented
    /// - contribution: `0`
    pub fn new(db: &'a DatabaseConnection, guild_id: impl Into<String>) -> Self {
        Self {
            db,
            guild_id: guild_id.into(),
            user_id: next_id(),
            role_id: next_id(),
            contribution: 0,
        }
    }

    pub fn user_id(mut self, user_id: u64) -> Self {
        self.user_id = user_id;
        self
    }

    pub fn role_id(mut self, role_id: u64) -> Self {
        self.role_id = role_id;
        self
    }

    pub fn contribution(mut self, contribution: i32) -> Self {
        self.contribution = contribution;
        self
    }

    /// Builds and inserts the player row into the database.
    pub async fn build(self) -> Result<entity::game_user::Model, DbErr> {
        entity::game_user::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id),
            user_id: ActiveValue::Set(self.user_id.to_string()),
            role_id: ActiveValue::Set(self.role_id.to_string()),
            contribution: ActiveValue::Set(self.contribution),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}
