//! Game server factory for creating test mirror rows.

use crate::factory::helpers::next_id;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test `game_server` rows with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// let server = GameServerFactory::new(&db)
///     .guild_id(987654321)
///     .needs_check(true)
///     .build()
///     .await?;
/// ```
pub struct GameServerFactory<'a> {
    db: &'a DatabaseConnection,
    guild_id: u64,
    playing: bool,
    needs_check: bool,
    everyone_role_id: Option<u64>,
    category_id: Option<u64>,
    category_name: String,
}

impl<'a> GameServerFactory<'a> {
    /// Creates a new GameServerFactory with default values.
    ///
    /// Defaults:
    /// - guild_id: auto-incremented
    /// - playing: `false`
    /// - needs_check: `false`
    /// - everyone_role_id: same as guild_id, as on Discord
    /// - category_id: `None`
    /// - category_name: `"Knights of Discord"`
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            guild_id: next_id(),
            playing: false,
            needs_check: false,
            everyone_role_id: None,
            category_id: None,
            category_name: "Knights of Discord".to_string(),
        }
    }

    pub fn guild_id(mut self, guild_id: u64) -> Self {
        self.guild_id = guild_id;
        self
    }

    pub fn playing(mut self, playing: bool) -> Self {
        self.playing = playing;
        self
    }

    pub fn needs_check(mut self, needs_check: bool) -> Self {
        self.needs_check = needs_check;
        self
    }

    pub fn everyone_role_id(mut self, role_id: u64) -> Self {
        self.everyone_role_id = Some(role_id);
        self
    }

    pub fn category_id(mut self, category_id: Option<u64>) -> Self {
        self.category_id = category_id;
        self
    }

    /// Builds and inserts the game server row into the database.
    ///
    /// # Returns
    /// - `Ok(entity::game_server::Model)` - Created row
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::game_server::Model, DbErr> {
        entity::game_server::ActiveModel {
            guild_id: ActiveValue::Set(self.guild_id.to_string()),
            playing: ActiveValue::Set(self.playing),
            needs_check: ActiveValue::Set(self.needs_check),
            everyone_role_id: ActiveValue::Set(
                self.everyone_role_id.unwrap_or(self.guild_id).to_string(),
            ),
            category_id: ActiveValue::Set(self.category_id.map(|id| id.to_string())),
            category_name: ActiveValue::Set(self.category_name),
            ..Default::default()
        }
        .insert(self.db)
        .await
    }
}

/// Creates a game server row with default values.
///
/// Shorthand for `GameServerFactory::new(db).build().await`.
pub async fn create_game_server(
    db: &DatabaseConnection,
) -> Result<entity::game_server::Model, DbErr> {
    GameServerFactory::new(db).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_game_server_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GameServer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let server = create_game_server(db).await?;

        assert!(!server.playing);
        assert_eq!(server.everyone_role_id, server.guild_id);
        assert!(server.category_id.is_none());

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_game_servers() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(GameServer)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let first = create_game_server(db).await?;
        let second = create_game_server(db).await?;

        assert_ne!(first.guild_id, second.guild_id);

        Ok(())
    }
}
