//! Game server repository for mirror persistence.
//!
//! This module provides the `GameServerRepository`, the store behind every guild's
//! mirror. A mirror is spread over one `game_server` row and its child rows (roles,
//! channels, overwrites, messages, players). Reads assemble the whole mirror; writes
//! are idempotent upserts keyed by guild ID and default name so a retried build
//! converges instead of duplicating rows.

use migration::OnConflict;
use sea_orm::{
    sea_query::Expr, ActiveValue, ColumnTrait, ConnectionTrait, DatabaseConnection, DbErr,
    EntityTrait, QueryFilter, TransactionTrait,
};

use crate::model::mirror::{GamePlayer, GuildMirror};

/// Repository for guild mirror database operations.
pub struct GameServerRepository<'a> {
    /// Database connection for executing queries.
    db: &'a DatabaseConnection,
}

impl<'a> GameServerRepository<'a> {
    /// Creates a new repository instance.
    ///
    /// # Arguments
    /// - `db` - Database connection for executing queries
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Loads the mirror of a guild.
    ///
    /// # Arguments
    /// - `guild_id` - Discord guild ID
    ///
    /// # Returns
    /// - `Ok(Some(GuildMirror))` - Mirror with all child rows attached
    /// - `Ok(None)` - No game has been recorded for this guild
    /// - `Err(DbErr)` - Database error or unparsable stored ID
    pub async fn find_by_guild_id(&self, guild_id: u64) -> Result<Option<GuildMirror>, DbErr> {
        let key = guild_id.to_string();

        let Some(server) = entity::prelude::GameServer::find()
            .filter(entity::game_server::Column::GuildId.eq(&key))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let roles = entity::prelude::GameRole::find()
            .filter(entity::game_role::Column::GuildId.eq(&key))
            .all(self.db)
            .await?;
        let channels = entity::prelude::GameChannel::find()
            .filter(entity::game_channel::Column::GuildId.eq(&key))
            .all(self.db)
            .await?;
        let overwrites = entity::prelude::GameChannelOverwrite::find()
            .filter(entity::game_channel_overwrite::Column::GuildId.eq(&key))
            .all(self.db)
            .await?;
        let messages = entity::prelude::GameMessage::find()
            .filter(entity::game_message::Column::GuildId.eq(&key))
            .all(self.db)
            .await?;
        let users = entity::prelude::GameUser::find()
            .filter(entity::game_user::Column::GuildId.eq(&key))
            .all(self.db)
            .await?;

        GuildMirror::from_entities(server, roles, channels, overwrites, messages, users).map(Some)
    }

    /// Records a mirror for a guild that has none yet.
    ///
    /// # Returns
    /// - `Ok(())` - Mirror and all its child rows inserted
    /// - `Err(DbErr::Custom)` - A mirror already exists for the guild
    /// - `Err(DbErr)` - Database error during insert
    pub async fn create(&self, mirror: &GuildMirror) -> Result<(), DbErr> {
        let exists = entity::prelude::GameServer::find()
            .filter(entity::game_server::Column::GuildId.eq(mirror.guild_id.to_string()))
            .one(self.db)
            .await?
            .is_some();

        if exists {
            return Err(DbErr::Custom(format!(
                "Game server for guild {} already exists",
                mirror.guild_id
            )));
        }

        self.save(mirror).await
    }

    /// Writes the complete mirror, replacing any previously stored state.
    ///
    /// The server row is upserted on guild ID and all child rows are rewritten
    /// inside a single transaction.
    pub async fn save(&self, mirror: &GuildMirror) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let key = mirror.guild_id.to_string();

        entity::prelude::GameServer::insert(entity::game_server::ActiveModel {
            guild_id: ActiveValue::Set(key.clone()),
            playing: ActiveValue::Set(mirror.playing),
            needs_check: ActiveValue::Set(mirror.needs_check),
            everyone_role_id: ActiveValue::Set(mirror.everyone_role_id.to_string()),
            category_id: ActiveValue::Set(mirror.category.channel_id.map(|id| id.to_string())),
            category_name: ActiveValue::Set(mirror.category.name.clone()),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::game_server::Column::GuildId)
                .update_columns([
                    entity::game_server::Column::Playing,
                    entity::game_server::Column::NeedsCheck,
                    entity::game_server::Column::EveryoneRoleId,
                    entity::game_server::Column::CategoryId,
                    entity::game_server::Column::CategoryName,
                ])
                .to_owned(),
        )
        .exec(&txn)
        .await?;

        delete_children(&txn, &key).await?;

        let roles: Vec<_> = mirror
            .roles
            .iter()
            .map(|(name, role)| entity::game_role::ActiveModel {
                guild_id: ActiveValue::Set(key.clone()),
                name: ActiveValue::Set(name.clone()),
                role_id: ActiveValue::Set(role.role_id.to_string()),
                tier: ActiveValue::Set(role.tier),
                permissions: ActiveValue::Set(role.permissions as i64),
                hoist: ActiveValue::Set(role.hoist),
                mentionable: ActiveValue::Set(role.mentionable),
                ..Default::default()
            })
            .collect();
        if !roles.is_empty() {
            entity::prelude::GameRole::insert_many(roles)
                .exec(&txn)
                .await?;
        }

        let mut channels = Vec::new();
        let mut overwrites = Vec::new();
        for (name, channel) in &mirror.channels {
            channels.push(entity::game_channel::ActiveModel {
                guild_id: ActiveValue::Set(key.clone()),
                name: ActiveValue::Set(name.clone()),
                channel_id: ActiveValue::Set(channel.channel_id.to_string()),
                tier: ActiveValue::Set(channel.tier),
                kind: ActiveValue::Set(channel.kind.as_str().to_string()),
                position: ActiveValue::Set(channel.position as i32),
                allow: ActiveValue::Set(channel.allow as i64),
                deny: ActiveValue::Set(channel.deny as i64),
                ..Default::default()
            });

            for overwrite in &channel.overwrites {
                overwrites.push(entity::game_channel_overwrite::ActiveModel {
                    guild_id: ActiveValue::Set(key.clone()),
                    channel_name: ActiveValue::Set(name.clone()),
                    target_id: ActiveValue::Set(overwrite.target.id().to_string()),
                    target_kind: ActiveValue::Set(overwrite.target.kind().to_string()),
                    allow: ActiveValue::Set(overwrite.allow as i64),
                    deny: ActiveValue::Set(overwrite.deny as i64),
                    ..Default::default()
                });
            }
        }
        if !channels.is_empty() {
            entity::prelude::GameChannel::insert_many(channels)
                .exec(&txn)
                .await?;
        }
        if !overwrites.is_empty() {
            entity::prelude::GameChannelOverwrite::insert_many(overwrites)
                .exec(&txn)
                .await?;
        }

        let messages: Vec<_> = mirror
            .messages
            .iter()
            .map(|(name, message)| entity::game_message::ActiveModel {
                guild_id: ActiveValue::Set(key.clone()),
                name: ActiveValue::Set(name.clone()),
                message_id: ActiveValue::Set(message.message_id.to_string()),
                channel_id: ActiveValue::Set(message.channel_id.to_string()),
                ..Default::default()
            })
            .collect();
        if !messages.is_empty() {
            entity::prelude::GameMessage::insert_many(messages)
                .exec(&txn)
                .await?;
        }

        let users: Vec<_> = mirror
            .players
            .iter()
            .map(|player| player_model(&key, player))
            .collect();
        if !users.is_empty() {
            entity::prelude::GameUser::insert_many(users)
                .exec(&txn)
                .await?;
        }

        txn.commit().await
    }

    /// Starts or stops the game without touching the rest of the mirror.
    pub async fn set_playing(&self, guild_id: u64, playing: bool) -> Result<(), DbErr> {
        entity::prelude::GameServer::update_many()
            .col_expr(entity::game_server::Column::Playing, Expr::value(playing))
            .filter(entity::game_server::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets or clears the integrity check flag of one guild.
    pub async fn set_needs_check(&self, guild_id: u64, needs_check: bool) -> Result<(), DbErr> {
        entity::prelude::GameServer::update_many()
            .col_expr(
                entity::game_server::Column::NeedsCheck,
                Expr::value(needs_check),
            )
            .filter(entity::game_server::Column::GuildId.eq(guild_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Sets the integrity check flag on every stored guild.
    ///
    /// Called once at startup so each guild is checked against its mirror when it
    /// next becomes available.
    ///
    /// # Returns
    /// - `Ok(u64)` - Number of guilds flagged
    /// - `Err(DbErr)` - Database error during update
    pub async fn flag_all_unchecked(&self, needs_check: bool) -> Result<u64, DbErr> {
        let result = entity::prelude::GameServer::update_many()
            .col_expr(
                entity::game_server::Column::NeedsCheck,
                Expr::value(needs_check),
            )
            .exec(self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// Deletes a guild's mirror and all of its child rows.
    pub async fn delete(&self, guild_id: u64) -> Result<(), DbErr> {
        let txn = self.db.begin().await?;
        let key = guild_id.to_string();

        delete_children(&txn, &key).await?;
        entity::prelude::GameServer::delete_many()
            .filter(entity::game_server::Column::GuildId.eq(&key))
            .exec(&txn)
            .await?;

        txn.commit().await
    }

    /// Adds a player to the guild's roster.
    pub async fn add_user(&self, guild_id: u64, player: &GamePlayer) -> Result<(), DbErr> {
        entity::prelude::GameUser::insert(player_model(&guild_id.to_string(), player))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Removes a player from the guild's roster.
    ///
    /// # Returns
    /// - `Ok(true)` - The player was on the roster and has been removed
    /// - `Ok(false)` - The user was not playing
    /// - `Err(DbErr)` - Database error during deletion
    pub async fn remove_user(&self, guild_id: u64, user_id: u64) -> Result<bool, DbErr> {
        let result = entity::prelude::GameUser::delete_many()
            .filter(entity::game_user::Column::GuildId.eq(guild_id.to_string()))
            .filter(entity::game_user::Column::UserId.eq(user_id.to_string()))
            .exec(self.db)
            .await?;
        Ok(result.rows_affected > 0)
    }
}

fn player_model(guild_id: &str, player: &GamePlayer) -> entity::game_user::ActiveModel {
    entity::game_user::ActiveModel {
        guild_id: ActiveValue::Set(guild_id.to_string()),
        user_id: ActiveValue::Set(player.user_id.to_string()),
        role_id: ActiveValue::Set(player.role_id.to_string()),
        contribution: ActiveValue::Set(player.contribution),
        ..Default::default()
    }
}

async fn delete_children<C: ConnectionTrait>(conn: &C, guild_id: &str) -> Result<(), DbErr> {
    entity::prelude::GameChannelOverwrite::delete_many()
        .filter(entity::game_channel_overwrite::Column::GuildId.eq(guild_id))
        .exec(conn)
        .await?;
    entity::prelude::GameChannel::delete_many()
        .filter(entity::game_channel::Column::GuildId.eq(guild_id))
        .exec(conn)
        .await?;
    entity::prelude::GameRole::delete_many()
        .filter(entity::game_role::Column::GuildId.eq(guild_id))
        .exec(conn)
        .await?;
    entity::prelude::GameMessage::delete_many()
        .filter(entity::game_message::Column::GuildId.eq(guild_id))
        .exec(conn)
        .await?;
    entity::prelude::GameUser::delete_many()
        .filter(entity::game_user::Column::GuildId.eq(guild_id))
        .exec(conn)
        .await?;
    Ok(())
}
