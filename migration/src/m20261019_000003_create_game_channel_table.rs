use sea_orm_migration::{prelude::*, schema::*};

use super::m20261019_000001_create_game_server_table::GameServer;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(GameChannel::Table)
                    .if_not_exists()
                    .col(pk_auto(GameChannel::Id))
                    .col(string(GameChannel::GuildId))
                    .col(string(GameChannel::Name))
                    .col(string(GameChannel::ChannelId))
                    .col(integer(GameChannel::Tier))
                    .col(string(GameChannel::Kind))
                    .col(integer(GameChannel::Position))
                    .col(big_integer(GameChannel::Allow))
                    .col(big_integer(GameChannel::Deny))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_channel_guild_id")
                            .from(GameChannel::Table, GameChannel::GuildId)
                            .to(GameServer::Table, GameServer::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_game_channel_unique")
                            .unique()
                            .col(GameChannel::GuildId)
                            .col(GameChannel::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameChannel::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameChannel {
    Table,
    Id,
    GuildId,
    Name,
    ChannelId,
    Tier,
    Kind,
    Position,
    Allow,
    Deny,
}
