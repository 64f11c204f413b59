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
                    .table(GameChannelOverwrite::Table)
                    .if_not_exists()
                    .col(pk_auto(GameChannelOverwrite::Id))
                    .col(string(GameChannelOverwrite::GuildId))
                    .col(string(GameChannelOverwrite::ChannelName))
                    .col(string(GameChannelOverwrite::TargetId))
                    .col(string(GameChannelOverwrite::TargetKind))
                    .col(big_integer(GameChannelOverwrite::Allow))
                    .col(big_integer(GameChannelOverwrite::Deny))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_channel_overwrite_guild_id")
                            .from(GameChannelOverwrite::Table, GameChannelOverwrite::GuildId)
                            .to(GameServer::Table, GameServer::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_game_channel_overwrite_unique")
                            .unique()
                            .col(GameChannelOverwrite::GuildId)
                            .col(GameChannelOverwrite::ChannelName)
                            .col(GameChannelOverwrite::TargetId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameChannelOverwrite::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameChannelOverwrite {
    Table,
    Id,
    GuildId,
    ChannelName,
    TargetId,
    TargetKind,
    Allow,
    Deny,
}
