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
                    .table(GameMessage::Table)
                    .if_not_exists()
                    .col(pk_auto(GameMessage::Id))
                    .col(string(GameMessage::GuildId))
                    .col(string(GameMessage::Name))
                    .col(string(GameMessage::MessageId))
                    .col(string(GameMessage::ChannelId))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_message_guild_id")
                            .from(GameMessage::Table, GameMessage::GuildId)
                            .to(GameServer::Table, GameServer::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_game_message_unique")
                            .unique()
                            .col(GameMessage::GuildId)
                            .col(GameMessage::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameMessage::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameMessage {
    Table,
    Id,
    GuildId,
    Name,
    MessageId,
    ChannelId,
}
