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
                    .table(GameUser::Table)
                    .if_not_exists()
                    .col(pk_auto(GameUser::Id))
                    .col(string(GameUser::GuildId))
                    .col(string(GameUser::UserId))
                    .col(string(GameUser::RoleId))
                    .col(integer(GameUser::Contribution).default(0))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_user_guild_id")
                            .from(GameUser::Table, GameUser::GuildId)
                            .to(GameServer::Table, GameServer::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_game_user_unique")
                            .unique()
                            .col(GameUser::GuildId)
                            .col(GameUser::UserId),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameUser::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameUser {
    Table,
    Id,
    GuildId,
    UserId,
    RoleId,
    Contribution,
}
