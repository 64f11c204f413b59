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
                    .table(GameRole::Table)
                    .if_not_exists()
                    .col(pk_auto(GameRole::Id))
                    .col(string(GameRole::GuildId))
                    .col(string(GameRole::Name))
                    .col(string(GameRole::RoleId))
                    .col(integer(GameRole::Tier))
                    .col(big_integer(GameRole::Permissions))
                    .col(boolean(GameRole::Hoist))
                    .col(boolean(GameRole::Mentionable))
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_game_role_guild_id")
                            .from(GameRole::Table, GameRole::GuildId)
                            .to(GameServer::Table, GameServer::GuildId)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .index(
                        Index::create()
                            .name("idx_game_role_unique")
                            .unique()
                            .col(GameRole::GuildId)
                            .col(GameRole::Name),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GameRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum GameRole {
    Table,
    Id,
    GuildId,
    Name,
    RoleId,
    Tier,
    Permissions,
    Hoist,
    Mentionable,
}
